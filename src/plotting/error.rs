//! Error type shared by the plotting layer and the figure builders.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PlotError {
    /// Writing a rendered figure failed
    Io(io::Error),
    /// Two 1-D inputs that must pair up element by element do not
    LengthMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    /// A 2-D grid does not match the `(rows, cols)` given by its axes
    ShapeMismatch {
        context: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Input values are unusable (unordered axes, no finite values)
    InvalidData(String),
    /// A parameter or configuration value is out of range
    InvalidConfig(String),
    /// A figure was assembled in an order that cannot be rendered
    RenderError(String),
    /// An input that must be non-empty was empty
    EmptyData,
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "could not write figure: {}", err),
            PlotError::LengthMismatch {
                context,
                expected,
                found,
            } => write!(f, "{}: expected {} values, found {}", context, expected, found),
            PlotError::ShapeMismatch {
                context,
                expected,
                found,
            } => write!(
                f,
                "{}: expected shape {}x{}, found {}x{}",
                context, expected.0, expected.1, found.0, found.1
            ),
            PlotError::InvalidData(msg) => write!(f, "invalid data: {}", msg),
            PlotError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            PlotError::RenderError(msg) => write!(f, "cannot render figure: {}", msg),
            PlotError::EmptyData => write!(f, "no data to plot"),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

pub type PlotResult<T> = Result<T, PlotError>;

/// `Ok` when `found == expected`.
pub(crate) fn check_len(context: &'static str, expected: usize, found: usize) -> PlotResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(PlotError::LengthMismatch {
            context,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = check_len("y", 4, 2).unwrap_err();
        assert_eq!(err.to_string(), "y: expected 4 values, found 2");

        let err = PlotError::ShapeMismatch {
            context: "posterior mass",
            expected: (3, 2),
            found: (2, 3),
        };
        assert_eq!(err.to_string(), "posterior mass: expected shape 3x2, found 2x3");
        assert!(check_len("x", 1, 1).is_ok());
    }

    #[test]
    fn test_io_source() {
        use std::error::Error;
        let err = PlotError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
        assert!(PlotError::EmptyData.source().is_none());
    }
}
