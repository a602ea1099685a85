//! Colors, colormaps, line/fill/marker/text styles and themes.

pub mod color;
pub mod colormap;
pub mod fill_style;
pub mod line_style;
pub mod marker;
pub mod text_style;
pub mod theme;

pub use color::Color;
pub use colormap::Colormap;
pub use fill_style::FillStyle;
pub use line_style::{DashPattern, LineStyle};
pub use marker::{Marker, MarkerStyle};
pub use text_style::{FontWeight, TextAnchor, TextStyle};
pub use theme::{Theme, ThemeConfig};
