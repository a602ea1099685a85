//! Minimal matplotlib-like plotting with SVG output.
//! Line, heatmap, shaded-region and reference-line plots on a grid of
//! axes.

pub mod axes;
pub mod backend;
pub mod data;
pub mod element;
pub mod error;
pub mod figure;
pub mod plot;
pub mod scale;
pub mod style;

pub use axes::Axes;
pub use data::IntoPlotData;
pub use element::Bounds;
pub use error::{PlotError, PlotResult};
pub use figure::Figure;
pub use plot::{FillBetween, LinePlot, MeshPlot, Plot, VLine};
pub use scale::{LinearScale, Scale};
pub use style::{
    Color, Colormap, DashPattern, FillStyle, LineStyle, Marker, MarkerStyle, TextStyle, Theme,
    ThemeConfig,
};

