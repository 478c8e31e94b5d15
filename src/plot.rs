// Plot rendering
//
// Figures are described as plain data (figure.rs), rendered to SVG strings in
// memory and written in one go once a report has rendered everything.
// - gauge.rs: time series of one or all gauges
// - log.rs: main log and sediment time history
// - profile.rs: sedline / wsfline snapshots along x

pub mod axis;
pub mod clip;
pub mod figure;
pub mod gauge;
pub mod log;
pub mod profile;
pub mod style;

use std::path::PathBuf;
use thiserror::Error;

pub use axis::AxisLimits;
pub use figure::{write_figures, Curve, Figure, Panel, RefLine, RenderedFigure};
pub use gauge::GaugePlot;
pub use profile::Offsets;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Figure {0} has no panels")]
    NoPanels(PathBuf),

    #[error("Drawing failed: {0}")]
    Drawing(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render every figure, failing on the first error
///
/// Nothing is written here; pass the result to [`write_figures`].
pub fn render_all<'a>(
    figures: impl IntoIterator<Item = &'a Figure>,
) -> Result<Vec<RenderedFigure>, RenderError> {
    figures.into_iter().map(Figure::render).collect()
}
