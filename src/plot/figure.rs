//! Figure model and SVG rendering.
//!
//! A [`Figure`] is a column of [`Panel`]s. Rendering produces the SVG text in
//! memory; [`write_figures`] puts a finished set on disk.

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::plot::axis::{chart_range, Extent};
use crate::plot::clip::clip_polyline;
use crate::plot::style;
use crate::plot::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// A labelled data curve
#[derive(Debug, Clone)]
pub struct Curve {
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub width: u32,
    pub line: LineStyle,
}

impl Curve {
    pub fn solid(label: impl Into<String>, points: Vec<(f64, f64)>, color: RGBColor) -> Self {
        Self {
            label: Some(label.into()),
            points,
            color,
            width: 1,
            line: LineStyle::Solid,
        }
    }

    pub fn dashed(label: impl Into<String>, points: Vec<(f64, f64)>, color: RGBColor) -> Self {
        Self {
            line: LineStyle::Dashed,
            ..Self::solid(label, points, color)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guide {
    /// Horizontal line at `y`; `span = None` runs across the whole x range
    Horizontal { y: f64, span: Option<(f64, f64)> },
    Vertical { x: f64 },
}

/// Dashed orientation line
#[derive(Debug, Clone)]
pub struct RefLine {
    pub guide: Guide,
    pub label: Option<String>,
    pub color: RGBColor,
    pub width: u32,
}

impl RefLine {
    pub fn horizontal(y: f64, span: Option<(f64, f64)>, color: RGBColor) -> Self {
        Self {
            guide: Guide::Horizontal { y, span },
            label: None,
            color,
            width: 1,
        }
    }

    pub fn vertical(x: f64, color: RGBColor) -> Self {
        Self {
            guide: Guide::Vertical { x },
            label: None,
            color,
            width: 1,
        }
    }

    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    /// Grey panel with white grid
    #[default]
    Shaded,
    /// White panel with grey grid
    Plain,
}

/// One set of axes
#[derive(Debug, Clone, Default)]
pub struct Panel {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub curves: Vec<Curve>,
    pub ref_lines: Vec<RefLine>,
    pub x_limits: Option<(f64, f64)>,
    pub y_limits: Option<(f64, f64)>,
    pub legend: bool,
    pub background: Background,
}

impl Panel {
    fn data_x(&self) -> Option<Extent> {
        let curves = Extent::of(self.curves.iter().flat_map(|c| c.points.iter().map(|p| p.0)));
        let guides = Extent::of(self.ref_lines.iter().flat_map(|r| match r.guide {
            Guide::Horizontal {
                span: Some((a, b)), ..
            } => vec![a, b],
            Guide::Horizontal { span: None, .. } => vec![],
            Guide::Vertical { x } => vec![x],
        }));
        Extent::union(curves, guides)
    }

    fn data_y(&self) -> Option<Extent> {
        let curves = Extent::of(self.curves.iter().flat_map(|c| c.points.iter().map(|p| p.1)));
        let guides = Extent::of(self.ref_lines.iter().filter_map(|r| match r.guide {
            Guide::Horizontal { y, .. } => Some(y),
            Guide::Vertical { .. } => None,
        }));
        Extent::union(curves, guides)
    }

    fn has_labels(&self) -> bool {
        self.curves
            .iter()
            .any(|c| c.label.is_some() && !c.points.is_empty())
            || self.ref_lines.iter().any(|r| r.label.is_some())
    }
}

/// A figure: panels stacked top to bottom
#[derive(Debug, Clone)]
pub struct Figure {
    pub path: PathBuf,
    pub size: (u32, u32),
    pub panels: Vec<Panel>,
    /// Use one x range for all panels and label only the bottom x axis
    pub share_x: bool,
}

/// A figure rendered to SVG, not yet written
#[derive(Debug, Clone)]
pub struct RenderedFigure {
    pub path: PathBuf,
    pub svg: String,
}

fn drawing_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Drawing(err.to_string())
}

impl Figure {
    pub fn single(path: impl Into<PathBuf>, size: (u32, u32), panel: Panel) -> Self {
        Self {
            path: path.into(),
            size,
            panels: vec![panel],
            share_x: false,
        }
    }

    pub fn stacked(path: impl Into<PathBuf>, size: (u32, u32), panels: Vec<Panel>) -> Self {
        Self {
            path: path.into(),
            size,
            panels,
            share_x: true,
        }
    }

    /// x range of each panel
    fn x_ranges(&self) -> Vec<Range<f64>> {
        let shared = if self.share_x {
            self.panels
                .iter()
                .map(Panel::data_x)
                .fold(None, Extent::union)
        } else {
            None
        };
        self.panels
            .iter()
            .map(|p| {
                let data = if self.share_x { shared } else { p.data_x() };
                chart_range(p.x_limits, data, false)
            })
            .collect()
    }

    pub fn render(&self) -> Result<RenderedFigure, RenderError> {
        if self.panels.is_empty() {
            return Err(RenderError::NoPanels(self.path.clone()));
        }
        let x_ranges = self.x_ranges();
        let last = self.panels.len() - 1;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(drawing_error)?;

            let areas = root.split_evenly((self.panels.len(), 1));
            for (idx, (panel, area)) in self.panels.iter().zip(areas.iter()).enumerate() {
                let y_range = chart_range(panel.y_limits, panel.data_y(), true);
                let show_x_label = !self.share_x || idx == last;
                draw_panel(area, panel, x_ranges[idx].clone(), y_range, show_x_label)?;
            }
            root.present().map_err(drawing_error)?;
        }

        debug!("Rendered {} ({} bytes)", self.path.display(), svg.len());
        Ok(RenderedFigure {
            path: self.path.clone(),
            svg,
        })
    }
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    x: Range<f64>,
    y: Range<f64>,
    show_x_label: bool,
) -> Result<(), RenderError> {
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(12)
        .x_label_area_size(if show_x_label { 45 } else { 25 })
        .y_label_area_size(65);
    if let Some(title) = &panel.title {
        builder.caption(title, (style::FONT, style::TITLE_FONT_SIZE));
    }
    let mut chart = builder
        .build_cartesian_2d(x.clone(), y.clone())
        .map_err(drawing_error)?;

    let (fill, grid) = match panel.background {
        Background::Shaded => (style::PANEL_BACKGROUND, style::GRID),
        Background::Plain => (WHITE, style::PLAIN_GRID),
    };
    chart.plotting_area().fill(&fill).map_err(drawing_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.bold_line_style(grid.stroke_width(1))
        .light_line_style(fill)
        .label_style((style::FONT, style::LABEL_FONT_SIZE))
        .y_desc(panel.y_label.as_str());
    if show_x_label {
        mesh.x_desc(panel.x_label.as_str());
    }
    mesh.draw().map_err(drawing_error)?;

    for curve in &panel.curves {
        let pieces = clip_polyline(&curve.points, &x, &y);
        let stroke = curve.color.stroke_width(curve.width);
        for (n, piece) in pieces.into_iter().enumerate() {
            let anno = if curve.line == LineStyle::Dashed && piece.len() > 1 {
                chart.draw_series(DashedLineSeries::new(
                    piece,
                    style::DASH.0,
                    style::DASH.1,
                    stroke,
                ))
            } else {
                chart.draw_series(LineSeries::new(piece, stroke))
            }
            .map_err(drawing_error)?;

            if let (0, Some(label)) = (n, &curve.label) {
                let color = curve.color;
                anno.label(label.as_str()).legend(move |(lx, ly)| {
                    PathElement::new(vec![(lx, ly), (lx + 20, ly)], color.stroke_width(2))
                });
            }
        }
    }

    for line in &panel.ref_lines {
        let points = match line.guide {
            Guide::Horizontal { y: at, span } => {
                let (a, b) = span.unwrap_or((x.start, x.end));
                vec![(a, at), (b, at)]
            }
            Guide::Vertical { x: at } => vec![(at, y.start), (at, y.end)],
        };
        let stroke = line.color.stroke_width(line.width);
        for (n, piece) in clip_polyline(&points, &x, &y).into_iter().enumerate() {
            let anno = chart
                .draw_series(DashedLineSeries::new(
                    piece,
                    style::DASH.0,
                    style::DASH.1,
                    stroke,
                ))
                .map_err(drawing_error)?;
            if let (0, Some(label)) = (n, &line.label) {
                let color = line.color;
                anno.label(label.as_str()).legend(move |(lx, ly)| {
                    PathElement::new(vec![(lx, ly), (lx + 20, ly)], color.stroke_width(2))
                });
            }
        }
    }

    if panel.legend && panel.has_labels() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .label_font((style::FONT, style::LABEL_FONT_SIZE))
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(drawing_error)?;
    }

    Ok(())
}

/// Write rendered figures, creating their directories
///
/// Existing files are overwritten.
pub fn write_figures(figures: &[RenderedFigure]) -> Result<Vec<PathBuf>, RenderError> {
    let mut written = Vec::with_capacity(figures.len());
    for figure in figures {
        if let Some(dir) = figure.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            create_dir(dir)?;
        }
        fs::write(&figure.path, &figure.svg).map_err(|source| RenderError::Write {
            path: figure.path.clone(),
            source,
        })?;
        info!("Plot saved: {}", figure.path.display());
        written.push(figure.path.clone());
    }
    Ok(written)
}

fn create_dir(dir: &Path) -> Result<(), RenderError> {
    fs::create_dir_all(dir).map_err(|source| RenderError::Write {
        path: dir.to_path_buf(),
        source,
    })
}
