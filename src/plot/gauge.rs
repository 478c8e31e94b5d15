//! Gauge time series figures.

use std::path::Path;

use crate::gauge::{GaugeLocation, SeriesTable, Windowed};
use crate::plot::axis::AxisLimits;
use crate::plot::figure::{Background, Curve, Figure, Panel, RefLine};
use crate::plot::style;

/// Everything needed to draw the panels of one gauge file
#[derive(Debug, Clone, Copy)]
pub struct GaugePlot<'a> {
    pub windowed: &'a Windowed,
    pub locations: &'a [GaugeLocation],
    /// Subtracted from simulation and theory values
    pub offset: f64,
    /// Theory table, already cut to the window
    pub theory: Option<&'a SeriesTable>,
    /// Experimental table, neither windowed nor shifted
    pub experiment: Option<&'a SeriesTable>,
    pub y_label: &'a str,
    pub limits: AxisLimits,
}

impl<'a> GaugePlot<'a> {
    pub fn gauge_count(&self) -> usize {
        self.windowed.table.gauge_count()
    }

    /// `G{i} at x = {x}` with two decimals
    pub fn title(&self, gauge: usize) -> String {
        match gauge.checked_sub(1).and_then(|i| self.locations.get(i)) {
            Some(loc) => format!("G{gauge} at x = {:.2}", loc.x),
            None => format!("G{gauge}"),
        }
    }

    /// Panel of a 1-based gauge number
    pub fn panel(&self, gauge: usize, legend: bool) -> Panel {
        let stats = &self.windowed.stats;
        let mut curves = Vec::new();

        if let Some(points) = self.experiment.and_then(|t| t.gauge_series(gauge, 0.0)) {
            curves.push(Curve::dashed("exp", points, style::REFERENCE));
        }
        if let Some(points) = self.windowed.table.gauge_series(gauge, self.offset) {
            curves.push(Curve::solid("num", points, style::SIMULATION));
        }
        if let Some(points) = self.theory.and_then(|t| t.gauge_series(gauge, self.offset)) {
            curves.push(Curve::dashed("theory", points, style::REFERENCE));
        }

        Panel {
            title: Some(self.title(gauge)),
            x_label: "t [s]".to_string(),
            y_label: self.y_label.to_string(),
            curves,
            ref_lines: vec![RefLine::horizontal(
                0.0,
                Some((stats.min_time, stats.max_time)),
                style::REFERENCE,
            )],
            x_limits: self.limits.resolve_x(stats.max_time),
            y_limits: self.limits.y,
            legend,
            background: Background::Shaded,
        }
    }

    /// One gauge on its own, 15 cm x 5 cm
    pub fn single_figure(&self, gauge: usize, path: &Path) -> Figure {
        let (w, h) = style::GAUGE_PANEL_CM;
        Figure::single(path, style::cm(w, h), self.panel(gauge, true))
    }

    /// Every gauge stacked on a shared time axis, legend on the top panel
    pub fn column_figure(&self, path: &Path) -> Figure {
        let n = self.gauge_count();
        let (w, h) = style::GAUGE_PANEL_CM;
        let panels = (1..=n).map(|g| self.panel(g, g == 1)).collect();
        Figure::stacked(path, style::cm(w, h * n.max(1) as f64), panels)
    }
}
