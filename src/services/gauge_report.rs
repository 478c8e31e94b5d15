use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::case::{CaseLayout, SolverMode};
use crate::gauge::{
    read_reference_table, read_series_file, GaugeLocation, ReducedStats, TimeWindow,
};
use crate::plot::{write_figures, AxisLimits, Figure, GaugePlot, RenderedFigure};
use crate::services::error::ReportError;

/// What a gauge file measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeQuantity {
    /// Free surface elevation (`*-WSF-HG.dat`)
    WaveElevation,
    /// Bed shear stress (`*-Sediment-Bedshear.dat`)
    BedShear,
}

impl GaugeQuantity {
    pub fn y_label(&self) -> &'static str {
        match self {
            GaugeQuantity::WaveElevation => "η [m]",
            GaugeQuantity::BedShear => "τb [N/m²]",
        }
    }

    pub fn gauge_file(&self, layout: &CaseLayout, mode: SolverMode) -> PathBuf {
        match self {
            GaugeQuantity::WaveElevation => layout.wave_gauge_file(mode),
            GaugeQuantity::BedShear => layout.bedshear_gauge_file(mode),
        }
    }

    pub fn output_dir(&self, layout: &CaseLayout) -> PathBuf {
        match self {
            GaugeQuantity::WaveElevation => layout.wave_output_dir(),
            GaugeQuantity::BedShear => layout.sediment_output_dir(),
        }
    }

    /// File name of the plot of a single 1-based gauge
    pub fn single_file_name(&self, gauge: usize) -> String {
        match self {
            GaugeQuantity::WaveElevation => format!("Gauge_{gauge}.svg"),
            GaugeQuantity::BedShear => format!("gauge_bedshear_{gauge}.svg"),
        }
    }

    pub fn column_file_name(&self) -> &'static str {
        match self {
            GaugeQuantity::WaveElevation => "All_Gauges.svg",
            GaugeQuantity::BedShear => "all_gauge_bedshear.svg",
        }
    }

    /// Value subtracted from simulation and theory data
    fn offset(&self, mode: SolverMode, swl: f64) -> f64 {
        match self {
            GaugeQuantity::WaveElevation => mode.surface_offset(swl),
            GaugeQuantity::BedShear => 0.0,
        }
    }
}

/// Experimental table to overlay
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentSource {
    pub path: PathBuf,
    pub skip_rows: usize,
}

#[derive(Debug, Clone)]
pub struct GaugeReportOptions {
    pub mode: SolverMode,
    pub swl: f64,
    pub window: TimeWindow,
    pub limits: AxisLimits,
    pub experiment: Option<ExperimentSource>,
    pub show_progress: bool,
}

impl Default for GaugeReportOptions {
    fn default() -> Self {
        Self {
            mode: SolverMode::Cfd,
            swl: crate::config::DEFAULT_SWL,
            window: TimeWindow::default(),
            limits: AxisLimits::default(),
            experiment: None,
            show_progress: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GaugeReportSummary {
    pub quantity: GaugeQuantity,
    pub source: PathBuf,
    pub gauge_count: usize,
    pub locations: Vec<GaugeLocation>,
    pub window_start: f64,
    pub window_end: f64,
    pub rows: usize,
    pub stats: ReducedStats,
    pub theory: Option<PathBuf>,
    pub figures: Vec<PathBuf>,
}

/// Reads a gauge file, reduces it to the time window and plots every gauge
#[derive(Debug, Clone)]
pub struct GaugeReportService {
    layout: CaseLayout,
}

impl GaugeReportService {
    pub fn new(layout: CaseLayout) -> Self {
        Self { layout }
    }

    #[instrument(skip(self, options), fields(case = %self.layout.root().display()))]
    pub fn run(
        &self,
        quantity: GaugeQuantity,
        options: &GaugeReportOptions,
    ) -> Result<GaugeReportSummary, ReportError> {
        let source = quantity.gauge_file(&self.layout, options.mode);
        let file = read_series_file(&source)?;

        let windowed = options.window.apply(&file.table)?;
        let stats = &windowed.stats;
        info!(
            "Window [{:.3}, {:.3}]: {} rows, min = {:.4}, max = {:.4}",
            windowed.start,
            windowed.end,
            windowed.table.len(),
            stats.min_value,
            stats.max_value
        );

        let mut theory_path = None;
        let theory = if quantity == GaugeQuantity::WaveElevation {
            let path = self.layout.wave_theory_file(options.mode);
            if path.is_file() {
                let table = read_series_file(&path)?.table;
                theory_path = Some(path);
                Some(windowed.same_window(&table))
            } else {
                info!("No theory file found, skipping theory plots");
                None
            }
        } else {
            None
        };

        // The time window only applies to simulated data
        let experiment = match &options.experiment {
            Some(exp) => Some(read_reference_table(&exp.path, exp.skip_rows)?),
            None => None,
        };

        let plot = GaugePlot {
            windowed: &windowed,
            locations: &file.locations,
            offset: quantity.offset(options.mode, options.swl),
            theory: theory.as_ref(),
            experiment: experiment.as_ref(),
            y_label: quantity.y_label(),
            limits: options.limits,
        };

        let out_dir = quantity.output_dir(&self.layout);
        let mut figures: Vec<Figure> = (1..=file.gauge_count)
            .map(|g| plot.single_figure(g, &out_dir.join(quantity.single_file_name(g))))
            .collect();
        figures.push(plot.column_figure(&out_dir.join(quantity.column_file_name())));

        let rendered = render_with_progress(&figures, options.show_progress)?;
        let written = write_figures(&rendered)?;
        info!("{} plots saved in {}", written.len(), out_dir.display());

        Ok(GaugeReportSummary {
            quantity,
            source,
            gauge_count: file.gauge_count,
            window_start: windowed.start,
            window_end: windowed.end,
            rows: windowed.table.len(),
            stats: windowed.stats.clone(),
            locations: file.locations,
            theory: theory_path,
            figures: written,
        })
    }
}

fn render_with_progress(
    figures: &[Figure],
    show: bool,
) -> Result<Vec<RenderedFigure>, ReportError> {
    let pb = if show {
        ProgressBar::new(figures.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );

    let mut rendered = Vec::with_capacity(figures.len());
    for figure in figures {
        pb.set_message(
            figure
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        rendered.push(figure.render()?);
        pb.inc(1);
    }
    pb.finish_with_message(format!("✓ Rendered {} plots", rendered.len()));
    Ok(rendered)
}
