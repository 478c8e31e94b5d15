use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::case::CaseLayout;
use crate::logs::{read_main_log, read_sediment_log, SedimentLog};
use crate::plot::log::mainlog_figure;
use crate::plot::{render_all, write_figures};
use crate::services::error::ReportError;

/// Derived sediment log values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SedimentSummary {
    pub rows: usize,
    pub first_iteration: f64,
    pub first_active_iteration: Option<f64>,
    pub last_iteration: f64,
    pub sim_time_start: f64,
    pub sim_time_end: f64,
    pub sed_time_end: f64,
    pub decoupling_factor: Option<f64>,
}

impl From<&SedimentLog> for SedimentSummary {
    fn from(log: &SedimentLog) -> Self {
        Self {
            rows: log.rows().len(),
            first_iteration: log.first_iteration(),
            first_active_iteration: log.first_active_iteration(),
            last_iteration: log.last_iteration(),
            sim_time_start: log.sim_time_start(),
            sim_time_end: log.sim_time_end(),
            sed_time_end: log.sed_time_end(),
            decoupling_factor: log.decoupling_factor(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MainLogSummary {
    pub iterations: usize,
    pub max_iteration: f64,
    pub max_simtime: f64,
    pub sediment: Option<SedimentSummary>,
    pub figures: Vec<PathBuf>,
}

/// Plots the main log, with sediment time when the case has a sediment log
#[derive(Debug, Clone)]
pub struct LogReportService {
    layout: CaseLayout,
}

impl LogReportService {
    pub fn new(layout: CaseLayout) -> Self {
        Self { layout }
    }

    #[instrument(skip(self), fields(case = %self.layout.root().display()))]
    pub fn run(&self) -> Result<MainLogSummary, ReportError> {
        let log = read_main_log(self.layout.main_log())?;

        let sed_path = self.layout.sediment_log();
        let sediment = if sed_path.is_file() {
            Some(read_sediment_log(&sed_path)?)
        } else {
            info!("No sediment log found, plotting simulation time only");
            None
        };

        let figure = mainlog_figure(
            &self.layout.mainlog_output_dir().join("Mainlog.svg"),
            &log,
            sediment.as_ref(),
        );
        let rendered = render_all([&figure])?;
        let figures = write_figures(&rendered)?;

        Ok(MainLogSummary {
            iterations: log.len(),
            max_iteration: log.max_iteration(),
            max_simtime: log.max_simtime(),
            sediment: sediment.as_ref().map(SedimentSummary::from),
            figures,
        })
    }
}
