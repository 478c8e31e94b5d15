use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

use crate::case::CaseLayout;
use crate::logs::read_sediment_log;
use crate::plot::log::sed_simtime_figure;
use crate::plot::profile::{sedline_figure, wsfline_figure};
use crate::plot::{render_all, write_figures, Offsets};
use crate::profiles::{find_files, read_snapshot, ProfileSnapshot};
use crate::services::error::ReportError;
use crate::services::log_report::SedimentSummary;

pub const SEDLINE_PATTERN: &str = "*.dat";
pub const WSFLINE_PATTERN: &str = "*wsfline*.dat";

#[derive(Debug, Clone)]
pub struct ProfileOptions {
    /// Folder searched recursively; relative paths start at the case directory.
    /// `None` uses the report's default folder.
    pub input_dir: Option<PathBuf>,
    pub pattern: String,
    pub offsets: Offsets,
    pub swl: f64,
}

impl ProfileOptions {
    pub fn sedline(swl: f64) -> Self {
        Self {
            input_dir: None,
            pattern: SEDLINE_PATTERN.to_string(),
            offsets: Offsets::default(),
            swl,
        }
    }

    /// The vertical offset defaults to the still water level
    pub fn wsfline(swl: f64) -> Self {
        Self {
            input_dir: None,
            pattern: WSFLINE_PATTERN.to_string(),
            offsets: Offsets { x: 0.0, y: swl },
            swl,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileReportSummary {
    pub input_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub sediment: Option<SedimentSummary>,
    pub figures: Vec<PathBuf>,
}

/// Plots sedline / wsfline snapshots found under a folder
#[derive(Debug, Clone)]
pub struct ProfileReportService {
    layout: CaseLayout,
}

impl ProfileReportService {
    pub fn new(layout: CaseLayout) -> Self {
        Self { layout }
    }

    fn load_snapshots(
        &self,
        options: &ProfileOptions,
        default_dir: PathBuf,
    ) -> Result<(PathBuf, Vec<PathBuf>, Vec<ProfileSnapshot>), ReportError> {
        let dir = match &options.input_dir {
            Some(dir) => self.layout.root().join(dir),
            None => default_dir,
        };
        let files = find_files(&dir, &options.pattern).map_err(|source| ReportError::Search {
            path: dir.clone(),
            source,
        })?;
        if files.is_empty() {
            warn!(
                "No files matching {} under {}",
                options.pattern,
                dir.display()
            );
        }

        let mut snapshots = Vec::with_capacity(files.len());
        for file in &files {
            info!("Plotting profile from file: {}", file.display());
            snapshots.push(read_snapshot(file)?);
        }
        Ok((dir, files, snapshots))
    }

    /// Sediment vs simulation time and bed level snapshots
    ///
    /// Fails when the case has no sediment log.
    #[instrument(skip(self, options), fields(case = %self.layout.root().display()))]
    pub fn run_sedline(&self, options: &ProfileOptions) -> Result<ProfileReportSummary, ReportError> {
        let sediment = read_sediment_log(self.layout.sediment_log())?;
        let summary = SedimentSummary::from(&sediment);
        match summary.first_active_iteration {
            Some(it) => info!("Sediment time starts advancing at iteration {it}"),
            None => info!("Sediment time never advanced"),
        }

        let (input_dir, files, snapshots) =
            self.load_snapshots(options, self.layout.sediment_output_dir())?;

        let figures = [
            sed_simtime_figure(
                &self.layout.mainlog_output_dir().join("SedSimtime.svg"),
                &sediment,
            ),
            sedline_figure(
                &self.layout.sediment_output_dir().join("sedline.svg"),
                &snapshots,
                options.offsets,
                options.swl,
                &sediment,
            ),
        ];
        let rendered = render_all(&figures)?;
        let written = write_figures(&rendered)?;

        Ok(ProfileReportSummary {
            input_dir,
            files,
            sediment: Some(summary),
            figures: written,
        })
    }

    /// Free surface snapshots
    #[instrument(skip(self, options), fields(case = %self.layout.root().display()))]
    pub fn run_wsfline(&self, options: &ProfileOptions) -> Result<ProfileReportSummary, ReportError> {
        let (input_dir, files, snapshots) =
            self.load_snapshots(options, self.layout.wave_output_dir())?;

        let figure = wsfline_figure(
            &self.layout.wave_output_dir().join("wsfline.svg"),
            &snapshots,
            options.offsets,
            options.swl,
        )?;
        let rendered = render_all([&figure])?;
        let written = write_figures(&rendered)?;

        Ok(ProfileReportSummary {
            input_dir,
            files,
            sediment: None,
            figures: written,
        })
    }
}
