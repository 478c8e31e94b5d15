use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reef3d_post::case::{CaseLayout, SolverMode};
use reef3d_post::config::{parse_open_range, parse_range, Config};
use reef3d_post::gauge::TimeWindow;
use reef3d_post::plot::{AxisLimits, Offsets};
use reef3d_post::services::{
    ExperimentSource, GaugeQuantity, GaugeReportOptions, GaugeReportService, LogReportService,
    ProfileOptions, ProfileReportService,
};

#[derive(Parser)]
#[command(name = "reef3d-post")]
#[command(about = "Plot gauge, log and profile output of a REEF3D case", long_about = None)]
struct Cli {
    /// Case directory holding the REEF3D_* output folders
    #[arg(long, env = "REEF3D_CASE_DIR", global = true)]
    case_dir: Option<PathBuf>,

    /// Solver mode: CFD or NHFLOW
    #[arg(long, env = "REEF3D_MODE", global = true)]
    mode: Option<SolverMode>,

    /// Still water level [m]
    #[arg(long, env = "REEF3D_SWL", global = true, allow_negative_numbers = true)]
    swl: Option<f64>,

    /// Print the report summary as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Free surface elevation at every wave gauge
    WaveGauges(GaugeArgs),
    /// Bed shear stress at every bed shear gauge
    BedshearGauges(GaugeArgs),
    /// Simulation time, timestep, volumes, flow rates and Ui per iteration
    Mainlog,
    /// Sediment vs simulation time and bed level snapshots
    Sedline(ProfileArgs),
    /// Free surface snapshots along x
    Wsfline(ProfileArgs),
}

#[derive(Args)]
struct GaugeArgs {
    /// Start of the time window [s]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    t_start: f64,

    /// End of the time window [s]; defaults to the last time in the file
    #[arg(long, allow_negative_numbers = true)]
    t_end: Option<f64>,

    /// x axis limits, "min,max" or "min," to end at the window's last time
    #[arg(long, value_parser = parse_open_range, allow_hyphen_values = true)]
    xlim: Option<(f64, Option<f64>)>,

    /// y axis limits, "min,max"
    #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
    ylim: Option<(f64, f64)>,

    /// Experimental data table to overlay (time, gauge 1, gauge 2, ...)
    #[arg(long)]
    exp_data: Option<PathBuf>,

    /// Header lines to skip in the experimental table
    #[arg(long, default_value_t = 1)]
    exp_skip_rows: usize,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[derive(Args)]
struct ProfileArgs {
    /// Folder searched for snapshot files (default: the report's output folder)
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// File name pattern, e.g. "*.dat"
    #[arg(long)]
    pattern: Option<String>,

    /// Shift subtracted from x [m]
    #[arg(long, allow_negative_numbers = true)]
    offset_x: Option<f64>,

    /// Shift subtracted from the profile value [m]
    #[arg(long, allow_negative_numbers = true)]
    offset_y: Option<f64>,
}

impl Cli {
    fn config(&self) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = Config::from_env()?;
        if let Some(dir) = &self.case_dir {
            config.case_dir = dir.clone();
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(swl) = self.swl {
            config.swl = swl;
        }
        Ok(config)
    }
}

impl GaugeArgs {
    fn options(&self, config: &Config) -> GaugeReportOptions {
        GaugeReportOptions {
            mode: config.mode,
            swl: config.swl,
            window: TimeWindow::new(self.t_start, self.t_end),
            limits: AxisLimits {
                x: self.xlim,
                y: self.ylim,
            },
            experiment: self.exp_data.as_ref().map(|path| ExperimentSource {
                path: path.clone(),
                skip_rows: self.exp_skip_rows,
            }),
            show_progress: !self.no_progress,
        }
    }
}

impl ProfileArgs {
    fn apply(&self, mut options: ProfileOptions) -> ProfileOptions {
        if let Some(dir) = &self.input_dir {
            options.input_dir = Some(dir.clone());
        }
        if let Some(pattern) = &self.pattern {
            options.pattern = pattern.clone();
        }
        options.offsets = Offsets {
            x: self.offset_x.unwrap_or(options.offsets.x),
            y: self.offset_y.unwrap_or(options.offsets.y),
        };
        options
    }
}

fn emit<S: Serialize>(json: bool, summary: &S) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists (ignore errors if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;
    info!(
        "Case {} (mode {}, swl = {})",
        config.case_dir.display(),
        config.mode,
        config.swl
    );
    let layout = CaseLayout::new(&config.case_dir);

    match &cli.command {
        Command::WaveGauges(args) => {
            let summary = GaugeReportService::new(layout)
                .run(GaugeQuantity::WaveElevation, &args.options(&config))?;
            emit(cli.json, &summary)?;
        }
        Command::BedshearGauges(args) => {
            let summary = GaugeReportService::new(layout)
                .run(GaugeQuantity::BedShear, &args.options(&config))?;
            emit(cli.json, &summary)?;
        }
        Command::Mainlog => {
            let summary = LogReportService::new(layout).run()?;
            if let Some(sed) = &summary.sediment {
                info!(
                    "Sediment: t_sed(end) = {:.2} s, decoupling factor = {}",
                    sed.sed_time_end,
                    sed.decoupling_factor
                        .map(|df| format!("{df:.2}"))
                        .unwrap_or_else(|| "n/a".to_string())
                );
            }
            emit(cli.json, &summary)?;
        }
        Command::Sedline(args) => {
            let options = args.apply(ProfileOptions::sedline(config.swl));
            let summary = ProfileReportService::new(layout).run_sedline(&options)?;
            emit(cli.json, &summary)?;
        }
        Command::Wsfline(args) => {
            let options = args.apply(ProfileOptions::wsfline(config.swl));
            let summary = ProfileReportService::new(layout).run_wsfline(&options)?;
            emit(cli.json, &summary)?;
        }
    }

    Ok(())
}
