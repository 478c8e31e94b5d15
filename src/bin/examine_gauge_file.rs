use clap::Parser;
use reef3d_post::gauge::{read_series_file, GaugeLocation, ReducedStats, TimeWindow};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "examine-gauge-file")]
#[command(about = "Show the header, gauge locations and a sample of a gauge output file", long_about = None)]
struct Cli {
    /// Gauge file, e.g. REEF3D_CFD_WSF/REEF3D-CFD-WSF-HG.dat
    path: PathBuf,

    /// Number of data rows to print
    #[arg(long, default_value = "10")]
    rows: usize,

    /// Print a JSON summary instead of the text listing
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Examination<'a> {
    path: &'a PathBuf,
    gauge_count: usize,
    locations: &'a [GaugeLocation],
    rows: usize,
    sample: &'a [Vec<f64>],
    stats: Option<ReducedStats>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = read_series_file(&cli.path)?;

    let sample = &file.table.rows()[..cli.rows.min(file.table.len())];
    let stats = TimeWindow::default()
        .apply(&file.table)
        .ok()
        .map(|w| w.stats);

    if cli.json {
        let exam = Examination {
            path: &cli.path,
            gauge_count: file.gauge_count,
            locations: &file.locations,
            rows: file.table.len(),
            sample,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&exam)?);
        return Ok(());
    }

    println!("Gauge file: {}", cli.path.display());
    println!("{}", "=".repeat(60));
    println!("Nr gauges: {}", file.gauge_count);
    println!("\nGauge locations (Nr, x, y):");
    for loc in &file.locations {
        println!("  {:6}   {:8.3}   {:8.3}", loc.index, loc.x, loc.y);
    }

    println!("\n{}", "=".repeat(60));
    println!(
        "Data: {} rows x {} columns",
        file.table.len(),
        file.table.width()
    );
    println!("First {} rows:", sample.len());
    for (idx, row) in sample.iter().enumerate() {
        print!("Row {:4}: ", idx + 1);
        for value in row {
            print!("{value:>10.4} ");
        }
        println!();
    }

    if let Some(stats) = stats {
        println!("\n{}", "=".repeat(60));
        println!("t = [{}, {}]", stats.min_time, stats.max_time);
        for gauge in 1..=file.gauge_count {
            if let Some((min, max)) = stats.gauge_extrema(gauge) {
                println!("  G{gauge:<4} min = {min:>10.4}   max = {max:>10.4}");
            }
        }
        println!("  overall min = {:.4}   max = {:.4}", stats.min_value, stats.max_value);
    }

    Ok(())
}
