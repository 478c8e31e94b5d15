// Gauge series module
//
// Handles the solver's gauge output files (free-surface and bed-shear gauges).
// A gauge file holds:
// - a header with the gauge count and one (index, x, y) row per gauge
// - a whitespace table: time followed by one column per gauge

pub mod series_file;
pub mod table;
pub mod window;

pub use series_file::{read_reference_table, read_series_file, GaugeFileError, GaugeLocation, SeriesFile};
pub use table::SeriesTable;
pub use window::{ReduceError, ReducedStats, TimeWindow, Windowed};
