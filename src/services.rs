// Report pipelines
//
// One service per plot family. Each run reads its inputs, reduces them,
// renders every figure in memory and only then writes the SVG files.

pub mod error;
pub mod gauge_report;
pub mod log_report;
pub mod profile_report;

pub use error::ReportError;
pub use gauge_report::{
    ExperimentSource, GaugeQuantity, GaugeReportOptions, GaugeReportService, GaugeReportSummary,
};
pub use log_report::{LogReportService, MainLogSummary, SedimentSummary};
pub use profile_report::{ProfileOptions, ProfileReportService, ProfileReportSummary};
