// Spatial profile snapshots (sedline / wsfline)
//
// Each file is one instant of a line profile along x: two metadata lines with
// the sediment and simulation time, some header lines, then `x value [theory]`
// rows from line 10 on.

pub mod finder;
pub mod snapshot;

pub use finder::find_files;
pub use snapshot::{read_snapshot, ProfileError, ProfilePoint, ProfileSnapshot};
