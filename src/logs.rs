// Solver run logs
//
// - REEF3D_mainlog.dat: one row per iteration (timestep, simulation time,
//   volume tallies, inflow/outflow, representative velocity)
// - REEF3D_sedimentlog.dat: one row per sediment update

pub mod error;
pub mod mainlog;
pub mod sedimentlog;

pub use error::LogError;
pub use mainlog::{read_main_log, MainLog};
pub use sedimentlog::{read_sediment_log, SedimentLog, SedimentLogRow};
