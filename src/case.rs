//! Directory and file naming conventions of a solver case folder.
//!
//! The solver writes every output family into a fixed sub-folder of the case
//! directory, named after the solver mode:
//!
//! ```text
//! <case>/REEF3D_CFD_WSF/REEF3D-CFD-WSF-HG.dat
//! <case>/REEF3D_CFD_WSF/REEF3D-CFD-WSF-HG-THEORY.dat
//! <case>/REEF3D_CFD_Sediment/REEF3D-CFD-Sediment-Bedshear.dat
//! <case>/REEF3D_Log/REEF3D_mainlog.dat
//! <case>/REEF3D_Log/REEF3D_sedimentlog.dat
//! ```
//!
//! Plots go to `00_post_*` folders next to them.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Solver flavour that produced the case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverMode {
    /// Navier-Stokes solver; wave elevations are absolute and need the still
    /// water level subtracted
    #[default]
    Cfd,
    /// Non-hydrostatic solver; wave elevations are already relative to swl
    Nhflow,
}

impl SolverMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolverMode::Cfd => "CFD",
            SolverMode::Nhflow => "NHFLOW",
        }
    }

    /// Vertical offset subtracted from free-surface gauge values
    pub fn surface_offset(&self, swl: f64) -> f64 {
        match self {
            SolverMode::Cfd => swl,
            SolverMode::Nhflow => 0.0,
        }
    }
}

impl fmt::Display for SolverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolverMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CFD" => Ok(SolverMode::Cfd),
            "NHFLOW" => Ok(SolverMode::Nhflow),
            other => Err(format!("unknown solver mode '{other}' (expected CFD or NHFLOW)")),
        }
    }
}

/// Paths of a case directory
#[derive(Debug, Clone)]
pub struct CaseLayout {
    root: PathBuf,
}

impl CaseLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Free-surface (wave) gauge file
    pub fn wave_gauge_file(&self, mode: SolverMode) -> PathBuf {
        self.root
            .join(format!("REEF3D_{mode}_WSF"))
            .join(format!("REEF3D-{mode}-WSF-HG.dat"))
    }

    /// Analytical wave solution written next to the wave gauge file
    pub fn wave_theory_file(&self, mode: SolverMode) -> PathBuf {
        self.root
            .join(format!("REEF3D_{mode}_WSF"))
            .join(format!("REEF3D-{mode}-WSF-HG-THEORY.dat"))
    }

    pub fn bedshear_gauge_file(&self, mode: SolverMode) -> PathBuf {
        self.root
            .join(format!("REEF3D_{mode}_Sediment"))
            .join(format!("REEF3D-{mode}-Sediment-Bedshear.dat"))
    }

    pub fn main_log(&self) -> PathBuf {
        self.root.join("REEF3D_Log").join("REEF3D_mainlog.dat")
    }

    pub fn sediment_log(&self) -> PathBuf {
        self.root.join("REEF3D_Log").join("REEF3D_sedimentlog.dat")
    }

    pub fn wave_output_dir(&self) -> PathBuf {
        self.root.join("00_post_wave")
    }

    pub fn sediment_output_dir(&self) -> PathBuf {
        self.root.join("00_post_sed")
    }

    pub fn mainlog_output_dir(&self) -> PathBuf {
        self.root.join("00_post_mainlog")
    }
}
