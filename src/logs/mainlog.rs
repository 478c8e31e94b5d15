/// Main Log Parser
///
/// `REEF3D_Log/REEF3D_mainlog.dat` has four lines of preamble, a header row
/// (line 5) with `#`-prefixed column names and one data row per iteration:
///
/// ```text
/// #iteration #timestep #simtime #itertime #ptime #Volume 1 #Volume2 #Inflow #Outflow #Ui ...
/// ```
///
/// The first volume column is written as two words and is joined before splitting.
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::logs::error::LogError;
use crate::utils::{is_skippable_line, parse_numeric_row};

/// 0-based index of the header row
const HEADER_LINE: usize = 4;

/// Columns plotted from the main log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainLog {
    pub iteration: Vec<f64>,
    pub timestep: Vec<f64>,
    pub simtime: Vec<f64>,
    pub volume1: Vec<f64>,
    pub volume2: Vec<f64>,
    pub inflow: Vec<f64>,
    pub outflow: Vec<f64>,
    pub ui: Vec<f64>,
}

impl MainLog {
    pub fn parse(content: &str) -> Result<Self, LogError> {
        let lines: Vec<&str> = content.lines().collect();
        let header = lines
            .get(HEADER_LINE)
            .ok_or(LogError::MissingHeader(HEADER_LINE + 1))?
            .replace("Volume 1", "Volume1");
        let columns: Vec<String> = header
            .split_whitespace()
            .map(|name| name.trim_start_matches('#').to_string())
            .collect();
        if columns.is_empty() {
            return Err(LogError::MissingHeader(HEADER_LINE + 1));
        }
        debug!("Main log columns: {:?}", columns);

        let find = |name: &'static str| -> Result<usize, LogError> {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or(LogError::MissingColumn(name))
        };
        let idx = [
            find("iteration")?,
            find("timestep")?,
            find("simtime")?,
            find("Volume1")?,
            find("Volume2")?,
            find("Inflow")?,
            find("Outflow")?,
            find("Ui")?,
        ];

        let mut log = MainLog::default();
        for (offset, line) in lines[HEADER_LINE + 1..].iter().enumerate() {
            let line_no = HEADER_LINE + 2 + offset;
            if is_skippable_line(line) {
                continue;
            }
            let row = parse_numeric_row(line)
                .map_err(|token| LogError::InvalidNumber { line: line_no, token })?;
            if row.len() != columns.len() {
                return Err(LogError::ShapeMismatch {
                    line: line_no,
                    expected: columns.len(),
                    found: row.len(),
                });
            }

            log.iteration.push(row[idx[0]]);
            log.timestep.push(row[idx[1]]);
            log.simtime.push(row[idx[2]]);
            log.volume1.push(row[idx[3]]);
            log.volume2.push(row[idx[4]]);
            log.inflow.push(row[idx[5]]);
            log.outflow.push(row[idx[6]]);
            log.ui.push(row[idx[7]]);
        }

        if log.iteration.is_empty() {
            return Err(LogError::Empty);
        }
        Ok(log)
    }

    pub fn len(&self) -> usize {
        self.iteration.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iteration.is_empty()
    }

    /// Last logged iteration
    pub fn max_iteration(&self) -> f64 {
        self.iteration.last().copied().unwrap_or(0.0)
    }

    /// Simulation time at the last logged iteration
    pub fn max_simtime(&self) -> f64 {
        self.simtime.last().copied().unwrap_or(0.0)
    }

    /// (iteration, value) pairs for plotting
    pub fn against_iteration(&self, values: &[f64]) -> Vec<(f64, f64)> {
        self.iteration
            .iter()
            .copied()
            .zip(values.iter().copied())
            .collect()
    }
}

pub fn read_main_log(path: impl AsRef<Path>) -> Result<MainLog, LogError> {
    let path = path.as_ref();
    info!("Reading main log: {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| LogError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let log = MainLog::parse(&content)?;
    info!(
        "Main log: {} iterations, simtime max = {:.2} s",
        log.max_iteration(),
        log.max_simtime()
    );
    Ok(log)
}
