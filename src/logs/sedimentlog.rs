/// Sediment Log Parser
///
/// `REEF3D_Log/REEF3D_sedimentlog.dat`: three header lines followed by rows of
///
/// ```text
/// it  t_sim  dt_sed  t_sed  sediter  slidecells  bedmin  bedmax
/// ```
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::logs::error::LogError;
use crate::utils::{is_skippable_line, parse_numeric_row};

const HEADER_LINES: usize = 3;
const COLUMNS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SedimentLogRow {
    pub iteration: f64,
    pub sim_time: f64,
    pub sed_timestep: f64,
    pub sed_time: f64,
    pub sed_iterations: f64,
    pub slide_cells: f64,
    pub bed_min: f64,
    pub bed_max: f64,
}

/// Parsed sediment log; always holds at least one row
#[derive(Debug, Clone, PartialEq)]
pub struct SedimentLog {
    rows: Vec<SedimentLogRow>,
}

impl SedimentLog {
    pub fn parse(content: &str) -> Result<Self, LogError> {
        let mut rows = Vec::new();
        for (offset, line) in content.lines().enumerate().skip(HEADER_LINES) {
            let line_no = offset + 1;
            if is_skippable_line(line) {
                continue;
            }
            let v = parse_numeric_row(line)
                .map_err(|token| LogError::InvalidNumber { line: line_no, token })?;
            if v.len() != COLUMNS {
                return Err(LogError::ShapeMismatch {
                    line: line_no,
                    expected: COLUMNS,
                    found: v.len(),
                });
            }
            rows.push(SedimentLogRow {
                iteration: v[0],
                sim_time: v[1],
                sed_timestep: v[2],
                sed_time: v[3],
                sed_iterations: v[4],
                slide_cells: v[5],
                bed_min: v[6],
                bed_max: v[7],
            });
        }

        if rows.is_empty() {
            return Err(LogError::Empty);
        }
        debug!("Sediment log has {} rows", rows.len());
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[SedimentLogRow] {
        &self.rows
    }

    fn first(&self) -> &SedimentLogRow {
        &self.rows[0]
    }

    fn last(&self) -> &SedimentLogRow {
        &self.rows[self.rows.len() - 1]
    }

    pub fn sim_time_start(&self) -> f64 {
        self.first().sim_time
    }

    pub fn sim_time_end(&self) -> f64 {
        self.last().sim_time
    }

    pub fn sed_time_end(&self) -> f64 {
        self.last().sed_time
    }

    /// Iteration of the first logged row (sediment transport switched on)
    pub fn first_iteration(&self) -> f64 {
        self.first().iteration
    }

    pub fn last_iteration(&self) -> f64 {
        self.last().iteration
    }

    /// First iteration where sediment time has advanced past zero
    pub fn first_active_iteration(&self) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.sed_time > 0.0)
            .map(|r| r.iteration)
    }

    /// Morphological decoupling factor: sediment time over the hydrodynamic time
    /// elapsed while sediment was logged
    pub fn decoupling_factor(&self) -> Option<f64> {
        let span = self.sim_time_end() - self.sim_time_start();
        if span == 0.0 {
            return None;
        }
        Some(self.sed_time_end() / span)
    }

    pub fn sim_time_series(&self) -> Vec<(f64, f64)> {
        self.rows.iter().map(|r| (r.iteration, r.sim_time)).collect()
    }

    pub fn sed_time_series(&self) -> Vec<(f64, f64)> {
        self.rows.iter().map(|r| (r.iteration, r.sed_time)).collect()
    }
}

pub fn read_sediment_log(path: impl AsRef<Path>) -> Result<SedimentLog, LogError> {
    let path = path.as_ref();
    info!("Reading sediment log: {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| LogError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let log = SedimentLog::parse(&content)?;
    info!(
        "Sediment log: t_sim end = {:.2} s, t_sed end = {:.2} s",
        log.sim_time_end(),
        log.sed_time_end()
    );
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
sediment log
it t_sim dt_sed t_sed sediter slidecells bedmin bedmax
----
100 10.0 0.0 0.0 1 0 -0.5 0.1
200 12.0 0.1 0.0 1 0 -0.5 0.1
300 14.0 0.1 20.0 1 2 -0.52 0.12
400 20.0 0.1 60.0 1 3 -0.55 0.15
";

    #[test]
    fn test_parse_rows() {
        let log = SedimentLog::parse(LOG).unwrap();
        assert_eq!(log.rows().len(), 4);
        assert_eq!(log.rows()[2].slide_cells, 2.0);
        assert_eq!(log.rows()[3].bed_max, 0.15);
    }

    #[test]
    fn test_time_bounds() {
        let log = SedimentLog::parse(LOG).unwrap();
        assert_eq!(log.sim_time_start(), 10.0);
        assert_eq!(log.sim_time_end(), 20.0);
        assert_eq!(log.sed_time_end(), 60.0);
        assert_eq!(log.first_iteration(), 100.0);
        assert_eq!(log.last_iteration(), 400.0);
    }

    #[test]
    fn test_first_active_iteration() {
        let log = SedimentLog::parse(LOG).unwrap();
        assert_eq!(log.first_active_iteration(), Some(300.0));
    }

    #[test]
    fn test_first_active_iteration_none_when_never_active() {
        let content = LOG.replace(" 20.0 1 2", " 0.0 1 2").replace(" 60.0 1 3", " 0.0 1 3");
        let log = SedimentLog::parse(&content).unwrap();
        assert_eq!(log.first_active_iteration(), None);
    }

    #[test]
    fn test_decoupling_factor() {
        let log = SedimentLog::parse(LOG).unwrap();
        assert_eq!(log.decoupling_factor(), Some(6.0));
    }

    #[test]
    fn test_decoupling_factor_zero_span() {
        let content = "a\nb\nc\n1 5.0 0.1 1.0 1 0 0 0\n";
        let log = SedimentLog::parse(content).unwrap();
        assert_eq!(log.decoupling_factor(), None);
    }

    #[test]
    fn test_wrong_column_count() {
        let content = "a\nb\nc\n1 5.0 0.1\n";
        assert!(matches!(
            SedimentLog::parse(content),
            Err(LogError::ShapeMismatch {
                line: 4,
                expected: 8,
                found: 3
            })
        ));
    }

    #[test]
    fn test_empty_log() {
        assert!(matches!(SedimentLog::parse("a\nb\nc\n"), Err(LogError::Empty)));
    }
}
