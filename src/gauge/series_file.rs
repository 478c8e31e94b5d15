/// Gauge Series File Reader
///
/// Parses the solver's gauge output files (free-surface `*-WSF-HG.dat`,
/// bed-shear `*-Sediment-Bedshear.dat` and the analytical `*-THEORY.dat`).
///
/// # File layout
/// ```text
/// Line 1:          free text containing the gauge count N
/// Lines 2-3:       header / separator
/// Lines 4..3+N:    "index x y", one row per gauge
/// Lines 4+N..7+N:  header / separator
/// Lines 8+N..:     "time g1 g2 ... gN"
/// ```
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::gauge::table::SeriesTable;
use crate::utils::{extract_first_integer, is_skippable_line, parse_numeric_row};

/// Lines before the coordinate block
pub const LOCATION_HEADER_LINES: usize = 3;

/// Header lines in addition to the N coordinate rows before the data block
pub const DATA_HEADER_LINES: usize = 7;

#[derive(Error, Debug)]
pub enum GaugeFileError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No gauge count found in header line: {0:?}")]
    MissingGaugeCount(String),

    #[error("Header declares zero gauges")]
    NoGauges,

    #[error("Header declares {0} gauges, more than a file can hold")]
    GaugeCountTooLarge(usize),

    #[error("File ends at line {found}, header needs {expected} lines")]
    Truncated { expected: usize, found: usize },

    #[error("Invalid gauge location at line {line}: {msg}")]
    InvalidLocation { line: usize, msg: String },

    #[error("Invalid number {token:?} at line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("Row at line {line} has {found} columns, expected {expected}")]
    ShapeMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Position of one gauge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeLocation {
    /// 1-based gauge number as written by the solver
    pub index: u32,
    pub x: f64,
    pub y: f64,
}

/// A parsed gauge file
#[derive(Debug, Clone)]
pub struct SeriesFile {
    pub path: PathBuf,
    pub gauge_count: usize,
    pub locations: Vec<GaugeLocation>,
    pub table: SeriesTable,
}

impl SeriesFile {
    /// Parse the text of a gauge file
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, GaugeFileError> {
        let lines: Vec<&str> = content.lines().collect();

        let first = lines.first().copied().unwrap_or_default();
        let gauge_count = extract_first_integer(first)
            .map_err(|_| GaugeFileError::MissingGaugeCount(first.trim_end().to_string()))?;
        if gauge_count == 0 {
            return Err(GaugeFileError::NoGauges);
        }

        let (Some(header_lines), Some(location_end)) = (
            gauge_count.checked_add(DATA_HEADER_LINES),
            gauge_count.checked_add(LOCATION_HEADER_LINES),
        ) else {
            return Err(GaugeFileError::GaugeCountTooLarge(gauge_count));
        };
        if lines.len() < location_end {
            return Err(GaugeFileError::Truncated {
                expected: header_lines,
                found: lines.len(),
            });
        }

        let mut locations = Vec::with_capacity(gauge_count);
        for (idx, line) in lines[LOCATION_HEADER_LINES..location_end].iter().enumerate() {
            locations.push(parse_location(line, LOCATION_HEADER_LINES + idx + 1)?);
        }

        if lines.len() < header_lines {
            return Err(GaugeFileError::Truncated {
                expected: header_lines,
                found: lines.len(),
            });
        }

        let width = gauge_count + 1;
        let rows = parse_numeric_rows(&lines[header_lines..], header_lines + 1, Some(width))?;

        Ok(Self {
            path: path.into(),
            gauge_count,
            locations,
            table: SeriesTable::from_checked_rows(width, rows),
        })
    }

    /// x coordinate of a 1-based gauge number
    pub fn gauge_x(&self, gauge: usize) -> Option<f64> {
        gauge
            .checked_sub(1)
            .and_then(|i| self.locations.get(i))
            .map(|loc| loc.x)
    }
}

/// Read and parse a gauge file from disk
pub fn read_series_file(path: impl AsRef<Path>) -> Result<SeriesFile, GaugeFileError> {
    let path = path.as_ref();
    info!("Reading gauge file: {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| GaugeFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let file = SeriesFile::parse(path, &content)?;

    info!("Nr gauges: {}", file.gauge_count);
    for loc in &file.locations {
        info!("  gauge {:>4}   x = {:8.3}   y = {:8.3}", loc.index, loc.x, loc.y);
    }
    debug!("Loaded {} data rows", file.table.len());

    Ok(file)
}

/// Read an experimental reference table
///
/// Plain whitespace table after `skip_rows` header lines. Column 0 is time and
/// column i holds gauge i. Every row must be as wide as the first one.
pub fn read_reference_table(
    path: impl AsRef<Path>,
    skip_rows: usize,
) -> Result<SeriesTable, GaugeFileError> {
    let path = path.as_ref();
    info!("Reading reference data: {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| GaugeFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<&str> = content.lines().skip(skip_rows).collect();
    let rows = parse_numeric_rows(&lines, skip_rows + 1, None)?;
    let width = rows.first().map(|r| r.len()).unwrap_or(0);

    debug!("Reference table has {} rows x {} columns", rows.len(), width);
    Ok(SeriesTable::from_checked_rows(width, rows))
}

/// Parse "index x y" (extra columns are ignored)
fn parse_location(line: &str, line_no: usize) -> Result<GaugeLocation, GaugeFileError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(GaugeFileError::InvalidLocation {
            line: line_no,
            msg: format!("expected 'index x y', found {:?}", line.trim()),
        });
    }

    let number = |token: &str| -> Result<f64, GaugeFileError> {
        token.parse::<f64>().map_err(|_| GaugeFileError::InvalidLocation {
            line: line_no,
            msg: format!("{token:?} is not a number"),
        })
    };

    let index = number(tokens[0])?;
    if index < 0.0 || index.fract() != 0.0 || index > u32::MAX as f64 {
        return Err(GaugeFileError::InvalidLocation {
            line: line_no,
            msg: format!("gauge index {} is not a non-negative integer", tokens[0]),
        });
    }

    Ok(GaugeLocation {
        index: index as u32,
        x: number(tokens[1])?,
        y: number(tokens[2])?,
    })
}

/// Parse whitespace rows, skipping blank and `#` lines
///
/// With `width = None` the first row fixes the width.
fn parse_numeric_rows(
    lines: &[&str],
    first_line_no: usize,
    width: Option<usize>,
) -> Result<Vec<Vec<f64>>, GaugeFileError> {
    let mut expected = width;
    let mut rows = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let line_no = first_line_no + idx;
        if is_skippable_line(line) {
            continue;
        }

        let row = parse_numeric_row(line).map_err(|token| GaugeFileError::InvalidNumber {
            line: line_no,
            token,
        })?;

        let expected_width = *expected.get_or_insert(row.len());
        if row.len() != expected_width {
            return Err(GaugeFileError::ShapeMismatch {
                line: line_no,
                expected: expected_width,
                found: row.len(),
            });
        }

        rows.push(row);
    }

    Ok(rows)
}
