/// Profile Line Snapshot Parser
///
/// ```text
/// Line 1:    metadata, e.g. "sedtime: 12.50" (sedline) or "simtime: 3.20" (wsfline)
/// Line 2:    metadata, e.g. "simtime: 30.00"
/// Lines 3-9: header
/// Line 10..: x value [theory]
/// ```
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

use crate::utils::{is_skippable_line, parse_numeric_row};

/// Lines before the first data row
pub const SNAPSHOT_HEADER_LINES: usize = 9;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Metadata line {0} missing")]
    MissingMetadata(usize),

    #[error("No time value in metadata line {line}: {text:?}")]
    InvalidMetadata { line: usize, text: String },

    #[error("Invalid number {token:?} at line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("Row at line {line} has {found} columns, expected 2 or 3")]
    ShapeMismatch { line: usize, found: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    pub x: f64,
    pub value: f64,
    pub theory: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    pub path: PathBuf,
    /// The two free-text metadata lines, trimmed
    pub metadata: [String; 2],
    pub points: Vec<ProfilePoint>,
}

impl ProfileSnapshot {
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, ProfileError> {
        let lines: Vec<&str> = content.lines().collect();
        let meta = |idx: usize| -> Result<String, ProfileError> {
            lines
                .get(idx)
                .map(|l| l.trim().to_string())
                .ok_or(ProfileError::MissingMetadata(idx + 1))
        };
        let metadata = [meta(0)?, meta(1)?];

        let mut points = Vec::new();
        for (idx, line) in lines.iter().enumerate().skip(SNAPSHOT_HEADER_LINES) {
            let line_no = idx + 1;
            if is_skippable_line(line) {
                continue;
            }
            let row = parse_numeric_row(line)
                .map_err(|token| ProfileError::InvalidNumber { line: line_no, token })?;
            match row.as_slice() {
                [x, value] => points.push(ProfilePoint {
                    x: *x,
                    value: *value,
                    theory: None,
                }),
                [x, value, theory] => points.push(ProfilePoint {
                    x: *x,
                    value: *value,
                    theory: Some(*theory),
                }),
                _ => {
                    return Err(ProfileError::ShapeMismatch {
                        line: line_no,
                        found: row.len(),
                    })
                }
            }
        }

        Ok(Self {
            path: path.into(),
            metadata,
            points,
        })
    }

    /// Number after the first ':' of metadata line 1 or 2
    pub fn time_value(&self, line: usize) -> Result<f64, ProfileError> {
        let text = line
            .checked_sub(1)
            .and_then(|i| self.metadata.get(i))
            .ok_or(ProfileError::MissingMetadata(line))?;
        let invalid = || ProfileError::InvalidMetadata {
            line,
            text: text.clone(),
        };
        time_value_regex()
            .and_then(|re| re.captures(text))
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .ok_or_else(invalid)
    }

    /// Legend text made of both metadata lines
    pub fn metadata_label(&self) -> String {
        format!("{} {}", self.metadata[0], self.metadata[1])
    }

    /// (x - offset_x, value - offset_y) pairs
    pub fn shifted(&self, offset_x: f64, offset_y: f64) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.x - offset_x, p.value - offset_y))
            .collect()
    }
}

/// Compiled once per process
fn time_value_regex() -> Option<&'static Regex> {
    static TIME_VALUE: OnceLock<Option<Regex>> = OnceLock::new();
    TIME_VALUE
        .get_or_init(|| Regex::new(r":\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)").ok())
        .as_ref()
}

pub fn read_snapshot(path: impl AsRef<Path>) -> Result<ProfileSnapshot, ProfileError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ProfileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = ProfileSnapshot::parse(path, &content)?;
    debug!(
        "Read {} profile points from {}",
        snapshot.points.len(),
        path.display()
    );
    Ok(snapshot)
}
