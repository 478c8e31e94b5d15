//! Time-window filtering and extrema of a gauge table.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::gauge::table::SeriesTable;

#[derive(Error, Debug, PartialEq)]
pub enum ReduceError {
    #[error("No rows in time window [{start}, {end}]")]
    EmptyWindow { start: f64, end: f64 },

    #[error("Table has no data rows")]
    EmptyTable,

    #[error("Table has no gauge columns")]
    NoGaugeColumns,
}

/// Closed time interval `[start, end]`; `end = None` means "up to the last sample"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: f64,
    pub end: Option<f64>,
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: None,
        }
    }
}

impl TimeWindow {
    pub fn new(start: f64, end: Option<f64>) -> Self {
        Self { start, end }
    }

    /// Concrete bounds for a table. `None` when the end is open and the table is empty.
    pub fn resolve(&self, table: &SeriesTable) -> Option<(f64, f64)> {
        let end = match self.end {
            Some(end) => end,
            None => table.max_time()?,
        };
        Some((self.start, end))
    }

    /// Filter rows and compute their extrema
    pub fn apply(&self, table: &SeriesTable) -> Result<Windowed, ReduceError> {
        if table.gauge_count() == 0 {
            return Err(ReduceError::NoGaugeColumns);
        }
        let (start, end) = self.resolve(table).ok_or(ReduceError::EmptyTable)?;

        let filtered = table.filter_time(start, end);
        debug!(
            "Time window [{}, {}] keeps {} of {} rows",
            start,
            end,
            filtered.len(),
            table.len()
        );
        if filtered.is_empty() {
            return Err(ReduceError::EmptyWindow { start, end });
        }

        let stats = ReducedStats::from_table(&filtered)?;
        Ok(Windowed {
            table: filtered,
            stats,
            start,
            end,
        })
    }
}

/// Extrema of a (filtered) table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReducedStats {
    /// Minimum of every column, time first
    pub column_min: Vec<f64>,
    /// Maximum of every column, time first
    pub column_max: Vec<f64>,
    /// Minimum over all gauge columns
    pub min_value: f64,
    /// Maximum over all gauge columns
    pub max_value: f64,
    pub min_time: f64,
    pub max_time: f64,
}

impl ReducedStats {
    pub fn from_table(table: &SeriesTable) -> Result<Self, ReduceError> {
        if table.gauge_count() == 0 {
            return Err(ReduceError::NoGaugeColumns);
        }
        let Some(first) = table.rows().first() else {
            return Err(ReduceError::EmptyTable);
        };

        let mut column_min = first.clone();
        let mut column_max = first.clone();
        for row in &table.rows()[1..] {
            for (col, value) in row.iter().enumerate() {
                column_min[col] = column_min[col].min(*value);
                column_max[col] = column_max[col].max(*value);
            }
        }

        let min_value = column_min[1..].iter().copied().fold(f64::INFINITY, f64::min);
        let max_value = column_max[1..]
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            min_time: column_min[0],
            max_time: column_max[0],
            column_min,
            column_max,
            min_value,
            max_value,
        })
    }

    /// (min, max) of a 1-based gauge number
    pub fn gauge_extrema(&self, gauge: usize) -> Option<(f64, f64)> {
        if gauge == 0 {
            return None;
        }
        Some((*self.column_min.get(gauge)?, *self.column_max.get(gauge)?))
    }
}

/// Result of applying a window: kept rows, their extrema and the bounds used
#[derive(Debug, Clone)]
pub struct Windowed {
    pub table: SeriesTable,
    pub stats: ReducedStats,
    pub start: f64,
    pub end: f64,
}

impl Windowed {
    /// Filter another table (theory, reference) with the same resolved bounds
    pub fn same_window(&self, other: &SeriesTable) -> SeriesTable {
        other.filter_time(self.start, self.end)
    }
}
