/// Rectangular numeric table: column 0 is time, the rest are one column per gauge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesTable {
    width: usize,
    rows: Vec<Vec<f64>>,
}

impl SeriesTable {
    /// Build a table from rows that the caller has already checked to be `width` wide
    pub(crate) fn from_checked_rows(width: usize, rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == width));
        Self { width, rows }
    }

    /// Build a table, returning the index of the first row with a different width.
    /// A non-empty table needs at least the time column.
    pub fn new(width: usize, rows: Vec<Vec<f64>>) -> Result<Self, usize> {
        if width == 0 && !rows.is_empty() {
            return Err(0);
        }
        match rows.iter().position(|r| r.len() != width) {
            Some(idx) => Err(idx),
            None => Ok(Self { width, rows }),
        }
    }

    /// Number of columns, time included
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn gauge_count(&self) -> usize {
        self.width.saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r[0])
    }

    /// Largest time value, `None` for an empty table
    pub fn max_time(&self) -> Option<f64> {
        self.times().reduce(f64::max)
    }

    /// Values of one column (0 = time)
    pub fn column(&self, col: usize) -> Option<Vec<f64>> {
        if col >= self.width {
            return None;
        }
        Some(self.rows.iter().map(|r| r[col]).collect())
    }

    /// (time, value - offset) pairs for a 1-based gauge number
    pub fn gauge_series(&self, gauge: usize, offset: f64) -> Option<Vec<(f64, f64)>> {
        if gauge == 0 || gauge >= self.width {
            return None;
        }
        Some(self.rows.iter().map(|r| (r[0], r[gauge] - offset)).collect())
    }

    /// Rows whose time lies in the closed interval `[start, end]`
    pub fn filter_time(&self, start: f64, end: f64) -> SeriesTable {
        let rows = self
            .rows
            .iter()
            .filter(|r| r[0] >= start && r[0] <= end)
            .cloned()
            .collect();
        Self {
            width: self.width,
            rows,
        }
    }
}
