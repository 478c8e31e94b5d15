#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Text of a gauge file with one location per gauge and the given data rows
pub fn gauge_file_text(locations: &[(f64, f64)], rows: &[Vec<f64>]) -> String {
    let mut text = format!("number of gauges: {}\n\n ID x y\n", locations.len());
    for (i, (x, y)) in locations.iter().enumerate() {
        text.push_str(&format!("{} {x} {y}\n", i + 1));
    }
    text.push_str("\nwave gauges\n\n time");
    for i in 1..=locations.len() {
        text.push_str(&format!(" P{i}"));
    }
    text.push('\n');
    text.push_str(&rows_text(rows));
    text
}

pub fn rows_text(rows: &[Vec<f64>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
                + "\n"
        })
        .collect()
}

/// Three gauges at x = 1, 2, 3 with rows [0,1,2,3], [1,2,3,4], [2,0,0,0]
pub fn three_gauge_text() -> String {
    gauge_file_text(
        &[(1.0, 0.5), (2.0, 0.5), (3.0, 0.5)],
        &[
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0, 4.0],
            vec![2.0, 0.0, 0.0, 0.0],
        ],
    )
}

/// Main log with rows of iteration, timestep, simtime, Volume 1, Volume2, Inflow, Outflow, Ui
pub fn mainlog_text(rows: &[[f64; 8]]) -> String {
    let mut text = String::from("REEF3D main log\n\n\n\n");
    text.push_str("#iteration #timestep #simtime #itertime #Volume 1 #Volume2 #Inflow #Outflow #Ui\n");
    for r in rows {
        text.push_str(&format!(
            "{} {} {} 0.1 {} {} {} {} {}\n",
            r[0], r[1], r[2], r[3], r[4], r[5], r[6], r[7]
        ));
    }
    text
}

/// Sediment log: it t_sim dt_sed t_sed sediter slidecells bedmin bedmax
pub fn sedlog_text(rows: &[[f64; 8]]) -> String {
    let mut text = String::from("sediment log\n\nit t_sim dt_sed t_sed sediter slidecells bedmin bedmax\n");
    text.push_str(&rows_text(
        &rows.iter().map(|r| r.to_vec()).collect::<Vec<_>>(),
    ));
    text
}

/// Profile snapshot with two metadata lines and `x value` rows from line 10
pub fn snapshot_text(first: &str, second: &str, rows: &[(f64, f64)]) -> String {
    let mut text = format!("{first}\n{second}\n");
    for i in 3..=9 {
        text.push_str(&format!("header {i}\n"));
    }
    for (x, v) in rows {
        text.push_str(&format!("{x} {v}\n"));
    }
    text
}

/// Temporary case directory
pub struct CaseFixture {
    pub dir: TempDir,
}

impl CaseFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file below the case root, creating parent folders
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.root().join(relative).is_file()
    }
}
