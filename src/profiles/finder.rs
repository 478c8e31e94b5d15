use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::utils::wildcard_to_regex;

/// Recursively collect files under `dir` whose name matches a shell wildcard
///
/// The result is sorted by path. A directory that does not exist yields an
/// empty list, the same as an empty one.
pub fn find_files(dir: impl AsRef<Path>, pattern: &str) -> io::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let re = Regex::new(&wildcard_to_regex(pattern))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut found = Vec::new();
    if !dir.is_dir() {
        warn!("Profile folder {} does not exist", dir.display());
        return Ok(found);
    }

    walk(dir, &re, &mut found)?;
    found.sort();
    debug!(
        "Found {} files matching '{}' in {}",
        found.len(),
        pattern,
        dir.display()
    );
    Ok(found)
}

fn walk(dir: &Path, re: &Regex, found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, re, found)?;
        } else if path
            .file_name()
            .map(|name| re.is_match(&name.to_string_lossy()))
            .unwrap_or(false)
        {
            found.push(path);
        }
    }
    Ok(())
}
