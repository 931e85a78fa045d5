// src/data_input/capture_dir.rs

use log::info;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data_input::capture_parser::capture_name;
use crate::error::JitterError;

/// A capture export found in the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureFile {
    pub name: String,
    pub path: PathBuf,
}

/// Lists every file in `data_dir` whose name contains `.csv`, sorted by file name.
///
/// Output files are keyed by capture name, so two files with the same name
/// (e.g. `a.csv` and `a.old.csv`) are rejected.
pub fn discover_captures(data_dir: &Path) -> Result<Vec<CaptureFile>, JitterError> {
    let entries = fs::read_dir(data_dir).map_err(|source| JitterError::DataDir {
        path: data_dir.to_path_buf(),
        source,
    })?;

    let mut captures: Vec<CaptureFile> = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .file_name()
            .map(|n| n.to_string_lossy().contains(".csv"))
            .unwrap_or(false);
        if is_csv {
            captures.push(CaptureFile {
                name: capture_name(&path),
                path,
            });
        }
    }

    if captures.is_empty() {
        return Err(JitterError::NoCaptures(data_dir.to_path_buf()));
    }

    captures.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for capture in &captures {
        if let Some(first) = seen.insert(&capture.name, &capture.path) {
            return Err(JitterError::DuplicateCaptureName {
                name: capture.name.clone(),
                first: first.to_path_buf(),
                second: capture.path.clone(),
            });
        }
    }

    info!(
        "Found {} capture file(s) in '{}'",
        captures.len(),
        data_dir.display()
    );
    Ok(captures)
}

// src/data_input/capture_dir.rs
