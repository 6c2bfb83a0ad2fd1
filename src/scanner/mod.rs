//! Source directory scanning.
//!
//! Discovers candidate video files by extension allow-list and turns their
//! filenames into search queries.

pub mod normalizer;

pub use normalizer::normalize_title;

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Extensions considered video files for tagging.
const VIDEO_EXTENSIONS: [&str; 2] = ["mp4", "m4v"];

/// Check whether a path carries one of the allowed video extensions.
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            VIDEO_EXTENSIONS.iter().any(|allowed| *allowed == e)
        })
        .unwrap_or(false)
}

/// Enumerate candidate video files in the top level of `dir`.
///
/// Enumeration order is whatever the directory yields; an empty result is
/// valid. A missing or unreadable directory is fatal for the whole run.
pub fn discover_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::discovery(format!(
            "source directory does not exist: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| Error::discovery(e.to_string()))?;
        if entry.file_type().is_file() && is_video_file(entry.path()) {
            debug!(file = %entry.path().display(), "discovered video file");
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
