//! Filename sanitization and the final move into the destination library.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Characters stripped from filenames. The Windows invalid set is the
/// superset, so names built from it stay portable across volumes.
const INVALID_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Strip every invalid filename character (and control characters) from a
/// title. Everything else passes through untouched.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| !INVALID_FILENAME_CHARS.contains(c) && !c.is_control())
        .collect()
}

/// Build the destination path for a file: sanitized title plus the source
/// file's extension, inside `dest_dir`.
///
/// A title that sanitizes to nothing falls back to the source stem so the
/// move never produces a bare-extension dotfile.
pub fn target_path(dest_dir: &Path, title: &str, source: &Path) -> PathBuf {
    let mut file_name = sanitize_file_name(title);
    if file_name.is_empty() {
        file_name = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();
    }
    if let Some(ext) = source.extension().and_then(|e| e.to_str()) {
        file_name.push('.');
        file_name.push_str(ext);
    }
    dest_dir.join(file_name)
}

/// Rename a tagged file into the destination directory under its canonical
/// title.
///
/// An existing destination is a collision error; there is no overwrite and
/// no auto-increment.
pub fn move_file(source: &Path, dest_dir: &Path, title: &str) -> Result<PathBuf> {
    let target = target_path(dest_dir, title, source);
    if target.exists() {
        return Err(Error::MoveCollision(target));
    }

    fs::rename(source, &target)
        .map_err(|e| Error::file_move(format!("{} -> {}: {e}", source.display(), target.display())))?;

    Ok(target)
}
