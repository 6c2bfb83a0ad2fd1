//! Frame-size probing via ffprobe.
//!
//! The pipeline only needs the video frame dimensions, so the ffprobe call
//! is narrowed to the first video stream's `width` and `height` fields.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Height above which a file is flagged HD (strictly greater than).
const HD_HEIGHT_THRESHOLD: u32 = 700;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    width: Option<u32>,
    height: Option<u32>,
}

/// Probe a file's video frame size, returned as `"<width>x<height>"`.
pub fn frame_size(path: &Path) -> Result<String> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=width,height",
            "-print_format",
            "json",
        ])
        .arg(path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::classification("ffprobe not found on PATH".to_string())
            } else {
                Error::Io(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::classification(format!("ffprobe failed: {stderr}")));
    }

    let parsed: FfprobeOutput = serde_json::from_slice(&output.stdout)
        .map_err(|e| Error::classification(format!("bad ffprobe output: {e}")))?;

    let stream = parsed
        .streams
        .first()
        .ok_or_else(|| Error::classification("no video stream found".to_string()))?;

    match (stream.width, stream.height) {
        (Some(w), Some(h)) => Ok(format!("{w}x{h}")),
        _ => Err(Error::classification(
            "video stream has no dimensions".to_string(),
        )),
    }
}

/// Decide the HD flag from a `"<width>x<height>"` string.
///
/// True iff the height is strictly greater than 700. A malformed string is
/// a classification error, not a silent "not HD".
pub fn is_hd(frame_size: &str) -> Result<bool> {
    let (_, height) = frame_size
        .split_once('x')
        .ok_or_else(|| Error::classification(format!("malformed frame size: {frame_size:?}")))?;

    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| Error::classification(format!("malformed frame height: {frame_size:?}")))?;

    Ok(height > HD_HEIGHT_THRESHOLD)
}

/// Availability of one external tool.
#[derive(Debug)]
pub struct ToolInfo {
    pub name: &'static str,
    pub available: bool,
    pub path: Option<PathBuf>,
}

/// Check the external tools the pipeline shells out to.
pub fn check_tools() -> Vec<ToolInfo> {
    ["ffprobe"]
        .into_iter()
        .map(|name| match which::which(name) {
            Ok(path) => ToolInfo {
                name,
                available: true,
                path: Some(path),
            },
            Err(_) => ToolInfo {
                name,
                available: false,
                path: None,
            },
        })
        .collect()
}
