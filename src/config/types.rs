use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub library: LibraryConfig,

    pub tmdb: TmdbConfig,
}

/// Source and destination directories for the rename pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Directory scanned for video files (top level only).
    pub source: PathBuf,

    /// Directory files are moved into after tagging.
    pub destination: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    /// TMDB v3 API key.
    pub api_key: String,

    /// ISO-639-1 language tag sent with every request.
    #[serde(default = "default_language")]
    pub language: String,

    /// Pass-through `include_adult` flag on search requests.
    #[serde(default = "default_include_adult")]
    pub include_adult: bool,
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_include_adult() -> bool {
    true
}
