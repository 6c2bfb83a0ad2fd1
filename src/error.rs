//! Error types for the per-file processing pipeline.
//!
//! Discovery and configuration problems are fatal for the whole run; every
//! other variant is scoped to a single file so the batch can continue past
//! it and report a summary at the end.

use std::path::PathBuf;

/// Errors raised while discovering and processing library files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source directory could not be enumerated.
    #[error("Discovery failed: {0}")]
    Discovery(String),

    /// The TMDB search request failed.
    #[error("Search failed: {0}")]
    Search(String),

    /// The TMDB detail lookup for a chosen candidate failed.
    #[error("Detail fetch failed: {0}")]
    DetailFetch(String),

    /// The frame-size probe produced no usable dimensions.
    #[error("Classification failed: {0}")]
    Classification(String),

    /// The poster download failed.
    #[error("Artwork fetch failed: {0}")]
    ArtworkFetch(String),

    /// Writing the MP4 metadata atoms failed; the on-disk tag state is
    /// indeterminate after this.
    #[error("Tag write failed: {0}")]
    TagWrite(String),

    /// The destination filename already exists.
    #[error("Destination already exists: {}", .0.display())]
    MoveCollision(PathBuf),

    /// The rename into the destination directory failed.
    #[error("Move failed: {0}")]
    Move(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new Discovery error.
    pub fn discovery<S: Into<String>>(msg: S) -> Self {
        Self::Discovery(msg.into())
    }

    /// Create a new Search error.
    pub fn search<S: Into<String>>(msg: S) -> Self {
        Self::Search(msg.into())
    }

    /// Create a new DetailFetch error.
    pub fn detail_fetch<S: Into<String>>(msg: S) -> Self {
        Self::DetailFetch(msg.into())
    }

    /// Create a new Classification error.
    pub fn classification<S: Into<String>>(msg: S) -> Self {
        Self::Classification(msg.into())
    }

    /// Create a new ArtworkFetch error.
    pub fn artwork_fetch<S: Into<String>>(msg: S) -> Self {
        Self::ArtworkFetch(msg.into())
    }

    /// Create a new TagWrite error.
    pub fn tag_write<S: Into<String>>(msg: S) -> Self {
        Self::TagWrite(msg.into())
    }

    /// Create a new Move error.
    pub fn file_move<S: Into<String>>(msg: S) -> Self {
        Self::Move(msg.into())
    }
}

/// Convenience result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
