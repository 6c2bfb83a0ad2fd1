//! Reeltag - identify movies from filenames, tag their MP4 metadata, and
//! rename them into a library.
//!
//! This library crate exposes the pipeline components for integration
//! testing.

pub mod config;
pub mod error;
pub mod metadata;
pub mod organize;
pub mod probe;
pub mod processor;
pub mod scanner;
pub mod select;
pub mod tagger;
