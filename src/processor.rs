//! The per-file processing pipeline.
//!
//! Files are handled strictly one after another: normalize the name, search
//! TMDB, let the user pick a candidate, fetch detail, classify HD, download
//! the poster, write tags, move. One file's failure never aborts the run;
//! it is logged, counted, and the loop moves on.

use std::path::Path;

use tracing::{error, warn};

use crate::config::Config;
use crate::error::Result;
use crate::metadata::TmdbClient;
use crate::organize;
use crate::probe;
use crate::scanner;
use crate::select::Select;
use crate::tagger::{self, TagSet};

/// What happened to a single file.
#[derive(Debug)]
enum Outcome {
    Tagged,
    Skipped,
}

/// Totals for one run, reported at the end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Files tagged and moved.
    pub processed: usize,
    /// Files the user (or an empty search) skipped; left untouched.
    pub skipped: usize,
    /// Files that hit an error; left wherever the failure found them.
    pub failed: usize,
}

/// Sequential pipeline over one source directory.
pub struct Processor<S: Select> {
    config: Config,
    tmdb: TmdbClient,
    selector: S,
}

impl<S: Select> Processor<S> {
    pub fn new(config: Config, tmdb: TmdbClient, selector: S) -> Self {
        Self {
            config,
            tmdb,
            selector,
        }
    }

    /// Discover files and process each in turn.
    ///
    /// Discovery failure is fatal; everything after that is contained per
    /// file.
    pub async fn run(&self) -> Result<RunSummary> {
        let files = scanner::discover_files(&self.config.library.source)?;
        if files.is_empty() {
            println!(
                "No video files found in {}",
                self.config.library.source.display()
            );
            return Ok(RunSummary::default());
        }

        let mut summary = RunSummary::default();
        for file in &files {
            match self.process_file(file).await {
                Ok(Outcome::Tagged) => summary.processed += 1,
                Ok(Outcome::Skipped) => summary.skipped += 1,
                Err(e) => {
                    summary.failed += 1;
                    error!(file = %file.display(), error = %e, "processing failed");
                    println!("    failed: {e}");
                }
            }
            println!("=========================================================");
        }

        println!(
            "Done: {} tagged, {} skipped, {} failed",
            summary.processed, summary.skipped, summary.failed
        );
        Ok(summary)
    }

    async fn process_file(&self, file: &Path) -> Result<Outcome> {
        println!("Processing file: '{}'", file.display());

        let stem = file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let query = scanner::normalize_title(stem);
        println!("Searching for '{query}'");

        let candidates = self.tmdb.search(&query).await?;
        if candidates.is_empty() {
            println!("No matches found, not renaming '{stem}'");
            return Ok(Outcome::Skipped);
        }

        let Some(index) = self.selector.choose(&candidates) else {
            println!("Not renaming '{stem}'");
            return Ok(Outcome::Skipped);
        };

        let detail = self.tmdb.movie_detail(candidates[index].id).await?;

        // Classification failure downgrades to not-HD instead of dropping
        // the file.
        let hd = match probe::frame_size(file).and_then(|fs| probe::is_hd(&fs)) {
            Ok(hd) => hd,
            Err(e) => {
                warn!(file = %file.display(), error = %e, "HD classification failed, assuming not HD");
                false
            }
        };

        // A failed poster download costs the cover art, not the file.
        let artwork = match &detail.poster_path {
            Some(poster_path) => {
                println!("    getting movie poster");
                match self.tmdb.fetch_poster(poster_path).await {
                    Ok(bytes) => Some(bytes),
                    Err(e) => {
                        warn!(file = %file.display(), error = %e, "poster fetch failed, tagging without artwork");
                        None
                    }
                }
            }
            None => None,
        };

        let tags = TagSet::from_detail(&detail, hd, artwork);
        tagger::write_tags(file, &tags)?;

        let target = organize::move_file(file, &self.config.library.destination, &detail.title)?;
        println!("    moved to {}", target.display());

        Ok(Outcome::Tagged)
    }
}
