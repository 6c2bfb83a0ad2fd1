//! Filename to search query normalization.
//!
//! Pure string heuristics for scrubbing release noise out of a filename
//! before it is sent to the metadata search. Rule order matters: the
//! hyphenated source marker has to be removed before hyphens are turned
//! into spaces.

use regex::Regex;
use std::sync::LazyLock;

/// Disc/part markers like `t01`, `t12`.
static DISC_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("t[0-9][0-9]").expect("disc marker pattern is valid"));

/// Derive a lowercase search query from a filename stem.
///
/// Applied rules, in order: lowercase, strip `t`-prefixed two-digit disc
/// markers, strip the literal `blu-ray` marker, then replace underscores,
/// hyphens, and dots with spaces. Idempotent: a second application returns
/// its input unchanged.
pub fn normalize_title(stem: &str) -> String {
    let query = stem.to_lowercase();
    let query = DISC_MARKER.replace_all(&query, "");
    let query = query.replace("blu-ray", "");
    let query = query.replace('_', " ");
    let query = query.replace('-', " ");
    query.replace('.', " ")
}
