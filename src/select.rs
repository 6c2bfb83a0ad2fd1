//! Candidate selection.
//!
//! The human at the console is the disambiguation oracle: one blocking
//! prompt per file. The trait exists so tests can script the choice
//! instead of reading stdin.

use std::collections::VecDeque;
use std::sync::Mutex;

use dialoguer::Input;

use crate::metadata::SearchResult;

/// Chooses one candidate (by zero-based index) or skips the file.
pub trait Select {
    fn choose(&self, candidates: &[SearchResult]) -> Option<usize>;
}

/// Interactive console selector.
///
/// Renders each candidate as `[n] year - title - TMDB URL` with a 1-based
/// index and reads a single line. Anything that does not parse to an index
/// within range means skip; there is no re-prompt.
pub struct ConsolePrompt;

impl Select for ConsolePrompt {
    fn choose(&self, candidates: &[SearchResult]) -> Option<usize> {
        println!("Which movie is this file? (enter -1 to skip)");
        for (i, candidate) in candidates.iter().enumerate() {
            println!("  {}", candidate_row(i, candidate));
        }

        let input: String = Input::new()
            .with_prompt("Choice")
            .allow_empty(true)
            .interact_text()
            .ok()?;

        resolve_choice(&input, candidates.len())
    }
}

/// One display row for a candidate, with a 1-based index. A candidate
/// without a release year shows `????` in the year column.
fn candidate_row(index: usize, candidate: &SearchResult) -> String {
    let year = candidate
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "????".to_string());
    format!(
        "[{}] {} - {} - https://www.themoviedb.org/movie/{}",
        index + 1,
        year,
        candidate.title,
        candidate.id
    )
}

/// Parse a raw input line against a candidate count.
///
/// Unparseable input, values ≤ 0, and values past the end all resolve to
/// skip. A valid 1-based choice comes back as a zero-based index.
pub fn resolve_choice(input: &str, count: usize) -> Option<usize> {
    let choice: i64 = input.trim().parse().ok()?;
    if choice <= 0 || choice as usize > count {
        return None;
    }
    Some(choice as usize - 1)
}

/// Scripted selector for tests: replays a fixed queue of choices.
pub struct ScriptedSelect {
    choices: Mutex<VecDeque<Option<usize>>>,
}

impl ScriptedSelect {
    pub fn new(choices: impl IntoIterator<Item = Option<usize>>) -> Self {
        Self {
            choices: Mutex::new(choices.into_iter().collect()),
        }
    }
}

impl Select for ScriptedSelect {
    fn choose(&self, _candidates: &[SearchResult]) -> Option<usize> {
        self.choices
            .lock()
            .expect("selector mutex poisoned")
            .pop_front()
            .flatten()
    }
}
