//! Running a pre-collected request script in one go.

use crate::cache::FifoPageCache;
use crate::common::PageId;
use crate::sim::{collect_batch, run_batch, BatchInput, SimulationReport};

/// Everything a request script produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptRun {
    /// One report per batch closed by the sentinel, in order.
    pub reports: Vec<SimulationReport>,
    /// Requests after the last sentinel that never formed a batch.
    pub unterminated: Vec<PageId>,
    /// Whether the script stopped on the quit token.
    pub quit: bool,
}

/// Run every batch in `tokens` against `cache`.
///
/// Batches are collected with [`collect_batch`] until the quit token or the
/// end of the tokens. Requests left open at the end are returned in
/// [`ScriptRun::unterminated`] rather than run.
///
/// # Example
/// ```
/// use pagesim::sim::run_script;
/// use pagesim::{FifoPageCache, PageId};
///
/// let mut cache = FifoPageCache::new(8).unwrap();
/// let run = run_script(&mut cache, "1 0 2 0 3".split_whitespace(), |_| {});
///
/// assert_eq!(run.reports.len(), 2);
/// assert_eq!(run.unterminated, vec![PageId::new(3)]);
/// ```
pub fn run_script<I, S, F>(cache: &mut FifoPageCache, tokens: I, mut on_invalid: F) -> ScriptRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str),
{
    let mut tokens = tokens.into_iter();
    let mut reports = Vec::new();
    loop {
        match collect_batch(&mut tokens, &mut on_invalid) {
            BatchInput::Requests(pages) => reports.push(run_batch(cache, &pages)),
            BatchInput::Quit => {
                return ScriptRun {
                    reports,
                    unterminated: Vec::new(),
                    quit: true,
                }
            }
            BatchInput::EndOfInput { pending } => {
                return ScriptRun {
                    reports,
                    unterminated: pending,
                    quit: false,
                }
            }
        }
    }
}
