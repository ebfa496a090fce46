//! Collecting a batch of requests from a token stream.

use tracing::warn;

use crate::common::PageId;
use crate::sim::{parse_token, RequestToken};

/// What a token stream produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchInput {
    /// Requests up to (not including) the end-of-batch sentinel.
    Requests(Vec<PageId>),
    /// The quit token was read. Requests read before it are dropped.
    Quit,
    /// Input ran out before the sentinel.
    EndOfInput {
        /// Requests read since the last sentinel.
        pending: Vec<PageId>,
    },
}

/// Result of feeding one token to a [`BatchCollector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Token accepted, batch still open.
    Pending,
    /// Token was not a page, the sentinel, or quit. Nothing was recorded.
    Rejected,
    /// The batch is closed.
    Complete(BatchInput),
}

/// Accumulates request tokens into one batch.
///
/// Every source of tokens (a pre-split string, an interactive reader) goes
/// through [`feed`](BatchCollector::feed), so the sentinel, quit and
/// rejection rules are applied the same way everywhere.
#[derive(Debug, Default)]
pub struct BatchCollector {
    requests: Vec<PageId>,
}

impl BatchCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `raw` and update the batch.
    pub fn feed(&mut self, raw: &str) -> Step {
        match parse_token(raw) {
            RequestToken::Page(page) => {
                self.requests.push(page);
                Step::Pending
            }
            RequestToken::EndOfBatch => {
                Step::Complete(BatchInput::Requests(std::mem::take(&mut self.requests)))
            }
            RequestToken::Quit => {
                self.requests.clear();
                Step::Complete(BatchInput::Quit)
            }
            RequestToken::Invalid => {
                warn!(token = raw.trim(), "rejected request token");
                Step::Rejected
            }
        }
    }

    /// Close the batch because input ran out.
    pub fn finish(self) -> BatchInput {
        BatchInput::EndOfInput {
            pending: self.requests,
        }
    }
}

/// Read tokens until the end-of-batch sentinel.
///
/// Invalid tokens are skipped and handed to `on_invalid`. Tokens after the
/// sentinel are left unconsumed in `tokens`.
///
/// # Example
/// ```
/// use pagesim::sim::{collect_batch, BatchInput};
/// use pagesim::PageId;
///
/// let mut tokens = ["3", "oops", "5", "0", "9"].into_iter();
/// let batch = collect_batch(&mut tokens, |_| {});
/// assert_eq!(batch, BatchInput::Requests(vec![PageId::new(3), PageId::new(5)]));
/// assert_eq!(tokens.next(), Some("9"));
/// ```
pub fn collect_batch<I, S, F>(tokens: I, mut on_invalid: F) -> BatchInput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str),
{
    let mut collector = BatchCollector::new();
    for raw in tokens {
        let raw = raw.as_ref();
        match collector.feed(raw) {
            Step::Pending => {}
            Step::Rejected => on_invalid(raw),
            Step::Complete(batch) => return batch,
        }
    }
    collector.finish()
}
