//! Request token parsing.

use crate::common::config::{END_OF_BATCH, QUIT_TOKEN};
use crate::common::PageId;

/// One line of user input, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestToken {
    /// A page request.
    Page(PageId),
    /// The sentinel closing the current batch.
    EndOfBatch,
    /// Stop the whole run.
    Quit,
    /// Anything else. Never reaches the cache.
    Invalid,
}

/// Classify a raw input token.
///
/// Only ASCII digit strings are page requests; signs, spaces inside the
/// number and values past `u32::MAX` are all invalid. Surrounding
/// whitespace (including the line terminator) is ignored.
pub fn parse_token(raw: &str) -> RequestToken {
    let token = raw.trim();
    if token == QUIT_TOKEN {
        return RequestToken::Quit;
    }
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return RequestToken::Invalid;
    }
    match token.parse::<u32>() {
        Ok(END_OF_BATCH) => RequestToken::EndOfBatch,
        Ok(id) => RequestToken::Page(PageId::new(id)),
        Err(_) => RequestToken::Invalid,
    }
}
