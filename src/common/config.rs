//! Configuration constants for pagesim.

/// Number of pages the simulated cache holds when no capacity is given.
///
/// Eight slots is small enough that eviction shows up after a handful of
/// requests typed by hand.
pub const DEFAULT_CAPACITY: usize = 8;

/// Request value that ends a batch of page requests.
///
/// The sentinel itself is never fed to the cache.
pub const END_OF_BATCH: u32 = 0;

/// Token that ends the whole simulation run.
pub const QUIT_TOKEN: &str = "Q";

/// Message shown for a token that is neither a page, the sentinel, nor quit.
pub const INVALID_INPUT_MESSAGE: &str = "This is not a valid input.";

/// Prompt shown before each request token is read.
pub const REQUEST_PROMPT: &str = "What page would you like? Please type pages as integers and \
end your requests by typing [0], to end the program use command [Q]: ";
