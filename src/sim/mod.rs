//! Batch simulation driver.
//!
//! Turns raw request tokens into batches of [`PageId`](crate::PageId)s,
//! feeds each batch through a [`FifoPageCache`](crate::FifoPageCache) and
//! reports the outcome.
//!
//! # Components
//! - [`parse_token`] / [`collect_batch`] - Input tokens to page batches
//! - [`run_batch`] / [`SimulationReport`] - One independent simulation run
//! - [`run_script`] - Every batch of a pre-collected token list
//! - [`Simulator`] - Prompt/read/report loop over any reader and writer

mod batch;
mod report;
mod script;
mod simulator;
mod token;

pub use batch::{collect_batch, BatchCollector, BatchInput, Step};
pub use report::{run_batch, SimulationReport};
pub use script::{run_script, ScriptRun};
pub use simulator::Simulator;
pub use token::{parse_token, RequestToken};
