//! Interactive prompt/read/report loop.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::cache::FifoPageCache;
use crate::common::config::{INVALID_INPUT_MESSAGE, REQUEST_PROMPT};
use crate::common::Result;
use crate::sim::{run_batch, BatchCollector, BatchInput, SimulationReport, Step};

/// Drives repeated simulation batches over a line-oriented reader.
///
/// Each token is read after writing [`REQUEST_PROMPT`]. A batch closes on
/// the end-of-batch sentinel and its report is written out; the loop ends
/// on the quit token or end of input.
///
/// # Example
/// ```
/// use pagesim::sim::Simulator;
/// use pagesim::FifoPageCache;
///
/// let input = "1\n1\n2\n0\nQ\n".as_bytes();
/// let mut output = Vec::new();
/// let cache = FifoPageCache::new(8).unwrap();
///
/// let batches = Simulator::new(cache, input, &mut output).run().unwrap();
/// assert_eq!(batches, 1);
/// assert!(String::from_utf8(output).unwrap().contains("Current cache state: [1, 2]"));
/// ```
pub struct Simulator<R, W> {
    cache: FifoPageCache,
    input: R,
    output: W,
    show_prompt: bool,
}

impl<R: BufRead, W: Write> Simulator<R, W> {
    pub fn new(cache: FifoPageCache, input: R, output: W) -> Self {
        Self {
            cache,
            input,
            output,
            show_prompt: true,
        }
    }

    /// Toggle the per-token prompt (useful when input is piped).
    pub fn with_prompt(mut self, show_prompt: bool) -> Self {
        self.show_prompt = show_prompt;
        self
    }

    /// Run batches until quit or end of input.
    ///
    /// Returns the number of completed batches.
    pub fn run(&mut self) -> Result<usize> {
        let mut completed = 0;
        while self.run_once()?.is_some() {
            completed += 1;
        }
        Ok(completed)
    }

    /// Collect and run a single batch.
    ///
    /// Returns `None` once the user quits or input runs out.
    pub fn run_once(&mut self) -> Result<Option<SimulationReport>> {
        let requests = match self.read_batch()? {
            BatchInput::Requests(requests) => requests,
            BatchInput::Quit => return Ok(None),
            BatchInput::EndOfInput { pending } => {
                debug!(discarded = pending.len(), "input ended before end of batch");
                return Ok(None);
            }
        };

        let report = run_batch(&mut self.cache, &requests);
        writeln!(self.output, "{}", report)?;
        self.output.flush()?;
        Ok(Some(report))
    }

    /// Give back the cache.
    pub fn into_cache(self) -> FifoPageCache {
        self.cache
    }

    fn read_batch(&mut self) -> Result<BatchInput> {
        let mut collector = BatchCollector::new();
        let mut line = String::new();
        loop {
            if self.show_prompt {
                write!(self.output, "{}", REQUEST_PROMPT)?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(collector.finish());
            }

            match collector.feed(&line) {
                Step::Pending => {}
                Step::Rejected => writeln!(self.output, "{}", INVALID_INPUT_MESSAGE)?,
                Step::Complete(batch) => return Ok(batch),
            }
        }
    }
}
