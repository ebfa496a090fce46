use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pagesim::common::config::INVALID_INPUT_MESSAGE;
use pagesim::sim::run_script;
use pagesim::{FifoPageCache, Simulator, DEFAULT_CAPACITY};

#[derive(Parser)]
#[command(name = "pagesim", about = "FIFO page-cache simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay page requests through a FIFO cache.
    Simulate {
        /// Number of pages the cache holds.
        #[arg(long, short, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,

        /// Whitespace-separated requests ending in 0, instead of reading stdin.
        #[arg(long)]
        requests: Option<String>,
    },
    /// Count dictionary words in a text file.
    Words {
        /// One word per line.
        dictionary: PathBuf,
        text: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn simulate(capacity: usize, requests: Option<String>) -> Result<()> {
    let mut cache = FifoPageCache::new(capacity).context("failed to build cache")?;

    if let Some(requests) = requests {
        let run = run_script(&mut cache, requests.split_whitespace(), |_| {
            println!("{INVALID_INPUT_MESSAGE}");
        });
        for report in &run.reports {
            println!("{report}");
        }
        if !run.unterminated.is_empty() {
            anyhow::bail!(
                "{} request(s) after the last batch were not run; end each batch with 0",
                run.unterminated.len()
            );
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut simulator = Simulator::new(cache, stdin.lock(), io::stdout().lock())
        .with_prompt(interactive);
    let batches = simulator.run().context("simulation failed")?;
    info!(batches, "simulation finished");
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Simulate { capacity, requests } => simulate(capacity, requests),
        Command::Words { dictionary, text } => {
            let counts = pagesim::wordcount::count_words_in_files(&dictionary, &text)
                .with_context(|| {
                    format!(
                        "failed to count words of {} in {}",
                        dictionary.display(),
                        text.display()
                    )
                })?;
            print!("{counts}");
            Ok(())
        }
    }
}
