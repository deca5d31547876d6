//! This program builds a list of common words out of a word frequency table,
//! such as those derived from the Google Books Ngram dataset by
//! <https://github.com/hackerb9/gwordlist>.
//!
//! The table is downloaded, words shorter than three characters are dropped,
//! and the most frequent remaining words are written to `word_list.txt`, one
//! per line, in order of decreasing frequency.

mod config;
mod error;
mod fetch;
mod output;
mod progress;
mod table;
mod vocab;

use crate::{config::Config, progress::ProgressReport};
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::num::{NonZeroU64, NonZeroUsize};

/// Build a list of common words from a word frequency table
#[derive(Parser, Debug)]
#[command(version, author, about)]
struct Args {
    /// URL of the word frequency table
    ///
    /// This must be a text table whose header line names at least the
    /// "#RANKING", "WORD" and "PERCENT" columns, with rows sorted by
    /// decreasing word frequency. Columns may be separated by tabs or aligned
    /// with spaces. Files ending in ".gz" are decompressed on the fly.
    #[arg(short, long, default_value = WORD_LIST_URL)]
    url: Box<str>,

    /// Max number of output words
    ///
    /// Words that are too short are discarded before the list is truncated to
    /// this size, so they don't count towards it.
    #[arg(short = 'n', long, default_value_t = VOCAB_SIZE)]
    vocab_size: NonZeroUsize,

    /// Timeout for the download of the word frequency table, in seconds
    #[arg(long = "timeout", default_value = "60")]
    timeout_secs: NonZeroU64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up logging, but don't let a missing syslog daemon stop us
    if let Err(e) = setup_logging() {
        eprintln!("WARNING: Running without logs as syslog is unavailable ({e})");
    }

    // Decode CLI arguments
    let config = Config::new(Args::parse());
    log::debug!("Running with {config:?}");

    // Generate the word list
    let client = config.http_client().context("setting up the HTTP client")?;
    let report = ProgressReport::new();
    run(&config, &client, &report).await?;
    Ok(())
}

/// Download the word frequency table, pick the vocabulary and save it
///
/// Stops at the first failing step. The word list is only written once the
/// full vocabulary is known, so a failed run leaves any previous list as is.
async fn run(
    config: &Config,
    client: &reqwest::Client,
    report: &ProgressReport,
) -> error::Result<()> {
    let table = fetch::fetch(client, &config.url, report).await?;
    let rows = table::parse(&table).await?;
    let vocabulary = vocab::build(rows, config.vocab_size)?;
    output::write(&config.output, &vocabulary).await
}

/// Use anyhow for Result type erasure
pub use anyhow::Result;

/// Default number of words in the output list
pub const VOCAB_SIZE: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(size) => size,
    None => unreachable!(),
};

/// Default word frequency table
pub const WORD_LIST_URL: &str =
    "https://raw.githubusercontent.com/hackerb9/gwordlist/master/frequency-alpha-alldicts.txt";

/// Where the word list is written, relative to the working directory
pub const OUTPUT_PATH: &str = "word_list.txt";

/// Set up logging
fn setup_logging() -> syslog::Result<()> {
    syslog::init(
        syslog::Facility::LOG_USER,
        if cfg!(feature = "log-trace") {
            LevelFilter::Trace
        } else if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{Error, ParseError},
        fetch::test_server::{client, serve_once},
    };
    use std::{path::Path, time::Duration};

    const EXAMPLE: &str = "#RANKING WORD PERCENT\n1 cat 10.5\n2 a 5.0\n3 dog 3.2\n4 elephant 1.1\n";

    async fn run_on(table: &str, vocab_size: usize, output: &Path) -> error::Result<()> {
        let config = Config {
            url: serve_once("words.txt", "200 OK", table.into()).await.into(),
            vocab_size: NonZeroUsize::new(vocab_size).unwrap(),
            timeout: Duration::from_secs(10),
            output: output.to_owned(),
        };
        run(&config, &client(), &ProgressReport::new()).await
    }

    #[tokio::test]
    async fn filter_then_truncate() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join(OUTPUT_PATH);
        run_on(EXAMPLE, 2, &output).await.unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "cat\ndog\n");
    }

    #[tokio::test]
    async fn output_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join(OUTPUT_PATH);
        run_on(EXAMPLE, 1000, &output).await.unwrap();
        let first = std::fs::read(&output).unwrap();
        assert_eq!(first, b"cat\ndog\nelephant\n");
        run_on(EXAMPLE, 1000, &output).await.unwrap();
        assert_eq!(std::fs::read(&output).unwrap(), first);
    }

    #[tokio::test]
    async fn missing_percent_column() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join(OUTPUT_PATH);
        let err = run_on("#RANKING WORD\n1 cat\n2 dog\n", 2, &output)
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::Parse(ParseError::MissingColumn("PERCENT"))),
            "{err:?}"
        );
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn bad_percent_keeps_previous_list() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join(OUTPUT_PATH);
        std::fs::write(&output, "previous\n").unwrap();
        let err = run_on("#RANKING WORD PERCENT\n1 cat 10.5\n2 dog N/A\n", 2, &output)
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::Parse(ParseError::Percent { .. })),
            "{err:?}"
        );
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous\n");
    }

    #[test]
    fn cli_defaults() {
        let args = Args::try_parse_from(["word-list"]).unwrap();
        let config = Config::new(args);
        assert_eq!(&*config.url, WORD_LIST_URL);
        assert_eq!(config.vocab_size, VOCAB_SIZE);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.output, Path::new(OUTPUT_PATH));

        let args = Args::try_parse_from(["word-list", "-n", "50", "--url", "http://localhost/w.txt"])
            .unwrap();
        assert_eq!(args.vocab_size.get(), 50);
        assert_eq!(&*args.url, "http://localhost/w.txt");
        assert!(Args::try_parse_from(["word-list", "-n", "0"]).is_err());
    }
}
