//! Failures of the word list generation pipeline
//!
//! Every stage of the pipeline is fatal on failure, so these errors are only
//! ever propagated up to `main`. Each variant names the stage that failed.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Error from one stage of the pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Could not download the word frequency table
    #[error("failed to fetch word frequency table from {url}")]
    Fetch {
        url: Box<str>,
        #[source]
        source: FetchFailure,
    },

    /// Word frequency table is malformed
    #[error("failed to parse word frequency table")]
    Parse(#[from] ParseError),

    /// Could not write the word list to disk
    #[error("failed to write word list to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Low-level cause of a fetch failure
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// HTTP client error: network, DNS, timeout or non-success status
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Error while reading or decompressing the response body
    #[error(transparent)]
    Body(#[from] io::Error),
}

/// Reasons why the word frequency table could not be parsed
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("table is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("table has no header line")]
    NoHeader,

    #[error("header is missing the {0:?} column")]
    MissingColumn(&'static str),

    #[error(transparent)]
    Table(#[from] csv_async::Error),

    #[error("invalid percentage {text:?} for word {word:?}")]
    Percent { word: Box<str>, text: Box<str> },
}

/// Shorthand for results of pipeline stages
pub type Result<T, E = Error> = std::result::Result<T, E>;
