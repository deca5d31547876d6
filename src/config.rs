//! Processing pipeline configuration

use crate::Args;
use std::{num::NonZeroUsize, path::PathBuf, sync::Arc, time::Duration};

/// Final process configuration
///
/// This is the result of digesting [`Args`]. Please refer to [`Args`] to know
/// more about the meaning of each field.
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    pub url: Box<str>,
    pub vocab_size: NonZeroUsize,
    pub timeout: Duration,

    /// Where the word list is written
    pub output: PathBuf,
}
//
impl Config {
    /// Determine process configuration from CLI arguments
    pub(crate) fn new(args: Args) -> Arc<Self> {
        let Args {
            url,
            vocab_size,
            timeout_secs,
        } = args;
        Arc::new(Self {
            url,
            vocab_size,
            timeout: Duration::from_secs(timeout_secs.get()),
            output: crate::OUTPUT_PATH.into(),
        })
    }

    /// Build the HTTP client used to fetch the word frequency table
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder().timeout(self.timeout).build()
    }
}
