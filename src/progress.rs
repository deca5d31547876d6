//! Progress reporting infrastructure

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::borrow::Cow;

/// CLI progress report of ongoing operations
///
/// To avoid corrupted terminal output, you should not write anything to stdout
/// or stderr yourself as long as a report is being displayed. Please use logs
/// for debug messages.
#[derive(Clone, Debug, Default)]
pub struct ProgressReport(MultiProgress);
//
impl ProgressReport {
    /// Prepare to report progress on the cli
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare to report on a download of `total_bytes` bytes, or an unknown
    /// amount of bytes if the server did not tell
    pub fn add_download(
        &self,
        what: impl Into<Cow<'static, str>>,
        total_bytes: Option<u64>,
    ) -> ProgressTracker {
        let (bar, template) = match total_bytes {
            Some(len) => (
                ProgressBar::new(len),
                "{prefix} {wide_bar} {decimal_bytes}/{decimal_total_bytes} ({decimal_bytes_per_sec})",
            ),
            None => (
                ProgressBar::new_spinner(),
                "{prefix} {spinner} {decimal_bytes} ({decimal_bytes_per_sec})",
            ),
        };
        let bar = bar.with_prefix(what.into()).with_style(
            ProgressStyle::with_template(template)
                .expect("all styles above should be valid indicatif styles"),
        );
        ProgressTracker {
            bar: self.0.add(bar),
            report: self.0.clone(),
        }
    }
}

/// Mechanism to track progress
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    /// Progress bar for this specific process
    bar: ProgressBar,

    /// Underlying process report
    report: MultiProgress,
}
//
impl ProgressTracker {
    /// Show that a certain amount of progress has been made
    pub fn make_progress(&self, progress: u64) {
        self.bar.inc(progress);
    }

    /// Amount of progress made so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Hide the progress bar once the work is done
    pub fn finish(&self) {
        self.bar.finish_and_clear();
        self.report.remove(&self.bar);
    }
}
