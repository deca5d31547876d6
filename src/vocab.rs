//! Selection of the vocabulary from the decoded word frequency table

use crate::{error::ParseError, table::Row};
use std::num::NonZeroUsize;

/// Minimal number of characters in a vocabulary word
///
/// Shorter words are mostly articles, prepositions and abbreviations.
pub const MIN_WORD_CHARS: usize = 3;

/// Final ordered word list
///
/// Holds at most the requested number of words, each at least
/// [`MIN_WORD_CHARS`] characters long, in the order of the source table.
pub type Vocabulary = Vec<Box<str>>;

/// Pick the vocabulary from table rows ordered by decreasing frequency
///
/// Every row's percentage must be well-formed, including those of rows that
/// do not end up in the vocabulary. Words are then filtered by length, and
/// only then truncated to `vocab_size` words, so short words that rank high do
/// not eat into the vocabulary size.
pub fn build(rows: Vec<Row>, vocab_size: NonZeroUsize) -> Result<Vocabulary, ParseError> {
    // Check that the percentages make sense before anything else
    for row in &rows {
        if parse_percent(&row.percent).is_none() {
            return Err(ParseError::Percent {
                word: row.word.clone(),
                text: row.percent.clone(),
            });
        }
    }

    // Filter out short words, then keep the most frequent remaining ones
    let num_rows = rows.len();
    let mut num_short = 0;
    let vocabulary = rows
        .into_iter()
        .filter(|row| {
            let long_enough = is_long_enough(&row.word);
            if !long_enough {
                log::trace!("Rejected {:?} because it's too short", row.word);
                num_short += 1;
            }
            long_enough
        })
        .take(vocab_size.get())
        .map(|row| row.word)
        .collect::<Vocabulary>();
    log::info!(
        "Kept {} words out of {num_rows} rows ({num_short} short words skipped before reaching the target size of {vocab_size})",
        vocabulary.len(),
    );
    Ok(vocabulary)
}

/// Truth that a word has enough characters to enter the vocabulary
///
/// Length is counted in Unicode scalar values, not bytes, so that words from
/// non-ASCII alphabets are not favored.
pub fn is_long_enough(word: &str) -> bool {
    word.chars().nth(MIN_WORD_CHARS - 1).is_some()
}

/// Decode a percentage such as `3.9`, `3.9%` or `1,234.5`
pub fn parse_percent(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_suffix('%').unwrap_or(text).trim_end();
    let digits = text
        .chars()
        .filter(|&c| c != ',' && c != '_')
        .collect::<String>();
    digits.parse::<f64>().ok().filter(|percent| percent.is_finite())
}
