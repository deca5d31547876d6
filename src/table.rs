//! Decoding of the word frequency table
//!
//! The table is plain text with a header line naming its columns, of which we
//! need `#RANKING`, `WORD` and `PERCENT`. Columns may either be separated by
//! tabulations (possibly padded with spaces) or aligned with runs of spaces.
//! Any other column is ignored.

use crate::error::ParseError;
use csv_async::AsyncReaderBuilder;
use futures::TryStreamExt;
use serde::{de::IgnoredAny, Deserialize};

/// Columns that the table header must provide
pub const REQUIRED_COLUMNS: [&str; 3] = ["#RANKING", "WORD", "PERCENT"];

/// Row of the word frequency table, minus the ranking
///
/// The ranking is redundant with the row's position in the table, which is
/// what actually matters downstream.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Row {
    /// Word, as spelled in the table
    pub word: Box<str>,

    /// Share of the corpus taken by this word, not decoded yet
    pub percent: Box<str>,
}

/// Raw record from the table
#[derive(Debug, Deserialize)]
struct Record {
    /// Must be present, but we don't need its value
    #[serde(rename = "#RANKING")]
    ranking: IgnoredAny,

    #[serde(rename = "WORD")]
    word: Box<str>,

    #[serde(rename = "PERCENT")]
    percent: Box<str>,
}
//
impl Record {
    /// Drop the ranking
    fn into_row(self) -> Row {
        let Self {
            ranking: IgnoredAny,
            word,
            percent,
        } = self;
        Row { word, percent }
    }
}

/// Decode the word frequency table, preserving row order
///
/// Rows whose column count does not match the header are rejected rather than
/// skipped, as is a header that lacks any of the [`REQUIRED_COLUMNS`].
pub async fn parse(table: &[u8]) -> Result<Vec<Row>, ParseError> {
    let text = std::str::from_utf8(table)?;

    // Check out the header
    let header = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .ok_or(ParseError::NoHeader)?;
    let tab_separated = header.contains('\t');
    let columns = split_fields(header, tab_separated);
    log::debug!("Table columns are {columns:?}");
    if let Some(missing) = REQUIRED_COLUMNS
        .into_iter()
        .find(|required| !columns.contains(required))
    {
        return Err(ParseError::MissingColumn(missing));
    }

    // Normalize into padding-free TSV, which the decoder can handle whatever
    // the original layout was
    let tsv = text
        .lines()
        .map(|line| split_fields(line, tab_separated).join("\t"))
        .collect::<Vec<_>>()
        .join("\n");

    // Apply TSV decoder
    let rows = AsyncReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(true)
        .create_deserializer(tsv.as_bytes())
        .into_deserialize::<Record>()
        .map_ok(Record::into_row)
        .try_collect::<Vec<_>>()
        .await?;
    log::info!("Decoded {} table rows", rows.len());
    Ok(rows)
}

/// Split a line of the table into its fields, stripped of padding
fn split_fields(line: &str, tab_separated: bool) -> Vec<&str> {
    if tab_separated {
        line.split('\t').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    }
}
