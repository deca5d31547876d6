//! Storage of the word list

use crate::error::{Error, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::{
    fs::{self, File},
    io::{AsyncWriteExt, BufWriter},
};

/// Write `words` to `path`, one per line, replacing any previous file
///
/// The words are first written to a temporary file next to `path`, which is
/// then renamed over `path`. Readers of `path` thus either see the previous
/// word list or the new one, never a truncated file.
pub async fn write(path: &Path, words: &[Box<str>]) -> Result<()> {
    let tmp_path = tmp_path(path);
    let fail = |source: io::Error| Error::Write {
        path: path.to_owned(),
        source,
    };
    if let Err(e) = write_lines(&tmp_path, words).await {
        // The temporary file may not even exist, so this is best-effort
        let _ = fs::remove_file(&tmp_path).await;
        return Err(fail(e));
    }
    if let Err(e) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(fail(e));
    }
    log::info!("Wrote {} words to {}", words.len(), path.display());
    Ok(())
}

/// Temporary file name used while writing `path`
fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    tmp.into()
}

/// Write one word per line into a fresh file
async fn write_lines(path: &Path, words: &[Box<str>]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path).await?);
    for word in words {
        file.write_all(word.as_bytes()).await?;
        file.write_all(b"\n").await?;
    }
    file.flush().await?;
    file.into_inner().sync_all().await
}
