//! Download of the word frequency table

use crate::{
    error::{Error, FetchFailure, Result},
    progress::ProgressReport,
};
use async_compression::tokio::bufread::GzipDecoder;
use futures::stream::StreamExt;
use reqwest::Response;
use std::io::{self, ErrorKind};
use tokio::io::AsyncReadExt;
use tokio_util::io::StreamReader;

/// Download the word frequency table at `url`, decompressing it on the fly if
/// it is served as a `.gz` file
///
/// The whole table is collected in memory. There is no retry: any failure
/// aborts the download.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    report: &ProgressReport,
) -> Result<Vec<u8>> {
    let fail = |source: FetchFailure| Error::Fetch {
        url: url.into(),
        source,
    };

    // Start the download
    log::info!("Downloading word frequency table from {url}");
    let response = client
        .get(url)
        .send()
        .await
        .and_then(Response::error_for_status)
        .map_err(|e| fail(e.into()))?;
    let gzipped = response.url().path().ends_with(".gz");
    let download = report.add_download("Downloading word frequencies", response.content_length());

    // Slice the download into chunks of bytes
    let mut body = StreamReader::new(response.bytes_stream().map({
        let download = download.clone();
        move |res| {
            res
                // Track how many bytes have been downloaded so far
                .inspect(|bytes_block| download.make_progress(bytes_block.len() as u64))
                // Translate reqwest errors into I/O errors
                .map_err(|e| io::Error::new(ErrorKind::Other, Box::new(e)))
        }
    }));

    // Collect the table, going through a gzip decoder if need be
    let mut table = Vec::new();
    let read = if gzipped {
        GzipDecoder::new(body).read_to_end(&mut table).await
    } else {
        body.read_to_end(&mut table).await
    };
    download.finish();
    read.map_err(|e| fail(e.into()))?;
    log::debug!(
        "Downloaded {} bytes, {} bytes after decompression",
        download.position(),
        table.len()
    );
    Ok(table)
}

/// Throwaway HTTP server for tests that need to download something
#[cfg(test)]
pub(crate) mod test_server {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Serve a single HTTP response, return the URL to be fetched
    pub async fn serve_once(path: &str, status: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let header = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(header.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{addr}/{path}")
    }

    /// HTTP client that never goes through a proxy
    pub fn client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }
}
