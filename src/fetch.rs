// Supplementary word-list fetch with bundled fallback
//
// Downloads a single small .spelling artifact over HTTPS. Any failure
// (network error, non-2xx status, write error) removes the partial
// destination file and is reported as a typed FetchError; the caller
// substitutes the bundled fallback word list instead of failing the run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::{info, warn};

/// Explicit request timeout; the transport default is unbounded.
/// One attempt only, no retry: a miss switches to the fallback list.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Error types for word-list fetch operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("Response {status}: {reason}")]
    Status { status: u16, reason: String },
    /// Network-level failure (DNS, connect, timeout, mid-stream)
    #[error("Network error: {0}")]
    Network(String),
    /// Local file I/O failure, including a pre-existing destination
    #[error("I/O error: {0}")]
    Io(String),
}

/// Resolved origin of the supplementary word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    /// Successfully downloaded artifact at this path
    Downloaded(PathBuf),
    /// Remote fetch failed; use the bundled fallback list
    Fallback,
}

/// Download the word list at `url` into `dest`.
///
/// The destination is created exclusively: an existing file is an error,
/// so leftover state from an earlier run surfaces as a fetch failure
/// rather than being silently overwritten. On any failure after creation
/// the partial file is removed.
pub async fn download_word_list(url: &str, dest: &Path) -> Result<(), FetchError> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .await
        .map_err(|e| FetchError::Io(format!("{}: {}", dest.display(), e)))?;

    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let response = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            remove_partial(dest).await;
            return Err(FetchError::Network(e.to_string()));
        }
    };

    let status = response.status();
    if !status.is_success() {
        remove_partial(dest).await;
        return Err(FetchError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(c) => c,
            Err(e) => {
                remove_partial(dest).await;
                return Err(FetchError::Network(e.to_string()));
            }
        };
        if let Err(e) = file.write_all(&chunk).await {
            remove_partial(dest).await;
            return Err(FetchError::Io(e.to_string()));
        }
    }

    if let Err(e) = file.flush().await {
        remove_partial(dest).await;
        return Err(FetchError::Io(e.to_string()));
    }

    Ok(())
}

async fn remove_partial(dest: &Path) {
    let _ = tokio::fs::remove_file(dest).await;
}

/// Resolve the word-list source, falling back to the bundled list on any
/// fetch failure. Never fails the run.
pub async fn resolve_word_list(url: &str, dest: &Path) -> WordListSource {
    match download_word_list(url, dest).await {
        Ok(()) => {
            info!("Successfully downloaded .spelling file from {}", url);
            WordListSource::Downloaded(dest.to_path_buf())
        }
        Err(e) => {
            warn!(
                "Can not download .spelling file from {}. Fallback .spelling will be used. Error: {}",
                url, e
            );
            WordListSource::Fallback
        }
    }
}

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;
