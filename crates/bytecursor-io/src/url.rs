//! Network source: fills a buffer from a raw binary HTTP response.

use std::time::Duration;

use bytecursor::ByteCursor;
use tokio::sync::oneshot;
use tracing::{debug, error};

use crate::LoadError;

/// Timeout applied to the HTTP request itself.
///
/// The completion channel carries no timeout of its own; callers that
/// need a bound time out on the receiver.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fills `cursor` with the raw binary response body of a POST to `url`.
///
/// On success the buffer's cursor is reset to 0, its storage replaced
/// with the response body, and the buffer sent through the returned
/// channel. Transport failures (including non-success status codes) are
/// logged and never resolve the channel.
pub fn load_url(mut cursor: ByteCursor, url: impl Into<String>) -> oneshot::Receiver<ByteCursor> {
    let url = url.into();
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        match fetch(&url).await {
            Ok(bytes) => {
                debug!(%url, len = bytes.len(), "url loaded");
                cursor.position = 0;
                cursor.assign(bytes);
                let _ = tx.send(cursor);
            }
            Err(err) => {
                error!(%url, %err, "url load failed");
            }
        }
    });
    rx
}

async fn fetch(url: &str) -> Result<Vec<u8>, LoadError> {
    let client = reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()?;
    let response = client.post(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}
