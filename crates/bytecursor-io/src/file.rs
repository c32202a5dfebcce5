//! Local-file source and save sink.

use std::path::{Path, PathBuf};

use bytecursor::ByteCursor;
use tokio::sync::oneshot;
use tracing::{debug, error};

use crate::LoadError;

/// Fills `cursor` with the full contents of the file at `path`.
///
/// On success the buffer's cursor is reset to 0, its storage replaced with
/// the file contents, and the buffer sent through the returned channel.
/// On failure the error is logged and the sender dropped, so the receiver
/// observes a [`oneshot::error::RecvError`] instead of a buffer.
pub fn load_file(mut cursor: ByteCursor, path: impl Into<PathBuf>) -> oneshot::Receiver<ByteCursor> {
    let path = path.into();
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        match read_contents(&path).await {
            Ok(bytes) => {
                debug!(path = %path.display(), len = bytes.len(), "file loaded");
                cursor.position = 0;
                cursor.assign(bytes);
                let _ = tx.send(cursor);
            }
            Err(err) => {
                error!(path = %path.display(), %err, "file load failed");
            }
        }
    });
    rx
}

/// Writes the buffer's current full contents to `path`, fire-and-forget.
///
/// Errors are logged; nothing is returned and nothing resolves.
pub fn save_as(cursor: &ByteCursor, path: impl Into<PathBuf>) {
    let path = path.into();
    let bytes = cursor.as_slice().to_vec();
    tokio::spawn(async move {
        match tokio::fs::write(&path, &bytes).await {
            Ok(()) => debug!(path = %path.display(), len = bytes.len(), "buffer saved"),
            Err(err) => error!(path = %path.display(), %err, "save failed"),
        }
    });
}

async fn read_contents(path: &Path) -> Result<Vec<u8>, LoadError> {
    Ok(tokio::fs::read(path).await?)
}
