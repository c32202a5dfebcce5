//! Error type for the I/O collaborators.

use thiserror::Error;

/// Failures in the file and network sources.
///
/// These never travel through the completion channel; they are logged and
/// the channel's sender is dropped instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Filesystem error while reading or writing.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Transport error while fetching over HTTP.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
