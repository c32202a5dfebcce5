//! File, network, and save-as glue for [`bytecursor`] buffers.
//!
//! Each source takes ownership of a [`ByteCursor`](bytecursor::ByteCursor),
//! fills it, and hands it back through a one-shot channel that resolves
//! exactly once on success. Failures are reported out-of-band through
//! `tracing` and leave the channel unresolved; callers that need a bound
//! apply their own timeout on the receiver. The save sink is
//! fire-and-forget.
//!
//! All entry points spawn onto the ambient Tokio runtime and must be
//! called from within one.

mod error;
mod file;
mod url;

pub use error::LoadError;
pub use file::{load_file, save_as};
pub use url::{load_url, DEFAULT_TIMEOUT};
