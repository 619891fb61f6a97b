//! Host error types

use thiserror::Error;

use pagelet_dom::DomError;

/// Host operation result type
pub type HostResult<T> = Result<T, HostError>;

/// Host errors
#[derive(Debug, Error)]
pub enum HostError {
    /// A lookup-by-identifier found no element. Scripts treat this as
    /// fatal: the remaining statements do not run.
    #[error("No element with id \"{0}\"")]
    ElementNotFound(String),

    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}
