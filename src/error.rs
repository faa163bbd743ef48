//! Error types for the xmlstream library

use thiserror::Error;

/// Result type alias for all xmlstream operations
pub type Result<T> = std::result::Result<T, XmlError>;

/// Structural contract violations raised by the writer
///
/// Every variant except [`XmlError::IoError`] marks a programming error in
/// the calling sequence, not a recoverable runtime condition. The writer
/// never repairs or retries a malformed sequence: the call is rejected
/// before it emits anything.
#[derive(Error, Debug)]
pub enum XmlError {
    /// A required name or argument was empty
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// An element or document operation was called while an attribute list
    /// was still open
    #[error("'{0}' is not valid while an attribute list is open")]
    AttributeListOpen(&'static str),

    /// An attribute operation was called without an open attribute list
    #[error("'{0}' requires an open attribute list")]
    AttributeListClosed(&'static str),

    /// `end_element` was called with no element left to close
    #[error("no open element to close")]
    NoOpenElement,

    /// `end_document` was called with elements still open
    #[error("document ended with {0} unclosed element(s)")]
    UnclosedElements(usize),

    /// IO error propagated from the sink
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
