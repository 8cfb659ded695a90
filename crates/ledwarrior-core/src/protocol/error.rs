use thiserror::Error;

use super::header::Header;

/// Errors returned when a decoded frame cannot be turned into a message.
///
/// Note: the transaction engine treats these as line noise; they are only
/// surfaced to callers that decode frames themselves.
///
/// # Examples
/// ```
/// use ledwarrior_core::protocol::{Header, MessageError};
///
/// let err = MessageError::TooShort { header: Header::Echo, needed: 2, actual: 1 };
/// assert!(err.to_string().contains("too short"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("empty frame")]
    Empty,
    #[error("{header} frame too short: need {needed} bytes, got {actual}")]
    TooShort {
        header: Header,
        needed: usize,
        actual: usize,
    },
}
