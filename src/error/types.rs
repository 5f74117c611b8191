//! Error types
//!
//! Defines the error type surfaced by store construction and reload.

use std::fmt;
use std::io;

/// Errors produced while opening, parsing, or reloading an htpasswd file.
///
/// `authenticate` never raises any of these; it only returns `false`.
#[derive(Debug)]
pub enum HtpasswdError {
    /// The backing file could not be opened, read, or stat'd.
    FileAccess(io::Error),
    /// A line matched neither the comment nor the credential grammar.
    /// Carries the offending line's literal text.
    InvalidLine(String),
}

impl fmt::Display for HtpasswdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtpasswdError::FileAccess(e) => write!(f, "File access error: {}", e),
            HtpasswdError::InvalidLine(line) => write!(f, "Invalid line found: {}", line),
        }
    }
}

impl std::error::Error for HtpasswdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HtpasswdError::FileAccess(e) => Some(e),
            HtpasswdError::InvalidLine(_) => None,
        }
    }
}

impl From<io::Error> for HtpasswdError {
    fn from(error: io::Error) -> Self {
        HtpasswdError::FileAccess(error)
    }
}
