//! Core error types and definitions

use std::sync::Arc;
use thiserror::Error;

/// Workspace-wide error wrapping a component error
#[derive(Debug, Clone)]
pub struct Error {
    /// The actual error
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    /// The error kind
    pub kind: ErrorKind,
    /// Component error this was converted from
    pub source: Box<dyn std::error::Error + Send + Sync>,
    /// Backtrace captured at conversion
    #[cfg(feature = "full-backtrace")]
    pub backtrace: backtrace::Backtrace,
}

/// Failure kinds callers can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Certificate text could not be decoded into a certificate
    #[error("Invalid certificate input")]
    InvalidInput,

    /// Distinguished name text does not follow the `key=value[,key=value...]` grammar
    #[error("Malformed distinguished name")]
    MalformedDn,
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
