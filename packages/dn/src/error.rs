//! Distinguished name errors

use thiserror::Error;

/// Distinguished name errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnError {
    /// Text does not follow the `key=value[,key=value...]` grammar
    #[error("Malformed distinguished name: {reason}")]
    MalformedDn {
        /// Rule the input broke
        reason: String,
    },
}

impl DnError {
    /// Create a `MalformedDn` error
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDn {
            reason: reason.into(),
        }
    }

    /// Rule the input broke
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::MalformedDn { reason } => reason,
        }
    }

    /// Always true; lets callers branch on kind without matching the enum
    #[must_use]
    pub fn is_malformed_dn(&self) -> bool {
        matches!(self, Self::MalformedDn { .. })
    }
}

impl From<DnError> for x509kit_common::Error {
    fn from(err: DnError) -> Self {
        x509kit_common::Error::with_source(x509kit_common::ErrorKind::MalformedDn, err)
    }
}

/// Result type for distinguished name operations
pub type Result<T> = std::result::Result<T, DnError>;
