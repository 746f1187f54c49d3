//! Certificate extraction errors

use std::fmt;

use thiserror::Error;

/// Pipeline stage at which certificate input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputStage {
    /// Input was empty or whitespace only
    Empty,
    /// Input exceeded the configured maximum length
    TooLarge,
    /// PEM armor was present but unparseable or not a certificate
    Armor,
    /// Text was not valid Base64
    Base64,
    /// Bytes were not a well-formed DER X.509 certificate
    Der,
    /// The certificate decoded but a required field could not be projected
    Fields,
}

impl InputStage {
    /// Short lowercase name used in messages and logs
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooLarge => "size",
            Self::Armor => "pem",
            Self::Base64 => "base64",
            Self::Der => "der",
            Self::Fields => "fields",
        }
    }
}

impl fmt::Display for InputStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Certificate extraction errors
///
/// Every failure is the single `InvalidInput` kind; the stage says where it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CertificateError {
    /// The certificate text could not be decoded into a certificate
    #[error("Invalid certificate input ({stage}): {reason}")]
    InvalidInput {
        /// Where in the pipeline the input was rejected
        stage: InputStage,
        /// Decoder message or rule that failed
        reason: String,
    },
}

impl CertificateError {
    /// Create an `InvalidInput` error for the given stage
    #[must_use]
    pub fn invalid_input(stage: InputStage, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            stage,
            reason: reason.into(),
        }
    }

    /// Stage at which the input was rejected
    #[must_use]
    pub fn stage(&self) -> InputStage {
        match self {
            Self::InvalidInput { stage, .. } => *stage,
        }
    }

    /// Always true; lets callers branch on kind without matching the enum
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl From<CertificateError> for x509kit_common::Error {
    fn from(err: CertificateError) -> Self {
        x509kit_common::Error::with_source(x509kit_common::ErrorKind::InvalidInput, err)
    }
}

/// Result type for certificate extraction
pub type Result<T> = std::result::Result<T, CertificateError>;
