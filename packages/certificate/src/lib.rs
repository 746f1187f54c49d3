//! X.509 certificate field extraction
//!
//! Decodes Base64 (optionally PEM line-wrapped or armored) DER certificates and
//! projects out the serial number, subject, issuer and validity window.
//!
//! ```
//! use x509kit_certificate::{parse_certificate, InputStage};
//!
//! let err = parse_certificate("   ").unwrap_err();
//! assert_eq!(err.stage(), InputStage::Empty);
//! ```
//!
//! No trust decisions are made: signatures, chains and revocation are not checked.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod types;

pub use config::ExtractorConfig;
pub use error::{CertificateError, InputStage, Result};
pub use extractor::CertificateExtractor;
pub use types::{CertificateName, NameAttribute, ParsedCertificate, Validity};

/// Parse Base64 certificate text with the default configuration
///
/// Embedded whitespace and newlines are stripped before decoding.
///
/// # Errors
///
/// Returns `CertificateError::InvalidInput` when the text is empty, not
/// Base64, or not a DER-encoded X.509 certificate.
pub fn parse_certificate(input: &str) -> Result<ParsedCertificate> {
    CertificateExtractor::new().parse(input)
}

/// Parse DER certificate bytes
///
/// # Errors
///
/// Returns `CertificateError::InvalidInput` when the bytes are not a
/// DER-encoded X.509 certificate.
pub fn parse_certificate_der(der: &[u8]) -> Result<ParsedCertificate> {
    CertificateExtractor::new().parse_der(der)
}
