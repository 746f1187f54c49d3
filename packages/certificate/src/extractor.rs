//! Certificate extractor builder
//!
//! Fluent configuration over the parsing pipeline, in the same shape as the
//! other x509kit builders: configure, then call the action with the input.

use x509kit_common::LoggingTransformer;

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::parser::{parse_certificate_der_internal, parse_certificate_text_internal};
use crate::types::ParsedCertificate;

/// Configurable certificate extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateExtractor {
    config: ExtractorConfig,
}

impl CertificateExtractor {
    /// Extractor with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Accept or refuse `-----BEGIN CERTIFICATE-----` armored input
    #[must_use]
    pub fn accept_pem_armor(mut self, accept: bool) -> Self {
        self.config.accept_pem_armor = accept;
        self
    }

    /// Maximum accepted input length in bytes
    #[must_use]
    pub fn max_input_len(mut self, limit: usize) -> Self {
        self.config.max_input_len = limit;
        self
    }

    /// Current configuration
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parse Base64 certificate text
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::InvalidInput` for empty, oversized, badly
    /// armored, non-Base64 or non-certificate input.
    pub fn parse(&self, input: &str) -> Result<ParsedCertificate> {
        let result = parse_certificate_text_internal(input, &self.config);
        match &result {
            Ok(cert) => log_extracted(cert),
            Err(e) => LoggingTransformer::log_certificate_rejected(e.stage(), input),
        }
        result
    }

    /// Parse DER bytes
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::InvalidInput` for empty or non-certificate bytes.
    pub fn parse_der(&self, der: &[u8]) -> Result<ParsedCertificate> {
        let result = parse_certificate_der_internal(der);
        match &result {
            Ok(cert) => log_extracted(cert),
            Err(e) => tracing::warn!(stage = %e.stage(), der_len = der.len(), "Certificate rejected"),
        }
        result
    }
}

fn log_extracted(cert: &ParsedCertificate) {
    tracing::debug!(
        serial = %cert.serial_hex(),
        subject_attributes = cert.subject_dn.len(),
        issuer_attributes = cert.issuer_dn.len(),
        "Extracted certificate fields"
    );
}
