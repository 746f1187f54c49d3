//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of certificate
//! material: rejected inputs are identified by a SHA-256 fingerprint, never
//! by their contents.

use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=warn` - Only rejected inputs and worse
    /// - `RUST_LOG=x509kit_certificate=debug,x509kit_dn=warn` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are no-ops.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a rejected certificate input by fingerprint
    pub fn log_certificate_rejected(stage: impl fmt::Display, input: &str) {
        let fingerprint = Self::fingerprint(input);
        warn!(
            "Certificate rejected at {stage} stage (input_fingerprint: {fingerprint}, input_len: {})",
            input.len()
        );
    }

    /// Log a rejected distinguished name
    ///
    /// Names are identity data, so only the reason and a fingerprint are recorded.
    pub fn log_dn_rejected(reason: &str, dn: &str) {
        let fingerprint = Self::fingerprint(dn);
        warn!("Distinguished name rejected: {reason} (dn_fingerprint: {fingerprint})");
    }

    /// Log performance metrics and timing information
    pub fn log_performance_metric(operation: &str, duration_ms: u64, success: bool) {
        if success {
            debug!("Performance: {operation} completed in {duration_ms}ms");
        } else {
            warn!("Performance: {operation} failed after {duration_ms}ms");
        }
    }

    /// SHA-256 fingerprint for logging
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    #[must_use]
    pub fn fingerprint(data: &str) -> String {
        let hash = Sha256::digest(data.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable_and_short() {
        LoggingTransformer::init_test();

        let first = LoggingTransformer::fingerprint("MIIDlzCCAn+gAwIBAgIU");
        let second = LoggingTransformer::fingerprint("INVALIDCERT==");

        assert_ne!(first, second);
        assert_eq!(first, LoggingTransformer::fingerprint("MIIDlzCCAn+gAwIBAgIU"));
        assert!(first.starts_with('#'));
        assert_eq!(first.len(), 13);
    }

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        // These should not panic and should produce log output
        LoggingTransformer::log_certificate_rejected("base64", "INVALIDCERT==");
        LoggingTransformer::log_dn_rejected("segment 1 has no '='", "Invalid-DN-Format");
        LoggingTransformer::log_performance_metric("normalize_dn", 0, true);
    }
}
