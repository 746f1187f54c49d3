//! Core Master Builder
//!
//! Main entry point for all x509kit operations

#[cfg(feature = "dn")]
use super::DnMasterBuilder;

/// Master builder providing unified entry point for all x509kit operations
pub struct X509Kit;

impl X509Kit {
    /// Entry point for certificate extraction
    /// Example: `X509Kit::certificate().accept_pem_armor(false).parse(text)`
    #[cfg(feature = "certificate")]
    #[must_use]
    pub fn certificate() -> x509kit_certificate::CertificateExtractor {
        x509kit_certificate::CertificateExtractor::new()
    }

    /// Entry point for distinguished name operations
    /// Example: `X509Kit::dn().normalize("CN=a,C=US")`
    #[cfg(feature = "dn")]
    #[must_use]
    pub fn dn() -> DnMasterBuilder {
        DnMasterBuilder
    }
}
