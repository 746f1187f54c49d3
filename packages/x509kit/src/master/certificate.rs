//! Certificate helpers composed with DN normalization
//!
//! The extractor and the normalizer know nothing of each other. Names are
//! handed over as structured pairs, so every attribute of a multi-valued RDN
//! becomes its own key in the canonical form.

#[cfg(all(feature = "certificate", feature = "dn"))]
use x509kit_certificate::{CertificateName, ParsedCertificate};

#[cfg(all(feature = "certificate", feature = "dn"))]
fn canonical_name(name: &CertificateName) -> x509kit_dn::Result<String> {
    x509kit_dn::normalize_pairs(name.pairs())
}

/// Canonical form of the certificate subject
///
/// # Errors
///
/// Returns `DnError::MalformedDn` when the subject is empty or a value holds
/// characters the canonical grammar cannot carry (`,`, `\`, `"`).
#[cfg(all(feature = "certificate", feature = "dn"))]
pub fn canonical_subject(cert: &ParsedCertificate) -> x509kit_dn::Result<String> {
    canonical_name(&cert.subject_dn)
}

/// Canonical form of the certificate issuer
///
/// # Errors
///
/// Returns `DnError::MalformedDn` when the issuer is empty or a value holds
/// characters the canonical grammar cannot carry (`,`, `\`, `"`).
#[cfg(all(feature = "certificate", feature = "dn"))]
pub fn canonical_issuer(cert: &ParsedCertificate) -> x509kit_dn::Result<String> {
    canonical_name(&cert.issuer_dn)
}

/// True when the certificate's issuer matches `expected_issuer` after normalization
///
/// # Errors
///
/// Returns `DnError::MalformedDn` if either name cannot be normalized.
#[cfg(all(feature = "certificate", feature = "dn"))]
pub fn issued_by(cert: &ParsedCertificate, expected_issuer: &str) -> x509kit_dn::Result<bool> {
    Ok(canonical_issuer(cert)? == x509kit_dn::normalize_dn(expected_issuer)?)
}
