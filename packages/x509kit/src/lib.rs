//! # x509kit - Certificate Fields and Canonical Names
//!
//! Extracts serial number, subject, issuer and validity from Base64/PEM
//! X.509 certificates, and normalizes distinguished names into a
//! deterministic comparison key.
//!
//! ## Features
//!
//! - `certificate` - Certificate field extraction (`x509kit_certificate`)
//! - `dn` - Distinguished name normalization (`x509kit_dn`)
//! - `full` - Everything
//!
//! Both components are enabled by default.
//!
//! ## Example
//!
//! ```no_run
//! use x509kit::{X509Kit, canonical_subject};
//!
//! fn example(pem: &str) -> Result<(), x509kit::Error> {
//!     let cert = X509Kit::certificate().parse(pem)?;
//!     println!("serial {} valid until {}", cert.serial, cert.not_valid.after);
//!
//!     let subject = canonical_subject(&cert)?;
//!     let same = X509Kit::dn().equals(&subject, "C=US,CN=example.com")?;
//!     println!("subject matches: {same}");
//!     Ok(())
//! }
//! ```
//!
//! No trust decisions are made: signatures, chains, revocation and trust
//! stores are out of scope.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

// === Core Modules ===

mod master;

pub use master::X509Kit;

#[cfg(feature = "dn")]
pub use master::DnMasterBuilder;

#[cfg(all(feature = "certificate", feature = "dn"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "certificate", feature = "dn"))))]
pub use master::certificate::{canonical_issuer, canonical_subject, issued_by};

// === Core Re-exports ===

pub use x509kit_common::{Error, ErrorKind, LoggingTransformer, Result};

// === Certificate Re-exports ===

#[cfg(feature = "certificate")]
#[cfg_attr(docsrs, doc(cfg(feature = "certificate")))]
pub use x509kit_certificate::{
    CertificateError, CertificateExtractor, CertificateName, ExtractorConfig, InputStage,
    NameAttribute, ParsedCertificate, Validity, parse_certificate, parse_certificate_der,
};

// === DN Re-exports ===

#[cfg(feature = "dn")]
#[cfg_attr(docsrs, doc(cfg(feature = "dn")))]
pub use x509kit_dn::{Attribute, DistinguishedName, DnError, dn_eq, normalize_dn, normalize_pairs};

#[cfg(feature = "certificate")]
#[cfg_attr(docsrs, doc(cfg(feature = "certificate")))]
pub use x509kit_certificate as certificate;

#[cfg(feature = "dn")]
#[cfg_attr(docsrs, doc(cfg(feature = "dn")))]
pub use x509kit_dn as dn;
