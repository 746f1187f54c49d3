//! DN Master Builder
//!
//! Master builder for distinguished name operations

#[cfg(feature = "dn")]
use x509kit_dn::{DistinguishedName, Result};

/// Master builder for distinguished name operations
#[cfg(feature = "dn")]
#[derive(Debug, Clone, Copy)]
pub struct DnMasterBuilder;

#[cfg(feature = "dn")]
impl DnMasterBuilder {
    /// Canonical comparison form of a DN
    ///
    /// # Errors
    ///
    /// Returns `DnError::MalformedDn` for text outside the `key=value` grammar.
    pub fn normalize(self, dn: &str) -> Result<String> {
        x509kit_dn::normalize_dn(dn)
    }

    /// Parse without normalizing
    ///
    /// # Errors
    ///
    /// Returns `DnError::MalformedDn` for text outside the `key=value` grammar.
    pub fn parse(self, dn: &str) -> Result<DistinguishedName> {
        DistinguishedName::parse(dn)
    }

    /// True when both DNs have the same canonical form
    ///
    /// # Errors
    ///
    /// Returns `DnError::MalformedDn` if either side is malformed.
    pub fn equals(self, a: &str, b: &str) -> Result<bool> {
        x509kit_dn::dn_eq(a, b)
    }
}
