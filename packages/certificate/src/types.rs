//! Parsed certificate structures

use std::fmt;

use chrono::{DateTime, Utc};
use num_bigint::BigUint;
use serde::{Serialize, Serializer};

/// Fields extracted from an X.509 certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCertificate {
    /// Issuer-assigned serial number, full precision
    #[serde(serialize_with = "serialize_serial")]
    pub serial: BigUint,
    /// Subject name in encoded order, case as encoded
    pub subject_dn: CertificateName,
    /// Issuer name in encoded order, case as encoded
    pub issuer_dn: CertificateName,
    /// Validity window
    pub not_valid: Validity,
}

impl ParsedCertificate {
    /// Serial as colon-separated uppercase hex octets, e.g. `42:0C:55`
    #[must_use]
    pub fn serial_hex(&self) -> String {
        self.serial
            .to_bytes_be()
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(":")
    }

    /// True when subject and issuer are encoded identically
    #[must_use]
    pub fn is_self_issued(&self) -> bool {
        self.subject_dn == self.issuer_dn
    }
}

fn serialize_serial<S: Serializer>(serial: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(serial)
}

/// Validity interval `[before, after]`, not checked for ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Validity {
    /// notBefore
    pub before: DateTime<Utc>,
    /// notAfter
    pub after: DateTime<Utc>,
}

/// One attribute of a certificate name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameAttribute {
    /// Short name (`CN`, `O`, ...) or dotted OID for unknown attributes
    pub key: String,
    /// Decoded string value, or `#` + hex DER for non-string values
    pub value: String,
    /// Index of the RDN this attribute belongs to
    #[serde(skip)]
    pub(crate) rdn: usize,
    /// Value is `#` + hex DER rather than decoded text
    #[serde(skip)]
    pub(crate) hex_encoded: bool,
}

impl NameAttribute {
    /// True when the value could not be decoded as a string and is rendered as hex DER
    #[must_use]
    pub fn is_hex_encoded(&self) -> bool {
        self.hex_encoded
    }
}

/// Distinguished name as encoded in the certificate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CertificateName {
    attributes: Vec<NameAttribute>,
}

impl CertificateName {
    pub(crate) fn from_attributes(attributes: Vec<NameAttribute>) -> Self {
        Self { attributes }
    }

    /// Attributes in encoded order
    #[must_use]
    pub fn attributes(&self) -> &[NameAttribute] {
        &self.attributes
    }

    /// Number of attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True for an empty name (allowed for subjects that rely on SANs)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// First value for the given key, compared case-insensitively
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key.eq_ignore_ascii_case(key))
            .map(|a| a.value.as_str())
    }

    /// `(key, value)` pairs in encoded order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|a| (a.key.as_str(), a.value.as_str()))
    }

    /// RFC 4514 string: last RDN first, `+` inside multi-valued RDNs, special characters escaped
    #[must_use]
    pub fn to_rfc4514_string(&self) -> String {
        let mut rdns: Vec<Vec<&NameAttribute>> = Vec::new();
        for attr in &self.attributes {
            match rdns.last_mut() {
                Some(group) if group.first().is_some_and(|first| first.rdn == attr.rdn) => {
                    group.push(attr);
                }
                _ => rdns.push(vec![attr]),
            }
        }

        rdns.iter()
            .rev()
            .map(|group| {
                group
                    .iter()
                    .map(|a| {
                        if a.hex_encoded {
                            format!("{}={}", a.key, a.value)
                        } else {
                            format!("{}={}", a.key, escape_rfc4514(&a.value))
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("+")
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for CertificateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.attributes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", attr.key, attr.value)?;
        }
        Ok(())
    }
}

/// Escape a string value per RFC 4514 §2.4
fn escape_rfc4514(value: &str) -> String {
    let last = value.chars().count().saturating_sub(1);
    let mut out = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            ',' | '+' | '"' | '\\' | '<' | '>' | ';' => {
                out.push('\\');
                out.push(c);
            }
            '#' if i == 0 => out.push_str("\\#"),
            ' ' if i == 0 || i == last => out.push_str("\\ "),
            '\0' => out.push_str("\\00"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_rfc4514_specials() {
        assert_eq!(escape_rfc4514("Acme, Inc."), "Acme\\, Inc.");
        assert_eq!(escape_rfc4514("#1"), "\\#1");
        assert_eq!(escape_rfc4514(" padded "), "\\ padded\\ ");
        assert_eq!(escape_rfc4514("plain"), "plain");
    }

    fn attr(key: &str, value: &str, rdn: usize) -> NameAttribute {
        NameAttribute {
            key: key.into(),
            value: value.into(),
            rdn,
            hex_encoded: false,
        }
    }

    #[test]
    fn test_rfc4514_groups_multi_valued_rdns() {
        let name = CertificateName::from_attributes(vec![
            attr("C", "US", 0),
            attr("O", "Acme", 1),
            attr("CN", "a", 2),
            attr("UID", "7", 2),
        ]);
        assert_eq!(name.to_rfc4514_string(), "CN=a+UID=7,O=Acme,C=US");
        assert_eq!(name.to_string(), "C=US, O=Acme, CN=a, UID=7");
    }

    #[test]
    fn test_rfc4514_leaves_hex_values_unescaped() {
        let mut hex = attr("2.5.4.45", "#030200ff", 0);
        hex.hex_encoded = true;
        let name = CertificateName::from_attributes(vec![hex, attr("CN", "#1", 1)]);
        assert_eq!(name.to_rfc4514_string(), "CN=\\#1,2.5.4.45=#030200ff");
    }
}
