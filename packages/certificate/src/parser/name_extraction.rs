//! Certificate name attribute extraction operations
//!
//! This module provides functionality for extracting distinguished name (DN)
//! attributes from X.509 certificates using proper ASN.1 type handling.

use der::asn1::{Ia5StringRef, PrintableStringRef, TeletexStringRef, Utf8StringRef};
use der::{Any, Encode};
use x509_cert::name::Name;

use crate::types::{CertificateName, NameAttribute};

/// Short names for well-known attribute OIDs (RFC 4514 §3 plus common extras)
const KNOWN_ATTRIBUTES: &[(&str, &str)] = &[
    ("2.5.4.3", "CN"),
    ("2.5.4.4", "SN"),
    ("2.5.4.5", "serialNumber"),
    ("2.5.4.6", "C"),
    ("2.5.4.7", "L"),
    ("2.5.4.8", "ST"),
    ("2.5.4.9", "STREET"),
    ("2.5.4.10", "O"),
    ("2.5.4.11", "OU"),
    ("2.5.4.12", "title"),
    ("2.5.4.42", "GN"),
    ("2.5.4.43", "initials"),
    ("2.5.4.44", "generationQualifier"),
    ("2.5.4.46", "dnQualifier"),
    ("2.5.4.65", "pseudonym"),
    ("0.9.2342.19200300.100.1.1", "UID"),
    ("0.9.2342.19200300.100.1.25", "DC"),
    ("1.2.840.113549.1.9.1", "emailAddress"),
];

/// Extract name attributes from x509-cert Name structure, preserving encoded order
pub fn extract_name_attributes(name: &Name) -> CertificateName {
    let mut attributes = Vec::new();

    // Iterate through RDNs (Relative Distinguished Names)
    for (rdn_index, rdn) in name.0.iter().enumerate() {
        // Each RDN contains one or more AttributeTypeAndValue
        for atv in rdn.0.iter() {
            let oid_string = atv.oid.to_string();
            let key = attribute_key(&oid_string);

            let (value, hex_encoded) = match decode_string_value(&atv.value) {
                Some(text) => (text, false),
                None => (hex_value(&atv.value), true),
            };

            attributes.push(NameAttribute {
                key,
                value,
                rdn: rdn_index,
                hex_encoded,
            });
        }
    }

    CertificateName::from_attributes(attributes)
}

fn attribute_key(oid: &str) -> String {
    KNOWN_ATTRIBUTES
        .iter()
        .find(|(known, _)| *known == oid)
        .map_or_else(|| oid.to_string(), |(_, short)| (*short).to_string())
}

/// Try the directory string types certificates actually use
fn decode_string_value(value: &Any) -> Option<String> {
    if let Ok(ps) = PrintableStringRef::try_from(value) {
        Some(ps.to_string())
    } else if let Ok(utf8s) = Utf8StringRef::try_from(value) {
        Some(utf8s.to_string())
    } else if let Ok(ia5s) = Ia5StringRef::try_from(value) {
        Some(ia5s.to_string())
    } else if let Ok(t61s) = TeletexStringRef::try_from(value) {
        Some(t61s.to_string())
    } else {
        None
    }
}

/// RFC 4514 hex form: `#` followed by the DER encoding of the value
fn hex_value(value: &Any) -> String {
    match value.to_der() {
        Ok(der) => format!("#{}", hex::encode(der)),
        // Re-encoding a value that was just decoded only fails on length overflow.
        Err(_) => format!("#{}", hex::encode(value.value())),
    }
}
