//! Core certificate parsing operations
//!
//! Coordinates decoding and field extraction and returns the projected fields.

use der::Decode;
use x509_cert::certificate::{CertificateInner, Raw};

use crate::config::ExtractorConfig;
use crate::error::{CertificateError, InputStage, Result};
use crate::types::ParsedCertificate;

use super::details_extraction::{extract_serial, extract_validity};
use super::input::decode_certificate_text;
use super::name_extraction::extract_name_attributes;

/// Certificate decoded without RFC 5280's 20-octet serial limit
pub type RawCertificate = CertificateInner<Raw>;

/// Parse certificate text (Base64, optionally line-wrapped or PEM-armored)
pub fn parse_certificate_text_internal(
    input: &str,
    config: &ExtractorConfig,
) -> Result<ParsedCertificate> {
    let der = decode_certificate_text(input, config)?;
    parse_certificate_der_internal(&der)
}

/// Parse DER bytes into the projected certificate fields
pub fn parse_certificate_der_internal(der: &[u8]) -> Result<ParsedCertificate> {
    if der.is_empty() {
        return Err(CertificateError::invalid_input(
            InputStage::Empty,
            "certificate DER is empty",
        ));
    }

    // Raw profile: serials of any length reach the BigUint projection
    let cert = RawCertificate::from_der(der)
        .map_err(|e| CertificateError::invalid_input(InputStage::Der, e.to_string()))?;

    project_fields(&cert)
}

/// Project the fixed field set out of a decoded certificate
fn project_fields(cert: &RawCertificate) -> Result<ParsedCertificate> {
    let serial = extract_serial(cert)?;
    let subject_dn = extract_name_attributes(&cert.tbs_certificate.subject);
    let issuer_dn = extract_name_attributes(&cert.tbs_certificate.issuer);
    let not_valid = extract_validity(cert);

    Ok(ParsedCertificate {
        serial,
        subject_dn,
        issuer_dn,
        not_valid,
    })
}
