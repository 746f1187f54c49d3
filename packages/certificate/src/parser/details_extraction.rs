//! Certificate serial number and validity extraction

use chrono::{DateTime, Utc};
use num_bigint::BigUint;

use crate::error::{CertificateError, InputStage, Result};
use crate::types::Validity;

use super::core::RawCertificate;

/// Serial number as an arbitrary-precision unsigned integer
///
/// The DER INTEGER content is two's complement; a set high bit on the first
/// octet means the issuer encoded a negative serial, which is rejected.
pub fn extract_serial(cert: &RawCertificate) -> Result<BigUint> {
    let bytes = cert.tbs_certificate.serial_number.as_bytes();

    match bytes.first() {
        None => Err(CertificateError::invalid_input(
            InputStage::Fields,
            "serial number is empty",
        )),
        Some(first) if first & 0x80 != 0 => Err(CertificateError::invalid_input(
            InputStage::Fields,
            "serial number is negative",
        )),
        Some(_) => Ok(BigUint::from_bytes_be(bytes)),
    }
}

/// Validity window converted to UTC timestamps
pub fn extract_validity(cert: &RawCertificate) -> Validity {
    let validity = &cert.tbs_certificate.validity;

    // Convert x509-cert Time to SystemTime, then to chrono
    let before = DateTime::<Utc>::from(validity.not_before.to_system_time());
    let after = DateTime::<Utc>::from(validity.not_after.to_system_time());

    Validity { before, after }
}
