//! Text-to-DER decoding
//!
//! Turns caller-supplied certificate text into DER bytes, rejecting bad input
//! in a fixed order: emptiness, size, PEM armor, Base64.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::config::ExtractorConfig;
use crate::error::{CertificateError, InputStage, Result};

const PEM_BOUNDARY: &str = "-----BEGIN";
const PEM_CERTIFICATE_TAG: &str = "CERTIFICATE";

/// Decode certificate text into DER bytes
pub fn decode_certificate_text(input: &str, config: &ExtractorConfig) -> Result<Vec<u8>> {
    if input.trim().is_empty() {
        return Err(CertificateError::invalid_input(
            InputStage::Empty,
            "certificate input is empty",
        ));
    }

    if input.len() > config.max_input_len {
        return Err(CertificateError::invalid_input(
            InputStage::TooLarge,
            format!(
                "certificate input is {} bytes, limit is {}",
                input.len(),
                config.max_input_len
            ),
        ));
    }

    if config.accept_pem_armor && input.contains(PEM_BOUNDARY) {
        return decode_pem(input);
    }

    decode_base64(input)
}

/// Base64 with embedded whitespace (PEM line wrapping) removed first
fn decode_base64(input: &str) -> Result<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| CertificateError::invalid_input(InputStage::Base64, e.to_string()))
}

fn decode_pem(input: &str) -> Result<Vec<u8>> {
    let block = pem::parse(input)
        .map_err(|e| CertificateError::invalid_input(InputStage::Armor, e.to_string()))?;

    if block.tag() != PEM_CERTIFICATE_TAG {
        return Err(CertificateError::invalid_input(
            InputStage::Armor,
            format!("expected a CERTIFICATE block, found {}", block.tag()),
        ));
    }

    Ok(block.into_contents())
}
