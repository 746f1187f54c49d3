//! Certificate parsing implementation module
//!
//! Decomposed into focused, single-responsibility modules:
//!
//! - `core`: Main parsing functions coordinating all operations
//! - `input`: Text to DER decoding (emptiness, size, PEM armor, Base64)
//! - `name_extraction`: Distinguished name attribute extraction
//! - `details_extraction`: Serial number and validity extraction

pub mod core;
pub mod details_extraction;
pub mod input;
pub mod name_extraction;

pub use self::core::{parse_certificate_der_internal, parse_certificate_text_internal};
