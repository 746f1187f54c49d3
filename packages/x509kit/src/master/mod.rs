//! Master builder for all x509kit operations
//!
//! This module provides the unified entry point, decomposed by component.

pub mod certificate;
pub mod core;
pub mod dn;

// Re-export main types
pub use self::core::X509Kit;

#[cfg(feature = "dn")]
pub use dn::DnMasterBuilder;
