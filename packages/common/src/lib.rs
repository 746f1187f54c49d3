//! Common infrastructure and utilities for the x509kit project
//!
//! This crate provides shared functionality used across all x509kit crates including:
//! - A single error type the component errors convert into
//! - Structured logging that never records raw certificate material

#![forbid(unsafe_code)]

pub mod error;

pub use error::*;
