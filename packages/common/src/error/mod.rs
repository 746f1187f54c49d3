//! Error handling shared by the x509kit crates
//!
//! Component errors (`CertificateError`, `DnError`) convert into [`Error`],
//! which keeps the original as its source and records a kind callers can
//! branch on. A backtrace is captured behind the `full-backtrace` feature.

pub mod constructors;
pub mod display;
pub mod logging;
pub mod types;

pub use logging::LoggingTransformer;
pub use types::{Error, ErrorKind, Result};
