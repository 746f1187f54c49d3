//! Distinguished name normalization
//!
//! Turns DN text such as `CN=example.com,O=Test Company,C=US` into a single
//! deterministic string (`c=us,cn=example.com,o=test company`) so that names
//! encoded with different attribute order or casing compare equal.
//!
//! Escaped commas and quoted values (RFC 2253 §2.4) are outside the supported
//! grammar and are rejected with `DnError::MalformedDn`.

#![forbid(unsafe_code)]

pub mod error;
pub mod name;
pub mod normalize;

pub use error::{DnError, Result};
pub use name::{Attribute, DistinguishedName};
pub use normalize::{dn_eq, normalize_dn, normalize_pairs};
