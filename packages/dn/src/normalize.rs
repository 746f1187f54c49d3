//! Canonical DN strings for equality and lookup keys

use std::time::Instant;

use x509kit_common::LoggingTransformer;

use crate::error::Result;
use crate::name::DistinguishedName;

/// Normalize DN text into its canonical comparison form
///
/// Keys and values are trimmed and lowercased, pairs are stably sorted by key
/// and re-joined as `key=value` with `,`.
///
/// ```
/// let canonical = x509kit_dn::normalize_dn(
///     "CN=example.com,OU=Engineering,O=Test Company,L=McLean,ST=Virginia,C=US",
/// )
/// .unwrap();
/// assert_eq!(
///     canonical,
///     "c=us,cn=example.com,l=mclean,o=test company,ou=engineering,st=virginia"
/// );
/// ```
///
/// # Errors
///
/// Returns `DnError::MalformedDn` when the text does not follow the
/// `key=value[,key=value...]` grammar.
pub fn normalize_dn(dn: &str) -> Result<String> {
    let started = Instant::now();

    match DistinguishedName::parse(dn) {
        Ok(name) => {
            let name = name.normalized();
            let canonical = name.to_string();
            tracing::debug!(attributes = name.len(), "Normalized DN");
            LoggingTransformer::log_performance_metric(
                "normalize_dn",
                elapsed_ms(started),
                true,
            );
            Ok(canonical)
        }
        Err(e) => {
            LoggingTransformer::log_dn_rejected(e.reason(), dn);
            Err(e)
        }
    }
}

/// Normalize already-split `(key, value)` pairs
///
/// Used for names that arrive structured, such as certificate subjects,
/// where every attribute of a multi-valued RDN is its own pair.
///
/// # Errors
///
/// Returns `DnError::MalformedDn` under the rules of [`DistinguishedName::from_pairs`].
pub fn normalize_pairs<'a, I>(pairs: I) -> Result<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    match DistinguishedName::from_pairs(pairs) {
        Ok(name) => {
            let name = name.normalized();
            tracing::debug!(attributes = name.len(), "Normalized DN pairs");
            Ok(name.to_string())
        }
        Err(e) => {
            tracing::warn!(reason = e.reason(), "DN pairs rejected");
            Err(e)
        }
    }
}

/// Compare two DNs by their canonical forms
///
/// # Errors
///
/// Returns `DnError::MalformedDn` if either side is malformed.
pub fn dn_eq(a: &str, b: &str) -> Result<bool> {
    Ok(normalize_dn(a)? == normalize_dn(b)?)
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
