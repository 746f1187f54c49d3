//! Distinguished name parsing
//!
//! Minimal grammar: segments separated by `,`, each split on its first `=`
//! into a non-empty key and a (possibly empty) value. RFC 2253 escapes and
//! quoted values are not understood and are rejected instead of being split
//! in the wrong place.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{DnError, Result};

const SEGMENT_SEPARATOR: char = ',';
const KEY_VALUE_SEPARATOR: char = '=';
const UNSUPPORTED_CHARACTERS: [char; 2] = ['\\', '"'];

/// One `key=value` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Attribute {
    /// Attribute type, e.g. `CN`
    pub key: String,
    /// Attribute value, possibly empty
    pub value: String,
}

impl Attribute {
    /// Create an attribute
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{KEY_VALUE_SEPARATOR}{}", self.key, self.value)
    }
}

/// Sequence of attribute/value pairs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DistinguishedName {
    attributes: Vec<Attribute>,
}

impl DistinguishedName {
    /// Parse DN text into trimmed pairs, keeping input order and case
    ///
    /// # Errors
    ///
    /// Returns `DnError::MalformedDn` when a segment has no `=`, has an empty
    /// key, or the text contains escape or quote characters.
    pub fn parse(dn: &str) -> Result<Self> {
        if let Some(c) = dn.chars().find(|c| UNSUPPORTED_CHARACTERS.contains(c)) {
            return Err(DnError::malformed(format!(
                "escaped or quoted values are not supported (found {c:?})"
            )));
        }

        // `split` yields at least one segment, so an accepted name is never empty.
        let attributes = dn
            .split(SEGMENT_SEPARATOR)
            .enumerate()
            .map(|(index, segment)| parse_segment(index, segment))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { attributes })
    }

    /// Build a name from already-split pairs, applying the same rules as [`parse`](Self::parse)
    ///
    /// Keys and values are trimmed. Values must not contain `,`, since the
    /// rendered name would split there when parsed again.
    ///
    /// # Errors
    ///
    /// Returns `DnError::MalformedDn` when there are no pairs, a key is empty or
    /// contains `=`, or a key or value contains `,`, `\` or `"`.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let attributes = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (key, value))| check_pair(index, key, value))
            .collect::<Result<Vec<_>>>()?;

        if attributes.is_empty() {
            return Err(DnError::malformed("name has no attributes"));
        }

        Ok(Self { attributes })
    }

    /// Lowercase keys and values, then stably sort by key
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for attr in &mut self.attributes {
            attr.key = attr.key.to_lowercase();
            attr.value = attr.value.to_lowercase();
        }
        self.attributes.sort_by(|a, b| a.key.cmp(&b.key));
        self
    }

    /// Attributes in current order
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Number of attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Parsed names always hold at least one attribute
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

fn parse_segment(index: usize, segment: &str) -> Result<Attribute> {
    let Some((key, value)) = segment.split_once(KEY_VALUE_SEPARATOR) else {
        return Err(DnError::malformed(format!(
            "segment {} has no '{KEY_VALUE_SEPARATOR}'",
            index + 1
        )));
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(DnError::malformed(format!(
            "segment {} has an empty attribute key",
            index + 1
        )));
    }

    Ok(Attribute::new(key, value.trim()))
}

fn check_pair(index: usize, key: &str, value: &str) -> Result<Attribute> {
    let key = key.trim();
    if key.is_empty() {
        return Err(DnError::malformed(format!(
            "attribute {} has an empty key",
            index + 1
        )));
    }
    if key.contains(KEY_VALUE_SEPARATOR) {
        return Err(DnError::malformed(format!(
            "attribute {} key contains '{KEY_VALUE_SEPARATOR}'",
            index + 1
        )));
    }

    if let Some(c) = key
        .chars()
        .chain(value.chars())
        .find(|c| *c == SEGMENT_SEPARATOR || UNSUPPORTED_CHARACTERS.contains(c))
    {
        return Err(DnError::malformed(format!(
            "attribute {} contains {c:?}, which the DN grammar cannot carry",
            index + 1
        )));
    }

    Ok(Attribute::new(key, value.trim()))
}

impl FromStr for DistinguishedName {
    type Err = DnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.attributes.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEGMENT_SEPARATOR}")?;
            }
            write!(f, "{attr}")?;
        }
        Ok(())
    }
}
