//! Extractor configuration
//!
//! Provides the input-handling knobs and presets for different callers.

/// Default upper bound on certificate text length (1 MiB)
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024 * 1024;

/// Certificate extractor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Accept `-----BEGIN CERTIFICATE-----` armored input
    pub accept_pem_armor: bool,
    /// Maximum accepted input length in bytes, whitespace included
    pub max_input_len: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            accept_pem_armor: true,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl ExtractorConfig {
    /// Bare Base64 only, 64 KiB limit
    #[must_use]
    pub fn strict() -> Self {
        Self {
            accept_pem_armor: false,
            max_input_len: 64 * 1024,
        }
    }

    /// Armored or bare input, 16 MiB limit
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            accept_pem_armor: true,
            max_input_len: 16 * 1024 * 1024,
        }
    }
}
