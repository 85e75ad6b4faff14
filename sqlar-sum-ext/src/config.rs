//! Extension configuration

use crate::error::Result;
use serde::Deserialize;
use sqlar_sum_core::FallbackWidth;
use std::path::Path;

/// Options applied when the checksum functions are registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtensionConfig {
    /// Width at which integer arguments are extracted (default: narrow)
    pub integer_fallback: FallbackWidth,
}

impl ExtensionConfig {
    /// Parse a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Read and parse a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtensionError;

    #[test]
    fn test_empty_document_is_default() {
        let config = ExtensionConfig::from_toml_str("").unwrap();
        assert_eq!(config, ExtensionConfig::default());
        assert_eq!(config.integer_fallback, FallbackWidth::Narrow);
    }

    #[test]
    fn test_wide_fallback() {
        let config = ExtensionConfig::from_toml_str("integer_fallback = \"wide\"").unwrap();
        assert_eq!(config.integer_fallback, FallbackWidth::Wide);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = ExtensionConfig::from_toml_str("seed = 1").unwrap_err();
        assert!(matches!(err, ExtensionError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_width() {
        let err = ExtensionConfig::from_toml_str("integer_fallback = \"huge\"").unwrap_err();
        assert!(matches!(err, ExtensionError::Config(_)));
    }
}
