//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy for competencies and measurable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Attribute whole sentences to categories
    #[default]
    Sentence,
    /// Record keyword hits inside experience fragments (legacy)
    Fragment,
}

impl ExtractionMode {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::Sentence => "sentence",
            ExtractionMode::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionMode {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sentence" => Ok(ExtractionMode::Sentence),
            "fragment" => Ok(ExtractionMode::Fragment),
            other => Err(ExtractorError::Config(format!("Unknown extraction mode: {}", other))),
        }
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Competency and measurable-result strategy
    pub mode: ExtractionMode,

    /// Maximum input text length (characters)
    pub max_text_length: usize,

    /// Longest line, in words, that can be a section header
    pub section_header_max_words: usize,

    /// Clean up raw text before annotation
    pub normalize: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.section_header_max_words == 0 {
            return Err("section_header_max_words must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            mode: ExtractionMode::Sentence,
            max_text_length: 200_000,
            section_header_max_words: 4,
            normalize: true,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: short documents, tight header detection
    pub fn strict() -> Self {
        Self {
            mode: ExtractionMode::Sentence,
            max_text_length: 50_000,
            section_header_max_words: 3,
            normalize: true,
        }
    }

    /// Lenient preset: long documents, loose header detection
    pub fn lenient() -> Self {
        Self {
            mode: ExtractionMode::Sentence,
            max_text_length: 1_000_000,
            section_header_max_words: 6,
            normalize: true,
        }
    }

    /// Same configuration with another mode
    pub fn with_mode(mut self, mode: ExtractionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode, ExtractionMode::Sentence);
    }

    #[test]
    fn test_strict_config_is_valid() {
        assert!(ExtractorConfig::strict().validate().is_ok());
    }

    #[test]
    fn test_lenient_config_is_valid() {
        assert!(ExtractorConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_invalid_max_text_length() {
        let mut config = ExtractorConfig::default();
        config.max_text_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_header_words() {
        let mut config = ExtractorConfig::default();
        config.section_header_max_words = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::lenient().with_mode(ExtractionMode::Fragment);
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml(r#"mode = "fragment""#).unwrap();
        assert_eq!(config.mode, ExtractionMode::Fragment);
        assert_eq!(config.max_text_length, ExtractorConfig::default().max_text_length);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Fragment".parse::<ExtractionMode>().unwrap(), ExtractionMode::Fragment);
        assert_eq!(ExtractionMode::Sentence.to_string(), "sentence");
        assert!("paragraph".parse::<ExtractionMode>().is_err());
    }
}
