//! Configuration structures for the card parser.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::card::rules::phone::{MAX_PHONES, MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};
use crate::error::{CardexError, Result};

/// Main configuration for cardex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardexConfig {
    /// Contact extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Contact extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of phone numbers kept per card, at most 3.
    pub max_phones: usize,

    /// Minimum digit count for a phone number, within 7..=15.
    pub min_phone_digits: usize,

    /// Maximum digit count for a phone number, within 7..=15.
    pub max_phone_digits: usize,

    /// Minimum length (characters) of a line accepted as a name.
    pub min_name_length: usize,

    /// Maximum length (characters) of a line accepted as a name.
    pub max_name_length: usize,

    /// Share of a line an email must cover for the line to be skipped.
    pub email_line_ratio: f32,

    /// Additional job title keywords.
    pub extra_job_titles: Vec<String>,

    /// Additional company suffix keywords.
    pub extra_company_suffixes: Vec<String>,

    /// Additional address keywords.
    pub extra_address_keywords: Vec<String>,

    /// Skip website candidates inside email addresses and only accept
    /// Twitter handles that start a word.
    pub strict_links: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_phones: 3,
            min_phone_digits: 7,
            max_phone_digits: 15,
            min_name_length: 3,
            max_name_length: 49,
            email_line_ratio: 0.5,
            extra_job_titles: Vec::new(),
            extra_company_suffixes: Vec::new(),
            extra_address_keywords: Vec::new(),
            strict_links: false,
        }
    }
}

impl ExtractionConfig {
    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.max_phones > MAX_PHONES {
            return Err(CardexError::Config(format!(
                "max_phones ({}) exceeds {}",
                self.max_phones, MAX_PHONES
            )));
        }
        let digit_bounds = MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS;
        if !digit_bounds.contains(&self.min_phone_digits)
            || !digit_bounds.contains(&self.max_phone_digits)
        {
            return Err(CardexError::Config(format!(
                "phone digit range {}..={} must lie within {}..={}",
                self.min_phone_digits, self.max_phone_digits, MIN_PHONE_DIGITS, MAX_PHONE_DIGITS
            )));
        }
        if self.min_phone_digits > self.max_phone_digits {
            return Err(CardexError::Config(format!(
                "min_phone_digits ({}) exceeds max_phone_digits ({})",
                self.min_phone_digits, self.max_phone_digits
            )));
        }
        if self.min_name_length > self.max_name_length {
            return Err(CardexError::Config(format!(
                "min_name_length ({}) exceeds max_name_length ({})",
                self.min_name_length, self.max_name_length
            )));
        }
        if !(0.0..=1.0).contains(&self.email_line_ratio) {
            return Err(CardexError::Config(format!(
                "email_line_ratio must be within 0.0..=1.0, got {}",
                self.email_line_ratio
            )));
        }
        Ok(())
    }
}

impl CardexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.extraction.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CardexConfig =
            serde_json::from_str(r#"{"extraction": {"max_phones": 2}}"#).unwrap();

        assert_eq!(config.extraction.max_phones, 2);
        assert!(!config.extraction.strict_links);
        assert_eq!(config.extraction.min_phone_digits, 7);
        assert_eq!(config.extraction.max_name_length, 49);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = CardexConfig::default();
        config.extraction.extra_job_titles.push("Chef".to_string());
        config.save(&path).unwrap();

        let loaded = CardexConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extraction": {"min_phone_digits": 20}}"#).unwrap();

        let err = CardexConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CardexError::Config(_)));
    }

    #[test]
    fn test_phone_limits_cannot_be_widened() {
        let config = ExtractionConfig {
            max_phones: 10,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CardexError::Config(_))));

        let config = ExtractionConfig {
            min_phone_digits: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ExtractionConfig {
            max_phone_digits: 16,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ExtractionConfig {
            max_phones: 1,
            min_phone_digits: 10,
            max_phone_digits: 11,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
