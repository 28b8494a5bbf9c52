// WHY: Explicit per-document settings passed into every paint call
// Loaded from TOML; missing keys fall back to defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings consumed by the painter and segmenter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BionicConfig {
    /// Master switch for bold/light emphasis
    pub enabled: bool,
    pub parsing_offset: i32,
    pub opacity_contrast: f64,
    pub weight_contrast: f64,
    pub weight_offset: f64,
    pub highlight_verbs: bool,
    pub highlight_nouns: bool,
    pub verb_color: String,
    pub noun_color: String,
    /// Comma or space separated language codes that disable emphasis, e.g. `"zh, ja"`
    pub disable_for_languages: String,
}

impl Default for BionicConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            parsing_offset: 0,
            opacity_contrast: 1.0,
            weight_contrast: 1.0,
            weight_offset: 0.0,
            highlight_verbs: false,
            highlight_nouns: false,
            verb_color: "#FF5252".to_string(),
            noun_color: "#5252FF".to_string(),
            disable_for_languages: String::new(),
        }
    }
}

impl BionicConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid bionic configuration")
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// Any emphasis or highlighting is active
    pub fn needs_processing(&self) -> bool {
        self.enabled || self.highlight_verbs || self.highlight_nouns
    }

    /// Whether emphasis stays on for a document in `language`, e.g. `"en-US"` or `"zh_CN"`
    pub fn is_enabled_for_language(&self, language: &str) -> bool {
        if !self.enabled {
            return false;
        }
        let disabled = self.disable_for_languages.to_lowercase();
        if disabled.trim().is_empty() {
            return true;
        }

        let splitter = if language.contains('-') { '-' } else { '_' };
        let primary = language.split(splitter).next().unwrap_or_default().to_lowercase();
        if primary.is_empty() {
            return true;
        }

        !disabled
            .split(|c: char| c == ',' || c.is_whitespace())
            .any(|code| code == primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BionicConfig::default();
        assert!(config.enabled);
        assert!(config.needs_processing());
        assert_eq!(config.verb_color, "#FF5252");
        assert_eq!(config.noun_color, "#5252FF");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = BionicConfig::from_toml_str("parsing_offset = -1\nhighlight_nouns = true\n").unwrap();
        assert_eq!(config.parsing_offset, -1);
        assert!(config.highlight_nouns);
        assert!(config.enabled);
        assert_eq!(config.weight_contrast, 1.0);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(BionicConfig::from_toml_str("enabled = \"maybe\"").is_err());
    }

    #[test]
    fn test_needs_processing() {
        let mut config = BionicConfig { enabled: false, ..Default::default() };
        assert!(!config.needs_processing());
        config.highlight_verbs = true;
        assert!(config.needs_processing());
    }

    #[test]
    fn test_language_gating() {
        let config = BionicConfig {
            disable_for_languages: "ZH, ja".to_string(),
            ..Default::default()
        };
        assert!(!config.is_enabled_for_language("zh-CN"));
        assert!(!config.is_enabled_for_language("ja_JP"));
        assert!(config.is_enabled_for_language("en-US"));
        assert!(config.is_enabled_for_language(""));
        assert!(BionicConfig::default().is_enabled_for_language("zh"));

        // codes match whole entries only
        let partial = BionicConfig {
            disable_for_languages: "zhx".to_string(),
            ..Default::default()
        };
        assert!(partial.is_enabled_for_language("zh-TW"));
    }
}
