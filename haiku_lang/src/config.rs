// Composer configuration, loadable from JSON.
//
// Holds the few tunables of the slot-filling algorithm. The 5-7-5 pattern
// itself is not here: it is the `HAIKU_PATTERN` constant in `compose.rs`.
// Every field has a default, so `{}` is a valid config file and a file only
// needs to name the fields it changes.
//
// Loaded configs are validated: the placeholder unit must count as exactly
// `k` syllables when repeated `k` times for every `k` up to the longest line,
// otherwise placeholder slots would miss their budget.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compose::HAIKU_PATTERN;
use crate::error::HaikuError;
use crate::select::placeholder;
use crate::syllables::count_syllables;

/// Tunables for `compose` and `select_word`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Unit repeated once per syllable when no corpus word fits a slot
    /// (and once for a zero-syllable slot, so the result is never empty).
    pub placeholder_unit: String,
    /// Reject templates containing unrecognized `<...>` markers instead of
    /// treating them as inert text.
    pub strict_markers: bool,
    /// When a line has no slots and its literals fall short of the target,
    /// append placeholder syllables to reach it. When false the short line
    /// is emitted as is.
    pub pad_short_lines: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            placeholder_unit: "Blah".to_string(),
            strict_markers: false,
            pad_short_lines: true,
        }
    }
}

impl ComposerConfig {
    /// Parse and validate a config from a JSON string. Missing fields take
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, HaikuError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the placeholder unit repeats into the syllable count it
    /// stands for. "Ya" fails ("YaYa" is a single vowel cluster), as do
    /// "Hmm" and "Banana".
    pub fn validate(&self) -> Result<(), HaikuError> {
        let longest = HAIKU_PATTERN.into_iter().max().unwrap_or(0);
        let consistent = (1..=longest)
            .all(|k| count_syllables(&placeholder(&self.placeholder_unit, k)) == k);
        if consistent {
            Ok(())
        } else {
            Err(HaikuError::Placeholder {
                unit: self.placeholder_unit.clone(),
            })
        }
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, HaikuError> {
        let json = std::fs::read_to_string(path).map_err(|source| HaikuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_serializes() {
        let config = ComposerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored = ComposerConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn empty_object_gives_defaults() {
        let config = ComposerConfig::from_json("{}").unwrap();
        assert_eq!(config, ComposerConfig::default());
        assert_eq!(config.placeholder_unit, "Blah");
        assert!(config.pad_short_lines);
    }

    #[test]
    fn partial_config_overrides_named_fields() {
        let config = ComposerConfig::from_json(r#"{"strict_markers": true}"#).unwrap();
        assert!(config.strict_markers);
        assert_eq!(config.placeholder_unit, "Blah");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"placeholder_unit": "Om", "pad_short_lines": false}}"#).unwrap();
        let config = ComposerConfig::load(file.path()).unwrap();
        assert_eq!(config.placeholder_unit, "Om");
        assert!(!config.pad_short_lines);
        assert!(!config.strict_markers);
    }

    #[test]
    fn load_reports_bad_json_as_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2").unwrap();
        let err = ComposerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, HaikuError::Config(_)));
    }

    #[test]
    fn placeholder_unit_must_count_one_syllable_per_repeat() {
        for unit in ["Ya", "A", "Hmm", "Banana", "Be"] {
            let json = format!(r#"{{"placeholder_unit": "{unit}"}}"#);
            let err = ComposerConfig::from_json(&json).unwrap_err();
            assert!(
                matches!(&err, HaikuError::Placeholder { unit: u } if u == unit),
                "{unit}: {err}"
            );
        }
        for unit in ["Blah", "La", "Om", "Ba"] {
            let json = format!(r#"{{"placeholder_unit": "{unit}"}}"#);
            assert!(ComposerConfig::from_json(&json).is_ok(), "{unit}");
        }
    }

    #[test]
    fn load_rejects_bad_placeholder_unit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"placeholder_unit": "Ya"}}"#).unwrap();
        let err = ComposerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, HaikuError::Placeholder { .. }));
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(ComposerConfig::from_json(r#"{"strict_markers": "yes"}"#).is_err());
        assert!(ComposerConfig::from_json("not json").is_err());
    }
}
