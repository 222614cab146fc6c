//! Global settings loaded from TOML, following the same OnceLock pattern as
//! the hanja table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Settings never touch the layout itself; `[remap]` is applied by the
//! editing bridge before a key code reaches the layout.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::keymap::{KEY_FIRST, KEY_LAST};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub hanja: HanjaSettings,
    #[serde(default)]
    remap: HashMap<String, String>,
    #[serde(skip)]
    remap_parsed: Vec<(u8, u8)>,
}

impl Settings {
    /// Remapped key code, or `key` itself when no remap applies.
    pub fn remap_key(&self, key: u8) -> u8 {
        self.remap_parsed
            .iter()
            .find_map(|&(from, to)| (from == key).then_some(to))
            .unwrap_or(key)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HanjaSettings {
    pub max_candidates: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.remap_parsed = parse_remap(&s.remap)?;
    Ok(s)
}

fn parse_remap(raw: &HashMap<String, String>) -> Result<Vec<(u8, u8)>, SettingsError> {
    let mut result = Vec::with_capacity(raw.len());
    for (from, to) in raw {
        let from_code = printable_key(from).ok_or_else(|| SettingsError::InvalidValue {
            field: format!("remap.{}", from),
            reason: "key must be one printable ASCII character".to_string(),
        })?;
        let to_code = printable_key(to).ok_or_else(|| SettingsError::InvalidValue {
            field: format!("remap.{}", from),
            reason: "value must be one printable ASCII character".to_string(),
        })?;
        result.push((from_code, to_code));
    }
    Ok(result)
}

fn printable_key(s: &str) -> Option<u8> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && (KEY_FIRST..=KEY_LAST).contains(&(c as u8)) => {
            Some(c as u8)
        }
        _ => None,
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.hanja.max_candidates == 0 {
        return Err(SettingsError::InvalidValue {
            field: "hanja.max_candidates".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.hanja.max_candidates, 9);
        assert_eq!(s.remap_key(b'r'), b'r');
    }

    #[test]
    fn parse_remap() {
        let toml = r#"
[hanja]
max_candidates = 5

[remap]
"|" = "`"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.hanja.max_candidates, 5);
        assert_eq!(s.remap_key(b'|'), b'`');
        assert_eq!(s.remap_key(b'`'), b'`');
    }

    #[test]
    fn remap_section_is_optional() {
        let s = parse_settings_toml("[hanja]\nmax_candidates = 3\n").unwrap();
        assert_eq!(s.remap_key(b'a'), b'a');
    }

    #[test]
    fn error_zero_candidates() {
        let err = parse_settings_toml("[hanja]\nmax_candidates = 0\n").unwrap_err();
        match err {
            SettingsError::InvalidValue { field, .. } => {
                assert_eq!(field, "hanja.max_candidates")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn error_remap_not_printable() {
        let toml = r#"
[hanja]
max_candidates = 3

[remap]
"a" = " "
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[remap]\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
