//! Syllable → hanja candidate table.
//!
//! Same lifecycle as the layout: an embedded default, optionally replaced
//! by `init_custom` before the first `global()` call.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_HANJA_TOML: &str = include_str!("default_hanja.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Deserialize)]
struct HanjaConfig {
    entries: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum HanjaError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[entries] table is empty")]
    Empty,
    #[error("key must be one precomposed syllable: {0:?}")]
    InvalidKey(String),
    #[error("no candidates for {0:?}")]
    EmptyCandidates(String),
    #[error("hanja table already initialized")]
    AlreadyInitialized,
}

#[derive(Debug)]
pub struct HanjaTable {
    entries: HashMap<char, Vec<String>>,
}

impl HanjaTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), HanjaError> {
        HanjaTable::from_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| HanjaError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static HanjaTable {
        static INSTANCE: OnceLock<HanjaTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_HANJA_TOML);
            HanjaTable::from_toml(toml_str).expect("hanja TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<HanjaTable, HanjaError> {
        let config: HanjaConfig =
            toml::from_str(toml_str).map_err(|e| HanjaError::Parse(e.to_string()))?;
        if config.entries.is_empty() {
            return Err(HanjaError::Empty);
        }

        let mut entries = HashMap::with_capacity(config.entries.len());
        for (key, candidates) in config.entries {
            let mut chars = key.chars();
            let syllable = match (chars.next(), chars.next()) {
                (Some(c), None) if is_precomposed(c) => c,
                _ => return Err(HanjaError::InvalidKey(key)),
            };
            if candidates.is_empty() || candidates.iter().any(|c| c.is_empty()) {
                return Err(HanjaError::EmptyCandidates(key));
            }
            entries.insert(syllable, candidates);
        }
        Ok(HanjaTable { entries })
    }

    /// Candidates for `syllable`, most common first. Empty when unknown.
    pub fn lookup(&self, syllable: char) -> &[String] {
        self.entries
            .get(&syllable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_precomposed(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_lookup() {
        let table = HanjaTable::global();
        assert!(table.len() > 30);
        assert_eq!(table.lookup('한').first().map(String::as_str), Some("韓"));
        assert!(table.lookup('학').iter().any(|c| c == "學"));
        assert!(table.lookup('읒').is_empty());
    }

    #[test]
    fn error_key_not_syllable() {
        let toml = r#"
[entries]
"ㄱ" = ["可"]
"#;
        let err = HanjaTable::from_toml(toml).unwrap_err();
        assert!(matches!(err, HanjaError::InvalidKey(_)));
    }

    #[test]
    fn error_multi_char_key() {
        let toml = r#"
[entries]
"한국" = ["韓國"]
"#;
        let err = HanjaTable::from_toml(toml).unwrap_err();
        assert!(matches!(err, HanjaError::InvalidKey(_)));
    }

    #[test]
    fn error_empty_candidates() {
        let toml = r#"
[entries]
"한" = []
"#;
        let err = HanjaTable::from_toml(toml).unwrap_err();
        assert!(matches!(err, HanjaError::EmptyCandidates(_)));
    }

    #[test]
    fn error_empty_table() {
        let err = HanjaTable::from_toml("[entries]\n").unwrap_err();
        assert!(matches!(err, HanjaError::Empty));
    }
}
