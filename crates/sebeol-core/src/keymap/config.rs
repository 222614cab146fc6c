use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Entry, Symbol, KEY_FIRST, KEY_LAST};
use crate::encoder::index_of_compat;
use crate::jamo::SlotClass;

#[derive(Deserialize)]
struct KeymapConfig {
    keys: BTreeMap<String, RawEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Fixed(String),
    Galma(Vec<String>),
}

#[derive(Debug, thiserror::Error)]
pub enum KeymapError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[keys] table is empty")]
    Empty,
    #[error("key must be one printable ASCII character: {0:?}")]
    InvalidKey(String),
    #[error("invalid symbol for key {key:?}: {value:?}")]
    InvalidSymbol { key: String, value: String },
    #[error("galma entry for key {key:?} needs 3 candidates, got {len}")]
    CandidateCount { key: String, len: usize },
}

/// Parse layout TOML into `(key code, entry)` pairs, sorted by key.
pub fn parse_keymap_toml(toml_str: &str) -> Result<Vec<(u8, Entry)>, KeymapError> {
    let config: KeymapConfig =
        toml::from_str(toml_str).map_err(|e| KeymapError::Parse(e.to_string()))?;

    if config.keys.is_empty() {
        return Err(KeymapError::Empty);
    }

    let mut entries = Vec::with_capacity(config.keys.len());
    for (key, raw) in &config.keys {
        let code = parse_key(key)?;
        let entry = match raw {
            RawEntry::Fixed(value) => Entry::Fixed(parse_symbol(key, value)?),
            RawEntry::Galma(values) => {
                if values.len() != 3 {
                    return Err(KeymapError::CandidateCount {
                        key: key.clone(),
                        len: values.len(),
                    });
                }
                Entry::Galma([
                    parse_symbol(key, &values[0])?,
                    parse_symbol(key, &values[1])?,
                    parse_symbol(key, &values[2])?,
                ])
            }
        };
        entries.push((code, entry));
    }
    Ok(entries)
}

fn parse_key(key: &str) -> Result<u8, KeymapError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && (KEY_FIRST..=KEY_LAST).contains(&(c as u8)) => {
            Ok(c as u8)
        }
        _ => Err(KeymapError::InvalidKey(key.to_string())),
    }
}

fn parse_symbol(key: &str, value: &str) -> Result<Symbol, KeymapError> {
    let invalid = || KeymapError::InvalidSymbol {
        key: key.to_string(),
        value: value.to_string(),
    };

    if value == "quit" {
        return Ok(Symbol::Quit);
    }
    let (tag, body) = value.split_once(':').ok_or_else(invalid)?;
    let mut chars = body.chars();
    let ch = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(invalid()),
    };
    let class = match tag {
        "lit" => return Ok(Symbol::Literal(ch)),
        "i" => SlotClass::Initial,
        "v" => SlotClass::Vowel,
        "f" => SlotClass::Final,
        _ => return Err(invalid()),
    };
    index_of_compat(class, ch)
        .map(Symbol::Jamo)
        .ok_or_else(invalid)
}
