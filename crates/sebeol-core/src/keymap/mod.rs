//! Key code → jamo resolution for the galmadeuli layout.
//!
//! The layout is compiled in from `default_keymap.toml`. Galma keys carry
//! three candidates and the session's [`GalmaMode`] picks one.

mod config;
mod table;

use std::fmt;
use std::sync::{Arc, OnceLock};

pub use config::{parse_keymap_toml, KeymapError};

use crate::encoder::compat_jamo;
use crate::jamo::{JamoIndex, SlotClass};

/// Printable key range handled by the core.
pub const KEY_FIRST: u8 = 33;
pub const KEY_LAST: u8 = 126;
const KEY_COUNT: usize = (KEY_LAST - KEY_FIRST + 1) as usize;

/// Alternation mode: which candidate a galma key produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalmaMode {
    /// No nucleus yet; galma keys give vowels.
    #[default]
    Vowel,
    /// Initial and vowel present; galma keys give finals.
    Consonant,
    /// A ㅡ pivot was injected; pivot partners give vowels, the rest finals.
    BCombination,
}

impl GalmaMode {
    fn candidate_index(self) -> usize {
        match self {
            GalmaMode::Vowel => 0,
            GalmaMode::Consonant => 1,
            GalmaMode::BCombination => 2,
        }
    }
}

/// Result of resolving a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Jamo(JamoIndex),
    Literal(char),
    Quit,
}

/// Same syntax the layout TOML uses (`i:ㄱ`, `lit:x`, `quit`).
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Symbol::Jamo(index) => match (SlotClass::of(index), compat_jamo(index)) {
                (Some(class), Some(ch)) => write!(f, "{}:{}", class.prefix(), ch),
                _ => write!(f, "#{index}"),
            },
            Symbol::Literal(c) => write!(f, "lit:{c}"),
            Symbol::Quit => f.write_str("quit"),
        }
    }
}

/// One key's table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Fixed(Symbol),
    /// [Vowel, Consonant, BCombination] candidates.
    Galma([Symbol; 3]),
}

pub struct KeyTable {
    entries: [Entry; KEY_COUNT],
}

impl KeyTable {
    /// Build a table from layout TOML. Keys missing from the TOML insert
    /// themselves as literals.
    pub fn from_toml(toml_str: &str) -> Result<KeyTable, KeymapError> {
        let mut entries: [Entry; KEY_COUNT] = std::array::from_fn(|i| {
            Entry::Fixed(Symbol::Literal(char::from(KEY_FIRST + i as u8)))
        });
        for (code, entry) in parse_keymap_toml(toml_str)? {
            entries[usize::from(code - KEY_FIRST)] = entry;
        }
        Ok(KeyTable { entries })
    }

    /// The compiled-in layout.
    pub fn global() -> &'static KeyTable {
        Self::shared_ref()
    }

    /// The compiled-in layout as a shareable handle for sessions.
    pub fn shared() -> Arc<KeyTable> {
        Arc::clone(Self::shared_ref())
    }

    fn shared_ref() -> &'static Arc<KeyTable> {
        static INSTANCE: OnceLock<Arc<KeyTable>> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Arc::new(KeyTable::from_toml(table::DEFAULT_TOML).expect("layout TOML must be valid"))
        })
    }

    pub fn entry(&self, key: u8) -> Option<&Entry> {
        if !(KEY_FIRST..=KEY_LAST).contains(&key) {
            return None;
        }
        self.entries.get(usize::from(key - KEY_FIRST))
    }

    /// Resolve `key` under `mode`. `None` for codes outside 33..=126.
    pub fn resolve_key(&self, key: u8, mode: GalmaMode) -> Option<Symbol> {
        self.entry(key).map(|entry| match *entry {
            Entry::Fixed(symbol) => symbol,
            Entry::Galma(candidates) => candidates[mode.candidate_index()],
        })
    }

    /// All entries with their key codes, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (KEY_FIRST + i as u8, e))
    }
}

/// Returns the embedded layout TOML.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
