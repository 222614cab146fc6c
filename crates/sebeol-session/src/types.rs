use sebeol_core::encoder::encode;
use sebeol_core::jamo::{JamoIndex, EMPTY};
use sebeol_core::keymap::GalmaMode;

// Control codes the bridge intercepts before the layout.
pub mod key {
    pub const BACKSPACE: u32 = 8;
    pub const SPACE: u32 = 32;
    pub const DELETE: u32 = 127;
}

/// The block currently being typed: one slot per jamo class, `0` when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Queue {
    pub cho: JamoIndex,
    pub jung: JamoIndex,
    pub jong: JamoIndex,
}

impl Queue {
    pub(crate) fn initial(cho: JamoIndex) -> Self {
        Self {
            cho,
            ..Self::default()
        }
    }

    pub(crate) fn vowel(jung: JamoIndex) -> Self {
        Self {
            jung,
            ..Self::default()
        }
    }

    pub(crate) fn trailing(jong: JamoIndex) -> Self {
        Self {
            jong,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cho == EMPTY && self.jung == EMPTY && self.jong == EMPTY
    }

    /// Exactly an initial, nothing else.
    pub(crate) fn is_initial_only(&self) -> bool {
        self.cho != EMPTY && self.jung == EMPTY && self.jong == EMPTY
    }

    pub(crate) fn is_vowel_only(&self) -> bool {
        self.cho == EMPTY && self.jung != EMPTY && self.jong == EMPTY
    }

    /// Initial and vowel present.
    pub(crate) fn has_nucleus(&self) -> bool {
        self.cho != EMPTY && self.jung != EMPTY
    }

    /// Mode implied by the slots alone: galma keys give finals once a
    /// nucleus exists.
    pub(crate) fn natural_mode(&self) -> GalmaMode {
        if self.has_nucleus() {
            GalmaMode::Consonant
        } else {
            GalmaMode::Vowel
        }
    }

    pub fn render(&self) -> String {
        encode(self.cho, self.jung, self.jong)
    }
}

/// One mutation of the host buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Replace the live composition span (opening one at point if needed).
    Replace(String),
    /// Close the live span, keeping its text as final.
    Commit,
    /// Delete codepoints immediately before point.
    DeleteBefore(usize),
    /// Insert literal text at point, outside any span.
    Insert(String),
}

/// Orthogonal side-effects that accompany a response.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SideEffects {
    /// The key aborted composition; the host should treat it as an interrupt.
    pub cancelled: bool,
}

/// Response from handle_key / backspace / flush, returned to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    pub ops: Vec<EditOp>,
    pub side_effects: SideEffects,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            ops: Vec::new(),
            side_effects: SideEffects::default(),
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    /// Text of the last `Replace`, i.e. what the live span shows afterwards.
    pub fn preedit(&self) -> Option<&str> {
        self.ops.iter().rev().find_map(|op| match op {
            EditOp::Replace(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn commits(&self) -> bool {
        self.ops.iter().any(|op| matches!(op, EditOp::Commit))
    }
}
