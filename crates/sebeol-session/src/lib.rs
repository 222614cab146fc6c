//! Stateful composition session turning galmadeuli key codes into Hangul blocks.
//!
//! `CompositionSession` owns one in-progress block (the [`Queue`]) and the
//! alternation mode, processes one key at a time, and returns the edit
//! operations the host applies to its text buffer. Sessions share the static
//! layout table and nothing else, so every input context gets its own.

pub mod bridge;
pub(crate) mod types;

mod commit;
mod key_handlers;
mod shortcuts;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use sebeol_core::encoder::compose_syllable;
use sebeol_core::keymap::{GalmaMode, KeyTable};

pub use bridge::{Bridge, EditSurface, Feed, TextBuffer};
pub use types::{key, EditOp, KeyResponse, Queue, SideEffects};

/// One composition context: the live block, its alternation mode, and a
/// handle to the layout.
pub struct CompositionSession {
    table: Arc<KeyTable>,
    queue: Queue,
    mode: GalmaMode,
}

impl Default for CompositionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionSession {
    /// Session over the compiled-in layout.
    pub fn new() -> Self {
        Self::with_table(KeyTable::shared())
    }

    pub fn with_table(table: Arc<KeyTable>) -> Self {
        Self {
            table,
            queue: Queue::default(),
            mode: GalmaMode::Vowel,
        }
    }

    pub fn is_composing(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn mode(&self) -> GalmaMode {
        self.mode
    }

    /// Snapshot of the live block.
    pub fn queue(&self) -> Queue {
        self.queue
    }

    /// What the live span currently shows.
    pub fn preedit(&self) -> String {
        self.queue.render()
    }

    /// The precomposed syllable the live block renders to, if it is one.
    pub fn syllable_at_point(&self) -> Option<char> {
        compose_syllable(self.queue.cho, self.queue.jung, self.queue.jong)
    }

    /// Forget the live block after the host replaced its text externally
    /// (e.g. hanja conversion). Emits nothing.
    pub fn clear_after_replacement(&mut self) {
        self.reset_state();
    }
}
