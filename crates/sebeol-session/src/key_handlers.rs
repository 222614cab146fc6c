use tracing::{debug, debug_span};

use sebeol_core::fusion::fuse;
use sebeol_core::jamo::{JamoIndex, SlotClass, EMPTY};
use sebeol_core::keymap::{GalmaMode, Symbol};

use super::shortcuts::{self, Inject};
use super::types::{EditOp, KeyResponse, Queue};
use super::CompositionSession;

impl CompositionSession {
    /// Process one key code in `[33, 126]`. Codes outside the layout are
    /// not consumed and leave the session untouched.
    pub fn handle_key(&mut self, key: u8) -> KeyResponse {
        let _span = debug_span!("handle_key", key = %char::from(key), mode = ?self.mode).entered();

        for shortcut in shortcuts::matching(key, self.queue, self.mode) {
            if let Some(resp) = self.apply_shortcut(shortcut.inject) {
                debug!(inject = ?shortcut.inject, "shortcut");
                return resp;
            }
        }

        let Some(symbol) = self.table.resolve_key(key, self.mode) else {
            return KeyResponse::not_consumed();
        };
        debug!(%symbol, "resolved");

        match symbol {
            Symbol::Literal(ch) => {
                let mut resp = KeyResponse::consumed();
                self.commit_current(&mut resp);
                resp.ops.push(EditOp::Insert(ch.to_string()));
                resp
            }
            Symbol::Quit => self.cancel(),
            Symbol::Jamo(index) => match SlotClass::of(index) {
                Some(SlotClass::Initial) => self.place_initial(index),
                Some(SlotClass::Vowel) => self.place_vowel(index),
                Some(SlotClass::Final) => self.place_final(index),
                None => KeyResponse::not_consumed(),
            },
        }
    }

    /// `None` when an injected final neither fills nor fuses into the slot.
    fn apply_shortcut(&mut self, inject: Inject) -> Option<KeyResponse> {
        match inject {
            Inject::Vowel(vowel, mode) => {
                self.queue.jung = vowel;
                Some(self.rerender(mode))
            }
            Inject::Final(final_) if self.queue.jong == EMPTY => {
                self.queue.jong = final_;
                Some(self.rerender(self.queue.natural_mode()))
            }
            Inject::Final(final_) => {
                let current = self.queue.jong;
                let fused = fuse(SlotClass::Final, current, final_);
                let candidate = Queue {
                    jong: fused,
                    ..self.queue
                };
                if fused == current || candidate.render().is_empty() {
                    return None;
                }
                self.queue = candidate;
                Some(self.rerender(self.queue.natural_mode()))
            }
        }
    }

    fn place_initial(&mut self, index: JamoIndex) -> KeyResponse {
        if self.queue.is_empty() {
            self.queue.cho = index;
            return self.rerender(self.queue.natural_mode());
        }
        if !self.queue.is_initial_only() {
            return self.commit_and_restart(Queue::initial(index));
        }

        let current = self.queue.cho;
        let fused = fuse(SlotClass::Initial, current, index);
        if fused == current {
            return self.commit_and_restart(Queue::initial(index));
        }
        if SlotClass::Final.contains(fused) {
            // Initial pair that only exists as a final cluster: the block
            // becomes an isolated trailing consonant.
            debug!(current, incoming = index, fused, "promote to final");
            self.queue = Queue::trailing(fused);
        } else {
            self.queue.cho = fused;
        }
        self.rerender(self.queue.natural_mode())
    }

    fn place_vowel(&mut self, index: JamoIndex) -> KeyResponse {
        if self.queue.jong != EMPTY {
            return self.commit_and_restart(Queue::vowel(index));
        }
        if self.queue.jung == EMPTY {
            self.queue.jung = index;
            return self.rerender(self.queue.natural_mode());
        }

        let current = self.queue.jung;
        let fused = fuse(SlotClass::Vowel, current, index);
        if fused == current {
            return self.commit_and_restart(Queue::vowel(index));
        }
        self.queue.jung = fused;
        self.rerender(self.queue.natural_mode())
    }

    fn place_final(&mut self, index: JamoIndex) -> KeyResponse {
        if self.queue.jong == EMPTY {
            if self.queue.has_nucleus() {
                self.queue.jong = index;
                return self.rerender(self.queue.natural_mode());
            }
            return self.commit_and_restart(Queue::trailing(index));
        }

        let current = self.queue.jong;
        let fused = fuse(SlotClass::Final, current, index);
        let candidate = Queue {
            jong: fused,
            ..self.queue
        };
        if fused == current || candidate.render().is_empty() {
            return self.commit_and_restart(Queue::trailing(index));
        }
        self.queue = candidate;
        self.rerender(self.queue.natural_mode())
    }

    /// Remove the most recently filled jamo unit from the live block.
    pub fn backspace(&mut self) -> KeyResponse {
        let _span = debug_span!("backspace", queue = ?self.queue).entered();

        if self.queue.jong != EMPTY {
            self.queue.jong = EMPTY;
        } else if self.queue.jung != EMPTY {
            self.queue.jung = EMPTY;
        } else if self.queue.cho != EMPTY {
            self.queue.cho = EMPTY;
        } else {
            return KeyResponse::not_consumed();
        }

        if self.queue.is_empty() {
            let mut resp = KeyResponse::consumed();
            resp.ops.push(EditOp::Commit);
            resp.ops.push(EditOp::DeleteBefore(1));
            self.reset_state();
            return resp;
        }
        // Vowel is now the highest slot, so galma keys go back to finals.
        let mode = if self.queue.jung != EMPTY {
            GalmaMode::Consonant
        } else {
            GalmaMode::Vowel
        };
        self.rerender(mode)
    }
}
