use tracing::debug;

use sebeol_core::keymap::GalmaMode;

use super::types::{EditOp, KeyResponse, Queue};
use super::CompositionSession;

impl CompositionSession {
    /// Close the live block as final text, if any, and reset.
    pub(super) fn commit_current(&mut self, resp: &mut KeyResponse) {
        if !self.queue.is_empty() {
            debug!(text = %self.queue.render(), "commit");
            resp.ops.push(EditOp::Commit);
        }
        self.reset_state();
    }

    /// Commit the live block and open a new one holding `next`.
    pub(super) fn commit_and_restart(&mut self, next: Queue) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        self.commit_current(&mut resp);
        self.queue = next;
        self.mode = next.natural_mode();
        resp.ops.push(EditOp::Replace(next.render()));
        resp
    }

    /// Re-render the live block in place after a mutation.
    pub(super) fn rerender(&mut self, mode: GalmaMode) -> KeyResponse {
        self.mode = mode;
        let mut resp = KeyResponse::consumed();
        resp.ops.push(EditOp::Replace(self.queue.render()));
        resp
    }

    /// Commit the pending block (cursor move, conversion, deactivation).
    pub fn flush(&mut self) -> KeyResponse {
        if self.queue.is_empty() {
            return KeyResponse::not_consumed();
        }
        let mut resp = KeyResponse::consumed();
        self.commit_current(&mut resp);
        resp
    }

    /// Abort the live block without keeping its text.
    pub fn cancel(&mut self) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        if !self.queue.is_empty() {
            debug!(discarded = %self.queue.render(), "cancel");
            resp.ops.push(EditOp::Replace(String::new()));
            resp.ops.push(EditOp::Commit);
        }
        resp.side_effects.cancelled = true;
        self.reset_state();
        resp
    }

    pub(super) fn reset_state(&mut self) {
        self.queue = Queue::default();
        self.mode = GalmaMode::Vowel;
    }
}
