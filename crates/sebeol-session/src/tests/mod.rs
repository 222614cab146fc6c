mod bridge;
mod galma;

use super::types::key;
use super::CompositionSession;
use super::KeyResponse;

/// Feed each byte of `keys` to the session.
pub(super) fn type_keys(session: &mut CompositionSession, keys: &str) -> Vec<KeyResponse> {
    keys.bytes().map(|b| session.handle_key(b)).collect()
}

/// Type `keys` into a fresh session and return what its live span shows.
pub(super) fn preedit_after(keys: &str) -> String {
    let mut session = CompositionSession::new();
    type_keys(&mut session, keys);
    session.preedit()
}

/// Feed `keys` (8 = backspace) through a bridge and return the buffer text
/// after a final flush.
pub(super) fn typed_text(keys: &str) -> String {
    let mut bridge = crate::Bridge::new(crate::TextBuffer::new());
    for c in keys.chars() {
        let code = if c == '\u{8}' {
            key::BACKSPACE
        } else {
            u32::from(c)
        };
        bridge.feed(code);
    }
    bridge.flush();
    bridge.surface().text()
}
