//! Editing bridge: routes raw key codes to a session and applies the
//! resulting edit operations to a host text surface.
//!
//! The host implements [`EditSurface`]; [`TextBuffer`] is the in-memory
//! surface used by the CLI and the tests.

use tracing::debug;

use sebeol_core::hanja::HanjaTable;
use sebeol_core::keymap::{KEY_FIRST, KEY_LAST};
use sebeol_core::settings::{settings, Settings};

use super::types::{key, EditOp, KeyResponse};
use super::CompositionSession;

/// Host text buffer as seen by the bridge. Positions are in codepoints.
pub trait EditSurface {
    /// Replace the live composition span with `text`, opening one at point
    /// when none is open. Point ends after the span.
    fn replace_span(&mut self, text: &str);
    /// Close the live span, keeping its text.
    fn commit_span(&mut self);
    /// Delete up to `n` codepoints before point.
    fn delete_before(&mut self, n: usize);
    /// Insert `text` at point, outside any span.
    fn insert(&mut self, text: &str);
    fn char_before_point(&self) -> Option<char>;
    /// Replace the `n` codepoints before point with `text`.
    fn replace_before(&mut self, n: usize, text: &str);
    /// Move point, closing any live span.
    fn set_point(&mut self, point: usize);
}

/// In-memory [`EditSurface`].
#[derive(Debug, Default, Clone)]
pub struct TextBuffer {
    text: Vec<char>,
    point: usize,
    /// Live span as `[start, end)`.
    span: Option<(usize, usize)>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with point at the end.
    pub fn with_text(text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        let point = text.len();
        Self {
            text,
            point,
            span: None,
        }
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn point(&self) -> usize {
        self.point
    }

    /// Text of the live span, if one is open.
    pub fn span_text(&self) -> Option<String> {
        self.span
            .map(|(start, end)| self.text[start..end].iter().collect())
    }
}

impl EditSurface for TextBuffer {
    fn replace_span(&mut self, text: &str) {
        let (start, end) = self.span.unwrap_or((self.point, self.point));
        let replacement: Vec<char> = text.chars().collect();
        let new_end = start + replacement.len();
        self.text.splice(start..end, replacement);
        self.span = Some((start, new_end));
        self.point = new_end;
    }

    fn commit_span(&mut self) {
        self.span = None;
    }

    fn delete_before(&mut self, n: usize) {
        let start = self.point.saturating_sub(n);
        self.text.drain(start..self.point);
        self.point = start;
        self.span = None;
    }

    fn insert(&mut self, text: &str) {
        self.span = None;
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        self.text.splice(self.point..self.point, chars);
        self.point += len;
    }

    fn char_before_point(&self) -> Option<char> {
        self.point
            .checked_sub(1)
            .and_then(|i| self.text.get(i).copied())
    }

    fn replace_before(&mut self, n: usize, text: &str) {
        self.delete_before(n);
        self.insert(text);
    }

    /// Clamped to the buffer.
    fn set_point(&mut self, point: usize) {
        self.span = None;
        self.point = point.min(self.text.len());
    }
}

/// What the bridge did with one key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// The session consumed the key.
    Handled,
    /// The key reached the surface unchanged.
    PassedThrough,
    /// The key aborted composition.
    Cancelled,
}

/// One session bound to one host surface.
pub struct Bridge<S: EditSurface> {
    session: CompositionSession,
    surface: S,
    settings: Settings,
}

impl<S: EditSurface> Bridge<S> {
    /// Bridge using the global settings.
    pub fn new(surface: S) -> Self {
        Self::with_settings(surface, settings().clone())
    }

    pub fn with_settings(surface: S, settings: Settings) -> Self {
        Self {
            session: CompositionSession::new(),
            surface,
            settings,
        }
    }

    /// Route one raw key code.
    pub fn feed(&mut self, code: u32) -> Feed {
        self.feed_detailed(code).0
    }

    /// Like [`Bridge::feed`], also returning the session response that was
    /// applied (not consumed when the key bypassed the session).
    pub fn feed_detailed(&mut self, code: u32) -> (Feed, KeyResponse) {
        match code {
            key::BACKSPACE | key::DELETE => {
                let resp = self.session.backspace();
                if resp.consumed {
                    self.apply(&resp);
                    (Feed::Handled, resp)
                } else {
                    self.surface.delete_before(1);
                    (Feed::PassedThrough, resp)
                }
            }
            key::SPACE => {
                let resp = self.session.flush();
                self.apply(&resp);
                self.surface.insert(" ");
                (Feed::PassedThrough, resp)
            }
            c if (u32::from(KEY_FIRST)..=u32::from(KEY_LAST)).contains(&c) => {
                let remapped = self.settings.remap_key(c as u8);
                let resp = self.session.handle_key(remapped);
                self.apply(&resp);
                let feed = if resp.side_effects.cancelled {
                    Feed::Cancelled
                } else if resp.consumed {
                    Feed::Handled
                } else {
                    self.surface.insert(&char::from(remapped).to_string());
                    Feed::PassedThrough
                };
                (feed, resp)
            }
            c => {
                let resp = self.session.flush();
                self.apply(&resp);
                if let Some(ch) = char::from_u32(c) {
                    self.surface.insert(&ch.to_string());
                }
                (Feed::PassedThrough, resp)
            }
        }
    }

    /// Feed every character of `keys` in order.
    pub fn feed_str(&mut self, keys: &str) -> Vec<Feed> {
        keys.chars().map(|c| self.feed(u32::from(c))).collect()
    }

    /// Apply a session response to the surface.
    pub fn apply(&mut self, resp: &KeyResponse) {
        for op in &resp.ops {
            match op {
                EditOp::Replace(text) => self.surface.replace_span(text),
                EditOp::Commit => self.surface.commit_span(),
                EditOp::DeleteBefore(n) => self.surface.delete_before(*n),
                EditOp::Insert(text) => self.surface.insert(text),
            }
        }
    }

    pub fn flush(&mut self) {
        let resp = self.session.flush();
        self.apply(&resp);
    }

    pub fn cancel(&mut self) {
        let resp = self.session.cancel();
        self.apply(&resp);
    }

    /// Move the host cursor. The live block is committed where it is first.
    pub fn set_point(&mut self, point: usize) {
        self.flush();
        self.surface.set_point(point);
    }

    /// Hanja for the live syllable, or for the character before point when
    /// nothing is composing. Capped at `hanja.max_candidates`.
    pub fn hanja_candidates<'t>(&self, table: &'t HanjaTable) -> &'t [String] {
        let target = if self.session.is_composing() {
            self.session.syllable_at_point()
        } else {
            self.surface.char_before_point()
        };
        let Some(syllable) = target else {
            return &[];
        };
        let candidates = table.lookup(syllable);
        &candidates[..candidates.len().min(self.settings.hanja.max_candidates)]
    }

    /// Replace the target syllable with candidate `choice`. Returns false
    /// when there is no such candidate; nothing changes then.
    pub fn convert_hanja(&mut self, table: &HanjaTable, choice: usize) -> bool {
        let Some(hanja) = self.hanja_candidates(table).get(choice).cloned() else {
            return false;
        };
        debug!(%hanja, composing = self.session.is_composing(), "convert hanja");
        if self.session.is_composing() {
            self.surface.replace_span(&hanja);
            self.surface.commit_span();
            self.session.clear_after_replacement();
        } else {
            self.surface.replace_before(1, &hanja);
        }
        true
    }

    pub fn session(&self) -> &CompositionSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_span_opens_at_point_and_tracks() {
        let mut buf = TextBuffer::with_text("ab");
        buf.replace_span("ㄱ");
        assert_eq!(buf.text(), "abㄱ");
        buf.replace_span("가");
        assert_eq!(buf.text(), "ab가");
        assert_eq!(buf.span_text().as_deref(), Some("가"));
        buf.commit_span();
        buf.replace_span("ㄴ");
        assert_eq!(buf.text(), "ab가ㄴ");
        assert_eq!(buf.point(), 4);
    }

    #[test]
    fn replace_span_in_middle() {
        let mut buf = TextBuffer::with_text("xy");
        buf.set_point(1);
        buf.replace_span("한");
        assert_eq!(buf.text(), "x한y");
        assert_eq!(buf.point(), 2);
    }

    #[test]
    fn delete_before_clamps() {
        let mut buf = TextBuffer::with_text("a");
        buf.delete_before(3);
        assert_eq!(buf.text(), "");
        assert_eq!(buf.point(), 0);
        assert_eq!(buf.char_before_point(), None);
    }

    #[test]
    fn replace_before_swaps_char() {
        let mut buf = TextBuffer::with_text("대한");
        buf.replace_before(1, "韓");
        assert_eq!(buf.text(), "대韓");
    }
}
