use sebeol_core::hanja::HanjaTable;
use sebeol_core::settings::parse_settings_toml;

use super::typed_text;
use crate::types::key;
use crate::{Bridge, EditSurface, Feed, TextBuffer};

#[test]
fn types_words_into_buffer() {
    assert_eq!(typed_text("g;hrmu"), "한글");
    assert_eq!(typed_text("rk"), "ㄲ");
    assert_eq!(typed_text("rks"), "ㄲㄴ");
    assert_eq!(typed_text("k82"), "읒");
}

#[test]
fn space_flushes_and_inserts() {
    assert_eq!(typed_text("g;h r;"), "한 가");
}

#[test]
fn backspace_through_bridge() {
    assert_eq!(typed_text("r;m\u{8}"), "가");
    assert_eq!(typed_text("r;m\u{8}\u{8}\u{8}"), "");
    // Idle backspace deletes the committed character.
    assert_eq!(typed_text("r; \u{8}\u{8}"), "");
}

#[test]
fn literal_digit_after_initial() {
    assert_eq!(typed_text("r2"), "ㄱ2");
}

#[test]
fn quit_reports_cancel_and_leaves_no_text() {
    let mut bridge = Bridge::new(TextBuffer::with_text("x"));
    bridge.feed_str("r;");
    assert_eq!(bridge.surface().text(), "x가");
    assert_eq!(bridge.feed(u32::from(b'`')), Feed::Cancelled);
    assert_eq!(bridge.surface().text(), "x");
    assert!(!bridge.session().is_composing());
}

#[test]
fn feed_kinds() {
    let mut bridge = Bridge::new(TextBuffer::new());
    assert_eq!(bridge.feed(u32::from(b'r')), Feed::Handled);
    assert_eq!(bridge.feed(key::SPACE), Feed::PassedThrough);
    assert_eq!(bridge.feed(key::DELETE), Feed::PassedThrough);
    assert_eq!(bridge.surface().text(), "ㄱ");
    assert_eq!(bridge.feed(u32::from('é')), Feed::PassedThrough);
    assert_eq!(bridge.surface().text(), "ㄱé");
}

#[test]
fn remap_applies_before_layout() {
    let settings = parse_settings_toml(
        r#"
[hanja]
max_candidates = 9

[remap]
"|" = "`"
"#,
    )
    .unwrap();
    let mut bridge = Bridge::with_settings(TextBuffer::new(), settings);
    bridge.feed_str("r");
    assert_eq!(bridge.feed(u32::from(b'|')), Feed::Cancelled);
    assert_eq!(bridge.surface().text(), "");
}

#[test]
fn hanja_for_live_syllable() {
    let table = HanjaTable::global();
    let mut bridge = Bridge::new(TextBuffer::with_text("대"));
    bridge.feed_str("g;h");
    assert_eq!(bridge.hanja_candidates(table).first().map(String::as_str), Some("韓"));

    assert!(bridge.convert_hanja(table, 0));
    assert_eq!(bridge.surface().text(), "대韓");
    assert!(!bridge.session().is_composing());

    // Typing continues after the converted character.
    bridge.feed_str("r;");
    bridge.flush();
    assert_eq!(bridge.surface().text(), "대韓가");
}

#[test]
fn hanja_for_committed_character() {
    let table = HanjaTable::global();
    let mut bridge = Bridge::new(TextBuffer::with_text("학"));
    assert!(bridge.convert_hanja(table, 0));
    assert_eq!(bridge.surface().text(), "學");
}

#[test]
fn hanja_capped_and_missing() {
    let table = HanjaTable::global();
    let settings = parse_settings_toml("[hanja]\nmax_candidates = 2\n").unwrap();
    let mut bridge = Bridge::with_settings(TextBuffer::new(), settings);
    bridge.feed_str("g;h");
    assert_eq!(bridge.hanja_candidates(table).len(), 2);
    assert!(!bridge.convert_hanja(table, 2));
    assert_eq!(bridge.surface().text(), "한");

    // Partial block: nothing to convert.
    let mut bridge = Bridge::new(TextBuffer::new());
    bridge.feed_str("g");
    assert!(bridge.hanja_candidates(table).is_empty());
}

#[test]
fn surface_can_be_moved_between_blocks() {
    let mut bridge = Bridge::new(TextBuffer::with_text("ab"));
    bridge.feed_str("r;");
    bridge.flush();
    bridge.set_point(1);
    bridge.feed_str("e;");
    bridge.flush();
    assert_eq!(bridge.into_surface().text(), "a다b가");
}

#[test]
fn moving_point_commits_live_block() {
    let mut bridge = Bridge::new(TextBuffer::with_text("x"));
    bridge.feed_str("r;");
    assert!(bridge.session().is_composing());
    bridge.set_point(0);
    assert!(!bridge.session().is_composing());
    assert_eq!(bridge.surface().span_text(), None);
    assert_eq!(bridge.surface().text(), "x가");

    bridge.feed_str("h");
    assert_eq!(bridge.surface().text(), "ㅗx가");
    bridge.flush();
    assert_eq!(bridge.into_surface().text(), "ㅗx가");
}

#[test]
fn char_before_point_reads_committed_text() {
    let buf = TextBuffer::with_text("한");
    assert_eq!(buf.char_before_point(), Some('한'));
}

#[test]
fn space_commits_live_block() {
    let mut bridge = Bridge::new(TextBuffer::new());
    bridge.feed_str("r;");
    let (feed, resp) = bridge.feed_detailed(key::SPACE);
    assert_eq!(feed, Feed::PassedThrough);
    assert!(resp.commits());
    assert!(!bridge.session().is_composing());
    assert_eq!(bridge.surface().text(), "가 ");
}
