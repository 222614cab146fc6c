//! Alternation mode and the shortcut keys.

use sebeol_core::jamo::{cho, jong, jung};
use sebeol_core::keymap::GalmaMode;

use super::{preedit_after, type_keys};
use crate::types::{EditOp, Queue};
use crate::CompositionSession;

#[test]
fn galma_key_gives_vowel_then_final() {
    let mut session = CompositionSession::new();
    session.handle_key(b'r');
    assert_eq!(session.mode(), GalmaMode::Vowel);
    session.handle_key(b'm');
    assert_eq!(session.queue().jung, jung::EU);
    assert_eq!(session.mode(), GalmaMode::Consonant);
    session.handle_key(b'm');
    assert_eq!(session.queue().jong, jong::GIYEOK);
    assert_eq!(session.preedit(), "극");
}

#[test]
fn eu_shortcut_then_jieuj_final() {
    let mut session = CompositionSession::new();
    session.handle_key(b'k');
    let resp = session.handle_key(b'8');
    assert_eq!(resp.preedit(), Some("으"));
    assert_eq!(session.mode(), GalmaMode::Consonant);

    let resp = session.handle_key(b'2');
    assert_eq!(resp.ops, vec![EditOp::Replace("읒".into())]);
    assert_eq!(
        session.queue(),
        Queue {
            cho: cho::IEUNG,
            jung: jung::EU,
            jong: jong::JIEUJ,
        }
    );
}

#[test]
fn diphthong_shortcuts() {
    assert_eq!(preedit_after("r7"), "과");
    assert_eq!(preedit_after("r9"), "궈");
    assert_eq!(preedit_after("r0"), "귀");

    let mut session = CompositionSession::new();
    type_keys(&mut session, "r9");
    assert_eq!(session.mode(), GalmaMode::Consonant);
}

#[test]
fn final_shortcuts() {
    assert_eq!(preedit_after("e;3"), "닫");
    assert_eq!(preedit_after("a;4"), "맡");
}

#[test]
fn final_shortcut_completes_cluster() {
    let mut session = CompositionSession::new();
    type_keys(&mut session, "k;h");
    assert_eq!(session.preedit(), "안");
    let resp = session.handle_key(b'2');
    assert_eq!(resp.ops, vec![EditOp::Replace("앉".into())]);
    assert_eq!(session.queue().jong, jong::NIEUN_JIEUJ);
    assert_eq!(session.mode(), GalmaMode::Consonant);

    assert_eq!(preedit_after("kjh2"), "얹");
}

#[test]
fn shortcut_guard_failure_falls_through_to_literal() {
    // No nucleus yet: '2' is just a digit.
    let mut session = CompositionSession::new();
    session.handle_key(b'r');
    let resp = session.handle_key(b'2');
    assert_eq!(
        resp.ops,
        vec![EditOp::Commit, EditOp::Insert("2".into())]
    );

    // Empty queue: '8' inserts itself.
    let mut session = CompositionSession::new();
    let resp = session.handle_key(b'8');
    assert_eq!(resp.ops, vec![EditOp::Insert("8".into())]);

    // Final already set and ㄱ+ㄷ does not fuse: '3' closes the block.
    let mut session = CompositionSession::new();
    type_keys(&mut session, "r;m");
    let resp = session.handle_key(b'3');
    assert_eq!(
        resp.ops,
        vec![EditOp::Commit, EditOp::Insert("3".into())]
    );
}

#[test]
fn pivot_enters_bcombination() {
    let mut session = CompositionSession::new();
    type_keys(&mut session, "r/");
    assert_eq!(session.mode(), GalmaMode::BCombination);
    assert_eq!(session.preedit(), "그");
}

#[test]
fn pivot_from_lone_vowel() {
    let mut session = CompositionSession::new();
    session.handle_key(b'h');
    assert_eq!(session.queue(), Queue { cho: 0, jung: jung::O, jong: 0 });
    let resp = session.handle_key(b'/');
    assert_eq!(resp.ops, vec![EditOp::Replace("ㅡ".into())]);
    assert_eq!(session.queue().jung, jung::EU);
    assert_eq!(session.mode(), GalmaMode::BCombination);

    assert_eq!(preedit_after("h/j"), "ㅝ");
}

#[test]
fn bcombination_pivot_partners() {
    assert_eq!(preedit_after("r/j"), "궈");
    assert_eq!(preedit_after("r/;"), "과");
    assert_eq!(preedit_after("r/o"), "괘");
    assert_eq!(preedit_after("r/p"), "궤");
    assert_eq!(preedit_after("r/l"), "긔");
}

#[test]
fn bcombination_other_keys_give_finals() {
    assert_eq!(preedit_after("r/m"), "극");
    assert_eq!(preedit_after("r/u"), "글");

    // Final shortcuts stay live outside Vowel mode.
    assert_eq!(preedit_after("r/2"), "긎");
}

#[test]
fn mode_settles_after_pivot_vowel() {
    let mut session = CompositionSession::new();
    type_keys(&mut session, "r/j");
    assert_eq!(session.mode(), GalmaMode::Consonant);
    // Consonant mode: 'j' is now final ㅇ.
    session.handle_key(b'j');
    assert_eq!(session.preedit(), "궝");
}

#[test]
fn commit_resets_mode() {
    let mut session = CompositionSession::new();
    type_keys(&mut session, "r;");
    assert_eq!(session.mode(), GalmaMode::Consonant);
    session.handle_key(b'e');
    assert_eq!(session.mode(), GalmaMode::Vowel);
    session.handle_key(b';');
    assert_eq!(session.preedit(), "다");
}
