//! Jamo triple → display text.
//!
//! Two pure encodings, selected by [`is_syllable`]:
//! - a full or partial block (initial + vowel, optional final) becomes one
//!   precomposed syllable from the U+AC00 block;
//! - a single isolated jamo becomes its compatibility jamo from U+3131..U+3163.
//!
//! Every other combination renders as the empty string.

use crate::jamo::{JamoIndex, SlotClass, EMPTY};

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const COMPAT_BASE: u32 = 0x3130;

/// Syllables per initial (21 vowels × 28 final alternatives).
const PER_INITIAL: u32 = 588;
/// Final alternatives per vowel, including "no final".
const PER_VOWEL: u32 = 28;

/// True when the triple is complete enough for a precomposed syllable.
pub fn is_syllable(initial: JamoIndex, vowel: JamoIndex, final_: JamoIndex) -> bool {
    SlotClass::Initial.contains(initial)
        && SlotClass::Vowel.contains(vowel)
        && (final_ == EMPTY || SlotClass::Final.contains(final_))
}

/// Precomposed syllable for an initial + vowel (+ final) block.
pub fn compose_syllable(initial: JamoIndex, vowel: JamoIndex, final_: JamoIndex) -> Option<char> {
    if !is_syllable(initial, vowel, final_) {
        return None;
    }
    let trailing = if final_ == EMPTY {
        0
    } else {
        u32::from(final_ - 1000)
    };
    let code = SYLLABLE_BASE
        + PER_INITIAL * u32::from(initial - 1)
        + PER_VOWEL * u32::from(vowel - 101)
        + trailing;
    char::from_u32(code)
}

/// Compatibility jamo for a single index.
///
/// The compatibility block interleaves initials, clusters and vowels, so each
/// class needs its own offset bands.
pub fn compat_jamo(index: JamoIndex) -> Option<char> {
    let offset = match SlotClass::of(index)? {
        SlotClass::Initial => match index {
            1..=2 => index,
            3 => index + 1,
            4..=6 => index + 3,
            7..=9 => index + 10,
            _ => index + 11,
        },
        SlotClass::Vowel => index - 100 + 0x1E,
        SlotClass::Final => {
            let t = index - 1000;
            match index {
                1001..=1007 => t,
                1008..=1017 => t + 1,
                1018..=1022 => t + 2,
                _ => t + 3,
            }
        }
    };
    char::from_u32(COMPAT_BASE + u32::from(offset))
}

/// Reverse of [`compat_jamo`] within one class.
pub fn index_of_compat(class: SlotClass, ch: char) -> Option<JamoIndex> {
    class.range().find(|&i| compat_jamo(i) == Some(ch))
}

/// Render a queue triple.
pub fn encode(initial: JamoIndex, vowel: JamoIndex, final_: JamoIndex) -> String {
    if let Some(c) = compose_syllable(initial, vowel, final_) {
        return c.to_string();
    }
    let single = match (initial, vowel, final_) {
        (i, EMPTY, EMPTY) if SlotClass::Initial.contains(i) => compat_jamo(i),
        (EMPTY, v, EMPTY) if SlotClass::Vowel.contains(v) => compat_jamo(v),
        (EMPTY, EMPTY, f) if SlotClass::Final.contains(f) => compat_jamo(f),
        _ => None,
    };
    single.map(String::from).unwrap_or_default()
}

/// Split a rendered glyph back into its triple.
///
/// Precomposed syllables decompose arithmetically; compatibility jamo are
/// looked up as initial first, then vowel, then final, so a glyph shared by
/// initial and final (e.g. ㄱ) comes back as the initial.
pub fn decompose(ch: char) -> Option<(JamoIndex, JamoIndex, JamoIndex)> {
    let code = ch as u32;
    if (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
        let s = code - SYLLABLE_BASE;
        let initial = (s / PER_INITIAL) as JamoIndex + 1;
        let vowel = ((s % PER_INITIAL) / PER_VOWEL) as JamoIndex + 101;
        let t = (s % PER_VOWEL) as JamoIndex;
        let final_ = if t == 0 { EMPTY } else { t + 1000 };
        return Some((initial, vowel, final_));
    }
    if let Some(i) = index_of_compat(SlotClass::Initial, ch) {
        return Some((i, EMPTY, EMPTY));
    }
    if let Some(v) = index_of_compat(SlotClass::Vowel, ch) {
        return Some((EMPTY, v, EMPTY));
    }
    index_of_compat(SlotClass::Final, ch).map(|f| (EMPTY, EMPTY, f))
}
