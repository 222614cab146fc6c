//! Double-jamo fusion rules.
//!
//! `fuse(class, current, incoming)` returns the value that should replace
//! `current` in its slot. An unmatched pair returns `current` unchanged, which
//! the automaton reads as "this key cannot extend the slot".
//!
//! Initial fusion can promote across classes: some initial pairs produce a
//! final cluster (ㄹ + ㄱ → ㄺ). Callers detect this by classifying the result.

use tracing::debug;

use crate::jamo::{cho, jong, jung, JamoIndex, SlotClass, EMPTY};

/// (current, incoming) → fused. Order matters.
type Rule = (JamoIndex, JamoIndex, JamoIndex);

const INITIAL_RULES: &[Rule] = &[
    // Doubling.
    (cho::GIYEOK, cho::GIYEOK, cho::SSANGGIYEOK),
    (cho::DIGEUT, cho::DIGEUT, cho::SSANGDIGEUT),
    (cho::BIEUP, cho::BIEUP, cho::SSANGBIEUP),
    (cho::SIOS, cho::SIOS, cho::SSANGSIOS),
    (cho::JIEUJ, cho::JIEUJ, cho::SSANGJIEUJ),
    // ㅇ filler, either side.
    (cho::GIYEOK, cho::IEUNG, cho::SSANGGIYEOK),
    (cho::IEUNG, cho::GIYEOK, cho::SSANGGIYEOK),
    (cho::DIGEUT, cho::IEUNG, cho::SSANGDIGEUT),
    (cho::IEUNG, cho::DIGEUT, cho::SSANGDIGEUT),
    (cho::BIEUP, cho::IEUNG, cho::SSANGBIEUP),
    (cho::IEUNG, cho::BIEUP, cho::SSANGBIEUP),
    (cho::SIOS, cho::IEUNG, cho::SSANGSIOS),
    (cho::IEUNG, cho::SIOS, cho::SSANGSIOS),
    (cho::JIEUJ, cho::IEUNG, cho::SSANGJIEUJ),
    (cho::IEUNG, cho::JIEUJ, cho::SSANGJIEUJ),
    // Aspiration with ㅎ, either side.
    (cho::GIYEOK, cho::HIEUH, cho::KHIEUKH),
    (cho::HIEUH, cho::GIYEOK, cho::KHIEUKH),
    (cho::DIGEUT, cho::HIEUH, cho::THIEUTH),
    (cho::HIEUH, cho::DIGEUT, cho::THIEUTH),
    (cho::BIEUP, cho::HIEUH, cho::PHIEUPH),
    (cho::HIEUH, cho::BIEUP, cho::PHIEUPH),
    (cho::JIEUJ, cho::HIEUH, cho::CHIEUCH),
    (cho::HIEUH, cho::JIEUJ, cho::CHIEUCH),
    // Promotion to an isolated final cluster.
    (cho::GIYEOK, cho::SIOS, jong::GIYEOK_SIOS),
    (cho::NIEUN, cho::JIEUJ, jong::NIEUN_JIEUJ),
    (cho::NIEUN, cho::HIEUH, jong::NIEUN_HIEUH),
    (cho::RIEUL, cho::GIYEOK, jong::RIEUL_GIYEOK),
    (cho::RIEUL, cho::MIEUM, jong::RIEUL_MIEUM),
    (cho::RIEUL, cho::BIEUP, jong::RIEUL_BIEUP),
    (cho::RIEUL, cho::SIOS, jong::RIEUL_SIOS),
    (cho::RIEUL, cho::THIEUTH, jong::RIEUL_THIEUTH),
    (cho::RIEUL, cho::PHIEUPH, jong::RIEUL_PHIEUPH),
    (cho::RIEUL, cho::HIEUH, jong::RIEUL_HIEUH),
    (cho::BIEUP, cho::SIOS, jong::BIEUP_SIOS),
];

const VOWEL_RULES: &[Rule] = &[
    (jung::O, jung::A, jung::WA),
    (jung::A, jung::O, jung::WA),
    (jung::O, jung::AE, jung::WAE),
    (jung::AE, jung::O, jung::WAE),
    (jung::O, jung::I, jung::OE),
    (jung::I, jung::O, jung::OE),
    (jung::U, jung::EO, jung::WEO),
    (jung::EO, jung::U, jung::WEO),
    (jung::U, jung::E, jung::WE),
    (jung::E, jung::U, jung::WE),
    (jung::U, jung::I, jung::WI),
    (jung::I, jung::U, jung::WI),
    (jung::EU, jung::I, jung::YI),
    (jung::I, jung::EU, jung::YI),
    // ㅡ as the combination pivot.
    (jung::EU, jung::A, jung::WA),
    (jung::EU, jung::AE, jung::WAE),
    (jung::EU, jung::EO, jung::WEO),
    (jung::EU, jung::E, jung::WE),
];

/// Unordered: each pair fuses the same way in both orders.
const FINAL_RULES: &[Rule] = &[
    (jong::GIYEOK, jong::GIYEOK, jong::SSANGGIYEOK),
    (jong::GIYEOK, jong::SIOS, jong::GIYEOK_SIOS),
    (jong::NIEUN, jong::JIEUJ, jong::NIEUN_JIEUJ),
    (jong::NIEUN, jong::HIEUH, jong::NIEUN_HIEUH),
    (jong::RIEUL, jong::GIYEOK, jong::RIEUL_GIYEOK),
    (jong::RIEUL, jong::MIEUM, jong::RIEUL_MIEUM),
    (jong::RIEUL, jong::BIEUP, jong::RIEUL_BIEUP),
    (jong::RIEUL, jong::SIOS, jong::RIEUL_SIOS),
    (jong::RIEUL, jong::THIEUTH, jong::RIEUL_THIEUTH),
    (jong::RIEUL, jong::PHIEUPH, jong::RIEUL_PHIEUPH),
    (jong::RIEUL, jong::HIEUH, jong::RIEUL_HIEUH),
    (jong::BIEUP, jong::SIOS, jong::BIEUP_SIOS),
    (jong::SIOS, jong::SIOS, jong::SSANGSIOS),
    (jong::GIYEOK, jong::HIEUH, jong::KHIEUKH),
    (jong::DIGEUT, jong::HIEUH, jong::THIEUTH),
    (jong::BIEUP, jong::HIEUH, jong::PHIEUPH),
    (jong::JIEUJ, jong::HIEUH, jong::CHIEUCH),
];

/// Fuse `incoming` into a slot of `class` currently holding `current`.
///
/// An empty slot takes any in-class `incoming` as is. Results outside every
/// valid range are rejected and `current` is kept.
pub fn fuse(class: SlotClass, current: JamoIndex, incoming: JamoIndex) -> JamoIndex {
    if current == EMPTY {
        return if class.contains(incoming) {
            incoming
        } else {
            EMPTY
        };
    }

    let found = match class {
        SlotClass::Initial => lookup_ordered(INITIAL_RULES, current, incoming),
        SlotClass::Vowel => lookup_ordered(VOWEL_RULES, current, incoming),
        SlotClass::Final => lookup_unordered(FINAL_RULES, current, incoming),
    };

    match found {
        Some(fused) if is_valid_result(class, fused) => {
            debug!(?class, current, incoming, fused, "fused");
            fused
        }
        _ => current,
    }
}

/// True when `fuse` would change the slot.
pub fn can_fuse(class: SlotClass, current: JamoIndex, incoming: JamoIndex) -> bool {
    fuse(class, current, incoming) != current
}

fn lookup_ordered(rules: &[Rule], current: JamoIndex, incoming: JamoIndex) -> Option<JamoIndex> {
    rules
        .iter()
        .find(|&&(a, b, _)| a == current && b == incoming)
        .map(|&(_, _, fused)| fused)
}

fn lookup_unordered(
    rules: &[Rule],
    current: JamoIndex,
    incoming: JamoIndex,
) -> Option<JamoIndex> {
    rules
        .iter()
        .find(|&&(a, b, _)| (a == current && b == incoming) || (a == incoming && b == current))
        .map(|&(_, _, fused)| fused)
}

/// Initial fusion may land in the final range; the other classes stay put.
fn is_valid_result(class: SlotClass, fused: JamoIndex) -> bool {
    match class {
        SlotClass::Initial => {
            SlotClass::Initial.contains(fused) || SlotClass::Final.contains(fused)
        }
        SlotClass::Vowel | SlotClass::Final => class.contains(fused),
    }
}
