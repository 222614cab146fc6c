//! Jamo indices and their slot classes.
//!
//! A jamo is a plain `u16`: initials occupy 1..=19, vowels 101..=121 and
//! finals 1001..=1027, each in modern Hangul order. `0` marks an empty slot.

/// Numeric jamo index. `0` is the empty slot.
pub type JamoIndex = u16;

pub const EMPTY: JamoIndex = 0;

pub const INITIAL_FIRST: JamoIndex = 1;
pub const INITIAL_LAST: JamoIndex = 19;
pub const VOWEL_FIRST: JamoIndex = 101;
pub const VOWEL_LAST: JamoIndex = 121;
pub const FINAL_FIRST: JamoIndex = 1001;
pub const FINAL_LAST: JamoIndex = 1027;

/// Which queue slot a jamo index belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotClass {
    Initial,
    Vowel,
    Final,
}

impl SlotClass {
    /// Classify an index by range. Empty and out-of-range values have no class.
    pub fn of(index: JamoIndex) -> Option<SlotClass> {
        match index {
            INITIAL_FIRST..=INITIAL_LAST => Some(SlotClass::Initial),
            VOWEL_FIRST..=VOWEL_LAST => Some(SlotClass::Vowel),
            FINAL_FIRST..=FINAL_LAST => Some(SlotClass::Final),
            _ => None,
        }
    }

    pub fn contains(self, index: JamoIndex) -> bool {
        SlotClass::of(index) == Some(self)
    }

    /// Short prefix used by the layout TOML (`i:`, `v:`, `f:`).
    pub fn prefix(self) -> &'static str {
        match self {
            SlotClass::Initial => "i",
            SlotClass::Vowel => "v",
            SlotClass::Final => "f",
        }
    }

    pub(crate) fn range(self) -> std::ops::RangeInclusive<JamoIndex> {
        match self {
            SlotClass::Initial => INITIAL_FIRST..=INITIAL_LAST,
            SlotClass::Vowel => VOWEL_FIRST..=VOWEL_LAST,
            SlotClass::Final => FINAL_FIRST..=FINAL_LAST,
        }
    }
}

/// Choseong.
pub mod cho {
    use super::JamoIndex;

    pub const GIYEOK: JamoIndex = 1;
    pub const SSANGGIYEOK: JamoIndex = 2;
    pub const NIEUN: JamoIndex = 3;
    pub const DIGEUT: JamoIndex = 4;
    pub const SSANGDIGEUT: JamoIndex = 5;
    pub const RIEUL: JamoIndex = 6;
    pub const MIEUM: JamoIndex = 7;
    pub const BIEUP: JamoIndex = 8;
    pub const SSANGBIEUP: JamoIndex = 9;
    pub const SIOS: JamoIndex = 10;
    pub const SSANGSIOS: JamoIndex = 11;
    pub const IEUNG: JamoIndex = 12;
    pub const JIEUJ: JamoIndex = 13;
    pub const SSANGJIEUJ: JamoIndex = 14;
    pub const CHIEUCH: JamoIndex = 15;
    pub const KHIEUKH: JamoIndex = 16;
    pub const THIEUTH: JamoIndex = 17;
    pub const PHIEUPH: JamoIndex = 18;
    pub const HIEUH: JamoIndex = 19;
}

/// Jungseong.
pub mod jung {
    use super::JamoIndex;

    pub const A: JamoIndex = 101;
    pub const AE: JamoIndex = 102;
    pub const YA: JamoIndex = 103;
    pub const YAE: JamoIndex = 104;
    pub const EO: JamoIndex = 105;
    pub const E: JamoIndex = 106;
    pub const YEO: JamoIndex = 107;
    pub const YE: JamoIndex = 108;
    pub const O: JamoIndex = 109;
    pub const WA: JamoIndex = 110;
    pub const WAE: JamoIndex = 111;
    pub const OE: JamoIndex = 112;
    pub const YO: JamoIndex = 113;
    pub const U: JamoIndex = 114;
    pub const WEO: JamoIndex = 115;
    pub const WE: JamoIndex = 116;
    pub const WI: JamoIndex = 117;
    pub const YU: JamoIndex = 118;
    pub const EU: JamoIndex = 119;
    pub const YI: JamoIndex = 120;
    pub const I: JamoIndex = 121;
}

/// Jongseong, clusters included.
pub mod jong {
    use super::JamoIndex;

    pub const GIYEOK: JamoIndex = 1001;
    pub const SSANGGIYEOK: JamoIndex = 1002;
    pub const GIYEOK_SIOS: JamoIndex = 1003;
    pub const NIEUN: JamoIndex = 1004;
    pub const NIEUN_JIEUJ: JamoIndex = 1005;
    pub const NIEUN_HIEUH: JamoIndex = 1006;
    pub const DIGEUT: JamoIndex = 1007;
    pub const RIEUL: JamoIndex = 1008;
    pub const RIEUL_GIYEOK: JamoIndex = 1009;
    pub const RIEUL_MIEUM: JamoIndex = 1010;
    pub const RIEUL_BIEUP: JamoIndex = 1011;
    pub const RIEUL_SIOS: JamoIndex = 1012;
    pub const RIEUL_THIEUTH: JamoIndex = 1013;
    pub const RIEUL_PHIEUPH: JamoIndex = 1014;
    pub const RIEUL_HIEUH: JamoIndex = 1015;
    pub const MIEUM: JamoIndex = 1016;
    pub const BIEUP: JamoIndex = 1017;
    pub const BIEUP_SIOS: JamoIndex = 1018;
    pub const SIOS: JamoIndex = 1019;
    pub const SSANGSIOS: JamoIndex = 1020;
    pub const IEUNG: JamoIndex = 1021;
    pub const JIEUJ: JamoIndex = 1022;
    pub const CHIEUCH: JamoIndex = 1023;
    pub const KHIEUKH: JamoIndex = 1024;
    pub const THIEUTH: JamoIndex = 1025;
    pub const PHIEUPH: JamoIndex = 1026;
    pub const HIEUH: JamoIndex = 1027;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_ranges() {
        assert_eq!(SlotClass::of(0), None);
        assert_eq!(SlotClass::of(cho::GIYEOK), Some(SlotClass::Initial));
        assert_eq!(SlotClass::of(cho::HIEUH), Some(SlotClass::Initial));
        assert_eq!(SlotClass::of(20), None);
        assert_eq!(SlotClass::of(100), None);
        assert_eq!(SlotClass::of(jung::A), Some(SlotClass::Vowel));
        assert_eq!(SlotClass::of(jung::I), Some(SlotClass::Vowel));
        assert_eq!(SlotClass::of(122), None);
        assert_eq!(SlotClass::of(1000), None);
        assert_eq!(SlotClass::of(jong::GIYEOK), Some(SlotClass::Final));
        assert_eq!(SlotClass::of(jong::HIEUH), Some(SlotClass::Final));
        assert_eq!(SlotClass::of(1028), None);
    }

    #[test]
    fn contains_matches_of() {
        assert!(SlotClass::Vowel.contains(jung::EU));
        assert!(!SlotClass::Vowel.contains(jong::GIYEOK));
        assert!(SlotClass::Final.contains(jong::BIEUP_SIOS));
    }
}
