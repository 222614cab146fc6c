//! Galma shortcut keys.
//!
//! The three-row layout has too few keys for every jamo, so a handful of
//! keys inject a fixed vowel or final when the queue is in a specific shape.
//! The table is ordered and checked before ordinary key resolution; a key
//! whose guard fails, or whose injected final cannot join the slot, falls
//! through to the layout.

use sebeol_core::jamo::{jong, jung, JamoIndex};
use sebeol_core::keymap::GalmaMode;

use super::types::Queue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Guard {
    /// The queue holds only an initial.
    InitialOnly,
    /// The queue holds only a vowel.
    VowelOnly,
    /// Mode is not `Vowel`, initial and vowel are set.
    Nucleus,
}

impl Guard {
    fn admits(self, queue: &Queue, mode: GalmaMode) -> bool {
        match self {
            Guard::InitialOnly => queue.is_initial_only(),
            Guard::VowelOnly => queue.is_vowel_only(),
            Guard::Nucleus => mode != GalmaMode::Vowel && queue.has_nucleus()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inject {
    /// Fill the vowel slot and force the mode.
    Vowel(JamoIndex, GalmaMode),
    /// Fill the final slot, or fuse into the final already there.
    Final(JamoIndex),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Shortcut {
    pub(crate) key: u8,
    pub(crate) guard: Guard,
    pub(crate) inject: Inject,
}

pub(crate) const SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        key: b'8',
        guard: Guard::InitialOnly,
        inject: Inject::Vowel(jung::EU, GalmaMode::Consonant),
    },
    Shortcut {
        key: b'9',
        guard: Guard::InitialOnly,
        inject: Inject::Vowel(jung::WEO, GalmaMode::Consonant),
    },
    Shortcut {
        key: b'0',
        guard: Guard::InitialOnly,
        inject: Inject::Vowel(jung::WI, GalmaMode::Consonant),
    },
    Shortcut {
        key: b'7',
        guard: Guard::InitialOnly,
        inject: Inject::Vowel(jung::WA, GalmaMode::Consonant),
    },
    Shortcut {
        key: b'/',
        guard: Guard::VowelOnly,
        inject: Inject::Vowel(jung::EU, GalmaMode::BCombination),
    },
    Shortcut {
        key: b'/',
        guard: Guard::InitialOnly,
        inject: Inject::Vowel(jung::EU, GalmaMode::BCombination),
    },
    Shortcut {
        key: b'2',
        guard: Guard::Nucleus,
        inject: Inject::Final(jong::JIEUJ),
    },
    Shortcut {
        key: b'3',
        guard: Guard::Nucleus,
        inject: Inject::Final(jong::DIGEUT),
    },
    Shortcut {
        key: b'4',
        guard: Guard::Nucleus,
        inject: Inject::Final(jong::THIEUTH),
    },
];

/// Shortcuts for `key` whose guard admits the current state, in table order.
pub(crate) fn matching(
    key: u8,
    queue: Queue,
    mode: GalmaMode,
) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS
        .iter()
        .filter(move |s| s.key == key && s.guard.admits(&queue, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sebeol_core::jamo::cho;

    fn queue(cho: JamoIndex, jung: JamoIndex, jong: JamoIndex) -> Queue {
        Queue { cho, jung, jong }
    }

    fn find(key: u8, queue: &Queue, mode: GalmaMode) -> Option<&'static Shortcut> {
        matching(key, *queue, mode).next()
    }

    #[test]
    fn vowel_shortcuts_need_initial_only() {
        let q = queue(cho::IEUNG, 0, 0);
        let s = find(b'8', &q, GalmaMode::Vowel).unwrap();
        assert_eq!(s.inject, Inject::Vowel(jung::EU, GalmaMode::Consonant));

        assert!(find(b'8', &Queue::default(), GalmaMode::Vowel).is_none());
        assert!(find(b'8', &queue(cho::IEUNG, jung::A, 0), GalmaMode::Consonant).is_none());
        assert!(find(b'8', &queue(0, 0, jong::GIYEOK), GalmaMode::Vowel).is_none());
    }

    #[test]
    fn pivot_sets_bcombination() {
        let s = find(b'/', &queue(cho::GIYEOK, 0, 0), GalmaMode::Vowel).unwrap();
        assert_eq!(s.guard, Guard::InitialOnly);
        assert_eq!(s.inject, Inject::Vowel(jung::EU, GalmaMode::BCombination));

        let s = find(b'/', &queue(0, jung::O, 0), GalmaMode::Vowel).unwrap();
        assert_eq!(s.guard, Guard::VowelOnly);
        assert_eq!(s.inject, Inject::Vowel(jung::EU, GalmaMode::BCombination));

        assert!(find(b'/', &queue(cho::GIYEOK, jung::O, 0), GalmaMode::Consonant).is_none());
        assert!(find(b'/', &queue(0, jung::O, jong::NIEUN), GalmaMode::Vowel).is_none());
    }

    #[test]
    fn final_shortcuts_need_nucleus_outside_vowel_mode() {
        let open = queue(cho::IEUNG, jung::EU, 0);
        assert_eq!(
            find(b'2', &open, GalmaMode::Consonant).map(|s| s.inject),
            Some(Inject::Final(jong::JIEUJ))
        );
        assert_eq!(
            find(b'4', &open, GalmaMode::BCombination).map(|s| s.inject),
            Some(Inject::Final(jong::THIEUTH))
        );
        assert!(find(b'2', &open, GalmaMode::Vowel).is_none());
        // A final already present still admits; fusion decides later.
        assert!(find(b'2', &queue(cho::IEUNG, jung::A, jong::NIEUN), GalmaMode::Consonant)
            .is_some());
        assert!(find(b'3', &queue(cho::IEUNG, 0, 0), GalmaMode::Consonant).is_none());
    }

    #[test]
    fn unlisted_key_has_no_shortcut() {
        assert!(find(b'r', &queue(cho::GIYEOK, 0, 0), GalmaMode::Vowel).is_none());
    }
}
