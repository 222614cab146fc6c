//! Static tables and pure functions behind sebeolsik composition.
//!
//! Nothing in this crate holds per-session state: the key layout, the hanja
//! table and the settings are immutable singletons, and the encoder and the
//! fusion resolver are pure functions over jamo indices.

pub mod encoder;
pub mod fusion;
pub mod hanja;
pub mod jamo;
pub mod keymap;
pub mod settings;

pub use encoder::encode;
pub use fusion::fuse;
pub use jamo::{JamoIndex, SlotClass};
pub use keymap::{GalmaMode, KeyTable, Symbol};
