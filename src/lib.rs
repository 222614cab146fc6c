// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
mod trace_init;

pub use sebeol_core::{encode, fuse, GalmaMode, JamoIndex, KeyTable, SlotClass, Symbol};
pub use sebeol_core::{encoder, fusion, hanja, jamo, keymap, settings};
pub use sebeol_session::{
    bridge, key, Bridge, CompositionSession, EditOp, EditSurface, Feed, KeyResponse, Queue,
    SideEffects, TextBuffer,
};
pub use trace_init::init_tracing;
