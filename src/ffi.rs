//! C ABI for host editors.
//!
//! A host owns one `CompositionSession` per input context through the
//! `sebeol_session_*` functions and applies the returned op lists to its
//! buffer. Every list or string handed out must be released with the
//! matching `*_free` function.

use std::ffi::{c_char, CString};
use std::ptr;

use sebeol_core::hanja::HanjaTable;
use sebeol_core::keymap::{KEY_FIRST, KEY_LAST};
use sebeol_session::{CompositionSession, EditOp, KeyResponse};

pub const SEBEOL_OP_REPLACE: u32 = 0;
pub const SEBEOL_OP_COMMIT: u32 = 1;
pub const SEBEOL_OP_DELETE_BEFORE: u32 = 2;
pub const SEBEOL_OP_INSERT: u32 = 3;

/// One edit op. `text` is null for Commit and DeleteBefore; `count` is only
/// meaningful for DeleteBefore.
#[repr(C)]
pub struct SebeolOp {
    pub kind: u32,
    pub text: *const c_char,
    pub count: u32,
}

#[repr(C)]
pub struct SebeolResponse {
    pub consumed: bool,
    pub cancelled: bool,
    pub ops: *const SebeolOp,
    pub len: u32,
    _owned: *mut OpListOwned,
}

struct OpListOwned {
    ops: Vec<SebeolOp>,
    _strings: Vec<CString>,
}

impl SebeolResponse {
    fn from_response(resp: &KeyResponse) -> Self {
        let mut strings = Vec::new();
        let mut ops = Vec::with_capacity(resp.ops.len());

        for op in &resp.ops {
            let (kind, text, count) = match op {
                EditOp::Replace(text) => (SEBEOL_OP_REPLACE, Some(text.as_str()), 0),
                EditOp::Commit => (SEBEOL_OP_COMMIT, None, 0),
                EditOp::DeleteBefore(n) => (SEBEOL_OP_DELETE_BEFORE, None, *n as u32),
                EditOp::Insert(text) => (SEBEOL_OP_INSERT, Some(text.as_str()), 0),
            };
            let text_ptr = match text.map(CString::new) {
                Some(Ok(cstr)) => {
                    let p = cstr.as_ptr();
                    strings.push(cstr);
                    p
                }
                // Layout output never contains NUL; drop the op rather than
                // hand out a truncated string.
                Some(Err(_)) => continue,
                None => ptr::null(),
            };
            ops.push(SebeolOp {
                kind,
                text: text_ptr,
                count,
            });
        }

        let mut out = Self::pack(ops, strings);
        out.consumed = resp.consumed;
        out.cancelled = resp.side_effects.cancelled;
        out
    }

    fn empty() -> Self {
        Self {
            consumed: false,
            cancelled: false,
            ops: ptr::null(),
            len: 0,
            _owned: ptr::null_mut(),
        }
    }

    fn pack(ops: Vec<SebeolOp>, strings: Vec<CString>) -> Self {
        if ops.is_empty() {
            return Self::empty();
        }

        let owned_ptr = Box::into_raw(Box::new(OpListOwned {
            ops,
            _strings: strings,
        }));

        // SAFETY: `owned_ptr` comes from `Box::into_raw` above and stays alive
        // until `sebeol_response_free`. The Vec is never mutated afterwards, so
        // its data pointer is stable; `_strings` keeps every text pointer valid.
        let ops_ptr = unsafe { (*owned_ptr).ops.as_ptr() };
        let len = unsafe { (*owned_ptr).ops.len() as u32 };

        Self {
            consumed: false,
            cancelled: false,
            ops: ops_ptr,
            len,
            _owned: owned_ptr,
        }
    }
}

#[repr(C)]
pub struct SebeolStringList {
    pub strings: *const *const c_char,
    pub len: u32,
    _owned: *mut StringListOwned,
}

struct StringListOwned {
    ptrs: Vec<*const c_char>,
    _strings: Vec<CString>,
}

impl SebeolStringList {
    fn empty() -> Self {
        Self {
            strings: ptr::null(),
            len: 0,
            _owned: ptr::null_mut(),
        }
    }

    fn from_strings(items: &[String]) -> Self {
        let strings: Vec<CString> = items
            .iter()
            .filter_map(|s| CString::new(s.as_str()).ok())
            .collect();
        if strings.is_empty() {
            return Self::empty();
        }
        let ptrs = strings.iter().map(|s| s.as_ptr()).collect();
        let owned_ptr = Box::into_raw(Box::new(StringListOwned {
            ptrs,
            _strings: strings,
        }));

        // SAFETY: same ownership scheme as `SebeolResponse::pack`.
        let strings_ptr = unsafe { (*owned_ptr).ptrs.as_ptr() };
        let len = unsafe { (*owned_ptr).ptrs.len() as u32 };

        Self {
            strings: strings_ptr,
            len,
            _owned: owned_ptr,
        }
    }
}

#[no_mangle]
pub extern "C" fn sebeol_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

// --- Session FFI ---

#[no_mangle]
pub extern "C" fn sebeol_session_new() -> *mut CompositionSession {
    Box::into_raw(Box::new(CompositionSession::new()))
}

#[no_mangle]
pub extern "C" fn sebeol_session_free(session: *mut CompositionSession) {
    if !session.is_null() {
        unsafe {
            drop(Box::from_raw(session));
        }
    }
}

/// Feed one key code. Codes outside the printable layout range come back
/// not consumed; the host should handle them itself (after a flush).
#[no_mangle]
pub extern "C" fn sebeol_session_handle_key(
    session: *mut CompositionSession,
    key: u32,
) -> SebeolResponse {
    if session.is_null() {
        return SebeolResponse::empty();
    }
    let session = unsafe { &mut *session };
    if !(u32::from(KEY_FIRST)..=u32::from(KEY_LAST)).contains(&key) {
        return SebeolResponse::empty();
    }
    SebeolResponse::from_response(&session.handle_key(key as u8))
}

#[no_mangle]
pub extern "C" fn sebeol_session_backspace(session: *mut CompositionSession) -> SebeolResponse {
    if session.is_null() {
        return SebeolResponse::empty();
    }
    let session = unsafe { &mut *session };
    SebeolResponse::from_response(&session.backspace())
}

#[no_mangle]
pub extern "C" fn sebeol_session_flush(session: *mut CompositionSession) -> SebeolResponse {
    if session.is_null() {
        return SebeolResponse::empty();
    }
    let session = unsafe { &mut *session };
    SebeolResponse::from_response(&session.flush())
}

#[no_mangle]
pub extern "C" fn sebeol_session_cancel(session: *mut CompositionSession) -> SebeolResponse {
    if session.is_null() {
        return SebeolResponse::empty();
    }
    let session = unsafe { &mut *session };
    SebeolResponse::from_response(&session.cancel())
}

/// Precomposed syllable of the live block as a codepoint, or 0.
#[no_mangle]
pub extern "C" fn sebeol_session_syllable_at_point(session: *const CompositionSession) -> u32 {
    if session.is_null() {
        return 0;
    }
    let session = unsafe { &*session };
    session.syllable_at_point().map_or(0, u32::from)
}

#[no_mangle]
pub extern "C" fn sebeol_session_clear_after_replacement(session: *mut CompositionSession) {
    if !session.is_null() {
        let session = unsafe { &mut *session };
        session.clear_after_replacement();
    }
}

#[no_mangle]
pub extern "C" fn sebeol_response_free(resp: SebeolResponse) {
    if !resp._owned.is_null() {
        unsafe {
            drop(Box::from_raw(resp._owned));
        }
    }
}

// --- Hanja FFI ---

/// Hanja candidates for a syllable codepoint from the global table.
#[no_mangle]
pub extern "C" fn sebeol_hanja_lookup(syllable: u32) -> SebeolStringList {
    let Some(ch) = char::from_u32(syllable) else {
        return SebeolStringList::empty();
    };
    SebeolStringList::from_strings(HanjaTable::global().lookup(ch))
}

#[no_mangle]
pub extern "C" fn sebeol_string_list_free(list: SebeolStringList) {
    if !list._owned.is_null() {
        unsafe {
            drop(Box::from_raw(list._owned));
        }
    }
}
