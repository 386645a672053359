// SPDX-License-Identifier: GPL-3.0-only

//! Key code constants used by the computation engine.
//!
//! Key codes are plain `i32` values. Printable characters use their Unicode
//! scalar value (e.g. `'a'` is `97`), while functional keys use negative
//! values. Only the codes the engine needs to distinguish are named here; the
//! full symbol table belongs to the layout author.

/// Placeholder code for keys without a meaningful code.
pub const UNSPECIFIED: i32 = 0;

/// Space bar.
pub const SPACE: i32 = 32;

/// Enter / return.
pub const ENTER: i32 = 10;

/// Backspace.
pub const DELETE: i32 = -7;

/// Shift modifier.
pub const SHIFT: i32 = -11;

pub const CLIPBOARD_COPY: i32 = -31;
pub const CLIPBOARD_CUT: i32 = -32;
pub const CLIPBOARD_PASTE: i32 = -33;
pub const CLIPBOARD_SELECT_ALL: i32 = -34;

/// Switches to the character (letters) view.
pub const VIEW_CHARACTERS: i32 = -201;

/// Switches to the primary symbols view.
pub const VIEW_SYMBOLS: i32 = -202;

/// Switches to the secondary symbols view.
pub const VIEW_SYMBOLS2: i32 = -203;

/// Cycles through the enabled subtypes.
pub const LANGUAGE_SWITCH: i32 = -210;

/// Returns the character for a code if it is a printable ordinal.
///
/// Negative codes and codes that are not valid Unicode scalar values
/// return `None`.
pub fn as_char(code: i32) -> Option<char> {
    u32::try_from(code).ok().and_then(char::from_u32)
}
