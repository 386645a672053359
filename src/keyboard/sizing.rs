// SPDX-License-Identifier: GPL-3.0-only

//! Flex layout weights for computed keys.
//!
//! Rows are laid out like a flex container: every key has a width factor
//! (its basis, in multiples of a standard key), a grow weight (share of
//! leftover space) and a shrink weight (share of missing space). The weights
//! are pure table lookups on the keyboard mode and the key's code or type.
//!
//! # Policy
//!
//! | Mode                          | Shrink                    | Grow               | Width factor |
//! |-------------------------------|---------------------------|--------------------|--------------|
//! | numeric, phone, phone2        | 1.0                       | 0.0                | 2.68         |
//! | numeric_advanced              | 1.0                       | 1.0 numeric keys   | 1.00 / 1.26 / 1.56 |
//! | everything else               | 1.5 / 0.0 / 1.0 by code   | 1.0 space only     | 1.56 functional, else 1.00 |

use crate::key::{code, KeyType, KeyboardMode, TextKeyData};
use serde::Serialize;

/// Shrink/grow/width-factor triple of a key.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FlexWeights {
    pub shrink: f64,
    pub grow: f64,
    pub width_factor: f64,
}

impl FlexWeights {
    /// Weights of a hidden key.
    pub const ZERO: FlexWeights = FlexWeights {
        shrink: 0.0,
        grow: 0.0,
        width_factor: 0.0,
    };

    /// Looks up the weights for projected key `data` in `mode`.
    pub fn for_key(mode: KeyboardMode, data: &TextKeyData) -> Self {
        Self {
            shrink: shrink(mode, data.code),
            grow: grow(mode, data),
            width_factor: width_factor(mode, data.code),
        }
    }

    /// Returns true if all three weights are zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Shrink weight by mode and code.
pub fn shrink(mode: KeyboardMode, key_code: i32) -> f64 {
    if mode.is_numeric_family() {
        return 1.0;
    }
    match key_code {
        code::SHIFT | code::DELETE => 1.5,
        code::VIEW_CHARACTERS | code::VIEW_SYMBOLS | code::VIEW_SYMBOLS2 | code::ENTER => 0.0,
        _ => 1.0,
    }
}

/// Grow weight by mode, code and key type.
pub fn grow(mode: KeyboardMode, data: &TextKeyData) -> f64 {
    match mode {
        KeyboardMode::Numeric | KeyboardMode::Phone | KeyboardMode::Phone2 => 0.0,
        KeyboardMode::NumericAdvanced => match data.key_type {
            KeyType::Numeric => 1.0,
            _ => 0.0,
        },
        _ => match data.code {
            code::SPACE => 1.0,
            _ => 0.0,
        },
    }
}

/// Width factor by mode and code.
pub fn width_factor(mode: KeyboardMode, key_code: i32) -> f64 {
    match mode {
        KeyboardMode::Numeric | KeyboardMode::Phone | KeyboardMode::Phone2 => 2.68,
        // 44 and 46 are the comma and period slots, 61 is the equals sign
        KeyboardMode::NumericAdvanced => match key_code {
            44 | 46 => 1.00,
            code::VIEW_SYMBOLS | 61 => 1.26,
            _ => 1.56,
        },
        _ => match key_code {
            code::SHIFT
            | code::DELETE
            | code::VIEW_CHARACTERS
            | code::VIEW_SYMBOLS
            | code::VIEW_SYMBOLS2
            | code::ENTER => 1.56,
            _ => 1.00,
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
