// SPDX-License-Identifier: GPL-3.0-only

//! Ordering of a key's computed popups for display.
//!
//! A [`PopupCollection`] keeps accent entries and hints apart. When a popup is
//! shown, the host flattens it into [`PopupKeys`] according to the user's
//! [`KeyHintConfiguration`]: each hint may be hidden, placed before the accent
//! entries, or placed after them.

use crate::key::TextKeyData;
use crate::popup::{HintSlot, PopupCollection};
use serde::{Deserialize, Serialize};

/// Placement policy for a symbol or number hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyHintMode {
    /// The hint and its popups are not offered
    Disabled,
    /// Accent entries come first, the hint after them
    #[default]
    AccentPriority,
    /// The hint comes first, accent entries after it
    HintPriority,
    /// Hint first only when the key has no accent main entry
    SmartPriority,
}

impl KeyHintMode {
    /// Returns whether the hint goes before the accents, or `None` if disabled.
    fn hint_first(self, has_accent: bool) -> Option<bool> {
        match self {
            KeyHintMode::Disabled => None,
            KeyHintMode::AccentPriority => Some(false),
            KeyHintMode::HintPriority => Some(true),
            KeyHintMode::SmartPriority => Some(!has_accent),
        }
    }
}

/// User preferences for hint display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyHintConfiguration {
    /// Placement of the symbol hint
    pub symbol_hint_mode: KeyHintMode,
    /// Placement of the number hint
    pub number_hint_mode: KeyHintMode,
    /// Whether a hint's own popups are offered along with the key's
    pub merge_hint_popups: bool,
}

impl Default for KeyHintConfiguration {
    fn default() -> Self {
        Self {
            symbol_hint_mode: KeyHintMode::AccentPriority,
            number_hint_mode: KeyHintMode::AccentPriority,
            merge_hint_popups: true,
        }
    }
}

impl KeyHintConfiguration {
    fn mode(&self, slot: HintSlot) -> KeyHintMode {
        match slot {
            HintSlot::Symbol => self.symbol_hint_mode,
            HintSlot::Number => self.number_hint_mode,
        }
    }
}

/// Flattened, display-ready popup keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PopupKeys {
    /// Entry selected when the popup opens
    pub main: Option<TextKeyData>,
    /// Remaining entries in display order
    pub relevant: Vec<TextKeyData>,
}

impl PopupKeys {
    /// Iterates over all keys, main first.
    pub fn iter(&self) -> impl Iterator<Item = &TextKeyData> {
        self.main.iter().chain(self.relevant.iter())
    }

    /// Returns the labels of all keys, main first.
    pub fn labels(&self) -> Vec<&str> {
        self.iter().map(|d| d.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        usize::from(self.main.is_some()) + self.relevant.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_none() && self.relevant.is_empty()
    }

    fn push_unique(&mut self, data: &TextKeyData) {
        if self.iter().any(|d| d.same_key(data)) {
            return;
        }
        if self.main.is_none() {
            self.main = Some(data.clone());
        } else {
            self.relevant.push(data.clone());
        }
    }
}

impl PopupCollection {
    /// Flattens the collection into display order for `config`.
    ///
    /// Order: hints placed first, the accent main entry, hints placed last,
    /// the remaining accent entries, then (if enabled) the hints' own popups.
    pub fn popup_keys(&self, config: &KeyHintConfiguration) -> PopupKeys {
        let has_accent = self.main.is_some();
        let mut before = Vec::new();
        let mut after = Vec::new();
        let mut enabled_slots = Vec::new();

        for slot in [HintSlot::Symbol, HintSlot::Number] {
            let Some(hint) = self.hint(slot) else {
                continue;
            };
            match config.mode(slot).hint_first(has_accent) {
                Some(true) => before.push(hint),
                Some(false) => after.push(hint),
                None => continue,
            }
            enabled_slots.push(slot);
        }

        let mut keys = PopupKeys::default();
        for data in before
            .into_iter()
            .chain(self.main.iter())
            .chain(after)
            .chain(self.relevant.iter())
        {
            keys.push_unique(data);
        }

        if config.merge_hint_popups {
            for slot in enabled_slots {
                for data in self.hint_popups(slot) {
                    keys.push_unique(data);
                }
            }
        }

        keys
    }
}

// ============================================================================
// Tests
// ============================================================================
