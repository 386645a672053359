// SPDX-License-Identifier: GPL-3.0-only

//! Popup sets and the computed popup collection owned by each key.

use crate::evaluator::Evaluator;
use crate::key::{KeyData, TextKeyData};
use serde::{Deserialize, Serialize};

/// A static set of popup entries.
///
/// `main` is the preferred alternate (shown first / selected by default on
/// long press), `relevant` holds the remaining alternates in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PopupSet<T> {
    /// Preferred alternate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<T>,

    /// Remaining alternates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relevant: Vec<T>,
}

impl<T> PopupSet<T> {
    /// Creates a popup set from a main entry and the remaining entries.
    pub fn new(main: Option<T>, relevant: Vec<T>) -> Self {
        Self { main, relevant }
    }

    /// Creates a popup set without a main entry.
    pub fn relevant(relevant: Vec<T>) -> Self {
        Self {
            main: None,
            relevant,
        }
    }

    /// Iterates over all entries, main first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.main.iter().chain(self.relevant.iter())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        usize::from(self.main.is_some()) + self.relevant.len()
    }

    /// Returns true if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.main.is_none() && self.relevant.is_empty()
    }
}

impl<T> Default for PopupSet<T> {
    fn default() -> Self {
        Self {
            main: None,
            relevant: Vec::new(),
        }
    }
}

/// Named hint slot of a [`PopupCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintSlot {
    /// Secondary symbol glyph
    Symbol,
    /// Secondary digit glyph
    Number,
}

/// The computed popups of a key.
///
/// Built from scratch on every computation. Entries are projected key data
/// and appear at most once (by code and label). The two hint slots hold at
/// most one hint each, with the hint's own popups kept alongside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PopupCollection {
    pub main: Option<TextKeyData>,
    pub relevant: Vec<TextKeyData>,
    pub symbol_hint: Option<TextKeyData>,
    pub number_hint: Option<TextKeyData>,
    pub symbol_popups: Vec<TextKeyData>,
    pub number_popups: Vec<TextKeyData>,
}

impl PopupCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all entries and hints.
    pub fn clear(&mut self) {
        self.main = None;
        self.relevant.clear();
        self.symbol_hint = None;
        self.number_hint = None;
        self.symbol_popups.clear();
        self.number_popups.clear();
    }

    /// Returns true if there are no entries and no hints.
    pub fn is_empty(&self) -> bool {
        self.main.is_none()
            && self.relevant.is_empty()
            && self.symbol_hint.is_none()
            && self.number_hint.is_none()
            && self.symbol_popups.is_empty()
            && self.number_popups.is_empty()
    }

    /// Iterates over the accent entries, main first.
    pub fn entries(&self) -> impl Iterator<Item = &TextKeyData> {
        self.main.iter().chain(self.relevant.iter())
    }

    /// Returns true if an equal entry is already among the accent entries.
    pub fn contains(&self, data: &TextKeyData) -> bool {
        self.entries().any(|entry| entry.same_key(data))
    }

    /// Merges a static popup set into the accent entries.
    ///
    /// Each entry is projected through `evaluator`; entries without a value in
    /// the current context are dropped, entries already present are skipped.
    /// The other set's main entry fills the main slot if it is still empty and
    /// is appended to the relevant entries otherwise.
    pub fn merge<E: Evaluator + ?Sized>(&mut self, other: &PopupSet<KeyData>, evaluator: &E) {
        if let Some(main) = other.main.as_ref().and_then(|d| evaluator.project(d)) {
            if !self.contains(&main) {
                if self.main.is_none() {
                    self.main = Some(main);
                } else {
                    self.relevant.push(main);
                }
            }
        }

        for data in other.relevant.iter().filter_map(|d| evaluator.project(d)) {
            if self.contains(&data) {
                tracing::trace!("Skipping duplicate popup entry '{}'", data.label);
                continue;
            }
            self.relevant.push(data);
        }
    }

    /// Returns the hint in `slot`.
    pub fn hint(&self, slot: HintSlot) -> Option<&TextKeyData> {
        match slot {
            HintSlot::Symbol => self.symbol_hint.as_ref(),
            HintSlot::Number => self.number_hint.as_ref(),
        }
    }

    /// Places `data` in the hint slot, replacing any previous hint.
    pub fn set_hint(&mut self, slot: HintSlot, data: TextKeyData) {
        match slot {
            HintSlot::Symbol => self.symbol_hint = Some(data),
            HintSlot::Number => self.number_hint = Some(data),
        }
    }

    /// Returns the popups attached to the hint in `slot`.
    pub fn hint_popups(&self, slot: HintSlot) -> &[TextKeyData] {
        match slot {
            HintSlot::Symbol => &self.symbol_popups,
            HintSlot::Number => &self.number_popups,
        }
    }

    /// Merges a static popup set into the popups of a hint slot.
    ///
    /// Projection and de-duplication follow [`PopupCollection::merge`]; the
    /// hint itself is never repeated among its own popups.
    pub fn merge_hint<E: Evaluator + ?Sized>(
        &mut self,
        slot: HintSlot,
        other: &PopupSet<KeyData>,
        evaluator: &E,
    ) {
        let (hint, popups) = match slot {
            HintSlot::Symbol => (&self.symbol_hint, &mut self.symbol_popups),
            HintSlot::Number => (&self.number_hint, &mut self.number_popups),
        };

        for data in other.iter().filter_map(|d| evaluator.project(d)) {
            let is_hint = hint.as_ref().is_some_and(|h| h.same_key(&data));
            if is_hint || popups.iter().any(|p| p.same_key(&data)) {
                continue;
            }
            popups.push(data);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
