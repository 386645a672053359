// SPDX-License-Identifier: GPL-3.0-only

//! Text keys and their per-context computation.
//!
//! A [`TextKey`] pairs a static definition with the state computed for the
//! current context. [`TextKey::compute`] builds a fresh [`ComputedKeyState`]
//! and replaces the previous one wholesale, so nothing computed for an earlier
//! mode, subtype or text field can survive a context change.
//!
//! # Computation
//!
//! 1. Project the definition. No value, or a visibility veto, yields the
//!    hidden state: unspecified data, no popups, disabled, zero weights.
//! 2. In modes that resolve popups, merge the key's intrinsic popups, the
//!    key-specific extended set and the variation-resolved extended set, in
//!    that order. Character keys additionally get their symbol and number
//!    hints attached.
//! 3. Evaluate enablement and look up the flex weights.

use crate::evaluator::Evaluator;
use crate::key::{KeyData, KeyType, KeyVariation, Subtype, TextKeyData};
use crate::keyboard::sizing::FlexWeights;
use crate::popup::{HintSlot, PopupCollection, PopupMappings};
use serde::Serialize;
use std::borrow::Cow;

/// Everything computed for one key in one context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedKeyState {
    /// Projected key data, or [`TextKeyData::UNSPECIFIED`] when hidden
    pub data: TextKeyData,
    /// Resolved popups and hints
    pub popups: PopupCollection,
    pub is_enabled: bool,
    pub is_visible: bool,
    /// Flex layout weights
    pub flex: FlexWeights,
}

impl ComputedKeyState {
    /// The state of a key that is not present in the current context.
    pub fn hidden() -> Self {
        Self {
            data: TextKeyData::UNSPECIFIED,
            popups: PopupCollection::new(),
            is_enabled: false,
            is_visible: false,
            flex: FlexWeights::ZERO,
        }
    }

    /// Returns true if this is the hidden state.
    pub fn is_hidden(&self) -> bool {
        !self.is_visible
    }

    /// Computes the state of definition `data` with optional hint definitions.
    pub fn compute<E: Evaluator + ?Sized>(
        data: &KeyData,
        symbol_hint: Option<&KeyData>,
        number_hint: Option<&KeyData>,
        evaluator: &E,
    ) -> Self {
        let mode = evaluator.keyboard_mode();
        let computed = match evaluator.project(data) {
            Some(computed) if evaluator.evaluate_visible(&computed) => computed,
            _ => {
                tracing::debug!("Key '{}' hidden in {} mode", data.static_label(), mode);
                return Self::hidden();
            }
        };

        let mut popups = PopupCollection::new();
        if mode.resolves_popups() {
            resolve_popups(&mut popups, &computed, evaluator);
            if computed.key_type == KeyType::Character {
                let mappings = evaluator.popup_mappings();
                let hints = [(HintSlot::Symbol, symbol_hint), (HintSlot::Number, number_hint)];
                for (slot, hint) in hints {
                    if let Some(hint) = hint {
                        attach_hint(&mut popups, slot, hint, computed.code, mappings, evaluator);
                    }
                }
            }
        }

        Self {
            is_enabled: evaluator.evaluate_enabled(&computed),
            is_visible: true,
            flex: FlexWeights::for_key(mode, &computed),
            popups,
            data: computed,
        }
    }
}

impl Default for ComputedKeyState {
    fn default() -> Self {
        Self::hidden()
    }
}

/// Returns the label extended popups are looked up under.
///
/// Enter/left/right group keys use their symbolic token, every other key its
/// label lower-cased under the subtype's locale.
pub fn extended_label<'a>(data: &'a TextKeyData, subtype: &Subtype) -> Cow<'a, str> {
    match data.group.symbolic_label() {
        Some(token) => Cow::Borrowed(token),
        None => Cow::Owned(subtype.lowercase(&data.label)),
    }
}

fn resolve_popups<E: Evaluator + ?Sized>(
    popups: &mut PopupCollection,
    computed: &TextKeyData,
    evaluator: &E,
) {
    if let Some(intrinsic) = computed.popup.as_deref() {
        popups.merge(intrinsic, evaluator);
    }

    let mappings = evaluator.popup_mappings();
    let ext_label = extended_label(computed, evaluator.active_subtype());
    let variation_set = mappings.resolve(evaluator.key_variation(), &ext_label);
    let key_specific_set = if ext_label != computed.label {
        mappings.get(KeyVariation::All, &computed.label)
    } else {
        None
    };

    if let Some(set) = key_specific_set {
        popups.merge(set, evaluator);
    }
    if let Some(set) = variation_set {
        tracing::trace!("Extended popups for '{}' resolved", ext_label);
        popups.merge(set, evaluator);
    }
}

fn attach_hint<E: Evaluator + ?Sized>(
    popups: &mut PopupCollection,
    slot: HintSlot,
    hint: &KeyData,
    key_code: i32,
    mappings: PopupMappings<'_>,
    evaluator: &E,
) {
    if hint.static_code() == key_code {
        return;
    }
    let Some(evaluated) = evaluator.project(hint) else {
        return;
    };

    let intrinsic = evaluated.popup.clone();
    popups.set_hint(slot, evaluated);
    if let Some(intrinsic) = intrinsic.as_deref() {
        popups.merge_hint(slot, intrinsic, evaluator);
    }
    if let Some(set) = mappings.get(KeyVariation::All, hint.static_label()) {
        popups.merge_hint(slot, set, evaluator);
    }
}

/// A key of a text keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct TextKey {
    /// Static definition
    pub data: KeyData,
    /// Symbol hint assigned by the layout configuration
    pub symbol_hint: Option<KeyData>,
    /// Number hint assigned by the layout configuration
    pub number_hint: Option<KeyData>,
    computed: ComputedKeyState,
}

impl TextKey {
    /// Creates a key that has not been computed yet (hidden).
    pub fn new(data: KeyData) -> Self {
        Self {
            data,
            symbol_hint: None,
            number_hint: None,
            computed: ComputedKeyState::hidden(),
        }
    }

    pub fn with_symbol_hint(mut self, hint: KeyData) -> Self {
        self.symbol_hint = Some(hint);
        self
    }

    pub fn with_number_hint(mut self, hint: KeyData) -> Self {
        self.number_hint = Some(hint);
        self
    }

    /// Recomputes the key for the evaluator's context.
    pub fn compute<E: Evaluator + ?Sized>(&mut self, evaluator: &E) {
        self.computed = ComputedKeyState::compute(
            &self.data,
            self.symbol_hint.as_ref(),
            self.number_hint.as_ref(),
            evaluator,
        );
    }

    /// The state from the last computation.
    pub fn computed(&self) -> &ComputedKeyState {
        &self.computed
    }

    pub fn computed_data(&self) -> &TextKeyData {
        &self.computed.data
    }

    pub fn computed_popups(&self) -> &PopupCollection {
        &self.computed.popups
    }

    pub fn is_enabled(&self) -> bool {
        self.computed.is_enabled
    }

    pub fn is_visible(&self) -> bool {
        self.computed.is_visible
    }

    pub fn flex(&self) -> FlexWeights {
        self.computed.flex
    }
}

// ============================================================================
// Tests
// ============================================================================
