// SPDX-License-Identifier: GPL-3.0-only

//! Extended popup mappings.
//!
//! A [`PopupMapping`] maps a text field variation and a label to a popup set.
//! Two mappings take part in every lookup: the one shipped with the active
//! subtype and the locale default. [`PopupMappings`] bundles both and performs
//! the per-subtype-then-default fallback in a single place.
//!
//! # JSON Format
//!
//! ```json
//! {
//!     "all": {
//!         "e": { "relevant": [ { "$": "text_key", "code": 235, "label": "ë" } ] },
//!         "~enter": { "main": { "$": "text_key", "code": -212, "label": "emoji" } }
//!     },
//!     "password": { ... }
//! }
//! ```

use crate::key::{KeyData, KeyVariation};
use crate::popup::PopupSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Variation → label → popup set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PopupMapping {
    sets: HashMap<KeyVariation, HashMap<String, PopupSet<KeyData>>>,
}

impl PopupMapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the popup set for `label` under `variation`.
    pub fn insert(&mut self, variation: KeyVariation, label: impl Into<String>, set: PopupSet<KeyData>) {
        self.sets
            .entry(variation)
            .or_default()
            .insert(label.into(), set);
    }

    /// Builder-style variant of [`PopupMapping::insert`].
    pub fn with(mut self, variation: KeyVariation, label: impl Into<String>, set: PopupSet<KeyData>) -> Self {
        self.insert(variation, label, set);
        self
    }

    /// Returns the popup set for `label` under exactly `variation`.
    pub fn get(&self, variation: KeyVariation, label: &str) -> Option<&PopupSet<KeyData>> {
        self.sets.get(&variation)?.get(label)
    }

    /// Iterates over all `(variation, label, set)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (KeyVariation, &str, &PopupSet<KeyData>)> {
        self.sets.iter().flat_map(|(variation, labels)| {
            labels
                .iter()
                .map(move |(label, set)| (*variation, label.as_str(), set))
        })
    }

    /// Returns the total number of labelled sets.
    pub fn len(&self) -> usize {
        self.sets.values().map(HashMap::len).sum()
    }

    /// Returns true if the mapping holds no sets.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only view over the per-subtype and default mappings.
///
/// Either mapping may be absent; a missing mapping simply never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopupMappings<'a> {
    subtype: Option<&'a PopupMapping>,
    default: Option<&'a PopupMapping>,
}

impl<'a> PopupMappings<'a> {
    /// Bundles the per-subtype mapping with the default mapping.
    pub fn new(subtype: Option<&'a PopupMapping>, default: Option<&'a PopupMapping>) -> Self {
        Self { subtype, default }
    }

    /// Looks up `label` under exactly `variation`, per-subtype mapping first.
    pub fn get(&self, variation: KeyVariation, label: &str) -> Option<&'a PopupSet<KeyData>> {
        let found = self
            .subtype
            .and_then(|m| m.get(variation, label))
            .or_else(|| self.default.and_then(|m| m.get(variation, label)));
        tracing::trace!(
            "Popup lookup {}/'{}': {}",
            variation,
            label,
            if found.is_some() { "hit" } else { "miss" }
        );
        found
    }

    /// Resolves the most specific popup set for `label` in a `variation` context.
    ///
    /// Walks [`KeyVariation::popup_lookup_order`], trying both mappings at each
    /// step before moving on; the first match wins.
    pub fn resolve(&self, variation: KeyVariation, label: &str) -> Option<&'a PopupSet<KeyData>> {
        variation
            .popup_lookup_order()
            .iter()
            .find_map(|step| self.get(*step, label))
    }
}

// ============================================================================
// Tests
// ============================================================================
