// SPDX-License-Identifier: GPL-3.0-only

//! Long-press popups: static sets, extended mappings and computed collections.
//!
//! # Overview
//!
//! - [`PopupSet`]: a static main entry plus relevant entries, attached to a key
//!   definition or stored in a mapping.
//! - [`PopupMapping`] / [`PopupMappings`]: extended popups keyed by text field
//!   variation and label, with per-subtype → default fallback.
//! - [`PopupCollection`]: the de-duplicated popups computed for one key,
//!   including its symbol and number hint slots.
//! - [`PopupKeys`]: the collection flattened for display under a
//!   [`KeyHintConfiguration`].

pub mod keys;
pub mod mapping;
pub mod set;

pub use keys::{KeyHintConfiguration, KeyHintMode, PopupKeys};
pub use mapping::{PopupMapping, PopupMappings};
pub use set::{HintSlot, PopupCollection, PopupSet};
