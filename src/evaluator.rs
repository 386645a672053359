// SPDX-License-Identifier: GPL-3.0-only

//! The context capability consumed by key computation.
//!
//! Key computation never reads global state. Everything it needs to know about
//! the current keyboard (mode, subtype, text field variation, shift state,
//! popup mappings and the enablement/visibility rules) is supplied through the
//! [`Evaluator`] trait at call time.
//!
//! [`KeyboardContext`] is a plain-data implementation suitable for hosts that
//! track editor state themselves, and for tests.

use crate::key::{code, KeyData, KeyType, KeyVariation, KeyboardMode, ShiftState, Subtype, TextKeyData};
use crate::popup::{PopupMapping, PopupMappings};

/// Read-only view of the keyboard context a key is computed against.
pub trait Evaluator {
    /// Active layout family.
    fn keyboard_mode(&self) -> KeyboardMode;

    /// Active subtype; its locale drives case mapping.
    fn active_subtype(&self) -> &Subtype;

    /// Variation of the focused text field.
    fn key_variation(&self) -> KeyVariation;

    /// Current shift / caps state.
    fn shift_state(&self) -> ShiftState;

    /// Whether the layout is laid out right-to-left.
    fn is_rtl(&self) -> bool {
        false
    }

    /// Whether auto text key `data` should be shown upper-cased.
    fn evaluate_caps(&self, data: &TextKeyData) -> bool {
        self.shift_state().is_caps() && data.key_type == KeyType::Character
    }

    /// Whether projected key `data` accepts input.
    fn evaluate_enabled(&self, data: &TextKeyData) -> bool;

    /// Whether projected key `data` is shown at all.
    fn evaluate_visible(&self, data: &TextKeyData) -> bool;

    /// Extended popup mapping of the active subtype.
    fn popup_mapping(&self) -> Option<&PopupMapping>;

    /// Locale default extended popup mapping.
    fn popup_mapping_default(&self) -> Option<&PopupMapping>;

    /// Projects a static definition onto this context.
    fn project(&self, data: &KeyData) -> Option<TextKeyData> {
        data.compute_text_key_data(self)
    }

    /// Both popup mappings bundled for lookup with fallback.
    fn popup_mappings(&self) -> PopupMappings<'_> {
        PopupMappings::new(self.popup_mapping(), self.popup_mapping_default())
    }
}

/// Plain-data evaluator.
///
/// Visibility and enablement follow the editor facts it carries:
///
/// - `LANGUAGE_SWITCH` is hidden unless more than one subtype is enabled.
/// - `CLIPBOARD_COPY` / `CLIPBOARD_CUT` need a selection.
/// - `CLIPBOARD_PASTE` needs clipboard data.
/// - `CLIPBOARD_SELECT_ALL` needs text in the field.
#[derive(Debug, Clone, Default)]
pub struct KeyboardContext {
    pub mode: KeyboardMode,
    pub variation: KeyVariation,
    pub subtype: Subtype,
    pub shift_state: ShiftState,
    pub rtl: bool,
    pub popup_mapping: Option<PopupMapping>,
    pub popup_mapping_default: Option<PopupMapping>,
    /// Number of enabled subtypes
    pub subtype_count: usize,
    pub has_selection: bool,
    pub has_clipboard_data: bool,
    pub has_text: bool,
}

impl KeyboardContext {
    /// Creates a context for `mode` with everything else at defaults.
    pub fn new(mode: KeyboardMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Sets the text field variation.
    pub fn with_variation(mut self, variation: KeyVariation) -> Self {
        self.variation = variation;
        self
    }

    /// Sets the active subtype.
    pub fn with_subtype(mut self, subtype: Subtype) -> Self {
        self.subtype = subtype;
        self
    }

    /// Sets the per-subtype and default popup mappings.
    pub fn with_popup_mappings(
        mut self,
        subtype: Option<PopupMapping>,
        default: Option<PopupMapping>,
    ) -> Self {
        self.popup_mapping = subtype;
        self.popup_mapping_default = default;
        self
    }
}

impl Evaluator for KeyboardContext {
    fn keyboard_mode(&self) -> KeyboardMode {
        self.mode
    }

    fn active_subtype(&self) -> &Subtype {
        &self.subtype
    }

    fn key_variation(&self) -> KeyVariation {
        self.variation
    }

    fn shift_state(&self) -> ShiftState {
        self.shift_state
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn evaluate_enabled(&self, data: &TextKeyData) -> bool {
        match data.code {
            code::CLIPBOARD_COPY | code::CLIPBOARD_CUT => self.has_selection,
            code::CLIPBOARD_PASTE => self.has_clipboard_data,
            code::CLIPBOARD_SELECT_ALL => self.has_text,
            _ => true,
        }
    }

    fn evaluate_visible(&self, data: &TextKeyData) -> bool {
        match data.code {
            code::LANGUAGE_SWITCH => self.subtype_count > 1,
            _ => true,
        }
    }

    fn popup_mapping(&self) -> Option<&PopupMapping> {
        self.popup_mapping.as_ref()
    }

    fn popup_mapping_default(&self) -> Option<&PopupMapping> {
        self.popup_mapping_default.as_ref()
    }
}
