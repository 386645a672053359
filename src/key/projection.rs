// SPDX-License-Identifier: GPL-3.0-only

//! Projection of static key definitions onto the current context.
//!
//! Projection walks a [`KeyData`] tree, picking selector branches from the
//! evaluator's context until concrete [`TextKeyData`] is reached. A missing
//! branch yields `None`, which callers treat as "key not present here".

use crate::evaluator::Evaluator;
use crate::key::locale;
use crate::key::types::{KeyData, KeyVariation, ShiftState, TextKeyData};

impl KeyData {
    /// Resolves this definition to concrete key data for the evaluator's context.
    ///
    /// # Returns
    ///
    /// `Some(TextKeyData)` with the resolved data, or `None` if a selector has
    /// no branch for the current context.
    pub fn compute_text_key_data<E: Evaluator + ?Sized>(&self, evaluator: &E) -> Option<TextKeyData> {
        match self {
            KeyData::TextKey(data) => Some(data.clone()),
            KeyData::AutoTextKey(data) => {
                if evaluator.evaluate_caps(data) {
                    let locale = &evaluator.active_subtype().locale;
                    Some(TextKeyData {
                        code: locale::uppercase_code(locale, data.code),
                        label: locale::uppercase(locale, &data.label),
                        ..data.clone()
                    })
                } else {
                    Some(data.clone())
                }
            }
            KeyData::CaseSelector { lower, upper } => {
                if evaluator.shift_state().is_caps() {
                    upper.compute_text_key_data(evaluator)
                } else {
                    lower.compute_text_key_data(evaluator)
                }
            }
            KeyData::ShiftStateSelector {
                default,
                shifted,
                shifted_manual,
                shifted_automatic,
                caps_lock,
            } => {
                let specific = match evaluator.shift_state() {
                    ShiftState::Unshifted => None,
                    ShiftState::ShiftedManual => shifted_manual.as_ref().or(shifted.as_ref()),
                    ShiftState::ShiftedAutomatic => shifted_automatic.as_ref().or(shifted.as_ref()),
                    ShiftState::CapsLock => caps_lock.as_ref().or(shifted.as_ref()),
                };
                specific
                    .or(default.as_ref())?
                    .compute_text_key_data(evaluator)
            }
            KeyData::VariationSelector {
                default,
                email,
                uri,
                normal,
                password,
            } => {
                let specific = match evaluator.key_variation() {
                    KeyVariation::All => None,
                    KeyVariation::EmailAddress => email.as_ref(),
                    KeyVariation::Normal => normal.as_ref(),
                    KeyVariation::Password => password.as_ref(),
                    KeyVariation::Uri => uri.as_ref(),
                };
                specific
                    .or(default.as_ref())?
                    .compute_text_key_data(evaluator)
            }
            KeyData::LayoutDirectionSelector { ltr, rtl } => {
                if evaluator.is_rtl() {
                    rtl.compute_text_key_data(evaluator)
                } else {
                    ltr.compute_text_key_data(evaluator)
                }
            }
        }
    }
}
