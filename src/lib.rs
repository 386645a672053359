// SPDX-License-Identifier: GPL-3.0-only

//! Textkey - per-key computation for soft keyboard text layouts
//!
//! This crate turns static key definitions into what a soft keyboard shows
//! for the current context: the concrete key, its long-press popups with
//! symbol and number hints, whether it is enabled or visible, and its flex
//! layout weights.
//!
//! # Architecture
//!
//! 1. **Projection** (`key`): selector definitions resolve to concrete key
//!    data for the current shift state, text field variation and direction.
//! 2. **Popup resolution** (`popup`): intrinsic popups, key-specific and
//!    variation-resolved extended popups merge without duplicates.
//! 3. **Key computation** (`keyboard`): every key rebuilds its whole state
//!    from the [`Evaluator`](evaluator::Evaluator) on each recomputation.
//!
//! # Modules
//!
//! - `app_settings`: Centralized constants
//! - `config`: Engine configuration (hint placement, default locale)
//! - `evaluator`: The context capability keys are computed against
//! - `key`: Key definitions, projection and locale-aware case mapping
//! - `keyboard`: Text keys, computed state, flex weights and keyboards
//! - `layout`: JSON loading and validation of layouts and popup mappings
//! - `popup`: Popup sets, extended mappings and computed collections

pub mod app_settings;
pub mod config;
pub mod evaluator;
pub mod key;
pub mod keyboard;
pub mod layout;
pub mod popup;

pub use evaluator::{Evaluator, KeyboardContext};
pub use keyboard::{ComputedKeyState, TextKey, TextKeyboard};

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod integration_tests {
    use crate::config::EngineConfig;
    use crate::evaluator::KeyboardContext;
    use crate::key::{code, KeyVariation, KeyboardMode, ShiftState, Subtype};
    use crate::keyboard::sizing::FlexWeights;
    use crate::keyboard::TextKeyboard;
    use crate::layout::{parse_layout_from_string, parse_popup_mapping_from_string};
    use strum::IntoEnumIterator;

    const QWERTY: &str = r#"{
        "name": "qwerty",
        "mode": "characters",
        "arrangement": [
            [
                { "$": "auto_text_key", "code": 101, "label": "e",
                  "popup": { "main": { "$": "text_key", "code": 233, "label": "é" } } },
                { "$": "auto_text_key", "code": 105, "label": "i" },
                { "$": "auto_text_key", "code": 49, "label": "1" }
            ],
            [
                { "$": "text_key", "type": "modifier", "code": -11, "label": "shift" },
                { "$": "text_key", "type": "system_gui", "code": -210, "label": "language" },
                { "$": "text_key", "code": 32, "label": " " },
                { "$": "text_key", "type": "enter_editing", "code": 10, "label": "enter", "group": "enter" }
            ]
        ]
    }"#;

    const SYMBOLS: &str = r#"{
        "name": "symbols",
        "mode": "symbols",
        "arrangement": [
            [
                { "$": "text_key", "code": 36, "label": "$" },
                { "$": "text_key", "code": 37, "label": "%" },
                { "$": "text_key", "code": 49, "label": "1" }
            ]
        ]
    }"#;

    const NUMBER_ROW: &str = r#"{
        "name": "number_row",
        "arrangement": [
            [
                { "$": "text_key", "code": 51, "label": "3" },
                { "$": "text_key", "code": 56, "label": "8" },
                { "$": "text_key", "code": 49, "label": "1" }
            ]
        ]
    }"#;

    const POPUPS: &str = r#"{
        "all": {
            "e": { "relevant": [ { "$": "text_key", "code": 235, "label": "ë" } ] },
            "$": { "relevant": [ { "$": "text_key", "code": 8364, "label": "€" } ] },
            "~enter": { "relevant": [ { "$": "text_key", "code": -212, "label": "emoji" } ] }
        },
        "password": {
            "e": { "relevant": [ { "$": "text_key", "code": 101, "label": "e" } ] }
        }
    }"#;

    fn keyboard() -> TextKeyboard {
        let symbols = parse_layout_from_string(SYMBOLS).unwrap().into_layout();
        let number_row = parse_layout_from_string(NUMBER_ROW).unwrap().into_layout();
        let mut keyboard = TextKeyboard::from_layout(parse_layout_from_string(QWERTY).unwrap().into_layout());
        keyboard.assign_hints(Some(&symbols), Some(&number_row));
        keyboard
    }

    fn context(mode: KeyboardMode) -> KeyboardContext {
        let popups = parse_popup_mapping_from_string(POPUPS).unwrap().into_layout();
        KeyboardContext::new(mode).with_popup_mappings(None, Some(popups))
    }

    /// Integration Test 1: Accent and hint popups for the e key
    #[test]
    fn test_e_key_popups() {
        let mut keyboard = keyboard();
        keyboard.compute(&context(KeyboardMode::Characters));

        let e = &keyboard.arrangement[0][0];
        let popups = e.computed_popups();
        let accents: Vec<&str> = popups.entries().map(|d| d.label.as_str()).collect();
        assert_eq!(accents, vec!["é", "ë"]);
        assert_eq!(popups.symbol_hint.as_ref().unwrap().label, "$");
        assert_eq!(popups.number_hint.as_ref().unwrap().label, "3");

        let keys = popups.popup_keys(&EngineConfig::default().hints);
        assert_eq!(keys.labels(), vec!["é", "$", "3", "ë", "€"]);
    }

    /// Integration Test 2: A key never gets its own code as a hint
    #[test]
    fn test_self_hint_suppressed() {
        let mut keyboard = keyboard();
        keyboard.compute(&context(KeyboardMode::Characters));

        let one = &keyboard.arrangement[0][2];
        assert!(one.computed_popups().symbol_hint.is_none());
        assert!(one.computed_popups().number_hint.is_none());
    }

    /// Integration Test 3: Caps lock under a Turkish subtype
    #[test]
    fn test_turkish_caps() {
        let mut keyboard = keyboard();
        let ctx = KeyboardContext {
            shift_state: ShiftState::CapsLock,
            ..context(KeyboardMode::Characters)
                .with_subtype(Subtype::from_tag(1, "tr-TR", "qwerty").unwrap())
        };
        keyboard.compute(&ctx);

        let i = keyboard.arrangement[0][1].computed_data();
        assert_eq!(i.label, "İ");
        assert_eq!(i.code, 'İ' as i32);

        // Extended lookup lower-cases back under the same locale
        let e = keyboard.arrangement[0][0].computed_popups();
        assert!(e.entries().any(|d| d.label == "ë"));
    }

    /// Integration Test 4: Password fields prefer password popups
    #[test]
    fn test_password_variation() {
        let mut keyboard = keyboard();
        keyboard.compute(&context(KeyboardMode::Characters).with_variation(KeyVariation::Password));

        let e = keyboard.arrangement[0][0].computed_popups();
        let accents: Vec<&str> = e.entries().map(|d| d.label.as_str()).collect();
        assert_eq!(accents, vec!["é", "e"]);
    }

    /// Integration Test 5: Enter and function keys
    #[test]
    fn test_function_row() {
        let mut keyboard = keyboard();
        keyboard.compute(&context(KeyboardMode::Characters));
        let row = &keyboard.arrangement[1];

        let shift = row[0].computed();
        assert_eq!(shift.flex.shrink, 1.5);
        assert_eq!(shift.flex.width_factor, 1.56);

        let language = row[1].computed();
        assert!(!language.is_visible);
        assert!(language.flex.is_zero());

        let space = row[2].computed();
        assert_eq!(space.flex.grow, 1.0);

        let enter = row[3].computed();
        assert_eq!(enter.data.code, code::ENTER);
        let popups: Vec<&str> = enter.popups.entries().map(|d| d.label.as_str()).collect();
        assert_eq!(popups, vec!["emoji"]);
        assert!(enter.popups.symbol_hint.is_none());
    }

    /// Integration Test 6: Invariants across every mode and variation
    #[test]
    fn test_invariants_all_contexts() {
        for mode in KeyboardMode::iter() {
            for variation in KeyVariation::iter() {
                let ctx = context(mode).with_variation(variation);
                let mut keyboard = keyboard();
                keyboard.compute(&ctx);
                let first: Vec<_> = keyboard.keys().map(|k| k.computed().clone()).collect();

                keyboard.compute(&ctx);
                let second: Vec<_> = keyboard.keys().map(|k| k.computed().clone()).collect();
                assert_eq!(first, second, "recompute changed state in {}/{}", mode, variation);

                for state in &second {
                    if !mode.resolves_popups() {
                        assert!(state.popups.is_empty(), "popups in {}", mode);
                    }

                    let accents: Vec<_> = state.popups.entries().collect();
                    for (i, a) in accents.iter().enumerate() {
                        assert!(
                            !accents[i + 1..].iter().any(|b| a.same_key(b)),
                            "duplicate popup '{}' in {}/{}",
                            a.label,
                            mode,
                            variation
                        );
                    }

                    if let Some(hint) = &state.popups.symbol_hint {
                        assert_ne!(hint.code, state.data.code);
                    }
                    if let Some(hint) = &state.popups.number_hint {
                        assert_ne!(hint.code, state.data.code);
                    }

                    if state.is_visible {
                        assert!(!state.flex.is_zero());
                        assert_eq!(state.flex, FlexWeights::for_key(mode, &state.data));
                    } else {
                        assert!(state.data.is_unspecified());
                        assert!(state.popups.is_empty());
                        assert!(!state.is_enabled);
                    }
                }
            }
        }
    }
}
