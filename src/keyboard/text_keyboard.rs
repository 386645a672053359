// SPDX-License-Identifier: GPL-3.0-only

//! A keyboard of text keys built from a loaded layout.

use crate::evaluator::Evaluator;
use crate::key::{KeyData, KeyboardMode};
use crate::keyboard::key::TextKey;
use crate::layout::Layout;

/// Rows of [`TextKey`]s for one keyboard mode.
#[derive(Debug, Clone, PartialEq)]
pub struct TextKeyboard {
    pub name: String,
    pub mode: KeyboardMode,
    pub arrangement: Vec<Vec<TextKey>>,
}

impl TextKeyboard {
    /// Wraps every key definition of `layout` in an uncomputed [`TextKey`].
    pub fn from_layout(layout: Layout) -> Self {
        let arrangement = layout
            .arrangement
            .into_iter()
            .map(|row| row.into_iter().map(TextKey::new).collect())
            .collect();

        Self {
            name: layout.name,
            mode: layout.mode,
            arrangement,
        }
    }

    /// Copies symbol and number hints onto the keys.
    ///
    /// Symbol hints come from the key at the same row and column of the
    /// `symbols` layout. Number hints come from the first row of the
    /// `number_row` layout and only apply to the first row.
    pub fn assign_hints(&mut self, symbols: Option<&Layout>, number_row: Option<&Layout>) {
        if let Some(symbols) = symbols {
            for (row, symbol_row) in self.arrangement.iter_mut().zip(&symbols.arrangement) {
                for (key, hint) in row.iter_mut().zip(symbol_row) {
                    key.symbol_hint = Some(hint.clone());
                }
            }
        }

        let numbers: Option<&Vec<KeyData>> = number_row.and_then(|l| l.arrangement.first());
        if let (Some(first_row), Some(numbers)) = (self.arrangement.first_mut(), numbers) {
            for (key, hint) in first_row.iter_mut().zip(numbers) {
                key.number_hint = Some(hint.clone());
            }
        }
    }

    /// Recomputes every key for the evaluator's context.
    pub fn compute<E: Evaluator + ?Sized>(&mut self, evaluator: &E) {
        for key in self.keys_mut() {
            key.compute(evaluator);
        }
        tracing::debug!(
            "Computed keyboard '{}' ({} keys) in {} mode",
            self.name,
            self.key_count(),
            evaluator.keyboard_mode()
        );
    }

    /// Iterates over all keys, row by row.
    pub fn keys(&self) -> impl Iterator<Item = &TextKey> {
        self.arrangement.iter().flatten()
    }

    /// Iterates mutably over all keys, row by row.
    pub fn keys_mut(&mut self) -> impl Iterator<Item = &mut TextKey> {
        self.arrangement.iter_mut().flatten()
    }

    /// Returns the total number of keys.
    pub fn key_count(&self) -> usize {
        self.arrangement.iter().map(Vec::len).sum()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::KeyboardContext;
    use crate::key::TextKeyData;

    fn layout(name: &str, rows: &[&str]) -> Layout {
        Layout {
            name: name.to_string(),
            mode: KeyboardMode::Characters,
            arrangement: rows
                .iter()
                .map(|row| row.chars().map(|c| KeyData::text(TextKeyData::character(c))).collect())
                .collect(),
        }
    }

    /// Test 1: Keyboard mirrors the layout structure
    #[test]
    fn test_from_layout() {
        let keyboard = TextKeyboard::from_layout(layout("qwerty", &["qwe", "as"]));
        assert_eq!(keyboard.name, "qwerty");
        assert_eq!(keyboard.arrangement.len(), 2);
        assert_eq!(keyboard.key_count(), 5);
        assert!(keyboard.keys().all(|k| !k.is_visible()));
    }

    /// Test 2: Hints are placed by position
    #[test]
    fn test_assign_hints() {
        let mut keyboard = TextKeyboard::from_layout(layout("qwerty", &["qwe", "as"]));
        let symbols = layout("symbols", &["!@", "$%^"]);
        let numbers = layout("number_row", &["1234", "5"]);
        keyboard.assign_hints(Some(&symbols), Some(&numbers));

        let first: Vec<_> = keyboard.arrangement[0].iter().collect();
        assert_eq!(first[0].symbol_hint.as_ref().unwrap().static_label(), "!");
        assert_eq!(first[1].symbol_hint.as_ref().unwrap().static_label(), "@");
        assert!(first[2].symbol_hint.is_none());
        assert_eq!(first[2].number_hint.as_ref().unwrap().static_label(), "3");

        let second = &keyboard.arrangement[1];
        assert_eq!(second[1].symbol_hint.as_ref().unwrap().static_label(), "%");
        assert!(second.iter().all(|k| k.number_hint.is_none()));
    }

    /// Test 3: Compute reaches every key
    #[test]
    fn test_compute() {
        let mut keyboard = TextKeyboard::from_layout(layout("qwerty", &["qwe", "as"]));
        keyboard.assign_hints(None, Some(&layout("number_row", &["123"])));
        keyboard.compute(&KeyboardContext::new(KeyboardMode::Characters));

        assert!(keyboard.keys().all(|k| k.is_visible()));
        let q = &keyboard.arrangement[0][0];
        assert_eq!(q.computed_data().label, "q");
        assert_eq!(q.computed_popups().number_hint.as_ref().unwrap().label, "1");
    }
}
