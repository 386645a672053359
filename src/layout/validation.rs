// SPDX-License-Identifier: GPL-3.0-only

//! Validation rules for layouts and popup mappings.
//!
//! Validation is permissive: problems that still leave a usable keyboard are
//! collected as warnings and the value is returned anyway. Only selector
//! nesting beyond [`MAX_SELECTOR_DEPTH`] is fatal.

use crate::key::{code, KeyData, KeyType};
use crate::layout::types::{Layout, ParseError, ParseResult, ValidationIssue};
use crate::popup::{PopupMapping, PopupSet};

/// Maximum allowed selector nesting within one key definition
pub const MAX_SELECTOR_DEPTH: usize = 8;

/// Validates a layout and returns it with warnings.
pub fn validate_layout(layout: Layout) -> Result<ParseResult<Layout>, ParseError> {
    let mut warnings = Vec::new();

    validate_required_fields(&layout, &mut warnings);

    for (r, row) in layout.arrangement.iter().enumerate() {
        if row.is_empty() {
            warnings.push(
                ValidationIssue::warning("Row has no keys", format!("arrangement[{}]", r))
                    .with_suggestion("Remove the empty row"),
            );
        }
        for (c, key) in row.iter().enumerate() {
            let field_path = format!("arrangement[{}][{}]", r, c);
            enforce_max_selector_depth(key, &field_path)?;
            validate_key(key, &field_path, &mut warnings);
        }
    }

    Ok(collect_warnings(layout, warnings))
}

/// Checks the layout-level fields.
pub fn validate_required_fields(layout: &Layout, warnings: &mut Vec<ValidationIssue>) {
    if layout.name.is_empty() {
        warnings.push(
            ValidationIssue::warning("Layout name is empty", "name")
                .with_suggestion("Provide a descriptive name for the layout"),
        );
    }

    if layout.arrangement.is_empty() {
        warnings.push(
            ValidationIssue::warning("Layout has no rows", "arrangement")
                .with_suggestion("Add at least one row of keys"),
        );
    }
}

/// Rejects key definitions nesting selectors deeper than [`MAX_SELECTOR_DEPTH`].
pub fn enforce_max_selector_depth(key: &KeyData, field_path: &str) -> Result<(), ParseError> {
    let depth = key.depth();
    if depth > MAX_SELECTOR_DEPTH {
        return Err(ParseError::max_depth_exceeded(
            format!("Key at {} nests selectors too deeply", field_path),
            MAX_SELECTOR_DEPTH,
            depth,
        ));
    }
    Ok(())
}

/// Checks every concrete leaf of a key definition.
fn validate_key(key: &KeyData, field_path: &str, warnings: &mut Vec<ValidationIssue>) {
    match key {
        KeyData::TextKey(data) | KeyData::AutoTextKey(data) => {
            if data.label.is_empty() {
                warnings.push(
                    ValidationIssue::warning("Key has an empty label", field_path)
                        .with_suggestion("Give the key a label"),
                );
            }
            if data.key_type == KeyType::Character && data.code == code::UNSPECIFIED {
                warnings.push(
                    ValidationIssue::warning("Character key has no code", field_path)
                        .with_suggestion("Set \"code\" to the character's ordinal"),
                );
            }
        }
        _ => {
            for (i, branch) in key.branches().into_iter().enumerate() {
                validate_key(branch, &format!("{}.{}", field_path, i), warnings);
            }
        }
    }
}

/// Validates a popup mapping and returns it with warnings.
pub fn validate_popup_mapping(
    mapping: PopupMapping,
) -> Result<ParseResult<PopupMapping>, ParseError> {
    let mut warnings = Vec::new();

    for (variation, label, set) in mapping.iter() {
        let field_path = format!("{}.{}", variation, label);
        if label.is_empty() {
            warnings.push(
                ValidationIssue::warning("Popup set has an empty label", field_path.as_str())
                    .with_suggestion("Use the key label the set belongs to"),
            );
        }
        for (i, entry) in set.iter().enumerate() {
            enforce_max_selector_depth(entry, &format!("{}[{}]", field_path, i))?;
        }
        validate_popup_set(set, &field_path, &mut warnings);
    }

    Ok(collect_warnings(mapping, warnings))
}

/// Warns about entries repeated within a single popup set.
fn validate_popup_set(
    set: &PopupSet<KeyData>,
    field_path: &str,
    warnings: &mut Vec<ValidationIssue>,
) {
    let entries: Vec<&KeyData> = set.iter().collect();
    for (i, entry) in entries.iter().enumerate() {
        let repeated = entries[..i].iter().any(|earlier| {
            earlier.static_code() == entry.static_code()
                && earlier.static_label() == entry.static_label()
        });
        if repeated {
            warnings.push(
                ValidationIssue::warning(
                    format!("Duplicate popup entry '{}'", entry.static_label()),
                    format!("{}[{}]", field_path, i),
                )
                .with_suggestion("Remove the repeated entry"),
            );
        }
    }
}

/// Sorts warnings by field path and wraps the value.
pub fn collect_warnings<T>(value: T, mut warnings: Vec<ValidationIssue>) -> ParseResult<T> {
    warnings.sort_by(|a, b| a.field_path.cmp(&b.field_path));

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    ParseResult::with_warnings(value, warnings)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{KeyVariation, KeyboardMode, TextKeyData};

    fn key(c: char) -> KeyData {
        KeyData::text(TextKeyData::character(c))
    }

    fn nested(depth: usize) -> KeyData {
        (0..depth).fold(key('a'), |inner, _| KeyData::CaseSelector {
            lower: Box::new(inner),
            upper: Box::new(key('A')),
        })
    }

    fn layout(arrangement: Vec<Vec<KeyData>>) -> Layout {
        Layout {
            name: "test".to_string(),
            mode: KeyboardMode::Characters,
            arrangement,
        }
    }

    /// Test 1: A clean layout has no warnings
    #[test]
    fn test_valid_layout() {
        let result = validate_layout(layout(vec![vec![key('q'), key('w')]])).unwrap();
        assert!(!result.has_warnings());
    }

    /// Test 2: Empty name, empty rows and empty layouts warn
    #[test]
    fn test_structure_warnings() {
        let result = validate_layout(Layout::default()).unwrap();
        let paths: Vec<&str> = result.warnings.iter().map(|w| w.field_path.as_str()).collect();
        assert_eq!(paths, vec!["arrangement", "name"]);

        let result = validate_layout(layout(vec![vec![key('q')], vec![]])).unwrap();
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.warnings[0].field_path, "arrangement[1]");
        assert!(result.warnings[0].to_string().starts_with("[WARNING] arrangement[1]"));
    }

    /// Test 3: Empty labels and missing codes warn, including inside selectors
    #[test]
    fn test_key_warnings() {
        let blank = KeyData::text(TextKeyData::new(KeyType::Character, 0, ""));
        let selector = KeyData::CaseSelector {
            lower: Box::new(key('a')),
            upper: Box::new(KeyData::text(TextKeyData::new(KeyType::Function, -7, ""))),
        };

        let result = validate_layout(layout(vec![vec![blank, selector]])).unwrap();
        let messages: Vec<(&str, &str)> = result
            .warnings
            .iter()
            .map(|w| (w.field_path.as_str(), w.message.as_str()))
            .collect();

        assert_eq!(
            messages,
            vec![
                ("arrangement[0][0]", "Key has an empty label"),
                ("arrangement[0][0]", "Character key has no code"),
                ("arrangement[0][1].1", "Key has an empty label"),
            ]
        );
    }

    /// Test 4: Selector depth limit
    #[test]
    fn test_max_selector_depth() {
        assert!(validate_layout(layout(vec![vec![nested(MAX_SELECTOR_DEPTH)]])).is_ok());

        let err = validate_layout(layout(vec![vec![nested(MAX_SELECTOR_DEPTH + 1)]])).unwrap_err();
        match err {
            ParseError::MaxDepthExceeded {
                max_depth,
                actual_depth,
                ..
            } => {
                assert_eq!(max_depth, MAX_SELECTOR_DEPTH);
                assert_eq!(actual_depth, MAX_SELECTOR_DEPTH + 1);
            }
            other => panic!("Expected MaxDepthExceeded, got {:?}", other),
        }
    }

    /// Test 5: Popup mapping warnings
    #[test]
    fn test_popup_mapping_warnings() {
        let mapping = PopupMapping::new()
            .with(KeyVariation::All, "e", PopupSet::new(Some(key('é')), vec![key('ë'), key('é')]))
            .with(KeyVariation::Normal, "", PopupSet::relevant(vec![key('x')]));

        let result = validate_popup_mapping(mapping).unwrap();
        let paths: Vec<&str> = result.warnings.iter().map(|w| w.field_path.as_str()).collect();
        assert_eq!(paths, vec!["all.e[2]", "normal."]);
        assert!(result.warnings[0].message.contains("'é'"));
    }

    /// Test 6: Popup entries obey the depth limit too
    #[test]
    fn test_popup_mapping_depth() {
        let mapping = PopupMapping::new().with(
            KeyVariation::All,
            "a",
            PopupSet::relevant(vec![nested(MAX_SELECTOR_DEPTH + 1)]),
        );
        assert!(matches!(
            validate_popup_mapping(mapping),
            Err(ParseError::MaxDepthExceeded { .. })
        ));
    }
}
