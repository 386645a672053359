// SPDX-License-Identifier: GPL-3.0-only

//! Loading layouts and popup mappings from JSON.
//!
//! Every loader distinguishes I/O errors (file not found, permission denied)
//! from JSON errors (malformed syntax, unknown key variants) and runs the
//! matching validation before returning.

use crate::layout::types::{Layout, ParseError, ParseResult};
use crate::layout::validation::{validate_layout, validate_popup_mapping};
use crate::popup::PopupMapping;
use std::fs;
use std::path::Path;

/// Parses a layout from a JSON file.
///
/// # Example
///
/// ```rust,ignore
/// use textkey::layout::parse_layout_file;
///
/// match parse_layout_file("layouts/qwerty.json") {
///     Ok(result) => {
///         println!("Loaded layout: {}", result.layout.name);
///         if result.has_warnings() {
///             println!("Warnings: {}", result.warning_count());
///         }
///     }
///     Err(e) => eprintln!("Failed to parse layout: {}", e),
/// }
/// ```
pub fn parse_layout_file(path: impl AsRef<Path>) -> Result<ParseResult<Layout>, ParseError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let json_str =
        fs::read_to_string(path).map_err(|e| ParseError::io_error_with_path(e, &path_str))?;
    let layout: Layout = serde_json::from_str(&json_str)
        .map_err(|e| ParseError::json_error_with_path(e, &path_str))?;

    let result = validate_layout(layout).map_err(|e| e.with_path(&path_str))?;
    tracing::info!(
        "Loaded layout '{}' from {} ({} rows)",
        result.layout.name,
        path_str,
        result.layout.arrangement.len()
    );
    Ok(result)
}

/// Parses a layout from a JSON string.
pub fn parse_layout_from_string(json: &str) -> Result<ParseResult<Layout>, ParseError> {
    let layout: Layout = serde_json::from_str(json).map_err(ParseError::json_error)?;
    validate_layout(layout)
}

/// Parses an extended popup mapping from a JSON file.
pub fn parse_popup_mapping_file(
    path: impl AsRef<Path>,
) -> Result<ParseResult<PopupMapping>, ParseError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let json_str =
        fs::read_to_string(path).map_err(|e| ParseError::io_error_with_path(e, &path_str))?;
    let mapping: PopupMapping = serde_json::from_str(&json_str)
        .map_err(|e| ParseError::json_error_with_path(e, &path_str))?;

    let result = validate_popup_mapping(mapping).map_err(|e| e.with_path(&path_str))?;
    tracing::info!(
        "Loaded popup mapping from {} ({} sets)",
        path_str,
        result.layout.len()
    );
    Ok(result)
}

/// Parses an extended popup mapping from a JSON string.
pub fn parse_popup_mapping_from_string(
    json: &str,
) -> Result<ParseResult<PopupMapping>, ParseError> {
    let mapping: PopupMapping = serde_json::from_str(json).map_err(ParseError::json_error)?;
    validate_popup_mapping(mapping)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{KeyData, KeyVariation, KeyboardMode};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const QWERTY: &str = r#"{
        "name": "qwerty",
        "mode": "characters",
        "arrangement": [
            [
                { "$": "auto_text_key", "code": 113, "label": "q" },
                { "$": "auto_text_key", "code": 119, "label": "w" }
            ],
            [
                { "$": "text_key", "type": "modifier", "code": -11, "label": "shift" },
                {
                    "$": "variation_selector",
                    "default": { "$": "text_key", "code": 44, "label": "," },
                    "email": { "$": "text_key", "code": 64, "label": "@" }
                }
            ]
        ]
    }"#;

    const POPUPS: &str = r#"{
        "all": {
            "e": { "main": { "$": "text_key", "code": 233, "label": "é" } },
            "~enter": { "relevant": [ { "$": "text_key", "code": 10, "label": "\n" } ] }
        },
        "email_address": {
            "@": { "relevant": [ { "$": "text_key", "code": 46, "label": "." } ] }
        }
    }"#;

    /// Test 1: Parse valid layout string
    #[test]
    fn test_parse_layout_from_string() {
        let result = parse_layout_from_string(QWERTY).expect("Should parse layout");
        assert!(!result.has_warnings());

        let layout = result.into_layout();
        assert_eq!(layout.name, "qwerty");
        assert_eq!(layout.mode, KeyboardMode::Characters);
        assert_eq!(layout.arrangement.len(), 2);
        assert!(matches!(layout.arrangement[1][1], KeyData::VariationSelector { .. }));
    }

    /// Test 2: Missing file yields an I/O error with path
    #[test]
    fn test_parse_missing_file() {
        let err = parse_layout_file("/nonexistent/path/to/layout.json").unwrap_err();
        match &err {
            ParseError::IoError {
                file_path,
                suggestion,
                ..
            } => {
                assert_eq!(file_path.as_deref(), Some("/nonexistent/path/to/layout.json"));
                assert!(suggestion.is_some());
            }
            _ => panic!("Expected IoError variant"),
        }
    }

    /// Test 3: Layout file round trip through disk
    #[test]
    fn test_parse_layout_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(QWERTY.as_bytes()).unwrap();

        let result = parse_layout_file(file.path()).expect("Should parse file");
        assert_eq!(result.layout.arrangement[0].len(), 2);
    }

    /// Test 4: Malformed JSON file reports path and line
    #[test]
    fn test_parse_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\n  \"name\": \"broken\",\n  \"arrangement\": [[\n").unwrap();

        let err = parse_layout_file(file.path()).unwrap_err();
        match err {
            ParseError::JsonError {
                file_path,
                line_number,
                ..
            } => {
                assert!(file_path.is_some());
                assert!(line_number.is_some());
            }
            other => panic!("Expected JsonError, got {:?}", other),
        }
    }

    /// Test 5: Unknown key variant is a JSON error
    #[test]
    fn test_unknown_key_variant() {
        let json = r#"{ "name": "x", "arrangement": [[ { "$": "emoji_key", "code": 1 } ]] }"#;
        assert!(matches!(
            parse_layout_from_string(json),
            Err(ParseError::JsonError { .. })
        ));
    }

    /// Test 6: Parse popup mapping string
    #[test]
    fn test_parse_popup_mapping_from_string() {
        let mapping = parse_popup_mapping_from_string(POPUPS).unwrap().into_layout();
        assert_eq!(mapping.len(), 3);

        let e = mapping.get(KeyVariation::All, "e").unwrap();
        assert_eq!(e.main.as_ref().unwrap().static_label(), "é");
        assert!(mapping.get(KeyVariation::EmailAddress, "@").is_some());
        assert!(mapping.get(KeyVariation::Normal, "@").is_none());
    }

    /// Test 7: Popup mapping file with warnings
    #[test]
    fn test_parse_popup_mapping_file() {
        let json = r#"{
            "all": {
                "a": { "relevant": [
                    { "$": "text_key", "code": 224, "label": "à" },
                    { "$": "text_key", "code": 224, "label": "à" }
                ] }
            }
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let result = parse_popup_mapping_file(file.path()).unwrap();
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.warnings[0].field_path, "all.a[1]");
    }
}
