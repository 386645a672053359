// SPDX-License-Identifier: GPL-3.0-only

//! Loader types: errors, validation issues and the layout file model.

use crate::key::{KeyData, KeyboardMode};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Error Handling Types
// ============================================================================

/// A non-fatal problem found while validating a layout or popup mapping.
///
/// The value is still loaded; issues are reported alongside it in
/// [`ParseResult::warnings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Human-readable description of the issue
    pub message: String,
    /// Line number in the JSON file, if known
    pub line_number: Option<usize>,
    /// Path to the offending field (e.g., "arrangement[0][3]")
    pub field_path: String,
    /// How to fix the issue
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Creates a warning for the field at `field_path`.
    pub fn warning(message: impl Into<String>, field_path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line_number: None,
            field_path: field_path.into(),
            suggestion: None,
        }
    }

    pub fn with_line_number(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[WARNING] {}: {}", self.field_path, self.message)?;

        if let Some(line) = self.line_number {
            write!(f, " (line {})", line)?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Error type for loading layouts, popup mappings and configuration.
///
/// Key computation never fails; every error of this crate originates here,
/// while reading and checking input files.
#[derive(Debug)]
pub enum ParseError {
    /// The file could not be read
    IoError {
        source: std::io::Error,
        file_path: Option<String>,
        suggestion: Option<String>,
    },

    /// The file is not valid JSON or does not match the expected shape
    JsonError {
        source: serde_json::Error,
        file_path: Option<String>,
        /// Line reported by serde_json
        line_number: Option<usize>,
        suggestion: Option<String>,
    },

    /// A key definition nests selectors too deeply
    MaxDepthExceeded {
        message: String,
        max_depth: usize,
        actual_depth: usize,
        file_path: Option<String>,
        suggestion: Option<String>,
    },

    /// A locale tag is not a valid language identifier
    InvalidLocale {
        tag: String,
        suggestion: Option<String>,
    },
}

impl ParseError {
    pub fn io_error(source: std::io::Error) -> Self {
        Self::IoError {
            source,
            file_path: None,
            suggestion: None,
        }
    }

    pub fn io_error_with_path(source: std::io::Error, file_path: impl Into<String>) -> Self {
        Self::IoError {
            source,
            file_path: Some(file_path.into()),
            suggestion: Some("Check that the file exists and you have read permissions".into()),
        }
    }

    pub fn json_error(source: serde_json::Error) -> Self {
        let line_number = Some(source.line());
        Self::JsonError {
            source,
            file_path: None,
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    pub fn json_error_with_path(source: serde_json::Error, file_path: impl Into<String>) -> Self {
        let line_number = Some(source.line());
        Self::JsonError {
            source,
            file_path: Some(file_path.into()),
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    /// Creates a max depth exceeded error.
    pub fn max_depth_exceeded(
        message: impl Into<String>,
        max_depth: usize,
        actual_depth: usize,
    ) -> Self {
        Self::MaxDepthExceeded {
            message: message.into(),
            max_depth,
            actual_depth,
            file_path: None,
            suggestion: Some(format!("Reduce selector nesting to {} or less", max_depth)),
        }
    }

    /// Creates an invalid locale error for `tag`.
    pub fn invalid_locale(tag: impl Into<String>) -> Self {
        Self::InvalidLocale {
            tag: tag.into(),
            suggestion: Some("Use a BCP-47 language tag such as \"en-US\" or \"de-CH\"".into()),
        }
    }

    /// Attaches the path of the file being loaded, where the variant has one.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        match &mut self {
            ParseError::IoError { file_path, .. }
            | ParseError::JsonError { file_path, .. }
            | ParseError::MaxDepthExceeded { file_path, .. } => *file_path = Some(path.into()),
            ParseError::InvalidLocale { .. } => {}
        }
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IoError {
                source,
                file_path,
                suggestion,
            } => {
                write!(f, "I/O error")?;
                if let Some(path) = file_path {
                    write!(f, " reading file '{}'", path)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            ParseError::JsonError {
                source,
                file_path,
                line_number,
                suggestion,
            } => {
                write!(f, "JSON parsing error")?;
                if let Some(path) = file_path {
                    write!(f, " in file '{}'", path)?;
                }
                if let Some(line) = line_number {
                    write!(f, " at line {}", line)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            ParseError::MaxDepthExceeded {
                message,
                max_depth,
                actual_depth,
                file_path,
                suggestion,
            } => {
                write!(f, "Maximum depth exceeded")?;
                if let Some(path) = file_path {
                    write!(f, " in file '{}'", path)?;
                }
                write!(
                    f,
                    ": {} (limit: {}, actual: {})",
                    message, max_depth, actual_depth
                )?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            ParseError::InvalidLocale { tag, suggestion } => {
                write!(f, "Invalid locale '{}'", tag)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::IoError { source, .. } => Some(source),
            ParseError::JsonError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err)
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::json_error(err)
    }
}

// ============================================================================
// ParseResult Type
// ============================================================================

/// A successfully loaded value together with its non-fatal warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<T> {
    /// The loaded value
    pub layout: T,
    /// Non-fatal validation warnings
    pub warnings: Vec<ValidationIssue>,
}

impl<T> ParseResult<T> {
    pub fn new(layout: T) -> Self {
        Self {
            layout,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(layout: T, warnings: Vec<ValidationIssue>) -> Self {
        Self { layout, warnings }
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Consumes the result and returns the value, discarding warnings.
    pub fn into_layout(self) -> T {
        self.layout
    }
}

// ============================================================================
// Layout File Model
// ============================================================================

/// A character, symbols or number-row layout as stored on disk.
///
/// # JSON
///
/// ```json
/// {
///   "name": "qwerty",
///   "mode": "characters",
///   "arrangement": [
///     [ { "$": "auto_text_key", "code": 113, "label": "q" } ]
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    /// Layout name
    pub name: String,

    /// Keyboard mode the layout is shown in
    #[serde(default)]
    pub mode: KeyboardMode,

    /// Rows of key definitions, top to bottom
    #[serde(default)]
    pub arrangement: Vec<Vec<KeyData>>,
}

// ============================================================================
// Tests
// ============================================================================
