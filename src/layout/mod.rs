// SPDX-License-Identifier: GPL-3.0-only

//! JSON loading for layouts and extended popup mappings.
//!
//! # Features
//!
//! - **Layouts**: rows of [`KeyData`](crate::key::KeyData) definitions tagged
//!   with the keyboard mode they belong to
//! - **Popup mappings**: variation → label → popup set tables, one per subtype
//!   plus a locale default
//! - **Permissive validation**: non-fatal issues become warnings on the
//!   [`ParseResult`], only excessive selector nesting is rejected
//! - **Helpful error messages**: file paths, line numbers and suggestions
//!
//! # Example
//!
//! ```rust,ignore
//! use textkey::layout::{parse_layout_file, parse_popup_mapping_file};
//!
//! let layout = parse_layout_file("layouts/qwerty.json")?;
//! for warning in &layout.warnings {
//!     println!("  {}", warning);
//! }
//!
//! let popups = parse_popup_mapping_file("popups/de.json")?.into_layout();
//! println!("{} popup sets", popups.len());
//! ```

pub mod parser;
pub mod types;
pub mod validation;

pub use parser::{
    parse_layout_file, parse_layout_from_string, parse_popup_mapping_file,
    parse_popup_mapping_from_string,
};
pub use types::{Layout, ParseError, ParseResult, ValidationIssue};
pub use validation::MAX_SELECTOR_DEPTH;
