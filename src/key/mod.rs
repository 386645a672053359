// SPDX-License-Identifier: GPL-3.0-only

//! Key definitions and their context-dependent projection.
//!
//! A layout stores each key as a static [`KeyData`] definition. Before a key
//! can be displayed it is projected through an
//! [`Evaluator`](crate::evaluator::Evaluator) into concrete [`TextKeyData`]:
//! selectors pick the branch matching the current shift state, text field
//! variation or layout direction, and auto text keys follow the caps state
//! using the active subtype's locale.
//!
//! # Example
//!
//! ```rust,ignore
//! use textkey::evaluator::KeyboardContext;
//! use textkey::key::{KeyData, ShiftState, TextKeyData};
//!
//! let key = KeyData::auto_text(TextKeyData::character('a'));
//! let ctx = KeyboardContext {
//!     shift_state: ShiftState::CapsLock,
//!     ..KeyboardContext::default()
//! };
//!
//! assert_eq!(key.compute_text_key_data(&ctx).unwrap().label, "A");
//! ```

pub mod code;
pub mod locale;
pub mod projection;
pub mod types;

pub use locale::Subtype;
pub use types::{
    GroupId, KeyData, KeyType, KeyVariation, KeyboardMode, ShiftState, TextKeyData,
};
