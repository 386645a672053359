// SPDX-License-Identifier: GPL-3.0-only

//! Text keys, their computed state and the keyboards that hold them.
//!
//! # Example
//!
//! ```rust,ignore
//! use textkey::evaluator::KeyboardContext;
//! use textkey::keyboard::TextKeyboard;
//! use textkey::layout::parse_layout_file;
//!
//! let layout = parse_layout_file("layouts/qwerty.json")?.into_layout();
//! let mut keyboard = TextKeyboard::from_layout(layout);
//! keyboard.compute(&KeyboardContext::default());
//!
//! for key in keyboard.keys() {
//!     println!("{} grows by {}", key.computed_data().label, key.flex().grow);
//! }
//! ```

pub mod key;
pub mod sizing;
pub mod text_keyboard;

pub use key::{ComputedKeyState, TextKey};
pub use sizing::FlexWeights;
pub use text_keyboard::TextKeyboard;
