// SPDX-License-Identifier: GPL-3.0-only

//! Static key definitions and the context enumerations they are resolved against.

use crate::key::code;
use crate::popup::PopupSet;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

// ============================================================================
// Context Enumerations
// ============================================================================

/// The active layout family of the keyboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum KeyboardMode {
    #[default]
    Characters,
    Editing,
    Symbols,
    Symbols2,
    Numeric,
    NumericAdvanced,
    Phone,
    Phone2,
    SmartbarClipboardCursorRow,
    SmartbarNumberRow,
    SmartbarQuickActions,
}

impl KeyboardMode {
    /// Returns true if keys in this mode receive extended popups and hints.
    pub fn resolves_popups(self) -> bool {
        matches!(
            self,
            KeyboardMode::Characters
                | KeyboardMode::NumericAdvanced
                | KeyboardMode::Symbols
                | KeyboardMode::Symbols2
        )
    }

    /// Returns true for the number pad and phone dialer families.
    pub fn is_numeric_family(self) -> bool {
        matches!(
            self,
            KeyboardMode::Numeric
                | KeyboardMode::NumericAdvanced
                | KeyboardMode::Phone
                | KeyboardMode::Phone2
        )
    }
}

/// The semantic class of the focused text field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum KeyVariation {
    All,
    EmailAddress,
    #[default]
    Normal,
    Password,
    Uri,
}

impl KeyVariation {
    /// Returns the variations to search, in order, when resolving extended popups.
    ///
    /// The most specific variation comes first and `All` always closes the
    /// cascade, so every lookup ends with the unconditional fallback.
    pub fn popup_lookup_order(self) -> &'static [KeyVariation] {
        match self {
            KeyVariation::Password => &[KeyVariation::Password, KeyVariation::Normal, KeyVariation::All],
            KeyVariation::Normal => &[KeyVariation::Normal, KeyVariation::All],
            KeyVariation::EmailAddress => {
                &[KeyVariation::EmailAddress, KeyVariation::Uri, KeyVariation::All]
            }
            KeyVariation::Uri => &[KeyVariation::Uri, KeyVariation::All],
            KeyVariation::All => &[KeyVariation::All],
        }
    }
}

/// Shift / caps state of the keyboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ShiftState {
    #[default]
    Unshifted,
    ShiftedManual,
    ShiftedAutomatic,
    CapsLock,
}

impl ShiftState {
    /// Returns true for every state that produces upper-case characters.
    pub fn is_caps(self) -> bool {
        self != ShiftState::Unshifted
    }
}

/// Kind of a key, used to decide hint attachment and numeric growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    #[default]
    Character,
    EnterEditing,
    Function,
    Lock,
    Modifier,
    Navigation,
    SystemGui,
    Numeric,
    Placeholder,
    Unspecified,
}

/// Semantic group of a key.
///
/// Keys in the `Enter`, `Left` and `Right` groups look up their extended
/// popups under symbolic labels instead of their own label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupId {
    #[default]
    Default,
    Enter,
    Left,
    Right,
    Kana,
}

impl GroupId {
    /// Returns the symbolic popup label for this group, if it has one.
    pub fn symbolic_label(self) -> Option<&'static str> {
        match self {
            GroupId::Enter => Some("~enter"),
            GroupId::Left => Some("~left"),
            GroupId::Right => Some("~right"),
            GroupId::Default | GroupId::Kana => None,
        }
    }

    fn is_default(&self) -> bool {
        *self == GroupId::Default
    }
}

// ============================================================================
// Key Data
// ============================================================================

/// Concrete, fully resolved key data.
///
/// This is what a [`KeyData`] projects to for a given context. The
/// [`TextKeyData::UNSPECIFIED`] sentinel marks a key with no computed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextKeyData {
    /// Key kind
    #[serde(rename = "type", default)]
    pub key_type: KeyType,

    /// Emitted key code
    #[serde(default)]
    pub code: i32,

    /// Display label
    #[serde(default)]
    pub label: String,

    /// Semantic group
    #[serde(default, skip_serializing_if = "GroupId::is_default")]
    pub group: GroupId,

    /// Intrinsic popups shipped with the key definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup: Option<Box<PopupSet<KeyData>>>,
}

impl TextKeyData {
    /// Sentinel for a hidden key.
    pub const UNSPECIFIED: TextKeyData = TextKeyData {
        key_type: KeyType::Unspecified,
        code: code::UNSPECIFIED,
        label: String::new(),
        group: GroupId::Default,
        popup: None,
    };

    /// Creates key data of the given type.
    pub fn new(key_type: KeyType, code: i32, label: impl Into<String>) -> Self {
        Self {
            key_type,
            code,
            label: label.into(),
            group: GroupId::Default,
            popup: None,
        }
    }

    /// Creates a character key whose code is the character's ordinal.
    pub fn character(c: char) -> Self {
        Self::new(KeyType::Character, c as i32, c.to_string())
    }

    /// Sets the semantic group.
    pub fn with_group(mut self, group: GroupId) -> Self {
        self.group = group;
        self
    }

    /// Attaches an intrinsic popup set.
    pub fn with_popup(mut self, popup: PopupSet<KeyData>) -> Self {
        self.popup = Some(Box::new(popup));
        self
    }

    /// Returns true if this is the hidden sentinel.
    pub fn is_unspecified(&self) -> bool {
        *self == Self::UNSPECIFIED
    }

    /// Returns true if both describe the same popup entry (same code and label).
    pub fn same_key(&self, other: &TextKeyData) -> bool {
        self.code == other.code && self.label == other.label
    }
}

/// A static key definition as written in a layout.
///
/// Selector variants pick one of their branches depending on the context an
/// evaluator reports; see [`KeyData::compute_text_key_data`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$", rename_all = "snake_case")]
pub enum KeyData {
    /// Concrete key data, projected as-is
    TextKey(TextKeyData),

    /// Key data upper-cased automatically while caps is active
    AutoTextKey(TextKeyData),

    /// Picks `upper` while caps is active, `lower` otherwise
    CaseSelector {
        lower: Box<KeyData>,
        upper: Box<KeyData>,
    },

    /// Picks a branch by the exact shift state
    ShiftStateSelector {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Box<KeyData>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shifted: Option<Box<KeyData>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shifted_manual: Option<Box<KeyData>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shifted_automatic: Option<Box<KeyData>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caps_lock: Option<Box<KeyData>>,
    },

    /// Picks a branch by the text field variation
    VariationSelector {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Box<KeyData>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<Box<KeyData>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        uri: Option<Box<KeyData>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        normal: Option<Box<KeyData>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password: Option<Box<KeyData>>,
    },

    /// Picks a branch by the layout direction
    LayoutDirectionSelector {
        ltr: Box<KeyData>,
        rtl: Box<KeyData>,
    },
}

impl KeyData {
    /// Wraps concrete key data.
    pub fn text(data: TextKeyData) -> Self {
        KeyData::TextKey(data)
    }

    /// Wraps key data that follows the caps state.
    pub fn auto_text(data: TextKeyData) -> Self {
        KeyData::AutoTextKey(data)
    }

    /// Returns the code of the definition without consulting any context.
    ///
    /// Selectors report the code of their first available branch.
    pub fn static_code(&self) -> i32 {
        self.first_concrete().map_or(code::UNSPECIFIED, |data| data.code)
    }

    /// Returns the label of the definition without consulting any context.
    pub fn static_label(&self) -> &str {
        self.first_concrete().map_or("", |data| data.label.as_str())
    }

    /// Returns the number of selector levels above the deepest concrete data.
    pub fn depth(&self) -> usize {
        self.branches()
            .iter()
            .map(|branch| branch.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Returns the direct child definitions of a selector.
    pub fn branches(&self) -> Vec<&KeyData> {
        match self {
            KeyData::TextKey(_) | KeyData::AutoTextKey(_) => Vec::new(),
            KeyData::CaseSelector { lower, upper } => vec![&**lower, &**upper],
            KeyData::ShiftStateSelector {
                default,
                shifted,
                shifted_manual,
                shifted_automatic,
                caps_lock,
            } => [default, shifted, shifted_manual, shifted_automatic, caps_lock]
                .into_iter()
                .flatten()
                .map(|b| &**b)
                .collect(),
            KeyData::VariationSelector {
                default,
                email,
                uri,
                normal,
                password,
            } => [default, email, uri, normal, password]
                .into_iter()
                .flatten()
                .map(|b| &**b)
                .collect(),
            KeyData::LayoutDirectionSelector { ltr, rtl } => vec![&**ltr, &**rtl],
        }
    }

    fn first_concrete(&self) -> Option<&TextKeyData> {
        match self {
            KeyData::TextKey(data) | KeyData::AutoTextKey(data) => Some(data),
            _ => self
                .branches()
                .into_iter()
                .find_map(|branch| branch.first_concrete()),
        }
    }
}

impl From<TextKeyData> for KeyData {
    fn from(data: TextKeyData) -> Self {
        KeyData::TextKey(data)
    }
}

// ============================================================================
// Tests
// ============================================================================
