// SPDX-License-Identifier: GPL-3.0-only

//! Subtypes and locale-aware case mapping.
//!
//! Extended popup labels are lower-cased under the active subtype's locale
//! and auto text keys are upper-cased under it. Rust's `str::to_lowercase`
//! and `str::to_uppercase` implement the locale-independent Unicode mapping,
//! so the locales with tailored rules are handled here explicitly.
//!
//! # Tailored Locales
//!
//! - **Turkish (`tr`) and Azerbaijani (`az`)**: dotted and dotless i are
//!   distinct letters. `I` lowers to `ı`, `İ` lowers to `i`, `i` uppers to `İ`.

use crate::layout::ParseError;
use i18n_embed::unic_langid::LanguageIdentifier;

/// An input subtype: a language plus the layout it is typed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtype {
    /// Identifier unique among the enabled subtypes
    pub id: u64,
    /// Locale used for case mapping
    pub locale: LanguageIdentifier,
    /// Name of the character layout used by this subtype
    pub layout: String,
}

impl Subtype {
    /// Creates a subtype from a BCP-47 language tag such as `"de-CH"`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidLocale`] if the tag is not a valid
    /// language identifier.
    pub fn from_tag(id: u64, tag: &str, layout: impl Into<String>) -> Result<Self, ParseError> {
        let locale = tag
            .parse::<LanguageIdentifier>()
            .map_err(|_| ParseError::invalid_locale(tag))?;
        Ok(Self {
            id,
            locale,
            layout: layout.into(),
        })
    }

    /// Lower-cases `text` under this subtype's locale.
    pub fn lowercase(&self, text: &str) -> String {
        lowercase(&self.locale, text)
    }

    /// Upper-cases `text` under this subtype's locale.
    pub fn uppercase(&self, text: &str) -> String {
        uppercase(&self.locale, text)
    }
}

impl Default for Subtype {
    fn default() -> Self {
        Self {
            id: 0,
            locale: LanguageIdentifier::default(),
            layout: String::new(),
        }
    }
}

fn has_dotless_i(locale: &LanguageIdentifier) -> bool {
    matches!(locale.language.as_str(), "tr" | "az")
}

/// Lower-cases `text` following the rules of `locale`.
pub fn lowercase(locale: &LanguageIdentifier, text: &str) -> String {
    if !has_dotless_i(locale) {
        return text.to_lowercase();
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Upper-cases `text` following the rules of `locale`.
pub fn uppercase(locale: &LanguageIdentifier, text: &str) -> String {
    if !has_dotless_i(locale) {
        return text.to_uppercase();
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'i' => out.push('İ'),
            'ı' => out.push('I'),
            _ => out.extend(c.to_uppercase()),
        }
    }
    out
}

/// Upper-cases a single-character key code under `locale`.
///
/// Codes that are not printable ordinals, or whose upper-case form is not a
/// single character (e.g. `ß`), are returned unchanged.
pub fn uppercase_code(locale: &LanguageIdentifier, code: i32) -> i32 {
    let Some(c) = crate::key::code::as_char(code) else {
        return code;
    };

    let upper = uppercase(locale, c.encode_utf8(&mut [0; 4]));
    let mut chars = upper.chars();
    match (chars.next(), chars.next()) {
        (Some(u), None) => u as i32,
        _ => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langid(tag: &str) -> LanguageIdentifier {
        tag.parse().expect("valid tag")
    }

    /// Test 1: Default mapping for ordinary locales
    #[test]
    fn test_default_case_mapping() {
        let en = langid("en-US");
        assert_eq!(lowercase(&en, "Hello"), "hello");
        assert_eq!(uppercase(&en, "straße"), "STRASSE");
        assert_eq!(lowercase(&en, "I"), "i");
    }

    /// Test 2: Turkish dotted and dotless i
    #[test]
    fn test_turkish_case_mapping() {
        let tr = langid("tr-TR");
        assert_eq!(lowercase(&tr, "I"), "ı");
        assert_eq!(lowercase(&tr, "İ"), "i");
        assert_eq!(uppercase(&tr, "i"), "İ");
        assert_eq!(uppercase(&tr, "ı"), "I");
        assert_eq!(lowercase(&tr, "ABC"), "abc");

        let az = langid("az");
        assert_eq!(lowercase(&az, "I"), "ı");
    }

    /// Test 3: Code upper-casing
    #[test]
    fn test_uppercase_code() {
        let en = langid("en");
        assert_eq!(uppercase_code(&en, 'a' as i32), 'A' as i32);
        assert_eq!(uppercase_code(&en, 'ß' as i32), 'ß' as i32);
        assert_eq!(uppercase_code(&en, crate::key::code::SHIFT), crate::key::code::SHIFT);

        let tr = langid("tr");
        assert_eq!(uppercase_code(&tr, 'i' as i32), 'İ' as i32);
    }

    /// Test 4: Subtype construction from tags
    #[test]
    fn test_subtype_from_tag() {
        let subtype = Subtype::from_tag(1, "de-CH", "qwertz").expect("valid subtype");
        assert_eq!(subtype.locale.language.as_str(), "de");
        assert_eq!(subtype.layout, "qwertz");
        assert_eq!(subtype.lowercase("Ä"), "ä");

        let err = Subtype::from_tag(2, "not a tag!", "qwerty").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLocale { .. }));
    }
}
