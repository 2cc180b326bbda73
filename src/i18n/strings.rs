//! Localized strings and the field-level translation rules.
//!
//! Every translatable survey field is either a plain string (legacy surveys)
//! or an [`I18nString`] keyed by language. [`Translatable`] turns either
//! shape into an `I18nString` reconciled against a language set.

use crate::i18n::LanguageRef;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// A mapping from language key to display text.
///
/// Absent keys read back as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct I18nString(BTreeMap<LanguageRef, String>);

impl I18nString {
    /// Create an empty localized string
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Create a localized string with a single entry
    pub fn single(language: LanguageRef, text: impl Into<String>) -> Self {
        let mut i18n = Self::new();
        i18n.insert(language, text);
        i18n
    }

    /// Get the text for `language`, or `""` if there is no entry.
    pub fn get(&self, language: &LanguageRef) -> &str {
        self.0.get(language).map(String::as_str).unwrap_or("")
    }

    /// Insert or replace the text for `language`
    pub fn insert(&mut self, language: LanguageRef, text: impl Into<String>) {
        self.0.insert(language, text.into());
    }

    /// Remove the entry for `language`, returning its text
    pub fn remove(&mut self, language: &LanguageRef) -> Option<String> {
        self.0.remove(language)
    }

    pub fn contains(&self, language: &LanguageRef) -> bool {
        self.0.contains_key(language)
    }

    pub fn keys(&self) -> impl Iterator<Item = &LanguageRef> {
        self.0.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, LanguageRef, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(LanguageRef, String)> for I18nString {
    fn from_iter<I: IntoIterator<Item = (LanguageRef, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a I18nString {
    type Item = (&'a LanguageRef, &'a String);
    type IntoIter = btree_map::Iter<'a, LanguageRef, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A translatable field whose shape is only known at runtime.
///
/// A JSON string deserializes as `Plain`, a JSON object of strings as
/// `Localized`. Anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslatableText {
    /// Legacy single-language text
    Plain(String),

    /// Text keyed by language
    Localized(I18nString),
}

impl From<String> for TranslatableText {
    fn from(value: String) -> Self {
        TranslatableText::Plain(value)
    }
}

impl From<&str> for TranslatableText {
    fn from(value: &str) -> Self {
        TranslatableText::Plain(value.to_string())
    }
}

impl From<I18nString> for TranslatableText {
    fn from(value: I18nString) -> Self {
        TranslatableText::Localized(value)
    }
}

/// A field value that can be turned into an [`I18nString`].
pub trait Translatable {
    /// Build a localized string covering `languages`.
    ///
    /// `target` is the key that receives plain text and is never dropped
    /// from an already-localized value.
    fn to_i18n(&self, languages: &[LanguageRef], target: &LanguageRef) -> I18nString;
}

impl Translatable for str {
    fn to_i18n(&self, languages: &[LanguageRef], target: &LanguageRef) -> I18nString {
        let mut i18n = I18nString::single(target.clone(), self);
        for language in languages {
            if language != target {
                i18n.insert(language.clone(), "");
            }
        }
        i18n
    }
}

impl Translatable for String {
    fn to_i18n(&self, languages: &[LanguageRef], target: &LanguageRef) -> I18nString {
        self.as_str().to_i18n(languages, target)
    }
}

impl Translatable for I18nString {
    fn to_i18n(&self, languages: &[LanguageRef], target: &LanguageRef) -> I18nString {
        let mut i18n = self.clone();

        for language in languages {
            if !i18n.contains(language) {
                i18n.insert(language.clone(), "");
            }
        }

        i18n.0.retain(|key, _| key == target || languages.contains(key));

        i18n
    }
}

impl Translatable for TranslatableText {
    fn to_i18n(&self, languages: &[LanguageRef], target: &LanguageRef) -> I18nString {
        match self {
            TranslatableText::Plain(text) => text.to_i18n(languages, target),
            TranslatableText::Localized(i18n) => i18n.to_i18n(languages, target),
        }
    }
}

/// Create a localized string from either field shape.
///
/// `target` defaults to [`LanguageRef::Default`].
pub fn create_i18n_string<T>(
    text: &T,
    languages: &[LanguageRef],
    target: Option<&LanguageRef>,
) -> I18nString
where
    T: Translatable + ?Sized,
{
    text.to_i18n(languages, target.unwrap_or(&LanguageRef::Default))
}

/// Read the text for `language` from an optional localized string.
pub fn get_localized_value(value: Option<&I18nString>, language: &LanguageRef) -> String {
    value
        .map(|i18n| i18n.get(language).to_string())
        .unwrap_or_default()
}

/// Check that every language in `languages` has non-blank text.
pub fn is_label_valid_for_all_languages(label: &I18nString, languages: &[LanguageRef]) -> bool {
    languages
        .iter()
        .all(|language| !label.get(language).trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> LanguageRef {
        LanguageRef::code("en")
    }

    fn de() -> LanguageRef {
        LanguageRef::code("de")
    }

    fn fr() -> LanguageRef {
        LanguageRef::code("fr")
    }

    // ==================== I18nString Tests ====================

    #[test]
    fn test_get_missing_key_is_empty() {
        let i18n = I18nString::single(en(), "Hello");
        assert_eq!(i18n.get(&en()), "Hello");
        assert_eq!(i18n.get(&de()), "");
    }

    #[test]
    fn test_json_shape() {
        let i18n: I18nString = [
            (LanguageRef::Default, "Hi".to_string()),
            (de(), "Hallo".to_string()),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_value(&i18n).expect("serialize");
        assert_eq!(json, serde_json::json!({"default": "Hi", "de": "Hallo"}));
    }

    // ==================== TranslatableText Tests ====================

    #[test]
    fn test_translatable_text_from_json_string() {
        let text: TranslatableText = serde_json::from_str(r#""Hello""#).expect("parse");
        assert_eq!(text, TranslatableText::Plain("Hello".to_string()));
    }

    #[test]
    fn test_translatable_text_from_json_object() {
        let text: TranslatableText =
            serde_json::from_str(r#"{"default":"Hello","de":"Hallo"}"#).expect("parse");
        match text {
            TranslatableText::Localized(i18n) => {
                assert_eq!(i18n.get(&LanguageRef::Default), "Hello");
                assert_eq!(i18n.get(&de()), "Hallo");
            }
            other => panic!("expected localized text, got {:?}", other),
        }
    }

    #[test]
    fn test_translatable_text_rejects_other_shapes() {
        assert!(serde_json::from_str::<TranslatableText>("42").is_err());
        assert!(serde_json::from_str::<TranslatableText>(r#"["a"]"#).is_err());
        assert!(serde_json::from_str::<TranslatableText>(r#"{"en": 1}"#).is_err());
    }

    // ==================== Plain Text Rule Tests ====================

    #[test]
    fn test_plain_without_languages_uses_default_key() {
        let i18n = create_i18n_string("Hello", &[], None);
        assert_eq!(i18n.len(), 1);
        assert_eq!(i18n.get(&LanguageRef::Default), "Hello");
    }

    #[test]
    fn test_plain_with_target_and_languages() {
        let i18n = create_i18n_string("Hello", &[en(), de()], Some(&en()));
        assert_eq!(i18n.len(), 2);
        assert_eq!(i18n.get(&en()), "Hello");
        assert!(i18n.contains(&de()));
        assert_eq!(i18n.get(&de()), "");
    }

    #[test]
    fn test_plain_target_outside_languages_is_kept() {
        let i18n = create_i18n_string("Hello", &[LanguageRef::Default], Some(&en()));
        assert_eq!(i18n.get(&en()), "Hello");
        assert!(i18n.contains(&LanguageRef::Default));
        assert_eq!(i18n.get(&LanguageRef::Default), "");
    }

    // ==================== Localized Text Rule Tests ====================

    #[test]
    fn test_localized_adds_missing_languages() {
        let input = I18nString::single(LanguageRef::Default, "Hello");
        let i18n = create_i18n_string(&input, &[LanguageRef::Default, de()], None);
        assert_eq!(i18n.get(&LanguageRef::Default), "Hello");
        assert!(i18n.contains(&de()));
        assert_eq!(i18n.get(&de()), "");
    }

    #[test]
    fn test_localized_drops_removed_languages() {
        let input: I18nString = [
            (LanguageRef::Default, "Hello".to_string()),
            (de(), "Hallo".to_string()),
            (fr(), "Bonjour".to_string()),
        ]
        .into_iter()
        .collect();

        let i18n = create_i18n_string(&input, &[de()], None);

        assert_eq!(i18n.len(), 2);
        assert_eq!(i18n.get(&LanguageRef::Default), "Hello");
        assert_eq!(i18n.get(&de()), "Hallo");
        assert!(!i18n.contains(&fr()));
    }

    #[test]
    fn test_localized_does_not_touch_input() {
        let input = I18nString::single(fr(), "Bonjour");
        let _ = create_i18n_string(&input, &[de()], None);
        assert_eq!(input, I18nString::single(fr(), "Bonjour"));
    }

    #[test]
    fn test_translatable_text_dispatches_on_shape() {
        let plain = TranslatableText::from("Hello");
        let localized = TranslatableText::from(I18nString::single(de(), "Hallo"));

        let from_plain = create_i18n_string(&plain, &[de()], None);
        assert_eq!(from_plain.get(&LanguageRef::Default), "Hello");

        let from_localized = create_i18n_string(&localized, &[de()], None);
        assert_eq!(from_localized.len(), 1);
        assert_eq!(from_localized.get(&de()), "Hallo");
    }

    // ==================== Helper Tests ====================

    #[test]
    fn test_get_localized_value() {
        let i18n = I18nString::single(de(), "Hallo");
        assert_eq!(get_localized_value(Some(&i18n), &de()), "Hallo");
        assert_eq!(get_localized_value(Some(&i18n), &fr()), "");
        assert_eq!(get_localized_value(None, &de()), "");
    }

    #[test]
    fn test_is_label_valid_for_all_languages() {
        let mut label = I18nString::single(LanguageRef::Default, "Yes");
        label.insert(de(), "Ja");
        assert!(is_label_valid_for_all_languages(
            &label,
            &[LanguageRef::Default, de()]
        ));

        label.insert(fr(), "   ");
        assert!(!is_label_valid_for_all_languages(&label, &[de(), fr()]));
        assert!(!is_label_valid_for_all_languages(&label, &[en()]));
    }

    #[test]
    fn test_is_label_valid_with_no_languages() {
        assert!(is_label_valid_for_all_languages(&I18nString::new(), &[]));
    }
}
