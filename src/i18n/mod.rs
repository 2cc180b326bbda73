//! Internationalization (i18n) building blocks for multi-language surveys.
//!
//! # Architecture
//!
//! - `language`: `LanguageRef` keys and the languages configured on a product
//! - `registry`: ISO 639-1 table used to detect alias collisions
//! - `strings`: Localized strings and the per-field translation rules
//! - `validator`: Language-set validation before a save
//!
//! # Example
//!
//! ```rust,ignore
//! use survey_i18n::i18n::{create_i18n_string, LanguageRef};
//!
//! let headline = create_i18n_string("How was it?", &[LanguageRef::code("de")], None);
//! assert_eq!(headline.get(&LanguageRef::Default), "How was it?");
//! assert_eq!(headline.get(&LanguageRef::code("de")), "");
//! ```

mod language;
mod registry;
mod strings;
mod validator;

pub use language::{extract_language_codes, LanguageRef, SurveyLanguage};
pub use registry::{IsoLanguage, LanguageRegistry};
pub use strings::{
    create_i18n_string, get_localized_value, is_label_valid_for_all_languages, I18nString,
    Translatable, TranslatableText,
};
pub use validator::{validate_languages, LanguageValidationError, LanguageValidator};
