//! Language-set validation.
//!
//! Checks a user-edited list of configured languages before it is saved.
//! The validator only reports; it never modifies the list.

use crate::i18n::{LanguageRef, LanguageRegistry, SurveyLanguage};
use std::collections::HashSet;
use thiserror::Error;

/// Reason a language set was rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageValidationError {
    #[error("Please select a Language")]
    EmptyCode,

    #[error("\"default\" is reserved and cannot be used as a language identifier")]
    ReservedCode,

    #[error("Duplicate language or language ID")]
    Duplicate,

    #[error(
        "There is a conflict between the identifier of an added language and one for your aliases. \
         Aliases and identifiers cannot be identical."
    )]
    AliasMatchesCode { alias: String },

    #[error(
        "There is a conflict between the selected alias and another language that has this identifier. \
         Please add the language with this identifier to your product instead to avoid inconsistencies."
    )]
    AliasShadowsIsoCode { alias: String },
}

/// Validator for configured language sets.
pub struct LanguageValidator;

impl LanguageValidator {
    /// Validate a language set.
    ///
    /// Rules are checked in order and the first failure is returned:
    /// 1. every code is non-empty after trimming and is not `"default"`
    /// 2. no two aliases and no two codes are equal (case-insensitive)
    /// 3. no alias equals a code of the set
    /// 4. no alias equals an ISO 639-1 code that is not part of the set
    pub fn validate(languages: &[SurveyLanguage]) -> Result<(), LanguageValidationError> {
        let codes: Vec<String> = languages
            .iter()
            .map(|language| normalize(&language.code))
            .collect();
        let aliases: Vec<String> = languages
            .iter()
            .filter_map(|language| language.alias.as_deref())
            .filter(|alias| !alias.is_empty())
            .map(normalize)
            .collect();

        if codes.iter().any(String::is_empty) {
            return Err(LanguageValidationError::EmptyCode);
        }

        if codes.iter().any(|code| code == LanguageRef::DEFAULT_KEY) {
            return Err(LanguageValidationError::ReservedCode);
        }

        if has_duplicates(&aliases) || has_duplicates(&codes) {
            return Err(LanguageValidationError::Duplicate);
        }

        if let Some(alias) = aliases.iter().find(|alias| codes.contains(alias)) {
            return Err(LanguageValidationError::AliasMatchesCode {
                alias: alias.clone(),
            });
        }

        let registry = LanguageRegistry::get();
        for alias in &aliases {
            if registry.is_iso_code(alias) && !codes.contains(alias) {
                return Err(LanguageValidationError::AliasShadowsIsoCode {
                    alias: alias.clone(),
                });
            }
        }

        Ok(())
    }

    /// Check if a language set passes validation
    pub fn is_valid(languages: &[SurveyLanguage]) -> bool {
        Self::validate(languages).is_ok()
    }
}

/// Validate a language set. See [`LanguageValidator::validate`].
pub fn validate_languages(languages: &[SurveyLanguage]) -> Result<(), LanguageValidationError> {
    LanguageValidator::validate(languages)
}

fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

fn has_duplicates(values: &[String]) -> bool {
    let unique: HashSet<&String> = values.iter().collect();
    unique.len() != values.len()
}
