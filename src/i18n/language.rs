//! Language references and configured survey languages.
//!
//! A survey's translatable fields are keyed by `LanguageRef`. The language
//! marked as default on a product is not stored under its own code but under
//! the `"default"` key, which is modelled here as a dedicated variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a single entry in a localized string.
///
/// Serialized as a plain string: `Default` becomes `"default"`, `Code(c)`
/// becomes `c`. The code `"default"` is reserved: `code` and `From` map it
/// to `Default`, and [`validate_languages`](crate::i18n::validate_languages)
/// rejects it in a language set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageRef {
    /// The product's default language (no specific code configured)
    Default,

    /// A configured language code (e.g., "en", "de")
    Code(String),
}

impl LanguageRef {
    /// Wire representation of [`LanguageRef::Default`].
    pub const DEFAULT_KEY: &'static str = "default";

    /// Create a reference to a specific language code.
    pub fn code(code: impl Into<String>) -> Self {
        LanguageRef::from(code.into())
    }

    /// Get the key as it appears in serialized surveys.
    pub fn as_str(&self) -> &str {
        match self {
            LanguageRef::Default => Self::DEFAULT_KEY,
            LanguageRef::Code(code) => code,
        }
    }

    /// Check if this is the default-language key.
    pub fn is_default(&self) -> bool {
        matches!(self, LanguageRef::Default)
    }
}

impl From<String> for LanguageRef {
    fn from(value: String) -> Self {
        if value == Self::DEFAULT_KEY {
            LanguageRef::Default
        } else {
            LanguageRef::Code(value)
        }
    }
}

impl From<&str> for LanguageRef {
    fn from(value: &str) -> Self {
        LanguageRef::from(value.to_string())
    }
}

impl From<LanguageRef> for String {
    fn from(value: LanguageRef) -> Self {
        match value {
            LanguageRef::Default => LanguageRef::DEFAULT_KEY.to_string(),
            LanguageRef::Code(code) => code,
        }
    }
}

impl fmt::Display for LanguageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A language configured on the product a survey belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyLanguage {
    /// Language identifier, usually an ISO 639-1 code (e.g., "en")
    pub code: String,

    /// Alternate identifier used by link surveys and the SDK
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Whether this is the product's default language
    #[serde(default)]
    pub default: bool,
}

impl SurveyLanguage {
    /// Create a non-default language without an alias.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            alias: None,
            default: false,
        }
    }

    /// Set the alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Mark this language as the default one
    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// Get the key this language's text is stored under.
    pub fn key(&self) -> LanguageRef {
        if self.default {
            LanguageRef::Default
        } else {
            LanguageRef::code(self.code.as_str())
        }
    }
}

/// Derive the ordered list of localized-string keys from configured languages.
///
/// The language flagged as default maps to [`LanguageRef::Default`]; every
/// other language maps to its code. Order is preserved.
pub fn extract_language_codes(languages: &[SurveyLanguage]) -> Vec<LanguageRef> {
    languages.iter().map(SurveyLanguage::key).collect()
}
