use crate::error::{Error, Result as CrateResult};
use crate::i18n::{validate_languages, LanguageRef, SurveyLanguage};
use crate::migration::MigrationConfig;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Survey export
    pub surveys_file: String,
    pub output_file: String,

    // Languages
    pub languages: Vec<SurveyLanguage>,
    pub target_language: LanguageRef,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let surveys_file = std::env::var("SURVEYS_FILE").context("SURVEYS_FILE not set")?;

        Ok(Self {
            output_file: std::env::var("SURVEYS_OUTPUT_FILE")
                .unwrap_or_else(|_| surveys_file.clone()),
            surveys_file,

            languages: parse_languages(
                &std::env::var("SURVEY_LANGUAGES").unwrap_or_else(|_| "en".to_string()),
                std::env::var("SURVEY_DEFAULT_LANGUAGE").ok().as_deref(),
            ),
            target_language: std::env::var("SURVEY_TARGET_LANGUAGE")
                .map(LanguageRef::from)
                .unwrap_or(LanguageRef::Default),
        })
    }

    /// Build the migration settings, rejecting an invalid language set.
    pub fn migration(&self) -> CrateResult<MigrationConfig> {
        validate_languages(&self.languages)
            .map_err(|e| Error::Config(format!("SURVEY_LANGUAGES: {}", e)))?;

        Ok(MigrationConfig {
            languages: self.languages.clone(),
            target: Some(self.target_language.clone()),
        })
    }
}

/// Parse a comma-separated language list such as `en,de:german,fr`.
///
/// Each entry is a code with an optional `:alias`. The entry whose code
/// equals `default_code` is marked default; without one, the first entry is.
fn parse_languages(raw: &str, default_code: Option<&str>) -> Vec<SurveyLanguage> {
    let mut languages: Vec<SurveyLanguage> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((code, alias)) => SurveyLanguage::new(code.trim()).with_alias(alias.trim()),
            None => SurveyLanguage::new(entry),
        })
        .collect();

    let default_index = match default_code {
        Some(code) => languages.iter().position(|language| language.code == code.trim()),
        None => Some(0),
    };
    if let Some(language) = default_index.and_then(|i| languages.get_mut(i)) {
        language.default = true;
    }

    languages
}
