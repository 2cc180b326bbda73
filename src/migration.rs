//! One-shot data migration of stored surveys to the multi-language shape.
//!
//! The migration walks every survey in a [`SurveyStore`], translates the
//! ones that are still legacy-shaped and writes them back. A survey that
//! cannot be translated or written is logged and left as it was; the rest
//! of the batch continues. All writes are committed once at the end.

use crate::error::{Error, Result};
use crate::i18n::{LanguageRef, SurveyLanguage};
use crate::raw::survey_id;
use crate::translate::translate_survey_value;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Storage the migration reads surveys from and writes them back to.
#[allow(async_fn_in_trait)]
pub trait SurveyStore {
    /// Load every survey as raw JSON
    async fn fetch_surveys(&mut self) -> Result<Vec<Value>>;

    /// Replace the survey with the given id
    async fn update_survey(&mut self, id: &str, survey: Value) -> Result<()>;

    /// Make all updates since the last commit durable
    async fn commit(&mut self) -> Result<()>;
}

/// Languages and target used when translating legacy surveys.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationConfig {
    pub languages: Vec<SurveyLanguage>,
    pub target: Option<LanguageRef>,
}

impl Default for MigrationConfig {
    /// A single default language; legacy text lands under `"default"`.
    fn default() -> Self {
        Self {
            languages: vec![SurveyLanguage::new("en").as_default()],
            target: None,
        }
    }
}

/// Outcome of a migration run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Ids of surveys that were translated and written
    pub translated: Vec<String>,

    /// Ids of surveys that were already localized or had no questions
    pub skipped: Vec<String>,

    /// Ids of surveys left untouched because of an error
    pub failed: Vec<String>,
}

impl MigrationReport {
    /// Total number of surveys seen
    pub fn total(&self) -> usize {
        self.translated.len() + self.skipped.len() + self.failed.len()
    }

    /// Check if any survey failed
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Check if a raw survey still uses plain-string fields.
///
/// Only the first question's headline is inspected.
pub fn is_legacy_survey(survey: &Value) -> bool {
    survey
        .get("questions")
        .and_then(Value::as_array)
        .and_then(|questions| questions.first())
        .and_then(|question| question.get("headline"))
        .map(Value::is_string)
        .unwrap_or(false)
}

/// Translate every legacy survey in `store`.
pub async fn migrate_surveys<S: SurveyStore>(
    store: &mut S,
    config: &MigrationConfig,
) -> Result<MigrationReport> {
    let surveys = store.fetch_surveys().await?;
    info!("Loaded {} surveys for migration", surveys.len());

    let mut report = MigrationReport::default();

    for survey in surveys {
        let id = survey_id(&survey);

        if !is_legacy_survey(&survey) {
            debug!("Skipping survey {}: already localized or empty", id);
            report.skipped.push(id);
            continue;
        }

        let translated =
            match translate_survey_value(&survey, &config.languages, config.target.as_ref()) {
                Ok(translated) => translated,
                Err(e) => {
                    warn!("Failed to translate survey {}: {}", id, e);
                    report.failed.push(id);
                    continue;
                }
            };

        match store.update_survey(&id, translated).await {
            Ok(()) => {
                debug!("Translated survey {}", id);
                report.translated.push(id);
            }
            Err(e) => {
                warn!("Failed to write survey {}: {}", id, e);
                report.failed.push(id);
            }
        }
    }

    store.commit().await?;

    info!(
        "Migration finished: {} translated, {} skipped, {} failed",
        report.translated.len(),
        report.skipped.len(),
        report.failed.len()
    );

    Ok(report)
}

/// In-memory store, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemorySurveyStore {
    surveys: Vec<Value>,
    commits: usize,
}

impl MemorySurveyStore {
    pub fn new(surveys: Vec<Value>) -> Self {
        Self {
            surveys,
            commits: 0,
        }
    }

    pub fn surveys(&self) -> &[Value] {
        &self.surveys
    }

    /// Number of times `commit` was called
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl SurveyStore for MemorySurveyStore {
    async fn fetch_surveys(&mut self) -> Result<Vec<Value>> {
        Ok(self.surveys.clone())
    }

    async fn update_survey(&mut self, id: &str, survey: Value) -> Result<()> {
        replace_by_id(&mut self.surveys, id, survey)
    }

    async fn commit(&mut self) -> Result<()> {
        self.commits += 1;
        Ok(())
    }
}

/// Store backed by a JSON file holding an array of surveys.
///
/// Updates are buffered and written on `commit`, first to a temporary file
/// next to the output and then renamed over it.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    input: PathBuf,
    output: PathBuf,
    surveys: Option<Vec<Value>>,
}

impl JsonFileStore {
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            surveys: None,
        }
    }

    /// Read and write the same file
    pub fn in_place(path: impl AsRef<Path>) -> Self {
        Self::new(path.as_ref(), path.as_ref())
    }

    async fn load(&mut self) -> Result<&mut Vec<Value>> {
        if self.surveys.is_none() {
            let content = tokio::fs::read_to_string(&self.input).await?;
            let surveys: Vec<Value> = serde_json::from_str(&content)?;
            self.surveys = Some(surveys);
        }

        self.surveys
            .as_mut()
            .ok_or_else(|| Error::Store("survey file not loaded".to_string()))
    }
}

impl SurveyStore for JsonFileStore {
    async fn fetch_surveys(&mut self) -> Result<Vec<Value>> {
        Ok(self.load().await?.clone())
    }

    async fn update_survey(&mut self, id: &str, survey: Value) -> Result<()> {
        let surveys = self.load().await?;
        replace_by_id(surveys, id, survey)
    }

    async fn commit(&mut self) -> Result<()> {
        let Some(surveys) = self.surveys.as_ref() else {
            return Ok(());
        };

        let content = serde_json::to_string_pretty(surveys)?;
        let tmp = self.output.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.output).await?;

        info!("Wrote {} surveys to {}", surveys.len(), self.output.display());
        Ok(())
    }
}

fn replace_by_id(surveys: &mut [Value], id: &str, survey: Value) -> Result<()> {
    let slot = surveys
        .iter_mut()
        .find(|existing| existing.get("id").and_then(Value::as_str) == Some(id))
        .ok_or_else(|| Error::Store(format!("no survey with id '{}'", id)))?;
    *slot = survey;
    Ok(())
}
