//! Migrate a JSON export of surveys to the multi-language format.
//!
//! Required environment variables:
//! - SURVEYS_FILE
//!
//! Optional:
//! - SURVEYS_OUTPUT_FILE (defaults to SURVEYS_FILE)
//! - SURVEY_LANGUAGES (defaults to "en")
//! - SURVEY_DEFAULT_LANGUAGE (defaults to the first language)
//! - SURVEY_TARGET_LANGUAGE (defaults to "default")

use anyhow::{Context, Result};
use survey_i18n::config::Config;
use survey_i18n::migration::{migrate_surveys, JsonFileStore};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("survey_i18n=info".parse()?),
        )
        .init();

    info!("Starting survey language migration");

    let config = Config::from_env()?;
    let migration = config.migration()?;

    info!(
        "Migrating {} -> {} with languages {:?}, target {}",
        config.surveys_file,
        config.output_file,
        migration
            .languages
            .iter()
            .map(|language| language.code.as_str())
            .collect::<Vec<_>>(),
        config.target_language
    );

    let mut store = JsonFileStore::new(&config.surveys_file, &config.output_file);
    let report = migrate_surveys(&mut store, &migration)
        .await
        .context("Survey migration failed")?;

    if report.has_failures() {
        warn!(
            "{} surveys were left untranslated: {:?}",
            report.failed.len(),
            report.failed
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
