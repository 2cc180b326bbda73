//! Survey object graph.
//!
//! All types are generic over `T`, the type of a translatable field:
//!
//! - [`LegacySurvey`]: `T = String`, one language per survey
//! - [`LocalizedSurvey`]: `T = I18nString`, text keyed by language
//! - [`MixedSurvey`]: `T = TranslatableText`, either shape per field
//!
//! JSON field names follow the camelCase survey format, and questions carry
//! their variant in a `"type"` tag.

use crate::i18n::{I18nString, LanguageRef, TranslatableText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type LegacySurvey = Survey<String>;
pub type LocalizedSurvey = Survey<I18nString>;
pub type MixedSurvey = Survey<TranslatableText>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey<T> {
    pub id: String,
    pub name: String,

    #[serde(rename = "type", default)]
    pub survey_type: SurveyType,

    #[serde(default)]
    pub status: SurveyStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub questions: Vec<Question<T>>,
    pub welcome_card: WelcomeCard<T>,
    pub thank_you_card: ThankYouCard<T>,
}

impl LocalizedSurvey {
    /// Check if the survey has text in `language`.
    ///
    /// Only the first question's headline is inspected; a survey without
    /// questions is never available.
    pub fn is_available_in(&self, language: &LanguageRef) -> bool {
        self.questions
            .first()
            .map(|question| !question.headline.get(language).is_empty())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurveyType {
    Email,
    #[default]
    Link,
    Mobile,
    Web,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurveyStatus {
    #[default]
    Draft,
    Scheduled,
    InProgress,
    Paused,
    Completed,
}

/// A single survey question.
///
/// Fields shared by every question type live here; type-specific fields
/// live in [`QuestionKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question<T> {
    pub id: String,

    pub headline: T,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheader: Option<T>,

    #[serde(default)]
    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_button_label: Option<T>,

    /// Branching rules; never translated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logic: Option<serde_json::Value>,

    #[serde(flatten)]
    pub kind: QuestionKind<T>,
}

impl<T> Question<T> {
    /// Get the wire name of this question's type
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum QuestionKind<T> {
    OpenText {
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<T>,
        #[serde(default)]
        input_type: OpenTextInputType,
        #[serde(default)]
        long_answer: bool,
    },
    MultipleChoiceSingle {
        choices: Vec<Choice<T>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        other_option_placeholder: Option<T>,
        #[serde(default)]
        shuffle_option: ShuffleOption,
    },
    MultipleChoiceMulti {
        choices: Vec<Choice<T>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        other_option_placeholder: Option<T>,
        #[serde(default)]
        shuffle_option: ShuffleOption,
    },
    Nps {
        #[serde(skip_serializing_if = "Option::is_none")]
        lower_label: Option<T>,
        #[serde(skip_serializing_if = "Option::is_none")]
        upper_label: Option<T>,
        #[serde(default)]
        is_color_coded: bool,
    },
    Rating {
        #[serde(default)]
        scale: RatingScale,
        #[serde(default = "default_rating_range")]
        range: u8,
        #[serde(skip_serializing_if = "Option::is_none")]
        lower_label: Option<T>,
        #[serde(skip_serializing_if = "Option::is_none")]
        upper_label: Option<T>,
    },
    Cta {
        #[serde(skip_serializing_if = "Option::is_none")]
        html: Option<T>,
        #[serde(skip_serializing_if = "Option::is_none")]
        dismiss_button_label: Option<T>,
        #[serde(skip_serializing_if = "Option::is_none")]
        button_url: Option<String>,
        #[serde(default)]
        button_external: bool,
    },
    Consent {
        #[serde(skip_serializing_if = "Option::is_none")]
        html: Option<T>,
        label: T,
    },
}

impl<T> QuestionKind<T> {
    pub fn type_name(&self) -> &'static str {
        match self {
            QuestionKind::OpenText { .. } => "openText",
            QuestionKind::MultipleChoiceSingle { .. } => "multipleChoiceSingle",
            QuestionKind::MultipleChoiceMulti { .. } => "multipleChoiceMulti",
            QuestionKind::Nps { .. } => "nps",
            QuestionKind::Rating { .. } => "rating",
            QuestionKind::Cta { .. } => "cta",
            QuestionKind::Consent { .. } => "consent",
        }
    }
}

fn default_rating_range() -> u8 {
    5
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpenTextInputType {
    #[default]
    Text,
    Email,
    Url,
    Number,
    Phone,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShuffleOption {
    #[default]
    None,
    All,
    ExceptLast,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RatingScale {
    #[default]
    Number,
    Smiley,
    Star,
}

/// An answer option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice<T> {
    pub id: String,
    pub label: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeCard<T> {
    #[serde(default)]
    pub enabled: bool,

    pub headline: T,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    #[serde(default)]
    pub time_to_finish: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThankYouCard<T> {
    #[serde(default)]
    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheader: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
}
