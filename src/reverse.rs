//! Reverse translation: multi-language surveys flattened to one language.
//!
//! Used wherever a consumer only understands plain strings, such as older
//! SDKs or a respondent-facing survey fixed to one locale. A missing entry
//! becomes `""`; there is no fallback to another language.

use crate::error::{Error, Result};
use crate::i18n::{I18nString, LanguageRef};
use crate::survey::{
    Choice, LegacySurvey, LocalizedSurvey, Question, QuestionKind, Survey, ThankYouCard,
    WelcomeCard,
};
use crate::raw::{overlay_survey, survey_id};
use serde::Deserialize;
use tracing::debug;

/// Field-level context shared by all reverse functions.
struct Flattener<'a> {
    language: &'a LanguageRef,
}

impl Flattener<'_> {
    fn text(&self, text: &I18nString) -> String {
        text.get(self.language).to_string()
    }

    fn optional(&self, text: &Option<I18nString>) -> Option<String> {
        text.as_ref().map(|text| self.text(text))
    }

    fn choice(&self, choice: &Choice<I18nString>) -> Choice<String> {
        Choice {
            id: choice.id.clone(),
            label: self.text(&choice.label),
        }
    }

    fn choices(&self, choices: &[Choice<I18nString>]) -> Vec<Choice<String>> {
        choices.iter().map(|choice| self.choice(choice)).collect()
    }

    fn question(&self, question: &Question<I18nString>) -> Question<String> {
        let kind = match &question.kind {
            QuestionKind::OpenText {
                placeholder,
                input_type,
                long_answer,
            } => QuestionKind::OpenText {
                placeholder: self.optional(placeholder),
                input_type: *input_type,
                long_answer: *long_answer,
            },
            QuestionKind::MultipleChoiceSingle {
                choices,
                other_option_placeholder,
                shuffle_option,
            } => QuestionKind::MultipleChoiceSingle {
                choices: self.choices(choices),
                other_option_placeholder: self.optional(other_option_placeholder),
                shuffle_option: *shuffle_option,
            },
            QuestionKind::MultipleChoiceMulti {
                choices,
                other_option_placeholder,
                shuffle_option,
            } => QuestionKind::MultipleChoiceMulti {
                choices: self.choices(choices),
                other_option_placeholder: self.optional(other_option_placeholder),
                shuffle_option: *shuffle_option,
            },
            QuestionKind::Nps {
                lower_label,
                upper_label,
                is_color_coded,
            } => QuestionKind::Nps {
                lower_label: self.optional(lower_label),
                upper_label: self.optional(upper_label),
                is_color_coded: *is_color_coded,
            },
            QuestionKind::Rating {
                scale,
                range,
                lower_label,
                upper_label,
            } => QuestionKind::Rating {
                scale: *scale,
                range: *range,
                lower_label: self.optional(lower_label),
                upper_label: self.optional(upper_label),
            },
            QuestionKind::Cta {
                html,
                dismiss_button_label,
                button_url,
                button_external,
            } => QuestionKind::Cta {
                html: self.optional(html),
                dismiss_button_label: self.optional(dismiss_button_label),
                button_url: button_url.clone(),
                button_external: *button_external,
            },
            QuestionKind::Consent { html, label } => QuestionKind::Consent {
                html: self.optional(html),
                label: self.text(label),
            },
        };

        Question {
            id: question.id.clone(),
            headline: self.text(&question.headline),
            subheader: self.optional(&question.subheader),
            required: question.required,
            button_label: self.optional(&question.button_label),
            back_button_label: self.optional(&question.back_button_label),
            logic: question.logic.clone(),
            kind,
        }
    }

    fn welcome_card(&self, card: &WelcomeCard<I18nString>) -> WelcomeCard<String> {
        WelcomeCard {
            enabled: card.enabled,
            headline: self.text(&card.headline),
            html: self.optional(&card.html),
            button_label: self.optional(&card.button_label),
            file_url: card.file_url.clone(),
            time_to_finish: card.time_to_finish,
        }
    }

    fn thank_you_card(&self, card: &ThankYouCard<I18nString>) -> ThankYouCard<String> {
        ThankYouCard {
            enabled: card.enabled,
            headline: self.optional(&card.headline),
            subheader: self.optional(&card.subheader),
            button_label: self.optional(&card.button_label),
            button_link: card.button_link.clone(),
        }
    }
}

fn flattener(language: Option<&LanguageRef>) -> Flattener<'_> {
    Flattener {
        language: language.unwrap_or(&LanguageRef::Default),
    }
}

pub fn reverse_translate_choice(
    choice: &Choice<I18nString>,
    language: Option<&LanguageRef>,
) -> Choice<String> {
    flattener(language).choice(choice)
}

/// Flatten a question, including its type-specific fields, to `language`.
pub fn reverse_translate_question(
    question: &Question<I18nString>,
    language: Option<&LanguageRef>,
) -> Question<String> {
    flattener(language).question(question)
}

pub fn reverse_translate_welcome_card(
    card: &WelcomeCard<I18nString>,
    language: Option<&LanguageRef>,
) -> WelcomeCard<String> {
    flattener(language).welcome_card(card)
}

pub fn reverse_translate_thank_you_card(
    card: &ThankYouCard<I18nString>,
    language: Option<&LanguageRef>,
) -> ThankYouCard<String> {
    flattener(language).thank_you_card(card)
}

/// Flatten a multi-language survey to a single language.
///
/// `language` defaults to [`LanguageRef::Default`].
pub fn reverse_translate_survey(
    survey: &LocalizedSurvey,
    language: Option<&LanguageRef>,
) -> LegacySurvey {
    let flattener = flattener(language);

    debug!(
        "Reverse translating survey {} ({} questions) to {}",
        survey.id,
        survey.questions.len(),
        flattener.language
    );

    Survey {
        id: survey.id.clone(),
        name: survey.name.clone(),
        survey_type: survey.survey_type,
        status: survey.status,
        environment_id: survey.environment_id.clone(),
        created_at: survey.created_at,
        updated_at: survey.updated_at,
        questions: survey
            .questions
            .iter()
            .map(|question| flattener.question(question))
            .collect(),
        welcome_card: flattener.welcome_card(&survey.welcome_card),
        thank_you_card: flattener.thank_you_card(&survey.thank_you_card),
    }
}

/// Flatten a multi-language survey given as raw JSON.
///
/// Fails with [`Error::MalformedSurvey`] if any translatable field is not an
/// object of strings. Keys outside the survey model are copied through
/// unchanged.
pub fn reverse_translate_survey_value(
    survey: &serde_json::Value,
    language: Option<&LanguageRef>,
) -> Result<serde_json::Value> {
    let parsed = LocalizedSurvey::deserialize(survey).map_err(|source| Error::MalformedSurvey {
        id: survey_id(survey),
        source,
    })?;
    let reversed = reverse_translate_survey(&parsed, language);
    Ok(overlay_survey(survey, serde_json::to_value(&reversed)?))
}
