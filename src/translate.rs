//! Forward translation: legacy or mixed surveys into multi-language surveys.
//!
//! Every translatable field is run through [`Translatable::to_i18n`] against
//! the survey's language keys. Optional fields that are absent stay absent.

use crate::error::{Error, Result};
use crate::i18n::{
    extract_language_codes, I18nString, LanguageRef, SurveyLanguage, Translatable,
};
use crate::raw::{overlay_survey, survey_id};
use crate::survey::{
    Choice, LocalizedSurvey, MixedSurvey, Question, QuestionKind, Survey, ThankYouCard,
    WelcomeCard,
};
use serde::Deserialize;
use tracing::debug;

/// Field-level context shared by all translate functions.
struct Translator<'a> {
    languages: &'a [LanguageRef],
    target: &'a LanguageRef,
}

impl Translator<'_> {
    fn text<T: Translatable>(&self, text: &T) -> I18nString {
        text.to_i18n(self.languages, self.target)
    }

    fn optional<T: Translatable>(&self, text: &Option<T>) -> Option<I18nString> {
        text.as_ref().map(|text| self.text(text))
    }
}

/// Translate a single answer choice.
pub fn translate_choice<T: Translatable>(
    choice: &Choice<T>,
    languages: &[LanguageRef],
    target: Option<&LanguageRef>,
) -> Choice<I18nString> {
    let translator = Translator {
        languages,
        target: target.unwrap_or(&LanguageRef::Default),
    };
    translator.choice(choice)
}

/// Translate a single question, including its type-specific fields.
pub fn translate_question<T: Translatable>(
    question: &Question<T>,
    languages: &[LanguageRef],
    target: Option<&LanguageRef>,
) -> Question<I18nString> {
    let translator = Translator {
        languages,
        target: target.unwrap_or(&LanguageRef::Default),
    };
    translator.question(question)
}

pub fn translate_welcome_card<T: Translatable>(
    card: &WelcomeCard<T>,
    languages: &[LanguageRef],
    target: Option<&LanguageRef>,
) -> WelcomeCard<I18nString> {
    let translator = Translator {
        languages,
        target: target.unwrap_or(&LanguageRef::Default),
    };
    translator.welcome_card(card)
}

pub fn translate_thank_you_card<T: Translatable>(
    card: &ThankYouCard<T>,
    languages: &[LanguageRef],
    target: Option<&LanguageRef>,
) -> ThankYouCard<I18nString> {
    let translator = Translator {
        languages,
        target: target.unwrap_or(&LanguageRef::Default),
    };
    translator.thank_you_card(card)
}

/// Translate a whole survey into its multi-language shape.
///
/// `languages` are the languages configured for the survey; the one marked
/// default is stored under the `"default"` key. Plain text is placed under
/// `target` (or `"default"` when `None`). The input is left untouched and
/// the result shares no data with it.
pub fn translate_survey<T: Translatable>(
    survey: &Survey<T>,
    languages: &[SurveyLanguage],
    target: Option<&LanguageRef>,
) -> LocalizedSurvey {
    let codes = extract_language_codes(languages);
    let translator = Translator {
        languages: &codes,
        target: target.unwrap_or(&LanguageRef::Default),
    };

    debug!(
        "Translating survey {} ({} questions) into {:?}, target {}",
        survey.id,
        survey.questions.len(),
        codes,
        translator.target
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
            .map(|question| translator.question(question))
            .collect(),
        welcome_card: translator.welcome_card(&survey.welcome_card),
        thank_you_card: translator.thank_you_card(&survey.thank_you_card),
    }
}

/// Translate a survey given as raw JSON.
///
/// Each translatable field may be a string or an object of strings. Any
/// other shape fails the whole survey with [`Error::MalformedSurvey`].
/// Keys outside the survey model are copied through unchanged.
pub fn translate_survey_value(
    survey: &serde_json::Value,
    languages: &[SurveyLanguage],
    target: Option<&LanguageRef>,
) -> Result<serde_json::Value> {
    let parsed = MixedSurvey::deserialize(survey).map_err(|source| Error::MalformedSurvey {
        id: survey_id(survey),
        source,
    })?;
    let translated = translate_survey(&parsed, languages, target);
    Ok(overlay_survey(survey, serde_json::to_value(&translated)?))
}

impl Translator<'_> {
    fn choice<T: Translatable>(&self, choice: &Choice<T>) -> Choice<I18nString> {
        Choice {
            id: choice.id.clone(),
            label: self.text(&choice.label),
        }
    }

    fn choices<T: Translatable>(&self, choices: &[Choice<T>]) -> Vec<Choice<I18nString>> {
        choices.iter().map(|choice| self.choice(choice)).collect()
    }

    fn question<T: Translatable>(&self, question: &Question<T>) -> Question<I18nString> {
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

    fn welcome_card<T: Translatable>(&self, card: &WelcomeCard<T>) -> WelcomeCard<I18nString> {
        WelcomeCard {
            enabled: card.enabled,
            headline: self.text(&card.headline),
            html: self.optional(&card.html),
            button_label: self.optional(&card.button_label),
            file_url: card.file_url.clone(),
            time_to_finish: card.time_to_finish,
        }
    }

    fn thank_you_card<T: Translatable>(&self, card: &ThankYouCard<T>) -> ThankYouCard<I18nString> {
        ThankYouCard {
            enabled: card.enabled,
            headline: self.optional(&card.headline),
            subheader: self.optional(&card.subheader),
            button_label: self.optional(&card.button_label),
            button_link: card.button_link.clone(),
        }
    }
}
