//! Property-based invariant tests for survey translation.
//!
//! 1. Forward then reverse with the same target restores a legacy survey
//! 2. Growing the language set keeps existing values and adds empty entries
//! 3. Shrinking the language set keeps only the target and remaining codes
//! 4. Reverse never fails and yields "" for languages that are not present
//! 5. Translating never changes the input survey

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use survey_i18n::i18n::{create_i18n_string, I18nString, LanguageRef, SurveyLanguage};
use survey_i18n::survey::{
    Choice, LegacySurvey, OpenTextInputType, Question, QuestionKind, RatingScale, ShuffleOption,
    Survey, SurveyStatus, SurveyType, ThankYouCard, WelcomeCard,
};
use survey_i18n::{reverse_translate_survey, translate_survey};

// ── Strategies ───────────────────────────────────────────────────────

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ?!.]{0,24}"
}

fn language_code() -> impl Strategy<Value = String> {
    "[a-z]{2}"
}

fn choices() -> impl Strategy<Value = Vec<Choice<String>>> {
    prop::collection::vec(text(), 1..4).prop_map(|labels| {
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Choice {
                id: format!("choice-{}", i),
                label,
            })
            .collect()
    })
}

fn question_kind() -> impl Strategy<Value = QuestionKind<String>> {
    prop_oneof![
        (proptest::option::of(text()), any::<bool>()).prop_map(|(placeholder, long_answer)| {
            QuestionKind::OpenText {
                placeholder,
                input_type: OpenTextInputType::Text,
                long_answer,
            }
        }),
        (choices(), proptest::option::of(text())).prop_map(|(choices, other)| {
            QuestionKind::MultipleChoiceSingle {
                choices,
                other_option_placeholder: other,
                shuffle_option: ShuffleOption::None,
            }
        }),
        (choices(), proptest::option::of(text())).prop_map(|(choices, other)| {
            QuestionKind::MultipleChoiceMulti {
                choices,
                other_option_placeholder: other,
                shuffle_option: ShuffleOption::All,
            }
        }),
        (proptest::option::of(text()), proptest::option::of(text())).prop_map(
            |(lower_label, upper_label)| QuestionKind::Nps {
                lower_label,
                upper_label,
                is_color_coded: false,
            }
        ),
        (proptest::option::of(text()), proptest::option::of(text()), 3u8..=10).prop_map(
            |(lower_label, upper_label, range)| QuestionKind::Rating {
                scale: RatingScale::Number,
                range,
                lower_label,
                upper_label,
            }
        ),
        (proptest::option::of(text()), proptest::option::of(text())).prop_map(
            |(html, dismiss_button_label)| QuestionKind::Cta {
                html,
                dismiss_button_label,
                button_url: None,
                button_external: false,
            }
        ),
        (proptest::option::of(text()), text())
            .prop_map(|(html, label)| QuestionKind::Consent { html, label }),
    ]
}

fn question() -> impl Strategy<Value = Question<String>> {
    (
        text(),
        proptest::option::of(text()),
        proptest::option::of(text()),
        any::<bool>(),
        question_kind(),
    )
        .prop_map(|(headline, subheader, button_label, required, kind)| Question {
            id: "question".to_string(),
            headline,
            subheader,
            required,
            button_label,
            back_button_label: None,
            logic: None,
            kind,
        })
}

fn legacy_survey() -> impl Strategy<Value = LegacySurvey> {
    (
        prop::collection::vec(question(), 0..5),
        text(),
        proptest::option::of(text()),
        proptest::option::of(text()),
    )
        .prop_map(|(questions, welcome, html, thanks)| Survey {
            id: "survey".to_string(),
            name: "Generated".to_string(),
            survey_type: SurveyType::Link,
            status: SurveyStatus::Draft,
            environment_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            questions,
            welcome_card: WelcomeCard {
                enabled: true,
                headline: welcome,
                html,
                button_label: None,
                file_url: None,
                time_to_finish: false,
            },
            thank_you_card: ThankYouCard {
                enabled: true,
                headline: thanks,
                subheader: None,
                button_label: None,
                button_link: None,
            },
        })
}

fn languages(codes: &[String]) -> Vec<SurveyLanguage> {
    codes.iter().map(SurveyLanguage::new).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn round_trip_restores_legacy_survey(survey in legacy_survey(), target in language_code()) {
        let target = LanguageRef::code(target);
        let translated = translate_survey(&survey, &[], Some(&target));
        let reversed = reverse_translate_survey(&translated, Some(&target));
        prop_assert_eq!(reversed, survey);
    }
}

proptest! {
    #[test]
    fn round_trip_with_other_languages(
        survey in legacy_survey(),
        codes in prop::collection::btree_set(language_code(), 0..4),
    ) {
        let codes: Vec<String> = codes.into_iter().collect();
        let translated = translate_survey(&survey, &languages(&codes), None);
        let reversed = reverse_translate_survey(&translated, None);
        prop_assert_eq!(reversed, survey);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Growth keeps values
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn growth_keeps_existing_values(
        value in text(),
        existing in prop::collection::btree_map(language_code(), text(), 0..4),
        added in language_code(),
    ) {
        let input: I18nString = existing
            .iter()
            .map(|(code, text)| (LanguageRef::code(code.as_str()), text.clone()))
            .chain(std::iter::once((LanguageRef::Default, value.clone())))
            .collect();
        let mut codes: Vec<LanguageRef> = existing
            .keys()
            .map(|c| LanguageRef::code(c.as_str()))
            .collect();
        codes.push(LanguageRef::code(added.as_str()));

        let grown = create_i18n_string(&input, &codes, None);

        prop_assert_eq!(grown.get(&LanguageRef::Default), value.as_str());
        for (code, text) in &existing {
            prop_assert_eq!(grown.get(&LanguageRef::code(code.as_str())), text.as_str());
        }
        prop_assert!(grown.contains(&LanguageRef::code(added.as_str())));
        if !existing.contains_key(&added) {
            prop_assert_eq!(grown.get(&LanguageRef::code(added.as_str())), "");
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Shrink drops removed languages
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shrink_keeps_only_target_and_languages(
        entries in prop::collection::btree_map(language_code(), text(), 1..6),
        keep_count in 0usize..3,
    ) {
        let input: I18nString = entries
            .iter()
            .map(|(code, text)| (LanguageRef::code(code.as_str()), text.clone()))
            .collect();
        let kept: Vec<LanguageRef> = entries
            .keys()
            .take(keep_count)
            .map(|c| LanguageRef::code(c.as_str()))
            .collect();

        let shrunk = create_i18n_string(&input, &kept, None);

        for key in shrunk.keys() {
            prop_assert!(key.is_default() || kept.contains(key), "unexpected key {}", key);
        }
        for key in &kept {
            prop_assert_eq!(shrunk.get(key), input.get(key));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Reverse of absent language is empty
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reverse_missing_language_is_empty(survey in legacy_survey()) {
        let translated = translate_survey(&survey, &[], None);
        // Codes are two lowercase letters, so this one is never present
        let reversed = reverse_translate_survey(&translated, Some(&LanguageRef::code("xyz")));

        for question in &reversed.questions {
            prop_assert_eq!(question.headline.as_str(), "");
        }
        prop_assert_eq!(reversed.welcome_card.headline.as_str(), "");
        prop_assert_eq!(reversed.questions.len(), survey.questions.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Input is never modified
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn translate_does_not_modify_input(
        survey in legacy_survey(),
        codes in prop::collection::vec(language_code(), 0..3),
    ) {
        let snapshot = survey.clone();
        let mut translated = translate_survey(&survey, &languages(&codes), None);
        translated.questions.clear();
        translated.welcome_card.headline.insert(LanguageRef::code("zz"), "changed");
        prop_assert_eq!(survey, snapshot);
    }
}
