//! Unit tests covering survey answer resolution.

use super::*;
use crate::survey::{SurveyConfig, execute_survey};
use rstest::rstest;
use vibemap_core::{SurveyAnswers, Trait, UserProfileError};

fn full_args() -> SurveyArgs {
    SurveyArgs {
        relax: Some(5),
        activity: Some(1),
        novelty: Some(3),
        outdoor: Some(4),
        crowd_averse: Some(2),
    }
}

#[rstest]
#[case(SurveyArgs { relax: None, ..full_args() }, ARG_RELAX, ENV_SURVEY_RELAX)]
#[case(SurveyArgs { activity: None, ..full_args() }, ARG_ACTIVITY, ENV_SURVEY_ACTIVITY)]
#[case(SurveyArgs { novelty: None, ..full_args() }, ARG_NOVELTY, ENV_SURVEY_NOVELTY)]
#[case(SurveyArgs { outdoor: None, ..full_args() }, ARG_OUTDOOR, ENV_SURVEY_OUTDOOR)]
#[case(
    SurveyArgs { crowd_averse: None, ..full_args() },
    ARG_CROWD_AVERSE,
    ENV_SURVEY_CROWD_AVERSE
)]
fn converting_without_an_answer_errors(
    #[case] args: SurveyArgs,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let err = SurveyConfig::try_from(args).expect_err("missing answer should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(0)]
#[case(6)]
fn answers_outside_the_scale_are_rejected(#[case] value: u8) {
    let args = SurveyArgs {
        outdoor: Some(value),
        ..full_args()
    };
    let err = SurveyConfig::try_from(args).expect_err("out of scale answer should error");
    match err {
        CliError::InvalidSurvey(UserProfileError::InvalidLikert(rejected)) => {
            assert_eq!(rejected, value);
        }
        other => panic!("expected InvalidSurvey, found {other:?}"),
    }
}

#[rstest]
fn complete_answers_resolve_in_declaration_order() {
    let config = SurveyConfig::try_from(full_args()).expect("answers should resolve");
    let expected = SurveyAnswers::from_raw([5, 1, 3, 4, 2]).expect("valid answers");
    assert_eq!(config.answers, expected);
}

#[rstest]
fn execute_survey_normalises_and_stamps_the_profile() {
    let config = SurveyConfig::try_from(full_args()).expect("answers should resolve");
    let profile = execute_survey(&config, Some(1_700_000_000_000));
    assert_eq!(profile.preference(Trait::Relax), 1.0);
    assert_eq!(profile.preference(Trait::Activity), 0.0);
    assert_eq!(profile.preference(Trait::Novelty), 0.5);
    assert_eq!(profile.preference(Trait::Outdoor), 0.75);
    assert_eq!(profile.preference(Trait::CrowdAverse), 0.25);
    assert_eq!(profile.created_at_ms(), Some(1_700_000_000_000));
}

#[rstest]
fn survey_output_round_trips_as_a_profile_file() {
    let config = SurveyConfig::try_from(full_args()).expect("answers should resolve");
    let profile = execute_survey(&config, None);
    let mut stdout = Vec::new();
    crate::io::write_json(&mut stdout, &profile).expect("write profile");
    let json = String::from_utf8(stdout).expect("stdout utf-8");
    assert!(!json.contains("createdAt"));
    let parsed: vibemap_core::UserProfile = serde_json::from_str(&json).expect("profile JSON");
    assert_eq!(parsed, profile);
}
