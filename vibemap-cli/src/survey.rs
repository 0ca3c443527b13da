//! `survey` command: Likert answers to a preference profile.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use vibemap_core::{LikertAnswer, SurveyAnswers, UserProfile};

use crate::{
    ARG_ACTIVITY, ARG_CROWD_AVERSE, ARG_NOVELTY, ARG_OUTDOOR, ARG_RELAX, CliError,
    ENV_SURVEY_ACTIVITY, ENV_SURVEY_CROWD_AVERSE, ENV_SURVEY_NOVELTY, ENV_SURVEY_OUTDOOR,
    ENV_SURVEY_RELAX, io::write_json,
};

/// CLI arguments for the `survey` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "survey",
    long_about = "Record how strongly the visitor agrees with five statements \
                 on a 1-5 scale and print the resulting preference profile \
                 as JSON, ready to pass to `vibemap rank --profile`.",
    about = "Build a preference profile from survey answers"
)]
#[ortho_config(prefix = "VIBEMAP")]
pub(crate) struct SurveyArgs {
    /// "I want to unwind." (1-5)
    #[arg(long = ARG_RELAX, value_name = "1-5")]
    #[serde(default)]
    pub(crate) relax: Option<u8>,
    /// "I want to move around." (1-5)
    #[arg(long = ARG_ACTIVITY, value_name = "1-5")]
    #[serde(default)]
    pub(crate) activity: Option<u8>,
    /// "I want something new or trendy." (1-5)
    #[arg(long = ARG_NOVELTY, value_name = "1-5")]
    #[serde(default)]
    pub(crate) novelty: Option<u8>,
    /// "I want to be outdoors." (1-5)
    #[arg(long = ARG_OUTDOOR, value_name = "1-5")]
    #[serde(default)]
    pub(crate) outdoor: Option<u8>,
    /// "I want to avoid crowds." (1-5)
    #[arg(long = ARG_CROWD_AVERSE, value_name = "1-5")]
    #[serde(default)]
    pub(crate) crowd_averse: Option<u8>,
}

impl SurveyArgs {
    pub(crate) fn into_config(self) -> Result<SurveyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SurveyConfig::try_from(merged)
    }
}

/// Resolved `survey` command configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SurveyConfig {
    pub(crate) answers: SurveyAnswers,
}

impl TryFrom<SurveyArgs> for SurveyConfig {
    type Error = CliError;

    fn try_from(args: SurveyArgs) -> Result<Self, Self::Error> {
        let answers = SurveyAnswers {
            relax: answer(args.relax, ARG_RELAX, ENV_SURVEY_RELAX)?,
            activity: answer(args.activity, ARG_ACTIVITY, ENV_SURVEY_ACTIVITY)?,
            novelty: answer(args.novelty, ARG_NOVELTY, ENV_SURVEY_NOVELTY)?,
            outdoor: answer(args.outdoor, ARG_OUTDOOR, ENV_SURVEY_OUTDOOR)?,
            crowd_averse: answer(args.crowd_averse, ARG_CROWD_AVERSE, ENV_SURVEY_CROWD_AVERSE)?,
        };
        Ok(Self { answers })
    }
}

fn answer(
    value: Option<u8>,
    field: &'static str,
    env: &'static str,
) -> Result<LikertAnswer, CliError> {
    let raw = value.ok_or(CliError::MissingArgument { field, env })?;
    Ok(LikertAnswer::new(raw)?)
}

pub(super) fn run_survey(args: SurveyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let profile = execute_survey(&config, now_ms());
    write_json(writer, &profile)
}

/// Normalise the answers and stamp the profile with `created_at_ms`.
pub(super) fn execute_survey(config: &SurveyConfig, created_at_ms: Option<i64>) -> UserProfile {
    let profile = UserProfile::from_survey(&config.answers);
    created_at_ms.map_or(profile, |stamp| profile.with_created_at_ms(stamp))
}

fn now_ms() -> Option<i64> {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
    i64::try_from(elapsed.as_millis()).ok()
}
