//! Command-line interface for the vibemap engine.
//!
//! Three subcommands cover the recommendation flow: `survey` turns Likert
//! answers into a preference profile, `rank` scores places from a JSON file
//! against that profile, and `route` orders a selection into a walking path.
//! Every subcommand reads its options from flags, `VIBEMAP_CMDS_*`
//! environment variables, or configuration files, in that order of priority.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod io;
mod logging;
mod rank;
mod route;
mod survey;

pub use error::CliError;

use rank::{RankArgs, run_rank};
use route::{RouteArgs, run_route};
use survey::{SurveyArgs, run_survey};

const ARG_PLACES: &str = "places";
const ARG_PROFILE: &str = "profile";
const ARG_CATEGORY: &str = "category";
const ARG_QUERY: &str = "query";
const ARG_SORT: &str = "sort";
const ARG_ORIGIN_LAT: &str = "origin-lat";
const ARG_ORIGIN_LNG: &str = "origin-lng";
const ARG_ANCHOR: &str = "anchor";
const ARG_RELAX: &str = "relax";
const ARG_ACTIVITY: &str = "activity";
const ARG_NOVELTY: &str = "novelty";
const ARG_OUTDOOR: &str = "outdoor";
const ARG_CROWD_AVERSE: &str = "crowd-averse";

const ENV_RANK_PLACES: &str = "VIBEMAP_CMDS_RANK_PLACES";
const ENV_RANK_ORIGIN_LAT: &str = "VIBEMAP_CMDS_RANK_ORIGIN_LAT";
const ENV_RANK_ORIGIN_LNG: &str = "VIBEMAP_CMDS_RANK_ORIGIN_LNG";
const ENV_ROUTE_PLACES: &str = "VIBEMAP_CMDS_ROUTE_PLACES";
const ENV_SURVEY_RELAX: &str = "VIBEMAP_CMDS_SURVEY_RELAX";
const ENV_SURVEY_ACTIVITY: &str = "VIBEMAP_CMDS_SURVEY_ACTIVITY";
const ENV_SURVEY_NOVELTY: &str = "VIBEMAP_CMDS_SURVEY_NOVELTY";
const ENV_SURVEY_OUTDOOR: &str = "VIBEMAP_CMDS_SURVEY_OUTDOOR";
const ENV_SURVEY_CROWD_AVERSE: &str = "VIBEMAP_CMDS_SURVEY_CROWD_AVERSE";

/// Run the vibemap CLI with the current process arguments and environment.
///
/// Results are written to standard output as pretty-printed JSON.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, configuration cannot
/// be resolved, an input file cannot be read, or the command itself fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init(cli.verbose);
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Survey(args) => run_survey(args, writer),
        Command::Rank(args) => run_rank(args, writer),
        Command::Route(args) => run_route(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "vibemap",
    about = "Score places against a vibe profile and plan walking routes",
    version
)]
struct Cli {
    /// Log debug output to stderr. `VIBEMAP_LOG` takes precedence.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Turn five Likert answers into a preference profile.
    Survey(SurveyArgs),
    /// Rank places from a JSON file for a profile.
    Rank(RankArgs),
    /// Order selected places into a walking route.
    Route(RouteArgs),
}

#[cfg(test)]
mod tests;
