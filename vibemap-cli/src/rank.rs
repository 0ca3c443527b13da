//! `rank` command: score places from a JSON file for a profile.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use vibemap_core::{CategoryFilter, Place, ProfileDraft, matches_query};
use vibemap_scorer::{Ranking, SortOrder, rank_draft};

use crate::{
    ARG_CATEGORY, ARG_ORIGIN_LAT, ARG_ORIGIN_LNG, ARG_PLACES, ARG_PROFILE, ARG_QUERY, ARG_SORT,
    CliError, ENV_RANK_ORIGIN_LAT, ENV_RANK_ORIGIN_LNG, ENV_RANK_PLACES,
    io::{read_json, require_existing, write_json},
};

/// Display order accepted by `--sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SortKey {
    /// Best match first.
    #[default]
    Recommended,
    /// Closest to the origin first.
    Distance,
    /// Places recommended for their novelty first.
    Novelty,
}

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Load places from a JSON array, optionally narrow them by \
                 category and free-text query, and score them against a \
                 profile produced by `vibemap survey`. Without a complete \
                 profile the places are listed unscored.",
    about = "Rank places for a preference profile"
)]
#[ortho_config(prefix = "VIBEMAP")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of places.
    #[arg(long = ARG_PLACES, value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Path to a JSON preference profile.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Category key, or `study` / `pet` for tag-based groups.
    #[arg(long = ARG_CATEGORY, value_name = "key")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// Case-insensitive text matched against names and descriptions.
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Display order for the ranked list.
    #[arg(long = ARG_SORT, value_enum)]
    #[serde(default)]
    pub(crate) sort: Option<SortKey>,
    /// Latitude of the visitor, used by `--sort distance`.
    #[arg(long = ARG_ORIGIN_LAT, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) origin_lat: Option<f64>,
    /// Longitude of the visitor, used by `--sort distance`.
    #[arg(long = ARG_ORIGIN_LNG, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) origin_lng: Option<f64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) places: Utf8PathBuf,
    pub(crate) profile: Option<Utf8PathBuf>,
    pub(crate) category: CategoryFilter,
    pub(crate) query: String,
    pub(crate) order: SortOrder,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.places, ARG_PLACES)?;
        if let Some(profile) = &self.profile {
            require_existing(profile, ARG_PROFILE)?;
        }
        Ok(())
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_RANK_PLACES,
        })?;
        let order = match args.sort.unwrap_or_default() {
            SortKey::Recommended => SortOrder::Recommended,
            SortKey::Novelty => SortOrder::Novelty,
            SortKey::Distance => {
                let lat = args.origin_lat.ok_or(CliError::MissingArgument {
                    field: ARG_ORIGIN_LAT,
                    env: ENV_RANK_ORIGIN_LAT,
                })?;
                let lng = args.origin_lng.ok_or(CliError::MissingArgument {
                    field: ARG_ORIGIN_LNG,
                    env: ENV_RANK_ORIGIN_LNG,
                })?;
                SortOrder::Distance {
                    origin: Coord { x: lng, y: lat },
                }
            }
        };
        let category = args
            .category
            .as_deref()
            .unwrap_or_default()
            .parse::<CategoryFilter>()
            .unwrap_or_default();
        Ok(Self {
            places,
            profile: args.profile,
            category,
            query: args.query.unwrap_or_default(),
            order,
        })
    }
}

pub(super) fn run_rank(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let ranking = execute_rank(&config)?;
    write_json(writer, &ranking)
}

/// Load, filter, rank and order the places named by `config`.
pub(super) fn execute_rank(config: &RankConfig) -> Result<Ranking, CliError> {
    let places: Vec<Place> = read_json(&config.places)?;
    let draft = config.profile.as_deref().map(load_profile).transpose()?;
    let candidates: Vec<Place> = config
        .category
        .apply(&places)
        .into_iter()
        .filter(|place| matches_query(place, &config.query))
        .collect();
    tracing::debug!(
        total = places.len(),
        kept = candidates.len(),
        "filtered places"
    );
    Ok(rank_draft(draft.as_ref(), &candidates).sorted(&config.order))
}

/// Read a profile that may still be missing answers.
fn load_profile(path: &Utf8Path) -> Result<ProfileDraft, CliError> {
    read_json(path)
}
