//! `route` command: order a selection of places into a walking path.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use vibemap_core::{Place, Route, RoutePlanner, RouteRequest};
use vibemap_solver_greedy::{NearestNeighbourPlanner, route_length_km};

use crate::{
    ARG_ANCHOR, ARG_PLACES, CliError, ENV_ROUTE_PLACES,
    io::{read_json, require_existing, write_json},
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "route",
    long_about = "Load the selected places from a JSON array and order them \
                 with a nearest-neighbour walk starting at the anchor. \
                 Selections of fewer than three places are kept as given.",
    about = "Plan a walking route through selected places"
)]
#[ortho_config(prefix = "VIBEMAP")]
pub(crate) struct RouteArgs {
    /// Path to a JSON array of the selected places.
    #[arg(long = ARG_PLACES, value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Index of the starting place within the selection. Defaults to 0.
    #[arg(long = ARG_ANCHOR, value_name = "index")]
    #[serde(default)]
    pub(crate) anchor: Option<usize>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    pub(crate) places: Utf8PathBuf,
    pub(crate) anchor: usize,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_ROUTE_PLACES,
        })?;
        Ok(Self {
            places,
            anchor: args.anchor.unwrap_or_default(),
        })
    }
}

/// Planned route as printed by the command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RouteOutput {
    pub(crate) places: Route,
    pub(crate) total_distance_km: f64,
}

pub(super) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.places, ARG_PLACES)?;
    let output = execute_route(&config, &NearestNeighbourPlanner)?;
    write_json(writer, &output)
}

/// Plan a route through the places named by `config`.
pub(super) fn execute_route(
    config: &RouteConfig,
    planner: &dyn RoutePlanner,
) -> Result<RouteOutput, CliError> {
    let places: Vec<Place> = read_json(&config.places)?;
    let request = RouteRequest::new(places).with_anchor(config.anchor);
    let route = planner
        .plan(&request)
        .map_err(|source| CliError::Route {
            path: config.places.clone(),
            source,
        })?;
    let total_distance_km = route_length_km(route.places());
    tracing::info!(stops = route.len(), total_distance_km, "planned route");
    Ok(RouteOutput {
        places: route,
        total_distance_km,
    })
}
