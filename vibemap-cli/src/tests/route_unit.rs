//! Unit tests covering route configuration and planning.

use super::helpers::Workspace;
use super::*;
use crate::route::{RouteConfig, execute_route};
use camino::Utf8PathBuf;
use rstest::rstest;
use vibemap_core::RouteError;
use vibemap_core::test_support::{places_at, triangle};
use vibemap_solver_greedy::NearestNeighbourPlanner;

#[rstest]
fn converting_without_places_errors() {
    let err = RouteConfig::try_from(RouteArgs::default()).expect_err("missing places");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLACES);
            assert_eq!(env, ENV_ROUTE_PLACES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn anchor_defaults_to_the_first_place() {
    let args = RouteArgs {
        places: Some(Utf8PathBuf::from("selection.json")),
        anchor: None,
    };
    let config = RouteConfig::try_from(args).expect("config should build");
    assert_eq!(config.anchor, 0);
}

#[rstest]
fn planned_route_visits_the_nearer_neighbour_first() {
    let workspace = Workspace::new();
    let config = RouteConfig {
        places: workspace.write_places("selection.json", &triangle(37.4)),
        anchor: 0,
    };
    let output = execute_route(&config, &NearestNeighbourPlanner).expect("route should plan");
    assert_eq!(output.places.ids(), vec![1, 3, 2]);
    assert!(output.total_distance_km > 0.0);
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "test compares floats within a tolerance"
)]
fn pairs_are_returned_unchanged_with_their_length() {
    let workspace = Workspace::new();
    let pair = places_at(&[(0.0, 0.0), (0.0, 1.0)]);
    let config = RouteConfig {
        places: workspace.write_places("selection.json", &pair),
        anchor: 0,
    };
    let output = execute_route(&config, &NearestNeighbourPlanner).expect("route should plan");
    assert_eq!(output.places.ids(), vec![1, 2]);
    assert!((output.total_distance_km - 111.194_926_6).abs() < 1e-6);
}

#[rstest]
fn planner_rejections_report_the_path() {
    let workspace = Workspace::new();
    let path = workspace.write_places("selection.json", &triangle(37.4));
    let config = RouteConfig {
        places: path.clone(),
        anchor: 7,
    };
    match execute_route(&config, &NearestNeighbourPlanner).expect_err("anchor out of range") {
        CliError::Route {
            path: reported,
            source,
        } => {
            assert_eq!(reported, path);
            assert_eq!(source, RouteError::AnchorOutOfBounds { anchor: 7, len: 3 });
        }
        other => panic!("expected Route, found {other:?}"),
    }
}

#[rstest]
fn output_serialises_places_and_total() {
    let workspace = Workspace::new();
    let config = RouteConfig {
        places: workspace.write_places("selection.json", &triangle(37.4)),
        anchor: 0,
    };
    let output = execute_route(&config, &NearestNeighbourPlanner).expect("route should plan");
    let json = serde_json::to_value(&output).expect("serialize output");
    assert_eq!(json["places"].as_array().map(Vec::len), Some(3));
    assert!(json["total_distance_km"].is_f64());
}
