//! Greedy route planner for vibemap.
//!
//! This crate provides [`NearestNeighbourPlanner`], the default implementation
//! of the [`RoutePlanner`](vibemap_core::RoutePlanner) trait. It orders a
//! visitor's selected places into an open path: starting at the anchor, it
//! repeatedly moves to the closest unvisited place by great-circle distance.
//!
//! Selections of fewer than three places are returned as given. Larger
//! selections are validated first; unusable coordinates and out-of-range
//! anchors are reported as [`RouteError`](vibemap_core::RouteError).

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod haversine;
mod matrix;
mod planner;

pub use haversine::{EARTH_RADIUS_KM, haversine_km};
pub use matrix::DistanceMatrix;
pub use planner::{NearestNeighbourPlanner, build_route, route_length_km};
