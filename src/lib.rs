//! Facade crate for the vibemap recommendation engine.
//!
//! This crate re-exports the core domain types and the vibe scorer, and
//! exposes the greedy route planner behind the `solver-greedy` feature.
//!
//! ```
//! # #[cfg(feature = "solver-greedy")]
//! # {
//! use vibemap_engine::{Place, SurveyAnswers, UserProfile, build_route, rank_profile};
//!
//! let answers = SurveyAnswers::from_raw([2, 4, 3, 5, 1])?;
//! let profile = UserProfile::from_survey(&answers);
//! let places = vec![
//!     Place::at(1, 35.68, 139.76).with_category("museum"),
//!     Place::at(2, 35.66, 139.70).with_category("park"),
//!     Place::at(3, 35.71, 139.79).with_category("amusement"),
//! ];
//! let ranked = rank_profile(&profile, &places);
//! assert_eq!(ranked.len(), 3);
//! let selection: Vec<Place> = ranked.into_iter().map(|s| s.place).collect();
//! let route = build_route(&selection)?;
//! assert_eq!(route.first().map(|p| p.id), selection.first().map(|p| p.id));
//! # }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use vibemap_core::{
    CategoryFilter, LikertAnswer, Place, ProfileDraft, Region, Route, RouteError, RoutePlanner,
    RouteRequest, Score, ScoredPlace, Scorer, SurveyAnswers, Trait, TraitVector, UserProfile,
    UserProfileError, VibeAttributes, VibeValue, matches_query,
};

pub use vibemap_scorer::{
    MAX_SUM, Ranking, SortOrder, TRAIT_WEIGHTS, TraitWeights, VibeScorer, WeightsError, percent,
    preset_for, rank, rank_draft, rank_profile, reasons_from_contributions, score, vectorize,
};

#[cfg(feature = "solver-greedy")]
pub use vibemap_solver_greedy::{
    DistanceMatrix, EARTH_RADIUS_KM, NearestNeighbourPlanner, build_route, haversine_km,
    route_length_km,
};
