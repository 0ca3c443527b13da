//! Core domain types for the vibemap engine.
//!
//! Places, visitor profiles and the five preference traits live here,
//! together with the `Scorer` and `RoutePlanner` seams the scoring and
//! routing crates implement. Constructors that can see bad input return
//! `Result`; everything downstream of them can rely on validated values.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod filter;
pub mod place;
pub mod planner;
pub mod profile;
pub mod route;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod trait_vector;

pub use filter::{CategoryFilter, Region, matches_query};
pub use place::{Place, VibeAttributes, VibeValue};
pub use planner::{MIN_REORDERED_STOPS, RouteError, RoutePlanner, RouteRequest};
pub use profile::{LikertAnswer, ProfileDraft, SurveyAnswers, UserProfile, UserProfileError};
pub use route::Route;
pub use scorer::{Score, ScoredPlace, Scorer};
pub use trait_vector::{NEUTRAL_VALUE, Trait, TraitParseError, TraitVector};
