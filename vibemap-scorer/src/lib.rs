//! Vibe scoring and ranking for vibemap places.
//!
//! The crate turns place records into five-trait vibe vectors, scores them
//! against a visitor's [`UserProfile`](vibemap_core::UserProfile) and orders
//! the results:
//! - **Vectorising** reads explicit `vibe_*` attributes, falling back to a
//!   static table of category presets and then to the neutral vector.
//! - **Scoring** multiplies preference, vibe and a fixed per-trait weight,
//!   reports the sum as a raw score and a percentage, and names the three
//!   traits that contributed most.
//! - **Ranking** sorts scored places by raw score, keeping input order on
//!   ties, and degrades to a pass-through when no complete profile exists.
//!
//! # Examples
//!
//! ```
//! use vibemap_core::{Place, Trait, TraitVector, UserProfile};
//! use vibemap_scorer::rank_profile;
//!
//! let profile = UserProfile::new(TraitVector::new(1.0, 0.0, 0.0, 0.0, 1.0))?;
//! let places = vec![
//!     Place::at(1, 35.0, 139.0).with_category("amusement"),
//!     Place::at(2, 35.1, 139.1).with_category("museum"),
//! ];
//! let ranked = rank_profile(&profile, &places);
//! let best = ranked.first().expect("two places were ranked");
//! assert_eq!(best.place.id, 2);
//! assert_eq!(best.reasons.first(), Some(&Trait::Relax));
//! # Ok::<(), vibemap_core::UserProfileError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod presets;
mod rank;
mod scoring;
mod sort;
mod vectorizer;
mod weights;

pub use error::WeightsError;
pub use presets::{CATEGORY_PRESETS, preset_for};
pub use rank::{Ranking, rank, rank_draft, rank_profile};
pub use scoring::{REASON_COUNT, VibeScorer, percent, reasons_from_contributions, score};
pub use sort::{KM_PER_DEGREE_LAT, KM_PER_DEGREE_LNG, SortOrder, approx_distance_km};
pub use vectorizer::vectorize;
pub use weights::{MAX_SUM, TRAIT_WEIGHTS, TraitWeights};
