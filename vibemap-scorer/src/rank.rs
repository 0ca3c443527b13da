//! Rank places for a visitor.
#![forbid(unsafe_code)]

use serde::Serialize;
use vibemap_core::{Place, ProfileDraft, ScoredPlace, UserProfile};

use crate::{SortOrder, VibeScorer};

/// Output of a ranking pass.
///
/// Without a usable profile the places are passed through untouched, so
/// collaborators can still render a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ranking {
    /// Places scored against a complete profile, best match first.
    Personalised(Vec<ScoredPlace>),
    /// Places in their input order, unscored.
    Unpersonalised(Vec<Place>),
}

impl Ranking {
    /// Whether the places were scored.
    #[must_use]
    pub const fn is_personalised(&self) -> bool {
        matches!(self, Self::Personalised(_))
    }

    /// Number of places in the ranking.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Personalised(scored) => scored.len(),
            Self::Unpersonalised(places) => places.len(),
        }
    }

    /// Whether the ranking holds no places.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Place identifiers in ranked order.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        match self {
            Self::Personalised(scored) => scored.iter().map(|s| s.place.id).collect(),
            Self::Unpersonalised(places) => places.iter().map(|p| p.id).collect(),
        }
    }

    /// Re-order the ranking for display.
    #[must_use]
    pub fn sorted(self, order: &SortOrder) -> Self {
        match self {
            Self::Personalised(scored) => Self::Personalised(order.sort_scored(scored)),
            Self::Unpersonalised(places) => Self::Unpersonalised(order.sort_places(places)),
        }
    }
}

/// Rank `places` for an optional profile.
///
/// With a profile every place is scored and the list is stably sorted by raw
/// score, highest first; equal scores keep their input order. Without one the
/// places are returned unscored in input order.
///
/// # Examples
/// ```
/// use vibemap_core::Place;
/// use vibemap_scorer::{Ranking, rank};
///
/// let places = vec![Place::at(1, 0.0, 0.0), Place::at(2, 0.0, 0.0)];
/// let ranking = rank(None, &places);
/// assert_eq!(ranking, Ranking::Unpersonalised(places));
/// ```
#[must_use]
pub fn rank(profile: Option<&UserProfile>, places: &[Place]) -> Ranking {
    let Some(user) = profile else {
        log::info!("no profile supplied; returning {} places unranked", places.len());
        return Ranking::Unpersonalised(places.to_vec());
    };
    Ranking::Personalised(rank_profile(user, places))
}

/// Rank `places` for a draft that may still be incomplete.
///
/// Incomplete or invalid drafts rank as if no profile were given.
#[must_use]
pub fn rank_draft(draft: Option<&ProfileDraft>, places: &[Place]) -> Ranking {
    let profile = draft.and_then(|d| {
        d.complete()
            .inspect_err(|err| log::info!("ignoring profile draft: {err}"))
            .ok()
    });
    rank(profile.as_ref(), places)
}

/// Score and order `places` for a complete profile with the default scorer.
///
/// # Examples
/// ```
/// use vibemap_core::{Place, TraitVector, UserProfile};
/// use vibemap_scorer::rank_profile;
///
/// let outdoorsy = UserProfile::new(TraitVector::new(0.0, 0.0, 0.0, 1.0, 0.0))?;
/// let places = vec![
///     Place::at(1, 0.0, 0.0).with_category("museum"),
///     Place::at(2, 0.0, 0.0).with_category("park"),
/// ];
/// let ranked = rank_profile(&outdoorsy, &places);
/// assert_eq!(ranked.first().map(|s| s.place.id), Some(2));
/// # Ok::<(), vibemap_core::UserProfileError>(())
/// ```
#[must_use]
pub fn rank_profile(profile: &UserProfile, places: &[Place]) -> Vec<ScoredPlace> {
    VibeScorer::default().rank(profile, places)
}

impl VibeScorer {
    /// Score and order `places` for `profile`.
    #[must_use]
    pub fn rank(&self, profile: &UserProfile, places: &[Place]) -> Vec<ScoredPlace> {
        let mut scored: Vec<ScoredPlace> = places
            .iter()
            .map(|place| self.score_place(profile, place))
            .collect();
        scored.sort_by(|a, b| b.raw_score.total_cmp(&a.raw_score));
        scored
    }
}
