//! Score places against a visitor profile.
//!
//! The `Scorer` trait yields a [`Score`] for a [`Place`] given a
//! [`UserProfile`]. [`ScoredPlace`] bundles a place with its ranking output.

use crate::{Place, Trait, TraitVector, UserProfile};

/// Raw match score and the per-trait contributions it was summed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Weighted sum rounded to four decimal places.
    pub raw: f64,
    /// Weighted product for each trait before summing.
    pub contributions: TraitVector,
}

/// Calculate how well a place matches a profile.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and infallible:
/// places with unusable data score against the neutral vibe instead of
/// failing.
///
/// # Examples
///
/// ```rust
/// use vibemap_core::{Place, Score, Scorer, TraitVector, UserProfile};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _place: &Place, _profile: &UserProfile) -> Score {
///         Score { raw: 1.0, contributions: TraitVector::splat(0.2) }
///     }
/// }
///
/// let profile = UserProfile::new(TraitVector::NEUTRAL)?;
/// let place = Place::at(1, 35.0, 139.0);
/// assert_eq!(FlatScorer.score(&place, &profile).raw, 1.0);
/// # Ok::<(), vibemap_core::UserProfileError>(())
/// ```
pub trait Scorer: Send + Sync {
    /// Return the score of `place` for `profile`.
    fn score(&self, place: &Place, profile: &UserProfile) -> Score;
}

/// A place annotated with its ranking output.
///
/// Built fresh for every ranking call; the wrapped place is a copy of the
/// input record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredPlace {
    /// The scored place.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub place: Place,
    /// Weighted sum used for ordering.
    pub raw_score: f64,
    /// `raw_score` as a share of the maximum, in `0..=100`.
    pub percent_score: u8,
    /// Up to three traits that contributed most, strongest first.
    pub reasons: Vec<Trait>,
}

impl ScoredPlace {
    /// Display labels for [`Self::reasons`].
    ///
    /// # Examples
    /// ```
    /// use vibemap_core::{Place, ScoredPlace, Trait};
    ///
    /// let scored = ScoredPlace {
    ///     place: Place::at(1, 0.0, 0.0),
    ///     raw_score: 2.0,
    ///     percent_score: 45,
    ///     reasons: vec![Trait::Outdoor, Trait::Relax],
    /// };
    /// assert_eq!(scored.reason_labels(), vec!["Outdoors", "Quiet"]);
    /// ```
    #[must_use]
    pub fn reason_labels(&self) -> Vec<&'static str> {
        self.reasons.iter().map(|t| t.label()).collect()
    }
}
