//! Weighted trait matching between a profile and a place.
#![forbid(unsafe_code)]

use vibemap_core::{Place, Score, ScoredPlace, Scorer, Trait, TraitVector, UserProfile};

use crate::{MAX_SUM, TraitWeights, vectorize};

/// Number of reasons attached to a scored place.
pub const REASON_COUNT: usize = 3;

/// Score `place` for `profile` with the default weights.
///
/// Each trait contributes `weight · preference · vibe`; the raw score is
/// their sum rounded to four decimal places.
///
/// # Examples
/// ```
/// use vibemap_core::{Place, TraitVector, UserProfile};
/// use vibemap_scorer::score;
///
/// let profile = UserProfile::new(TraitVector::splat(1.0))?;
/// let museum = Place::at(1, 0.0, 0.0).with_category("museum");
/// let result = score(&profile, &museum);
/// assert_eq!(result.raw, 2.32);
/// assert_eq!(result.contributions.relax, 0.8);
/// # Ok::<(), vibemap_core::UserProfileError>(())
/// ```
#[must_use]
pub fn score(profile: &UserProfile, place: &Place) -> Score {
    score_vectors(&TraitWeights::default(), profile.preferences(), &vectorize(place))
}

#[expect(
    clippy::float_arithmetic,
    reason = "scoring is a weighted product of two vectors"
)]
pub(crate) fn score_vectors(
    weights: &TraitWeights,
    preferences: &TraitVector,
    vibe: &TraitVector,
) -> Score {
    let contributions =
        TraitVector::from_fn(|t| weights.weight(t) * preferences.get(t) * vibe.get(t));
    Score {
        raw: round4(contributions.sum()),
        contributions,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "rounding to a fixed number of decimals"
)]
const fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Express a raw score as a whole percentage of [`MAX_SUM`].
///
/// The result is clamped to `0..=100`; non-finite input yields `0`.
///
/// # Examples
/// ```
/// use vibemap_scorer::{MAX_SUM, percent};
///
/// assert_eq!(percent(MAX_SUM), 100);
/// assert_eq!(percent(2.2), 50);
/// assert_eq!(percent(9.0), 100);
/// assert_eq!(percent(f64::NAN), 0);
/// ```
#[must_use]
pub const fn percent(raw: f64) -> u8 {
    percent_of(raw, MAX_SUM)
}

#[expect(
    clippy::float_arithmetic,
    reason = "percentages rescale the raw score"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped to 0..=100 before the cast"
)]
pub(crate) const fn percent_of(raw: f64, max_sum: f64) -> u8 {
    let scaled = (raw / max_sum * 100.0).round();
    if !scaled.is_finite() {
        return 0;
    }
    scaled.clamp(0.0, 100.0) as u8
}

/// Pick the traits that contributed most to a score.
///
/// Contributions are ordered from largest to smallest with ties resolved in
/// trait declaration order, and the first [`REASON_COUNT`] are kept.
///
/// # Examples
/// ```
/// use vibemap_core::{Trait, TraitVector};
/// use vibemap_scorer::reasons_from_contributions;
///
/// let contributions = TraitVector::new(0.9, 0.1, 0.5, 0.3, 0.9);
/// assert_eq!(
///     reasons_from_contributions(&contributions),
///     vec![Trait::Relax, Trait::CrowdAverse, Trait::Novelty]
/// );
/// ```
#[must_use]
pub fn reasons_from_contributions(contributions: &TraitVector) -> Vec<Trait> {
    let mut ordered: Vec<(Trait, f64)> = contributions.iter().collect();
    ordered.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    ordered
        .into_iter()
        .take(REASON_COUNT)
        .map(|(t, _)| t)
        .collect()
}

/// [`Scorer`] applying the weighted trait match.
///
/// # Examples
/// ```
/// use vibemap_core::{Place, Scorer, TraitVector, UserProfile};
/// use vibemap_scorer::VibeScorer;
///
/// let scorer = VibeScorer::default();
/// let profile = UserProfile::new(TraitVector::splat(1.0))?;
/// let scored = scorer.score_place(&profile, &Place::at(1, 0.0, 0.0).with_category("park"));
/// assert_eq!(scored.percent_score, 61);
/// assert_eq!(scorer.score(&scored.place, &profile).raw, scored.raw_score);
/// # Ok::<(), vibemap_core::UserProfileError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VibeScorer {
    weights: TraitWeights,
}

impl VibeScorer {
    /// Construct a scorer using custom weights.
    #[must_use]
    pub const fn with_weights(weights: TraitWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> &TraitWeights {
        &self.weights
    }

    /// Express `raw` as a percentage of this scorer's maximum.
    #[must_use]
    pub fn percent(&self, raw: f64) -> u8 {
        percent_of(raw, self.weights.max_sum())
    }

    /// Score a place and attach its percentage and reasons.
    #[must_use]
    pub fn score_place(&self, profile: &UserProfile, place: &Place) -> ScoredPlace {
        let Score { raw, contributions } = self.score(place, profile);
        ScoredPlace {
            place: place.clone(),
            raw_score: raw,
            percent_score: self.percent(raw),
            reasons: reasons_from_contributions(&contributions),
        }
    }
}

impl Scorer for VibeScorer {
    fn score(&self, place: &Place, profile: &UserProfile) -> Score {
        score_vectors(&self.weights, profile.preferences(), &vectorize(place))
    }
}
