//! Per-trait weights applied when scoring.
#![forbid(unsafe_code)]

use vibemap_core::{Trait, TraitVector};

use crate::WeightsError;

/// Default weight per trait: relax 1.0, activity 0.9, novelty 0.8,
/// outdoor 0.7, crowd aversion 1.0.
pub const TRAIT_WEIGHTS: TraitVector = TraitVector::new(1.0, 0.9, 0.8, 0.7, 1.0);

/// Highest raw score reachable with [`TRAIT_WEIGHTS`].
pub const MAX_SUM: f64 = TRAIT_WEIGHTS.sum();

/// Validated scoring weights.
///
/// # Examples
/// ```
/// use vibemap_core::TraitVector;
/// use vibemap_scorer::{TraitWeights, WeightsError};
///
/// let weights = TraitWeights::new(TraitVector::splat(1.0))?;
/// assert_eq!(weights.max_sum(), 5.0);
/// assert!(TraitWeights::new(TraitVector::splat(0.0)).is_err());
/// # Ok::<(), WeightsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitWeights {
    weights: TraitVector,
    max_sum: f64,
}

impl TraitWeights {
    /// Validate weights and cache their total.
    ///
    /// # Errors
    /// Returns [`WeightsError::NonFinite`] or [`WeightsError::Negative`] for
    /// the first unusable weight, and [`WeightsError::ZeroTotal`] when every
    /// weight is zero.
    pub fn new(weights: TraitVector) -> Result<Self, WeightsError> {
        for (trait_name, weight) in weights.iter() {
            if !weight.is_finite() {
                return Err(WeightsError::NonFinite { trait_name });
            }
            if weight < 0.0_f64 {
                return Err(WeightsError::Negative { trait_name, weight });
            }
        }
        let max_sum = weights.sum();
        if max_sum <= 0.0_f64 {
            return Err(WeightsError::ZeroTotal);
        }
        Ok(Self { weights, max_sum })
    }

    /// Weight for a single trait.
    #[must_use]
    pub const fn weight(&self, t: Trait) -> f64 {
        self.weights.get(t)
    }

    /// All five weights.
    #[must_use]
    pub const fn as_vector(&self) -> &TraitVector {
        &self.weights
    }

    /// Sum of the weights; the raw score of a perfect match.
    #[must_use]
    pub const fn max_sum(&self) -> f64 {
        self.max_sum
    }
}

impl Default for TraitWeights {
    fn default() -> Self {
        Self {
            weights: TRAIT_WEIGHTS,
            max_sum: MAX_SUM,
        }
    }
}
