//! Error types raised while configuring the scorer.
#![forbid(unsafe_code)]

use thiserror::Error;
use vibemap_core::Trait;

/// Errors raised when custom scoring weights are unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    /// A weight was NaN or infinite.
    #[error("{trait_name} weight must be finite")]
    NonFinite {
        /// Trait carrying the weight.
        trait_name: Trait,
    },
    /// A weight was below zero.
    #[error("{trait_name} weight {weight} must not be negative")]
    Negative {
        /// Trait carrying the weight.
        trait_name: Trait,
        /// Offending weight.
        weight: f64,
    },
    /// All weights were zero, leaving no range for percentages.
    #[error("weights must sum to a positive value")]
    ZeroTotal,
}
