//! The five preference traits and the fixed-dimension vectors built on them.
//!
//! The same [`TraitVector`] type describes both what a visitor asks for and
//! the "vibe" a place gives off, so scoring reduces to a weighted product of
//! two vectors.
//!
//! # Examples
//! ```
//! use vibemap_core::{Trait, TraitVector};
//!
//! assert_eq!(Trait::CrowdAverse.as_str(), "crowd_averse");
//! assert_eq!(Trait::Relax.to_string(), "relax");
//! assert_eq!(TraitVector::NEUTRAL.get(Trait::Outdoor), 0.5);
//! ```

use thiserror::Error;

/// Value used for any trait nothing is known about.
pub const NEUTRAL_VALUE: f64 = 0.5;

/// A single preference dimension.
///
/// Declaration order is significant: it is the order vectors iterate in and
/// the tie-break order when traits are ranked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Trait {
    /// Calm, quiet surroundings.
    Relax,
    /// Physically active or hands-on experiences.
    Activity,
    /// Trendy or unusual places.
    Novelty,
    /// Open-air settings.
    Outdoor,
    /// Avoiding busy, crowded spots.
    CrowdAverse,
}

impl Trait {
    /// Every trait in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Relax,
        Self::Activity,
        Self::Novelty,
        Self::Outdoor,
        Self::CrowdAverse,
    ];

    /// Return the stable snake-case key for the trait.
    ///
    /// # Examples
    /// ```
    /// use vibemap_core::Trait;
    ///
    /// assert_eq!(Trait::Novelty.as_str(), "novelty");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relax => "relax",
            Self::Activity => "activity",
            Self::Novelty => "novelty",
            Self::Outdoor => "outdoor",
            Self::CrowdAverse => "crowd_averse",
        }
    }

    /// Return the label shown to visitors when the trait explains a match.
    ///
    /// # Examples
    /// ```
    /// use vibemap_core::Trait;
    ///
    /// assert_eq!(Trait::CrowdAverse.label(), "Uncrowded");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relax => "Quiet",
            Self::Activity => "Active",
            Self::Novelty => "Novel",
            Self::Outdoor => "Outdoors",
            Self::CrowdAverse => "Uncrowded",
        }
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Trait`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trait '{0}'")]
pub struct TraitParseError(pub String);

impl std::str::FromStr for Trait {
    type Err = TraitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relax" => Ok(Self::Relax),
            "activity" => Ok(Self::Activity),
            "novelty" => Ok(Self::Novelty),
            "outdoor" => Ok(Self::Outdoor),
            "crowd_averse" => Ok(Self::CrowdAverse),
            _ => Err(TraitParseError(s.to_owned())),
        }
    }
}

/// One real value per [`Trait`]; every dimension is always present.
///
/// # Examples
/// ```
/// use vibemap_core::{Trait, TraitVector};
///
/// let vector = TraitVector::NEUTRAL.with(Trait::Activity, 0.9);
/// assert_eq!(vector.get(Trait::Activity), 0.9);
/// assert_eq!(vector.get(Trait::Relax), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitVector {
    /// Preference for calm surroundings.
    pub relax: f64,
    /// Preference for active experiences.
    pub activity: f64,
    /// Preference for new or trendy places.
    pub novelty: f64,
    /// Preference for being outside.
    pub outdoor: f64,
    /// Preference for avoiding crowds.
    pub crowd_averse: f64,
}

impl TraitVector {
    /// The all-`0.5` vector used when nothing is known.
    pub const NEUTRAL: Self = Self::splat(NEUTRAL_VALUE);

    /// Construct a vector from its five components in declaration order.
    #[must_use]
    pub const fn new(relax: f64, activity: f64, novelty: f64, outdoor: f64, crowd_averse: f64) -> Self {
        Self {
            relax,
            activity,
            novelty,
            outdoor,
            crowd_averse,
        }
    }

    /// Construct a vector with every component set to `value`.
    #[must_use]
    pub const fn splat(value: f64) -> Self {
        Self::new(value, value, value, value, value)
    }

    /// Build a vector by evaluating `f` once per trait in declaration order.
    ///
    /// # Examples
    /// ```
    /// use vibemap_core::{Trait, TraitVector};
    ///
    /// let vector = TraitVector::from_fn(|t| if t == Trait::Outdoor { 1.0 } else { 0.0 });
    /// assert_eq!(vector.outdoor, 1.0);
    /// assert_eq!(vector.relax, 0.0);
    /// ```
    pub fn from_fn(mut f: impl FnMut(Trait) -> f64) -> Self {
        Self::new(
            f(Trait::Relax),
            f(Trait::Activity),
            f(Trait::Novelty),
            f(Trait::Outdoor),
            f(Trait::CrowdAverse),
        )
    }

    /// Return the component for `t`.
    #[must_use]
    pub const fn get(&self, t: Trait) -> f64 {
        match t {
            Trait::Relax => self.relax,
            Trait::Activity => self.activity,
            Trait::Novelty => self.novelty,
            Trait::Outdoor => self.outdoor,
            Trait::CrowdAverse => self.crowd_averse,
        }
    }

    /// Overwrite the component for `t`.
    pub const fn set(&mut self, t: Trait, value: f64) {
        match t {
            Trait::Relax => self.relax = value,
            Trait::Activity => self.activity = value,
            Trait::Novelty => self.novelty = value,
            Trait::Outdoor => self.outdoor = value,
            Trait::CrowdAverse => self.crowd_averse = value,
        }
    }

    /// Set a component while returning `self` for chaining.
    #[must_use]
    pub const fn with(mut self, t: Trait, value: f64) -> Self {
        self.set(t, value);
        self
    }

    /// Iterate over `(trait, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Trait, f64)> + '_ {
        Trait::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    /// Sum the five components in declaration order.
    #[expect(
        clippy::float_arithmetic,
        reason = "vector totals are plain floating-point sums"
    )]
    #[must_use]
    pub const fn sum(&self) -> f64 {
        self.relax + self.activity + self.novelty + self.outdoor + self.crowd_averse
    }

    /// Report whether every component is finite and within `0.0..=1.0`.
    #[must_use]
    pub fn is_unit_interval(&self) -> bool {
        self.iter()
            .all(|(_, value)| value.is_finite() && (0.0..=1.0).contains(&value))
    }
}

impl Default for TraitVector {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn display_matches_as_str() {
        for t in Trait::ALL {
            assert_eq!(t.to_string(), t.as_str());
        }
    }

    #[rstest]
    #[case("relax", Trait::Relax)]
    #[case("CROWD_AVERSE", Trait::CrowdAverse)]
    #[case(" Novelty ", Trait::Novelty)]
    fn parsing_is_case_insensitive(#[case] raw: &str, #[case] expected: Trait) {
        assert_eq!(Trait::from_str(raw), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Trait::from_str("trendy").expect_err("trendy is a vibe field, not a trait");
        assert!(err.to_string().contains("unknown trait"));
    }

    #[rstest]
    fn iteration_follows_declaration_order() {
        let vector = TraitVector::new(0.1, 0.2, 0.3, 0.4, 0.5);
        let collected: Vec<_> = vector.iter().collect();
        assert_eq!(
            collected,
            vec![
                (Trait::Relax, 0.1),
                (Trait::Activity, 0.2),
                (Trait::Novelty, 0.3),
                (Trait::Outdoor, 0.4),
                (Trait::CrowdAverse, 0.5),
            ]
        );
    }

    #[rstest]
    fn set_then_get_round_trips_every_trait() {
        let mut vector = TraitVector::splat(0.0);
        for (idx, t) in Trait::ALL.into_iter().enumerate() {
            let value = f64::from(u8::try_from(idx).expect("five traits")) / 10.0;
            vector.set(t, value);
            assert_eq!(vector.get(t), value);
        }
    }

    #[rstest]
    #[case(TraitVector::NEUTRAL, true)]
    #[case(TraitVector::splat(1.0), true)]
    #[case(TraitVector::NEUTRAL.with(Trait::Outdoor, 1.5), false)]
    #[case(TraitVector::NEUTRAL.with(Trait::Relax, -0.1), false)]
    #[case(TraitVector::NEUTRAL.with(Trait::Novelty, f64::NAN), false)]
    fn unit_interval_check(#[case] vector: TraitVector, #[case] expected: bool) {
        assert_eq!(vector.is_unit_interval(), expected);
    }
}
