//! User profiles: per-trait preferences in `[0.0, 1.0]`.
//!
//! A [`UserProfile`] is always complete and in range. Collaborators that may
//! hold partial survey state pass a [`ProfileDraft`] instead and let the
//! ranking stage decide whether personalisation is possible.

use thiserror::Error;

use crate::{Trait, TraitVector};

/// Smallest valid answer on the survey scale.
pub const LIKERT_MIN: u8 = 1;
/// Largest valid answer on the survey scale.
pub const LIKERT_MAX: u8 = 5;

/// Errors raised while building a [`UserProfile`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UserProfileError {
    /// A preference was non-finite or outside `0.0..=1.0`.
    #[error("{trait_name} preference {value} must be within 0.0..=1.0")]
    OutOfRange {
        /// Offending trait.
        trait_name: Trait,
        /// Value supplied for it.
        value: f64,
    },
    /// One or more traits had no value.
    #[error("profile is missing {}", join_traits(.missing))]
    Incomplete {
        /// Traits without a value, in declaration order.
        missing: Vec<Trait>,
    },
    /// A survey answer fell outside the 1 to 5 scale.
    #[error("survey answer {0} must be between {LIKERT_MIN} and {LIKERT_MAX}")]
    InvalidLikert(u8),
}

fn join_traits(traits: &[Trait]) -> String {
    traits
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single answer on the five-point survey scale.
///
/// # Examples
/// ```
/// use vibemap_core::LikertAnswer;
///
/// let answer = LikertAnswer::new(3)?;
/// assert_eq!(answer.normalised(), 0.5);
/// assert!(LikertAnswer::new(6).is_err());
/// # Ok::<(), vibemap_core::UserProfileError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikertAnswer(u8);

impl LikertAnswer {
    /// Validate and wrap a survey answer.
    ///
    /// # Errors
    /// Returns [`UserProfileError::InvalidLikert`] outside `1..=5`.
    pub const fn new(value: u8) -> Result<Self, UserProfileError> {
        if value < LIKERT_MIN || value > LIKERT_MAX {
            return Err(UserProfileError::InvalidLikert(value));
        }
        Ok(Self(value))
    }

    /// The raw answer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Map the answer onto `[0, 1]` as `(v - 1) / 4`.
    #[expect(
        clippy::float_arithmetic,
        reason = "survey normalisation is a linear rescale"
    )]
    #[must_use]
    pub fn normalised(self) -> f64 {
        let span = f64::from(LIKERT_MAX - LIKERT_MIN);
        f64::from(self.0 - LIKERT_MIN) / span
    }
}

impl TryFrom<u8> for LikertAnswer {
    type Error = UserProfileError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Answers to all five survey questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyAnswers {
    /// "I'd like somewhere quiet today."
    pub relax: LikertAnswer,
    /// "I want somewhere active."
    pub activity: LikertAnswer,
    /// "I'm drawn to something new."
    pub novelty: LikertAnswer,
    /// "Outdoors over indoors."
    pub outdoor: LikertAnswer,
    /// "I'd rather avoid crowds."
    pub crowd_averse: LikertAnswer,
}

impl SurveyAnswers {
    /// Validate five raw answers given in declaration order.
    ///
    /// # Errors
    /// Returns [`UserProfileError::InvalidLikert`] for the first answer
    /// outside the scale.
    pub fn from_raw(answers: [u8; 5]) -> Result<Self, UserProfileError> {
        let [relax, activity, novelty, outdoor, crowd_averse] = answers;
        Ok(Self {
            relax: LikertAnswer::new(relax)?,
            activity: LikertAnswer::new(activity)?,
            novelty: LikertAnswer::new(novelty)?,
            outdoor: LikertAnswer::new(outdoor)?,
            crowd_averse: LikertAnswer::new(crowd_averse)?,
        })
    }

    const fn answer(self, t: Trait) -> LikertAnswer {
        match t {
            Trait::Relax => self.relax,
            Trait::Activity => self.activity,
            Trait::Novelty => self.novelty,
            Trait::Outdoor => self.outdoor,
            Trait::CrowdAverse => self.crowd_averse,
        }
    }
}

/// A complete, validated visitor preference vector.
///
/// # Examples
/// ```
/// use vibemap_core::{Trait, TraitVector, UserProfile};
///
/// let profile = UserProfile::new(TraitVector::NEUTRAL.with(Trait::Outdoor, 1.0))?;
/// assert_eq!(profile.preference(Trait::Outdoor), 1.0);
/// # Ok::<(), vibemap_core::UserProfileError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ProfileDraft", into = "ProfileDraft"))]
pub struct UserProfile {
    preferences: TraitVector,
    created_at_ms: Option<i64>,
}

impl UserProfile {
    /// Validate a preference vector.
    ///
    /// # Errors
    /// Returns [`UserProfileError::OutOfRange`] for the first component that
    /// is non-finite or outside `0.0..=1.0`.
    pub fn new(preferences: TraitVector) -> Result<Self, UserProfileError> {
        if let Some((trait_name, value)) = preferences
            .iter()
            .find(|(_, v)| !(v.is_finite() && (0.0..=1.0).contains(v)))
        {
            return Err(UserProfileError::OutOfRange { trait_name, value });
        }
        Ok(Self {
            preferences,
            created_at_ms: None,
        })
    }

    /// Build a profile from survey answers.
    ///
    /// # Examples
    /// ```
    /// use vibemap_core::{SurveyAnswers, Trait, UserProfile};
    ///
    /// let answers = SurveyAnswers::from_raw([5, 1, 3, 4, 2])?;
    /// let profile = UserProfile::from_survey(&answers);
    /// assert_eq!(profile.preference(Trait::Relax), 1.0);
    /// assert_eq!(profile.preference(Trait::Activity), 0.0);
    /// assert_eq!(profile.preference(Trait::Outdoor), 0.75);
    /// # Ok::<(), vibemap_core::UserProfileError>(())
    /// ```
    #[must_use]
    pub fn from_survey(answers: &SurveyAnswers) -> Self {
        Self {
            preferences: TraitVector::from_fn(|t| answers.answer(t).normalised()),
            created_at_ms: None,
        }
    }

    /// Attach the collaborator's creation timestamp in epoch milliseconds.
    #[must_use]
    pub const fn with_created_at_ms(mut self, created_at_ms: i64) -> Self {
        self.created_at_ms = Some(created_at_ms);
        self
    }

    /// Preference for a single trait.
    #[must_use]
    pub const fn preference(&self, t: Trait) -> f64 {
        self.preferences.get(t)
    }

    /// The full preference vector.
    #[must_use]
    pub const fn preferences(&self) -> &TraitVector {
        &self.preferences
    }

    /// Creation timestamp supplied by the caller, if any.
    #[must_use]
    pub const fn created_at_ms(&self) -> Option<i64> {
        self.created_at_ms
    }
}

/// A possibly incomplete profile as held by the survey collaborator.
///
/// # Examples
/// ```
/// use vibemap_core::ProfileDraft;
///
/// let draft = ProfileDraft { relax: Some(0.5), ..ProfileDraft::default() };
/// assert!(draft.complete().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileDraft {
    /// Preference for calm surroundings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub relax: Option<f64>,
    /// Preference for active experiences.
    #[cfg_attr(feature = "serde", serde(default))]
    pub activity: Option<f64>,
    /// Preference for new or trendy places.
    #[cfg_attr(feature = "serde", serde(default))]
    pub novelty: Option<f64>,
    /// Preference for being outside.
    #[cfg_attr(feature = "serde", serde(default))]
    pub outdoor: Option<f64>,
    /// Preference for avoiding crowds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub crowd_averse: Option<f64>,
    /// Caller-supplied creation time in epoch milliseconds.
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")
    )]
    pub created_at_ms: Option<i64>,
}

impl ProfileDraft {
    const fn value(&self, t: Trait) -> Option<f64> {
        match t {
            Trait::Relax => self.relax,
            Trait::Activity => self.activity,
            Trait::Novelty => self.novelty,
            Trait::Outdoor => self.outdoor,
            Trait::CrowdAverse => self.crowd_averse,
        }
    }

    /// Turn the draft into a validated profile.
    ///
    /// # Errors
    /// Returns [`UserProfileError::Incomplete`] listing every missing trait,
    /// or [`UserProfileError::OutOfRange`] for an invalid value.
    pub fn complete(&self) -> Result<UserProfile, UserProfileError> {
        let missing: Vec<Trait> = Trait::ALL
            .into_iter()
            .filter(|t| self.value(*t).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(UserProfileError::Incomplete { missing });
        }
        let preferences = TraitVector::from_fn(|t| self.value(t).unwrap_or_default());
        let profile = UserProfile::new(preferences)?;
        Ok(self
            .created_at_ms
            .map_or(profile, |ts| profile.with_created_at_ms(ts)))
    }
}

impl From<UserProfile> for ProfileDraft {
    fn from(profile: UserProfile) -> Self {
        let p = profile.preferences;
        Self {
            relax: Some(p.relax),
            activity: Some(p.activity),
            novelty: Some(p.novelty),
            outdoor: Some(p.outdoor),
            crowd_averse: Some(p.crowd_averse),
            created_at_ms: profile.created_at_ms,
        }
    }
}

impl TryFrom<ProfileDraft> for UserProfile {
    type Error = UserProfileError;

    fn try_from(draft: ProfileDraft) -> Result<Self, Self::Error> {
        draft.complete()
    }
}
