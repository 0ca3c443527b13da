//! Places a visitor might go, and the loose vibe attributes they carry.
//!
//! Upstream place records are hand-maintained, so vibe values arrive as
//! numbers, numeric strings, or junk. [`VibeValue`] keeps whatever was
//! supplied and [`VibeValue::coerce`] turns it into a usable number without
//! ever failing.

use std::collections::BTreeSet;

use geo::Coord;

use crate::trait_vector::NEUTRAL_VALUE;

/// A raw vibe attribute as found on a place record.
///
/// # Examples
/// ```
/// use vibemap_core::VibeValue;
///
/// assert_eq!(VibeValue::Number(0.8).coerce(), 0.8);
/// assert_eq!(VibeValue::Text("0.25".into()).coerce(), 0.25);
/// assert_eq!(VibeValue::Text("lively".into()).coerce(), 0.5);
/// assert_eq!(VibeValue::Invalid.coerce(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum VibeValue {
    /// A numeric value.
    Number(f64),
    /// A textual value, usually a number stored as a string.
    Text(String),
    /// A value of some other shape that cannot be interpreted.
    Invalid,
}

impl VibeValue {
    /// Convert the value to a number, falling back to `0.5`.
    ///
    /// Text is parsed after trimming. Anything unparsable or non-finite
    /// yields the neutral value.
    #[must_use]
    pub fn coerce(&self) -> f64 {
        let parsed = match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
            Self::Invalid => None,
        };
        match parsed {
            Some(value) if value.is_finite() => value,
            _ => {
                log::debug!("coercing unusable vibe value {self:?} to {NEUTRAL_VALUE}");
                NEUTRAL_VALUE
            }
        }
    }
}

impl From<f64> for VibeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for VibeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawVibeValue {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VibeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <RawVibeValue as serde::Deserialize>::deserialize(deserializer)?;
        Ok(match raw {
            RawVibeValue::Number(value) => Self::Number(value),
            RawVibeValue::Text(text) => Self::Text(text),
            RawVibeValue::Other(_) => Self::Invalid,
        })
    }
}

/// Explicit vibe attributes that override the category preset.
///
/// The `trendy` attribute feeds the novelty trait.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VibeAttributes {
    /// Calmness of the place.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "vibe_relax", default, skip_serializing_if = "Option::is_none")
    )]
    pub relax: Option<VibeValue>,
    /// How active a visit is.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "vibe_activity", default, skip_serializing_if = "Option::is_none")
    )]
    pub activity: Option<VibeValue>,
    /// How trendy or unusual the place is.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "vibe_trendy", default, skip_serializing_if = "Option::is_none")
    )]
    pub trendy: Option<VibeValue>,
    /// How much of the visit is outdoors.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "vibe_outdoor", default, skip_serializing_if = "Option::is_none")
    )]
    pub outdoor: Option<VibeValue>,
    /// How quiet the place tends to be.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "vibe_crowd_averse",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub crowd_averse: Option<VibeValue>,
}

impl VibeAttributes {
    /// Report whether at least one attribute was supplied.
    ///
    /// # Examples
    /// ```
    /// use vibemap_core::VibeAttributes;
    ///
    /// assert!(!VibeAttributes::default().any_present());
    /// let attrs = VibeAttributes { outdoor: Some(0.9.into()), ..VibeAttributes::default() };
    /// assert!(attrs.any_present());
    /// ```
    #[must_use]
    pub const fn any_present(&self) -> bool {
        self.relax.is_some()
            || self.activity.is_some()
            || self.trendy.is_some()
            || self.outdoor.is_some()
            || self.crowd_averse.is_some()
    }
}

/// A location worth visiting.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vibemap_core::Place;
///
/// let place = Place::new(1, Coord { x: 127.0069, y: 37.3926 })
///     .with_name("Central Park")
///     .with_category("Park");
///
/// assert_eq!(place.id, 1);
/// assert_eq!(place.lat(), 37.3926);
/// assert_eq!(place.category_key().as_deref(), Some("park"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PlaceRecord", into = "PlaceRecord")
)]
pub struct Place {
    /// Unique identifier, stable for the session.
    pub id: u64,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Category tag, compared case-insensitively.
    pub category: Option<String>,
    /// Free-text labels.
    pub tags: BTreeSet<String>,
    /// Explicit vibe attributes.
    pub vibes: VibeAttributes,
}

impl Place {
    /// Construct a place with only an identity and a position.
    #[must_use]
    pub fn new(id: u64, location: Coord<f64>) -> Self {
        Self {
            id,
            location,
            name: String::new(),
            description: String::new(),
            category: None,
            tags: BTreeSet::new(),
            vibes: VibeAttributes::default(),
        }
    }

    /// Construct a place from latitude and longitude in decimal degrees.
    ///
    /// # Examples
    /// ```
    /// use vibemap_core::Place;
    ///
    /// let place = Place::at(7, 37.39, 126.95);
    /// assert_eq!(place.location.x, 126.95);
    /// assert_eq!(place.location.y, 37.39);
    /// ```
    #[must_use]
    pub fn at(id: u64, lat: f64, lng: f64) -> Self {
        Self::new(id, Coord { x: lng, y: lat })
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category tag.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add a free-text label.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Replace the explicit vibe attributes.
    #[must_use]
    pub fn with_vibes(mut self, vibes: VibeAttributes) -> Self {
        self.vibes = vibes;
        self
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.location.x
    }

    /// Return the trimmed, lower-cased category, if one is set and non-empty.
    #[must_use]
    pub fn category_key(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
    }

    /// Report whether the place carries `tag`, ignoring case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == needle)
    }

    /// Report whether the coordinates are finite and on the globe.
    ///
    /// # Examples
    /// ```
    /// use vibemap_core::Place;
    ///
    /// assert!(Place::at(1, 37.4, 127.0).has_valid_coordinates());
    /// assert!(!Place::at(2, f64::NAN, 127.0).has_valid_coordinates());
    /// assert!(!Place::at(3, 91.0, 0.0).has_valid_coordinates());
    /// ```
    #[must_use]
    pub fn has_valid_coordinates(&self) -> bool {
        let Coord { x: lng, y: lat } = self.location;
        lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PlaceRecord {
    id: u64,
    lat: f64,
    lng: f64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<String>,
    #[serde(flatten)]
    vibes: VibeAttributes,
}

#[cfg(feature = "serde")]
impl From<PlaceRecord> for Place {
    fn from(record: PlaceRecord) -> Self {
        Self {
            id: record.id,
            location: Coord {
                x: record.lng,
                y: record.lat,
            },
            name: record.name,
            description: record.description,
            category: record.category,
            tags: record.tags,
            vibes: record.vibes,
        }
    }
}

#[cfg(feature = "serde")]
impl From<Place> for PlaceRecord {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            lat: place.location.y,
            lng: place.location.x,
            name: place.name,
            description: place.description,
            category: place.category,
            tags: place.tags,
            vibes: place.vibes,
        }
    }
}
