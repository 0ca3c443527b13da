//! Filters applied to places before they are ranked.
//!
//! Category keys, free-text queries and geographic regions narrow down the
//! list a visitor browses. None of them affect scoring.

use std::str::FromStr;

use geo::{Coord, Intersects, Rect};

use crate::Place;

const STUDY_CATEGORIES: [&str; 2] = ["solo", "cafe"];
const PET_TAGS: [&str; 2] = ["pet", "애견"];

/// A category chip the visitor can select.
///
/// # Examples
/// ```
/// use vibemap_core::{CategoryFilter, Place};
///
/// let filter: CategoryFilter = "study".parse().unwrap_or_default();
/// let cafe = Place::at(1, 0.0, 0.0).with_category("Cafe");
/// assert!(filter.matches(&cafe));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every place.
    #[default]
    All,
    /// Quiet places to work: solo or cafe categories, or a `study` tag.
    Study,
    /// Pet-friendly places: a `pet` category, or a `pet` or `애견` tag.
    Pet,
    /// Places whose category or one of whose tags equals the key.
    Key(String),
}

impl CategoryFilter {
    /// Report whether `place` passes the filter.
    #[must_use]
    pub fn matches(&self, place: &Place) -> bool {
        let category = place.category_key();
        let category_is = |key: &str| category.as_deref() == Some(key);
        match self {
            Self::All => true,
            Self::Study => {
                STUDY_CATEGORIES.iter().copied().any(category_is) || place.has_tag("study")
            }
            Self::Pet => PET_TAGS.iter().any(|tag| place.has_tag(tag)) || category_is("pet"),
            Self::Key(key) => category_is(key.as_str()) || place.has_tag(key),
        }
    }

    /// Keep the places that pass the filter, in input order.
    #[must_use]
    pub fn apply(&self, places: &[Place]) -> Vec<Place> {
        places.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Ok(match key.as_str() {
            "" | "all" => Self::All,
            "study" => Self::Study,
            "pet" => Self::Pet,
            _ => Self::Key(key),
        })
    }
}

/// Report whether `place` mentions `query` in its name or description.
///
/// Matching is case-insensitive on the trimmed query; an empty query matches
/// every place.
///
/// # Examples
/// ```
/// use vibemap_core::{Place, filter::matches_query};
///
/// let place = Place::at(1, 0.0, 0.0).with_name("Riverside Park");
/// assert!(matches_query(&place, "  RIVER "));
/// assert!(!matches_query(&place, "museum"));
/// ```
#[must_use]
pub fn matches_query(place: &Place, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || place.name.to_lowercase().contains(&needle)
        || place.description.to_lowercase().contains(&needle)
}

/// A latitude/longitude bounding box.
///
/// Boundary points count as inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    bounds: Rect<f64>,
}

impl Region {
    /// Build a region from two opposite corners given as `(lat, lng)`.
    ///
    /// # Examples
    /// ```
    /// use vibemap_core::{Place, Region};
    ///
    /// let region = Region::from_corners((35.0, 139.0), (36.0, 140.0));
    /// assert!(region.contains(&Place::at(1, 35.5, 139.5)));
    /// assert!(region.contains(&Place::at(2, 36.0, 140.0)));
    /// assert!(!region.contains(&Place::at(3, 34.0, 139.5)));
    /// ```
    #[must_use]
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            bounds: Rect::new(Coord { x: a.1, y: a.0 }, Coord { x: b.1, y: b.0 }),
        }
    }

    /// The underlying rectangle, with `x` as longitude.
    #[must_use]
    pub const fn bounds(&self) -> Rect<f64> {
        self.bounds
    }

    /// Report whether `place` lies within the region.
    #[must_use]
    pub fn contains(&self, place: &Place) -> bool {
        self.bounds.intersects(&place.location)
    }

    /// Keep the places inside the region.
    ///
    /// When no place falls inside, the input is returned unchanged so the
    /// visitor still has something to browse.
    #[must_use]
    pub fn restrict(&self, places: &[Place]) -> Vec<Place> {
        let inside: Vec<Place> = places.iter().filter(|p| self.contains(p)).cloned().collect();
        if inside.is_empty() {
            log::debug!(
                "no places inside region {:?}; keeping all {}",
                self.bounds,
                places.len()
            );
            return places.to_vec();
        }
        inside
    }
}

impl From<Rect<f64>> for Region {
    fn from(bounds: Rect<f64>) -> Self {
        Self { bounds }
    }
}
