//! Display orderings applied after ranking.
#![forbid(unsafe_code)]

use geo::Coord;
use vibemap_core::{Place, ScoredPlace, Trait};

/// Kilometres per degree of latitude in the flat-earth approximation.
pub const KM_PER_DEGREE_LAT: f64 = 111.0;
/// Kilometres per degree of longitude in the flat-earth approximation,
/// tuned for mid latitudes.
pub const KM_PER_DEGREE_LNG: f64 = 88.0;

/// How a ranked list is ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SortOrder {
    /// Keep the ranking order.
    #[default]
    Recommended,
    /// Closest to `origin` first.
    Distance {
        /// Reference point with `x` as longitude.
        origin: Coord<f64>,
    },
    /// Places whose reasons include novelty first.
    Novelty,
}

impl SortOrder {
    /// Re-order scored places. Every ordering is stable.
    #[must_use]
    pub fn sort_scored(&self, mut scored: Vec<ScoredPlace>) -> Vec<ScoredPlace> {
        match self {
            Self::Recommended => {}
            Self::Distance { origin } => scored.sort_by(|a, b| {
                approx_distance_km(*origin, &a.place)
                    .total_cmp(&approx_distance_km(*origin, &b.place))
            }),
            Self::Novelty => scored.sort_by_key(|s| !s.reasons.contains(&Trait::Novelty)),
        }
        scored
    }

    /// Re-order unscored places.
    ///
    /// Unscored places have no reasons, so [`SortOrder::Novelty`] leaves them
    /// as they are.
    #[must_use]
    pub fn sort_places(&self, mut places: Vec<Place>) -> Vec<Place> {
        if let Self::Distance { origin } = self {
            places.sort_by(|a, b| {
                approx_distance_km(*origin, a).total_cmp(&approx_distance_km(*origin, b))
            });
        }
        places
    }
}

/// Quick planar distance in kilometres used for list ordering.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vibemap_core::Place;
/// use vibemap_scorer::approx_distance_km;
///
/// let origin = Coord { x: 139.0, y: 35.0 };
/// assert_eq!(approx_distance_km(origin, &Place::at(1, 36.0, 139.0)), 111.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "planar distance from scaled degree deltas"
)]
#[must_use]
pub fn approx_distance_km(origin: Coord<f64>, place: &Place) -> f64 {
    let d_lat = (place.lat() - origin.y) * KM_PER_DEGREE_LAT;
    let d_lng = (place.lng() - origin.x) * KM_PER_DEGREE_LNG;
    d_lat.hypot(d_lng)
}
