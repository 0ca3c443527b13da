//! Routes through selected places.

use crate::Place;

/// An ordered visiting sequence over a selection of places.
///
/// A route holds the same places as the selection it was planned from, each
/// exactly once.
///
/// # Examples
/// ```
/// use vibemap_core::{Place, Route};
///
/// let route = Route::new(vec![Place::at(1, 0.0, 0.0), Place::at(2, 0.0, 1.0)]);
/// assert_eq!(route.ids(), vec![1, 2]);
/// assert_eq!(route.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route {
    places: Vec<Place>,
}

impl Route {
    /// Wrap places in visiting order.
    #[must_use]
    pub const fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    /// Construct an empty route.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Places in visiting order.
    #[must_use]
    pub const fn places(&self) -> &[Place] {
        self.places.as_slice()
    }

    /// Identifiers in visiting order.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.places.iter().map(|p| p.id).collect()
    }

    /// Number of stops.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the route has no stops.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Consume the route, returning its places.
    #[must_use]
    pub fn into_places(self) -> Vec<Place> {
        self.places
    }
}

impl From<Route> for Vec<Place> {
    fn from(route: Route) -> Self {
        route.into_places()
    }
}
