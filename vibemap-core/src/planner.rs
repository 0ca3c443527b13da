//! Route planning seam.
//!
//! A [`RoutePlanner`] turns a [`RouteRequest`] into a [`Route`]. Planners
//! must be `Send + Sync` and must not mutate the request.

use thiserror::Error;

use crate::{Place, Route};

/// Places selected for a route and the index of the stop to start from.
///
/// # Examples
/// ```rust
/// use vibemap_core::{Place, RouteRequest};
///
/// let request = RouteRequest::new(vec![Place::at(1, 0.0, 0.0)]);
/// assert_eq!(request.anchor, 0);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteRequest {
    /// Selected places in the caller's order.
    pub places: Vec<Place>,
    /// Index into `places` of the first stop.
    pub anchor: usize,
}

impl RouteRequest {
    /// Request a route anchored at the first selected place.
    #[must_use]
    pub const fn new(places: Vec<Place>) -> Self {
        Self { places, anchor: 0 }
    }

    /// Start from a different selected place.
    #[must_use]
    pub const fn with_anchor(mut self, anchor: usize) -> Self {
        self.anchor = anchor;
        self
    }

    /// Validate the anchor and, for selections a planner will reorder, the
    /// coordinates of every place.
    ///
    /// Selections of fewer than three places are returned unchanged by
    /// planners, so their coordinates are not inspected.
    ///
    /// # Errors
    /// Returns [`RouteError::AnchorOutOfBounds`] when the anchor does not
    /// index a place of a non-empty selection, and
    /// [`RouteError::InvalidCoordinate`] for the first place with a
    /// non-finite or out-of-range coordinate.
    ///
    /// # Examples
    /// ```rust
    /// use vibemap_core::{Place, RouteError, RouteRequest};
    ///
    /// let request = RouteRequest::new(vec![Place::at(1, 0.0, 0.0)]).with_anchor(3);
    /// assert_eq!(
    ///     request.validate(),
    ///     Err(RouteError::AnchorOutOfBounds { anchor: 3, len: 1 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), RouteError> {
        let len = self.places.len();
        if len > 0 && self.anchor >= len {
            return Err(RouteError::AnchorOutOfBounds {
                anchor: self.anchor,
                len,
            });
        }
        if len < MIN_REORDERED_STOPS {
            return Ok(());
        }
        self.places
            .iter()
            .find(|p| !p.has_valid_coordinates())
            .map_or(Ok(()), |place| {
                Err(RouteError::InvalidCoordinate {
                    id: place.id,
                    lat: place.lat(),
                    lng: place.lng(),
                })
            })
    }
}

/// Smallest selection a planner reorders.
pub const MIN_REORDERED_STOPS: usize = 3;

/// Errors returned by [`RoutePlanner::plan`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// A place had a non-finite or out-of-range coordinate.
    #[error("place {id} has invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate {
        /// Identifier of the offending place.
        id: u64,
        /// Its latitude.
        lat: f64,
        /// Its longitude.
        lng: f64,
    },
    /// The anchor index does not refer to a selected place.
    #[error("anchor {anchor} is out of bounds for {len} places")]
    AnchorOutOfBounds {
        /// Requested anchor index.
        anchor: usize,
        /// Number of selected places.
        len: usize,
    },
}

/// Order a selection of places into a visiting route.
///
/// Implementations return [`RouteError`] for invalid requests rather than
/// panicking.
///
/// # Examples
/// ```rust
/// use vibemap_core::{Place, Route, RouteError, RoutePlanner, RouteRequest};
///
/// struct AsGiven;
///
/// impl RoutePlanner for AsGiven {
///     fn plan(&self, request: &RouteRequest) -> Result<Route, RouteError> {
///         request.validate()?;
///         Ok(Route::new(request.places.clone()))
///     }
/// }
///
/// let request = RouteRequest::new(vec![Place::at(1, 0.0, 0.0), Place::at(2, 1.0, 1.0)]);
/// let route = AsGiven.plan(&request)?;
/// assert_eq!(route.ids(), vec![1, 2]);
/// # Ok::<(), RouteError>(())
/// ```
pub trait RoutePlanner: Send + Sync {
    /// Plan a route, or explain why the request is unusable.
    ///
    /// # Errors
    /// Returns [`RouteError`] when the anchor or a coordinate of the
    /// selection is unusable.
    fn plan(&self, request: &RouteRequest) -> Result<Route, RouteError>;
}
