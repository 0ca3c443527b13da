//! Greedy nearest-neighbour route planning.
//!
//! Starting from the anchor, the planner repeatedly walks to the closest
//! place it has not visited yet. The result is an open path, not a tour, and
//! carries no optimality guarantee.

use vibemap_core::{MIN_REORDERED_STOPS, Place, Route, RouteError, RoutePlanner, RouteRequest};

use crate::{DistanceMatrix, haversine_km};

/// [`RoutePlanner`] using the nearest-neighbour heuristic over haversine
/// distances.
///
/// Ties between equally distant candidates go to the one listed first in the
/// request.
///
/// # Examples
/// ```
/// use vibemap_core::{Place, RoutePlanner, RouteRequest};
/// use vibemap_solver_greedy::NearestNeighbourPlanner;
///
/// let places = vec![
///     Place::at(1, 35.0, 139.0),
///     Place::at(2, 35.0, 139.3),
///     Place::at(3, 35.0, 139.1),
/// ];
/// let route = NearestNeighbourPlanner.plan(&RouteRequest::new(places))?;
/// assert_eq!(route.ids(), vec![1, 3, 2]);
/// # Ok::<(), vibemap_core::RouteError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NearestNeighbourPlanner;

impl RoutePlanner for NearestNeighbourPlanner {
    fn plan(&self, request: &RouteRequest) -> Result<Route, RouteError> {
        request
            .validate()
            .inspect_err(|err| log::warn!("rejecting route request: {err}"))?;
        if request.places.len() < MIN_REORDERED_STOPS {
            return Ok(Route::new(request.places.clone()));
        }
        let matrix = DistanceMatrix::from_places(&request.places);
        let order = visiting_order(&matrix, request.anchor);
        let places = order
            .into_iter()
            .filter_map(|idx| request.places.get(idx).cloned())
            .collect();
        let route = Route::new(places);
        log::debug!(
            "planned {} stops covering {:.3} km",
            route.len(),
            route_length_km(route.places())
        );
        Ok(route)
    }
}

/// Indices of the matrix in nearest-neighbour order starting at `anchor`.
fn visiting_order(matrix: &DistanceMatrix, anchor: usize) -> Vec<usize> {
    let mut visited = vec![false; matrix.len()];
    let mut order = Vec::with_capacity(matrix.len());
    let mut current = anchor;
    loop {
        if let Some(seen) = visited.get_mut(current) {
            *seen = true;
        }
        order.push(current);
        let mut nearest: Option<(usize, f64)> = None;
        for (candidate, km) in matrix.row(current) {
            if visited.get(candidate).copied().unwrap_or(true) {
                continue;
            }
            if nearest.is_none_or(|(_, best)| km < best) {
                nearest = Some((candidate, km));
            }
        }
        match nearest {
            Some((next, _)) => current = next,
            None => break,
        }
    }
    order
}

/// Order `places` with [`NearestNeighbourPlanner`], anchored at the first
/// place.
///
/// Selections of zero, one or two places are returned unchanged.
///
/// # Errors
/// Returns [`RouteError::InvalidCoordinate`] when a place in a selection of
/// three or more has an unusable coordinate.
///
/// # Examples
/// ```
/// use vibemap_core::Place;
/// use vibemap_solver_greedy::build_route;
///
/// let pair = vec![Place::at(1, 0.0, 0.0), Place::at(2, 50.0, 50.0)];
/// assert_eq!(build_route(&pair)?, pair);
/// # Ok::<(), vibemap_core::RouteError>(())
/// ```
pub fn build_route(places: &[Place]) -> Result<Vec<Place>, RouteError> {
    NearestNeighbourPlanner
        .plan(&RouteRequest::new(places.to_vec()))
        .map(Route::into_places)
}

/// Total length in kilometres of walking `places` in order.
///
/// # Examples
/// ```
/// use vibemap_core::Place;
/// use vibemap_solver_greedy::route_length_km;
///
/// assert_eq!(route_length_km(&[]), 0.0);
/// assert_eq!(route_length_km(&[Place::at(1, 10.0, 10.0)]), 0.0);
/// let km = route_length_km(&[Place::at(1, 0.0, 0.0), Place::at(2, 0.0, 1.0)]);
/// assert!((km - 111.19).abs() < 0.01);
/// ```
#[must_use]
pub fn route_length_km(places: &[Place]) -> f64 {
    places
        .windows(2)
        .filter_map(|leg| match leg {
            [from, to] => Some(haversine_km(from.location, to.location)),
            _ => None,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use vibemap_core::test_support::{ids, places_at};

    #[rstest]
    #[case(vec![])]
    #[case(vec![(10.0, 10.0)])]
    #[case(vec![(10.0, 10.0), (0.0, 0.0)])]
    fn short_selections_are_unchanged(#[case] coords: Vec<(f64, f64)>) {
        let places = places_at(&coords);
        assert_eq!(build_route(&places), Ok(places));
    }

    #[rstest]
    fn anchor_comes_first_and_closer_neighbour_follows() {
        // At 37.4° N a degree of longitude is ~88 km, a degree of latitude ~111 km.
        let places = places_at(&[(37.4, 139.0), (38.4, 139.0), (37.4, 140.0)]);
        let route = build_route(&places).expect("valid selection");
        assert_eq!(ids(&route), vec![1, 3, 2]);
    }

    #[rstest]
    fn equidistant_candidates_keep_input_order() {
        let places = places_at(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let route = build_route(&places).expect("valid selection");
        assert_eq!(ids(&route), vec![1, 2, 3]);
    }

    #[rstest]
    fn custom_anchor_starts_the_route() {
        let places = places_at(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0)]);
        let request = RouteRequest::new(places).with_anchor(2);
        let route = NearestNeighbourPlanner.plan(&request).expect("valid request");
        // From 3 both 2 and 4 are one degree away; 2 is listed first.
        assert_eq!(route.ids(), vec![3, 2, 1, 4]);
    }

    #[rstest]
    fn invalid_coordinates_are_rejected() {
        let places = places_at(&[(0.0, 0.0), (0.0, 1.0), (95.0, 0.0)]);
        assert_eq!(
            build_route(&places),
            Err(RouteError::InvalidCoordinate {
                id: 3,
                lat: 95.0,
                lng: 0.0
            })
        );
    }

    #[rstest]
    fn out_of_bounds_anchor_is_rejected() {
        let request = RouteRequest::new(places_at(&[(0.0, 0.0)])).with_anchor(1);
        assert_eq!(
            NearestNeighbourPlanner.plan(&request),
            Err(RouteError::AnchorOutOfBounds { anchor: 1, len: 1 })
        );
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test compares floats within a tolerance"
    )]
    fn route_length_sums_legs() {
        let places = places_at(&[(0.0, 0.0), (0.0, 1.0), (0.0, 3.0)]);
        let km = route_length_km(&places);
        assert!((km - 3.0 * 111.194_926_6).abs() < 1e-6);
    }
}
