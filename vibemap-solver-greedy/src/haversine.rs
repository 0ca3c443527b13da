//! Great-circle distance on a spherical Earth.

use geo::Coord;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two WGS84 coordinates.
///
/// Coordinates use `x` for longitude and `y` for latitude, both in degrees.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vibemap_solver_greedy::haversine_km;
///
/// let tokyo = Coord { x: 139.6917, y: 35.6895 };
/// let osaka = Coord { x: 135.5023, y: 34.6937 };
/// let km = haversine_km(tokyo, osaka);
/// assert!((km - 396.4).abs() < 0.5);
/// assert_eq!(haversine_km(tokyo, tokyo), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "haversine formula is plain trigonometry"
)]
#[must_use]
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let half_d_lat = (lat2 - lat1) / 2.0;
    let half_d_lng = (b.x - a.x).to_radians() / 2.0;
    let h = half_d_lat.sin().powi(2) + lat1.cos() * lat2.cos() * half_d_lng.sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
