//! Pairwise great-circle distances between selected places.

use vibemap_core::Place;

use crate::haversine_km;

/// Symmetric matrix of haversine distances in kilometres.
///
/// Distances are stored row-major; the diagonal is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute every pairwise distance for `places`.
    ///
    /// # Examples
    /// ```
    /// use vibemap_core::Place;
    /// use vibemap_solver_greedy::DistanceMatrix;
    ///
    /// let places = vec![Place::at(1, 0.0, 0.0), Place::at(2, 0.0, 1.0)];
    /// let matrix = DistanceMatrix::from_places(&places);
    /// assert_eq!(matrix.len(), 2);
    /// assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
    /// assert_eq!(matrix.get(1, 1), Some(0.0));
    /// assert_eq!(matrix.get(2, 0), None);
    /// ```
    #[must_use]
    pub fn from_places(places: &[Place]) -> Self {
        let size = places.len();
        let mut distances = vec![0.0; size * size];
        for (i, a) in places.iter().enumerate() {
            for (j, b) in places.iter().enumerate().skip(i + 1) {
                let km = haversine_km(a.location, b.location);
                if let Some(cell) = distances.get_mut(i * size + j) {
                    *cell = km;
                }
                if let Some(cell) = distances.get_mut(j * size + i) {
                    *cell = km;
                }
            }
        }
        Self { size, distances }
    }

    /// Distance between the places at `from` and `to`, if both exist.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.distances.get(from * self.size + to).copied()
    }

    /// Number of places covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the matrix covers no places.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Row of distances from `from` to every place, in input order.
    pub fn row(&self, from: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = from.saturating_mul(self.size);
        let row = if from < self.size {
            self.distances.get(start..start + self.size).unwrap_or_default()
        } else {
            &[]
        };
        row.iter().copied().enumerate()
    }
}
