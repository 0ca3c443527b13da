//! Builders shared by unit, behaviour and property tests across the
//! workspace.

use std::collections::BTreeSet;

use crate::{Place, Trait, TraitVector, UserProfile, VibeAttributes, VibeValue};

/// Construct a place whose explicit vibe attributes equal `vibe`.
///
/// The novelty component is written to the `trendy` attribute.
#[must_use]
pub fn place_with_vibe(id: u64, vibe: TraitVector) -> Place {
    let value = |t: Trait| Some(VibeValue::Number(vibe.get(t)));
    Place::at(id, 0.0, 0.0).with_vibes(VibeAttributes {
        relax: value(Trait::Relax),
        activity: value(Trait::Activity),
        trendy: value(Trait::Novelty),
        outdoor: value(Trait::Outdoor),
        crowd_averse: value(Trait::CrowdAverse),
    })
}

/// Construct a place carrying only a category.
#[must_use]
pub fn place_in_category(id: u64, category: &str) -> Place {
    Place::at(id, 0.0, 0.0).with_category(category)
}

/// Construct places from `(lat, lng)` pairs with ids `1..`.
#[must_use]
pub fn places_at(coords: &[(f64, f64)]) -> Vec<Place> {
    coords
        .iter()
        .zip(1..)
        .map(|(&(lat, lng), id)| Place::at(id, lat, lng))
        .collect()
}

/// A profile with every preference set to `value`.
///
/// # Panics
/// Panics when `value` lies outside `0.0..=1.0`.
#[must_use]
#[expect(clippy::expect_used, reason = "test helper with caller-chosen constants")]
pub fn uniform_profile(value: f64) -> UserProfile {
    UserProfile::new(TraitVector::splat(value)).expect("uniform profile value in range")
}

/// A profile with the given preferences.
///
/// # Panics
/// Panics when a preference lies outside `0.0..=1.0`.
#[must_use]
#[expect(clippy::expect_used, reason = "test helper with caller-chosen constants")]
pub fn profile(preferences: TraitVector) -> UserProfile {
    UserProfile::new(preferences).expect("profile values in range")
}

/// Three places at `lat`: an anchor, one a degree north, one a degree east.
///
/// Away from the equator the eastern neighbour is closer; on the equator the
/// two are exactly equidistant.
#[expect(
    clippy::float_arithmetic,
    reason = "fixture offsets coordinates by whole degrees"
)]
#[must_use]
pub fn triangle(lat: f64) -> Vec<Place> {
    places_at(&[(lat, 139.0), (lat + 1.0, 139.0), (lat, 140.0)])
}

/// Identifiers of `places` in order.
#[must_use]
pub fn ids(places: &[Place]) -> Vec<u64> {
    places.iter().map(|p| p.id).collect()
}

/// Identifiers of `places` as a set, for permutation checks.
#[must_use]
pub fn id_set(places: &[Place]) -> BTreeSet<u64> {
    places.iter().map(|p| p.id).collect()
}
