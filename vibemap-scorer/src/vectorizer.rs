//! Derive a place's vibe vector.
#![forbid(unsafe_code)]

use vibemap_core::{NEUTRAL_VALUE, Place, TraitVector, VibeAttributes, VibeValue};

use crate::presets::preset_for;

/// Compute the five-trait vibe of `place`.
///
/// Explicit `vibe_*` attributes take precedence: each supplied value is
/// coerced (unparseable or non-finite values become `0.5`) and absent ones
/// default to `0.5`. Without explicit attributes the category preset is
/// used, and places with an unknown or missing category get the neutral
/// vector.
///
/// # Examples
/// ```
/// use vibemap_core::{Place, TraitVector, VibeAttributes};
/// use vibemap_scorer::vectorize;
///
/// let park = Place::at(1, 0.0, 0.0).with_category("park");
/// assert_eq!(vectorize(&park).outdoor, 0.9);
///
/// let custom = park.with_vibes(VibeAttributes {
///     trendy: Some(0.1.into()),
///     ..VibeAttributes::default()
/// });
/// assert_eq!(vectorize(&custom), TraitVector::NEUTRAL.with(vibemap_core::Trait::Novelty, 0.1));
/// ```
#[must_use]
pub fn vectorize(place: &Place) -> TraitVector {
    if place.vibes.any_present() {
        return from_attributes(&place.vibes);
    }
    let Some(key) = place.category_key() else {
        return TraitVector::NEUTRAL;
    };
    preset_for(&key).unwrap_or_else(|| {
        log::debug!("place {}: no preset for category '{key}'", place.id);
        TraitVector::NEUTRAL
    })
}

fn from_attributes(vibes: &VibeAttributes) -> TraitVector {
    let value = |v: Option<&VibeValue>| v.map_or(NEUTRAL_VALUE, VibeValue::coerce);
    TraitVector::new(
        value(vibes.relax.as_ref()),
        value(vibes.activity.as_ref()),
        value(vibes.trendy.as_ref()),
        value(vibes.outdoor.as_ref()),
        value(vibes.crowd_averse.as_ref()),
    )
}
