//! Category presets used when a place carries no explicit vibe attributes.
#![forbid(unsafe_code)]

use vibemap_core::TraitVector;

/// Vibe vectors per lower-case category key.
pub static CATEGORY_PRESETS: &[(&str, TraitVector)] = &[
    ("solo", TraitVector::new(0.85, 0.2, 0.4, 0.2, 0.8)),
    ("couple", TraitVector::new(0.6, 0.5, 0.6, 0.6, 0.5)),
    ("family", TraitVector::new(0.4, 0.8, 0.6, 0.5, 0.3)),
    ("park", TraitVector::new(0.7, 0.5, 0.4, 0.9, 0.6)),
    ("museum", TraitVector::new(0.8, 0.2, 0.5, 0.2, 0.8)),
    ("amusement", TraitVector::new(0.3, 0.95, 0.8, 0.6, 0.1)),
    ("cafe", TraitVector::new(0.7, 0.2, 0.5, 0.2, 0.7)),
];

/// Look up the preset for a category key.
///
/// The key is trimmed and compared case-insensitively.
///
/// # Examples
/// ```
/// use vibemap_scorer::preset_for;
///
/// assert_eq!(preset_for(" Park ").map(|v| v.outdoor), Some(0.9));
/// assert!(preset_for("library").is_none());
/// ```
#[must_use]
pub fn preset_for(category: &str) -> Option<TraitVector> {
    let key = category.trim().to_lowercase();
    CATEGORY_PRESETS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, vector)| *vector)
}
