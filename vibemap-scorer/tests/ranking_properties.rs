//! Property tests for scoring and ranking invariants.

use proptest::prelude::*;
use vibemap_core::test_support::place_with_vibe;
use vibemap_core::{Place, Trait, TraitVector, UserProfile};
use vibemap_scorer::{VibeScorer, rank_profile, reasons_from_contributions};

fn unit_vector() -> impl Strategy<Value = TraitVector> {
    prop::array::uniform5(0.0_f64..=1.0).prop_map(|[a, b, c, d, e]| TraitVector::new(a, b, c, d, e))
}

fn places() -> impl Strategy<Value = Vec<Place>> {
    prop::collection::vec(unit_vector(), 0..24).prop_map(|vibes| {
        vibes
            .into_iter()
            .zip(1..)
            .map(|(vibe, id)| place_with_vibe(id, vibe))
            .collect()
    })
}

proptest! {
    #[test]
    fn ranking_is_a_permutation(prefs in unit_vector(), input in places()) {
        let profile = UserProfile::new(prefs).expect("unit vector");
        let mut ranked: Vec<u64> = rank_profile(&profile, &input).iter().map(|s| s.place.id).collect();
        let mut input_ids: Vec<u64> = input.iter().map(|p| p.id).collect();
        ranked.sort_unstable();
        input_ids.sort_unstable();
        prop_assert_eq!(ranked, input_ids);
    }

    #[test]
    fn ranking_is_non_increasing_and_stable(prefs in unit_vector(), input in places()) {
        let profile = UserProfile::new(prefs).expect("unit vector");
        let ranked = rank_profile(&profile, &input);
        for pair in ranked.windows(2) {
            let [first, second] = pair else { continue };
            prop_assert!(first.raw_score >= second.raw_score);
            if first.raw_score == second.raw_score {
                prop_assert!(first.place.id < second.place.id);
            }
        }
    }

    #[test]
    fn ranking_is_idempotent(prefs in unit_vector(), input in places()) {
        let profile = UserProfile::new(prefs).expect("unit vector");
        prop_assert_eq!(rank_profile(&profile, &input), rank_profile(&profile, &input));
    }

    #[test]
    fn percent_stays_in_range(prefs in unit_vector(), vibe in unit_vector()) {
        let profile = UserProfile::new(prefs).expect("unit vector");
        let scored = VibeScorer::default().score_place(&profile, &place_with_vibe(1, vibe));
        prop_assert!(scored.percent_score <= 100);
        prop_assert!(scored.raw_score >= 0.0);
    }

    #[test]
    fn reasons_are_three_distinct_strongest(contributions in unit_vector()) {
        let reasons = reasons_from_contributions(&contributions);
        prop_assert_eq!(reasons.len(), 3);
        let weakest_kept = reasons
            .iter()
            .map(|t| contributions.get(*t))
            .fold(f64::INFINITY, f64::min);
        for t in Trait::ALL.into_iter().filter(|t| !reasons.contains(t)) {
            prop_assert!(contributions.get(t) <= weakest_kept);
        }
    }
}
