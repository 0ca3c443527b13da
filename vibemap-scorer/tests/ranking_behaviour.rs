//! Behavioural tests for ranking places against visitor profiles.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use vibemap_core::{Place, ProfileDraft, Trait, VibeAttributes, VibeValue};
use vibemap_scorer::{Ranking, rank_draft};

#[fixture]
fn places() -> RefCell<Vec<Place>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn draft() -> RefCell<ProfileDraft> {
    RefCell::new(ProfileDraft::default())
}

#[fixture]
fn ranking() -> RefCell<Option<Ranking>> {
    RefCell::new(None)
}

const MUSEUM: u64 = 1;
const PARK: u64 = 2;
const AMUSEMENT: u64 = 3;

fn ranked_ids(ranking: &RefCell<Option<Ranking>>) -> Vec<u64> {
    ranking.borrow().as_ref().map(Ranking::ids).unwrap_or_default()
}

#[given("a museum, a park and an amusement park")]
fn given_three_places(#[from(places)] places: &RefCell<Vec<Place>>) {
    places.borrow_mut().extend([
        Place::at(MUSEUM, 35.71, 139.77).with_category("museum"),
        Place::at(PARK, 35.68, 139.70).with_category("park"),
        Place::at(AMUSEMENT, 35.63, 139.88).with_category("amusement"),
    ]);
}

#[given("a museum tagged as lively and crowded")]
fn given_lively_museum(#[from(places)] places: &RefCell<Vec<Place>>) {
    let vibes = VibeAttributes {
        relax: Some(VibeValue::Number(0.1)),
        crowd_averse: Some(VibeValue::Text("0.05".into())),
        ..VibeAttributes::default()
    };
    places
        .borrow_mut()
        .push(Place::at(MUSEUM, 35.71, 139.77).with_category("museum").with_vibes(vibes));
}

#[given("a park")]
fn given_park(#[from(places)] places: &RefCell<Vec<Place>>) {
    places
        .borrow_mut()
        .push(Place::at(PARK, 35.68, 139.70).with_category("park"));
}

#[given("a visitor who wants quiet, uncrowded places")]
fn given_calm_visitor(#[from(draft)] draft: &RefCell<ProfileDraft>) {
    *draft.borrow_mut() = ProfileDraft {
        relax: Some(1.0),
        activity: Some(0.0),
        novelty: Some(0.25),
        outdoor: Some(0.25),
        crowd_averse: Some(1.0),
        created_at_ms: None,
    };
}

#[given("a visitor who has not finished the survey")]
fn given_partial_visitor(#[from(draft)] draft: &RefCell<ProfileDraft>) {
    *draft.borrow_mut() = ProfileDraft {
        relax: Some(1.0),
        ..ProfileDraft::default()
    };
}

#[when("I rank the places")]
fn when_rank(
    #[from(places)] places: &RefCell<Vec<Place>>,
    #[from(draft)] draft: &RefCell<ProfileDraft>,
    #[from(ranking)] ranking: &RefCell<Option<Ranking>>,
) {
    *ranking.borrow_mut() = Some(rank_draft(Some(&draft.borrow()), &places.borrow()));
}

#[then("the order is museum, park, amusement park")]
fn then_calm_order(#[from(ranking)] ranking: &RefCell<Option<Ranking>>) {
    assert_eq!(ranked_ids(ranking), vec![MUSEUM, PARK, AMUSEMENT]);
}

#[then("the museum is explained by relax and crowd aversion")]
fn then_museum_reasons(#[from(ranking)] ranking: &RefCell<Option<Ranking>>) {
    let Some(Ranking::Personalised(scored)) = ranking.borrow().clone() else {
        panic!("expected a personalised ranking");
    };
    let museum = scored.first().expect("museum ranked");
    assert_eq!(
        museum.reasons.get(..2),
        Some([Trait::Relax, Trait::CrowdAverse].as_slice())
    );
}

#[then("the places are unscored in input order")]
fn then_unscored(
    #[from(places)] places: &RefCell<Vec<Place>>,
    #[from(ranking)] ranking: &RefCell<Option<Ranking>>,
) {
    assert_eq!(
        *ranking.borrow(),
        Some(Ranking::Unpersonalised(places.borrow().clone()))
    );
}

#[then("the park comes first")]
fn then_park_first(#[from(ranking)] ranking: &RefCell<Option<Ranking>>) {
    assert_eq!(ranked_ids(ranking).first(), Some(&PARK));
}

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn calm_visitor_sees_museum_first(
    places: RefCell<Vec<Place>>,
    draft: RefCell<ProfileDraft>,
    ranking: RefCell<Option<Ranking>>,
) {
    let _ = (places, draft, ranking);
}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn missing_profile_leaves_list_unchanged(
    places: RefCell<Vec<Place>>,
    draft: RefCell<ProfileDraft>,
    ranking: RefCell<Option<Ranking>>,
) {
    let _ = (places, draft, ranking);
}

#[scenario(path = "tests/features/ranking.feature", index = 2)]
fn explicit_vibes_outrank_presets(
    places: RefCell<Vec<Place>>,
    draft: RefCell<ProfileDraft>,
    ranking: RefCell<Option<Ranking>>,
) {
    let _ = (places, draft, ranking);
}
