//! Pipeline Tests
//!
//! Response body -> normalize -> fetch state -> derived view, as each page
//! drives it.

use serde_json::json;

use crate::views::{self, ChoiceFilter};
use crate::{normalize_as, Activity, ApiConfig, Collection, DetailSelection, FetchError, FetchState, Team, Workout};

fn populate<T: crate::Entity>(body: serde_json::Value) -> FetchState<T> {
    let mut state = FetchState::Loading;
    state.resolve(Ok(normalize_as(body)));
    state
}

#[test]
fn test_teams_page_flow() {
    let url = ApiConfig::from_codespace("demo").endpoint(Collection::Teams);
    assert!(url.ends_with("/api/teams/"));

    let state: FetchState<Team> = populate(json!({
        "results": [{ "id": 1, "name": "Alpha", "members": [1, 2], "created_at": "2024-01-01" }]
    }));
    let teams = state.items();
    assert_eq!(teams.len(), 1);
    assert_eq!(views::teams::members_label(&teams[0]), "2 members");
    assert_eq!(crate::format::date_or_na(teams[0].created_at()), "1/1/2024");

    let mut selection = DetailSelection::default();
    selection.open(teams[0].clone());
    assert_eq!(selection.selected().and_then(Team::name), Some("Alpha"));
    selection.close();
    assert!(!selection.is_open());
}

#[test]
fn test_envelope_and_bare_yield_same_state() {
    let items = json!([{ "id": 1, "activity_type": "Run" }, { "id": 2 }]);
    let bare: FetchState<Activity> = populate(items.clone());
    let wrapped: FetchState<Activity> = populate(json!({ "results": items }));
    assert_eq!(bare, wrapped);
}

#[test]
fn test_non_array_body_populates_empty() {
    let state: FetchState<Workout> = populate(json!({ "detail": "ok" }));
    assert!(!state.is_loading());
    assert!(state.items().is_empty());
    assert_eq!(state.error(), None);
}

#[test]
fn test_failed_fetch_holds_message() {
    let mut state = FetchState::<Team>::Loading;
    state.resolve(Err(FetchError::Status(503)));
    assert_eq!(state.error(), Some("HTTP error! status: 503"));
}

#[test]
fn test_activities_page_flow() {
    let state: FetchState<Activity> = populate(json!([
        { "_id": "a1", "user_id": 7, "activity_type": "Running", "duration": 30, "distance": 5.25, "calories": 0 },
        { "_id": "a2", "user": "maria", "activity_type": "Cycling", "calories_burned": 1200, "distance": 20 }
    ]));
    let activities = state.items();
    assert_eq!(views::activities::activity_types(activities), vec!["Running", "Cycling"]);

    let running = views::activities::filter_activities(activities, &ChoiceFilter::from_choice("Running"));
    let totals = views::activities::totals(&running);
    assert_eq!(totals.calories, 0.0);
    assert_eq!(crate::format::fixed2(totals.distance), "5.25");

    let all = views::activities::filter_activities(activities, &ChoiceFilter::All);
    assert_eq!(crate::format::thousands(views::activities::totals(&all).calories), "1,200");
}

#[test]
fn test_non_finite_strings_do_not_poison_totals() {
    let state: FetchState<Activity> = populate(json!([
        { "activity_type": "Running", "distance": "NaN", "calories": "inf" },
        { "activity_type": "Running", "distance": 5, "calories": 100 }
    ]));
    let all = views::activities::filter_activities(state.items(), &ChoiceFilter::All);
    let totals = views::activities::totals(&all);
    assert_eq!(crate::format::fixed2(totals.distance), "5.00");
    assert_eq!(crate::format::thousands(totals.calories), "100");
}
