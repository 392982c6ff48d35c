//! End-to-end: bundled dataset file -> controller -> rendered view.
use chrono::{TimeZone, Utc};
use travel_core::prelude::*;

fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap())
}

fn controller() -> Controller<FileSource, FixedClock> {
    Controller::new(FileSource::default(), clock())
}

fn search(term: &str) -> View {
    controller()
        .handle(UiState::with_input(term), Command::Search)
        .state
        .view
}

fn card_names(view: &View) -> Vec<&str> {
    view.cards().iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn beaches_show_first_two_of_three() {
    let view = search("beaches");
    assert_eq!(
        card_names(&view),
        ["Bora Bora, French Polynesia", "Copacabana Beach, Brazil"]
    );
    // Tahiti is UTC-10, Sao Paulo UTC-3.
    assert_eq!(view.cards()[0].current_time, "2:00:00 AM");
    assert_eq!(view.cards()[1].current_time, "9:00:00 AM");
}

#[test]
fn temples_keyword_is_case_insensitive() {
    assert_eq!(
        card_names(&search("TEMPLES")),
        ["Angkor Wat, Cambodia", "Taj Mahal, India"]
    );
}

#[test]
fn country_keyword_takes_cities_in_dataset_order() {
    assert_eq!(
        card_names(&search("country")),
        ["Sydney, Australia", "Melbourne, Australia"]
    );
}

#[test]
fn country_name_finds_its_cities() {
    assert_eq!(card_names(&search("Japan")), ["Tokyo, Japan", "Kyoto, Japan"]);
    assert_eq!(
        card_names(&search("brazil")),
        ["Rio de Janeiro, Brazil", "São Paulo, Brazil"]
    );
}

#[test]
fn city_name_finds_single_city() {
    assert_eq!(card_names(&search("kyoto")), ["Kyoto, Japan"]);
}

#[test]
fn unknown_keyword_renders_no_results() {
    let view = search("Atlantis");
    assert_eq!(view, View::NoResults);
    assert!(view.to_html().contains("No results found"));
}

#[test]
fn missing_dataset_leaves_view_untouched() {
    let c = Controller::new(FileSource::new("/no/such/travel.json"), clock());
    let before = UiState {
        input: "beach".into(),
        view: View::NoResults,
    };
    let t = c.handle(before.clone(), Command::Search);
    assert_eq!(t.state, before);
    assert!(t.notice.is_none());
}

#[test]
fn results_are_capped_for_every_keyword() {
    let db = Dataset::load_from_path(Dataset::default_dataset_path()).unwrap();
    for kw in ["a", "e", "i", "o", "beach", "temple", "country", "australia", "s", "es"] {
        assert!(db.recommend(kw).len() <= RESULT_CAP, "{kw}");
    }
}

#[test]
fn reset_after_search_clears_everything() {
    let c = controller();
    let searched = c.handle(UiState::with_input("japan"), Command::Search);
    assert!(!searched.state.view.cards().is_empty());
    let reset = c.handle(searched.state, Command::Reset);
    assert_eq!(reset.state, UiState::default());
    assert_eq!(reset.notice, Some(Notice::Info("Search results cleared.")));
}
