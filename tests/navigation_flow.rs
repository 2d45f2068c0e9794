//! Keyboard flow from typing to the detail view, driven through the public
//! event handler and result application.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use pokesearch::events::handle_event;
use pokesearch::logic::apply_search_results;
use pokesearch::state::{
    AppState, Category, DetailKey, DetailStatus, SearchResults, SuggestionItem, View,
};
use tokio::sync::mpsc;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn item(id: u32, name: &str, category: Category) -> SuggestionItem {
    SuggestionItem {
        id,
        name: name.to_string(),
        category,
    }
}

#[test]
/// What: Type, receive results, navigate across sections, open details, go back.
fn type_navigate_open_and_return() {
    let mut app = AppState::default();
    let (qtx, mut qrx) = mpsc::unbounded_channel();
    let (dtx, mut drx) = mpsc::unbounded_channel();

    for c in "sta".chars() {
        handle_event(press(KeyCode::Char(c)), &mut app, &qtx, &dtx);
    }
    let mut latest = None;
    while let Ok(q) = qrx.try_recv() {
        latest = Some(q);
    }
    let latest = latest.expect("query sent");
    assert_eq!(latest.text, "sta");

    // An older response arriving late is ignored.
    assert!(!apply_search_results(
        &mut app,
        SearchResults {
            id: latest.id - 1,
            items: vec![item(1, "Stale", Category::Item)],
        }
    ));
    // Aggregation order puts the ability before the TM; display order flips them.
    assert!(apply_search_results(
        &mut app,
        SearchResults {
            id: latest.id,
            items: vec![
                item(121, "Starmie", Category::Pokemon),
                item(9, "Static", Category::Ability),
                item(25, "TM25: Thunder", Category::Tm),
            ],
        }
    ));
    let titles: Vec<&str> = app.navigator.sections().iter().map(|s| s.title).collect();
    assert_eq!(titles, ["Pokémon", "TMs", "Abilities"]);

    handle_event(press(KeyCode::Down), &mut app, &qtx, &dtx);
    handle_event(press(KeyCode::Down), &mut app, &qtx, &dtx);
    assert_eq!(app.navigator.active(), Some((1, 0)));
    handle_event(press(KeyCode::Enter), &mut app, &qtx, &dtx);

    let key = DetailKey {
        category: Category::Tm,
        id: 25,
    };
    assert_eq!(drx.try_recv().ok(), Some(key));
    assert_eq!(
        app.view,
        View::Details {
            key,
            status: DetailStatus::Loading
        }
    );
    assert!(!app.navigator.is_open());

    app.apply_details(key, Err("No tm found with ID 25".into()));
    handle_event(press(KeyCode::Backspace), &mut app, &qtx, &dtx);
    assert_eq!(app.view, View::Search);
    assert_eq!(app.navigator.query(), "sta");
    assert!(app.navigator.is_open());
}
