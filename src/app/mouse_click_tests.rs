//! Tests for mouse click handling

use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::Focus;
use crate::layout::Region;
use crate::lookup::worker::LookupRequest;
use crate::test_utils::test_helpers::{app_with_catalog, sent_requests, type_query};

use super::handle_click;

const CATALOG: &[&str] = &["pichu", "pikachu", "raichu"];

fn create_mouse_event(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// App showing all three suggestions in a popup at rows 6..11
fn app_with_popup() -> (
    crate::app::App,
    tokio::sync::mpsc::UnboundedReceiver<LookupRequest>,
    std::sync::mpsc::Sender<crate::lookup::worker::LookupResponse>,
) {
    let (mut app, request_rx, response_tx) = app_with_catalog(CATALOG);
    type_query(&mut app, "chu");
    app.layout_regions.suggestions = Some(Rect::new(1, 6, 20, 5));
    app.autocomplete.set_viewport_rows(3);
    (app, request_rx, response_tx)
}

#[test]
fn test_click_suggestion_selects_and_looks_up() {
    let (mut app, mut request_rx, _response_tx) = app_with_popup();

    handle_click(&mut app, Some(Region::Suggestions), create_mouse_event(5, 8));

    assert_eq!(app.query(), "pikachu");
    assert!(!app.autocomplete.is_visible());
    assert_eq!(
        sent_requests(&mut request_rx),
        vec![LookupRequest::Lookup {
            query: "pikachu".to_string(),
            request_id: 1
        }]
    );
}

#[test]
fn test_click_popup_border_does_nothing() {
    let (mut app, mut request_rx, _response_tx) = app_with_popup();

    handle_click(&mut app, Some(Region::Suggestions), create_mouse_event(5, 6));
    handle_click(&mut app, Some(Region::Suggestions), create_mouse_event(5, 10));

    assert_eq!(app.query(), "chu");
    assert!(app.autocomplete.is_visible());
    assert!(sent_requests(&mut request_rx).is_empty());
}

#[test]
fn test_click_results_pane_hides_popup_and_focuses() {
    let (mut app, _request_rx, _response_tx) = app_with_popup();

    handle_click(&mut app, Some(Region::ResultsPane), create_mouse_event(40, 15));

    assert_eq!(app.focus, Focus::ResultsPane);
    assert!(!app.autocomplete.is_visible());
}

#[test]
fn test_click_outside_hides_popup() {
    let (mut app, _request_rx, _response_tx) = app_with_popup();

    handle_click(&mut app, Some(Region::Header), create_mouse_event(5, 1));
    assert!(!app.autocomplete.is_visible());

    let (mut app, _request_rx, _response_tx) = app_with_popup();
    handle_click(&mut app, None, create_mouse_event(200, 200));
    assert!(!app.autocomplete.is_visible());
}

#[test]
fn test_click_input_field_keeps_popup_and_focuses() {
    let (mut app, _request_rx, _response_tx) = app_with_popup();
    app.focus = Focus::ResultsPane;

    handle_click(&mut app, Some(Region::InputField), create_mouse_event(5, 4));

    assert_eq!(app.focus, Focus::InputField);
    assert!(app.autocomplete.is_visible());
}
