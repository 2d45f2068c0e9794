//! Mouse handling: dropdown hover/click, input focus, outside clicks and
//! wheel scrolling.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::logic::handle_outcome;
use crate::state::{AppState, DetailKey, View};

/// What: Check if mouse coordinates are within a rectangle.
///
/// Inputs:
/// - `mx`, `my`: Mouse position.
/// - `rect`: Optional rectangle tuple (x, y, width, height).
///
/// Output:
/// - `true` if the point is inside; `false` otherwise or when `rect` is `None`.
const fn is_in_rect(mx: u16, my: u16, rect: Option<(u16, u16, u16, u16)>) -> bool {
    let Some((x, y, w, h)) = rect else {
        return false;
    };
    mx >= x && mx < x.saturating_add(w) && my >= y && my < y.saturating_add(h)
}

/// What: Map a pointer position inside the dropdown to `(section, item)`.
///
/// Output:
/// - `None` outside the dropdown, on section headers, or past the last row.
fn dropdown_position(app: &AppState, mx: u16, my: u16) -> Option<(usize, usize)> {
    if !app.navigator.is_visible() || !is_in_rect(mx, my, app.dropdown_rect) {
        return None;
    }
    let (_, y, _, _) = app.dropdown_rect?;
    let row = app.dropdown_state.offset() + usize::from(my - y);
    app.navigator.row_to_position(row)
}

/// What: Handle a single mouse event.
///
/// Inputs:
/// - `m`: Mouse event with position and kind.
/// - `app`: Mutable application state (rects from the last draw).
/// - `details_tx`: Channel to the details worker for click commits.
pub(super) fn handle_mouse_event(
    m: MouseEvent,
    app: &mut AppState,
    details_tx: &mpsc::UnboundedSender<DetailKey>,
) {
    let (mx, my) = (m.column, m.row);
    if matches!(app.view, View::Details { .. }) {
        match m.kind {
            MouseEventKind::ScrollDown => {
                app.details_scroll = app.details_scroll.saturating_add(1);
            }
            MouseEventKind::ScrollUp => {
                app.details_scroll = app.details_scroll.saturating_sub(1);
            }
            _ => {}
        }
        return;
    }
    match m.kind {
        MouseEventKind::Moved => {
            if let Some((s, i)) = dropdown_position(app, mx, my) {
                app.navigator.hover(s, i);
                app.sync_dropdown_selection();
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some((s, i)) = dropdown_position(app, mx, my) {
                let outcome = app.navigator.click(s, i);
                handle_outcome(app, outcome, details_tx);
            } else if is_in_rect(mx, my, app.input_rect) {
                app.navigator.focus();
            } else if !is_in_rect(mx, my, app.dropdown_rect) {
                app.navigator.click_outside();
            }
        }
        MouseEventKind::ScrollDown if app.navigator.is_visible() => {
            app.navigator.arrow_down();
            app.sync_dropdown_selection();
        }
        MouseEventKind::ScrollUp if app.navigator.is_visible() => {
            app.navigator.arrow_up();
            app.sync_dropdown_selection();
        }
        _ => {}
    }
}
