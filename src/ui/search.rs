use ratatui::{
    Frame,
    layout::Rect,
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::pane_block;
use crate::state::{AppState, View};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// What: Render the search input and place the caret.
///
/// Details:
/// - Records `app.input_rect` for focus clicks.
pub(super) fn render_input(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = matches!(app.view, View::Search);
    let query = app.navigator.query().to_string();
    let line = if query.is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(th.sapphire)),
            Span::styled(
                "Start typing to search…",
                Style::default().fg(th.overlay1),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(th.sapphire)),
            Span::styled(query.clone(), Style::default().fg(th.text)),
        ])
    };
    let title = if app.search_pending {
        " Search (searching…) ".to_string()
    } else {
        " Search ".to_string()
    };
    f.render_widget(Paragraph::new(line).block(pane_block(title, focused)), area);
    app.input_rect = Some((area.x, area.y, area.width, area.height));

    if focused && !app.help_open {
        let caret_x = (area.x + 3).saturating_add(u16::try_from(query.width()).unwrap_or(u16::MAX));
        let max_x = area.x + area.width.saturating_sub(2);
        f.set_cursor_position(Position::new(caret_x.min(max_x), area.y + 1));
    }
}

/// What: Render the grouped suggestion dropdown below the input.
///
/// Details:
/// - Hidden when the navigator is closed or has no sections.
/// - The list selection follows the active row so it stays scrolled into view.
/// - Records `app.dropdown_rect` (inner area) for hover and click mapping.
pub(super) fn render_dropdown(f: &mut Frame, app: &mut AppState, area: Rect) {
    if !app.navigator.is_visible() {
        if app.navigator.query().trim().chars().count() >= app.search_min_chars
            && !app.search_pending
            && app.navigator.is_open()
        {
            let th = theme();
            f.render_widget(
                Paragraph::new(Span::styled("No matches", Style::default().fg(th.overlay1))),
                Rect {
                    height: area.height.min(1),
                    ..area
                },
            );
        }
        return;
    }
    let th = theme();
    let rows = u16::try_from(app.navigator.row_count()).unwrap_or(u16::MAX);
    let rect = Rect {
        height: area.height.min(rows.saturating_add(2)),
        ..area
    };
    let inner_w = usize::from(rect.width.saturating_sub(4));

    let mut items: Vec<ListItem> = Vec::with_capacity(app.navigator.row_count());
    for sec in app.navigator.sections() {
        items.push(ListItem::new(Line::from(Span::styled(
            sec.title,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))));
        for it in &sec.items {
            items.push(ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    truncate_to_width(&it.name, inner_w.saturating_sub(2)),
                    Style::default().fg(th.text),
                ),
            ])));
        }
    }

    let count = app.navigator.suggestions().len();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(pane_block(format!(" Suggestions ({count}) "), false))
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("› ");

    f.render_widget(Clear, rect);
    app.dropdown_state.select(app.navigator.active_row());
    f.render_stateful_widget(list, rect, &mut app.dropdown_state);
    app.dropdown_rect = Some((
        rect.x + 1,
        rect.y + 1,
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    ));
}
