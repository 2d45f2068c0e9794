//! Rendering for the pokesearch TUI.
//!
//! Layout: a title line, the search input, the body (dropdown or detail
//! page) and a one-line key hint footer. The help overlay draws last.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, View};
use crate::theme::theme;

mod details;
mod help;
mod search;

/// What: Render one frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; mouse hit-test rects are recorded on it.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            " Pokémon Reference ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "search Pokémon, routes, items, abilities, natures and TMs",
            Style::default().fg(th.overlay1),
        ),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    search::render_input(f, app, chunks[1]);
    match app.view {
        View::Search => {
            app.dropdown_rect = None;
            search::render_dropdown(f, app, chunks[2]);
        }
        View::Details { .. } => {
            app.dropdown_rect = None;
            details::render_details(f, app, chunks[2]);
        }
    }
    render_footer(f, app, chunks[3]);

    if app.help_open {
        help::render_help(f, app, area);
    }
}

/// Key hint line for the current view.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let help = app
        .keymap
        .help_overlay
        .first()
        .map_or_else(String::new, |k| format!("  {} help", k.label()));
    let exit = app
        .keymap
        .exit
        .first()
        .map_or_else(String::new, |k| format!("  {} quit", k.label()));
    let hint = match app.view {
        View::Search => format!("↑/↓ select  Enter open  Esc close{help}{exit}"),
        View::Details { .. } => format!("Esc back  ↑/↓ scroll{help}{exit}"),
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(th.overlay1))),
        area,
    );
}

/// Bordered block with a styled title, shared by the panes.
pub(crate) fn pane_block(title: String, focused: bool) -> Block<'static> {
    let th = theme();
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.sapphire } else { th.surface2 }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Category, DetailKey, DetailRecord, DetailStatus, SuggestionItem};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(term: &Terminal<TestBackend>) -> String {
        term.backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    /// What: The dropdown renders section headers and records its rect for mouse hit-testing.
    fn renders_dropdown_sections() {
        let backend = TestBackend::new(80, 20);
        let mut term = Terminal::new(backend).expect("terminal");
        let mut app = AppState::default();
        app.navigator.set_query("sl");
        app.navigator.set_suggestions(vec![
            SuggestionItem {
                id: 79,
                name: "Slowpoke".into(),
                category: Category::Pokemon,
            },
            SuggestionItem {
                id: 8,
                name: "TM08: Body Slam".into(),
                category: Category::Tm,
            },
        ]);
        term.draw(|f| ui(f, &mut app)).expect("draw");
        let text = buffer_text(&term);
        assert!(text.contains("Pokémon"));
        assert!(text.contains("Slowpoke"));
        assert!(text.contains("TMs"));
        assert!(app.dropdown_rect.is_some());
        assert!(app.input_rect.is_some());
    }

    #[test]
    /// What: Loaded and failed detail views render their content.
    fn renders_detail_states() {
        let backend = TestBackend::new(80, 24);
        let mut term = Terminal::new(backend).expect("terminal");
        let mut app = AppState::default();
        let key = DetailKey {
            category: Category::Nature,
            id: 1,
        };
        app.open_details(key);
        app.apply_details(
            key,
            Ok(DetailRecord::Nature {
                name: "Adamant".into(),
                description: "Adamant nature increases Attack and decreases Special Attack."
                    .into(),
                increased_stat: "Attack".into(),
                decreased_stat: "Special Attack".into(),
                favors: "Spicy".into(),
                dislikes: "Dry".into(),
            }),
        );
        term.draw(|f| ui(f, &mut app)).expect("draw");
        let text = buffer_text(&term);
        assert!(text.contains("Adamant"));
        assert!(text.contains("Spicy"));

        app.view = View::Details {
            key,
            status: DetailStatus::Error("No nature found with ID 999".into()),
        };
        term.draw(|f| ui(f, &mut app)).expect("draw");
        assert!(buffer_text(&term).contains("No nature found with ID 999"));
    }
}
