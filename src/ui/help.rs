use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme::{KeyChord, theme};

/// Centered overlay listing the active key bindings.
pub(super) fn render_help(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let w = area.width.saturating_sub(6).min(64);
    let h = area.height.saturating_sub(4).min(18);
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);

    let binding = |label: &str, keys: String| -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{label:22}"),
                Style::default()
                    .fg(th.overlay1)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(keys, Style::default().fg(th.text).add_modifier(Modifier::BOLD)),
        ])
    };
    let chords = |list: &[KeyChord]| -> String {
        list.iter()
            .map(|c| format!("[{}]", c.label()))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let km = &app.keymap;

    let lines = vec![
        Line::from(Span::styled(
            "Key bindings",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        binding("Help overlay", chords(&km.help_overlay)),
        binding("Exit", chords(&km.exit)),
        binding("Back from details", chords(&km.back)),
        Line::from(""),
        binding("Next suggestion", "[Down]".to_string()),
        binding("Previous suggestion", "[Up]".to_string()),
        binding("Open suggestion", "[Enter]".to_string()),
        binding("Close suggestions", "[Esc]".to_string()),
        binding("Clear query", "[Ctrl+U]".to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Mouse: hover to highlight, click to open, wheel to move.",
            Style::default().fg(th.overlay1),
        )),
    ];
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(" Help ", Style::default().fg(th.mauve)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.base)),
        );
    f.render_widget(p, rect);
}
