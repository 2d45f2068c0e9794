use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::pane_block;
use crate::state::{AppState, BaseStats, DetailRecord, DetailStatus, View};
use crate::theme::{Theme, theme};

/// Width of a full stat bar in cells.
const STAT_BAR_WIDTH: u32 = 20;
/// Base stat value that fills a bar completely.
const STAT_BAR_MAX: u32 = 255;

/// Label/value pair line.
fn field(th: &Theme, label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:16}"),
            Style::default()
                .fg(th.overlay1)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.into(), Style::default().fg(th.text)),
    ])
}

/// Section heading line.
fn heading(th: &Theme, text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    ))
}

/// Stat line with a proportional bar.
fn stat_line(th: &Theme, label: &str, value: u32) -> Line<'static> {
    let filled = (value.min(STAT_BAR_MAX) * STAT_BAR_WIDTH).div_ceil(STAT_BAR_MAX);
    let bar: String = "█".repeat(usize::try_from(filled).unwrap_or(0));
    Line::from(vec![
        Span::styled(format!("{label:10}"), Style::default().fg(th.overlay1)),
        Span::styled(format!("{value:>4} "), Style::default().fg(th.text)),
        Span::styled(bar, Style::default().fg(th.green)),
    ])
}

/// Heading plus the four stat lines.
fn stats_lines(th: &Theme, stats: BaseStats) -> Vec<Line<'static>> {
    vec![
        heading(th, "Base stats"),
        stat_line(th, "HP", stats.hp),
        stat_line(th, "Attack", stats.attack),
        stat_line(th, "Defense", stats.defense),
        stat_line(th, "Speed", stats.speed),
    ]
}

/// Bullet list of names.
fn bullets(th: &Theme, names: &[String]) -> Vec<Line<'static>> {
    names
        .iter()
        .map(|n| {
            Line::from(vec![
                Span::styled("  • ", Style::default().fg(th.sapphire)),
                Span::styled(n.clone(), Style::default().fg(th.text)),
            ])
        })
        .collect()
}

/// What: Build the body lines for a loaded record.
///
/// Output:
/// - Description first, then the category-specific fields, then the image reference.
pub(crate) fn record_lines(rec: &DetailRecord) -> Vec<Line<'static>> {
    let th = theme();
    let mut lines = vec![
        Line::from(Span::styled(
            rec.description().to_string(),
            Style::default().fg(th.subtext0),
        )),
        Line::from(""),
    ];
    match rec {
        DetailRecord::Pokemon { stats, types, .. } => {
            lines.push(field(&th, "Types", types.join(" / ")));
            lines.push(Line::from(""));
            lines.extend(stats_lines(&th, *stats));
        }
        DetailRecord::Route {
            pokemon, region, ..
        } => {
            lines.push(field(&th, "Region", region.clone()));
            lines.push(Line::from(""));
            lines.push(heading(&th, "Pokémon found here"));
            lines.extend(bullets(&th, pokemon));
        }
        DetailRecord::Item {
            price, category, ..
        } => {
            lines.push(field(&th, "Category", category.clone()));
            lines.push(field(&th, "Price", format!("₽{price}")));
        }
        DetailRecord::Ability {
            pokemon,
            generation,
            ..
        } => {
            lines.push(field(&th, "Generation", generation.clone()));
            lines.push(Line::from(""));
            lines.push(heading(&th, "Pokémon with this ability"));
            lines.extend(bullets(&th, pokemon));
        }
        DetailRecord::Nature {
            increased_stat,
            decreased_stat,
            favors,
            dislikes,
            ..
        } => {
            lines.push(field(&th, "Increases", increased_stat.clone()));
            lines.push(field(&th, "Decreases", decreased_stat.clone()));
            lines.push(field(&th, "Favorite flavor", favors.clone()));
            lines.push(field(&th, "Disliked flavor", dislikes.clone()));
        }
        DetailRecord::Tm {
            power,
            accuracy,
            move_type,
            damage_class,
            ..
        } => {
            lines.push(field(&th, "Type", move_type.clone()));
            lines.push(field(&th, "Power", power.clone()));
            lines.push(field(&th, "Accuracy", accuracy.clone()));
            lines.push(field(&th, "Damage class", damage_class.clone()));
        }
    }
    if let Some(image) = rec.image() {
        lines.push(Line::from(""));
        lines.push(field(&th, "Image", image.to_string()));
    }
    lines
}

/// What: Render the detail page for the current `View::Details`.
///
/// Details:
/// - Loading and error states render in place of the body; the footer carries the back hint.
pub(super) fn render_details(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let View::Details { key, status } = &app.view else {
        return;
    };
    let back = app
        .keymap
        .back
        .first()
        .map_or_else(|| "Esc".to_string(), |k| k.label());
    let (title, lines) = match status {
        DetailStatus::Loading => (
            format!(" {} #{} ", key.category.section_title(), key.id),
            vec![Line::from(Span::styled(
                "Loading…",
                Style::default().fg(th.yellow),
            ))],
        ),
        DetailStatus::Error(msg) => (
            format!(" {} #{} ", key.category.section_title(), key.id),
            vec![
                Line::from(Span::styled(
                    msg.clone(),
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("Press {back} to go back to search"),
                    Style::default().fg(th.overlay1),
                )),
            ],
        ),
        DetailStatus::Loaded(rec) => (
            format!(" {}: {} ", key.category.section_title(), rec.name()),
            record_lines(rec),
        ),
    };
    let body = Paragraph::new(lines)
        .block(pane_block(title, true))
        .wrap(Wrap { trim: false })
        .scroll((app.details_scroll, 0));
    f.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    /// What: Pokémon records show types, stats and the image reference.
    fn pokemon_lines_include_stats() {
        let rec = DetailRecord::Pokemon {
            name: "Pikachu".into(),
            description: "Mouse Pokémon.".into(),
            stats: BaseStats {
                hp: 35,
                attack: 55,
                defense: 40,
                speed: 90,
            },
            types: vec!["Electric".into()],
            image: "/api/placeholder/200/200".into(),
        };
        let text = text_of(&record_lines(&rec));
        assert!(text.contains("Electric"));
        assert!(text.contains("  90"));
        assert!(text.contains("/api/placeholder/200/200"));
    }

    #[test]
    /// What: Full and empty stat bars scale to the bar width.
    fn stat_bar_scales() {
        let th = theme();
        let full = text_of(&[stat_line(&th, "HP", 255)]);
        assert_eq!(full.matches('█').count(), 20);
        let empty = text_of(&[stat_line(&th, "HP", 0)]);
        assert_eq!(empty.matches('█').count(), 0);
    }
}
