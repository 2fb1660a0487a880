use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::ResultTier;
use crate::persist::format_highscore;
use crate::state::{AppState, ResultAction};
use crate::ui::{level_color, GRONINGEN_BLUE, GRONINGEN_GREEN, GRONINGEN_RED};

pub fn draw_results(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(summary) = state.result.as_ref() else {
        return;
    };
    let tally = &summary.tally;
    let tier = tally.tier();
    let tier_color = match tier {
        ResultTier::Perfect | ResultTier::Great => GRONINGEN_GREEN,
        ResultTier::Fair => GRONINGEN_BLUE,
        ResultTier::Practice => GRONINGEN_RED,
    };
    let icon = if tier == ResultTier::Perfect { "🏆" } else { "★" };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  Quiz Voltooid!", icon),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if summary.new_record {
        lines.push(Line::from(Span::styled(
            "✨ Nieuwe Highscore! ✨",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("{} van {}", tally.score, tally.total_questions),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!("{}%", tally.percentage())));
    lines.push(Line::from(Span::styled(
        format!(" {} punten ", tally.total_points),
        Style::default()
            .fg(Color::Black)
            .bg(level_color(tally.level))
            .add_modifier(Modifier::BOLD),
    )));

    if !summary.new_record {
        if let Some(best) = summary.best.as_ref() {
            lines.push(Line::from(Span::styled(
                format!("Highscore: {}", format_highscore(Some(best))),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        tier.message(),
        Style::default().fg(tier_color),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(""));

    for (i, action) in ResultAction::ALL.iter().enumerate() {
        let selected = i == state.result_cursor;
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if selected { "▶ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{:<16}", marker, action.label()),
            style,
        )));
    }

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
