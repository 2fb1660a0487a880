use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::Level;
use crate::persist::format_highscore;
use crate::state::AppState;
use crate::ui::level_color;

pub fn draw_highscores(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Highscores",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, level) in Level::ALL.iter().copied().enumerate() {
        let selected = i == state.highscore_cursor;
        let record = state.highscore(level);
        let marker = if selected { "▶ " } else { "  " };
        let name_style = Style::default()
            .fg(level_color(level))
            .add_modifier(Modifier::BOLD);
        let value_style = if selected {
            Style::default().fg(Color::White).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{} {:<10}", level.icon(), level.dialect_name()), name_style),
            Span::styled(format!(" {:>16} ", format_highscore(record.as_ref())), value_style),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[r] Reset level    [a] Reset alle highscores",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
