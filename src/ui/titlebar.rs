use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{level_color, GRONINGEN_RED};
use crate::state::{AppState, Screen, WARNING_SECONDS};
use crate::timer::format_duration;

pub const TITLE: &str = "Dizze Kwis is Nait Normaal";

/// Title centered, level badge left, countdown right.
pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let bar = Style::default().bg(Color::DarkGray);
    f.render_widget(Paragraph::new("").style(bar), area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(0),
            Constraint::Length(12),
        ])
        .split(area);

    let session = match state.screen {
        Screen::Quiz => state.session.as_ref(),
        _ => None,
    };

    if let Some(session) = session {
        let level = session.level();
        let badge = Span::styled(
            format!(" {} {} ", level.icon(), level.display_name()),
            Style::default()
                .fg(Color::White)
                .bg(level_color(level))
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(Paragraph::new(Line::from(badge)).style(bar), cols[0]);

        let secs = session.remaining_seconds();
        let clock = if secs <= WARNING_SECONDS {
            Style::default()
                .fg(Color::White)
                .bg(GRONINGEN_RED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(200, 200, 120))
        };
        let timer = Line::from(Span::styled(format!(" ⏱ {} ", format_duration(secs)), clock))
            .right_aligned();
        f.render_widget(Paragraph::new(timer).style(bar), cols[2]);
    }

    let title = Line::from(Span::styled(
        format!("[ {} ]", TITLE),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .centered();
    f.render_widget(Paragraph::new(title).style(bar), cols[1]);
}
