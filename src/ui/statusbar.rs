use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState, caption: Option<&str>) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    if let Some(text) = caption {
        spans.push(Span::styled(
            format!("🔊 {}", text),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
        ));
    } else if let (Screen::Quiz, Some(session)) = (&state.screen, state.session.as_ref()) {
        spans.push(Span::styled(
            format!("✓ {} goed", session.score()),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("★ {} punten", session.total_points()),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled(
            format!(
                "tijd per vraag: {}/{}/{} sec",
                state.settings.time_easy, state.settings.time_medium, state.settings.time_hard
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
