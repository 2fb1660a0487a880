use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::settings::SettingsField;
use crate::state::AppState;

pub fn draw_settings(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![Line::from("")];

    for (i, field) in SettingsField::ALL.iter().copied().enumerate() {
        // Section headers
        match field {
            SettingsField::Sounds => lines.push(section("Geluid en haptics")),
            SettingsField::TimeEasy => lines.push(section("Tijd per level (sec)")),
            SettingsField::Speech => lines.push(section("Spraak")),
            _ => {}
        }

        let selected = i == state.settings_cursor;
        let marker = if selected { "▶ " } else { "  " };
        let value_style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        lines.push(Line::from(vec![
            Span::raw(format!("  {}", marker)),
            Span::styled(
                format!("{:<40}", field.label()),
                Style::default().fg(Color::White),
            ),
            Span::styled(format!(" ‹ {} › ", state.settings.display_value(field)), value_style),
        ]));

        if field == SettingsField::TimeHard {
            lines.push(Line::from(Span::styled(
                "    Tip: kortere tijd = hogere spanning!",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Instellingen ");
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
