use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::Level;
use crate::persist::format_highscore;
use crate::state::{AppState, MenuItem};
use crate::ui::titlebar::TITLE;
use crate::ui::{level_color, GRONINGEN_BLUE, GRONINGEN_GREEN, GRONINGEN_RED};

pub fn draw_welcome(f: &mut Frame, area: Rect) {
    // Flag of Groningen: blue and green bands around a red cross
    let flag = |c: Color| Span::styled("████", Style::default().fg(c));
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(vec![flag(GRONINGEN_BLUE), flag(GRONINGEN_RED), flag(GRONINGEN_GREEN)]),
        Line::from(vec![flag(GRONINGEN_RED), flag(GRONINGEN_RED), flag(GRONINGEN_RED)]),
        Line::from(vec![flag(GRONINGEN_GREEN), flag(GRONINGEN_RED), flag(GRONINGEN_BLUE)]),
        Line::from(""),
        Line::from(Span::styled(
            "Welkom bie de Groningse Kwis!",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(TITLE, Style::default().fg(Color::Cyan))),
        Line::from(""),
    ];

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

pub fn draw_start_menu(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Dizze Kwis",
            Style::default()
                .fg(GRONINGEN_RED)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "is Nait Normaal",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(""),
    ];

    for (i, item) in MenuItem::ALL.iter().enumerate() {
        let selected = i == state.menu_cursor;
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{:<14}", marker, item.label()),
            style,
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!(
                "⏱ {}/{}/{} sec",
                state.settings.time_easy, state.settings.time_medium, state.settings.time_hard
            ),
            Style::default().fg(GRONINGEN_BLUE),
        ),
        Span::raw("    "),
        Span::styled(
            format!("★ {} Levels", Level::ALL.len()),
            Style::default().fg(GRONINGEN_GREEN),
        ),
    ]));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

pub fn draw_level_selection(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Kies je Level",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, level) in Level::ALL.iter().copied().enumerate() {
        let selected = level == state.selected_level;
        let color = level_color(level);
        let border = if selected { "▶" } else { " " };
        let name_style = if selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        };

        lines.push(Line::from(vec![
            Span::raw(format!("{} {}. ", border, i + 1)),
            Span::styled(format!(" {} {} ", level.icon(), level.dialect_name()), name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "{} vragen • max {} punten • {} sec per vraag",
                state.bank.question_count(level),
                state.bank.max_base_points(level),
                state.settings.seconds_for(level)
            ),
            Style::default().fg(Color::Gray),
        )));
        if let Some(hs) = state.highscore(level) {
            lines.push(Line::from(Span::styled(
                format!("Highscore: {}", format_highscore(Some(&hs))),
                Style::default().fg(color),
            )));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("[Enter] Start {} Kwis", state.selected_level.dialect_name()),
        Style::default()
            .fg(level_color(state.selected_level))
            .add_modifier(Modifier::BOLD),
    )));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
