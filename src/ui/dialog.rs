use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::model::Level;
use crate::state::{AppState, Dialog};
use crate::ui::layout::centered_rect;

pub fn draw_dialog(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(dialog) = state.top_dialog() else {
        return;
    };

    match dialog {
        Dialog::ConfirmLeaveQuiz => draw_confirm_leave(f, area),
        Dialog::ConfirmResetLevel(level) => draw_confirm_reset_level(f, area, *level),
        Dialog::ConfirmResetAll => draw_confirm_reset_all(f, area),
        Dialog::Help => draw_help(f, area),
    }
}

fn confirm_lines(title: &str, body: &[&str]) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("   {}", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for text in body {
        lines.push(Line::from(format!("   {}", text)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("   [Enter] Bevestigen", Style::default().fg(Color::Green)),
        Span::raw("    "),
        Span::styled("[Esc] Annuleren", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));
    lines
}

fn draw_boxed(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>, width: u16, color: Color) {
    let rect = centered_rect(width, lines.len() as u16 + 2, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, rect);
}

fn draw_confirm_leave(f: &mut Frame, area: Rect) {
    let lines = confirm_lines(
        "Terug naar levels?",
        &["Je huidige score gaat verloren."],
    );
    draw_boxed(f, area, lines, 42, Color::Yellow);
}

fn draw_confirm_reset_level(f: &mut Frame, area: Rect, level: Level) {
    let title = format!("Reset {}?", level.dialect_name());
    let lines = confirm_lines(&title, &["De highscore van dit level", "wordt verwijderd."]);
    draw_boxed(f, area, lines, 42, Color::Red);
}

fn draw_confirm_reset_all(f: &mut Frame, area: Rect) {
    let lines = confirm_lines(
        "Reset alle highscores?",
        &["Dit kan niet ongedaan worden."],
    );
    draw_boxed(f, area, lines, 42, Color::Red);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Toetsen",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("   ↑/↓ j/k    Selectie verplaatsen"),
        Line::from("   Enter      Kiezen"),
        Line::from("   1-4 a-d    Direct antwoorden"),
        Line::from("   1-3        Level kiezen"),
        Line::from("   ←/→        Instelling wijzigen"),
        Line::from("   r          Opnieuw / level resetten"),
        Line::from("   Esc        Terug"),
        Line::from("   Ctrl+Q     Stoppen"),
        Line::from("   ?          Deze hulp"),
        Line::from(""),
        Line::from(Span::styled(
            "        [Esc] Sluiten",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let rect = centered_rect(44, lines.len() as u16 + 2, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Hulp ")
        .border_style(Style::default().fg(Color::Cyan));
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, rect);
}
