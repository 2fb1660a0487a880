use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::session::{Answer, OptionReveal, QuizSession};
use crate::state::{AppState, WARNING_SECONDS};
use crate::ui::{level_color, GRONINGEN_BLUE, GRONINGEN_GREEN, GRONINGEN_RED};

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(session) = state.session.as_ref() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // progress
            Constraint::Length(1), // countdown
            Constraint::Min(6),    // question card
        ])
        .split(area);

    draw_progress(f, rows[0], session);
    draw_countdown(f, rows[1], session);
    draw_card(f, rows[2], state, session);
}

fn draw_progress(f: &mut Frame, area: Rect, session: &QuizSession) {
    let level = session.level();
    let line = Line::from(vec![
        Span::styled(
            format!(" Vraag {} van {} ", session.current_index() + 1, session.question_count()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} {} ", level.icon(), level.dialect_name()),
            Style::default().fg(Color::Black).bg(level_color(level)),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} pt per vraag", session.current_item().points),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_countdown(f: &mut Frame, area: Rect, session: &QuizSession) {
    let remaining = session.remaining_seconds();
    let total = session.total_seconds().max(1);
    let color = if remaining <= WARNING_SECONDS {
        GRONINGEN_RED
    } else {
        GRONINGEN_BLUE
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Rgb(30, 30, 30)))
        .ratio(f64::from(remaining.min(total)) / f64::from(total))
        .label(format!("{}s", remaining));
    f.render_widget(gauge, area);
}

fn draw_card(f: &mut Frame, area: Rect, state: &AppState, session: &QuizSession) {
    let item = session.current_item();
    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(
            item.prompt,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, option) in item.options.iter().enumerate() {
        let reveal = session.option_reveal(i);
        let focused = reveal == OptionReveal::Pending && i == state.choice_cursor;
        let (marker, style) = match reveal {
            OptionReveal::Correct => (
                "✓",
                Style::default()
                    .fg(GRONINGEN_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            OptionReveal::Wrong => (
                "✗",
                Style::default()
                    .fg(GRONINGEN_RED)
                    .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT),
            ),
            OptionReveal::Neutral => (" ", Style::default().fg(Color::DarkGray)),
            OptionReveal::Pending if focused => (
                "▶",
                Style::default()
                    .fg(Color::Black)
                    .bg(GRONINGEN_BLUE)
                    .add_modifier(Modifier::BOLD),
            ),
            OptionReveal::Pending => (" ", Style::default().fg(Color::White)),
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", marker)),
            Span::styled(format!(" {}. {} ", i + 1, option), style),
        ]));
        lines.push(Line::from(""));
    }

    if let Some(reveal) = state.last_reveal {
        let (verdict, color) = match (reveal.correct, reveal.answer) {
            (true, _) => (
                format!("Goed! +{} punten ({} tijdbonus)", reveal.points_awarded, reveal.time_bonus),
                GRONINGEN_GREEN,
            ),
            (false, Answer::TimedOut) => ("Tijd is op!".to_string(), GRONINGEN_RED),
            (false, Answer::Choice(_)) => ("Nait goed.".to_string(), GRONINGEN_RED),
        };
        lines.push(Line::from(Span::styled(
            verdict,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            reveal.explanation,
            Style::default().fg(Color::Gray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(level_color(session.level())));
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
