use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::session::QuizSession;
use crate::state::{AppState, Screen};

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings(state).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}

/// Key hints for the current screen.
fn bindings(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let answered = state
        .session
        .as_ref()
        .is_some_and(QuizSession::is_answered);

    match state.screen {
        Screen::Welcome => vec![("any key", "continue")],
        Screen::StartMenu => vec![
            ("↑/↓", "select"),
            ("Enter", "open"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Screen::LevelSelection => vec![
            ("↑/↓ 1-3", "level"),
            ("Enter", "start"),
            ("Esc", "menu"),
        ],
        Screen::Quiz if answered => vec![("Esc", "leave quiz")],
        Screen::Quiz => vec![
            ("1-4", "answer"),
            ("↑/↓", "select"),
            ("Enter", "confirm"),
            ("Esc", "leave quiz"),
        ],
        Screen::Results => vec![
            ("↑/↓", "select"),
            ("Enter", "confirm"),
            ("r", "play again"),
            ("Esc", "menu"),
        ],
        Screen::Highscores => vec![
            ("↑/↓", "level"),
            ("r", "reset level"),
            ("a", "reset all"),
            ("Esc", "back"),
        ],
        Screen::Settings => vec![
            ("↑/↓", "select"),
            ("←/→", "change"),
            ("Esc", "save & back"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::bank::QuestionBank;
    use crate::persist::HighscoreStore;
    use crate::settings::Settings;
    use crate::store::{KeyValueStore, MemoryStore};

    #[test]
    fn test_quiz_hints_shrink_after_answer() {
        let now = Instant::now();
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        let mut state = AppState::new(
            QuestionBank::builtin(),
            Settings::default(),
            HighscoreStore::new(store),
            now,
        );
        state.start_quiz(now).unwrap();
        assert!(bindings(&state).contains(&("1-4", "answer")));

        state.answer(0, now);
        assert_eq!(bindings(&state), vec![("Esc", "leave quiz")]);
    }

    #[test]
    fn test_no_session_means_full_hints() {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        let mut state = AppState::new(
            QuestionBank::builtin(),
            Settings::default(),
            HighscoreStore::new(store),
            Instant::now(),
        );
        state.screen = Screen::Quiz;
        assert_eq!(bindings(&state).len(), 4);
    }
}
