use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::feedback::{self, TerminalFeedback};
use crate::model::Level;
use crate::settings::SettingsField;
use crate::state::*;

pub fn run_tui(mut state: AppState) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let mut feedback = TerminalFeedback::new(&state.settings);
    let result = main_loop(&mut terminal, &mut state, &mut feedback);

    // Restore terminal
    if let Some(session) = state.session.as_mut() {
        session.cancel();
    }
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    feedback: &mut TerminalFeedback,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state, feedback.caption()))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        // Poll for input events
        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            if let Event::Key(key) = event::read().map_err(|e| format!("Read error: {}", e))? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, state)?;
                }
            }
        }

        // Timers: countdown, reveal delay, welcome splash
        state.on_tick(Instant::now());

        feedback.apply_settings(&state.settings);
        if !matches!(state.screen, Screen::Quiz | Screen::Results) {
            feedback.clear_caption();
        }
        for cue in state.take_cues() {
            feedback::dispatch(&state.settings, feedback, cue);
        }
    }

    Ok(())
}

fn handle_key(key: KeyEvent, state: &mut AppState) -> Result<(), String> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        state.should_quit = true;
        return Ok(());
    }

    // Handle dialog keys first
    if state.has_dialog() {
        handle_dialog_key(key, state);
        return Ok(());
    }

    let now = Instant::now();
    match state.screen {
        Screen::Welcome => {
            state.skip_welcome();
            Ok(())
        }
        Screen::StartMenu => {
            handle_menu_key(key, state);
            Ok(())
        }
        Screen::LevelSelection => handle_level_key(key, state, now),
        Screen::Quiz => {
            handle_quiz_key(key, state, now);
            Ok(())
        }
        Screen::Results => handle_result_key(key, state, now),
        Screen::Highscores => {
            handle_highscores_key(key, state);
            Ok(())
        }
        Screen::Settings => {
            handle_settings_key(key, state);
            Ok(())
        }
    }
}

fn handle_menu_key(key: KeyEvent, state: &mut AppState) {
    let count = MenuItem::ALL.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.menu_cursor = (state.menu_cursor + count - 1) % count;
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.menu_cursor = (state.menu_cursor + 1) % count;
        }
        KeyCode::Enter | KeyCode::Char(' ') => state.menu_activate(),
        KeyCode::Char('s') => {
            state.menu_cursor = 0;
            state.menu_activate();
        }
        KeyCode::Char('h') => {
            state.menu_cursor = 1;
            state.menu_activate();
        }
        KeyCode::Char('i') => {
            state.menu_cursor = 2;
            state.menu_activate();
        }
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        _ => {}
    }
}

fn handle_level_key(key: KeyEvent, state: &mut AppState, now: Instant) -> Result<(), String> {
    match key.code {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
            state.selected_level = state.selected_level.prev();
        }
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Tab => {
            state.selected_level = state.selected_level.next();
        }
        KeyCode::Char(c @ '1'..='3') => {
            let idx = (c as u8 - b'1') as usize;
            state.selected_level = Level::ALL[idx];
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.start_quiz(now).map_err(|e| e.to_string())?;
        }
        KeyCode::Esc | KeyCode::Backspace => state.screen = Screen::StartMenu,
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        _ => {}
    }
    Ok(())
}

fn handle_quiz_key(key: KeyEvent, state: &mut AppState, now: Instant) {
    let (count, answered) = match state.session.as_ref() {
        Some(session) => (session.current_item().options.len(), session.is_answered()),
        None => return,
    };

    match key.code {
        KeyCode::Esc => state.push_dialog(Dialog::ConfirmLeaveQuiz),
        _ if answered => {}
        KeyCode::Up | KeyCode::Char('k') => {
            state.choice_cursor = (state.choice_cursor + count - 1) % count;
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.choice_cursor = (state.choice_cursor + 1) % count;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let choice = state.choice_cursor;
            state.answer(choice, now);
        }
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            let idx = (c as u8 - b'1') as usize;
            if idx < count {
                state.choice_cursor = idx;
                state.answer(idx, now);
            }
        }
        KeyCode::Char(c) if c.is_ascii_lowercase() => {
            let idx = (c as u8 - b'a') as usize;
            if idx < count {
                state.choice_cursor = idx;
                state.answer(idx, now);
            }
        }
        _ => {}
    }
}

fn handle_result_key(key: KeyEvent, state: &mut AppState, now: Instant) -> Result<(), String> {
    let count = ResultAction::ALL.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.result_cursor = (state.result_cursor + count - 1) % count;
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.result_cursor = (state.result_cursor + 1) % count;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.result_activate(now).map_err(|e| e.to_string())?;
        }
        KeyCode::Char('r') => {
            state.result_cursor = 0;
            state.result_activate(now).map_err(|e| e.to_string())?;
        }
        KeyCode::Esc => {
            state.result_cursor = 2;
            state.result_activate(now).map_err(|e| e.to_string())?;
        }
        _ => {}
    }
    Ok(())
}

fn handle_highscores_key(key: KeyEvent, state: &mut AppState) {
    let count = Level::ALL.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.highscore_cursor = (state.highscore_cursor + count - 1) % count;
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.highscore_cursor = (state.highscore_cursor + 1) % count;
        }
        KeyCode::Char('r') | KeyCode::Delete => {
            let level = Level::ALL[state.highscore_cursor.min(count - 1)];
            state.push_dialog(Dialog::ConfirmResetLevel(level));
        }
        KeyCode::Char('a') => state.push_dialog(Dialog::ConfirmResetAll),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => state.screen = Screen::StartMenu,
        _ => {}
    }
}

fn handle_settings_key(key: KeyEvent, state: &mut AppState) {
    let count = SettingsField::ALL.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings_cursor = (state.settings_cursor + count - 1) % count;
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.settings_cursor = (state.settings_cursor + 1) % count;
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Enter | KeyCode::Char(' ') => {
            state.adjust_setting(true);
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
            state.adjust_setting(false);
        }
        KeyCode::Esc | KeyCode::Backspace => state.leave_settings(),
        _ => {}
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    let dialog = state.top_dialog().copied();
    match dialog {
        Some(Dialog::ConfirmLeaveQuiz) => match key.code {
            KeyCode::Enter => state.confirm_leave_quiz(),
            KeyCode::Esc => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::ConfirmResetLevel(level)) => match key.code {
            KeyCode::Enter => {
                state.pop_dialog();
                state.reset_highscore(level);
            }
            KeyCode::Esc => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::ConfirmResetAll) => match key.code {
            KeyCode::Enter => {
                state.pop_dialog();
                state.reset_all_highscores();
            }
            KeyCode::Esc => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::Help) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => {
                state.pop_dialog();
            }
            _ => {}
        },
        None => {}
    }
}
