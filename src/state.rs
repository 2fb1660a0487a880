use std::time::{Duration, Instant};

use crate::bank::QuestionBank;
use crate::feedback::Cue;
use crate::model::{FinalTally, Highscore, Level};
use crate::persist::{self, HighscoreStore};
use crate::session::{Answer, QuizSession, Reveal, SessionError, SessionEvent};
use crate::settings::{Settings, SettingsField};
use crate::store::KeyValueStore;

pub const WELCOME_DURATION: Duration = Duration::from_millis(3500);
pub const WARNING_SECONDS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    StartMenu,
    LevelSelection,
    Quiz,
    Results,
    Highscores,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    ConfirmLeaveQuiz,
    ConfirmResetLevel(Level),
    ConfirmResetAll,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    Highscores,
    Settings,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Start,
        MenuItem::Highscores,
        MenuItem::Settings,
        MenuItem::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Start => "Start Kwis",
            MenuItem::Highscores => "Highscores",
            MenuItem::Settings => "Instellingen",
            MenuItem::Quit => "Stoppen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    PlayAgain,
    OtherLevel,
    Menu,
}

impl ResultAction {
    pub const ALL: [ResultAction; 3] = [
        ResultAction::PlayAgain,
        ResultAction::OtherLevel,
        ResultAction::Menu,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResultAction::PlayAgain => "Opnieuw Spelen",
            ResultAction::OtherLevel => "Ander Level",
            ResultAction::Menu => "Terug naar Menu",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub tally: FinalTally,
    pub new_record: bool,
    pub best: Option<Highscore>,
}

/// Navigation between screens. Game rules live in `QuizSession`.
pub struct AppState {
    pub screen: Screen,
    pub bank: QuestionBank,
    pub settings: Settings,
    pub highscores: HighscoreStore<Box<dyn KeyValueStore>>,
    pub session: Option<QuizSession>,
    pub selected_level: Level,
    pub last_reveal: Option<Reveal>,
    pub result: Option<ResultSummary>,
    pub dialog_stack: Vec<Dialog>,
    pub menu_cursor: usize,
    pub choice_cursor: usize,
    pub settings_cursor: usize,
    pub highscore_cursor: usize,
    pub result_cursor: usize,
    pub pending_cues: Vec<Cue>,
    pub should_quit: bool,
    welcome_until: Option<Instant>,
}

impl AppState {
    pub fn new(
        bank: QuestionBank,
        settings: Settings,
        highscores: HighscoreStore<Box<dyn KeyValueStore>>,
        now: Instant,
    ) -> Self {
        Self {
            screen: Screen::Welcome,
            bank,
            settings,
            highscores,
            session: None,
            selected_level: Level::Easy,
            last_reveal: None,
            result: None,
            dialog_stack: Vec::new(),
            menu_cursor: 0,
            choice_cursor: 0,
            settings_cursor: 0,
            highscore_cursor: 0,
            result_cursor: 0,
            pending_cues: Vec::new(),
            should_quit: false,
            welcome_until: Some(now + WELCOME_DURATION),
        }
    }

    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.pending_cues)
    }

    /// Drives time-based transitions: the welcome splash and the running session.
    pub fn on_tick(&mut self, now: Instant) {
        if self.screen == Screen::Welcome {
            if self.welcome_until.is_some_and(|until| now >= until) {
                self.skip_welcome();
            }
            return;
        }

        if self.screen != Screen::Quiz {
            return;
        }
        let events = match self.session.as_mut() {
            Some(session) => session.poll(now),
            None => return,
        };
        for ev in events {
            self.handle_session_event(ev);
        }
    }

    pub fn skip_welcome(&mut self) {
        self.welcome_until = None;
        self.screen = Screen::StartMenu;
    }

    pub fn menu_activate(&mut self) {
        match MenuItem::ALL[self.menu_cursor.min(MenuItem::ALL.len() - 1)] {
            MenuItem::Start => self.screen = Screen::LevelSelection,
            MenuItem::Highscores => {
                self.highscore_cursor = 0;
                self.screen = Screen::Highscores;
            }
            MenuItem::Settings => {
                self.settings_cursor = 0;
                self.screen = Screen::Settings;
            }
            MenuItem::Quit => self.should_quit = true,
        }
    }

    pub fn start_quiz(&mut self, now: Instant) -> Result<(), SessionError> {
        if let Some(mut old) = self.session.take() {
            old.cancel();
        }
        let level = self.selected_level;
        let session = QuizSession::start(
            &self.bank,
            level,
            self.settings.seconds_for(level),
            now,
        )?;
        let announce = session.announce();

        self.session = Some(session);
        self.result = None;
        self.last_reveal = None;
        self.choice_cursor = 0;
        self.dialog_stack.clear();
        self.screen = Screen::Quiz;
        self.handle_session_event(announce);
        Ok(())
    }

    pub fn answer(&mut self, choice: usize, now: Instant) {
        let reveal = match self.session.as_mut() {
            Some(session) => session.submit_answer(Some(choice), now),
            None => None,
        };
        if let Some(reveal) = reveal {
            self.handle_session_event(SessionEvent::Revealed(reveal));
        }
    }

    /// Abandons the running session and returns to level selection.
    pub fn leave_quiz(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.cancel();
            log::debug!("session abandoned at question {}", session.current_index());
        }
        self.last_reveal = None;
        self.screen = Screen::LevelSelection;
    }

    /// Answer to the leave-quiz dialog. Does nothing once the quiz is over.
    pub fn confirm_leave_quiz(&mut self) {
        if self.top_dialog() == Some(&Dialog::ConfirmLeaveQuiz) {
            self.pop_dialog();
        }
        if self.screen == Screen::Quiz {
            self.leave_quiz();
        }
    }

    fn handle_session_event(&mut self, ev: SessionEvent) {
        match ev {
            SessionEvent::QuestionShown { prompt, .. } => {
                self.last_reveal = None;
                self.choice_cursor = 0;
                self.pending_cues.push(Cue::Speak(prompt.to_string()));
            }
            SessionEvent::Tick(remaining) => {
                if remaining > 0 && remaining <= WARNING_SECONDS {
                    self.pending_cues.push(Cue::Warning);
                }
            }
            SessionEvent::Revealed(reveal) => {
                self.last_reveal = Some(reveal);
                let cue = match (reveal.correct, reveal.answer) {
                    (true, _) => Cue::Correct,
                    (false, Answer::TimedOut) => Cue::TimedOut,
                    (false, Answer::Choice(_)) => Cue::Wrong,
                };
                self.pending_cues.push(cue);
                if self.settings.speech_on_answer {
                    let verdict = if reveal.correct { "Goed!" } else { "Nait goed." };
                    self.pending_cues
                        .push(Cue::Speak(format!("{} {}", verdict, reveal.explanation)));
                }
            }
            SessionEvent::Finished(tally) => self.finish(tally),
        }
    }

    fn finish(&mut self, tally: FinalTally) {
        let new_record =
            self.highscores
                .record_if_better(tally.level, tally.score, tally.total_points);
        let best = self.highscores.load(tally.level);
        self.result = Some(ResultSummary {
            tally,
            new_record,
            best,
        });
        self.session = None;
        self.last_reveal = None;
        self.result_cursor = 0;
        self.dialog_stack.retain(|d| *d != Dialog::ConfirmLeaveQuiz);
        self.screen = Screen::Results;
        self.pending_cues.push(Cue::Speak(format!(
            "Klaar! Je hebt {} van {} goed, en {} punten.",
            tally.score, tally.total_questions, tally.total_points
        )));
    }

    pub fn result_activate(&mut self, now: Instant) -> Result<(), SessionError> {
        match ResultAction::ALL[self.result_cursor.min(ResultAction::ALL.len() - 1)] {
            ResultAction::PlayAgain => return self.start_quiz(now),
            ResultAction::OtherLevel => {
                self.result = None;
                self.screen = Screen::LevelSelection;
            }
            ResultAction::Menu => {
                self.result = None;
                self.screen = Screen::StartMenu;
            }
        }
        Ok(())
    }

    pub fn highscore(&self, level: Level) -> Option<Highscore> {
        self.highscores.load(level)
    }

    pub fn reset_highscore(&mut self, level: Level) {
        self.highscores.reset(level);
    }

    pub fn reset_all_highscores(&mut self) {
        self.highscores.reset_all();
    }

    pub fn settings_field(&self) -> SettingsField {
        SettingsField::ALL[self.settings_cursor.min(SettingsField::ALL.len() - 1)]
    }

    pub fn adjust_setting(&mut self, forward: bool) {
        let field = self.settings_field();
        self.settings.adjust(field, forward);
    }

    /// Saves settings and returns to the start menu.
    pub fn leave_settings(&mut self) {
        persist::save_settings(self.highscores.store_mut(), &self.settings);
        self.screen = Screen::StartMenu;
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}
