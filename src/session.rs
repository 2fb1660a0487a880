use std::time::{Duration, Instant};

use thiserror::Error;

use crate::bank::QuestionBank;
use crate::model::{FinalTally, Level, QuizItem};
use crate::timer::{Deferred, SessionTimer, TimerEvent};

/// Pause between revealing an answer and moving on.
pub const REVEAL_DELAY: Duration = Duration::from_secs(2);

/// Points per second left on the clock for a correct answer.
pub const BONUS_PER_SECOND: u32 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no questions available for level {0}")]
    InvalidLevel(Level),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Choice(usize),
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionReveal {
    /// Still waiting for an answer.
    Pending,
    Correct,
    /// The option that was picked and is wrong.
    Wrong,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub answer: Answer,
    pub correct: bool,
    pub points_awarded: u32,
    pub time_bonus: u32,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    QuestionShown { index: usize, prompt: &'static str },
    Tick(u32),
    Revealed(Reveal),
    Finished(FinalTally),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next(usize),
    Finished(FinalTally),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active,
    Finished(FinalTally),
    Cancelled,
}

/// One playthrough of every question of a level.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    level: Level,
    items: Vec<&'static QuizItem>,
    current: usize,
    score: u32,
    total_points: u32,
    selected: Option<Answer>,
    total_seconds: u32,
    timer: SessionTimer,
    pending_advance: Deferred,
    phase: Phase,
}

impl QuizSession {
    pub fn start(
        bank: &QuestionBank,
        level: Level,
        seconds_per_question: u32,
        now: Instant,
    ) -> Result<Self, SessionError> {
        let items = bank.items_for_level(level);
        if items.is_empty() {
            return Err(SessionError::InvalidLevel(level));
        }

        let mut timer = SessionTimer::new();
        timer.start(seconds_per_question, now);
        log::debug!(
            "session started: level={} questions={} seconds={}",
            level.key(),
            items.len(),
            seconds_per_question
        );

        Ok(Self {
            level,
            items,
            current: 0,
            score: 0,
            total_points: 0,
            selected: None,
            total_seconds: seconds_per_question,
            timer,
            pending_advance: Deferred::default(),
            phase: Phase::Active,
        })
    }

    /// Event announcing the question currently on screen.
    pub fn announce(&self) -> SessionEvent {
        SessionEvent::QuestionShown {
            index: self.current,
            prompt: self.current_item().prompt,
        }
    }

    /// Records an answer for the current question. `None` means time ran out.
    /// Returns `None` when the question was already answered or the session
    /// is no longer active; the state is left untouched in that case.
    pub fn submit_answer(&mut self, choice: Option<usize>, now: Instant) -> Option<Reveal> {
        if self.phase != Phase::Active || self.selected.is_some() {
            return None;
        }

        let remaining = self.timer.remaining();
        self.timer.stop();

        let answer = match choice {
            Some(idx) => Answer::Choice(idx),
            None => Answer::TimedOut,
        };
        self.selected = Some(answer);

        let item = self.current_item();
        let correct = matches!(answer, Answer::Choice(idx) if item.is_correct(idx));
        let (points_awarded, time_bonus) = if correct {
            let bonus = BONUS_PER_SECOND * remaining;
            (item.points + bonus, bonus)
        } else {
            (0, 0)
        };
        let explanation = item.explanation;

        if correct {
            self.score += 1;
            self.total_points += points_awarded;
        }

        self.pending_advance.schedule(REVEAL_DELAY, now);
        log::debug!(
            "answer {:?} on question {}: correct={} points={}",
            answer,
            self.current,
            correct,
            points_awarded
        );

        Some(Reveal {
            answer,
            correct,
            points_awarded,
            time_bonus,
            explanation,
        })
    }

    /// Moves to the next question, or finishes on the last one.
    pub fn advance(&mut self, now: Instant) -> Option<Advance> {
        if self.phase != Phase::Active {
            return None;
        }
        self.pending_advance.cancel();

        if self.current + 1 >= self.items.len() {
            self.timer.stop();
            let tally = self.tally();
            self.phase = Phase::Finished(tally);
            log::debug!(
                "session finished: level={} score={}/{} points={}",
                self.level.key(),
                tally.score,
                tally.total_questions,
                tally.total_points
            );
            return Some(Advance::Finished(tally));
        }

        self.current += 1;
        self.selected = None;
        self.timer.start(self.total_seconds, now);
        Some(Advance::Next(self.current))
    }

    /// Timer ran out: submit "no answer" unless something was already submitted.
    pub fn on_timer_expired(&mut self, now: Instant) -> Option<Reveal> {
        if self.selected.is_some() {
            return None;
        }
        self.submit_answer(None, now)
    }

    /// Advances the countdown by exactly one second.
    pub fn tick(&mut self, now: Instant) -> Vec<SessionEvent> {
        match self.timer.tick() {
            Some(ev) => self.handle_timer_event(ev, now),
            None => Vec::new(),
        }
    }

    /// Runs whatever is due at `now`: countdown ticks, time-out submission
    /// and the delayed move to the next question.
    pub fn poll(&mut self, now: Instant) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        for ev in self.timer.poll(now) {
            events.extend(self.handle_timer_event(ev, now));
        }

        if self.pending_advance.fire_if_due(now) {
            match self.advance(now) {
                Some(Advance::Next(_)) => events.push(self.announce()),
                Some(Advance::Finished(tally)) => events.push(SessionEvent::Finished(tally)),
                None => {}
            }
        }
        events
    }

    fn handle_timer_event(&mut self, ev: TimerEvent, now: Instant) -> Vec<SessionEvent> {
        match ev {
            TimerEvent::Tick(remaining) => vec![SessionEvent::Tick(remaining)],
            TimerEvent::Expired => {
                let mut events = vec![SessionEvent::Tick(0)];
                if let Some(reveal) = self.on_timer_expired(now) {
                    events.push(SessionEvent::Revealed(reveal));
                }
                events
            }
        }
    }

    /// Tears the session down. No tick or pending transition fires afterwards.
    pub fn cancel(&mut self) {
        self.timer.stop();
        self.pending_advance.cancel();
        if self.phase == Phase::Active {
            self.phase = Phase::Cancelled;
        }
    }

    pub fn tally(&self) -> FinalTally {
        FinalTally {
            level: self.level,
            score: self.score,
            total_points: self.total_points,
            total_questions: self.items.len() as u32,
        }
    }

    pub fn finished(&self) -> Option<FinalTally> {
        match self.phase {
            Phase::Finished(tally) => Some(tally),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn items(&self) -> &[&'static QuizItem] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &'static QuizItem {
        self.items[self.current]
    }

    pub fn question_count(&self) -> usize {
        self.items.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn selected(&self) -> Option<Answer> {
        self.selected
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn advance_pending(&self) -> bool {
        self.pending_advance.is_pending()
    }

    pub fn option_reveal(&self, idx: usize) -> OptionReveal {
        let Some(answer) = self.selected else {
            return OptionReveal::Pending;
        };
        let item = self.current_item();
        if item.is_correct(idx) {
            OptionReveal::Correct
        } else if answer == Answer::Choice(idx) {
            OptionReveal::Wrong
        } else {
            OptionReveal::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;

    fn easy(now: Instant) -> QuizSession {
        QuizSession::start(&QuestionBank::builtin(), Level::Easy, 12, now).unwrap()
    }

    #[test]
    fn test_start_resets_counters() {
        let session = easy(Instant::now());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.total_points(), 0);
        assert_eq!(session.selected(), None);
        assert_eq!(session.remaining_seconds(), 12);
        assert_eq!(session.total_seconds(), 12);
        assert!(session.timer_running());
        assert_eq!(session.question_count(), 4);
    }

    #[test]
    fn test_empty_level_is_rejected() {
        static ONLY_EASY: &[QuizItem] = &[QuizItem {
            prompt: "Wat betekent 'moi'?",
            options: &["Dag", "Mooi"],
            correct: 0,
            explanation: "",
            level: Level::Easy,
            points: 10,
        }];
        let bank = QuestionBank::new(ONLY_EASY);
        let err = QuizSession::start(&bank, Level::Hard, 8, Instant::now()).unwrap_err();
        assert_eq!(err, SessionError::InvalidLevel(Level::Hard));
    }

    #[test]
    fn test_time_bonus_uses_remaining_seconds() {
        let now = Instant::now();
        let mut session = easy(now);
        session.tick(now);
        session.tick(now);
        let reveal = session.submit_answer(Some(0), now).unwrap();
        assert!(reveal.correct);
        assert_eq!(reveal.time_bonus, 20);
        assert_eq!(session.total_points(), 10 + 20);
    }

    #[test]
    fn test_submit_stops_timer_and_schedules_advance() {
        let now = Instant::now();
        let mut session = easy(now);
        session.submit_answer(Some(1), now);
        assert!(!session.timer_running());
        assert!(session.advance_pending());

        assert!(session.poll(now + Duration::from_millis(1999)).is_empty());
        let events = session.poll(now + REVEAL_DELAY);
        assert!(matches!(
            events.as_slice(),
            [SessionEvent::QuestionShown { index: 1, .. }]
        ));
        assert_eq!(session.selected(), None);
        assert_eq!(session.remaining_seconds(), 12);
        assert!(session.timer_running());
    }

    #[test]
    fn test_option_reveal_after_wrong_answer() {
        let now = Instant::now();
        let mut session = easy(now);
        assert_eq!(session.option_reveal(0), OptionReveal::Pending);
        session.submit_answer(Some(2), now);
        assert_eq!(session.option_reveal(0), OptionReveal::Correct);
        assert_eq!(session.option_reveal(1), OptionReveal::Neutral);
        assert_eq!(session.option_reveal(2), OptionReveal::Wrong);
    }

    #[test]
    fn test_out_of_range_choice_is_wrong() {
        let now = Instant::now();
        let mut session = easy(now);
        let reveal = session.submit_answer(Some(9), now).unwrap();
        assert!(!reveal.correct);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_expiry_submits_timeout() {
        let now = Instant::now();
        let mut session = easy(now);
        let events = session.poll(now + Duration::from_secs(12));
        assert!(events.contains(&SessionEvent::Tick(0)));
        let reveal = events
            .iter()
            .find_map(|e| match e {
                SessionEvent::Revealed(r) => Some(*r),
                _ => None,
            })
            .unwrap();
        assert_eq!(reveal.answer, Answer::TimedOut);
        assert_eq!(session.selected(), Some(Answer::TimedOut));
        assert_eq!(session.total_points(), 0);
    }

    #[test]
    fn test_cancel_drops_pending_advance() {
        let now = Instant::now();
        let mut session = easy(now);
        session.submit_answer(Some(0), now);
        session.cancel();
        assert!(session.poll(now + Duration::from_secs(10)).is_empty());
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_active());
        assert_eq!(session.submit_answer(Some(0), now), None);
        assert_eq!(session.advance(now), None);
    }
}
