use std::time::{Duration, Instant};

pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Stopped,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick(u32),
    Expired,
}

/// Per-question countdown. Driven by the caller through `poll` (wall clock)
/// or `tick` (one step), so nothing fires once `stop` has returned.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionTimer {
    state: TimerState,
    remaining: u32,
    next_tick: Option<Instant>,
}

impl SessionTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            remaining: 0,
            next_tick: None,
        }
    }

    /// Restarts the countdown, discarding any previous run.
    pub fn start(&mut self, duration_secs: u32, now: Instant) {
        self.state = TimerState::Running;
        self.remaining = duration_secs;
        self.next_tick = Some(now + TICK);
    }

    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = TimerState::Expired;
            self.next_tick = None;
            Some(TimerEvent::Expired)
        } else {
            Some(TimerEvent::Tick(self.remaining))
        }
    }

    /// Runs every tick that is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        while let Some(due) = self.next_tick {
            if due > now {
                break;
            }
            self.next_tick = Some(due + TICK);
            if let Some(ev) = self.tick() {
                events.push(ev);
            }
        }
        events
    }

    pub fn stop(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Stopped;
        }
        self.next_tick = None;
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// A one-shot deadline that can be cancelled before it fires.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deferred {
    due: Option<Instant>,
}

impl Deferred {
    pub fn schedule(&mut self, delay: Duration, now: Instant) {
        self.due = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Returns true once, when the deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

pub fn format_duration(total_secs: u32) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_ticks_expire_once() {
        let mut timer = SessionTimer::new();
        timer.start(10, Instant::now());

        let events: Vec<TimerEvent> = (0..10).filter_map(|_| timer.tick()).collect();
        let expiries = events.iter().filter(|e| **e == TimerEvent::Expired).count();
        assert_eq!(expiries, 1);
        assert_eq!(events.last(), Some(&TimerEvent::Expired));
        assert_eq!(timer.state(), TimerState::Expired);

        timer.stop();
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.state(), TimerState::Expired);
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_stop_before_any_tick() {
        let mut timer = SessionTimer::new();
        timer.stop();
        assert_eq!(timer.state(), TimerState::Idle);

        let now = Instant::now();
        timer.start(5, now);
        timer.stop();
        timer.stop();
        assert_eq!(timer.state(), TimerState::Stopped);
        assert!(timer.poll(now + Duration::from_secs(30)).is_empty());
        assert_eq!(timer.remaining(), 5);
    }

    #[test]
    fn test_poll_runs_due_ticks() {
        let now = Instant::now();
        let mut timer = SessionTimer::new();
        timer.start(8, now);

        assert!(timer.poll(now + Duration::from_millis(999)).is_empty());
        assert_eq!(
            timer.poll(now + Duration::from_secs(1)),
            vec![TimerEvent::Tick(7)]
        );
        assert_eq!(
            timer.poll(now + Duration::from_millis(3500)),
            vec![TimerEvent::Tick(6), TimerEvent::Tick(5)]
        );
        let rest = timer.poll(now + Duration::from_secs(60));
        assert_eq!(rest.last(), Some(&TimerEvent::Expired));
        assert_eq!(rest.len(), 5);
    }

    #[test]
    fn test_restart_resets_remaining() {
        let now = Instant::now();
        let mut timer = SessionTimer::new();
        timer.start(3, now);
        timer.tick();
        timer.tick();
        timer.tick();
        assert_eq!(timer.state(), TimerState::Expired);

        timer.start(3, now);
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining(), 3);
    }

    #[test]
    fn test_deferred_fires_once() {
        let now = Instant::now();
        let mut deferred = Deferred::default();
        deferred.schedule(Duration::from_secs(2), now);
        assert!(!deferred.fire_if_due(now + Duration::from_secs(1)));
        assert!(deferred.fire_if_due(now + Duration::from_secs(2)));
        assert!(!deferred.fire_if_due(now + Duration::from_secs(3)));
    }

    #[test]
    fn test_deferred_cancel() {
        let now = Instant::now();
        let mut deferred = Deferred::default();
        deferred.schedule(Duration::from_secs(2), now);
        deferred.cancel();
        assert!(!deferred.is_pending());
        assert!(!deferred.fire_if_due(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(12), "0:12");
        assert_eq!(format_duration(75), "1:15");
    }
}
