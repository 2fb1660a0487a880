use std::io::{self, Write};

use crate::settings::Settings;

/// Sound, haptic and speech cues raised by the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cue {
    Correct,
    Wrong,
    TimedOut,
    /// Countdown is in its last seconds.
    Warning,
    Speak(String),
}

/// Collaborator that plays cues.
pub trait Feedback {
    fn cue(&mut self, cue: &Cue);
}

/// Forwards `cue` to `feedback` when the user's settings allow it.
pub fn dispatch(settings: &Settings, feedback: &mut dyn Feedback, cue: Cue) {
    let enabled = match &cue {
        Cue::Correct | Cue::Wrong | Cue::TimedOut => settings.sounds_enabled || settings.haptics_enabled,
        Cue::Warning => settings.warning_sound_enabled,
        Cue::Speak(_) => settings.speech_enabled,
    };
    if enabled {
        feedback.cue(&cue);
    } else {
        log::trace!("cue suppressed by settings: {:?}", cue);
    }
}

/// Terminal feedback: the bell stands in for sounds and spoken text is
/// shown as a caption.
#[derive(Debug, Default)]
pub struct TerminalFeedback {
    pub sounds_enabled: bool,
    pub haptics_enabled: bool,
    caption: Option<String>,
}

impl TerminalFeedback {
    pub fn new(settings: &Settings) -> Self {
        Self {
            sounds_enabled: settings.sounds_enabled,
            haptics_enabled: settings.haptics_enabled,
            caption: None,
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.sounds_enabled = settings.sounds_enabled;
        self.haptics_enabled = settings.haptics_enabled;
        if !settings.speech_enabled {
            self.caption = None;
        }
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn clear_caption(&mut self) {
        self.caption = None;
    }

    fn bell(&self) {
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

impl Feedback for TerminalFeedback {
    fn cue(&mut self, cue: &Cue) {
        match cue {
            Cue::Correct | Cue::Wrong | Cue::TimedOut => {
                if self.haptics_enabled {
                    log::debug!("haptic cue {:?} has no terminal output", cue);
                }
                if self.sounds_enabled {
                    self.bell();
                }
            }
            Cue::Warning => self.bell(),
            Cue::Speak(text) => self.caption = Some(text.clone()),
        }
    }
}

/// Records cues; used by tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    pub cues: Vec<Cue>,
}

impl Feedback for RecordingFeedback {
    fn cue(&mut self, cue: &Cue) {
        self.cues.push(cue.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_respects_settings() {
        let settings = Settings {
            speech_enabled: false,
            warning_sound_enabled: false,
            ..Settings::default()
        };
        let mut rec = RecordingFeedback::default();
        dispatch(&settings, &mut rec, Cue::Speak("Moi".into()));
        dispatch(&settings, &mut rec, Cue::Warning);
        dispatch(&settings, &mut rec, Cue::Correct);
        assert_eq!(rec.cues, vec![Cue::Correct]);
    }

    #[test]
    fn test_terminal_caption() {
        let mut fb = TerminalFeedback::new(&Settings::default());
        fb.cue(&Cue::Speak("Goed!".into()));
        assert_eq!(fb.caption(), Some("Goed!"));
        fb.apply_settings(&Settings {
            speech_enabled: false,
            ..Settings::default()
        });
        assert_eq!(fb.caption(), None);
    }
}
