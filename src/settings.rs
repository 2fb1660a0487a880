use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::model::Level;

pub const SECONDS_RANGE: RangeInclusive<u32> = 5..=30;
pub const SPEECH_RATE_RANGE: RangeInclusive<f32> = 0.2..=0.6;
pub const SPEECH_PITCH_RANGE: RangeInclusive<f32> = 0.8..=1.2;
pub const SPEECH_STEP: f32 = 0.05;
pub const SPEECH_LANGUAGES: [(&str, &str); 2] =
    [("nl-NL", "Nederlands (NL)"), ("nl-BE", "Nederlands (BE)")];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sounds_enabled: bool,
    pub haptics_enabled: bool,
    pub warning_sound_enabled: bool,
    pub time_easy: u32,
    pub time_medium: u32,
    pub time_hard: u32,
    pub speech_enabled: bool,
    pub speech_on_answer: bool,
    pub speech_rate: f32,
    pub speech_pitch: f32,
    pub speech_lang: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sounds_enabled: true,
            haptics_enabled: true,
            warning_sound_enabled: true,
            time_easy: Level::Easy.default_seconds(),
            time_medium: Level::Medium.default_seconds(),
            time_hard: Level::Hard.default_seconds(),
            speech_enabled: true,
            speech_on_answer: true,
            speech_rate: 0.5,
            speech_pitch: 1.0,
            speech_lang: "nl-NL".to_string(),
        }
    }
}

/// Rows of the settings screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Sounds,
    Haptics,
    WarningSound,
    TimeEasy,
    TimeMedium,
    TimeHard,
    Speech,
    SpeechOnAnswer,
    SpeechRate,
    SpeechPitch,
    SpeechLang,
}

impl SettingsField {
    pub const ALL: [SettingsField; 11] = [
        SettingsField::Sounds,
        SettingsField::Haptics,
        SettingsField::WarningSound,
        SettingsField::TimeEasy,
        SettingsField::TimeMedium,
        SettingsField::TimeHard,
        SettingsField::Speech,
        SettingsField::SpeechOnAnswer,
        SettingsField::SpeechRate,
        SettingsField::SpeechPitch,
        SettingsField::SpeechLang,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsField::Sounds => "Geluidseffecten",
            SettingsField::Haptics => "Haptics",
            SettingsField::WarningSound => "Waarschuwingsgeluid (laatste 3 sec)",
            SettingsField::TimeEasy => "Tijd Makkelijk",
            SettingsField::TimeMedium => "Tijd Gemiddeld",
            SettingsField::TimeHard => "Tijd Moeilijk",
            SettingsField::Speech => "Spreek vragen/teksten uit",
            SettingsField::SpeechOnAnswer => "Spreek feedback + uitleg bij antwoord",
            SettingsField::SpeechRate => "Tempo",
            SettingsField::SpeechPitch => "Toonhoogte",
            SettingsField::SpeechLang => "Taal",
        }
    }
}

impl Settings {
    pub fn seconds_for(&self, level: Level) -> u32 {
        match level {
            Level::Easy => self.time_easy,
            Level::Medium => self.time_medium,
            Level::Hard => self.time_hard,
        }
    }

    /// Pulls every field back into its allowed range.
    pub fn clamped(mut self) -> Self {
        let (lo, hi) = (*SECONDS_RANGE.start(), *SECONDS_RANGE.end());
        self.time_easy = self.time_easy.clamp(lo, hi);
        self.time_medium = self.time_medium.clamp(lo, hi);
        self.time_hard = self.time_hard.clamp(lo, hi);
        self.speech_rate = clamp_f32(self.speech_rate, &SPEECH_RATE_RANGE);
        self.speech_pitch = clamp_f32(self.speech_pitch, &SPEECH_PITCH_RANGE);
        if !SPEECH_LANGUAGES.iter().any(|(code, _)| *code == self.speech_lang) {
            self.speech_lang = SPEECH_LANGUAGES[0].0.to_string();
        }
        self
    }

    /// Steps a field up (`forward`) or down. Booleans toggle either way.
    pub fn adjust(&mut self, field: SettingsField, forward: bool) {
        let delta: i64 = if forward { 1 } else { -1 };
        match field {
            SettingsField::Sounds => self.sounds_enabled = !self.sounds_enabled,
            SettingsField::Haptics => self.haptics_enabled = !self.haptics_enabled,
            SettingsField::WarningSound => {
                self.warning_sound_enabled = !self.warning_sound_enabled
            }
            SettingsField::TimeEasy => self.time_easy = step_seconds(self.time_easy, delta),
            SettingsField::TimeMedium => {
                self.time_medium = step_seconds(self.time_medium, delta)
            }
            SettingsField::TimeHard => self.time_hard = step_seconds(self.time_hard, delta),
            SettingsField::Speech => self.speech_enabled = !self.speech_enabled,
            SettingsField::SpeechOnAnswer => self.speech_on_answer = !self.speech_on_answer,
            SettingsField::SpeechRate => {
                self.speech_rate = clamp_f32(
                    self.speech_rate + delta as f32 * SPEECH_STEP,
                    &SPEECH_RATE_RANGE,
                )
            }
            SettingsField::SpeechPitch => {
                self.speech_pitch = clamp_f32(
                    self.speech_pitch + delta as f32 * SPEECH_STEP,
                    &SPEECH_PITCH_RANGE,
                )
            }
            SettingsField::SpeechLang => {
                let pos = SPEECH_LANGUAGES
                    .iter()
                    .position(|(code, _)| *code == self.speech_lang)
                    .unwrap_or(0);
                let next = (pos + 1) % SPEECH_LANGUAGES.len();
                self.speech_lang = SPEECH_LANGUAGES[next].0.to_string();
            }
        }
    }

    pub fn display_value(&self, field: SettingsField) -> String {
        match field {
            SettingsField::Sounds => on_off(self.sounds_enabled),
            SettingsField::Haptics => on_off(self.haptics_enabled),
            SettingsField::WarningSound => on_off(self.warning_sound_enabled),
            SettingsField::TimeEasy => format!("{}s", self.time_easy),
            SettingsField::TimeMedium => format!("{}s", self.time_medium),
            SettingsField::TimeHard => format!("{}s", self.time_hard),
            SettingsField::Speech => on_off(self.speech_enabled),
            SettingsField::SpeechOnAnswer => on_off(self.speech_on_answer),
            SettingsField::SpeechRate => format!("{:.2}", self.speech_rate),
            SettingsField::SpeechPitch => format!("{:.2}", self.speech_pitch),
            SettingsField::SpeechLang => SPEECH_LANGUAGES
                .iter()
                .find(|(code, _)| *code == self.speech_lang)
                .map(|(_, name)| name.to_string())
                .unwrap_or_else(|| self.speech_lang.clone()),
        }
    }
}

fn step_seconds(current: u32, delta: i64) -> u32 {
    let next = current as i64 + delta;
    next.clamp(*SECONDS_RANGE.start() as i64, *SECONDS_RANGE.end() as i64) as u32
}

fn clamp_f32(value: f32, range: &RangeInclusive<f32>) -> f32 {
    // round to the step grid so repeated adjustments don't drift
    let snapped = (value / SPEECH_STEP).round() * SPEECH_STEP;
    snapped.clamp(*range.start(), *range.end())
}

fn on_off(v: bool) -> String {
    if v { "aan" } else { "uit" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_level_budgets() {
        let settings = Settings::default();
        assert_eq!(settings.seconds_for(Level::Easy), 12);
        assert_eq!(settings.seconds_for(Level::Medium), 10);
        assert_eq!(settings.seconds_for(Level::Hard), 8);
    }

    #[test]
    fn test_time_steps_stay_in_range() {
        let mut settings = Settings::default();
        for _ in 0..40 {
            settings.adjust(SettingsField::TimeHard, false);
        }
        assert_eq!(settings.time_hard, 5);
        for _ in 0..40 {
            settings.adjust(SettingsField::TimeHard, true);
        }
        assert_eq!(settings.time_hard, 30);
    }

    #[test]
    fn test_speech_rate_bounds() {
        let mut settings = Settings::default();
        for _ in 0..20 {
            settings.adjust(SettingsField::SpeechRate, true);
        }
        assert!((settings.speech_rate - 0.6).abs() < 1e-6);
        for _ in 0..20 {
            settings.adjust(SettingsField::SpeechRate, false);
        }
        assert!((settings.speech_rate - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_toggle_and_language_cycle() {
        let mut settings = Settings::default();
        settings.adjust(SettingsField::Sounds, false);
        assert!(!settings.sounds_enabled);
        settings.adjust(SettingsField::SpeechLang, true);
        assert_eq!(settings.speech_lang, "nl-BE");
        settings.adjust(SettingsField::SpeechLang, true);
        assert_eq!(settings.speech_lang, "nl-NL");
    }

    #[test]
    fn test_clamped_repairs_out_of_range_values() {
        let settings = Settings {
            time_easy: 2,
            time_medium: 99,
            speech_pitch: 3.0,
            speech_lang: "fy-NL".to_string(),
            ..Settings::default()
        }
        .clamped();
        assert_eq!(settings.time_easy, 5);
        assert_eq!(settings.time_medium, 30);
        assert!((settings.speech_pitch - 1.2).abs() < 1e-6);
        assert_eq!(settings.speech_lang, "nl-NL");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let settings: Settings = serde_yaml::from_str("time_easy: 20\nsounds_enabled: false\n").unwrap();
        assert_eq!(settings.time_easy, 20);
        assert!(!settings.sounds_enabled);
        assert_eq!(settings.time_hard, 8);
    }
}
