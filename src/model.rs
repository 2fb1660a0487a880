use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

/// Presentation-only color tag for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelColor {
    Green,
    Blue,
    Red,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    pub fn display_name(self) -> &'static str {
        match self {
            Level::Easy => "Makkelijk",
            Level::Medium => "Gemiddeld",
            Level::Hard => "Moeilijk",
        }
    }

    /// Name shown on the level cards.
    pub fn dialect_name(self) -> &'static str {
        match self {
            Level::Easy => "Moi",
            Level::Medium => "Gewoon",
            Level::Hard => "Moeilijk",
        }
    }

    /// Stable identifier used for storage keys.
    pub fn key(self) -> &'static str {
        match self {
            Level::Easy => "makkelijk",
            Level::Medium => "gemiddeld",
            Level::Hard => "moeilijk",
        }
    }

    pub fn default_seconds(self) -> u32 {
        match self {
            Level::Easy => 12,
            Level::Medium => 10,
            Level::Hard => 8,
        }
    }

    pub fn color(self) -> LevelColor {
        match self {
            Level::Easy => LevelColor::Green,
            Level::Medium => LevelColor::Blue,
            Level::Hard => LevelColor::Red,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Level::Easy => "❦",
            Level::Medium => "⌂",
            Level::Hard => "♛",
        }
    }

    pub fn next(self) -> Level {
        match self {
            Level::Easy => Level::Medium,
            Level::Medium => Level::Hard,
            Level::Hard => Level::Easy,
        }
    }

    pub fn prev(self) -> Level {
        match self {
            Level::Easy => Level::Hard,
            Level::Medium => Level::Easy,
            Level::Hard => Level::Medium,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "makkelijk" | "moi" => Ok(Level::Easy),
            "medium" | "gemiddeld" | "gewoon" => Ok(Level::Medium),
            "hard" | "moeilijk" => Ok(Level::Hard),
            other => Err(format!(
                "unknown level '{}' (expected easy, medium or hard)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizItem {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
    pub level: Level,
    pub points: u32,
}

impl QuizItem {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }

    pub fn correct_text(&self) -> &'static str {
        self.options.get(self.correct).copied().unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Highscore {
    pub correct: u32,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieved_at: Option<DateTime<FixedOffset>>,
}

impl Highscore {
    pub fn new(correct: u32, points: u32) -> Self {
        Self {
            correct,
            points,
            achieved_at: None,
        }
    }

    /// Points dominate; correct count only breaks ties.
    pub fn beats(&self, other: &Highscore) -> bool {
        self.points > other.points
            || (self.points == other.points && self.correct > other.correct)
    }
}

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalTally {
    pub level: Level,
    pub score: u32,
    pub total_points: u32,
    pub total_questions: u32,
}

impl FinalTally {
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        self.score * 100 / self.total_questions
    }

    pub fn tier(&self) -> ResultTier {
        ResultTier::for_score(self.score, self.total_questions)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Perfect,
    Great,
    Fair,
    Practice,
}

impl ResultTier {
    pub fn for_score(score: u32, total: u32) -> Self {
        if score == total {
            ResultTier::Perfect
        } else if score >= total * 3 / 4 {
            ResultTier::Great
        } else if score >= total / 2 {
            ResultTier::Fair
        } else {
            ResultTier::Practice
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ResultTier::Perfect => "Perfect! Je bent een echte Groninger!",
            ResultTier::Great => "Goed gedaan! Je kent je Gronings!",
            ResultTier::Fair => "Niet slecht! Nog wat oefenen!",
            ResultTier::Practice => "Oefen nog wat meer Gronings!",
        }
    }
}
