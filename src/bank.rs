use crate::model::{Level, QuizItem};

static BUILTIN: &[QuizItem] = &[
    // Makkelijk (10 punten)
    QuizItem {
        prompt: "Wat betekent 'moi' in het Gronings?",
        options: &["Dag", "Mooi", "Goed", "Hallo"],
        correct: 0,
        explanation: "'Moi' betekent 'dag' of 'hallo' in het Gronings!",
        level: Level::Easy,
        points: 10,
    },
    QuizItem {
        prompt: "Wat is de betekenis van 'nait'?",
        options: &["Niet", "Naar", "Nog", "Nu"],
        correct: 0,
        explanation: "'Nait' betekent 'niet' in het Gronings!",
        level: Level::Easy,
        points: 10,
    },
    QuizItem {
        prompt: "Wat betekent 'kwis'?",
        options: &["Quiz", "Kwis", "Vraag", "Spel"],
        correct: 0,
        explanation: "'Kwis' is gewoon 'quiz' in het Gronings!",
        level: Level::Easy,
        points: 10,
    },
    QuizItem {
        prompt: "Wat is 'normaal' in het Gronings?",
        options: &["Normaal", "Gewoon", "Gewoonlijk", "Altijd"],
        correct: 0,
        explanation: "'Normaal' blijft 'normaal' in het Gronings!",
        level: Level::Easy,
        points: 10,
    },
    // Gemiddeld (20 punten)
    QuizItem {
        prompt: "Wat betekent 'dizze'?",
        options: &["Deze", "Die", "Dat", "Het"],
        correct: 0,
        explanation: "'Dizze' betekent 'deze' in het Gronings!",
        level: Level::Medium,
        points: 20,
    },
    QuizItem {
        prompt: "Wat is 'is' in het Gronings?",
        options: &["Is", "Zijn", "Wordt", "Blijft"],
        correct: 0,
        explanation: "'Is' blijft 'is' in het Gronings!",
        level: Level::Medium,
        points: 20,
    },
    QuizItem {
        prompt: "Wat betekent 'wa' in het Gronings?",
        options: &["Wat", "Wie", "Waar", "Wanneer"],
        correct: 0,
        explanation: "'Wa' betekent 'wat' in het Gronings!",
        level: Level::Medium,
        points: 20,
    },
    QuizItem {
        prompt: "Wat is 'doe' in het Gronings?",
        options: &["Doe", "Doe je", "Doe het", "Doe maar"],
        correct: 0,
        explanation: "'Doe' betekent 'doe' in het Gronings!",
        level: Level::Medium,
        points: 20,
    },
    // Moeilijk (30 punten)
    QuizItem {
        prompt: "Wat betekent 'zo' in het Gronings?",
        options: &["Zo", "Zus", "Zusje", "Zuster"],
        correct: 0,
        explanation: "'Zo' betekent 'zo' in het Gronings!",
        level: Level::Hard,
        points: 30,
    },
    QuizItem {
        prompt: "Wat is 'mien' in het Gronings?",
        options: &["Mijn", "Me", "Mij", "Mijn"],
        correct: 0,
        explanation: "'Mien' betekent 'mijn' in het Gronings!",
        level: Level::Hard,
        points: 30,
    },
    QuizItem {
        prompt: "Wat betekent 'bist' in het Gronings?",
        options: &["Ben je", "Bent", "Zijn", "Wordt"],
        correct: 0,
        explanation: "'Bist' betekent 'ben je' in het Gronings!",
        level: Level::Hard,
        points: 30,
    },
    QuizItem {
        prompt: "Wat is 'komt' in het Gronings?",
        options: &["Komt", "Komen", "Gaan", "Lopen"],
        correct: 0,
        explanation: "'Komt' betekent 'komt' in het Gronings!",
        level: Level::Hard,
        points: 30,
    },
];

/// Immutable, ordered collection of quiz items.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    items: &'static [QuizItem],
}

impl QuestionBank {
    pub fn builtin() -> Self {
        Self { items: BUILTIN }
    }

    pub fn new(items: &'static [QuizItem]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &'static [QuizItem] {
        self.items
    }

    /// Items tagged with `level`, in bank order.
    pub fn items_for_level(&self, level: Level) -> Vec<&'static QuizItem> {
        self.items.iter().filter(|item| item.level == level).collect()
    }

    pub fn question_count(&self, level: Level) -> usize {
        self.items.iter().filter(|item| item.level == level).count()
    }

    /// Sum of base points, without time bonus.
    pub fn max_base_points(&self, level: Level) -> u32 {
        self.items
            .iter()
            .filter(|item| item.level == level)
            .map(|item| item.points)
            .sum()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_items_in_bank_order() {
        let bank = QuestionBank::builtin();
        for level in Level::ALL {
            let items = bank.items_for_level(level);
            assert!(!items.is_empty(), "{} has no items", level);
            assert!(items.iter().all(|item| item.level == level));

            let positions: Vec<usize> = items
                .iter()
                .map(|item| {
                    bank.items()
                        .iter()
                        .position(|candidate| std::ptr::eq(candidate, *item))
                        .unwrap()
                })
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_correct_index_in_bounds() {
        for item in QuestionBank::builtin().items() {
            assert!(item.options.len() >= 2);
            assert!(item.correct < item.options.len(), "{}", item.prompt);
        }
    }

    #[test]
    fn test_first_easy_item() {
        let bank = QuestionBank::builtin();
        let first = bank.items_for_level(Level::Easy)[0];
        assert!(first.prompt.contains("moi"));
        assert_eq!(first.correct_text(), "Dag");
        assert_eq!(first.points, 10);
    }

    #[test]
    fn test_level_totals() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.question_count(Level::Easy), 4);
        assert_eq!(bank.max_base_points(Level::Easy), 40);
        assert_eq!(bank.max_base_points(Level::Medium), 80);
        assert_eq!(bank.max_base_points(Level::Hard), 120);
    }
}
