//! North American scoring rules.
//!
//! Every rule is an independent threshold, so the burst rules stack on top
//! of their base rules (three exclamation marks earn both `exclamation` and
//! `exclamation_burst`).

use crate::scoring::{Entry, Region, Rule, RuleTable, Scorer};

const ENTRIES: &[Entry] = &[
    Entry::Rule(Rule {
        name: "positive_words",
        delta: 1.0,
        applies: |f| f.has_positive,
    }),
    Entry::Rule(Rule {
        name: "negative_words",
        delta: -1.0,
        applies: |f| f.has_negative,
    }),
    Entry::Rule(Rule {
        name: "exclamation",
        delta: 0.3,
        applies: |f| f.exclamations >= 1,
    }),
    Entry::Rule(Rule {
        name: "exclamation_burst",
        delta: 0.2,
        applies: |f| f.exclamations >= 3,
    }),
    Entry::Rule(Rule {
        name: "question",
        delta: 0.5,
        applies: |f| f.questions >= 1,
    }),
    Entry::Rule(Rule {
        name: "emoji",
        delta: 0.4,
        applies: |f| f.emojis >= 1,
    }),
    Entry::Rule(Rule {
        name: "emoji_burst",
        delta: 0.2,
        applies: |f| f.emojis >= 3,
    }),
    Entry::Rule(Rule {
        name: "shouting",
        delta: -0.5,
        applies: |f| f.upper_words >= 2,
    }),
    Entry::Rule(Rule {
        name: "too_short",
        delta: -1.0,
        applies: |f| f.word_count < 3,
    }),
    Entry::Rule(Rule {
        name: "sweet_spot",
        delta: 0.5,
        applies: |f| (3..=20).contains(&f.word_count),
    }),
    Entry::Rule(Rule {
        name: "too_long",
        delta: -0.5,
        applies: |f| f.word_count > 40,
    }),
    Entry::Rule(Rule {
        name: "long_text",
        delta: -0.3,
        applies: |f| f.length > 260,
    }),
    Entry::Rule(Rule {
        name: "very_long_text",
        delta: -0.4,
        applies: |f| f.length > 400,
    }),
];

const TABLE: RuleTable = RuleTable::new(ENTRIES);

/// Scorer for North American audiences.
///
/// Rewards sentiment, punctuation energy and emoji; penalizes shouting and
/// comments that are too short or too long.
#[derive(Debug, Clone, Copy, Default)]
pub struct NorthAmerica;

impl NorthAmerica {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for NorthAmerica {
    fn region(&self) -> Region {
        Region::NorthAmerica
    }

    fn table(&self) -> &RuleTable {
        &TABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureRecord;
    use crate::scoring::{Label, ScoreResult};

    fn score(features: FeatureRecord) -> ScoreResult {
        NorthAmerica::new().score(&features)
    }

    fn rules(result: &ScoreResult) -> Vec<&'static str> {
        result.contributions.iter().map(|c| c.rule).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_positive_comment() {
        let result = score(FeatureRecord {
            has_positive: true,
            exclamations: 1,
            word_count: 10,
            length: 50,
            ..Default::default()
        });
        assert!(approx(result.score, 1.8), "score: {}", result.score);
        assert_eq!(result.label, Label::Medium);
        assert_eq!(rules(&result), vec!["positive_words", "exclamation", "sweet_spot"]);
    }

    #[test]
    fn test_exact_high_boundary() {
        let result = score(FeatureRecord {
            has_positive: true,
            questions: 1,
            word_count: 5,
            length: 30,
            ..Default::default()
        });
        assert_eq!(result.score, 2.0);
        assert_eq!(result.label, Label::High);
    }

    #[test]
    fn test_exact_medium_boundary() {
        let result = score(FeatureRecord {
            word_count: 3,
            length: 12,
            ..Default::default()
        });
        assert_eq!(result.score, 0.5);
        assert_eq!(result.label, Label::Medium);
    }

    #[test]
    fn test_exclamation_burst_stacks() {
        let result = score(FeatureRecord {
            exclamations: 3,
            word_count: 25,
            ..Default::default()
        });
        assert_eq!(rules(&result), vec!["exclamation", "exclamation_burst"]);
        assert!(approx(result.score, 0.5));
    }

    #[test]
    fn test_emoji_burst_stacks() {
        let result = score(FeatureRecord {
            emojis: 3,
            word_count: 25,
            ..Default::default()
        });
        assert_eq!(rules(&result), vec!["emoji", "emoji_burst"]);
        assert!(approx(result.score, 0.6));
        assert_eq!(result.label, Label::Medium);
    }

    #[test]
    fn test_sentiment_cancels() {
        let result = score(FeatureRecord {
            has_positive: true,
            has_negative: true,
            word_count: 25,
            ..Default::default()
        });
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, Label::Low);
    }

    #[test]
    fn test_too_short() {
        let result = score(FeatureRecord {
            word_count: 2,
            length: 9,
            ..Default::default()
        });
        assert_eq!(rules(&result), vec!["too_short"]);
        assert_eq!(result.label, Label::Low);
    }

    #[test]
    fn test_empty_record() {
        let result = score(FeatureRecord::default());
        assert_eq!(result.score, -1.0);
        assert_eq!(result.label, Label::Low);
    }

    #[test]
    fn test_word_count_gap_is_neutral() {
        for word_count in [21, 30, 40] {
            let result = score(FeatureRecord {
                word_count,
                ..Default::default()
            });
            assert!(result.contributions.is_empty(), "words: {}", word_count);
        }
    }

    #[test]
    fn test_shouting() {
        let result = score(FeatureRecord {
            upper_words: 2,
            word_count: 25,
            ..Default::default()
        });
        assert_eq!(result.score, -0.5);

        let result = score(FeatureRecord {
            upper_words: 1,
            word_count: 25,
            ..Default::default()
        });
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_long_text_penalties_stack() {
        let result = score(FeatureRecord {
            word_count: 80,
            length: 401,
            ..Default::default()
        });
        assert_eq!(rules(&result), vec!["too_long", "long_text", "very_long_text"]);
        assert!(approx(result.score, -1.2));

        let result = score(FeatureRecord {
            word_count: 30,
            length: 261,
            ..Default::default()
        });
        assert_eq!(rules(&result), vec!["long_text"]);
    }

    #[test]
    fn test_length_boundaries_exclusive() {
        let result = score(FeatureRecord {
            word_count: 30,
            length: 260,
            ..Default::default()
        });
        assert!(result.contributions.is_empty());

        let result = score(FeatureRecord {
            word_count: 30,
            length: 400,
            ..Default::default()
        });
        assert_eq!(rules(&result), vec!["long_text"]);
    }

    #[test]
    fn test_ignores_hashtags() {
        let result = score(FeatureRecord {
            word_count: 25,
            hashtag_count: 2,
            good_hashtags: 2,
            ..Default::default()
        });
        assert!(result.contributions.is_empty());
    }

    #[test]
    fn test_table_size() {
        assert_eq!(NorthAmerica::new().table().entries().len(), 13);
    }
}
