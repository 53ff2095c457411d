//! European scoring rules.
//!
//! Sentiment and punctuation are ignored. Most signals are binned, with
//! the first matching bin winning, so a comment lands in exactly one word
//! count bin, at most one emoji bin and at most one hashtag bin.

use crate::scoring::{Bin, BinTable, Entry, Region, Rule, RuleTable, Scorer};

const WORD_COUNT_BINS: &[Bin] = &[
    Bin::exactly("no_words", 0, -1.0),
    Bin::range("words_1_10", 1, 10, -0.3),
    Bin::range("words_11_20", 11, 20, 0.5),
    Bin::range("words_21_30", 21, 30, 1.0),
    Bin::range("words_31_50", 31, 50, 0.4),
    Bin::at_least("words_over_50", 51, 0.2),
];

const LENGTH_BINS: &[Bin] = &[
    Bin::range("length_30_59", 30, 59, 0.3),
    Bin::at_least("length_over_600", 601, -0.3),
];

const EMOJI_BINS: &[Bin] = &[
    Bin::range("emoji_1_3", 1, 3, 0.3),
    Bin::exactly("emoji_4", 4, 0.7),
    Bin::at_least("emoji_5_plus", 5, 1.0),
];

const HASHTAG_BINS: &[Bin] = &[
    Bin::exactly("hashtags_2", 2, 0.6),
    Bin::exactly("hashtags_1", 1, 0.3),
    Bin::exactly("hashtags_3", 3, 0.3),
    Bin::at_least("hashtags_4_plus", 4, -0.2),
];

// 0.2 per allow-listed hashtag, capped at two.
const GOOD_HASHTAG_BINS: &[Bin] = &[
    Bin::exactly("good_hashtag", 1, 0.2),
    Bin::at_least("good_hashtags", 2, 0.4),
];

const ENTRIES: &[Entry] = &[
    Entry::Bins(BinTable {
        measure: |f| f.word_count,
        bins: WORD_COUNT_BINS,
    }),
    Entry::Bins(BinTable {
        measure: |f| f.length,
        bins: LENGTH_BINS,
    }),
    Entry::Bins(BinTable {
        measure: |f| f.emojis,
        bins: EMOJI_BINS,
    }),
    Entry::Bins(BinTable {
        measure: |f| f.hashtag_count,
        bins: HASHTAG_BINS,
    }),
    Entry::Bins(BinTable {
        measure: |f| f.good_hashtags,
        bins: GOOD_HASHTAG_BINS,
    }),
    Entry::Rule(Rule {
        name: "shouting",
        delta: -0.4,
        applies: |f| f.upper_words >= 2,
    }),
];

const TABLE: RuleTable = RuleTable::new(ENTRIES);

/// Scorer for European audiences.
///
/// Favors mid-length comments, generous emoji use and a couple of
/// well-chosen hashtags.
#[derive(Debug, Clone, Copy, Default)]
pub struct Europe;

impl Europe {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for Europe {
    fn region(&self) -> Region {
        Region::Europe
    }

    fn table(&self) -> &RuleTable {
        &TABLE
    }
}
