//! Feature extraction from comment text.
//!
//! This module turns a raw comment into a [`FeatureRecord`]: a handful of
//! shallow lexical and punctuation signals that the regional scorers consume.
//! Extraction is total (every string, including the empty one, yields a
//! record) and deterministic.

use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pictographic block counted as emoji.
const EMOJI_RANGE: RangeInclusive<char> = '\u{1F300}'..='\u{1FAFF}';

/// Tokens must be longer than this to count as shouted words.
const UPPER_WORD_MIN_LEN: usize = 3;

/// Hashtags that tend to draw engagement.
const GOOD_HASHTAGS: &[&str] = &[
    "love",
    "travel",
    "music",
    "food",
    "art",
    "nature",
    "photography",
    "fashion",
    "fitness",
    "summer",
];

// Substring matches, no word boundaries: "badge" contains "bad".
// ASCII case folding only, so "ſad" is not "sad".
static POSITIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)love|great|amazing|awesome|nice|cool|happy|wow|excited").unwrap()
});

static NEGATIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)hate|terrible|awful|bad|boring|angry|sad|disappointed").unwrap()
});

// ASCII word characters only, the way browsers read `\w`.
static HASHTAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([A-Za-z0-9_]+)").unwrap());

static GOOD_HASHTAG_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| GOOD_HASHTAGS.iter().copied().collect());

/// Measurable signals extracted from a single comment.
///
/// Lengths are measured in UTF-16 code units, so an astral-plane emoji
/// counts as two characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Character count of the text.
    pub length: usize,
    /// Number of whitespace-delimited tokens.
    pub word_count: usize,
    /// Any positive vocabulary word appears (substring, case-insensitive).
    pub has_positive: bool,
    /// Any negative vocabulary word appears (substring, case-insensitive).
    pub has_negative: bool,
    pub exclamations: usize,
    pub questions: usize,
    /// Code points in the pictographic emoji block.
    pub emojis: usize,
    /// Tokens longer than three characters that equal their uppercase form.
    pub upper_words: usize,
    pub hashtag_count: usize,
    /// Hashtags found on the allow-list.
    pub good_hashtags: usize,
}

impl FeatureRecord {
    /// One-line `key=value` summary, suitable for logs and reports.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FeatureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length={} words={} positive={} negative={} exclamations={} questions={} \
             emojis={} upper_words={} hashtags={} good_hashtags={}",
            self.length,
            self.word_count,
            self.has_positive,
            self.has_negative,
            self.exclamations,
            self.questions,
            self.emojis,
            self.upper_words,
            self.hashtag_count,
            self.good_hashtags,
        )
    }
}

/// Whitespace as browsers define `\s` and `String.prototype.trim`.
///
/// Differs from `char::is_whitespace`: U+FEFF separates tokens, U+0085 does
/// not.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Non-empty tokens between runs of whitespace.
fn tokenize(text: &str) -> Vec<&str> {
    text.split(is_whitespace).filter(|t| !t.is_empty()).collect()
}

/// Length in UTF-16 code units.
fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// A token shouts when it is long enough and already uppercase.
///
/// Tokens without letters (`"!!!!"`, `"2024"`) are their own uppercase form
/// and therefore count too.
fn is_upper_word(token: &str) -> bool {
    text_len(token) > UPPER_WORD_MIN_LEN && token.to_uppercase() == token
}

fn is_good_hashtag(tag: &str) -> bool {
    GOOD_HASHTAG_SET.contains(tag.to_lowercase().as_str())
}

/// Extract the feature record for a comment.
///
/// The caller is expected to trim the text first; whitespace is otherwise
/// counted in `length` like any other character.
pub fn extract_features(text: &str) -> FeatureRecord {
    let tokens = tokenize(text);

    let mut hashtag_count = 0;
    let mut good_hashtags = 0;
    for caps in HASHTAG_PATTERN.captures_iter(text) {
        hashtag_count += 1;
        if caps.get(1).is_some_and(|tag| is_good_hashtag(tag.as_str())) {
            good_hashtags += 1;
        }
    }

    FeatureRecord {
        length: text_len(text),
        word_count: tokens.len(),
        has_positive: POSITIVE_PATTERN.is_match(text),
        has_negative: NEGATIVE_PATTERN.is_match(text),
        exclamations: text.chars().filter(|&c| c == '!').count(),
        questions: text.chars().filter(|&c| c == '?').count(),
        emojis: text.chars().filter(|c| EMOJI_RANGE.contains(c)).count(),
        upper_words: tokens.iter().filter(|t| is_upper_word(t)).count(),
        hashtag_count,
        good_hashtags,
    }
}
