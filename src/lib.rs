//! Engagement - rule-based engagement predictor for short comments
//!
//! Predicts how much engagement a comment is likely to draw by extracting a
//! few lexical and punctuation features and scoring them with hand-written
//! regional rules.
//!
//! # Architecture
//!
//! A prediction runs in two steps:
//! 1. Feature extraction (vocabulary, punctuation, emoji, hashtags, length)
//! 2. One scorer per region (North America, Europe) mapping the features to
//!    a score and a `High` / `Medium` / `Low` label
//!
//! # Example
//!
//! ```
//! use engagement::{Predictor, Region};
//! use engagement::scoring::Label;
//!
//! let predictor = Predictor::new();
//! let prediction = predictor.predict("  Is this worth the trip? Anyone been there recently ").unwrap();
//!
//! assert_eq!(prediction.features.word_count, 9);
//! assert_eq!(prediction.result(Region::NorthAmerica).unwrap().label, Label::Medium);
//! assert_eq!(prediction.result(Region::Europe).unwrap().label, Label::Low);
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

pub use error::Error;
pub use features::{extract_features, is_whitespace, FeatureRecord};
pub use history::{History, HistoryEntry};
pub use scoring::{Label, Region, ScoreResult};

// Feature extraction from comment text
pub mod features;

// Regional rule sets
pub mod scoring;

// Caller-owned prediction history
pub mod history;

mod error {
    /// Errors raised at the edges of the predictor.
    #[derive(Debug, thiserror::Error)]
    pub enum Error {
        /// The comment was empty after trimming.
        #[error("input is empty")]
        EmptyInput,

        /// A region name that matches no rule set.
        #[error("unknown region: {0}")]
        UnknownRegion(String),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }
}

/// Outcome of predicting one comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// The trimmed comment.
    pub text: String,
    pub features: FeatureRecord,
    /// One result per configured region, in configuration order.
    pub results: Vec<ScoreResult>,
}

impl Prediction {
    /// Result for a region, if that region was scored.
    pub fn result(&self, region: Region) -> Option<&ScoreResult> {
        self.results.iter().find(|r| r.region == region)
    }
}

/// The engagement predictor.
#[derive(Debug, Clone)]
pub struct Predictor {
    regions: Vec<Region>,
}

impl Predictor {
    /// Create a predictor scoring every region.
    pub fn new() -> Self {
        Self {
            regions: Region::ALL.to_vec(),
        }
    }

    /// Create a predictor scoring only the given regions, in order.
    ///
    /// Duplicates are dropped.
    pub fn with_regions(regions: &[Region]) -> Self {
        let mut unique = Vec::with_capacity(regions.len());
        for &region in regions {
            if !unique.contains(&region) {
                unique.push(region);
            }
        }
        Self { regions: unique }
    }

    /// Regions this predictor scores.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Predict engagement for a comment.
    ///
    /// The text is trimmed first; an empty comment is rejected.
    pub fn predict(&self, text: &str) -> Result<Prediction, Error> {
        let text = text.trim_matches(is_whitespace);
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let features = extract_features(text);
        let results: Vec<ScoreResult> = self
            .regions
            .iter()
            .map(|region| region.scorer().score(&features))
            .collect();

        for result in &results {
            debug!(
                region = result.region.as_str(),
                score = result.score,
                label = result.label.as_str(),
                "scored comment"
            );
        }

        Ok(Prediction {
            text: text.to_string(),
            features,
            results,
        })
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// INPUT LOADERS
// =============================================================================

/// Prepare raw text as a comment.
pub fn from_text(text: &str) -> String {
    text.trim_matches(is_whitespace).to_string()
}

/// Load a comment from a file.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let bytes = fs::read(path.as_ref())?;
    Ok(from_text(&String::from_utf8_lossy(&bytes)))
}
