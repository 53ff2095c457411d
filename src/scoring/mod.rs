//! Regional engagement scoring.
//!
//! Each region maps a [`FeatureRecord`] to a [`ScoreResult`] through an
//! ordered [`RuleTable`]. Scorers share no state, so any number of regions
//! can score the same record independently.
//!
//! # Example
//!
//! ```
//! use engagement::features::extract_features;
//! use engagement::scoring::{score_europe, score_north_america, Label};
//!
//! let features = extract_features("Is this the best pasta in town?");
//! let na = score_north_america(&features);
//! let eu = score_europe(&features);
//!
//! assert_eq!(na.label, Label::Medium);
//! assert_eq!(eu.label, Label::Low);
//! ```

pub mod regions;
mod scorer;
mod table;
mod types;


pub use regions::{Europe, NorthAmerica};
pub use scorer::Scorer;
pub use table::{Bin, BinTable, Entry, Rule, RuleTable};
pub use types::{Contribution, Label, Region, ScoreResult, HIGH_THRESHOLD, MEDIUM_THRESHOLD};

use crate::features::FeatureRecord;

static NORTH_AMERICA: NorthAmerica = NorthAmerica;
static EUROPE: Europe = Europe;

impl Region {
    /// The scorer implementing this region's rules.
    pub fn scorer(&self) -> &'static dyn Scorer {
        match self {
            Region::NorthAmerica => &NORTH_AMERICA,
            Region::Europe => &EUROPE,
        }
    }
}

/// Score a feature record with the North American rules.
pub fn score_north_america(features: &FeatureRecord) -> ScoreResult {
    NORTH_AMERICA.score(features)
}

/// Score a feature record with the European rules.
pub fn score_europe(features: &FeatureRecord) -> ScoreResult {
    EUROPE.score(features)
}
