//! Scorer trait.

use crate::features::FeatureRecord;

use super::{Region, RuleTable, ScoreResult};

/// A regional scoring rule set.
///
/// Scorers are stateless: the same scorer may score any number of records,
/// from any thread, without one call affecting another.
pub trait Scorer: Send + Sync {
    /// The region this scorer implements.
    fn region(&self) -> Region;

    /// The ordered rules applied by this scorer.
    fn table(&self) -> &RuleTable;

    /// Score a feature record.
    fn score(&self, features: &FeatureRecord) -> ScoreResult {
        ScoreResult::from_contributions(self.region(), self.table().evaluate(features))
    }
}
