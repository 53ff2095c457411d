//! Core types for regional engagement scoring.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::Error;

/// Scores at or above this are labeled `High`.
pub const HIGH_THRESHOLD: f64 = 2.0;

/// Scores at or above this (and below `HIGH_THRESHOLD`) are labeled `Medium`.
pub const MEDIUM_THRESHOLD: f64 = 0.5;

/// Region whose rule set is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    Europe,
}

impl Region {
    /// Every supported region, in report order.
    pub const ALL: [Region; 2] = [Region::NorthAmerica, Region::Europe];

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "north_america",
            Region::Europe => "europe",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "na" | "north_america" | "northamerica" => Ok(Region::NorthAmerica),
            "eu" | "europe" => Ok(Region::Europe),
            _ => Err(Error::UnknownRegion(s.to_string())),
        }
    }
}

/// Predicted engagement level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Label {
    Low,
    Medium,
    High,
}

impl Label {
    /// Map a score onto a label. Both thresholds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            Label::High
        } else if score >= MEDIUM_THRESHOLD {
            Label::Medium
        } else {
            Label::Low
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Low => "Low",
            Label::Medium => "Medium",
            Label::High => "High",
        }
    }

    /// Fill fraction for a progress bar showing this label.
    pub fn progress(&self) -> f64 {
        match self {
            Label::Low => 0.3,
            Label::Medium => 0.6,
            Label::High => 1.0,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rule that fired and what it added to the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    /// Name of the rule or bin.
    pub rule: &'static str,
    pub delta: f64,
}

impl fmt::Display for Contribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+.1}", self.rule.replace('_', " "), self.delta)
    }
}

/// Outcome of scoring one feature record under one region's rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub region: Region,
    pub score: f64,
    pub label: Label,
    /// Fired rules in evaluation order.
    pub contributions: Vec<Contribution>,
}

impl ScoreResult {
    /// Sum contributions in order, starting from zero, and label the total.
    pub fn from_contributions(region: Region, contributions: Vec<Contribution>) -> Self {
        let score = contributions.iter().fold(0.0, |acc, c| acc + c.delta);
        Self {
            region,
            score,
            label: Label::from_score(score),
            contributions,
        }
    }

    /// Comma-separated list of fired rules with signed deltas.
    pub fn explanation(&self) -> String {
        if self.contributions.is_empty() {
            return "no rule fired".to_string();
        }
        self.contributions
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Progress bar fill for this result's label.
    pub fn progress(&self) -> f64 {
        self.label.progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds_inclusive() {
        assert_eq!(Label::from_score(2.0), Label::High);
        assert_eq!(Label::from_score(0.5), Label::Medium);
        assert_eq!(Label::from_score(0.49), Label::Low);
        assert_eq!(Label::from_score(1.99), Label::Medium);
        assert_eq!(Label::from_score(-3.0), Label::Low);
        assert_eq!(Label::from_score(7.5), Label::High);
    }

    #[test]
    fn test_label_ordering() {
        assert!(Label::Low < Label::Medium);
        assert!(Label::Medium < Label::High);
    }

    #[test]
    fn test_label_progress() {
        assert!(Label::Low.progress() < Label::Medium.progress());
        assert_eq!(Label::High.progress(), 1.0);
    }

    #[test]
    fn test_region_from_str() {
        assert_eq!("na".parse::<Region>().unwrap(), Region::NorthAmerica);
        assert_eq!("North-America".parse::<Region>().unwrap(), Region::NorthAmerica);
        assert_eq!("EU".parse::<Region>().unwrap(), Region::Europe);
        assert_eq!(" europe ".parse::<Region>().unwrap(), Region::Europe);
    }

    #[test]
    fn test_region_from_str_unknown() {
        let err = "asia".parse::<Region>().unwrap_err();
        assert!(matches!(err, Error::UnknownRegion(ref s) if s == "asia"));
    }

    #[test]
    fn test_region_as_str_round_trips() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn test_from_contributions_sums_in_order() {
        let result = ScoreResult::from_contributions(
            Region::Europe,
            vec![
                Contribution { rule: "a", delta: 1.0 },
                Contribution { rule: "b", delta: 0.5 },
                Contribution { rule: "c", delta: 0.5 },
            ],
        );
        assert_eq!(result.score, 2.0);
        assert_eq!(result.label, Label::High);
    }

    #[test]
    fn test_explanation() {
        let result = ScoreResult::from_contributions(
            Region::NorthAmerica,
            vec![
                Contribution { rule: "positive_words", delta: 1.0 },
                Contribution { rule: "too_long", delta: -0.5 },
            ],
        );
        assert_eq!(result.explanation(), "positive words +1.0, too long -0.5");
    }

    #[test]
    fn test_explanation_empty() {
        let result = ScoreResult::from_contributions(Region::Europe, vec![]);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, Label::Low);
        assert_eq!(result.explanation(), "no rule fired");
    }
}
