//! Ordered rule tables.
//!
//! A scorer is a list of entries evaluated top to bottom:
//! - a [`Rule`] fires whenever its condition holds, so rules stack
//! - a [`BinTable`] measures one feature and applies only its first
//!   matching [`Bin`], so bins are mutually exclusive

use tracing::trace;

use crate::features::FeatureRecord;

use super::Contribution;

/// A threshold condition with a fixed delta.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub delta: f64,
    pub applies: fn(&FeatureRecord) -> bool,
}

/// An inclusive range of a measured feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub name: &'static str,
    pub min: usize,
    pub max: usize,
    pub delta: f64,
}

impl Bin {
    /// Bin covering `min..=max`.
    pub const fn range(name: &'static str, min: usize, max: usize, delta: f64) -> Self {
        Self {
            name,
            min,
            max,
            delta,
        }
    }

    /// Bin covering a single value.
    pub const fn exactly(name: &'static str, value: usize, delta: f64) -> Self {
        Self::range(name, value, value, delta)
    }

    /// Open-ended bin covering `min..`.
    pub const fn at_least(name: &'static str, min: usize, delta: f64) -> Self {
        Self::range(name, min, usize::MAX, delta)
    }

    pub fn contains(&self, value: usize) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Mutually exclusive bins over one measured feature.
#[derive(Clone, Copy)]
pub struct BinTable {
    pub measure: fn(&FeatureRecord) -> usize,
    pub bins: &'static [Bin],
}

impl BinTable {
    /// First bin containing the measured value, if any.
    pub fn lookup(&self, features: &FeatureRecord) -> Option<&'static Bin> {
        let value = (self.measure)(features);
        self.bins.iter().find(|bin| bin.contains(value))
    }
}

/// One step of a rule table.
#[derive(Clone, Copy)]
pub enum Entry {
    Rule(Rule),
    Bins(BinTable),
}

impl Entry {
    /// The contribution this entry makes, if it fires.
    pub fn evaluate(&self, features: &FeatureRecord) -> Option<Contribution> {
        match self {
            Entry::Rule(rule) => (rule.applies)(features).then_some(Contribution {
                rule: rule.name,
                delta: rule.delta,
            }),
            Entry::Bins(table) => table.lookup(features).map(|bin| Contribution {
                rule: bin.name,
                delta: bin.delta,
            }),
        }
    }
}

/// An ordered list of entries making up one region's scoring rules.
#[derive(Clone, Copy)]
pub struct RuleTable {
    entries: &'static [Entry],
}

impl RuleTable {
    pub const fn new(entries: &'static [Entry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    /// Evaluate every entry in order and collect what fired.
    pub fn evaluate(&self, features: &FeatureRecord) -> Vec<Contribution> {
        self.entries
            .iter()
            .filter_map(|entry| entry.evaluate(features))
            .inspect(|c| trace!(rule = c.rule, delta = c.delta, "rule fired"))
            .collect()
    }
}
