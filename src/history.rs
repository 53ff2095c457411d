//! Prediction history.
//!
//! The caller owns the history; predicting never touches it. Entries are
//! kept in insertion order, newest last.

use std::collections::VecDeque;

use serde::Serialize;

use crate::scoring::{Label, Region, ScoreResult};
use crate::Prediction;

/// A past prediction, reduced to what a history table shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub text: String,
    pub results: Vec<ScoreResult>,
}

impl HistoryEntry {
    /// Label assigned for a region, if that region was scored.
    pub fn label(&self, region: Region) -> Option<Label> {
        self.results
            .iter()
            .find(|r| r.region == region)
            .map(|r| r.label)
    }
}

/// Append-only list of predictions with an optional capacity.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: Option<usize>,
}

impl History {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `capacity` entries, dropping the
    /// oldest first.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    /// Append a prediction.
    pub fn record(&mut self, prediction: &Prediction) {
        if self.capacity == Some(0) {
            return;
        }
        if let Some(capacity) = self.capacity {
            while self.entries.len() >= capacity {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(HistoryEntry {
            text: prediction.text.clone(),
            results: prediction.results.clone(),
        });
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
