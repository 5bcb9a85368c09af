//! Class probability maps attached to classifier replies

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-label class probabilities as the backend reports them.
///
/// Keys are class labels, values are probabilities. Lookups never fail:
/// labels the classifier did not emit read as 0.0. Values are stored as
/// received and are not required to sum to 1.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ProbabilityMap(BTreeMap<String, f64>);

impl ProbabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, probability: f64) {
        self.0.insert(label.into(), probability);
    }

    /// Probability for a label, 0.0 when the label is absent.
    pub fn get(&self, label: &str) -> f64 {
        self.0.get(label).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    /// The label with the highest probability. Ties resolve to the
    /// alphabetically first label.
    pub fn top(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (label, &p) in &self.0 {
            match best {
                Some((_, best_p)) if p <= best_p => {}
                _ => best = Some((label.as_str(), p)),
            }
        }
        best
    }

    /// Sum of all stored probabilities.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, &p)| (label.as_str(), p))
    }
}

impl FromIterator<(String, f64)> for ProbabilityMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, f64>> for ProbabilityMap {
    fn from(map: BTreeMap<String, f64>) -> Self {
        Self(map)
    }
}
