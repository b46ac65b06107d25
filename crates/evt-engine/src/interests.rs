//! Interest-weighted category scoring.
//!
//! The `interests` request parameter is a comma-separated list of `name:weight`
//! pairs, e.g. `concert:2,festival:5`. A row scores the sum of the weights of
//! every interest whose normalized name is a substring of the row's normalized
//! category, so `marche` matches `Marchés de Noël`.

use std::collections::{BTreeMap, BTreeSet};

use crate::normalize::normalize;

/// Parsed interest weights: normalized interest name -> weight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestWeights {
    /// Weights keyed by normalized name.
    weights: BTreeMap<String, i64>,
}

impl InterestWeights {
    /// Parses a `name:weight,name:weight` parameter.
    ///
    /// Pairs without a `:` and pairs whose weight is not an integer are skipped.
    /// A later pair for the same normalized name overwrites an earlier one.
    pub fn parse(param: &str) -> Self {
        let mut weights = BTreeMap::new();
        for part in param.split(',') {
            let Some((name, weight)) = part.split_once(':') else {
                continue;
            };
            match parse_weight(weight) {
                Some(weight) => {
                    weights.insert(normalize(name), weight);
                }
                None => tracing::debug!(pair = part, "skipping interest with malformed weight"),
            }
        }
        Self { weights }
    }

    /// Whether no interest survived parsing.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of distinct interests.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Scores a raw category string.
    ///
    /// Sums the weight of every interest contained in the normalized category.
    pub fn score(&self, category: &str) -> i64 {
        self.score_normalized(&normalize(category))
    }

    /// Scores an already-normalized category string.
    pub fn score_normalized(&self, category: &str) -> i64 {
        self.weights
            .iter()
            .filter(|(name, _)| category.contains(name.as_str()))
            .map(|(_, weight)| weight)
            .sum()
    }
}

/// Parses an interest weight, returning `None` when it is not an integer.
pub fn parse_weight(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Returns the normalized names of every requested interest, ignoring weights.
///
/// Unlike [`InterestWeights::parse`], a pair with a malformed weight still counts
/// as requested; only parts without a `:` are ignored.
pub fn requested_interests(param: &str) -> BTreeSet<String> {
    param
        .split(',')
        .filter_map(|part| part.split_once(':'))
        .map(|(name, _)| normalize(name))
        .collect()
}
