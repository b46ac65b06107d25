//! City coverage ranking.
//!
//! Groups filtered rows by city and ranks cities by how many of the requested
//! interests they cover, then by how many events they have. A city with one
//! concert and one market beats a city with twenty concerts when both were asked
//! for.

use std::collections::{BTreeMap, BTreeSet};

use crate::{normalize::normalize, pipeline::ScoredEvent, record::CityCoverage};

/// Running totals for one city.
#[derive(Default)]
struct CityAccumulator<'r> {
    /// Number of rows seen.
    count: usize,
    /// Requested interests matched by at least one row.
    covered: BTreeSet<&'r str>,
}

/// Aggregates rows into per-city coverage, best city first.
///
/// Rows with a blank city are skipped; city names are trimmed before grouping.
/// An interest covers a city when it is a substring of the normalized category
/// of any of the city's rows. Ties on `(coverage_score, count)` keep
/// alphabetical city order.
pub fn aggregate_coverage(
    rows: &[ScoredEvent<'_>],
    requested: &BTreeSet<String>,
) -> Vec<CityCoverage> {
    let mut cities: BTreeMap<&str, CityAccumulator<'_>> = BTreeMap::new();

    for row in rows {
        let city = row.event.city.trim();
        if city.is_empty() {
            continue;
        }

        let acc = cities.entry(city).or_default();
        acc.count += 1;
        if acc.covered.len() == requested.len() {
            continue;
        }

        let category = normalize(&row.event.category);
        for interest in requested {
            if category.contains(interest.as_str()) {
                acc.covered.insert(interest.as_str());
            }
        }
    }

    let mut coverage: Vec<CityCoverage> = cities
        .into_iter()
        .map(|(city, acc)| CityCoverage {
            city: city.to_string(),
            count: acc.count,
            coverage_score: acc.covered.len(),
        })
        .collect();

    coverage.sort_by(|a, b| {
        b.coverage_score
            .cmp(&a.coverage_score)
            .then(b.count.cmp(&a.count))
    });
    coverage
}
