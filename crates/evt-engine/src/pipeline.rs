//! The shared filter pipeline.
//!
//! Both search and city coverage narrow the table through the same stages, in a
//! fixed order:
//!
//! 1. **Interests**: score categories against weighted interests, drop rows
//!    scoring 0 or less
//! 2. **City**: keep rows whose normalized city contains the normalized filter
//! 3. **Keywords**: score name + description against the query, drop non-matches
//! 4. **Dates**: keep rows whose start falls within the requested range
//!
//! Rows are borrowed from the shared table; scores live alongside the borrow, so
//! concurrent requests never see each other's scoring.

use chrono::NaiveDate;
use evt_table::{Event, EventTable};

use crate::{
    dates::DateRange, interests::InterestWeights, keywords::KeywordQuery, normalize::normalize,
    params::QueryParams,
};

/// A table row with the scores attached by the request that selected it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEvent<'a> {
    /// The underlying row.
    pub event: &'a Event,
    /// Interest score, set when the interests stage scored rows.
    pub interest_score: Option<i64>,
    /// Keyword score, set when the free-text stage ran.
    pub query_score: Option<usize>,
}

impl<'a> ScoredEvent<'a> {
    /// Wraps a row with no scores.
    pub fn new(event: &'a Event) -> Self {
        Self {
            event,
            interest_score: None,
            query_score: None,
        }
    }
}

/// Rows surviving the filter stages.
#[derive(Debug, Clone, Default)]
pub struct FilteredRows<'a> {
    /// Surviving rows, in table order.
    pub rows: Vec<ScoredEvent<'a>>,
    /// Whether the interests stage attached scores.
    pub interest_scored: bool,
    /// Whether the keyword stage attached scores.
    pub query_scored: bool,
}

/// Runs every filter stage over the table.
pub fn apply_filters<'a>(
    table: &'a EventTable,
    params: &QueryParams,
    today: NaiveDate,
) -> FilteredRows<'a> {
    let mut filtered = FilteredRows {
        rows: table.iter().map(ScoredEvent::new).collect(),
        ..FilteredRows::default()
    };

    if let Some(interests) = params.interests() {
        filter_by_interests(&mut filtered, &InterestWeights::parse(interests));
        tracing::debug!(rows = filtered.rows.len(), "after interests filter");
    }

    let city = params.city().map(normalize).unwrap_or_default();
    if !city.is_empty() {
        filtered
            .rows
            .retain(|row| normalize(&row.event.city).contains(&city));
        tracing::debug!(rows = filtered.rows.len(), city = %city, "after city filter");
    }

    if let Some(query) = params.query().and_then(KeywordQuery::parse) {
        filter_by_keywords(&mut filtered, &query);
        tracing::debug!(rows = filtered.rows.len(), "after keyword filter");
    }

    let range = DateRange::resolve(params.start_date(), params.end_date(), today);
    filtered
        .rows
        .retain(|row| range.contains(row.event.date_time_start));
    tracing::debug!(rows = filtered.rows.len(), ?range, "after date filter");

    filtered
}

/// Scores rows by interest weight and drops those scoring 0 or less.
///
/// Leaves rows untouched, with no scores attached, when there are no rows or no
/// weights parsed.
pub fn filter_by_interests(filtered: &mut FilteredRows<'_>, weights: &InterestWeights) {
    if filtered.rows.is_empty() || weights.is_empty() {
        return;
    }

    filtered.rows.retain_mut(|row| {
        let score = weights.score(&row.event.category);
        row.interest_score = Some(score);
        score > 0
    });
    filtered.interest_scored = true;
}

/// Scores rows against the keyword query and drops non-matches.
pub fn filter_by_keywords(filtered: &mut FilteredRows<'_>, query: &KeywordQuery) {
    filtered.rows.retain_mut(|row| {
        let score = query.score(row.event);
        row.query_score = Some(score);
        score > 0
    });
    filtered.query_scored = true;
}
