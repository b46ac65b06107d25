//! The query engine: search, categories and city coverage over one table.

use std::{cmp::Ordering, collections::BTreeSet};

use chrono::{Local, NaiveDate, NaiveDateTime};
use evt_table::EventTable;

use crate::{
    coverage::aggregate_coverage,
    interests::requested_interests,
    params::{QueryParams, SortOrder},
    pipeline::{ScoredEvent, apply_filters},
    record::{CityCoverage, EventRecord},
    translate::CategoryTranslator,
};

/// Default cap on search results.
pub const DEFAULT_LIMIT: usize = 500;

/// Source text shown instead of Ticketmaster listings' own source.
pub const TICKETMASTER_NOTICE: &str = "Billetterie disponible sur Ticketmaster";

/// Source marker (lowercase) for listings redirected to the ticketing site.
const TICKETMASTER_MARKER: &str = "ticketmaster";

/// Answers search and aggregate queries over a fixed event table.
///
/// The table is handed over at construction and never mutated; reloading data
/// means building a new engine. All operations are total: malformed parameters
/// are ignored and an empty table yields empty results.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    /// The shared event table.
    table: EventTable,
    /// Category translator used for display.
    translator: CategoryTranslator,
    /// Maximum number of search results.
    limit: usize,
    /// Source text substituted for Ticketmaster listings.
    ticketmaster_notice: String,
    /// The day before which events count as past.
    today: NaiveDate,
}

impl QueryEngine {
    /// Creates an engine over `table`.
    ///
    /// Uses the default result limit, the default Ticketmaster notice and the
    /// current local date.
    pub fn new(table: EventTable, translator: CategoryTranslator) -> Self {
        Self {
            table,
            translator,
            limit: DEFAULT_LIMIT,
            ticketmaster_notice: TICKETMASTER_NOTICE.to_string(),
            today: Local::now().date_naive(),
        }
    }

    /// Sets the maximum number of search results.
    ///
    /// Values above [`DEFAULT_LIMIT`] are clamped to it.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(DEFAULT_LIMIT);
        self
    }

    /// Sets the source text substituted for Ticketmaster listings.
    pub fn with_ticketmaster_notice(mut self, notice: impl Into<String>) -> Self {
        self.ticketmaster_notice = notice.into();
        self
    }

    /// Sets the date used by the default past-event exclusion.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The result limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Searches the table and returns ranked records.
    ///
    /// Rows are filtered (interests, city, keywords, dates), ranked by interest
    /// score then keyword score (or by start date when requested), capped at the
    /// limit, then converted for display: categories are translated and
    /// Ticketmaster listings lose their link.
    pub fn search(&self, params: &QueryParams) -> Vec<EventRecord> {
        if self.table.is_empty() {
            return Vec::new();
        }

        let filtered = apply_filters(&self.table, params, self.today);
        let mut rows = filtered.rows;

        if filtered.interest_scored || filtered.query_scored {
            rows.sort_by(compare_relevance);
        }
        if params.sort == SortOrder::Date {
            rows.sort_by(|a, b| {
                compare_start(a.event.date_time_start, b.event.date_time_start)
            });
        }
        rows.truncate(self.limit);

        tracing::debug!(results = rows.len(), sort = %params.sort, "search complete");
        rows.iter().map(|row| self.to_record(row)).collect()
    }

    /// Returns every canonical display category present in the table, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.table
            .iter()
            .filter_map(|event| self.translator.translate(Some(&event.category)))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Ranks cities by coverage of the requested interests, then by event count.
    ///
    /// Uses the same filters as [`search`](Self::search).
    pub fn city_coverage(&self, params: &QueryParams) -> Vec<CityCoverage> {
        if self.table.is_empty() {
            return Vec::new();
        }

        let filtered = apply_filters(&self.table, params, self.today);
        let requested = params
            .interests()
            .map(requested_interests)
            .unwrap_or_default();
        aggregate_coverage(&filtered.rows, &requested)
    }

    /// Converts a ranked row to its display record.
    fn to_record(&self, row: &ScoredEvent<'_>) -> EventRecord {
        let mut record = EventRecord::from_event(row.event);
        record.interest_score = row.interest_score;
        record.query_score = row.query_score;

        let is_ticketmaster = record
            .source
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(TICKETMASTER_MARKER));
        if is_ticketmaster {
            record.link = None;
            record.source = Some(self.ticketmaster_notice.clone());
        }

        record.category = self.translator.translate(Some(&row.event.category));
        record
    }
}

/// Orders rows by interest score, then keyword score, both descending.
fn compare_relevance(a: &ScoredEvent<'_>, b: &ScoredEvent<'_>) -> Ordering {
    b.interest_score
        .cmp(&a.interest_score)
        .then(b.query_score.cmp(&a.query_score))
}

/// Orders start timestamps ascending with missing timestamps last.
fn compare_start(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
