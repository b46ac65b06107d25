//! Filtering, scoring and ranking over the evt event table.
//!
//! The engine answers three kinds of request against an in-memory [`EventTable`]:
//!
//! - **Search**: filter by weighted interests, city, free-text keywords and start
//!   date, rank by relevance (or date), and return display-ready records
//! - **Categories**: list the canonical display categories present in the table
//! - **City coverage**: rank cities by how many requested interests they cover
//!
//! All text comparisons go through [`normalize`], which strips accents and case so
//! `"Marchés de Noël"` matches `marche`.
//!
//! # Example
//!
//! ```
//! use evt_engine::{CategoryTranslator, QueryEngine, QueryParams};
//! use evt_table::{Event, EventTable};
//!
//! let table = EventTable::new(vec![Event::new("Konzerte", "Berlin", "Jazz", "")]);
//! let engine = QueryEngine::new(table, CategoryTranslator::new());
//!
//! assert_eq!(engine.categories(), ["Concerts"]);
//! let params = QueryParams::default().with_interests("konzert:2");
//! // Undated events never pass the default future-only date filter.
//! assert!(engine.search(&params).is_empty());
//! ```

#![warn(missing_docs)]

mod coverage;
mod dates;
mod engine;
mod interests;
mod keywords;
mod normalize;
mod params;
mod pipeline;
mod record;
mod translate;

pub use coverage::aggregate_coverage;
pub use dates::DateRange;
pub use engine::{DEFAULT_LIMIT, QueryEngine, TICKETMASTER_NOTICE};
pub use evt_table::{Event, EventTable};
pub use interests::{InterestWeights, parse_weight, requested_interests};
pub use keywords::KeywordQuery;
pub use normalize::normalize;
pub use params::{QueryParams, SortOrder};
pub use pipeline::{FilteredRows, ScoredEvent, apply_filters, filter_by_interests, filter_by_keywords};
pub use record::{CityCoverage, EventRecord};
pub use translate::CategoryTranslator;
