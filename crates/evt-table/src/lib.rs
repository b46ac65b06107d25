//! Event table model and CSV loading for evt.
//!
//! This crate owns the data side of evt:
//! - The [`Event`] row type
//! - [`EventTable`], the shared read-only table every query runs against
//! - CSV loading of the merged scraper output, including start-date derivation
//!   from free-text date columns
//!
//! # Example
//!
//! ```no_run
//! use evt_table::EventTable;
//!
//! let table = EventTable::load("data/csv_fusionne.csv".as_ref()).unwrap();
//! println!("{} events", table.len());
//! ```

#![warn(missing_docs)]

mod error;
mod event;
mod load;
mod table;
mod timestamp;

pub use error::TableError;
pub use event::Event;
pub use load::{REQUIRED_COLUMNS, load_events, read_events};
pub use table::EventTable;
pub use timestamp::{parse_range_start, parse_timestamp, year_start};
