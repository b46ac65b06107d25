//! The event row type.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

/// A single scraped event.
///
/// `category`, `city`, `event_name` and `description` are always present; the
/// loader substitutes an empty string for missing cells. Every other column is
/// optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    /// Where the listing was scraped from (e.g. `SerpApi`, `Ticketmaster US`).
    pub source: Option<String>,
    /// Raw category label, possibly multilingual or delimited (`concerts; festivals`).
    pub category: String,
    /// Event title.
    pub event_name: String,
    /// Free-text description.
    pub description: String,
    /// City the event takes place in.
    pub city: String,
    /// Venue name.
    pub venue_name: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Link to the listing or ticketing page.
    pub link: Option<String>,
    /// Raw date text as scraped.
    pub date_time: Option<String>,
    /// Parsed start timestamp. `None` when no date could be derived.
    pub date_time_start: Option<NaiveDateTime>,
    /// Parsed end timestamp.
    pub date_time_end: Option<NaiveDateTime>,
    /// Latitude.
    pub lat: Option<f64>,
    /// Longitude.
    pub lon: Option<f64>,
    /// Any other source columns, keyed by header name. Empty cells are `None`.
    pub extra: BTreeMap<String, Option<String>>,
}

impl Event {
    /// Creates an event with the four mandatory text columns set.
    pub fn new(
        category: impl Into<String>,
        city: impl Into<String>,
        event_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            city: city.into(),
            event_name: event_name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Sets the source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Sets the start timestamp.
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.date_time_start = Some(start);
        self
    }
}
