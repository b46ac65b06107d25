//! Serializable output rows.
//!
//! Records serialize as flat column -> value mappings using the source table's
//! column names, with `null` for every absent value.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use evt_table::Event;
use serde::{Serialize, Serializer};

/// Output format for timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One search result, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    /// Listing source, or the ticketing notice for redirected sources.
    #[serde(rename = "Source")]
    pub source: Option<String>,
    /// Canonical display category.
    #[serde(rename = "Category")]
    pub category: Option<String>,
    /// Event title.
    #[serde(rename = "EventName")]
    pub event_name: String,
    /// Description.
    #[serde(rename = "Description")]
    pub description: String,
    /// City.
    #[serde(rename = "City")]
    pub city: String,
    /// Venue name.
    #[serde(rename = "VenueName")]
    pub venue_name: Option<String>,
    /// Street address.
    #[serde(rename = "Address")]
    pub address: Option<String>,
    /// Listing link.
    #[serde(rename = "Link")]
    pub link: Option<String>,
    /// Raw date text.
    #[serde(rename = "DateTime")]
    pub date_time: Option<String>,
    /// Parsed start.
    #[serde(rename = "DateTime_start", serialize_with = "serialize_timestamp")]
    pub date_time_start: Option<NaiveDateTime>,
    /// Parsed end.
    #[serde(rename = "DateTime_end", serialize_with = "serialize_timestamp")]
    pub date_time_end: Option<NaiveDateTime>,
    /// Latitude.
    pub lat: Option<f64>,
    /// Longitude.
    pub lon: Option<f64>,
    /// Remaining source columns.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Option<String>>,
    /// Interest score, present when the interests filter scored rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_score: Option<i64>,
    /// Keyword score, present when the free-text filter ran.
    #[serde(rename = "_query_score", skip_serializing_if = "Option::is_none")]
    pub query_score: Option<usize>,
}

impl EventRecord {
    /// Copies an event into a record. Non-finite coordinates become `None`.
    pub fn from_event(event: &Event) -> Self {
        Self {
            source: event.source.clone(),
            category: Some(event.category.clone()),
            event_name: event.event_name.clone(),
            description: event.description.clone(),
            city: event.city.clone(),
            venue_name: event.venue_name.clone(),
            address: event.address.clone(),
            link: event.link.clone(),
            date_time: event.date_time.clone(),
            date_time_start: event.date_time_start,
            date_time_end: event.date_time_end,
            lat: event.lat.filter(|v| v.is_finite()),
            lon: event.lon.filter(|v| v.is_finite()),
            extra: event.extra.clone(),
            interest_score: None,
            query_score: None,
        }
    }
}

/// City-level aggregate returned by the coverage ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCoverage {
    /// City name, trimmed.
    #[serde(rename = "City")]
    pub city: String,
    /// Number of matching events in the city.
    pub count: usize,
    /// Number of distinct requested interests with at least one event in the city.
    pub coverage_score: usize,
}

/// Serializes optional timestamps as `YYYY-MM-DDTHH:MM:SS` strings or `null`.
fn serialize_timestamp<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ts) => serializer.collect_str(&ts.format(TIMESTAMP_FORMAT)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::{Value, json};

    use super::*;

    fn sample() -> Event {
        let mut event = Event::new("Concerts", "Paris", "Jazz", "Trio")
            .with_source("SerpApi")
            .with_start(
                NaiveDate::from_ymd_opt(2025, 3, 1)
                    .unwrap()
                    .and_hms_opt(20, 30, 0)
                    .unwrap(),
            );
        event.lat = Some(f64::NAN);
        event.lon = Some(2.35);
        event
            .extra
            .insert("Price".to_string(), Some("10 EUR".to_string()));
        event.extra.insert("Organizer".to_string(), None);
        event
    }

    #[test]
    fn serializes_with_source_column_names() {
        let value = serde_json::to_value(EventRecord::from_event(&sample())).unwrap();
        assert_eq!(value["Source"], json!("SerpApi"));
        assert_eq!(value["Category"], json!("Concerts"));
        assert_eq!(value["EventName"], json!("Jazz"));
        assert_eq!(value["City"], json!("Paris"));
        assert_eq!(value["DateTime_start"], json!("2025-03-01T20:30:00"));
        assert_eq!(value["DateTime_end"], Value::Null);
        assert_eq!(value["Link"], Value::Null);
    }

    #[test]
    fn non_finite_coordinates_serialize_as_null() {
        let value = serde_json::to_value(EventRecord::from_event(&sample())).unwrap();
        assert_eq!(value["lat"], Value::Null);
        assert_eq!(value["lon"], json!(2.35));
    }

    #[test]
    fn extra_columns_are_flattened() {
        let value = serde_json::to_value(EventRecord::from_event(&sample())).unwrap();
        assert_eq!(value["Price"], json!("10 EUR"));
        assert_eq!(value["Organizer"], Value::Null);
    }

    #[test]
    fn scores_only_appear_when_set() {
        let mut record = EventRecord::from_event(&sample());
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("interest_score").is_none());
        assert!(value.get("_query_score").is_none());

        record.interest_score = Some(5);
        record.query_score = Some(4);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["interest_score"], json!(5));
        assert_eq!(value["_query_score"], json!(4));
    }

    #[test]
    fn coverage_serializes_city_column() {
        let value = serde_json::to_value(CityCoverage {
            city: "Paris".to_string(),
            count: 3,
            coverage_score: 2,
        })
        .unwrap();
        assert_eq!(value, json!({"City": "Paris", "count": 3, "coverage_score": 2}));
    }
}
