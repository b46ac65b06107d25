//! CSV loading.
//!
//! Reads the merged scraper output into [`Event`]s. Columns are matched by header
//! name, so column order does not matter and unknown columns are carried through
//! in [`Event::extra`].

use std::{io, path::Path};

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::{
    Event, TableError,
    timestamp::{parse_range_start, parse_timestamp, year_start},
};

/// Columns every event table must have.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Category", "City", "EventName", "Description"];

/// Columns holding a fallback start year, in lookup order.
const YEAR_COLUMNS: [&str; 2] = ["Année_start", "Annee_start"];

/// Loads events from a CSV file with a header row.
pub fn load_events(path: &Path) -> Result<Vec<Event>, TableError> {
    let reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| TableError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    read_events(reader, path)
}

/// Reads events from an already-open CSV reader.
///
/// `path` is only used for error reporting and logging.
pub fn read_events<R: io::Read>(mut reader: Reader<R>, path: &Path) -> Result<Vec<Event>, TableError> {
    let headers = reader
        .headers()
        .map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(ToString::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(TableError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    let mut events = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        events.push(event_from_record(&headers, &record));
    }

    let undated = events.iter().filter(|e| e.date_time_start.is_none()).count();
    tracing::info!(
        path = %path.display(),
        rows = events.len(),
        undated,
        "loaded event table"
    );
    Ok(events)
}

/// Builds an event from one CSV row.
fn event_from_record(headers: &StringRecord, record: &StringRecord) -> Event {
    let mut event = Event::default();
    let mut end_text = None;

    for (idx, header) in headers.iter().enumerate() {
        let value = record.get(idx).unwrap_or("");
        match header {
            "Category" => event.category = value.to_string(),
            "City" => event.city = value.to_string(),
            "EventName" => event.event_name = value.to_string(),
            "Description" => event.description = value.to_string(),
            "Source" => event.source = non_empty(value),
            "VenueName" => event.venue_name = non_empty(value),
            "Address" => event.address = non_empty(value),
            "Link" => event.link = non_empty(value),
            "DateTime" => event.date_time = non_empty(value),
            "DateTime_end" => end_text = non_empty(value),
            // Always derived from the other date columns.
            "DateTime_start" => {}
            "lat" => event.lat = parse_coordinate(value),
            "lon" => event.lon = parse_coordinate(value),
            _ => {
                event.extra.insert(header.to_string(), non_empty(value));
            }
        }
    }

    let year_text = YEAR_COLUMNS
        .iter()
        .find_map(|column| event.extra.get(*column).cloned().flatten());

    event.date_time_end = end_text.as_deref().and_then(parse_timestamp);
    event.date_time_start = event
        .date_time
        .as_deref()
        .and_then(parse_range_start)
        .or(event.date_time_end)
        .or_else(|| year_text.as_deref().and_then(year_start));

    if event.date_time_start.is_none() && event.date_time.is_some() {
        tracing::debug!(
            event = %event.event_name,
            date_time = ?event.date_time,
            "could not derive a start date"
        );
    }

    event
}

/// Returns the cell as an owned string, or `None` when blank.
fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses a latitude/longitude cell, coercing junk to `None`.
fn parse_coordinate(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn read(csv: &str) -> Result<Vec<Event>, TableError> {
        let reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(csv.as_bytes());
        read_events(reader, Path::new("test.csv"))
    }

    fn midnight(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn reads_required_and_optional_columns() {
        let events = read(
            "Source,Category,EventName,Description,City,Link,DateTime,lat,lon\n\
             SerpApi,Concerts,Jazz,Live jazz,Paris,https://x.test,2025-03-01,48.85,2.35\n",
        )
        .unwrap();

        assert_eq!(events.len(), 1);
        let e = &events[0];
        assert_eq!(e.source.as_deref(), Some("SerpApi"));
        assert_eq!(e.category, "Concerts");
        assert_eq!(e.city, "Paris");
        assert_eq!(e.link.as_deref(), Some("https://x.test"));
        assert_eq!(e.date_time_start, Some(midnight(2025, 3, 1)));
        assert_eq!(e.lat, Some(48.85));
        assert_eq!(e.lon, Some(2.35));
    }

    #[test]
    fn blank_required_cells_become_empty_strings() {
        let events = read("Category,City,EventName,Description\n,,Name,\n").unwrap();
        assert_eq!(events[0].category, "");
        assert_eq!(events[0].city, "");
        assert_eq!(events[0].description, "");
    }

    #[test]
    fn missing_required_columns_is_an_error() {
        let err = read("Category,City\nConcerts,Paris\n").unwrap_err();
        match err {
            TableError::MissingColumns { columns, .. } => {
                assert_eq!(columns, vec!["EventName", "Description"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn junk_coordinates_are_dropped() {
        let events =
            read("Category,City,EventName,Description,lat,lon\nc,x,n,d,north,NaN\n").unwrap();
        assert_eq!(events[0].lat, None);
        assert_eq!(events[0].lon, None);
    }

    #[test]
    fn start_falls_back_to_end_then_year() {
        let events = read(
            "Category,City,EventName,Description,DateTime,DateTime_end,Annee_start\n\
             c,x,a,d,someday,2025-05-02,\n\
             c,x,b,d,,,2026\n\
             c,x,c,d,,,\n",
        )
        .unwrap();

        assert_eq!(events[0].date_time_start, Some(midnight(2025, 5, 2)));
        assert_eq!(events[0].date_time_end, Some(midnight(2025, 5, 2)));
        assert_eq!(events[1].date_time_start, Some(midnight(2026, 1, 1)));
        assert_eq!(events[2].date_time_start, None);
    }

    #[test]
    fn accented_year_column_wins_regardless_of_position() {
        let events = read(
            "Category,City,EventName,Description,Annee_start,Année_start\n\
             c,x,a,d,2026,2027\n\
             c,x,b,d,2026,\n",
        )
        .unwrap();

        assert_eq!(events[0].date_time_start, Some(midnight(2027, 1, 1)));
        assert_eq!(events[1].date_time_start, Some(midnight(2026, 1, 1)));
    }

    #[test]
    fn unknown_columns_are_kept_in_extra() {
        let events = read("Category,City,EventName,Description,Price\nc,x,n,d,12 EUR\nc,x,n,d,\n")
            .unwrap();
        assert_eq!(
            events[0].extra.get("Price"),
            Some(&Some("12 EUR".to_string()))
        );
        assert_eq!(events[1].extra.get("Price"), Some(&None));
    }

    #[test]
    fn short_rows_are_tolerated() {
        let events = read("Category,City,EventName,Description,Link\nc,x,n\n").unwrap();
        assert_eq!(events[0].description, "");
        assert_eq!(events[0].link, None);
    }
}
