//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
pub use evt_highlight::{category, dim, header, subheader, success, warning};
use evt_engine::{CityCoverage, EventRecord};
use serde::Serialize;

use crate::cli::args::OutputArgs;

/// Longest event name shown in the results table before truncation.
const MAX_NAME_CHARS: usize = 60;

/// Format for start timestamps in text output.
const WHEN_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Outputs search results as JSON records or a table.
pub fn output_events(records: &[EventRecord], output: &OutputArgs) -> ExitCode {
    if output.json {
        return print_json(records);
    }

    if records.is_empty() {
        println!("{}", dim("No events found."));
        return ExitCode::SUCCESS;
    }

    println!("{}", events_table(records));
    println!("{}", dim(&format!("─── {} events ───", records.len())));
    ExitCode::SUCCESS
}

/// Builds the text table for search results.
///
/// Score columns appear only when some record carries that score.
fn events_table(records: &[EventRecord]) -> Table {
    let show_interest = records.iter().any(|r| r.interest_score.is_some());
    let show_query = records.iter().any(|r| r.query_score.is_some());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut headers = vec!["When", "Event", "Category", "City", "Venue", "Source"];
    if show_interest {
        headers.push("Interest");
    }
    if show_query {
        headers.push("Match");
    }
    table.set_header(headers);

    for record in records {
        let mut row = vec![
            Cell::new(format_when(record)),
            Cell::new(truncate(&record.event_name, MAX_NAME_CHARS)),
            Cell::new(record.category.as_deref().unwrap_or("")),
            Cell::new(&record.city),
            Cell::new(record.venue_name.as_deref().unwrap_or("")),
            Cell::new(record.source.as_deref().unwrap_or("")),
        ];
        if show_interest {
            row.push(Cell::new(optional_number(record.interest_score)));
        }
        if show_query {
            row.push(Cell::new(optional_number(record.query_score)));
        }
        table.add_row(row);
    }

    table
}

/// Start time for display, falling back to the raw date text.
fn format_when(record: &EventRecord) -> String {
    match record.date_time_start {
        Some(start) => start.format(WHEN_FORMAT).to_string(),
        None => record.date_time.clone().unwrap_or_default(),
    }
}

/// Renders an optional score, blank when absent.
fn optional_number<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Shortens `text` to at most `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}

/// Outputs the city coverage ranking.
pub fn output_cities(rows: &[CityCoverage], output: &OutputArgs) -> ExitCode {
    if output.json {
        return print_json(rows);
    }

    if rows.is_empty() {
        println!("{}", dim("No cities found."));
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["City", "Events", "Coverage"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.city),
            Cell::new(row.count),
            Cell::new(row.coverage_score),
        ]);
    }
    println!("{table}");
    ExitCode::SUCCESS
}

/// Outputs the sorted category list.
pub fn output_categories(categories: &[String], output: &OutputArgs) -> ExitCode {
    if output.json {
        return print_json(categories);
    }

    if categories.is_empty() {
        println!("{}", dim("No categories found."));
        return ExitCode::SUCCESS;
    }

    for name in categories {
        println!("{}", category(name));
    }
    ExitCode::SUCCESS
}
