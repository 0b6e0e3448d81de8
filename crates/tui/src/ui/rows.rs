//! Table row construction: cell text, timestamp formatting, empty-state
//! messages, and search term highlighting.
//!
//! All functions here are pure so they can be tested without a terminal.

use gear_client::{InventoryItem, OperationLog};
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Row},
};
use regex::{Regex, RegexBuilder};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a server timestamp for display.
///
/// Accepts RFC 3339 or `YYYY-MM-DD HH:MM:SS`. A missing timestamp renders
/// as "N/A"; an unparseable one is shown verbatim rather than dropped.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "N/A".to_string();
    };
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format(TIMESTAMP_FORMAT).to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        return dt.format(TIMESTAMP_FORMAT).to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format(TIMESTAMP_FORMAT).to_string();
    }
    raw.to_string()
}

/// Message shown in place of rows when a page comes back empty.
pub fn empty_message(search: &str) -> String {
    if search.is_empty() {
        "No records found".to_string()
    } else {
        format!("No records found matching '{search}'")
    }
}

/// Compile a case-insensitive literal matcher for the search term.
///
/// The term is regex-escaped first, so `a.b*` only matches the literal
/// characters `a.b*`. Returns None for a blank term.
pub fn search_matcher(term: &str) -> Option<Regex> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Split `text` into spans, styling every non-overlapping match of `re`.
///
/// The matched text keeps its original casing; only the style changes.
pub fn highlight_line(text: &str, re: Option<&Regex>, style: Style) -> Line<'static> {
    let Some(re) = re else {
        return Line::from(text.to_string());
    };
    let mut spans = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            spans.push(Span::raw(text[last..m.start()].to_string()));
        }
        spans.push(Span::styled(m.as_str().to_string(), style));
        last = m.end();
    }
    if last < text.len() {
        spans.push(Span::raw(text[last..].to_string()));
    }
    if spans.is_empty() {
        spans.push(Span::raw(String::new()));
    }
    Line::from(spans)
}

pub const INVENTORY_HEADERS: [&str; 6] =
    ["ID", "Item", "Quantity", "Location", "Stored", "Updated"];

pub fn inventory_rows(items: &[InventoryItem]) -> Vec<Row<'static>> {
    items
        .iter()
        .map(|item| {
            Row::new(vec![
                Cell::from(item.id.to_string()),
                Cell::from(item.item_name.clone().unwrap_or_else(|| "N/A".to_string())),
                Cell::from(item.quantity.to_string()),
                Cell::from(item.location.clone()),
                Cell::from(format_timestamp(item.stored_time.as_deref())),
                Cell::from(format_timestamp(item.last_updated.as_deref())),
            ])
        })
        .collect()
}

pub const LOG_HEADERS: [&str; 5] = ["ID", "Operation", "Item", "Note", "Time"];

/// Build operation log rows, highlighting the applied search term in the
/// item name and note columns.
pub fn log_rows(logs: &[OperationLog], search: &str, style: Style) -> Vec<Row<'static>> {
    let matcher = search_matcher(search);
    logs.iter()
        .map(|log| {
            Row::new(vec![
                Cell::from(log.id.to_string()),
                Cell::from(log.operation_type.clone()),
                Cell::from(highlight_line(&log.item_name, matcher.as_ref(), style)),
                Cell::from(highlight_line(&log.operation_note, matcher.as_ref(), style)),
                Cell::from(format_timestamp(log.operation_time.as_deref())),
            ])
        })
        .collect()
}
