// src/export/table.rs

use crate::models::event::Event;
use crate::utils::table::{Column, Table};

/// Placeholder shown for empty fields.
const EMPTY_CELL: &str = "--";

fn cell(value: &str) -> String {
    if value.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        value.to_string()
    }
}

/// Human-readable listing of extracted events. When `links` is given, the
/// calendar URL of each event is listed below the table.
pub fn render_events(events: &[Event], links: Option<&[String]>) -> String {
    let headers = [
        "#", "Name", "Date", "End", "Start", "Until", "Location", "Notes", "Review",
    ];
    let mut table = Table::new(headers.iter().map(|h| Column::new(h)).collect());

    for (i, ev) in events.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            cell(&ev.name),
            cell(&ev.date),
            cell(&ev.end_date),
            cell(&ev.start_time),
            cell(&ev.end_time),
            cell(&ev.location),
            cell(&ev.notes),
            if ev.needs_review() { "⚠️" } else { "" }.to_string(),
        ]);
    }

    let mut out = table.render();

    if let Some(urls) = links {
        out.push('\n');
        for (i, url) in urls.iter().enumerate() {
            out.push_str(&format!("{:>2}: {}\n", i + 1, url));
        }
    }

    out
}
