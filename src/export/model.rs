// src/export/model.rs

use crate::models::event::Event;
use serde::Serialize;

/// Flat row used by CSV / XLSX exports (JSON keeps the plain event shape).
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub index: usize,
    pub name: String,
    pub date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub notes: String,
    pub needs_review: bool,
}

impl EventExport {
    pub fn from_events(events: &[Event]) -> Vec<Self> {
        events
            .iter()
            .enumerate()
            .map(|(i, e)| EventExport {
                index: i + 1,
                name: e.name.clone(),
                date: e.date.clone(),
                end_date: e.end_date.clone(),
                start_time: e.start_time.clone(),
                end_time: e.end_time.clone(),
                location: e.location.clone(),
                notes: e.notes.clone(),
                needs_review: e.needs_review(),
            })
            .collect()
    }
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "index",
        "name",
        "date",
        "end_date",
        "start_time",
        "end_time",
        "location",
        "notes",
        "needs_review",
    ]
}

/// Convert one row into strings, in header order.
pub(crate) fn event_to_row(e: &EventExport) -> Vec<String> {
    vec![
        e.index.to_string(),
        e.name.clone(),
        e.date.clone(),
        e.end_date.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        e.location.clone(),
        e.notes.clone(),
        if e.needs_review { "yes" } else { "no" }.to_string(),
    ]
}
