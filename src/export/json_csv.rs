// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{EventExport, notify_export_success};
use crate::models::event::Event;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// JSON array of `{name, date, endDate, startTime, endTime, location, notes}`.
pub(crate) fn events_to_json(events: &[Event]) -> AppResult<String> {
    serde_json::to_string_pretty(events)
        .map_err(|e| AppError::Serialize(format!("JSON serialization error: {e}")))
}

/// CSV text (header incluso grazie a serde).
pub(crate) fn events_to_csv(rows: &[EventExport]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

/// Write `content` to `path`, or to stdout when `path` is `None`.
pub(crate) fn write_text(label: &str, content: &str, path: Option<&Path>) -> AppResult<()> {
    match path {
        Some(p) => {
            let mut file = File::create(p)?;
            file.write_all(content.as_bytes())?;
            notify_export_success(label, p);
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                out.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
