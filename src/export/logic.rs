// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{events_to_csv, events_to_json, write_text};
use crate::export::model::EventExport;
use crate::export::table::render_events;
use crate::export::xlsx::export_xlsx;
use crate::export::ExportFormat;
use crate::models::event::Event;
use crate::ui::messages::info;
use std::path::Path;

/// Logica di alto livello per l'output degli eventi estratti.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `events` in `format`.
    ///
    /// - `file`: destination; `None` prints to stdout (not allowed for xlsx)
    /// - `force`: overwrite an existing file without asking
    /// - `links`: calendar URLs to show under each row (table only)
    pub fn export(
        events: &[Event],
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
        links: Option<&[String]>,
    ) -> AppResult<()> {
        let path = file.map(Path::new);

        if let Some(p) = path {
            ensure_writable(p, force)?;
            info(format!("Writing {} output: {}", format.as_str(), p.display()));
        }

        match format {
            ExportFormat::Table => write_text("Table", &render_events(events, links), path),
            ExportFormat::Json => write_text("JSON", &events_to_json(events)?, path),
            ExportFormat::Csv => {
                write_text("CSV", &events_to_csv(&EventExport::from_events(events))?, path)
            }
            ExportFormat::Xlsx => {
                let p = path.ok_or_else(|| {
                    AppError::Export("xlsx output requires --out <FILE>".to_string())
                })?;
                export_xlsx(&EventExport::from_events(events), p)
            }
        }
    }
}
