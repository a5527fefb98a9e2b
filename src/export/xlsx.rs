// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{event_to_row, get_headers};
use crate::export::{EventExport, notify_export_success};
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Righe da rivedere a mano
const REVIEW_FILL: u32 = 0xFFF2CC;
const HEADER_FILL: u32 = 0x2F75B5;

/// One sheet, one row per event. Apart from the index, cells are written as
/// text so every field stays exactly as extracted.
pub(crate) fn export_xlsx(events: &[EventExport], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Events").map_err(xlsx_error)?;

    let header = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin);
    let plain = Format::new().set_border(FormatBorder::Thin);
    let review = plain.clone().set_background_color(Color::RGB(REVIEW_FILL));

    let headers = get_headers();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    for (col, h) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *h, &header)
            .map_err(xlsx_error)?;
    }
    sheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;

    for (i, ev) in events.iter().enumerate() {
        let row = (i + 1) as u32;
        let fmt = if ev.needs_review { &review } else { &plain };

        sheet
            .write_with_format(row, 0, ev.index as u32, fmt)
            .map_err(xlsx_error)?;

        // la colonna 0 (indice) è numerica, le altre testo
        for (col, value) in event_to_row(ev).iter().enumerate().skip(1) {
            sheet
                .write_with_format(row, col as u16, value.as_str(), fmt)
                .map_err(xlsx_error)?;
            widths[col] = widths[col].max(value.width());
        }
    }

    for (col, w) in widths.iter().enumerate() {
        sheet
            .set_column_width(col as u16, *w as f64 + 2.0)
            .map_err(xlsx_error)?;
    }

    workbook.save(path).map_err(xlsx_error)?;
    notify_export_success("XLSX", path);
    Ok(())
}

fn xlsx_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}
