use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `--today` override, or the local date.
pub fn reference_date(arg: Option<&str>) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today()),
    }
}
