//! Normalization primitives shared by every detector: month lookup,
//! ISO date formatting, 12→24 hour conversion and year inference.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Resolve a month name or abbreviation (case-insensitive) to a zero-based index.
pub fn month_index(token: &str) -> Option<u32> {
    let idx = match token.trim().to_ascii_lowercase().as_str() {
        "january" | "jan" => 0,
        "february" | "feb" => 1,
        "march" | "mar" => 2,
        "april" | "apr" => 3,
        "may" => 4,
        "june" | "jun" => 5,
        "july" | "jul" => 6,
        "august" | "aug" => 7,
        "september" | "sept" | "sep" => 8,
        "october" | "oct" => 9,
        "november" | "nov" => 10,
        "december" | "dec" => 11,
        _ => return None,
    };
    Some(idx)
}

/// Build a calendar date from (year, zero-based month, day).
///
/// Out-of-range months and days roll over instead of being rejected:
/// month 12 is January of the next year, day 0 is the last day of the
/// previous month, Feb 30 is early March.
pub fn calendar_date(year: i32, month0: i64, day: i64) -> Option<NaiveDate> {
    let total = i64::from(year) * 12 + month0;
    let y = i32::try_from(total.div_euclid(12)).ok()?;
    let m = u32::try_from(total.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(y, m, 1)?;

    let offset = day - 1;
    if offset >= 0 {
        first.checked_add_days(Days::new(offset as u64))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

/// Format (year, zero-based month, day) as `YYYY-MM-DD`.
/// Returns an empty string when the date falls outside chrono's range.
pub fn format_iso_date(year: i32, month0: i64, day: i64) -> String {
    calendar_date(year, month0, day)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Convert `H:MM` / `HH:MM` plus an optional AM/PM marker to 24-hour `HH:MM`.
///
/// 12 AM → 00, 12 PM → 12, other PM hours +12. Without a marker the hour is
/// kept as-is (only zero-padded).
pub fn convert_to_24_hour(time: &str, meridiem: Option<&str>) -> String {
    let (hours, minutes) = time.split_once(':').unwrap_or((time, "00"));
    let mut h: u32 = hours.trim().parse().unwrap_or(0);

    if let Some(marker) = meridiem.map(str::trim).filter(|m| !m.is_empty()) {
        let is_pm = marker.eq_ignore_ascii_case("pm");
        if is_pm && h != 12 {
            h += 12;
        }
        if !is_pm && h == 12 {
            h = 0;
        }
    }

    format!("{:02}:{}", h, minutes.trim())
}

/// Assign a year to a (zero-based month, day) pair that was written without one.
///
/// The date is placed in `today`'s year; if that lands more than
/// `rollover_days` before `today`, it moves to the following year.
pub fn infer_year(month0: u32, day: u32, today: NaiveDate, rollover_days: i64) -> Option<NaiveDate> {
    let candidate = calendar_date(today.year(), i64::from(month0), i64::from(day))?;
    let threshold = today.checked_sub_days(Days::new(rollover_days.max(0) as u64))?;

    if candidate < threshold {
        candidate.checked_add_months(Months::new(12))
    } else {
        Some(candidate)
    }
}

/// [`infer_year`] formatted as `YYYY-MM-DD` (empty when unresolvable).
pub fn infer_iso_date(month0: u32, day: u32, today: NaiveDate, rollover_days: i64) -> String {
    infer_year(month0, day, today, rollover_days)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Two-digit years are taken as 20YY.
pub fn normalize_year(year: i32) -> i32 {
    if year < 100 { year + 2000 } else { year }
}
