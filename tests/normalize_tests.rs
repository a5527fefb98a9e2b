use chrono::NaiveDate;
use rcalgrab::extract::normalize::{
    calendar_date, convert_to_24_hour, format_iso_date, infer_iso_date, month_index,
    normalize_year,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_convert_to_24_hour() {
    assert_eq!(convert_to_24_hour("12:00", Some("AM")), "00:00");
    assert_eq!(convert_to_24_hour("12:00", Some("PM")), "12:00");
    assert_eq!(convert_to_24_hour("01:15", Some("PM")), "13:15");
    assert_eq!(convert_to_24_hour("09:05", Some("AM")), "09:05");
    assert_eq!(convert_to_24_hour("7:30", Some("pm")), "19:30");
}

#[test]
fn test_convert_without_meridiem_only_pads() {
    assert_eq!(convert_to_24_hour("9:00", None), "09:00");
    assert_eq!(convert_to_24_hour("18:45", None), "18:45");
    assert_eq!(convert_to_24_hour("7:05", Some("")), "07:05");
}

#[test]
fn test_month_index() {
    assert_eq!(month_index("January"), Some(0));
    assert_eq!(month_index("feb"), Some(1));
    assert_eq!(month_index("SEPT"), Some(8));
    assert_eq!(month_index("Dec"), Some(11));
    assert_eq!(month_index("Smarch"), None);
}

#[test]
fn test_calendar_date_rolls_over() {
    assert_eq!(calendar_date(2026, 1, 30), Some(ymd(2026, 3, 2)));
    assert_eq!(calendar_date(2026, 12, 1), Some(ymd(2027, 1, 1)));
    assert_eq!(calendar_date(2026, 2, 0), Some(ymd(2026, 2, 28)));
    assert_eq!(format_iso_date(2026, 0, 15), "2026-01-15");
    assert_eq!(format_iso_date(2026, 1, 31), "2026-03-03");
}

#[test]
fn test_infer_year_keeps_upcoming_dates() {
    // Jan 10: Feb 8 is ahead
    assert_eq!(infer_iso_date(1, 8, ymd(2026, 1, 10), 30), "2026-02-08");
}

#[test]
fn test_infer_year_rolls_past_dates_forward() {
    // Dec 20: Feb 8 is long gone
    assert_eq!(infer_iso_date(1, 8, ymd(2026, 12, 20), 30), "2027-02-08");
}

#[test]
fn test_infer_year_inside_rollover_window() {
    // 20 days ago: still this year
    assert_eq!(infer_iso_date(2, 1, ymd(2026, 3, 21), 30), "2026-03-01");
    // 40 days ago: next year
    assert_eq!(infer_iso_date(1, 9, ymd(2026, 3, 21), 30), "2027-02-09");
}

#[test]
fn test_normalize_year() {
    assert_eq!(normalize_year(26), 2026);
    assert_eq!(normalize_year(2026), 2026);
}
