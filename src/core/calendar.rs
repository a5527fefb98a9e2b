//! Calendar deep links ("add to calendar" URLs) for extracted events.

use crate::models::event::Event;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

const DATE_FMT: &str = "%Y%m%d";
const DATE_TIME_FMT: &str = "%Y%m%dT%H%M%S";

/// Build the `dates` parameter.
///
/// - date + start time: `start/end`, end = (endDate or date) + endTime, or
///   start + 1 hour when there is no end time;
/// - date only: all-day, with an exclusive end (day after endDate, or day
///   after date);
/// - otherwise (or on unparsable values): `None`.
pub fn dates_param(ev: &Event) -> Option<String> {
    let date = parse_date(&ev.date)?;

    if !ev.start_time.is_empty() {
        let start = date.and_time(parse_time(&ev.start_time)?);

        let end = if ev.end_time.is_empty() {
            start.checked_add_signed(TimeDelta::hours(1))?
        } else {
            let end_date = if ev.is_multi_day() {
                parse_date(&ev.end_date)?
            } else {
                date
            };
            end_date.and_time(parse_time(&ev.end_time)?)
        };

        return Some(format!("{}/{}", stamp(start), stamp(end)));
    }

    let last_day = if ev.is_multi_day() {
        parse_date(&ev.end_date)?
    } else {
        date
    };
    let exclusive_end = last_day.checked_add_days(Days::new(1))?;

    Some(format!(
        "{}/{}",
        date.format(DATE_FMT),
        exclusive_end.format(DATE_FMT)
    ))
}

/// Full template URL with `action`, `text`, `dates`, `location` and
/// `details`; empty fields are left out.
pub fn build_calendar_url(ev: &Event, base_url: &str) -> String {
    let mut params: Vec<(&str, String)> = vec![("action", "TEMPLATE".to_string())];

    if !ev.name.is_empty() {
        params.push(("text", ev.name.clone()));
    }
    if let Some(dates) = dates_param(ev) {
        params.push(("dates", dates));
    }
    if !ev.location.is_empty() {
        params.push(("location", ev.location.clone()));
    }
    if !ev.notes.is_empty() {
        params.push(("details", ev.notes.clone()));
    }

    let query = params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{base_url}?{query}")
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

fn stamp(dt: NaiveDateTime) -> String {
    dt.format(DATE_TIME_FMT).to_string()
}
