//! Hotel reservation detector: a single multi-day stay.

use super::normalize::convert_to_24_hour;
use super::patterns::{
    BRAND_SUFFIX, CHECK_IN, CHECK_IN_DATES, CHECK_IN_TIME, CHECK_OUT, CHECK_OUT_DATES,
    DAY_NAME_FULL_DATE, HOTEL_CONFIRMATION_PATTERNS, HOTEL_KEYWORDS, HOTEL_LOCATION_PATTERNS,
    HOTEL_NAME_PATTERNS, LODGING_WORD, NAME_DENYLIST, REGION, TRAILING_STAY,
};
use super::single::{group, group_num, month_name_date, slash_date};
use super::{Detection, ExtractOptions};
use crate::models::event::{Event, truncate_chars};
use regex::Regex;

/// Property names are cut to this many characters.
const PROPERTY_NAME_LEN: usize = 40;

/// Detect a hotel reservation. Requires a check-in mention, a check-out
/// mention and at least one lodging keyword; returns a record only when a
/// check-in date was found.
pub fn detect_hotel(text: &str, _opts: &ExtractOptions) -> Detection {
    if !is_reservation(text) {
        return Detection::NotApplicable;
    }

    let mut ev = Event {
        name: property_name(text).unwrap_or_default(),
        ..Event::default()
    };

    let (check_in, check_out) = stay_dates(text);
    ev.date = check_in.unwrap_or_default();
    ev.end_date = check_out.unwrap_or_default();

    ev.start_time = check_in_time(text).unwrap_or_default();
    ev.location = hotel_location(text, &ev.name).unwrap_or_default();
    ev.notes = booking_number(text)
        .map(|code| format!("Confirmation: {code}"))
        .unwrap_or_default();

    if ev.date.is_empty() {
        return Detection::NotApplicable;
    }
    Detection::Found(vec![ev])
}

pub fn is_reservation(text: &str) -> bool {
    CHECK_IN.is_match(text) && CHECK_OUT.is_match(text) && HOTEL_KEYWORDS.is_match(text)
}

/// Property name from the first matching header pattern, cleaned up and
/// suffixed with " Stay" when it does not already read like lodging.
pub fn property_name(text: &str) -> Option<String> {
    let raw = HOTEL_NAME_PATTERNS.iter().find_map(|re| {
        re.captures_iter(text)
            .filter_map(|c| c.get(1).map(|m| m.as_str().trim().to_string()))
            .find(|candidate| is_plausible_name(candidate))
    })?;

    let stripped = BRAND_SUFFIX.replace(&raw, "");
    let mut name = truncate_chars(stripped.trim(), PROPERTY_NAME_LEN)
        .trim()
        .to_string();
    if name.is_empty() {
        return None;
    }

    if !LODGING_WORD.is_match(&name) {
        name.push_str(" Stay");
    }
    Some(name)
}

fn is_plausible_name(candidate: &str) -> bool {
    candidate.chars().count() >= 3
        && !NAME_DENYLIST.is_match(candidate)
        && !candidate.chars().any(|c| c.is_ascii_digit())
}

/// (check-in, check-out).
///
/// Day-name dates ("SUNDAY 08 FEB 2026") win: first is check-in, second
/// check-out. Without any, each side falls back to its labeled formats.
pub fn stay_dates(text: &str) -> (Option<String>, Option<String>) {
    let mut day_dates = DAY_NAME_FULL_DATE
        .captures_iter(text)
        .filter_map(|c| month_name_date(group(&c, 2), group_num(&c, 1), group_num(&c, 3)));

    let first = day_dates.next();
    let second = day_dates.next();

    let check_in = first.or_else(|| labeled_date(text, &CHECK_IN_DATES));
    let check_out = second.or_else(|| labeled_date(text, &CHECK_OUT_DATES));
    (check_in, check_out)
}

fn labeled_date(text: &str, patterns: &[Regex; 3]) -> Option<String> {
    let [day_first, month_first, slash] = patterns;

    if let Some(c) = day_first.captures(text) {
        return month_name_date(group(&c, 2), group_num(&c, 1), group_num(&c, 3));
    }
    if let Some(c) = month_first.captures(text) {
        return month_name_date(group(&c, 1), group_num(&c, 2), group_num(&c, 3));
    }
    slash.captures(text).and_then(|c| slash_date(&c, 1, 2, 3))
}

fn check_in_time(text: &str) -> Option<String> {
    let c = CHECK_IN_TIME.captures(text)?;
    Some(convert_to_24_hour(group(&c, 1), c.get(2).map(|m| m.as_str())))
}

/// Address line, street address or "City, ST ZIP"; failing those, the
/// property name plus a recognized region.
fn hotel_location(text: &str, name: &str) -> Option<String> {
    let found = HOTEL_LOCATION_PATTERNS.iter().find_map(|re| {
        let value = re.captures(text)?.get(1)?.as_str().trim().to_string();
        (!value.is_empty()).then_some(value)
    });
    if found.is_some() {
        return found;
    }

    if name.is_empty() {
        return None;
    }
    let region = REGION.captures(text)?.get(1)?.as_str().to_string();
    let base = TRAILING_STAY.replace(name, "");
    Some(format!("{base}, {region}"))
}

/// Booking / confirmation number; must contain a digit.
fn booking_number(text: &str) -> Option<String> {
    HOTEL_CONFIRMATION_PATTERNS.iter().find_map(|re| {
        let code = re.captures(text)?.get(1)?.as_str().trim().to_string();
        code.chars()
            .any(|c| c.is_ascii_digit())
            .then_some(code)
    })
}
