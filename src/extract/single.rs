//! Single-event field extractor.
//!
//! Each field has its own ordered rule list; fields never influence each other,
//! so a record may come out internally inconsistent (e.g. an end date before
//! the start date). That is left for the user to correct.

use super::ExtractOptions;
use super::normalize::{
    convert_to_24_hour, format_iso_date, infer_iso_date, month_index, normalize_year,
};
use super::patterns::*;
use super::rules::{Rule, RuleInput, first_value};
use crate::models::event::{Event, truncate_chars};
use regex::Captures;

/// Length cap applied to "stay at …" style names before the global cap.
const STAY_NAME_LEN: usize = 80;

/// Number of leading lines considered for a bare title.
const TITLE_SCAN_LINES: usize = 5;

/// Extract one event from a block of text.
pub fn extract_single(block: &str, opts: &ExtractOptions) -> Event {
    let input = RuleInput::new(block, opts);
    let mut ev = Event::default();

    ev.date = first_value(&input, DATE_RULES).unwrap_or_default();

    if let Some((start, end)) = first_value(&input, TIME_RULES) {
        ev.start_time = start;
        ev.end_time = end;
    }
    if ev.end_time.is_empty() {
        ev.end_time = labeled_end_time(&input).unwrap_or_default();
    }

    ev.location = first_value(&input, LOCATION_RULES).unwrap_or_default();

    if let Some(name) = first_value(&input, NAME_RULES) {
        ev.set_name(&name);
    }

    ev.end_date = first_value(&input, END_DATE_RULES).unwrap_or_default();
    ev.notes = confirmation_note(&input).unwrap_or_default();

    ev
}

// ---------------------------------------------------------------------------
// helpers
// ---------------------------------------------------------------------------

pub(crate) fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

pub(crate) fn group_num(caps: &Captures, i: usize) -> i64 {
    group(caps, i).parse().unwrap_or(0)
}

fn meridiem<'t>(caps: &Captures<'t>, i: usize) -> Option<&'t str> {
    caps.get(i).map(|m| m.as_str())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

/// ISO date from a "month name" capture, a day capture and a year value.
pub(crate) fn month_name_date(month: &str, day: i64, year: i64) -> Option<String> {
    let m = month_index(month)?;
    non_empty(format_iso_date(year as i32, i64::from(m), day))
}

/// ISO date from an "M/D/YY[YY]" capture set.
pub(crate) fn slash_date(caps: &Captures, m: usize, d: usize, y: usize) -> Option<String> {
    let year = normalize_year(group_num(caps, y) as i32);
    non_empty(format_iso_date(year, group_num(caps, m) - 1, group_num(caps, d)))
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

const DATE_RULES: &[Rule<String>] = &[
    date_month_day_year,
    date_day_month_year,
    date_slash,
    date_iso,
    date_weekday_no_year,
];

fn date_month_day_year(input: &RuleInput) -> Option<String> {
    let c = MONTH_DAY_YEAR.captures(input.text)?;
    month_name_date(group(&c, 1), group_num(&c, 2), group_num(&c, 3))
}

fn date_day_month_year(input: &RuleInput) -> Option<String> {
    let c = DAY_MONTH_YEAR.captures(input.text)?;
    month_name_date(group(&c, 2), group_num(&c, 1), group_num(&c, 3))
}

fn date_slash(input: &RuleInput) -> Option<String> {
    let c = SLASH_DATE.captures(input.text)?;
    slash_date(&c, 1, 2, 3)
}

fn date_iso(input: &RuleInput) -> Option<String> {
    let c = ISO_DATE.captures(input.text)?;
    non_empty(format_iso_date(
        group_num(&c, 1) as i32,
        group_num(&c, 2) - 1,
        group_num(&c, 3),
    ))
}

fn date_weekday_no_year(input: &RuleInput) -> Option<String> {
    let c = WEEKDAY_MONTH_DAY.captures(input.text)?;
    let month = month_index(group(&c, 1))?;
    let day = u32::try_from(group_num(&c, 2)).ok()?;
    non_empty(infer_iso_date(
        month,
        day,
        input.opts.today,
        input.opts.year_rollover_days,
    ))
}

// ---------------------------------------------------------------------------
// times
// ---------------------------------------------------------------------------

/// (start, end) — end may be empty.
const TIME_RULES: &[Rule<(String, String)>] = &[
    time_range,
    time_single,
    time_labeled_start,
];

fn time_range(input: &RuleInput) -> Option<(String, String)> {
    let c = TIME_RANGE.captures(input.text)?;
    // "7:00 - 9:00 PM": the second marker applies to both
    let first_marker = meridiem(&c, 2).or(meridiem(&c, 4));
    Some((
        convert_to_24_hour(group(&c, 1), first_marker),
        convert_to_24_hour(group(&c, 3), meridiem(&c, 4)),
    ))
}

fn time_single(input: &RuleInput) -> Option<(String, String)> {
    let c = MERIDIEM_TIME.captures(input.text)?;
    Some((convert_to_24_hour(group(&c, 1), meridiem(&c, 2)), String::new()))
}

fn time_labeled_start(input: &RuleInput) -> Option<(String, String)> {
    let c = LABELED_START_TIME.captures(input.text)?;
    Some((convert_to_24_hour(group(&c, 1), meridiem(&c, 2)), String::new()))
}

fn labeled_end_time(input: &RuleInput) -> Option<String> {
    let c = LABELED_END_TIME.captures(input.text)?;
    Some(convert_to_24_hour(group(&c, 1), meridiem(&c, 2)))
}

// ---------------------------------------------------------------------------
// location
// ---------------------------------------------------------------------------

const LOCATION_RULES: &[Rule<String>] = &[
    location_labeled,
    location_street,
];

/// Short lines right after a location label usually carry the rest of the address.
const CONTINUATION_MAX_LEN: usize = 60;

fn location_labeled(input: &RuleInput) -> Option<String> {
    for (i, line) in input.lines.iter().enumerate() {
        let Some(label) = LOCATION_LABEL.find(line) else {
            continue;
        };

        let mut value = line[label.end()..].trim().to_string();
        if value.is_empty() {
            continue;
        }

        if let Some(next) = input.lines.get(i + 1)
            && !FIELD_LABEL_LINE.is_match(next)
            && (next.starts_with(|c: char| c.is_ascii_digit() || c == ',')
                || STATE_ZIP_LINE.is_match(next)
                || next.chars().count() < CONTINUATION_MAX_LEN)
        {
            value.push_str(", ");
            value.push_str(next);
        }

        return Some(value);
    }
    None
}

fn location_street(input: &RuleInput) -> Option<String> {
    let c = STREET_ADDRESS.captures(input.text)?;
    non_empty(group(&c, 1).trim().to_string())
}

// ---------------------------------------------------------------------------
// name
// ---------------------------------------------------------------------------

const NAME_RULES: &[Rule<String>] = &[
    name_labeled,
    name_airline_flight,
    name_route_flight,
    name_bare_flight,
    name_meal,
    name_stay,
    name_first_line,
];

fn name_labeled(input: &RuleInput) -> Option<String> {
    input.lines.iter().find_map(|line| {
        let label = NAME_LABEL.find(line)?;
        non_empty(line[label.end()..].trim().to_string())
    })
}

fn name_airline_flight(input: &RuleInput) -> Option<String> {
    let c = AIRLINE_FLIGHT.captures(input.text)?;
    non_empty(group(&c, 1).trim().to_string())
}

fn name_route_flight(input: &RuleInput) -> Option<String> {
    let c = ROUTE_FLIGHT.captures(input.text)?;
    Some(format!(
        "Flight {} {}→{}",
        group(&c, 3),
        group(&c, 1),
        group(&c, 2)
    ))
}

fn name_bare_flight(input: &RuleInput) -> Option<String> {
    let c = BARE_FLIGHT.captures(input.text)?;
    non_empty(group(&c, 1).trim().to_string())
}

fn name_meal(input: &RuleInput) -> Option<String> {
    let m = MEAL_PHRASE.find(input.text)?;
    non_empty(m.as_str().trim().to_string())
}

fn name_stay(input: &RuleInput) -> Option<String> {
    let m = STAY_PHRASE.find(input.text)?;
    non_empty(truncate_chars(m.as_str().trim(), STAY_NAME_LEN))
}

fn name_first_line(input: &RuleInput) -> Option<String> {
    input
        .lines
        .iter()
        .take(TITLE_SCAN_LINES)
        .find(|line| {
            line.chars().count() >= 4
                && !LEADING_SHORT_DATE.is_match(line)
                && !LEADING_TIME.is_match(line)
                && !METADATA_LINE.is_match(line)
        })
        .map(|line| line.to_string())
}

// ---------------------------------------------------------------------------
// end date
// ---------------------------------------------------------------------------

const END_DATE_RULES: &[Rule<String>] = &[
    end_date_month,
    end_date_slash,
];

fn end_date_month(input: &RuleInput) -> Option<String> {
    let c = END_MONTH_DATE.captures(input.text)?;
    let month = month_index(group(&c, 1))?;
    let day = group_num(&c, 2);

    match c.get(3) {
        Some(year) => {
            let year: i64 = year.as_str().parse().ok()?;
            month_name_date(group(&c, 1), day, year)
        }
        None => non_empty(infer_iso_date(
            month,
            u32::try_from(day).ok()?,
            input.opts.today,
            input.opts.year_rollover_days,
        )),
    }
}

fn end_date_slash(input: &RuleInput) -> Option<String> {
    let c = END_SLASH_DATE.captures(input.text)?;
    slash_date(&c, 1, 2, 3)
}

// ---------------------------------------------------------------------------
// notes
// ---------------------------------------------------------------------------

fn confirmation_note(input: &RuleInput) -> Option<String> {
    let c = CONFIRMATION_CODE.captures(input.text)?;
    Some(format!("Confirmation: {}", group(&c, 1).trim()))
}
