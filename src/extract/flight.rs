//! Flight itinerary detector: one event per distinct flight segment.

use super::normalize::{convert_to_24_hour, infer_iso_date, month_index};
use super::patterns::{
    AIRPORT_PAIR, FLIGHT_NUMBER, FLIGHT_SEGMENT, LABELED_CONF_CODE, LOCATOR_CODE,
    MERIDIEM_TIME, MONTH_DAY_YEAR, SHORT_WEEKDAY_DATE,
};
use super::single::{group, group_num, month_name_date};
use super::{Detection, ExtractOptions};
use crate::models::event::Event;

/// Carrier names looked up (case-insensitively) in roster order.
pub const AIRLINES: &[&str] = &[
    "JetBlue",
    "Delta",
    "United",
    "American",
    "Southwest",
    "Alaska",
    "Spirit",
    "Frontier",
    "Hawaiian",
    "Sun Country",
    "Allegiant",
    "Air Canada",
    "British Airways",
    "Virgin Atlantic",
    "Lufthansa",
    "Emirates",
    "Qatar",
];

/// Minimum number of distinct segments for a text to count as an itinerary.
const MIN_SEGMENTS: usize = 2;

/// One leg of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub origin: String,
    pub dest: String,
    pub flight: String,
    /// Byte offset of the first occurrence in the source text.
    pub offset: usize,
}

/// Detect a multi-leg flight itinerary.
pub fn detect_flights(text: &str, opts: &ExtractOptions) -> Detection {
    let segments = unique_segments(find_segments(text, opts));
    if segments.len() < MIN_SEGMENTS {
        return Detection::NotApplicable;
    }

    let airline = detect_airline(text);
    let code = detect_confirmation(text);

    let events = segments
        .iter()
        .map(|seg| segment_event(text, seg, airline, code.as_deref(), opts))
        .collect();

    Detection::Found(events)
}

/// First roster carrier mentioned anywhere in the text.
pub fn detect_airline(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    AIRLINES
        .iter()
        .copied()
        .find(|name| lower.contains(&name.to_lowercase()))
}

/// "Confirmation code ABCDEF", else a PNR / record locator.
pub fn detect_confirmation(text: &str) -> Option<String> {
    LABELED_CONF_CODE
        .captures(text)
        .or_else(|| LOCATOR_CODE.captures(text))
        .map(|c| group(&c, 1).to_string())
}

/// Collect flight segments with their offsets, in text order.
///
/// "BOS → SXM Flight 1977" is the primary form. When it yields fewer than
/// two matches, airport-code pairs are paired with the first "Flight NNNN"
/// that follows them within `opts.pairing_distance` characters.
pub fn find_segments(text: &str, opts: &ExtractOptions) -> Vec<Segment> {
    let primary: Vec<Segment> = FLIGHT_SEGMENT
        .captures_iter(text)
        .filter_map(|c| {
            Some(Segment {
                origin: group(&c, 1).to_string(),
                dest: group(&c, 2).to_string(),
                flight: group(&c, 3).to_string(),
                offset: c.get(0)?.start(),
            })
        })
        .collect();

    if primary.len() >= MIN_SEGMENTS {
        return primary;
    }

    let flights: Vec<(usize, &str)> = FLIGHT_NUMBER
        .captures_iter(text)
        .filter_map(|c| Some((c.get(0)?.start(), c.get(1)?.as_str())))
        .collect();

    AIRPORT_PAIR
        .captures_iter(text)
        .filter_map(|c| {
            let offset = c.get(0)?.start();
            let pair_pos = char_offset(text, offset);
            let (_, num) = flights.iter().find(|(flight_offset, _)| {
                let flight_pos = char_offset(text, *flight_offset);
                flight_pos > pair_pos && flight_pos - pair_pos < opts.pairing_distance
            })?;

            Some(Segment {
                origin: group(&c, 1).to_string(),
                dest: group(&c, 2).to_string(),
                flight: num.to_string(),
                offset,
            })
        })
        .collect()
}

/// Keep the first segment of every flight number.
pub fn unique_segments(segments: Vec<Segment>) -> Vec<Segment> {
    let mut seen: Vec<String> = Vec::new();
    segments
        .into_iter()
        .filter(|seg| {
            if seen.contains(&seg.flight) {
                false
            } else {
                seen.push(seg.flight.clone());
                true
            }
        })
        .collect()
}

fn segment_event(
    text: &str,
    seg: &Segment,
    airline: Option<&str>,
    code: Option<&str>,
    opts: &ExtractOptions,
) -> Event {
    let window = window(text, seg.offset, opts.window_before, opts.window_after);

    let name = match airline {
        Some(a) => format!("{a} Flight {} {}→{}", seg.flight, seg.origin, seg.dest),
        None => format!("Flight {} {}→{}", seg.flight, seg.origin, seg.dest),
    };

    let mut ev = Event {
        location: format!("{} → {}", seg.origin, seg.dest),
        notes: code.map(|c| format!("Confirmation: {c}")).unwrap_or_default(),
        date: window_date(window, opts),
        ..Event::default()
    };
    ev.set_name(&name);

    let mut times = MERIDIEM_TIME
        .captures_iter(window)
        .map(|c| convert_to_24_hour(group(&c, 1), c.get(2).map(|m| m.as_str())));
    ev.start_time = times.next().unwrap_or_default();
    ev.end_time = times.next().unwrap_or_default();

    ev
}

/// "Sun, Feb 8" (year inferred) first, then "February 8, 2026".
fn window_date(window: &str, opts: &ExtractOptions) -> String {
    if let Some(c) = SHORT_WEEKDAY_DATE.captures(window)
        && let Some(month) = month_index(group(&c, 1))
        && let Ok(day) = u32::try_from(group_num(&c, 2))
    {
        let date = infer_iso_date(month, day, opts.today, opts.year_rollover_days);
        if !date.is_empty() {
            return date;
        }
    }

    MONTH_DAY_YEAR
        .captures(window)
        .and_then(|c| month_name_date(group(&c, 1), group_num(&c, 2), group_num(&c, 3)))
        .unwrap_or_default()
}

/// Number of characters before byte offset `byte`.
fn char_offset(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}

/// Byte index of the `n`-th character (or the text length).
fn byte_index(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(i, _)| i)
}

/// Slice from `before` characters ahead of `anchor` to `after` characters past it,
/// clamped to the text.
pub fn window(text: &str, anchor: usize, before: usize, after: usize) -> &str {
    let anchor_char = char_offset(text, anchor);
    let start = byte_index(text, anchor_char.saturating_sub(before));
    let end = byte_index(text, anchor_char.saturating_add(after));
    &text[start..end]
}
