//! Event extraction engine.
//!
//! Turns noisy OCR / PDF / pasted text into calendar events. Pure and
//! synchronous: no I/O, no shared state, safe to call from many threads.
//!
//! The dispatcher tries, in order:
//! 1. the flight itinerary detector (≥ 2 segments),
//! 2. the hotel reservation detector,
//! 3. the generic block splitter + single-event extractor per block,
//! 4. the single-event extractor on the whole text.
//!
//! The result is never empty.

pub mod flight;
pub mod hotel;
pub mod normalize;
pub mod patterns;
pub mod rules;
pub mod single;
pub mod splitter;

pub use flight::detect_flights;
pub use hotel::detect_hotel;
pub use single::extract_single;
pub use splitter::split_blocks;

use crate::models::event::Event;
use chrono::NaiveDate;
use std::fmt;

/// Dates written without a year roll into next year once they are more than
/// this many days in the past.
pub const YEAR_ROLLOVER_DAYS: i64 = 30;

/// Max distance (characters) between an airport-code pair and the flight
/// number that follows it.
pub const FLIGHT_PAIRING_DISTANCE: usize = 100;

/// Characters scanned before a flight segment for its date/times.
pub const SEGMENT_WINDOW_BEFORE: usize = 100;

/// Characters scanned after a flight segment for its date/times.
pub const SEGMENT_WINDOW_AFTER: usize = 400;

/// Heuristic parameters for one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Reference date for year inference.
    pub today: NaiveDate,
    pub year_rollover_days: i64,
    pub pairing_distance: usize,
    pub window_before: usize,
    pub window_after: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            today: chrono::Local::now().date_naive(),
            year_rollover_days: YEAR_ROLLOVER_DAYS,
            pairing_distance: FLIGHT_PAIRING_DISTANCE,
            window_before: SEGMENT_WINDOW_BEFORE,
            window_after: SEGMENT_WINDOW_AFTER,
        }
    }
}

impl ExtractOptions {
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

/// Outcome of a single detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    NotApplicable,
    Found(Vec<Event>),
}

impl Detection {
    pub fn events(self) -> Vec<Event> {
        match self {
            Detection::NotApplicable => Vec::new(),
            Detection::Found(events) => events,
        }
    }
}

/// Cascade stage that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Flight,
    Hotel,
    Blocks,
    Fallback,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Flight => "flight",
            Strategy::Hotel => "hotel",
            Strategy::Blocks => "blocks",
            Strategy::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events plus the stage that found them. `events` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub events: Vec<Event>,
    pub strategy: Strategy,
}

/// Extract events using default heuristics and today's date.
pub fn extract_events(raw: &str) -> Vec<Event> {
    extract_events_with(raw, &ExtractOptions::default())
}

pub fn extract_events_with(raw: &str, opts: &ExtractOptions) -> Vec<Event> {
    extract_report(raw, opts).events
}

/// Run the detector cascade and report which stage won.
pub fn extract_report(raw: &str, opts: &ExtractOptions) -> Extraction {
    let text = normalize_newlines(raw);

    if let Detection::Found(events) = detect_flights(&text, opts)
        && events.len() >= 2
    {
        return Extraction {
            events,
            strategy: Strategy::Flight,
        };
    }

    if let Detection::Found(events) = detect_hotel(&text, opts)
        && !events.is_empty()
    {
        return Extraction {
            events,
            strategy: Strategy::Hotel,
        };
    }

    let events: Vec<Event> = split_blocks(&text)
        .iter()
        .map(|block| extract_single(block, opts))
        .filter(|ev| !ev.name.is_empty() || !ev.date.is_empty())
        .collect();
    if !events.is_empty() {
        return Extraction {
            events,
            strategy: Strategy::Blocks,
        };
    }

    Extraction {
        events: vec![extract_single(&text, opts)],
        strategy: Strategy::Fallback,
    }
}

/// `\r\n` and lone `\r` become `\n`.
fn normalize_newlines(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}
