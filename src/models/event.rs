use serde::{Deserialize, Serialize};

/// Maximum length (in characters) of an event name.
pub const MAX_NAME_LEN: usize = 100;

/// A calendar event extracted from free text.
///
/// Every field is a plain string; an empty string means "unknown".
/// Dates are `YYYY-MM-DD`, times are 24-hour `HH:MM`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    pub date: String,     // start / check-in date
    pub end_date: String, // only for multi-day events or explicit checkout
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub notes: String,
}

impl Event {
    /// True when no field carries any data.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.date.is_empty()
            && self.end_date.is_empty()
            && self.start_time.is_empty()
            && self.end_time.is_empty()
            && self.location.is_empty()
            && self.notes.is_empty()
    }

    /// A record is weak when fewer than 2 of {name, date, startTime, location}
    /// are populated; such records should be corrected by hand.
    pub fn needs_review(&self) -> bool {
        [&self.name, &self.date, &self.start_time, &self.location]
            .iter()
            .filter(|f| !f.is_empty())
            .count()
            < 2
    }

    /// Set the name, truncated to [`MAX_NAME_LEN`] characters.
    pub fn set_name(&mut self, name: &str) {
        self.name = truncate_chars(name, MAX_NAME_LEN);
    }

    pub fn is_multi_day(&self) -> bool {
        !self.end_date.is_empty()
    }
}

/// Cut `s` after `max` characters (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
