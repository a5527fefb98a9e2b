use rcalgrab::config::DEFAULT_CALENDAR_URL;
use rcalgrab::core::calendar::{build_calendar_url, dates_param};
use rcalgrab::models::event::Event;

fn dinner() -> Event {
    Event {
        name: "Dinner at Chez Panisse".to_string(),
        date: "2026-01-15".to_string(),
        start_time: "19:00".to_string(),
        end_time: "21:00".to_string(),
        location: "1517 Shattuck Ave, Berkeley, CA 94709".to_string(),
        ..Event::default()
    }
}

#[test]
fn test_timed_event_dates() {
    assert_eq!(
        dates_param(&dinner()).as_deref(),
        Some("20260115T190000/20260115T210000")
    );
}

#[test]
fn test_missing_end_time_lasts_one_hour() {
    let ev = Event {
        end_time: String::new(),
        ..dinner()
    };
    assert_eq!(
        dates_param(&ev).as_deref(),
        Some("20260115T190000/20260115T200000")
    );
}

#[test]
fn test_end_time_on_end_date() {
    let ev = Event {
        date: "2026-02-08".to_string(),
        end_date: "2026-02-09".to_string(),
        start_time: "22:00".to_string(),
        end_time: "01:00".to_string(),
        ..Event::default()
    };
    assert_eq!(
        dates_param(&ev).as_deref(),
        Some("20260208T220000/20260209T010000")
    );
}

#[test]
fn test_all_day_dates_are_end_exclusive() {
    let single = Event {
        date: "2026-02-08".to_string(),
        ..Event::default()
    };
    assert_eq!(dates_param(&single).as_deref(), Some("20260208/20260209"));

    let stay = Event {
        end_date: "2026-02-14".to_string(),
        ..single
    };
    assert_eq!(dates_param(&stay).as_deref(), Some("20260208/20260215"));
}

#[test]
fn test_no_date_no_dates_param() {
    let ev = Event {
        name: "Somewhere".to_string(),
        ..Event::default()
    };
    assert_eq!(dates_param(&ev), None);
    assert!(!build_calendar_url(&ev, DEFAULT_CALENDAR_URL).contains("dates="));
}

#[test]
fn test_url_is_encoded() {
    let url = build_calendar_url(&dinner(), DEFAULT_CALENDAR_URL);

    assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
    assert!(url.contains("text=Dinner%20at%20Chez%20Panisse"));
    assert!(url.contains("dates=20260115T190000%2F20260115T210000"));
    assert!(url.contains("location=1517%20Shattuck%20Ave%2C%20Berkeley%2C%20CA%2094709"));
    assert!(!url.contains("details="));
}

#[test]
fn test_flight_arrow_and_notes() {
    let ev = Event {
        name: "JetBlue Flight 1977 BOS→SXM".to_string(),
        date: "2026-02-08".to_string(),
        notes: "Confirmation: ABCDEF".to_string(),
        ..Event::default()
    };
    let url = build_calendar_url(&ev, "https://example.test/cal");

    assert!(url.starts_with("https://example.test/cal?"));
    assert!(url.contains("BOS%E2%86%92SXM"));
    assert!(url.contains("details=Confirmation%3A%20ABCDEF"));
}
