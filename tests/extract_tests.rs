mod common;
use common::DINNER;

use chrono::NaiveDate;
use rcalgrab::extract::{
    ExtractOptions, Strategy, extract_events, extract_report, extract_single,
};
use rcalgrab::models::event::MAX_NAME_LEN;

fn opts() -> ExtractOptions {
    ExtractOptions::default().with_today(NaiveDate::from_ymd_opt(2026, 1, 10).expect("valid date"))
}

#[test]
fn test_dinner_end_to_end() {
    let events = extract_report(DINNER, &opts()).events;
    assert_eq!(events.len(), 1);

    let ev = &events[0];
    assert_eq!(ev.name, "Dinner at Chez Panisse");
    assert_eq!(ev.date, "2026-01-15");
    assert_eq!(ev.start_time, "19:00");
    assert_eq!(ev.end_time, "21:00");
    assert_eq!(ev.location, "1517 Shattuck Ave, Berkeley, CA 94709");
    assert_eq!(ev.end_date, "");
    assert!(!ev.needs_review());
}

#[test]
fn test_crlf_input_matches_lf_input() {
    let crlf = DINNER.replace('\n', "\r\n");
    assert_eq!(
        extract_report(&crlf, &opts()).events,
        extract_report(DINNER, &opts()).events
    );
}

#[test]
fn test_result_is_never_empty() {
    for input in ["", "   \n\n  ", "???", "x"] {
        let report = extract_report(input, &opts());
        assert_eq!(report.events.len(), 1, "input {input:?}");
        assert_eq!(report.strategy, Strategy::Fallback);
    }
    assert!(extract_events("").first().is_some_and(|e| e.is_empty()));
}

#[test]
fn test_labeled_fields() {
    let text = "Event: Quarterly review\nDate: 2026-03-04\nTime: 2:00 PM\nWhere: Room 4B\n";
    let ev = &extract_report(text, &opts()).events[0];

    assert_eq!(ev.name, "Quarterly review");
    assert_eq!(ev.date, "2026-03-04");
    assert_eq!(ev.start_time, "14:00");
    assert_eq!(ev.end_time, "");
    assert_eq!(ev.location, "Room 4B");
}

#[test]
fn test_location_continuation_line() {
    let text = "Lunch at Zuni Cafe\nMarch 3, 2026 12:30 PM\nAddress: 1658 Market St\nSan Francisco, CA 94102\nPhone: 555-1234";
    let ev = &extract_report(text, &opts()).events[0];

    assert_eq!(ev.name, "Lunch at Zuni Cafe");
    assert_eq!(ev.date, "2026-03-03");
    assert_eq!(ev.start_time, "12:30");
    assert_eq!(ev.location, "1658 Market St, San Francisco, CA 94102");
}

#[test]
fn test_weekday_date_without_year() {
    let text = "Brunch for 6\nSaturday, March 7\n11:00 AM";
    let ev = &extract_report(text, &opts()).events[0];

    assert_eq!(ev.name, "Brunch for 6");
    assert_eq!(ev.date, "2026-03-07");
    assert_eq!(ev.start_time, "11:00");
}

#[test]
fn test_slash_and_day_first_dates() {
    let ev = &extract_report("Board meeting\n3/4/26", &opts()).events[0];
    assert_eq!(ev.date, "2026-03-04");

    let ev = &extract_report("Board meeting\n4 March 2026", &opts()).events[0];
    assert_eq!(ev.date, "2026-03-04");
}

#[test]
fn test_one_event_per_block() {
    let text = "Team sync\nJan 5, 2026 10:00 AM\n\nDentist\nFeb 10, 2026 3:00 PM\n\nConcert\nMar 3, 2026 8:00 PM";
    let report = extract_report(text, &opts());

    assert_eq!(report.strategy, Strategy::Blocks);
    let names: Vec<&str> = report.events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Team sync", "Dentist", "Concert"]);

    let dates: Vec<&str> = report.events.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, vec!["2026-01-05", "2026-02-10", "2026-03-03"]);
    assert_eq!(report.events[2].start_time, "20:00");
}

#[test]
fn test_name_is_truncated() {
    let text = format!("Event: {}", "A".repeat(150));
    let ev = &extract_report(&text, &opts()).events[0];
    assert_eq!(ev.name.chars().count(), MAX_NAME_LEN);
}

#[test]
fn test_weak_record_needs_review() {
    let ev = &extract_report("hello there", &opts()).events[0];
    assert_eq!(ev.name, "hello there");
    assert!(ev.needs_review());
}

#[test]
fn test_confirmation_note_and_checkout_date() {
    let text = "Reservation for Cabin weekend\nArrive March 6, 2026, checkout March 8, 2026\nConfirmation #: XK4821";
    let report = extract_report(text, &opts());
    assert_eq!(report.events.len(), 1);

    let ev = &report.events[0];
    assert_eq!(ev.name, "Reservation for Cabin weekend");
    assert_eq!(ev.date, "2026-03-06");
    assert_eq!(ev.end_date, "2026-03-08");
    assert_eq!(ev.notes, "Confirmation: XK4821");
}

#[test]
fn test_airline_flight_name() {
    let ev = extract_single("Delta Flight 422\nMon, Mar 2, 2026 8:00 AM", &opts());
    assert_eq!(ev.name, "Delta Flight 422");
    assert_eq!(ev.date, "2026-03-02");
    assert_eq!(ev.start_time, "08:00");
}

#[test]
fn test_route_flight_name_for_single_segment() {
    let ev = extract_single("JFK → LAX Flight 422\nMarch 2, 2026", &opts());
    assert_eq!(ev.name, "Flight 422 JFK→LAX");
}

#[test]
fn test_bare_flight_name() {
    let ev = extract_single("Boarding pass\nFLT 1234 Gate B12", &opts());
    assert_eq!(ev.name, "FLT 1234");
}

#[test]
fn test_range_shares_trailing_meridiem() {
    let ev = extract_single("Concert\n7:00 - 9:00 PM", &opts());
    assert_eq!(ev.start_time, "19:00");
    assert_eq!(ev.end_time, "21:00");
}

#[test]
fn test_yearless_checkout_uses_year_inference() {
    let december =
        ExtractOptions::default().with_today(NaiveDate::from_ymd_opt(2026, 12, 20).expect("valid date"));
    let ev = extract_single("Cabin weekend\nCheckout: Feb 8", &december);
    assert_eq!(ev.end_date, "2027-02-08");
}

#[test]
fn test_stay_phrase_name_is_capped() {
    let ev = extract_single("Stay at the Grand Budapest", &opts());
    assert_eq!(ev.name, "Stay at the Grand Budapest");

    let long = format!("Stay at {}", "B".repeat(120));
    let ev = extract_single(&long, &opts());
    assert_eq!(ev.name.chars().count(), 80);
    assert!(ev.name.starts_with("Stay at BBB"));
}

#[test]
fn test_name_rules_follow_priority_order() {
    // label beats airline, airline beats route, route beats meal
    let ev = extract_single("Event: Offsite\nDelta Flight 422", &opts());
    assert_eq!(ev.name, "Offsite");

    let ev = extract_single("Dinner at Nopa\nDelta Flight 422", &opts());
    assert_eq!(ev.name, "Delta Flight 422");

    let ev = extract_single("Dinner at Nopa\nJFK → LAX Flight 422", &opts());
    assert_eq!(ev.name, "Flight 422 JFK→LAX");
}
