mod common;
use common::ITINERARY;

use chrono::NaiveDate;
use rcalgrab::extract::flight::{detect_airline, detect_confirmation, find_segments};
use rcalgrab::extract::{Detection, ExtractOptions, Strategy, detect_flights, extract_report};

fn opts_at(y: i32, m: u32, d: u32) -> ExtractOptions {
    ExtractOptions::default().with_today(NaiveDate::from_ymd_opt(y, m, d).expect("valid date"))
}

#[test]
fn test_two_segments_with_confirmation() {
    let report = extract_report(ITINERARY, &opts_at(2026, 1, 10));
    assert_eq!(report.strategy, Strategy::Flight);
    assert_eq!(report.events.len(), 2);

    let out = &report.events[0];
    assert!(out.name.contains("1977"));
    assert_eq!(out.name, "JetBlue Flight 1977 BOS→SXM");
    assert_eq!(out.location, "BOS → SXM");
    assert_eq!(out.notes, "Confirmation: ABCDEF");
    assert_eq!(out.date, "2026-02-08");
    assert_eq!(out.start_time, "10:00");
    assert_eq!(out.end_time, "15:30");

    let back = &report.events[1];
    assert!(back.name.contains("1978"));
    assert_eq!(back.location, "SXM → BOS");
    assert_eq!(back.notes, "Confirmation: ABCDEF");
    assert_eq!(back.date, "2026-02-14");
    assert_eq!(back.start_time, "16:15");
    assert_eq!(back.end_time, "20:45");
}

#[test]
fn test_segment_year_rolls_forward_in_december() {
    let report = extract_report(ITINERARY, &opts_at(2026, 12, 20));
    assert_eq!(report.events[0].date, "2027-02-08");
}

#[test]
fn test_duplicate_flight_is_kept_once() {
    let text = "United\n\
                Confirmation code: QWERTY\n\
                BOS → SXM Flight 1977\n\
                BOS → SXM Flight 1977\n\
                SXM → BOS Flight 1978\n";

    let events = detect_flights(text, &opts_at(2026, 1, 10)).events();
    assert_eq!(events.len(), 2);
    assert_eq!(events.iter().filter(|e| e.name.contains("1977")).count(), 1);
    assert_eq!(events[0].name, "United Flight 1977 BOS→SXM");
    assert_eq!(events[1].name, "United Flight 1978 SXM→BOS");
}

#[test]
fn test_duplicate_flight_uses_first_occurrence_window() {
    // the second copy sits well beyond the 400-character window of the first
    let filler = "x".repeat(450);
    let text = format!(
        "United\n\
         Sun, Feb 8\n\
         BOS → SXM Flight 1977\n\
         10:00 AM - 1:00 PM\n\
         {filler}\n\
         Mon, Mar 9\n\
         BOS → SXM Flight 1977\n\
         5:00 PM - 8:00 PM\n\
         SXM → BOS Flight 1978\n"
    );

    let events = detect_flights(&text, &opts_at(2026, 1, 10)).events();
    assert_eq!(events.len(), 2);

    let first = &events[0];
    assert_eq!(first.name, "United Flight 1977 BOS→SXM");
    assert_eq!(first.date, "2026-02-08");
    assert_eq!(first.start_time, "10:00");
    assert_eq!(first.end_time, "13:00");
}

#[test]
fn test_single_segment_is_not_an_itinerary() {
    let text = "Delta\nJFK → LAX Flight 422\nMon, Mar 2 8:00 AM";
    assert_eq!(
        detect_flights(text, &opts_at(2026, 1, 10)),
        Detection::NotApplicable
    );
}

#[test]
fn test_airport_pair_fallback_pairing() {
    let text = "BOS SXM\nNonstop, Flight 1977\n\nSXM BOS\nNonstop, Flight 1978\n";
    let segs = find_segments(text, &opts_at(2026, 1, 10));
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].origin, "BOS");
    assert_eq!(segs[0].dest, "SXM");
    assert_eq!(segs[0].flight, "1977");
    assert_eq!(segs[1].flight, "1978");
}

#[test]
fn test_airport_pair_too_far_from_flight_number() {
    let filler = "x".repeat(150);
    let text = format!("BOS SXM\n{filler}\nFlight 1977\n");
    assert!(find_segments(&text, &opts_at(2026, 1, 10)).is_empty());
}

#[test]
fn test_airline_and_confirmation_lookup() {
    assert_eq!(detect_airline("thanks for flying jetblue"), Some("JetBlue"));
    assert_eq!(detect_airline("no carrier here"), None);
    assert_eq!(
        detect_confirmation("Your confirmation code is XKQJZT"),
        Some("XKQJZT".to_string())
    );
    assert_eq!(
        detect_confirmation("Record locator: AB12CD"),
        Some("AB12CD".to_string())
    );
    assert_eq!(detect_confirmation("Confirmation pending"), None);
}

#[test]
fn test_name_without_known_airline() {
    let text = "ORD → DEN Flight 2210\nDEN → ORD Flight 2211\n";
    let events = detect_flights(text, &opts_at(2026, 1, 10)).events();
    assert_eq!(events[0].name, "Flight 2210 ORD→DEN");
    assert_eq!(events[0].notes, "");
}
