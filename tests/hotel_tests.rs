mod common;
use common::HOTEL;

use chrono::NaiveDate;
use rcalgrab::extract::hotel::{is_reservation, property_name, stay_dates};
use rcalgrab::extract::{Detection, ExtractOptions, Strategy, detect_hotel, extract_report};

fn opts() -> ExtractOptions {
    ExtractOptions::default().with_today(NaiveDate::from_ymd_opt(2026, 1, 10).expect("valid date"))
}

#[test]
fn test_day_name_dates_pair_into_stay() {
    let report = extract_report(HOTEL, &opts());
    assert_eq!(report.strategy, Strategy::Hotel);
    assert_eq!(report.events.len(), 1);

    let stay = &report.events[0];
    assert_eq!(stay.name, "LA SAMANNA Stay");
    assert_eq!(stay.date, "2026-02-08");
    assert_eq!(stay.end_date, "2026-02-14");
    assert_eq!(stay.start_time, "15:00");
    assert_eq!(stay.location, "LA SAMANNA, St. Martin");
    assert_eq!(stay.notes, "Confirmation: LS123456");
}

#[test]
fn test_missing_hotel_keyword_falls_through() {
    let text = "CHECK IN 3:00 PM\nCHECK OUT 11:00 AM\nJanuary 15, 2026";
    assert!(!is_reservation(text));
    assert_eq!(detect_hotel(text, &opts()), Detection::NotApplicable);

    let report = extract_report(text, &opts());
    assert_ne!(report.strategy, Strategy::Hotel);
    assert_eq!(report.strategy, Strategy::Blocks);
}

#[test]
fn test_reservation_without_check_in_date_is_not_reported() {
    let text = "Grand Hotel\nCheck-in: upon arrival\nCheck-out: before noon\n";
    assert!(is_reservation(text));
    assert_eq!(detect_hotel(text, &opts()), Detection::NotApplicable);
}

#[test]
fn test_labeled_dates_when_no_day_names() {
    let text = "Harbor Inn\nCheck-in: Feb 8, 2026\nCheck-out: 2/14/2026\nRoom: King";
    let (check_in, check_out) = stay_dates(text);
    assert_eq!(check_in.as_deref(), Some("2026-02-08"));
    assert_eq!(check_out.as_deref(), Some("2026-02-14"));
}

#[test]
fn test_day_first_labeled_date() {
    let text = "Check in: Sunday 8 February 2026\nCheck out: 14 Feb 2026";
    let (check_in, check_out) = stay_dates(text);
    assert_eq!(check_in.as_deref(), Some("2026-02-08"));
    assert_eq!(check_out.as_deref(), Some("2026-02-14"));
}

#[test]
fn test_property_name_variants() {
    // already a lodging word: no suffix
    assert_eq!(
        property_name("Welcome!\nSeaside Resort\nCheck-in Friday").as_deref(),
        Some("Seaside Resort")
    );
    assert_eq!(
        property_name("La Samanna - Your booking confirmation").as_deref(),
        Some("La Samanna Stay")
    );
    // denylisted headers are skipped
    assert_eq!(property_name("BOOKING\nno name here").as_deref(), None);
}

#[test]
fn test_booking_number_needs_a_digit() {
    let text = "Maple Lodge\nCHECK IN\nSUNDAY 08 FEB 2026\nCHECK OUT\nMONDAY 09 FEB 2026\nConfirmation: PENDING";
    let events = detect_hotel(text, &opts()).events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].notes, "");
}
