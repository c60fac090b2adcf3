//! Integration tests for cadran-core.
//!
//! These tests verify the public API works correctly end-to-end.

use cadran_core::{
    Clock, Date, DateTime, Direction, ModelCell, ModelValue, Step, TimeOfDay, TimePickerConfig,
    Unit, UnitRange,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// =============================================================================
// Time Arithmetic Integration Tests
// =============================================================================

#[test]
fn test_time_roundtrip_display_parse() {
    let original = TimeOfDay::new(14, 40, 25).expect("valid time");
    let text = original.to_string();
    assert_eq!(text, "14:40:25");
    let parsed: TimeOfDay = text.parse().expect("parseable");
    assert_eq!(parsed, original);
}

#[test]
fn test_time_wrapping_chains_units() {
    let start = TimeOfDay::new(23, 59, 59).expect("valid time");
    let next = start.wrapping_add(Unit::Seconds, 1);
    assert_eq!(next, TimeOfDay::MIDNIGHT);

    let back = next.wrapping_add(Unit::Seconds, -1);
    assert_eq!(back, start);
}

#[test]
fn test_time_meridian_projection() {
    let noon = TimeOfDay::new(12, 0, 0).expect("valid time");
    assert!(noon.is_pm());
    assert_eq!(noon.hours_12(), 12);

    let midnight = TimeOfDay::MIDNIGHT;
    assert!(!midnight.is_pm());
    assert_eq!(midnight.hours_12(), 12);

    let afternoon = TimeOfDay::new(14, 0, 0).expect("valid time");
    assert_eq!(afternoon.hours_12(), 2);
}

#[test]
fn test_datetime_parse_with_and_without_date() {
    let with_date: DateTime = "2010-09-30 15:30:10".parse().expect("parseable");
    assert_eq!(with_date.date, Date::new(2010, 9, 30).expect("valid date"));
    assert_eq!(with_date.time, TimeOfDay::new(15, 30, 10).expect("valid time"));

    let bare: DateTime = "08:15".parse().expect("parseable");
    assert_eq!(bare.date, Date::default());
    assert_eq!(bare.time, TimeOfDay::new(8, 15, 0).expect("valid time"));
}

#[test]
fn test_datetime_with_time_preserves_date() {
    let original: DateTime = "2010-09-30 23:50:20".parse().expect("parseable");
    let shifted = original.with_time(original.time.wrapping_add(Unit::Hours, 1));
    assert_eq!(shifted.date.day, 30);
    assert_eq!(shifted.time, TimeOfDay::new(0, 50, 20).expect("valid time"));
}

// =============================================================================
// Model Binding Integration Tests
// =============================================================================

#[test]
fn test_model_cell_two_way_sharing() {
    let cell = ModelCell::default();
    let other = cell.clone();

    other.set(ModelValue::from("10:30"));
    assert_eq!(cell.get(), ModelValue::Text("10:30".to_string()));
}

#[test]
fn test_model_cell_notifies_all_handles() {
    let cell = ModelCell::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    cell.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let other = cell.clone();
    other.set(ModelValue::Empty);
    cell.set(ModelValue::from("pizza"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_model_value_resolution() {
    assert_eq!(ModelValue::Empty.resolve().expect("valid"), None);

    let resolved = ModelValue::from("2010-09-30 15:30:10")
        .resolve()
        .expect("valid")
        .expect("present");
    assert_eq!(resolved.time, TimeOfDay::new(15, 30, 10).expect("valid time"));

    assert!(ModelValue::from("pizza").resolve().is_err());
}

// =============================================================================
// Validation and Configuration Integration Tests
// =============================================================================

#[test]
fn test_unit_ranges_match_display_mode() {
    assert_eq!(UnitRange::hours_12().parse("12"), Some(12));
    assert_eq!(UnitRange::hours_12().parse("0"), None);
    assert_eq!(UnitRange::hours_12().parse("16"), None);

    assert_eq!(UnitRange::hours_24().parse("0"), Some(0));
    assert_eq!(UnitRange::hours_24().parse("16"), Some(16));
    assert_eq!(UnitRange::hours_24().parse("24"), None);

    assert_eq!(UnitRange::minutes().parse(" 59 "), Some(59));
    assert_eq!(UnitRange::seconds().parse("60"), None);
    assert_eq!(UnitRange::minutes().parse("4a"), None);
}

#[test]
fn test_step_coercion() {
    assert_eq!(Step::from(4).get(), 4);
    assert_eq!(Step::from("20").get(), 20);
    assert_eq!(Step::from("garbage").get(), 1);
    assert_eq!(Step::new(0).get(), 1);
}

#[test]
fn test_config_serde_roundtrip() {
    let config = TimePickerConfig::new()
        .hour_step(2)
        .show_meridian(false)
        .meridians("a.m.", "p.m.");
    let json = serde_json::to_string(&config).expect("serializes");
    let back: TimePickerConfig = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, config);
}

#[test]
fn test_fixed_clock_is_deterministic() {
    let nine = TimeOfDay::new(9, 15, 0).expect("valid time");
    let clock = Clock::Fixed(nine);
    assert_eq!(clock.now(), nine);
    assert_eq!(clock.now(), nine);
}

#[test]
fn test_direction_signum_drives_arithmetic() {
    let time = TimeOfDay::new(10, 0, 0).expect("valid time");
    let up = time.wrapping_add(Unit::Hours, Direction::Up.signum());
    let down = time.wrapping_add(Unit::Hours, Direction::Down.signum());
    assert_eq!(up.hours(), 11);
    assert_eq!(down.hours(), 9);
}
