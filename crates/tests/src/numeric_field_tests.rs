//! Keystroke-level scenarios for the number input state.

use crate::common::{drive, FieldEvent::*};
use pretty_assertions::assert_eq;
use shared_types::{parse, EditOutcome, FieldState, FinalizeOutcome, NumericConstraints};

fn field(constraints: NumericConstraints) -> FieldState {
    FieldState::new(None, constraints)
}

#[test]
fn typing_a_decimal_character_by_character() {
    let mut f = field(NumericConstraints::default());
    let emitted = drive(&mut f, &[Edit("1"), Edit("12"), Edit("12."), Edit("12.3"), Edit("12.34")]);
    assert_eq!(emitted, vec![Some(1.0), Some(12.0), Some(12.3), Some(12.34)]);
    assert_eq!(f.raw_text(), "12.34");
}

#[test]
fn typing_a_negative_number() {
    let mut f = field(NumericConstraints::default());
    let emitted = drive(&mut f, &[Edit("-"), Edit("-5"), Edit("-50"), Edit("-50."), Edit("-50.25")]);
    assert_eq!(emitted, vec![Some(-5.0), Some(-50.0), Some(-50.25)]);
}

#[test]
fn negative_entry_blocked_when_disallowed() {
    let mut f = field(NumericConstraints::default().non_negative());
    let emitted = drive(&mut f, &[Edit("-"), Edit("-5")]);
    assert!(emitted.is_empty());
    assert_eq!(f.raw_text(), "");

    drive(&mut f, &[Edit("5")]);
    assert_eq!(f.on_edit("-5").accepted_text, "5");
    assert_eq!(f.on_edit("-").accepted_text, "5");
}

#[test]
fn clearing_reports_no_value() {
    let mut f = field(NumericConstraints::default());
    let emitted = drive(&mut f, &[Edit("123"), Edit("")]);
    assert_eq!(emitted, vec![Some(123.0), None]);
    assert_eq!(f.raw_text(), "");
    assert_eq!(f.committed_value(), None);
}

#[test]
fn garbage_keystroke_has_no_effect() {
    let mut f = field(NumericConstraints::default());
    drive(&mut f, &[Edit("4")]);
    let result = f.on_edit("4a");
    assert_eq!(result.outcome, EditOutcome::Rejected);
    assert_eq!(result.accepted_text, "4");
    assert_eq!(f.committed_value(), Some(4.0));
}

#[test]
fn blur_formats_to_decimal_places() {
    let mut f = field(NumericConstraints::default());
    let emitted = drive(&mut f, &[Edit("123.456"), Blur]);
    assert_eq!(emitted, vec![Some(123.456), Some(123.46)]);
    assert_eq!(f.raw_text(), "123.46");
}

#[test]
fn blur_out_of_range_keeps_text_and_reports() {
    let c = NumericConstraints::default().with_min(0.0).with_max(100.0);
    let mut f = field(c);
    let emitted = drive(&mut f, &[Edit("150"), Blur]);
    assert_eq!(emitted, vec![Some(150.0)]);
    assert_eq!(f.raw_text(), "150");
    assert!(!c.validate(150.0));
    assert!(f.violation().is_some());
}

#[test]
fn blur_twice_is_stable() {
    let mut f = field(NumericConstraints::default().with_decimal_places(1));
    drive(&mut f, &[Edit("9.96"), Blur]);
    let first = f.raw_text().to_string();
    let second = f.finalize();
    assert_eq!(second, FinalizeOutcome::Formatted(10.0));
    assert_eq!(f.raw_text(), first);
    assert_eq!(first, "10");
}

#[test]
fn blur_on_trailing_dot_canonicalises() {
    let mut f = field(NumericConstraints::default());
    let emitted = drive(&mut f, &[Edit("7"), Edit("7."), Blur]);
    assert_eq!(emitted, vec![Some(7.0), Some(7.0)]);
    assert_eq!(f.raw_text(), "7");
}

#[test]
fn accepted_literals_always_parse_to_finite_values() {
    let mut f = field(NumericConstraints::default());
    let cases = [
        ("0", EditOutcome::Changed(0.0)),
        ("00", EditOutcome::Changed(0.0)),
        ("0.0", EditOutcome::Changed(0.0)),
        (".5", EditOutcome::Changed(0.5)),
        ("-.5", EditOutcome::Changed(-0.5)),
        ("5.", EditOutcome::Intermediate),
        ("-0", EditOutcome::Changed(0.0)),
        ("123456789.987654321", EditOutcome::Changed(123456789.987654321)),
    ];
    for (text, expected) in cases {
        let result = f.on_edit(text);
        assert_eq!(result.outcome, expected, "{text}");
        assert_eq!(result.accepted_text, text);
        let value = parse(text);
        assert!(value.is_some_and(f64::is_finite), "{text}");
        if let EditOutcome::Changed(emitted) = expected {
            assert_eq!(value, Some(emitted), "{text}");
        }
    }
}

#[test]
fn blur_rounds_exact_ties_away_from_zero() {
    let cases = [("2.5", 0, "3"), ("0.5", 0, "1"), ("-2.5", 0, "-3"), ("0.125", 2, "0.13")];
    for (text, places, expected) in cases {
        let mut f = field(NumericConstraints::default().with_decimal_places(places));
        let emitted = drive(&mut f, &[Edit(text), Blur]);
        assert_eq!(f.raw_text(), expected, "{text} at {places}");
        assert_eq!(emitted.last().copied().flatten(), parse(expected), "{text} at {places}");
    }
}

#[test]
fn values_within_precision_survive_blur() {
    let c = NumericConstraints::default().with_decimal_places(3);
    for text in ["1", "1.5", "0.125", "-42.001", "999.999"] {
        let mut f = field(c);
        f.on_edit(text);
        let before = f.committed_value();
        f.finalize();
        assert_eq!(f.committed_value(), before, "{text}");
    }
}

#[test]
fn external_value_resets_text() {
    let mut f = FieldState::new(Some(60.0), NumericConstraints::default());
    assert_eq!(f.raw_text(), "60");
    f.on_edit("6");
    f.sync_external(Some(0.25));
    assert_eq!(f.raw_text(), "0.25");
    f.sync_external(None);
    assert_eq!(f.raw_text(), "");
}
