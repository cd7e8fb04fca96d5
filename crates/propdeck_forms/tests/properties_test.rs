//! Batch-fold semantics: last write wins per key, Clear removes.

use chrono::{TimeZone, Utc};
use propdeck_forms::{PendingProperty, PropertyBatch, PropertyUpdate, PropertyValue};

// ============================================================
// Folding pending properties into a batch
// ============================================================

#[test]
fn clear_after_set_removes_the_key() {
    let pending = vec![
        PendingProperty::string("a", "x"),
        PendingProperty::clear("a"),
    ];
    let batch = PropertyBatch::from_pending(&pending);
    assert!(!batch.contains("a"));
    assert!(batch.is_empty());
}

#[test]
fn set_after_clear_keeps_the_value() {
    let pending = vec![
        PendingProperty::clear("a"),
        PendingProperty::string("a", "x"),
    ];
    let batch = PropertyBatch::from_pending(&pending);
    assert_eq!(batch.get_str("a"), Some("x"));
    assert_eq!(batch.len(), 1);
}

#[test]
fn later_value_overrides_earlier_for_same_key() {
    let pending = vec![
        PendingProperty::string("color", "red"),
        PendingProperty::number("count", 3.0),
        PendingProperty::string("color", "green"),
    ];
    let batch = PropertyBatch::from_pending(&pending);
    assert_eq!(batch.get_str("color"), Some("green"));
    assert_eq!(batch.get_number("count"), Some(3.0));
    assert_eq!(batch.len(), 2);
}

#[test]
fn override_may_change_the_kind() {
    let pending = vec![
        PendingProperty::string("flag", "yes"),
        PendingProperty::boolean("flag", true),
    ];
    let batch = PropertyBatch::from_pending(&pending);
    assert_eq!(batch.get_bool("flag"), Some(true));
    assert_eq!(batch.get_str("flag"), None);
}

#[test]
fn clear_for_an_unknown_key_is_a_no_op() {
    let pending = vec![PendingProperty::clear("missing")];
    let batch = PropertyBatch::from_pending(&pending);
    assert!(batch.is_empty());
}

#[test]
fn empty_pending_list_builds_an_empty_batch() {
    let batch = PropertyBatch::from_pending(&[]);
    assert!(batch.is_empty());
}

// ============================================================
// Typed values
// ============================================================

#[test]
fn all_four_kinds_round_through_a_batch() {
    let when = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
    let pending = vec![
        PendingProperty::string("name", "sasha"),
        PendingProperty::number("score", 41.5),
        PendingProperty::boolean("opted_in", false),
        PendingProperty::datetime("joined", when),
    ];
    let batch = PropertyBatch::from_pending(&pending);
    assert_eq!(batch.get_str("name"), Some("sasha"));
    assert_eq!(batch.get_number("score"), Some(41.5));
    assert_eq!(batch.get_bool("opted_in"), Some(false));
    assert_eq!(batch.get_datetime("joined"), Some(when));
}

#[test]
fn accessors_reject_the_wrong_kind() {
    let value = PropertyValue::from(2.5);
    assert_eq!(value.as_number(), Some(2.5));
    assert_eq!(value.as_str(), None);
    assert_eq!(value.as_bool(), None);
    assert_eq!(value.as_datetime(), None);
}

#[test]
fn from_impls_pick_the_matching_variant() {
    assert_eq!(PropertyValue::from("x"), PropertyValue::String("x".into()));
    assert_eq!(PropertyValue::from(true), PropertyValue::Boolean(true));
    assert_eq!(PropertyValue::from(1.0), PropertyValue::Number(1.0));
}

#[test]
fn pending_constructors_carry_the_right_update() {
    assert_eq!(PendingProperty::clear("k").update, PropertyUpdate::Clear);
    assert_eq!(
        PendingProperty::boolean("k", true).update,
        PropertyUpdate::Set(PropertyValue::Boolean(true))
    );
}
