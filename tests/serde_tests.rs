#![cfg(feature = "serde")]

//! Integration tests for serde support in treje.
//!
//! These tests verify that sets serialize as sequences in their current
//! order and that deserialization applies the duplicate check.

use rstest::rstest;
use treje::set::{Float64Set, OrderedSet, StringSet};

#[rstest]
fn test_set_serializes_in_current_order() {
    let set = OrderedSet::with_elements([5, 4, 2, 9]).unwrap();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[5,4,2,9]");
}

#[rstest]
fn test_empty_set_serializes_as_empty_sequence() {
    let set: OrderedSet<u32> = OrderedSet::new();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
}

#[rstest]
fn test_set_json_roundtrip() {
    let mut set = OrderedSet::with_elements([3_i64, -1, 2]).unwrap();
    set.sort();

    let json = serde_json::to_string(&set).unwrap();
    let restored: OrderedSet<i64> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.to_vec().unwrap(), vec![-1, 2, 3]);
}

#[rstest]
fn test_string_set_json_roundtrip() {
    let set = StringSet::with_elements(["pear".to_string(), "fig".to_string()]).unwrap();

    let json = serde_json::to_string(&set).unwrap();
    let restored: StringSet = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.to_vec().unwrap(), set.to_vec().unwrap());
}

#[rstest]
fn test_float_set_json_roundtrip() {
    let set = Float64Set::with_elements([0.5, -2.25]).unwrap();
    let json = serde_json::to_string(&set).unwrap();
    let restored: Float64Set = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, set);
}

#[rstest]
fn test_deserialize_rejects_duplicates() {
    let result: Result<OrderedSet<i32>, _> = serde_json::from_str("[2, 4, 5, 4, 2]");
    let error = result.unwrap_err();
    assert!(error.to_string().contains("set has duplicates"));
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<OrderedSet<i32>, _> = serde_json::from_str("{\"a\": 1}");
    assert!(result.is_err());
}
