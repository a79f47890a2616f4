use drillbook_ops::{get_length, get_length_of_json};
use drillbook_types::{ArrayInput, Error, LengthInput};
use serde_json::json;

// ── Typed input ──────────────────────────────────────────────────

#[test]
fn string_length_counts_characters() {
    assert_eq!(get_length(&LengthInput::from("abc")), 3);
    assert_eq!(get_length(&LengthInput::from("")), 0);
    assert_eq!(get_length(&LengthInput::from("héllo")), 5);
}

#[test]
fn astral_characters_count_once() {
    assert_eq!(get_length(&LengthInput::from("😀")), 1);
    assert_eq!(get_length(&LengthInput::from("a😀b")), 3);
    assert_eq!(get_length_of_json(&json!("😀")).unwrap(), Some(1));
}

#[test]
fn array_length_counts_elements() {
    let numbers = LengthInput::from(ArrayInput::Numbers(vec![1.0, 2.0, 3.0]));
    let bools = LengthInput::from(ArrayInput::Bools(vec![true]));
    let empty = LengthInput::from(ArrayInput::Texts(vec![]));
    assert_eq!(get_length(&numbers), 3);
    assert_eq!(get_length(&bools), 1);
    assert_eq!(get_length(&empty), 0);
}

// ── JSON input ───────────────────────────────────────────────────

#[test]
fn json_string_and_arrays_have_length() {
    assert_eq!(get_length_of_json(&json!("abc")).unwrap(), Some(3));
    assert_eq!(get_length_of_json(&json!([1, 2, 3])).unwrap(), Some(3));
    assert_eq!(get_length_of_json(&json!([])).unwrap(), Some(0));
}

#[test]
fn other_json_values_fall_through_to_none() {
    assert_eq!(get_length_of_json(&json!(42)).unwrap(), None);
    assert_eq!(get_length_of_json(&json!(null)).unwrap(), None);
    assert_eq!(get_length_of_json(&json!(true)).unwrap(), None);
    assert_eq!(get_length_of_json(&json!({"length": 3})).unwrap(), None);
}

#[test]
fn mixed_array_is_rejected() {
    let err = get_length_of_json(&json!(["a", 1])).unwrap_err();
    assert!(matches!(err, Error::HeterogeneousArray { index: 1, .. }));
}
