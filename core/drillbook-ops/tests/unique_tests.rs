use drillbook_ops::{get_unique_values, merge_unique};
use drillbook_types::{Error, UniqueValues};
use pretty_assertions::assert_eq;

// ── get_unique_values ────────────────────────────────────────────

#[test]
fn numbers_merge_in_first_occurrence_order() {
    assert_eq!(
        get_unique_values(&[1.0, 2.0, 2.0, 3.0], &[3.0, 4.0]),
        vec![1.0, 2.0, 3.0, 4.0]
    );
}

#[test]
fn duplicates_within_second_are_removed() {
    assert_eq!(get_unique_values(&["b"], &["a", "a", "b", "c"]), vec!["b", "a", "c"]);
}

#[test]
fn both_empty_yield_empty() {
    let empty: Vec<i64> = get_unique_values(&[], &[]);
    assert!(empty.is_empty());
}

#[test]
fn nan_is_never_a_duplicate() {
    let merged = get_unique_values(&[f64::NAN], &[f64::NAN]);
    assert_eq!(merged.len(), 2);
}

// ── merge_unique ─────────────────────────────────────────────────

#[test]
fn merge_strings() {
    let a = UniqueValues::Texts(vec!["x".into(), "y".into()]);
    let b = UniqueValues::Texts(vec!["y".into(), "z".into()]);
    assert_eq!(
        merge_unique(&a, &b).unwrap(),
        UniqueValues::Texts(vec!["x".into(), "y".into(), "z".into()])
    );
}

#[test]
fn empty_side_adopts_other_type() {
    let empty = UniqueValues::Texts(vec![]);
    let numbers = UniqueValues::Numbers(vec![3.0, 3.0, 4.0]);
    assert_eq!(
        merge_unique(&empty, &numbers).unwrap(),
        UniqueValues::Numbers(vec![3.0, 4.0])
    );
    assert_eq!(
        merge_unique(&numbers, &empty).unwrap(),
        UniqueValues::Numbers(vec![3.0, 4.0])
    );
}

#[test]
fn mixed_types_are_rejected() {
    let a = UniqueValues::Numbers(vec![1.0]);
    let b = UniqueValues::Texts(vec!["1".into()]);
    let err = merge_unique(&a, &b).unwrap_err();
    assert!(matches!(
        err,
        Error::MismatchedElementTypes {
            left: "number",
            right: "string"
        }
    ));
}
