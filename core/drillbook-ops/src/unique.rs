use drillbook_types::{Error, Result, UniqueValues};
use tracing::debug;

/// Union of two slices with duplicates removed.
///
/// Order is first occurrence: every distinct element of `first` in order,
/// then the elements of `second` not seen yet. Equality is `PartialEq`, so
/// `f64::NAN` never matches and each NaN is kept.
#[must_use]
pub fn get_unique_values<T: PartialEq + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(first.len() + second.len());
    for value in first.iter().chain(second) {
        if !unique.contains(value) {
            unique.push(value.clone());
        }
    }
    unique
}

/// Deduplicating union of two untyped sequences.
///
/// Both sides must hold the same element type. An empty side has no element
/// type of its own and takes the other side's.
pub fn merge_unique(first: &UniqueValues, second: &UniqueValues) -> Result<UniqueValues> {
    let merged = match (first, second) {
        (UniqueValues::Texts(a), UniqueValues::Texts(b)) => {
            UniqueValues::Texts(get_unique_values(a, b))
        }
        (UniqueValues::Numbers(a), UniqueValues::Numbers(b)) => {
            UniqueValues::Numbers(get_unique_values(a, b))
        }
        (left, right) if left.is_empty() => dedup(right),
        (left, right) if right.is_empty() => dedup(left),
        (left, right) => {
            return Err(Error::MismatchedElementTypes {
                left: left.kind(),
                right: right.kind(),
            });
        }
    };
    debug!(
        "Merged {} and {} values into {} unique",
        first.len(),
        second.len(),
        merged.len()
    );
    Ok(merged)
}

fn dedup(values: &UniqueValues) -> UniqueValues {
    match values {
        UniqueValues::Texts(v) => UniqueValues::Texts(get_unique_values(v, &[])),
        UniqueValues::Numbers(v) => UniqueValues::Numbers(get_unique_values(v, &[])),
    }
}
