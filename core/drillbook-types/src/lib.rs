//! Core type definitions for drillbook.
//!
//! This crate defines the plain data shapes the record utilities operate on:
//! - Closed value unions ([`Scalar`], [`ArrayInput`], [`LengthInput`], [`UniqueValues`])
//! - Fixed-shape records ([`Person`], [`Item`], [`User`], [`Book`], [`Product`])
//!
//! Records carry no behavior beyond field access and formatting. The
//! operations over them live in `drillbook-ops`.

mod records;
mod value;

pub use records::{Book, Item, Person, Product, User};
pub use value::{json_kind, ArrayInput, LengthInput, Scalar, UniqueValues};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when untyped (JSON) input does not fit a declared shape.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The JSON did not deserialize; the serde error is the source.
    #[error("invalid JSON input")]
    Serialization(#[from] serde_json::Error),

    /// An array element has a different type than the first element.
    #[error("array element {index} is {found}, expected {expected} like the first element")]
    HeterogeneousArray {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// An array element has a type the target shape does not accept.
    #[error("array element {index} is {found}; expected {allowed}")]
    UnsupportedElement {
        index: usize,
        found: &'static str,
        allowed: &'static str,
    },

    #[error("expected an array, found {found}")]
    NotAnArray { found: &'static str },

    /// Two sequences that must share an element type do not.
    #[error("cannot combine {left} values with {right} values")]
    MismatchedElementTypes {
        left: &'static str,
        right: &'static str,
    },
}
