use drillbook_types::{Book, Scalar};
use tracing::debug;

/// Transforms a scalar according to its variant.
///
/// Numbers are multiplied by 10, strings are uppercased and booleans are
/// negated.
#[must_use]
pub fn format_value(input: &Scalar) -> Scalar {
    debug!("Formatting {} value", input.kind());
    match input {
        Scalar::Number(n) => Scalar::Number(n * 10.0),
        Scalar::Text(s) => Scalar::Text(s.to_uppercase()),
        Scalar::Bool(b) => Scalar::Bool(!b),
    }
}

/// Renders `Title: <t>, Author: <a>, Published: <y>, Available: <Yes|No>`.
#[must_use]
pub fn print_book_details(book: &Book) -> String {
    format!(
        "Title: {}, Author: {}, Published: {}, Available: {}",
        book.title,
        book.author,
        book.published_year,
        if book.is_available { "Yes" } else { "No" }
    )
}
