//! Stateless record utilities.
//!
//! Each operation is a pure function over the types in `drillbook-types`:
//! - [`format_value`]: transform a [`Scalar`](drillbook_types::Scalar) by its variant
//! - [`get_length`] / [`get_length_of_json`]: character or element count
//! - [`filter_by_rating`] / [`filter_active_users`]: order-preserving selection
//! - [`print_book_details`]: one-line book summary
//! - [`get_unique_values`] / [`merge_unique`]: first-occurrence deduplicating union
//! - [`calculate_total_price`]: discounted sum over products
//!
//! No operation calls another, mutates its input, or holds state.

mod filter;
mod format;
mod length;
mod pricing;
mod unique;

pub use filter::{filter_active_users, filter_by_rating, RATING_THRESHOLD};
pub use format::{format_value, print_book_details};
pub use length::{get_length, get_length_of_json};
pub use pricing::{calculate_total_price, discounted_subtotal};
pub use unique::{get_unique_values, merge_unique};
