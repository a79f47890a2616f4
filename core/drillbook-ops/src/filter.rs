use drillbook_types::{Item, User};
use tracing::debug;

/// Ratings must be strictly above this to pass [`filter_by_rating`].
pub const RATING_THRESHOLD: f64 = 4.0;

/// Items rated above [`RATING_THRESHOLD`], in input order.
#[must_use]
pub fn filter_by_rating(items: &[Item]) -> Vec<Item> {
    let kept: Vec<Item> = items
        .iter()
        .filter(|item| item.rating > RATING_THRESHOLD)
        .cloned()
        .collect();
    debug!("Kept {} of {} items by rating", kept.len(), items.len());
    kept
}

/// Active users, in input order.
#[must_use]
pub fn filter_active_users(users: &[User]) -> Vec<User> {
    let active: Vec<User> = users.iter().filter(|user| user.is_active).cloned().collect();
    debug!("Kept {} of {} users as active", active.len(), users.len());
    active
}
