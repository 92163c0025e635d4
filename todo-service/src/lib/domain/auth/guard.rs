use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Whether `user` may mutate the account identified by `target`.
///
/// Only the account holder may change or delete their own account.
pub fn authorize(user: &User, target: &UserId) -> bool {
    user.id == *target
}
