use common::error::Res;
use db::models::{notification::Notification, user::User};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn get_user_by_id(pool: &PgPool, user_id: Uuid) -> Res<Option<User>> {
    db::users::get_user_by_id(pool, user_id).await
}

pub async fn unread_notifications(pool: &PgPool, user_id: Uuid) -> Res<Vec<Notification>> {
    db::notifications::get_unread_by_user(pool, user_id).await
}

/// Net sum over the full transaction history, shown at login.
pub async fn net_balance(pool: &PgPool, user_id: Uuid) -> Res<i64> {
    db::transactions::sum_amounts_by_user(pool, user_id).await
}

/// Spendable points, summed over still-available rewards.
pub async fn available_points(pool: &PgPool, user_id: Uuid) -> Res<i64> {
    db::rewards::sum_available_points(pool, user_id).await
}
