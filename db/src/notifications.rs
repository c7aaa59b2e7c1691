use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::notification::Notification;

pub async fn insert_notification<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    message: &str,
) -> Res<()> {
    sqlx::query("INSERT INTO notifications (user_id, message) VALUES ($1, $2)")
        .bind(user_id)
        .bind(message)
        .execute(executor)
        .await?;

    Ok(())
}

pub async fn get_unread_by_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Vec<Notification>> {
    sqlx::query_as::<_, Notification>(
        r#"
        SELECT * FROM notifications
        WHERE user_id = $1 AND NOT is_read
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

/// Marks one notification read and hands back the updated row, or `None`
/// when no such notification exists.
pub async fn mark_read<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    notification_id: Uuid,
) -> Res<Option<Notification>> {
    sqlx::query_as::<_, Notification>(
        "UPDATE notifications SET is_read = true WHERE id = $1 RETURNING *",
    )
    .bind(notification_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}
