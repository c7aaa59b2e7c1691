use common::error::{AppError, Res};
use db::models::notification::Notification;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn mark_notification_read(pool: &PgPool, notification_id: Uuid) -> Res<Notification> {
    db::notifications::mark_read(pool, notification_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No such Notification found".to_string()))
}
