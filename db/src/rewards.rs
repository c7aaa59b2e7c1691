use common::error::{AppError, Res};
use serde::Serialize;
use sqlx::{Executor, Postgres, prelude::FromRow};
use uuid::Uuid;

use crate::{dtos::ledger::RewardGrant, models::reward::Reward};

pub async fn insert_reward<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    grant: &RewardGrant,
) -> Res<()> {
    sqlx::query(
        r#"
        INSERT INTO rewards (user_id, points, description, name)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(user_id)
    .bind(grant.points)
    .bind(&grant.description)
    .bind(grant.name)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn get_reward_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    reward_id: Uuid,
) -> Res<Option<Reward>> {
    sqlx::query_as::<_, Reward>("SELECT * FROM rewards WHERE id = $1")
        .bind(reward_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Flips one reward to spent. Returns false when it was already spent,
/// so a double redeem loses the race instead of double counting.
pub async fn mark_reward_redeemed<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    reward_id: Uuid,
) -> Res<bool> {
    let result = sqlx::query("UPDATE rewards SET is_available = false WHERE id = $1 AND is_available")
        .bind(reward_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Spends every available reward of one user in a single statement and
/// returns the point values that were flipped. An empty vec means there
/// was nothing to redeem.
pub async fn redeem_all_for_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Vec<i32>> {
    sqlx::query_scalar::<_, i32>(
        r#"
        UPDATE rewards
        SET is_available = false
        WHERE user_id = $1 AND is_available
        RETURNING points
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_available_rewards_by_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Vec<Reward>> {
    sqlx::query_as::<_, Reward>(
        r#"
        SELECT * FROM rewards
        WHERE user_id = $1 AND is_available
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

/// Spendable balance of one user.
pub async fn sum_available_points<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(points), 0) FROM rewards WHERE user_id = $1 AND is_available",
    )
    .bind(user_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// All points ever granted across all users, spent or not.
pub async fn sum_all_points<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(points), 0) FROM rewards")
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

#[derive(Debug, FromRow, Serialize)]
pub struct LeaderboardRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub points: i64,
}

/// Lifetime points per user, highest first. Users with no rewards yet do
/// not appear.
pub async fn leaderboard_totals<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<LeaderboardRow>> {
    sqlx::query_as::<_, LeaderboardRow>(
        r#"
        SELECT u.id, u.email, u.name, COALESCE(SUM(r.points), 0)::BIGINT AS points
        FROM users u
        JOIN rewards r ON r.user_id = u.id
        GROUP BY u.id, u.email, u.name
        ORDER BY points DESC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
