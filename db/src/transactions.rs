use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::transaction::{Transaction, TransactionKind};

pub async fn insert_transaction<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    kind: TransactionKind,
    amount: i32,
    description: &str,
) -> Res<()> {
    sqlx::query(
        r#"
        INSERT INTO transactions (user_id, type, amount, description)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(user_id)
    .bind(kind)
    .bind(amount)
    .bind(description)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn get_transactions_by_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Vec<Transaction>> {
    sqlx::query_as::<_, Transaction>(
        "SELECT * FROM transactions WHERE user_id = $1 ORDER BY date DESC",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

/// Net balance over the whole history. Redemptions carry negative amounts,
/// so this is earnings minus spend.
pub async fn sum_amounts_by_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(amount), 0) FROM transactions WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
