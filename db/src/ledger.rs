use common::error::Res;
use sqlx::PgConnection;

use crate::{dtos::ledger::LedgerEntry, notifications, rewards, transactions};

/// Writes one ledger entry: the optional reward row, the transaction and
/// the notification. Callers run this inside a transaction together with
/// whatever state change earned or spent the points, so either everything
/// lands or nothing does.
pub async fn apply_entry(conn: &mut PgConnection, entry: &LedgerEntry) -> Res<()> {
    if let Some(grant) = &entry.reward {
        rewards::insert_reward(&mut *conn, entry.user_id, grant).await?;
    }

    transactions::insert_transaction(
        &mut *conn,
        entry.user_id,
        entry.kind,
        entry.amount,
        &entry.transaction_description,
    )
    .await?;

    notifications::insert_notification(&mut *conn, entry.user_id, &entry.notification_message)
        .await?;

    Ok(())
}
