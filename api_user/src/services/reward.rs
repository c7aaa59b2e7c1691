use common::error::{AppError, Res};
use db::{
    dtos::ledger::LedgerEntry,
    models::reward::{Reward, RewardKind},
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::user::{SetRewardRequest, TransactionsAndRewards};

/// Grants a self-service reward. Writes the same reward, transaction and
/// notification rows a server-computed grant would.
pub async fn set_reward(pool: &PgPool, user_id: Uuid, req: &SetRewardRequest) -> Res<()> {
    if req.points == 0 || req.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Please provide all the details.".to_string(),
        ));
    }
    if req.points < 0 {
        return Err(AppError::BadRequest("Points can't be negative.".to_string()));
    }
    let kind = RewardKind::parse(&req.name)
        .ok_or_else(|| AppError::BadRequest("Invalid Name".to_string()))?;

    let mut tx = pool.begin().await?;
    db::ledger::apply_entry(&mut *tx, &LedgerEntry::grant(user_id, kind, req.points)).await?;
    tx.commit().await?;

    Ok(())
}

/// Redeems one reward. Flipping `is_available` doubles as the concurrency
/// check, so racing redeems of the same reward cannot double-spend it.
pub async fn redeem_reward(pool: &PgPool, user_id: Uuid, reward_id: Option<Uuid>) -> Res<()> {
    let reward_id = reward_id.ok_or_else(|| {
        AppError::BadRequest("Please provide all the details.".to_string())
    })?;
    let reward = db::rewards::get_reward_by_id(pool, reward_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Reward Not Found".to_string()))?;
    check_redeemable(&reward, user_id)?;

    let mut tx = pool.begin().await?;
    let flipped = db::rewards::mark_reward_redeemed(&mut *tx, reward_id).await?;
    if !flipped {
        return Err(AppError::Conflict(
            "Reward has already been redeemed".to_string(),
        ));
    }
    db::ledger::apply_entry(&mut *tx, &LedgerEntry::redemption(user_id, reward.points)).await?;
    tx.commit().await?;

    Ok(())
}

/// Redeems everything the caller still has available. The point total comes
/// from the flipped rows themselves, never from the client. Nothing available
/// is a quiet no-op.
pub async fn redeem_all_rewards(pool: &PgPool, user_id: Uuid) -> Res<()> {
    let mut tx = pool.begin().await?;
    let flipped_points = db::rewards::redeem_all_for_user(&mut *tx, user_id).await?;
    if !flipped_points.is_empty() {
        let total = total_points(&flipped_points)?;
        db::ledger::apply_entry(&mut *tx, &LedgerEntry::full_redemption(user_id, total)).await?;
    }
    tx.commit().await?;

    Ok(())
}

pub async fn transactions_and_rewards(pool: &PgPool, user_id: Uuid) -> Res<TransactionsAndRewards> {
    let transactions = db::transactions::get_transactions_by_user(pool, user_id).await?;
    let rewards = db::rewards::get_available_rewards_by_user(pool, user_id).await?;
    Ok(TransactionsAndRewards {
        transactions,
        rewards,
    })
}

/// Whether this caller may redeem this reward right now. The conditional
/// update re-checks availability, so a redeem racing past this still loses
/// cleanly instead of double counting.
fn check_redeemable(reward: &Reward, user_id: Uuid) -> Res<()> {
    if reward.user_id != user_id {
        return Err(AppError::Unauthorized(
            "You can only redeem your own rewards".to_string(),
        ));
    }
    if !reward.is_available {
        return Err(AppError::Conflict(
            "Reward has already been redeemed".to_string(),
        ));
    }
    Ok(())
}

/// Total for the single batch transaction. Summed wide and narrowed back,
/// so a pathological point total cannot wrap into a positive ledger amount.
fn total_points(flipped: &[i32]) -> Res<i32> {
    let total: i64 = flipped.iter().map(|points| i64::from(*points)).sum();
    i32::try_from(total)
        .map_err(|_| AppError::Internal("Redeemed point total overflows the ledger".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reward_for(user_id: Uuid, is_available: bool) -> Reward {
        Reward {
            id: Uuid::new_v4(),
            user_id,
            points: 20,
            description: "points earned for collecting waste".to_string(),
            name: RewardKind::Collect,
            is_available,
            created_at: NaiveDate::from_ymd_opt(2025, 3, 10)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn own_available_reward_is_redeemable() {
        let user_id = Uuid::new_v4();
        assert!(check_redeemable(&reward_for(user_id, true), user_id).is_ok());
    }

    #[test]
    fn foreign_reward_is_rejected_as_unauthorized() {
        let owner = Uuid::new_v4();
        let caller = Uuid::new_v4();
        let err = check_redeemable(&reward_for(owner, true), caller).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn second_redeem_of_the_same_reward_conflicts() {
        let user_id = Uuid::new_v4();
        let spent = reward_for(user_id, false);
        let err = check_redeemable(&spent, user_id).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn batch_total_sums_the_flipped_points() {
        assert_eq!(total_points(&[5, 10, 15]).unwrap(), 30);
        assert_eq!(total_points(&[]).unwrap(), 0);
    }

    #[test]
    fn batch_total_refuses_to_wrap() {
        assert!(matches!(
            total_points(&[i32::MAX, i32::MAX]),
            Err(AppError::Internal(_))
        ));
    }
}
