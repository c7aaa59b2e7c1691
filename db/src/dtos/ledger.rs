use uuid::Uuid;

use crate::models::{reward::RewardKind, transaction::TransactionKind};

/// A reward row to be created alongside a ledger entry.
#[derive(Debug, Clone)]
pub struct RewardGrant {
    pub points: i32,
    pub description: String,
    pub name: RewardKind,
}

/// One ledger-affecting event: an optional reward grant, the transaction that
/// records it, and the notification shown to the user. Built up front so the
/// writes can be applied as a unit inside one database transaction instead of
/// as independent calls.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub user_id: Uuid,
    pub reward: Option<RewardGrant>,
    pub kind: TransactionKind,
    pub amount: i32,
    pub transaction_description: String,
    pub notification_message: String,
}

impl LedgerEntry {
    /// Points earned for reporting or collecting waste. Creates a reward and a
    /// positive transaction for the beneficiary.
    pub fn grant(user_id: Uuid, name: RewardKind, points: i32) -> Self {
        let (kind, transaction_description, activity) = match name {
            RewardKind::Report => (
                TransactionKind::EarnedReport,
                "Points earned for reporting waste",
                "reporting",
            ),
            RewardKind::Collect => (
                TransactionKind::EarnedCollect,
                "Points earned for collecting waste",
                "collection",
            ),
        };

        LedgerEntry {
            user_id,
            reward: Some(RewardGrant {
                points,
                description: format!("points earned for {}ing waste", name.as_str()),
                name,
            }),
            kind,
            amount: points,
            transaction_description: transaction_description.to_string(),
            notification_message: format!(
                "You have received {} points for waste {}",
                points, activity
            ),
        }
    }

    /// A single reward redeemed: no new reward row, a negative transaction.
    pub fn redemption(user_id: Uuid, points: i32) -> Self {
        LedgerEntry {
            user_id,
            reward: None,
            kind: TransactionKind::RedeemedReward,
            amount: -points,
            transaction_description: "Redeemed Points.".to_string(),
            notification_message: format!("You have redeemed {} points.", points),
        }
    }

    /// Every available reward redeemed in one batch, recorded as one
    /// transaction over the summed points.
    pub fn full_redemption(user_id: Uuid, total_points: i32) -> Self {
        LedgerEntry {
            user_id,
            reward: None,
            kind: TransactionKind::RedeemedReward,
            amount: -total_points,
            transaction_description: "Redeemed all Points.".to_string(),
            notification_message: "You have redeemed all your points.".to_string(),
        }
    }
}
