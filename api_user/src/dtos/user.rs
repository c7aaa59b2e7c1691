use db::models::{notification::Notification, reward::Reward, transaction::Transaction};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Missing keys fall back to zero/empty, which the service treats the same
/// as explicitly missing details.
#[derive(Debug, Deserialize)]
pub struct SetRewardRequest {
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRewardRequest {
    #[serde(default)]
    pub reward_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkNotificationReadRequest {
    pub notification_id: Uuid,
}

/// The caller's full transaction history plus their still-available rewards.
#[derive(Debug, Serialize)]
pub struct TransactionsAndRewards {
    pub transactions: Vec<Transaction>,
    pub rewards: Vec<Reward>,
}

#[derive(Debug, Serialize)]
pub struct NotificationReadResponse {
    pub msg: &'static str,
    #[serde(rename = "updatedNotification")]
    pub updated_notification: Notification,
}
