use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transaction_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    EarnedReport,
    EarnedCollect,
    RedeemedReward,
}

/// Append-only ledger entry. The sign of `amount` encodes direction, positive
/// for earned points and negative for redemptions.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i32,
    pub description: String,
    pub date: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_to_the_wire_strings() {
        let earned = serde_json::to_string(&TransactionKind::EarnedReport).unwrap();
        let collected = serde_json::to_string(&TransactionKind::EarnedCollect).unwrap();
        let redeemed = serde_json::to_string(&TransactionKind::RedeemedReward).unwrap();
        assert_eq!(earned, "\"earned_report\"");
        assert_eq!(collected, "\"earned_collect\"");
        assert_eq!(redeemed, "\"redeemed_reward\"");
    }

    #[test]
    fn rows_serialize_with_the_legacy_field_names() {
        let user_id = Uuid::new_v4();
        let transaction = Transaction {
            id: Uuid::new_v4(),
            user_id,
            kind: TransactionKind::RedeemedReward,
            amount: -30,
            description: "Redeemed all Points.".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        };
        let json = serde_json::to_value(&transaction).unwrap();
        assert_eq!(json["type"], "redeemed_reward");
        assert_eq!(json["userId"], user_id.to_string());
        assert_eq!(json["amount"], -30);
    }
}
