use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a reward was granted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reward_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    Report,
    Collect,
}

impl RewardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardKind::Report => "report",
            RewardKind::Collect => "collect",
        }
    }

    /// Parses a client-supplied name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "report" => Some(RewardKind::Report),
            "collect" => Some(RewardKind::Collect),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: Uuid,
    pub user_id: Uuid,
    pub points: i32,
    #[serde(rename = "desc")]
    pub description: String,
    pub name: RewardKind,
    /// Flips to false on redemption and never back.
    pub is_available: bool,
    pub created_at: NaiveDateTime,
}
