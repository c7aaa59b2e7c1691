use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::JsonValue;
use uuid::Uuid;

/// Waste report lifecycle states.
///
/// The wire and database representations are the historical strings, note the
/// inconsistent casing of `in_progress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "report_status")]
pub enum ReportStatus {
    #[sqlx(rename = "Pending")]
    Pending,
    #[serde(rename = "in_progress")]
    #[sqlx(rename = "in_progress")]
    InProgress,
    #[sqlx(rename = "Collected")]
    Collected,
}

/// The allowed (from, to) status pairs. Everything else is rejected: a report
/// moves forward Pending -> in_progress -> Collected, a collector may cancel
/// back to Pending, and Collected is terminal.
pub const ALLOWED_TRANSITIONS: &[(ReportStatus, ReportStatus)] = &[
    (ReportStatus::Pending, ReportStatus::InProgress),
    (ReportStatus::InProgress, ReportStatus::Collected),
    (ReportStatus::InProgress, ReportStatus::Pending),
];

impl ReportStatus {
    pub fn can_transition_to(self, next: ReportStatus) -> bool {
        ALLOWED_TRANSITIONS.contains(&(self, next))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::InProgress => "in_progress",
            ReportStatus::Collected => "Collected",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub user_id: Uuid,
    pub location: String,
    pub waste_type: String,
    /// Free text with an embedded unit, e.g. "12kg".
    pub amount: String,
    pub image_url: Option<String>,
    /// Classification payload from the client-side AI call, stored verbatim.
    pub verification_result: Option<JsonValue>,
    pub status: ReportStatus,
    /// Set when a collector takes the report, null while Pending.
    pub collector_id: Option<Uuid>,
    pub collection_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}
