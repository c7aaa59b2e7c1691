use serde::Serialize;
use uuid::Uuid;

/// Community-wide totals shown on the landing page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactData {
    pub reports_submitted: i64,
    /// Kilograms, summed over collected reports.
    pub waste_collected: f64,
    pub tokens_earned: i64,
    /// Kilograms of CO2, one decimal place.
    pub co2_offset: f64,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_info: UserInfo,
    pub points: i64,
    pub level: i64,
}
