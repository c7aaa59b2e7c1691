use chrono::NaiveDateTime;
use db::models::report::{Report, ReportStatus};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Body wrapper the client sends: `{"report": {...}}`. The wrapper is
/// optional at the serde level so its absence maps to a clean 400 instead of
/// a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateReportRequest {
    #[serde(default)]
    pub report: Option<ReportPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub location: String,
    /// Wire name `type`, stored as `waste_type`.
    #[serde(rename = "type")]
    pub waste_type: String,
    pub amount: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Classification payload from the client-side AI call, kept verbatim.
    #[serde(default)]
    pub verification_result: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportRequest {
    pub report_id: Uuid,
    pub status: ReportStatus,
}

/// Pagination applies only when both parameters are present.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Trimmed report shape returned from status updates.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub id: Uuid,
    pub location: String,
    pub waste_type: String,
    pub amount: String,
    pub date: NaiveDateTime,
    pub status: ReportStatus,
    pub collector_id: Option<Uuid>,
}

impl From<Report> for ReportSnapshot {
    fn from(report: Report) -> Self {
        ReportSnapshot {
            id: report.id,
            location: report.location,
            waste_type: report.waste_type,
            amount: report.amount,
            date: report.created_at,
            status: report.status,
            collector_id: report.collector_id,
        }
    }
}

/// One page of the collection worklist. Items are trimmed to the snapshot
/// shape the collect view reads, full rows stay server-side.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsPage {
    pub reports: Vec<ReportSnapshot>,
    pub total_reports: i64,
}

/// Trimmed shape for the caller's own report history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentReport {
    pub id: Uuid,
    pub location: String,
    pub waste_type: String,
    pub amount: String,
    pub created_at: NaiveDateTime,
}

impl From<Report> for RecentReport {
    fn from(report: Report) -> Self {
        RecentReport {
            id: report.id,
            location: report.location,
            waste_type: report.waste_type,
            amount: report.amount,
            created_at: report.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_maps_type_onto_waste_type() {
        let body = r#"{"report":{"location":"Main St park","type":"plastic","amount":"12kg"}}"#;
        let parsed: CreateReportRequest = serde_json::from_str(body).unwrap();
        let report = parsed.report.unwrap();
        assert_eq!(report.waste_type, "plastic");
        assert_eq!(report.amount, "12kg");
        assert!(report.image_url.is_none());
        assert!(report.verification_result.is_none());
    }

    #[test]
    fn create_body_tolerates_a_missing_wrapper() {
        let parsed: CreateReportRequest = serde_json::from_str("{}").unwrap();
        assert!(parsed.report.is_none());
    }

    #[test]
    fn create_body_accepts_the_optional_fields() {
        let body = r#"{
            "report": {
                "location": "Main St park",
                "type": "plastic",
                "amount": "12kg",
                "imageUrl": "https://img.example/1.jpg",
                "verificationResult": {"wasteType": "plastic", "confidence": 0.93}
            }
        }"#;
        let parsed: CreateReportRequest = serde_json::from_str(body).unwrap();
        let report = parsed.report.unwrap();
        assert_eq!(
            report.image_url.as_deref(),
            Some("https://img.example/1.jpg")
        );
        assert_eq!(report.verification_result.unwrap()["confidence"], 0.93);
    }

    #[test]
    fn update_body_uses_camel_case_and_status_strings() {
        let body = r#"{"reportId":"7f0f3f76-6f2c-4b70-a53e-6f6e8e4a3a21","status":"in_progress"}"#;
        let parsed: UpdateReportRequest = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status, ReportStatus::InProgress);
    }

    fn sample_report() -> Report {
        Report {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            location: "Main St park".to_string(),
            waste_type: "plastic".to_string(),
            amount: "12kg".to_string(),
            image_url: None,
            verification_result: None,
            status: ReportStatus::Pending,
            collector_id: None,
            collection_date: None,
            created_at: chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn snapshot_serializes_created_at_as_date() {
        let json = serde_json::to_value(ReportSnapshot::from(sample_report())).unwrap();
        assert!(json.get("date").is_some());
        assert!(json.get("createdAt").is_none());
        assert_eq!(json["wasteType"], "plastic");
        assert_eq!(json["status"], "Pending");
    }

    #[test]
    fn worklist_page_items_are_trimmed_to_the_snapshot_shape() {
        let page = ReportsPage {
            reports: vec![ReportSnapshot::from(sample_report())],
            total_reports: 1,
        };

        let json = serde_json::to_value(&page).unwrap();
        let item = &json["reports"][0];
        assert!(item.get("date").is_some());
        assert!(item.get("createdAt").is_none());
        assert!(item.get("userId").is_none());
        assert!(item.get("imageUrl").is_none());
        assert!(item.get("verificationResult").is_none());
        assert_eq!(json["totalReports"], 1);
    }
}
