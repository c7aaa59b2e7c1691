use chrono::{NaiveDateTime, Utc};
use common::{
    error::{AppError, Res},
    points::{self, COLLECT_REWARD_RANGE, REPORT_REWARD_RANGE},
};
use db::{
    dtos::{
        ledger::LedgerEntry,
        report::{NewReport, PageRequest},
    },
    models::{
        report::{Report, ReportStatus},
        reward::RewardKind,
    },
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::report::{
    CreateReportRequest, PageQuery, ReportSnapshot, ReportsPage, UpdateReportRequest,
};

/// Creates a report and pays the reporting reward to its author, both inside
/// one database transaction.
pub async fn create_report(pool: &PgPool, user_id: Uuid, req: CreateReportRequest) -> Res<Report> {
    let payload = req
        .report
        .ok_or_else(|| AppError::BadRequest("Report is required".to_string()))?;

    if payload.location.trim().is_empty()
        || payload.waste_type.trim().is_empty()
        || payload.amount.trim().is_empty()
    {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    let quantity = points::parse_quantity(&payload.amount).ok_or_else(|| {
        AppError::BadRequest("Amount must contain a numeric quantity".to_string())
    })?;
    if quantity < 0.0 {
        return Err(AppError::BadRequest("Amount can't be negative".to_string()));
    }

    let (min, max) = REPORT_REWARD_RANGE;
    let reward_points = points::reward_points(quantity, min, max);

    let mut tx = pool.begin().await?;
    let report = db::reports::insert_report(
        &mut *tx,
        NewReport {
            user_id,
            location: payload.location,
            waste_type: payload.waste_type,
            amount: payload.amount,
            image_url: payload.image_url,
            verification_result: payload.verification_result,
        },
    )
    .await?;
    db::ledger::apply_entry(
        &mut *tx,
        &LedgerEntry::grant(user_id, RewardKind::Report, reward_points),
    )
    .await?;
    tx.commit().await?;

    Ok(report)
}

/// Applies one lifecycle step. The status column acts as the concurrency
/// check: if another collector moved the report first, the update matches
/// nothing and the caller gets a 409. Completing a collection pays the
/// collector inside the same transaction.
pub async fn update_report_status(
    pool: &PgPool,
    actor: Uuid,
    req: UpdateReportRequest,
) -> Res<Report> {
    let current = db::reports::get_report_by_id(pool, req.report_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

    if !current.status.can_transition_to(req.status) {
        return Err(AppError::BadRequest(format!(
            "Cannot change report status from {} to {}",
            current.status.as_str(),
            req.status.as_str()
        )));
    }

    let (collector_id, collection_date) = transition_marks(req.status, actor);

    let mut tx = pool.begin().await?;
    let updated = db::reports::transition_report(
        &mut *tx,
        req.report_id,
        current.status,
        req.status,
        collector_id,
        collection_date,
    )
    .await?
    .ok_or_else(|| {
        AppError::Conflict(
            "Report was updated by someone else. Please refresh and try again.".to_string(),
        )
    })?;

    if updated.status == ReportStatus::Collected {
        // unparseable amounts still complete the collection, they just pay
        // the minimum of the range
        let quantity = points::parse_quantity(&updated.amount).unwrap_or(0.0);
        let (min, max) = COLLECT_REWARD_RANGE;
        let reward_points = points::reward_points(quantity, min, max);
        db::ledger::apply_entry(
            &mut *tx,
            &LedgerEntry::grant(actor, RewardKind::Collect, reward_points),
        )
        .await?;
    }
    tx.commit().await?;

    Ok(updated)
}

/// Every user's reports, newest first, with the total count for paging.
pub async fn reports_page(pool: &PgPool, query: &PageQuery) -> Res<ReportsPage> {
    let reports = db::reports::get_reports_page(pool, page_request(query)).await?;
    let total_reports = db::reports::count_reports(pool).await?;
    Ok(ReportsPage {
        reports: reports.into_iter().map(ReportSnapshot::from).collect(),
        total_reports,
    })
}

/// The caller's own reports, newest first.
pub async fn recent_reports(pool: &PgPool, user_id: Uuid, query: &PageQuery) -> Res<Vec<Report>> {
    db::reports::get_reports_by_user(pool, user_id, page_request(query)).await
}

fn page_request(query: &PageQuery) -> Option<PageRequest> {
    match (query.skip, query.limit) {
        (Some(skip), Some(limit)) => Some(PageRequest { skip, limit }),
        _ => None,
    }
}

/// Collector and completion timestamp for a transition target. Cancelling
/// back to Pending clears the collector and releases the report for someone
/// else; only a completed collection carries a date.
fn transition_marks(to: ReportStatus, actor: Uuid) -> (Option<Uuid>, Option<NaiveDateTime>) {
    let collector_id = match to {
        ReportStatus::Pending => None,
        _ => Some(actor),
    };
    let collection_date = match to {
        ReportStatus::Collected => Some(Utc::now().naive_utc()),
        _ => None,
    };
    (collector_id, collection_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_leaves_the_collector_unset() {
        let actor = Uuid::new_v4();

        let (collector, date) = transition_marks(ReportStatus::Pending, actor);
        assert_eq!(collector, None);
        assert_eq!(date, None);

        let (collector, date) = transition_marks(ReportStatus::InProgress, actor);
        assert_eq!(collector, Some(actor));
        assert_eq!(date, None);

        let (collector, date) = transition_marks(ReportStatus::Collected, actor);
        assert_eq!(collector, Some(actor));
        assert!(date.is_some());
    }
}
