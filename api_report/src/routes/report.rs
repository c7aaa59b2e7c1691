use std::sync::Arc;

use actix_web::{Responder, get, patch, post, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;

use crate::{
    dtos::report::{
        CreateReportRequest, PageQuery, RecentReport, ReportSnapshot, UpdateReportRequest,
    },
    services,
};

/// Submits a new waste report and pays the reporting reward.
///
/// # Input
/// - `claims`: The JWT claims of the authenticated user
/// - `pool`: Database connection pool
/// - `req`: JSON payload `{report: {location, type, amount, imageUrl?, verificationResult?}}`
///
/// # Output
/// - Success: Returns the created report with 201 Created status; the
///   reporter's reward, transaction and notification land atomically with it
/// - Error: Returns 400 Bad Request when a required field is missing or the
///   amount has no numeric quantity
///
/// # Frontend Example
/// ```javascript
/// // Using fetch API
/// const response = await fetch('/api/report/create-report', {
///   method: 'POST',
///   credentials: 'include',
///   headers: {
///     'Content-Type': 'application/json'
///   },
///   body: JSON.stringify({
///     report: {
///       location: 'Main St park',
///       type: 'plastic',
///       amount: '12kg',
///       imageUrl: 'https://img.example/1.jpg',          // optional
///       verificationResult: { confidence: 0.93 }       // optional
///     }
///   })
/// });
///
/// if (response.ok) {
///   const report = await response.json();
///   console.log('Created report:', report);
/// }
/// ```
#[post("/create-report")]
pub async fn post_create_report(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<CreateReportRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let report =
        services::report::create_report(pg_pool, claims.user_id, req.into_inner()).await?;
    Success::created(report)
}

/// Retrieves every user's reports as a collection worklist.
///
/// # Input
/// - `pool`: Database connection pool
/// - `query`: Optional `skip` and `limit`; pagination applies only when both
///   are present
///
/// # Output
/// - Success: Returns `{reports: [...], totalReports: n}`, newest first;
///   items are trimmed snapshots `{id, location, wasteType, amount, date,
///   status, collectorId}`
#[get("/get-reports")]
pub async fn get_reports(
    pool: web::Data<Arc<PgPool>>,
    query: web::Query<PageQuery>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let page = services::report::reports_page(pg_pool, &query).await?;
    Success::ok(page)
}

/// Moves a report one lifecycle step: accept it, complete the collection, or
/// cancel back to Pending.
///
/// # Input
/// - `claims`: The JWT claims of the acting collector
/// - `pool`: Database connection pool
/// - `req`: JSON payload `{reportId, status}`
///
/// # Output
/// - Success: Returns a trimmed snapshot of the updated report
/// - Error: Returns 404 Not Found for an unknown report, 400 Bad Request for
///   a disallowed transition, 409 Conflict when another collector got there
///   first
#[patch("/update-report")]
pub async fn patch_update_report(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<UpdateReportRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let updated =
        services::report::update_report_status(pg_pool, claims.user_id, req.into_inner()).await?;
    Success::ok(ReportSnapshot::from(updated))
}

/// Retrieves the caller's own reports, newest first.
///
/// # Input
/// - `claims`: The JWT claims of the authenticated user
/// - `pool`: Database connection pool
/// - `query`: Optional `skip` and `limit`; pagination applies only when both
///   are present
///
/// # Output
/// - Success: Returns the caller's reports as trimmed snapshots
#[get("/get-recent-report")]
pub async fn get_recent_report(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    query: web::Query<PageQuery>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let reports = services::report::recent_reports(pg_pool, claims.user_id, &query).await?;
    let reports: Vec<RecentReport> = reports.into_iter().map(RecentReport::from).collect();
    Success::ok(reports)
}
