use chrono::NaiveDateTime;
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    dtos::report::{NewReport, PageRequest},
    models::report::{Report, ReportStatus},
};

pub async fn insert_report<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: NewReport,
) -> Res<Report> {
    sqlx::query_as::<_, Report>(
        r#"
        INSERT INTO reports (user_id, location, waste_type, amount, image_url, verification_result)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(&data.location)
    .bind(&data.waste_type)
    .bind(&data.amount)
    .bind(&data.image_url)
    .bind(&data.verification_result)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_report_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    report_id: Uuid,
) -> Res<Option<Report>> {
    sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = $1")
        .bind(report_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Moves a report to `to` only while it still holds `from`. Returns `None`
/// when the row has moved on in the meantime, which callers surface as a
/// conflict; this is what keeps two collectors from both taking the same
/// report.
pub async fn transition_report<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    report_id: Uuid,
    from: ReportStatus,
    to: ReportStatus,
    collector_id: Option<Uuid>,
    collection_date: Option<NaiveDateTime>,
) -> Res<Option<Report>> {
    sqlx::query_as::<_, Report>(
        r#"
        UPDATE reports
        SET status = $1, collector_id = $2, collection_date = $3
        WHERE id = $4 AND status = $5
        RETURNING *
        "#,
    )
    .bind(to)
    .bind(collector_id)
    .bind(collection_date)
    .bind(report_id)
    .bind(from)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

/// All reports newest first, optionally paginated. This is the shared
/// collection worklist, not scoped to one user.
pub async fn get_reports_page<'e, E>(executor: E, page: Option<PageRequest>) -> Res<Vec<Report>>
where
    E: Executor<'e, Database = Postgres>,
{
    let mut qb: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT * FROM reports ORDER BY created_at DESC");
    push_page(&mut qb, page);

    qb.build_query_as::<Report>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

/// One user's own reports newest first, optionally paginated.
pub async fn get_reports_by_user<'e, E>(
    executor: E,
    user_id: Uuid,
    page: Option<PageRequest>,
) -> Res<Vec<Report>>
where
    E: Executor<'e, Database = Postgres>,
{
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM reports WHERE user_id = ");
    qb.push_bind(user_id);
    qb.push(" ORDER BY created_at DESC");
    push_page(&mut qb, page);

    qb.build_query_as::<Report>()
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

fn push_page(qb: &mut QueryBuilder<'_, Postgres>, page: Option<PageRequest>) {
    if let Some(page) = page {
        qb.push(" OFFSET ").push_bind(page.skip.max(0));
        qb.push(" LIMIT ").push_bind(page.limit.max(0));
    }
}

pub async fn count_reports<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports")
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

/// Amount strings of every report that was actually collected. The weights
/// are free text, so the parsing happens in the aggregation code.
pub async fn get_collected_amounts<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        "SELECT amount FROM reports WHERE status = $1 AND collector_id IS NOT NULL",
    )
    .bind(ReportStatus::Collected)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
