use std::sync::Arc;

use actix_web::{Responder, get, web};
use common::{error::Res, http::Success};
use sqlx::PgPool;

use crate::services;

/// Retrieves community-wide impact totals. Public, no session required.
///
/// # Input
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns `{reportsSubmitted, wasteCollected, tokensEarned,
///   co2Offset}`
#[get("/impact-data")]
pub async fn get_impact_data(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let data = services::impact::impact_data(pg_pool).await?;
    Success::ok(data)
}

/// Retrieves the point leaderboard. Public, no session required.
///
/// # Input
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns `[{userInfo, points, level}]`, highest first
#[get("/leaderboard-data")]
pub async fn get_leaderboard_data(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let entries = services::impact::leaderboard(pg_pool).await?;
    Success::ok(entries)
}
