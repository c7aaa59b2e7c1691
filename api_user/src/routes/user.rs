use std::sync::Arc;

use actix_web::{Responder, get, patch, post, route, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;

use crate::{
    dtos::user::{
        MarkNotificationReadRequest, NotificationReadResponse, RedeemRewardRequest,
        SetRewardRequest,
    },
    services,
};

/// Grants the signed-in user a reward directly.
///
/// # Input
/// - `claims`: The JWT claims of the authenticated user
/// - `pool`: Database connection pool
/// - `req`: JSON payload `{points, name}` where name is `report` or `collect`
///
/// # Output
/// - Success: 201 "Reward Set Successfully"
/// - Error: Returns 400 Bad Request for missing fields, negative points or an
///   unknown name
///
/// # Frontend Example
/// ```javascript
/// // Using fetch API
/// const response = await fetch('/api/user/set-reward', {
///   method: 'POST',
///   credentials: 'include',
///   headers: {
///     'Content-Type': 'application/json'
///   },
///   body: JSON.stringify({ points: 25, name: 'collect' })
/// });
///
/// if (response.status === 201) {
///   console.log(await response.text()); // "Reward Set Successfully"
/// }
/// ```
#[post("/set-reward")]
pub async fn post_set_reward(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<SetRewardRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::reward::set_reward(pg_pool, claims.user_id, &req).await?;
    Success::created_text("Reward Set Successfully")
}

/// Redeems one of the caller's rewards.
///
/// # Input
/// - `claims`: The JWT claims of the authenticated user
/// - `pool`: Database connection pool
/// - `req`: JSON payload `{rewardId}`
///
/// # Output
/// - Success: 200 "Reward Redeemed Successfully"
/// - Error: Returns 400 Bad Request for a missing rewardId, 404 Not Found for
///   an unknown reward, 401 Unauthorized for somebody else's reward, 409
///   Conflict when it was already redeemed
#[patch("/redeem-reward")]
pub async fn patch_redeem_reward(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<RedeemRewardRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::reward::redeem_reward(pg_pool, claims.user_id, req.reward_id).await?;
    Success::ok_text("Reward Redeemed Successfully")
}

/// Redeems every available reward of the caller in one batch. Kept reachable
/// via GET as well for older clients.
///
/// # Input
/// - `claims`: The JWT claims of the authenticated user
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: 200 "All Rewards Redeemed Successfully", also when there was
///   nothing to redeem
#[route("/redeem-all-rewards", method = "PATCH", method = "GET")]
pub async fn redeem_all_rewards(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::reward::redeem_all_rewards(pg_pool, claims.user_id).await?;
    Success::ok_text("All Rewards Redeemed Successfully")
}

/// Retrieves the caller's transaction history and available rewards.
///
/// # Input
/// - `claims`: The JWT claims of the authenticated user
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns `{transactions: [...], rewards: [...]}`, both newest
///   first
#[get("/get-transactions-reward")]
pub async fn get_transactions_reward(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let body = services::reward::transactions_and_rewards(pg_pool, claims.user_id).await?;
    Success::ok(body)
}

/// Marks one notification as read.
///
/// # Input
/// - `pool`: Database connection pool
/// - `req`: JSON payload `{notificationId}`
///
/// # Output
/// - Success: Returns `{msg, updatedNotification}`
/// - Error: Returns 404 Not Found for an unknown notification
#[patch("/mark-notification-read")]
pub async fn patch_mark_notification_read(
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<MarkNotificationReadRequest>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let updated =
        services::notification::mark_notification_read(pg_pool, req.notification_id).await?;
    Success::ok(NotificationReadResponse {
        msg: "Notification Marked as Read",
        updated_notification: updated,
    })
}
