use actix_session::Session;
use actix_web::{Responder, get, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::{self, ClaimsSpec, JwtClaims};
use sqlx::PgPool;
use std::sync::Arc;

use crate::dtos::auth::{LoginRequest, PublicUser, SessionResponse, SignUpRequest};
use crate::services;

/// Registers a new user with email, password and display name.
///
/// # Input
/// - `req`: JSON payload containing email, password and name
/// - `pool`: Database connection pool
/// - `config`: Application configuration for JWT generation
/// - `session`: Session cookie the issued token is stored in
///
/// # Output
/// - Success: Returns the created user with 201 Created status; the session
///   cookie carries the token, so the client is signed in right away
/// - Error: Returns 400 Bad Request when a field is missing, 409 Conflict
///   when the email is already taken
///
/// # Frontend Example
/// ```javascript
/// // Using fetch API
/// const response = await fetch('/api/auth/sign-up', {
///   method: 'POST',
///   credentials: 'include', // Important for receiving the session cookie
///   headers: {
///     'Content-Type': 'application/json'
///   },
///   body: JSON.stringify({
///     email: 'user@example.com',
///     password: 'securepassword',
///     name: 'Jane Doe'
///   })
/// });
///
/// if (response.ok) {
///   const data = await response.json();
///   console.log('Registered user:', data.user);
/// }
/// ```
#[post("/sign-up")]
pub async fn post_sign_up(
    req: web::Json<SignUpRequest>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
    session: Session,
) -> Res<impl Responder> {
    let data = req.into_inner();
    if data.email.trim().is_empty()
        || data.password.trim().is_empty()
        || data.name.trim().is_empty()
    {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    let pg_pool: &PgPool = &**pool;
    let user = services::auth::register_user(pg_pool, &data).await?;

    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            email: user.email.clone(),
        },
        &config.jwt_config,
    )?;
    session
        .insert("token", &token)
        .map_err(|_| AppError::Internal("Failed to insert token cookie".to_string()))?;

    Success::created(SessionResponse {
        user: PublicUser::from(&user),
        notification: vec![],
        total_balance: 0,
    })
}

/// Authenticates a user with email and password.
///
/// # Input
/// - `login_data`: JSON payload containing email and password
/// - `config`: Application configuration for JWT generation
/// - `pool`: Database connection pool
/// - `session`: Session cookie the issued token is stored in
///
/// # Output
/// - Success: Returns the user, their unread notifications and their net
///   point balance over the whole transaction history
/// - Error: Returns 404 Not Found for an unknown email, 401 Unauthorized
///   for a wrong password
///
/// # Frontend Example
/// ```javascript
/// // Using fetch API
/// const response = await fetch('/api/auth/login', {
///   method: 'POST',
///   credentials: 'include',
///   headers: {
///     'Content-Type': 'application/json'
///   },
///   body: JSON.stringify({
///     email: 'user@example.com',
///     password: 'securepassword'
///   })
/// });
///
/// if (response.ok) {
///   const data = await response.json();
///   console.log('Logged in user:', data.user);
///   console.log('Unread notifications:', data.notification);
///   console.log('Balance:', data.totalBalance);
/// }
/// ```
#[post("/login")]
pub async fn post_login(
    login_data: web::Json<LoginRequest>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
    session: Session,
) -> Res<impl Responder> {
    let data = login_data.into_inner();
    if data.email.trim().is_empty() || data.password.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let pg_pool: &PgPool = &**pool;
    let user = services::auth::authenticate_user(pg_pool, &data).await?;

    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            email: user.email.clone(),
        },
        &config.jwt_config,
    )?;
    session
        .insert("token", &token)
        .map_err(|_| AppError::Internal("Failed to insert token cookie".to_string()))?;

    let notification = services::user::unread_notifications(pg_pool, user.id).await?;
    let total_balance = services::user::net_balance(pg_pool, user.id).await?;

    Success::ok(SessionResponse {
        user: PublicUser::from(&user),
        notification,
        total_balance,
    })
}

/// Retrieves the signed-in user's profile, unread notifications and
/// spendable point balance.
///
/// # Input
/// - `claims`: The JWT claims extracted from the session cookie
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns the user, unread notifications and `totalBalance` =
///   sum of still-available reward points
/// - Error: Returns 404 Not Found if the user record no longer exists
#[get("/user-info")]
pub async fn get_user_info(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user = services::user::get_user_by_id(pg_pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User Not Found".to_string()))?;

    let notification = services::user::unread_notifications(pg_pool, user.id).await?;
    let total_balance = services::user::available_points(pg_pool, user.id).await?;

    Success::ok(SessionResponse {
        user: PublicUser::from(&user),
        notification,
        total_balance,
    })
}

/// Ends the session by purging the cookie.
#[get("/logout")]
pub async fn get_logout(session: Session) -> Res<impl Responder> {
    session.purge();
    Success::ok_text("Logged Out Successfully")
}
