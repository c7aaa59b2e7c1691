use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use common::error::{AppError, Res};
use db::{dtos::user::NewUser, models::user::User};
use sqlx::PgPool;

use crate::dtos::auth::{LoginRequest, SignUpRequest};

/// Registers a new user with a freshly hashed password.
/// Returns 409 if the email is already taken.
///
/// # Arguments
///
/// * `pool` - A reference to the database connection pool.
/// * `req` - The sign-up data.
///
/// # Returns
///
/// A `Result` containing the created `User` or an `AppError` if an error occurs.
pub async fn register_user(pool: &PgPool, req: &SignUpRequest) -> Res<User> {
    let email_exists = db::users::exists_user_by_email(pool, &req.email).await?;
    if email_exists {
        return Err(AppError::Conflict("User with email Already exists".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal("Failed to hash password".to_string()))?
        .to_string();

    db::users::insert_user(
        pool,
        NewUser {
            email: req.email.clone(),
            name: req.name.clone(),
            password_hash,
        },
    )
    .await
}

/// Authenticates an existing user.
/// If the user does not exist, returns 404.
/// If the password does not match the stored hash, returns 401.
///
/// # Arguments
///
/// * `pool` - A reference to the database connection pool.
/// * `login_data` - The login data.
///
/// # Returns
///
/// A `Result` containing the `User` object or an `AppError` if an error occurs.
pub async fn authenticate_user(pool: &PgPool, login_data: &LoginRequest) -> Res<User> {
    let user = db::users::get_user_by_email(pool, &login_data.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal("Stored password hash is malformed".to_string()))?;
    let is_valid = Argon2::default()
        .verify_password(login_data.password.as_bytes(), &parsed_hash)
        .is_ok();

    if is_valid {
        Ok(user)
    } else {
        Err(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}
