use db::models::{notification::Notification, user::User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Missing keys deserialize as empty strings so the handlers can answer with
/// their canned field-check message instead of a serde error.
#[derive(Debug, Serialize, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// User shape handed to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        PublicUser {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Body of sign-up, login and user-info responses. `total_balance` means
/// different things per route: net transaction sum on login, spendable
/// points on user-info, always zero for a fresh sign-up.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: PublicUser,
    pub notification: Vec<Notification>,
    pub total_balance: i64,
}
