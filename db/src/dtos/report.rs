use sqlx::types::JsonValue;
use uuid::Uuid;

pub struct NewReport {
    pub user_id: Uuid,
    pub location: String,
    pub waste_type: String,
    pub amount: String,
    pub image_url: Option<String>,
    pub verification_result: Option<JsonValue>,
}

/// OFFSET/LIMIT pair for paginated listings.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub skip: i64,
    pub limit: i64,
}
