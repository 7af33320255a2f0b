use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct AeronaveRow {
    pub id: Uuid,
    pub model: String,
    pub manufacturer: Option<String>,
    pub registration: Option<String>,
    pub capacity: i32,
    pub max_range_km: Option<i32>,
    pub first_flight: Option<NaiveDate>,
    pub in_service: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
