use async_graphql::{InputObject, MaybeUndefined, SimpleObject, ID};
use chrono::{DateTime, NaiveDate, Utc};

use infra::models::AeronaveRow;

/// An aircraft record.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct Aeronave {
    pub id: ID,
    pub model: String,
    pub manufacturer: Option<String>,
    /// Tail number, e.g. `PR-ABC`.
    pub registration: Option<String>,
    /// Passenger seats.
    pub capacity: i32,
    pub max_range_km: Option<i32>,
    pub first_flight: Option<NaiveDate>,
    pub in_service: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AeronaveRow> for Aeronave {
    fn from(row: AeronaveRow) -> Self {
        Self {
            id: row.id.into(),
            model: row.model,
            manufacturer: row.manufacturer,
            registration: row.registration,
            capacity: row.capacity,
            max_range_km: row.max_range_km,
            first_flight: row.first_flight,
            in_service: row.in_service,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Payload for `createAeronave` and `updateAeronave`.
///
/// Every field is optional at the schema level: creation requires `model` and
/// `capacity`, updates only touch the fields that are present. An explicit
/// `null` in an update clears the field; `model`, `capacity` and `inService`
/// cannot be cleared.
#[derive(InputObject, Clone, Debug, Default)]
pub struct AeronaveInput {
    pub model: MaybeUndefined<String>,
    pub manufacturer: MaybeUndefined<String>,
    pub registration: MaybeUndefined<String>,
    pub capacity: MaybeUndefined<i32>,
    pub max_range_km: MaybeUndefined<i32>,
    pub first_flight: MaybeUndefined<NaiveDate>,
    pub in_service: MaybeUndefined<bool>,
}
