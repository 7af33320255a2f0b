use chrono::NaiveDate;
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::AeronaveRow;

#[derive(Debug, Clone)]
pub struct CreateAeronave {
    pub model: String,
    pub manufacturer: Option<String>,
    pub registration: Option<String>,
    pub capacity: i32,
    pub max_range_km: Option<i32>,
    pub first_flight: Option<NaiveDate>,
    pub in_service: Option<bool>,
}

/// Fields left as `None` keep their stored value. Nullable columns use
/// `Some(None)` to clear the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAeronave {
    pub model: Option<String>,
    pub manufacturer: Option<Option<String>>,
    pub registration: Option<Option<String>>,
    pub capacity: Option<i32>,
    pub max_range_km: Option<Option<i32>>,
    pub first_flight: Option<Option<NaiveDate>>,
    pub in_service: Option<bool>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<AeronaveRow>> {
    sqlx::query_as::<_, AeronaveRow>(
        r#"
        SELECT id, model, manufacturer, registration, capacity, max_range_km,
               first_flight, in_service, created_at, updated_at
        FROM aeronaves
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<AeronaveRow>> {
    sqlx::query_as::<_, AeronaveRow>(
        r#"
        SELECT id, model, manufacturer, registration, capacity, max_range_km,
               first_flight, in_service, created_at, updated_at
        FROM aeronaves
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateAeronave,
) -> SqlxResult<AeronaveRow> {
    sqlx::query_as::<_, AeronaveRow>(
        r#"
        INSERT INTO aeronaves (model, manufacturer, registration, capacity, max_range_km,
                               first_flight, in_service)
        VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, TRUE))
        RETURNING id, model, manufacturer, registration, capacity, max_range_km,
                  first_flight, in_service, created_at, updated_at
        "#,
    )
    .bind(data.model)
    .bind(data.manufacturer)
    .bind(data.registration)
    .bind(data.capacity)
    .bind(data.max_range_km)
    .bind(data.first_flight)
    .bind(data.in_service)
    .fetch_one(executor)
    .await
}

/// Returns the post-update row, or `None` when no row matches `id`.
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateAeronave,
) -> SqlxResult<Option<AeronaveRow>> {
    sqlx::query_as::<_, AeronaveRow>(
        r#"
        UPDATE aeronaves
        SET model = COALESCE($2, model),
            manufacturer = CASE WHEN $3 THEN $4 ELSE manufacturer END,
            registration = CASE WHEN $5 THEN $6 ELSE registration END,
            capacity = COALESCE($7, capacity),
            max_range_km = CASE WHEN $8 THEN $9 ELSE max_range_km END,
            first_flight = CASE WHEN $10 THEN $11 ELSE first_flight END,
            in_service = COALESCE($12, in_service),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, model, manufacturer, registration, capacity, max_range_km,
                  first_flight, in_service, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.model)
    .bind(data.manufacturer.is_some())
    .bind(data.manufacturer.flatten())
    .bind(data.registration.is_some())
    .bind(data.registration.flatten())
    .bind(data.capacity)
    .bind(data.max_range_km.is_some())
    .bind(data.max_range_km.flatten())
    .bind(data.first_flight.is_some())
    .bind(data.first_flight.flatten())
    .bind(data.in_service)
    .fetch_optional(executor)
    .await
}

/// Returns the deleted row's last state, or `None` when no row matches `id`.
pub async fn delete<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<AeronaveRow>> {
    sqlx::query_as::<_, AeronaveRow>(
        r#"
        DELETE FROM aeronaves
        WHERE id = $1
        RETURNING id, model, manufacturer, registration, capacity, max_range_km,
                  first_flight, in_service, created_at, updated_at
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}
