use async_graphql::ID;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use infra::db::Db;
use infra::models::AeronaveRow;
use infra::repos::aeronaves;

use super::types::AeronaveInput;
use super::validation;
use crate::gql::error::{Action, AeronaveError};

/// Validate and insert a new record. The database assigns the id.
pub async fn create(db: &Db, input: AeronaveInput) -> Result<AeronaveRow, AeronaveError> {
    let data = validation::new_aeronave(input, today())
        .map_err(|e| AeronaveError::Creation(e.into()))?;

    let row = aeronaves::create(db, data)
        .await
        .map_err(|e| AeronaveError::Creation(e.into()))?;

    tracing::info!(id = %row.id, "Aeronave created");
    Ok(row)
}

/// Apply the fields present in `input` and return the post-update record.
pub async fn update(
    db: &Db,
    id: &ID,
    input: AeronaveInput,
) -> Result<AeronaveRow, AeronaveError> {
    let uuid =
        parse_id(id).ok_or_else(|| AeronaveError::not_found(Action::Update, id.as_str()))?;

    let changes = validation::aeronave_changes(input, today())
        .map_err(|e| AeronaveError::Update(e.into()))?;

    let row = aeronaves::update(db, uuid, changes)
        .await
        .map_err(|e| AeronaveError::Update(e.into()))?
        .ok_or_else(|| AeronaveError::not_found(Action::Update, id.as_str()))?;

    tracing::info!(id = %row.id, "Aeronave updated");
    Ok(row)
}

/// Remove a record and return its last state.
pub async fn delete(db: &Db, id: &ID) -> Result<AeronaveRow, AeronaveError> {
    let uuid =
        parse_id(id).ok_or_else(|| AeronaveError::not_found(Action::Delete, id.as_str()))?;

    let row = aeronaves::delete(db, uuid)
        .await
        .map_err(AeronaveError::Deletion)?
        .ok_or_else(|| AeronaveError::not_found(Action::Delete, id.as_str()))?;

    tracing::info!(id = %row.id, "Aeronave deleted");
    Ok(row)
}

/// Ids that are not UUIDs cannot match any stored record.
pub fn parse_id(id: &ID) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
