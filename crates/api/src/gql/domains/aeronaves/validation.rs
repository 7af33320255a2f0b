use async_graphql::MaybeUndefined;
use chrono::NaiveDate;
use thiserror::Error;

use infra::repos::{CreateAeronave, UpdateAeronave};

use super::types::AeronaveInput;

pub const MAX_TEXT_LEN: usize = 100;
pub const CAPACITY_RANGE: (i32, i32) = (1, 1000);
pub const MAX_RANGE_KM: i32 = 20_000;

/// One or more field constraints were violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", .violations.join(", "))]
pub struct ValidationError {
    pub violations: Vec<String>,
}

/// Validate a creation payload. `model` and `capacity` are required; a `null`
/// optional field is the same as leaving it out.
pub fn new_aeronave(
    input: AeronaveInput,
    today: NaiveDate,
) -> Result<CreateAeronave, ValidationError> {
    let mut violations = Vec::new();
    if value(&input.model).is_none() {
        violations.push("model is required".to_string());
    }
    if value(&input.capacity).is_none() {
        violations.push("capacity is required".to_string());
    }
    violations.extend(check_fields(&input, today));

    match (into_option(input.model), into_option(input.capacity)) {
        (Some(model), Some(capacity)) if violations.is_empty() => Ok(CreateAeronave {
            model,
            manufacturer: into_option(input.manufacturer),
            registration: into_option(input.registration),
            capacity,
            max_range_km: into_option(input.max_range_km),
            first_flight: into_option(input.first_flight),
            in_service: into_option(input.in_service),
        }),
        _ => Err(ValidationError { violations }),
    }
}

/// Validate the fields present in an update payload. Explicit `null` clears a
/// nullable field and is rejected for the required ones.
pub fn aeronave_changes(
    input: AeronaveInput,
    today: NaiveDate,
) -> Result<UpdateAeronave, ValidationError> {
    let mut violations = Vec::new();
    for (field, is_null) in [
        ("model", input.model.is_null()),
        ("capacity", input.capacity.is_null()),
        ("inService", input.in_service.is_null()),
    ] {
        if is_null {
            violations.push(format!("{field} cannot be null"));
        }
    }
    violations.extend(check_fields(&input, today));
    if !violations.is_empty() {
        return Err(ValidationError { violations });
    }

    Ok(UpdateAeronave {
        model: into_option(input.model),
        manufacturer: into_patch(input.manufacturer),
        registration: into_patch(input.registration),
        capacity: into_option(input.capacity),
        max_range_km: into_patch(input.max_range_km),
        first_flight: into_patch(input.first_flight),
        in_service: into_option(input.in_service),
    })
}

fn check_fields(input: &AeronaveInput, today: NaiveDate) -> Vec<String> {
    let mut violations = Vec::new();

    if let Some(model) = value(&input.model) {
        check_text("model", model, &mut violations);
    }
    if let Some(manufacturer) = value(&input.manufacturer) {
        check_text("manufacturer", manufacturer, &mut violations);
    }
    if let Some(registration) = value(&input.registration) {
        if !is_registration(registration) {
            violations.push(
                "registration must be 2 to 10 uppercase letters, digits or hyphens".to_string(),
            );
        }
    }
    if let Some(&capacity) = value(&input.capacity) {
        let (min, max) = CAPACITY_RANGE;
        if !(min..=max).contains(&capacity) {
            violations.push(format!("capacity must be between {min} and {max}"));
        }
    }
    if let Some(range) = value(&input.max_range_km) {
        if !(0..=MAX_RANGE_KM).contains(range) {
            violations.push(format!("maxRangeKm must be between 0 and {MAX_RANGE_KM}"));
        }
    }
    if let Some(&first_flight) = value(&input.first_flight) {
        if first_flight > today {
            violations.push("firstFlight cannot be in the future".to_string());
        }
    }

    violations
}

fn check_text(field: &str, value: &str, violations: &mut Vec<String>) {
    if value.trim().is_empty() {
        violations.push(format!("{field} cannot be blank"));
    } else if value.chars().count() > MAX_TEXT_LEN {
        violations.push(format!("{field} cannot exceed {MAX_TEXT_LEN} characters"));
    }
}

fn is_registration(value: &str) -> bool {
    (2..=10).contains(&value.len())
        && value
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
}

fn value<T>(field: &MaybeUndefined<T>) -> Option<&T> {
    match field {
        MaybeUndefined::Value(v) => Some(v),
        MaybeUndefined::Null | MaybeUndefined::Undefined => None,
    }
}

fn into_option<T>(field: MaybeUndefined<T>) -> Option<T> {
    match field {
        MaybeUndefined::Value(v) => Some(v),
        MaybeUndefined::Null | MaybeUndefined::Undefined => None,
    }
}

/// `None` keeps the stored value, `Some(None)` clears it.
fn into_patch<T>(field: MaybeUndefined<T>) -> Option<Option<T>> {
    match field {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}
