//! Requests that are answered or rejected before any query reaches the database.

mod common;

use serde_json::json;

use common::{execute_graphql, first_error, has_errors, offline_schema};

#[tokio::test]
async fn sdl_exposes_the_five_operations() {
    let sdl = offline_schema().sdl();

    for signature in [
        "aeronaves: [Aeronave!]!",
        "aeronave(id: ID!): Aeronave",
        "createAeronave(aeronave: AeronaveInput!): Aeronave",
        "updateAeronave(id: ID!, aeronave: AeronaveInput!): Aeronave",
        "deleteAeronave(id: ID!): Aeronave",
    ] {
        let line = format!("{signature}\n");
        assert!(sdl.contains(&line), "SDL should contain `{signature}`:\n{sdl}");
    }

    assert!(sdl.contains("input AeronaveInput"));
    assert!(sdl.contains("maxRangeKm: Int"));
}

#[tokio::test]
async fn create_without_required_fields_is_a_creation_error() {
    let schema = offline_schema();

    let response = execute_graphql(
        &schema,
        r#"mutation { createAeronave(aeronave: { manufacturer: "Airbus" }) { id } }"#,
        None,
    )
    .await;

    let (message, code) = first_error(&response);
    assert_eq!(
        message,
        "Failed to create aeronave: Validation failed: model is required, capacity is required"
    );
    assert_eq!(code, "CREATION_ERROR");
    assert!(response["data"].is_null());
}

#[tokio::test]
async fn create_reports_every_violated_field() {
    let schema = offline_schema();

    let response = execute_graphql(
        &schema,
        r#"
        mutation Create($input: AeronaveInput!) {
            createAeronave(aeronave: $input) { id }
        }
        "#,
        Some(json!({
            "input": {
                "model": "A320",
                "capacity": 0,
                "registration": "pr-abc",
                "firstFlight": "2999-01-01"
            }
        })),
    )
    .await;

    let (message, code) = first_error(&response);
    assert_eq!(code, "CREATION_ERROR");
    assert!(message.starts_with("Failed to create aeronave: Validation failed: "));
    assert!(message.contains("capacity must be between 1 and 1000"));
    assert!(message.contains("registration must be"));
    assert!(message.contains("firstFlight cannot be in the future"));
}

#[tokio::test]
async fn update_with_unknown_id_is_not_found() {
    let schema = offline_schema();

    let response = execute_graphql(
        &schema,
        r#"mutation { updateAeronave(id: "nonexistent", aeronave: { capacity: 10 }) { id } }"#,
        None,
    )
    .await;

    let (message, code) = first_error(&response);
    assert_eq!(
        message,
        "Failed to update aeronave: Aeronave with id nonexistent not found"
    );
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn update_with_invalid_payload_is_an_update_error() {
    let schema = offline_schema();

    let response = execute_graphql(
        &schema,
        r#"
        mutation {
            updateAeronave(
                id: "5f2b8a7e-3c1d-4e6f-9a0b-1c2d3e4f5a6b",
                aeronave: { model: "   ", capacity: 5000 }
            ) { id }
        }
        "#,
        None,
    )
    .await;

    let (message, code) = first_error(&response);
    assert_eq!(
        message,
        "Failed to update aeronave: Validation failed: model cannot be blank, capacity must be between 1 and 1000"
    );
    assert_eq!(code, "UPDATE_ERROR");
}

#[tokio::test]
async fn delete_with_unknown_id_is_not_found() {
    let schema = offline_schema();

    let response = execute_graphql(
        &schema,
        r#"mutation { deleteAeronave(id: "abc123") { id } }"#,
        None,
    )
    .await;

    let (message, code) = first_error(&response);
    assert_eq!(
        message,
        "Failed to delete aeronave: Aeronave with id abc123 not found"
    );
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn get_by_malformed_id_is_null() {
    let schema = offline_schema();

    let response = execute_graphql(
        &schema,
        r#"query { aeronave(id: "not-a-uuid") { id model } }"#,
        None,
    )
    .await;

    assert!(!has_errors(&response), "unexpected errors: {response}");
    assert!(response["data"]["aeronave"].is_null());
}

#[tokio::test]
async fn update_cannot_null_required_fields() {
    let schema = offline_schema();

    let response = execute_graphql(
        &schema,
        r#"
        mutation {
            updateAeronave(
                id: "5f2b8a7e-3c1d-4e6f-9a0b-1c2d3e4f5a6b",
                aeronave: { model: null, capacity: null, manufacturer: null }
            ) { id }
        }
        "#,
        None,
    )
    .await;

    let (message, code) = first_error(&response);
    assert_eq!(
        message,
        "Failed to update aeronave: Validation failed: model cannot be null, capacity cannot be null"
    );
    assert_eq!(code, "UPDATE_ERROR");
}

#[tokio::test]
async fn create_treats_null_model_as_missing() {
    let schema = offline_schema();

    let response = execute_graphql(
        &schema,
        r#"mutation { createAeronave(aeronave: { model: null, capacity: 10, registration: null }) { id } }"#,
        None,
    )
    .await;

    let (message, code) = first_error(&response);
    assert_eq!(
        message,
        "Failed to create aeronave: Validation failed: model is required"
    );
    assert_eq!(code, "CREATION_ERROR");
}
