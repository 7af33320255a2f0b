//! Error normalization for Aeronave mutations.
//!
//! Every mutation failure reaches the client as one message prefixed by the
//! operation (`Failed to create aeronave: ...`), plus a `code` extension naming
//! the failure kind. The underlying cause stays reachable through `source()`
//! for server-side logging.

use std::fmt;

use async_graphql::ErrorExtensions;
use thiserror::Error;

use super::domains::aeronaves::validation::ValidationError;

/// Why a create or update was rejected.
#[derive(Debug, Error)]
pub enum MutationCause {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Mutations that look a record up by id before touching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Update => write!(f, "update"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AeronaveError {
    #[error("Failed to {action} aeronave: Aeronave with id {id} not found")]
    NotFound { action: Action, id: String },

    #[error("Failed to create aeronave: {0}")]
    Creation(#[source] MutationCause),

    #[error("Failed to update aeronave: {0}")]
    Update(#[source] MutationCause),

    #[error("Failed to delete aeronave: {0}")]
    Deletion(#[source] sqlx::Error),
}

impl AeronaveError {
    pub fn not_found(action: Action, id: impl Into<String>) -> Self {
        AeronaveError::NotFound {
            action,
            id: id.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AeronaveError::NotFound { .. } => "NOT_FOUND",
            AeronaveError::Creation(_) => "CREATION_ERROR",
            AeronaveError::Update(_) => "UPDATE_ERROR",
            AeronaveError::Deletion(_) => "DELETION_ERROR",
        }
    }
}

impl ErrorExtensions for AeronaveError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Log a mutation failure server-side and convert it for the client.
pub fn report(err: AeronaveError) -> async_graphql::Error {
    match std::error::Error::source(&err) {
        Some(cause) => tracing::error!(code = err.code(), cause = ?cause, "{err}"),
        None => tracing::error!(code = err.code(), "{err}"),
    }
    err.extend()
}
