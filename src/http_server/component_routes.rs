//! Component HTTP Routes
//!
//! - `POST /components` - validate, index and store a component
//! - `GET /components` - list stored components
//! - `GET /components/:id` - fetch one component

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::components::{accept, AcceptError, ComponentRecord, IdGenerator, OsRngIdGenerator};
use crate::store::{ComponentStore, MemoryStore, StoreError};

// ==================
// Shared State
// ==================

/// Collaborators shared across component handlers
pub struct ComponentsState {
    pub store: Arc<dyn ComponentStore>,
    pub ids: Arc<dyn IdGenerator>,
}

impl ComponentsState {
    /// In-memory store with OS-backed ids
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Use the given store with OS-backed ids
    pub fn with_store(store: Arc<dyn ComponentStore>) -> Self {
        Self {
            store,
            ids: Arc::new(OsRngIdGenerator::new()),
        }
    }

    /// Replace the id generator
    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }
}

impl Default for ComponentsState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct CreateComponentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn error_reply(status: StatusCode, message: impl Into<String>) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: status.as_u16(),
            reason: None,
        }),
    )
}

fn status_from(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl From<AcceptError> for ErrorReply {
    fn from(err: AcceptError) -> Self {
        let status = status_from(err.status_code());
        match err {
            AcceptError::Validation(e) => (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                    code: status.as_u16(),
                    reason: Some(e.reason().to_string()),
                }),
            ),
            AcceptError::Generation(_) => error_reply(status, "id generation failed"),
        }
    }
}

// ==================
// Component Routes
// ==================

/// Create component routes
pub fn component_routes(state: Arc<ComponentsState>) -> Router {
    Router::new()
        .route(
            "/components",
            get(list_components_handler).post(create_component_handler),
        )
        .route("/components/:id", get(get_component_handler))
        .with_state(state)
}

async fn create_component_handler(
    State(state): State<Arc<ComponentsState>>,
    request: Result<Json<CreateComponentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ComponentRecord>), ErrorReply> {
    let Json(request) = request.map_err(|e| {
        tracing::debug!(error = %e, "rejected malformed create request");
        error_reply(StatusCode::BAD_REQUEST, "invalid json")
    })?;

    if request.name.is_empty() || request.code.is_empty() {
        return Err(error_reply(StatusCode::BAD_REQUEST, "name and code required"));
    }

    let record = accept(request.name, request.code, state.ids.as_ref()).map_err(|e| {
        match &e {
            AcceptError::Validation(reason) => {
                tracing::info!(reason = reason.reason(), "component rejected")
            }
            AcceptError::Generation(failure) => {
                tracing::error!(error = %failure, "component id generation failed")
            }
        }
        ErrorReply::from(e)
    })?;

    state.store.create(&record).map_err(|e| match e {
        StoreError::Conflict(name) => {
            tracing::info!(name = %name, "component name already exists");
            error_reply(StatusCode::CONFLICT, "name already exists")
        }
        other => {
            tracing::error!(error = %other, "failed to store component");
            error_reply(StatusCode::INTERNAL_SERVER_ERROR, "server error")
        }
    })?;

    tracing::info!(
        id = %record.id,
        name = %record.name,
        props = record.props_schema.len(),
        "component created"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_components_handler(
    State(state): State<Arc<ComponentsState>>,
) -> Result<Json<Vec<ComponentRecord>>, ErrorReply> {
    let records = state.store.list().map_err(|e| {
        tracing::error!(error = %e, "failed to list components");
        error_reply(StatusCode::INTERNAL_SERVER_ERROR, "server error")
    })?;

    Ok(Json(records))
}

async fn get_component_handler(
    State(state): State<Arc<ComponentsState>>,
    Path(id): Path<String>,
) -> Result<Json<ComponentRecord>, ErrorReply> {
    let record = state.store.get(&id).map_err(|e| match e {
        err @ StoreError::NotFound(_) => error_reply(StatusCode::NOT_FOUND, err.to_string()),
        other => {
            tracing::error!(id = %id, error = %other, "failed to load component");
            error_reply(StatusCode::INTERNAL_SERVER_ERROR, "server error")
        }
    })?;

    Ok(Json(record))
}
