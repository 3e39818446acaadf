//! Record-Storage API Client
//!
//! Frontend bindings to the hosted table that persists todos. The wire
//! shape is `{ records: [ { id, fields: { title, isCompleted } } ] }` in
//! both directions; `fields` is flattened beside its record id on the way
//! in, and `isCompleted` defaults to false when the remote cell is empty.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TableConfig;
use crate::models::Todo;

/// Failure of a remote call, reduced to one display string for the UI
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; the message is the bare status code
    #[error("{0}")]
    Status(u16),
    /// Network-level or decoding failure, propagating its own message
    #[error("{0}")]
    Network(String),
    #[error("create returned {0} records, expected exactly 1")]
    UnexpectedRecordCount(usize),
    #[error("missing configuration value: {0}")]
    MissingConfig(&'static str),
}

// ========================
// Wire Types
// ========================

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordFields {
    title: String,
    #[serde(rename = "isCompleted", default)]
    is_completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TodoRecord {
    id: String,
    fields: RecordFields,
}

/// Response body shared by the read and create endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsResponse {
    records: Vec<TodoRecord>,
}

#[derive(Serialize)]
struct NewRecord {
    fields: RecordFields,
}

#[derive(Serialize)]
struct CreatePayload {
    records: Vec<NewRecord>,
}

// ========================
// Normalization
// ========================

fn flatten(record: TodoRecord) -> Todo {
    Todo {
        id: record.id,
        title: record.fields.title,
        is_completed: record.fields.is_completed,
    }
}

/// Flatten a read response into the local collection shape
pub fn todos_from_response(response: RecordsResponse) -> Vec<Todo> {
    response.records.into_iter().map(flatten).collect()
}

/// Extract the single record a create response must carry
pub fn created_todo(response: RecordsResponse) -> Result<Todo, ApiError> {
    if response.records.len() != 1 {
        return Err(ApiError::UnexpectedRecordCount(response.records.len()));
    }
    let record = response
        .records
        .into_iter()
        .next()
        .ok_or(ApiError::UnexpectedRecordCount(0))?;
    Ok(flatten(record))
}

// ========================
// Settling
// ========================

/// Where a finished remote call leaves the root's state
#[derive(Debug, Clone, PartialEq)]
pub struct Settled<T> {
    /// Payload to apply on success
    pub value: Option<T>,
    /// Message to render on failure
    pub error_message: Option<String>,
    /// The corresponding in-flight flag, down in every case
    pub in_flight: bool,
}

/// Reduce a finished call to state updates. The in-flight flag comes
/// down whether the call succeeded or failed; a failure carries no
/// payload.
pub fn settle<T>(result: Result<T, ApiError>) -> Settled<T> {
    match result {
        Ok(value) => Settled {
            value: Some(value),
            error_message: None,
            in_flight: false,
        },
        Err(e) => Settled {
            value: None,
            error_message: Some(e.to_string()),
            in_flight: false,
        },
    }
}

// ========================
// Remote Calls
// ========================

/// Fetch every todo record from the remote table
pub async fn fetch_todos(config: &TableConfig) -> Result<Vec<Todo>, ApiError> {
    let response = Request::get(&config.endpoint())
        .header("Authorization", &config.bearer())
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let body: RecordsResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    Ok(todos_from_response(body))
}

/// Create one todo record; the returned record's id is authoritative
pub async fn create_todo(config: &TableConfig, title: &str) -> Result<Todo, ApiError> {
    let payload = CreatePayload {
        records: vec![NewRecord {
            fields: RecordFields {
                title: title.to_string(),
                is_completed: false,
            },
        }],
    };

    let response = Request::post(&config.endpoint())
        .header("Authorization", &config.bearer())
        .json(&payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let body: RecordsResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    created_todo(body)
}
