//! Error types for the comment API client.
//!
//! # Design
//! `ApiError` describes *what* went wrong with a single round-trip. The
//! resource layer wraps it in `TransportError`, which adds *which* operation
//! failed; that is the only error kind callers of `CommentApi` ever see.

use std::fmt;

use thiserror::Error;

/// Failure of a single request/response round-trip.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection, DNS, I/O).
    #[error("network error: {0}")]
    Network(String),
}

/// The logical operation a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list comments",
            Operation::Create => "create comment",
            Operation::Update => "update comment",
            Operation::Delete => "delete comment",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error surfaced by [`CommentApi`](crate::api::CommentApi).
#[derive(Debug, Error)]
#[error("{operation} failed: {source}")]
pub struct TransportError {
    pub operation: Operation,
    #[source]
    pub source: ApiError,
}

impl TransportError {
    pub fn new(operation: Operation, source: ApiError) -> Self {
        Self { operation, source }
    }
}
