//! Stateless HTTP request builder and response parser for the comment API.
//!
//! # Design
//! `CommentClient` holds only its configuration and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Executing the round-trip in between is left to a
//! `Transport`.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Comment, NewComment};

const JSON: &str = "application/json";

/// Synchronous, stateless client for the comment collection.
#[derive(Debug, Clone)]
pub struct CommentClient {
    base_url: String,
    list_limit: usize,
}

impl CommentClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_config(&ClientConfig::new(base_url))
    }

    pub fn with_config(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            list_limit: config.list_limit,
        }
    }

    pub fn build_list_comments(&self) -> HttpRequest {
        self.request(HttpMethod::Get, format!("{}/comments", self.base_url), None)
    }

    pub fn build_create_comment(&self, input: &NewComment) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(self.request(HttpMethod::Post, format!("{}/comments", self.base_url), Some(body)))
    }

    pub fn build_update_comment(&self, comment: &Comment) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(comment).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(self.request(
            HttpMethod::Put,
            format!("{}/comments/{}", self.base_url, comment.id),
            Some(body),
        ))
    }

    pub fn build_delete_comment(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("{}/comments/{id}", self.base_url), None)
    }

    /// Parse the collection and keep the first `list_limit` entries in
    /// server order.
    pub fn parse_list_comments(&self, response: HttpResponse) -> Result<Vec<Comment>, ApiError> {
        check_status(&response)?;
        let mut comments: Vec<Comment> =
            serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        comments.truncate(self.list_limit);
        Ok(comments)
    }

    /// The returned `id` is whatever the remote echoed; the sandbox does not
    /// assign a usable one.
    pub fn parse_create_comment(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_comment(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Any 2xx counts as deleted; the body is ignored.
    pub fn parse_delete_comment(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("accept".to_string(), JSON.to_string())];
        if body.is_some() {
            headers.push(("content-type".to_string(), JSON.to_string()));
        }
        HttpRequest {
            method,
            path,
            headers,
            body,
        }
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
