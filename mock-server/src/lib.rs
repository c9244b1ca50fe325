//! Sandbox comment API.
//!
//! Serves a fixed, seeded collection and accepts writes without storing
//! them, the way JSONPlaceholder does: a create echoes the input under the
//! id `len + 1`, an update echoes the body for any seeded id, and a delete
//! succeeds for any id.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const DEFAULT_SEED: usize = 30;
const COMMENTS_PER_POST: u64 = 5;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Write payload. Extra fields such as `id` are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentInput {
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl CommentInput {
    fn with_id(self, id: u64) -> Comment {
        Comment {
            post_id: self.post_id,
            id,
            name: self.name,
            email: self.email,
            body: self.body,
        }
    }
}

/// Read-only; nothing a client sends is ever stored.
pub type Db = Arc<Vec<Comment>>;

/// Deterministic collection with ids `1..=count`, five comments per post.
pub fn seed(count: usize) -> Vec<Comment> {
    (1..=count as u64)
        .map(|id| Comment {
            post_id: (id - 1) / COMMENTS_PER_POST + 1,
            id,
            name: format!("sandbox comment {id}"),
            email: format!("user{id}@sandbox.test"),
            body: format!("body of comment {id}"),
        })
        .collect()
}

pub fn app() -> Router {
    app_with(seed(DEFAULT_SEED))
}

pub fn app_with(comments: Vec<Comment>) -> Router {
    let db: Db = Arc::new(comments);
    Router::new()
        .route("/comments", get(list_comments).post(create_comment))
        .route("/comments/{id}", get(get_comment).put(update_comment).delete(delete_comment))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_comments(State(db): State<Db>) -> Json<Vec<Comment>> {
    tracing::debug!(count = db.len(), "list comments");
    Json(db.to_vec())
}

async fn get_comment(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Comment>, StatusCode> {
    db.iter().find(|c| c.id == id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_comment(
    State(db): State<Db>,
    Json(input): Json<CommentInput>,
) -> (StatusCode, Json<Comment>) {
    let id = db.len() as u64 + 1;
    tracing::debug!(id, "create comment (not persisted)");
    (StatusCode::CREATED, Json(input.with_id(id)))
}

async fn update_comment(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<CommentInput>,
) -> Result<Json<Comment>, StatusCode> {
    if !db.iter().any(|c| c.id == id) {
        tracing::debug!(id, "update of unknown comment");
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    tracing::debug!(id, "update comment (not persisted)");
    Ok(Json(input.with_id(id)))
}

async fn delete_comment(Path(id): Path<u64>) -> Json<Value> {
    tracing::debug!(id, "delete comment (not persisted)");
    Json(json!({}))
}
