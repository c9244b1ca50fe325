//! Client core for a remote comment collection.
//!
//! # Overview
//! Lists, searches, sorts, creates, edits and deletes comments held by a
//! JSONPlaceholder-style REST resource. The remote is a sandbox: it accepts
//! writes without persisting them, so the local list is reconciled by hand.
//!
//! # Design
//! - `CommentClient` is stateless. Each operation is split into `build_*`
//!   (produces an `HttpRequest`) and `parse_*` (consumes an `HttpResponse`).
//! - A `Transport` executes requests; `UreqTransport` is the default.
//! - `CommentApi` pairs the two and reports every failure to `tracing`
//!   before returning a `TransportError`.
//! - `ListController` owns the list state, derives the filtered/sorted view
//!   and turns remote failures into notifications.
//! - DTOs are defined independently from the sandbox server crate;
//!   integration tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod notify;
pub mod transport;
pub mod types;
pub mod validation;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use api::CommentApi;
pub use client::CommentClient;
pub use config::ClientConfig;
pub use controller::{ListController, ListSnapshot, ListState};
pub use error::{ApiError, Operation, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notify::{Level, LogSink, Notification, NotificationSink};
pub use transport::{Transport, UreqTransport};
pub use types::{Comment, NewComment, SortMode, SubmitIntent};
pub use validation::{CommentForm, ValidationErrors};
pub use view::derive_view;
