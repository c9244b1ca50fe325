//! List controller: owns the comment list and reconciles it with the remote.
//!
//! # Design
//! The remote accepts writes but never persists them, so the local list is
//! the only source of truth once loaded. A mutation is applied locally only
//! after its remote call succeeds and is never re-fetched afterwards.
//! Creates get a synthetic id (`max + 1`) because the id the remote echoes is
//! not unique.
//!
//! Every state transition publishes a fresh [`ListSnapshot`] to the
//! subscribers. Remote failures end as a notification plus unchanged state;
//! no intent returns an error for them.

use std::collections::HashSet;

use crate::api::CommentApi;
use crate::notify::{Notification, NotificationSink};
use crate::transport::Transport;
use crate::types::{Comment, NewComment, SortMode, SubmitIntent};
use crate::validation::{CommentForm, ValidationErrors};
use crate::view::derive_view;

pub const LOAD_FAILED: &str = "Failed to load comments. Please try again later.";
pub const ADD_SUCCEEDED: &str = "Comment added successfully!";
pub const ADD_FAILED: &str = "Failed to add comment. Please try again.";
pub const UPDATE_SUCCEEDED: &str = "Comment updated successfully!";
pub const UPDATE_FAILED: &str = "Failed to update comment. Please try again.";
pub const DELETE_SUCCEEDED: &str = "Comment deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete comment. Please try again.";

/// Canonical list state. `items` holds no duplicate ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub items: Vec<Comment>,
    pub search_term: String,
    pub sort_mode: SortMode,
    pub loading: bool,
    pub error: Option<String>,
}

/// Immutable picture of the list handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    pub view: Vec<Comment>,
    /// Number of items before filtering.
    pub total: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub sort_mode: SortMode,
}

type Subscriber = Box<dyn FnMut(&ListSnapshot)>;

pub struct ListController<T, N = Vec<Notification>> {
    api: CommentApi<T>,
    state: ListState,
    sink: N,
    subscribers: Vec<Subscriber>,
}

impl<T: Transport, N: NotificationSink> ListController<T, N> {
    pub fn new(api: CommentApi<T>, sink: N) -> Self {
        Self {
            api,
            state: ListState::default(),
            sink,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn items(&self) -> &[Comment] {
        &self.state.items
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    /// Filtered and sorted projection, recomputed on every call.
    pub fn view(&self) -> Vec<Comment> {
        derive_view(&self.state.items, &self.state.search_term, self.state.sort_mode)
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            view: self.view(),
            total: self.state.items.len(),
            loading: self.state.loading,
            error: self.state.error.clone(),
            search_term: self.state.search_term.clone(),
            sort_mode: self.state.sort_mode,
        }
    }

    /// Register a callback that receives a snapshot after every transition.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ListSnapshot) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Fetch the list. On failure the current items are kept and `error` is
    /// set. Can be called again at any time as a manual retry.
    pub fn request_load(&mut self) -> bool {
        self.state.loading = true;
        self.publish();

        let loaded = match self.api.list_comments() {
            Ok(comments) => {
                tracing::info!(count = comments.len(), "loaded comments");
                self.state.items = dedup_by_id(comments);
                self.state.error = None;
                true
            }
            Err(_) => {
                self.state.error = Some(LOAD_FAILED.to_string());
                self.sink.notify(Notification::error(LOAD_FAILED));
                false
            }
        };

        self.state.loading = false;
        self.publish();
        loaded
    }

    /// Create remotely, then prepend locally under a synthetic id.
    pub fn request_add(&mut self, input: NewComment) -> bool {
        match self.api.create_comment(&input) {
            Ok(echo) => {
                let Some(id) = next_id(&self.state.items) else {
                    tracing::error!(remote_id = echo.id, "no id left above the current maximum");
                    self.sink.notify(Notification::error(ADD_FAILED));
                    return false;
                };
                tracing::info!(id, remote_id = echo.id, "comment added");
                self.state.items.insert(0, Comment { id, ..echo });
                self.sink.notify(Notification::success(ADD_SUCCEEDED));
                self.publish();
                true
            }
            Err(_) => {
                self.sink.notify(Notification::error(ADD_FAILED));
                false
            }
        }
    }

    /// Update remotely, then replace the local entry with the submitted
    /// record (the echo is not trusted).
    pub fn request_update(&mut self, comment: Comment) -> bool {
        match self.api.update_comment(&comment) {
            Ok(_) => {
                tracing::info!(id = comment.id, "comment updated");
                if let Some(slot) = self.state.items.iter_mut().find(|c| c.id == comment.id) {
                    *slot = comment;
                }
                self.sink.notify(Notification::success(UPDATE_SUCCEEDED));
                self.publish();
                true
            }
            Err(_) => {
                self.sink.notify(Notification::error(UPDATE_FAILED));
                false
            }
        }
    }

    /// Delete remotely, then drop the id locally. Unknown ids still count as
    /// deleted when the remote says so.
    pub fn request_delete(&mut self, id: u64) -> bool {
        match self.api.delete_comment(id) {
            Ok(()) => {
                tracing::info!(id, "comment deleted");
                self.state.items.retain(|c| c.id != id);
                self.sink.notify(Notification::success(DELETE_SUCCEEDED));
                self.publish();
                true
            }
            Err(_) => {
                self.sink.notify(Notification::error(DELETE_FAILED));
                false
            }
        }
    }

    pub fn dispatch(&mut self, intent: SubmitIntent) -> bool {
        match intent {
            SubmitIntent::Add(input) => self.request_add(input),
            SubmitIntent::Update(comment) => self.request_update(comment),
        }
    }

    /// Validate a dialog form and dispatch it. Invalid forms never reach the
    /// remote.
    pub fn submit(&mut self, form: CommentForm) -> Result<bool, ValidationErrors> {
        let intent = form.into_intent()?;
        Ok(self.dispatch(intent))
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.publish();
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.state.sort_mode = mode;
        self.publish();
    }

    fn publish(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for subscriber in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }
}

/// One past the largest id in `items`, or 1 for an empty list. `None` when
/// the largest id is `u64::MAX`.
pub fn next_id(items: &[Comment]) -> Option<u64> {
    items.iter().map(|c| c.id).max().map_or(Some(1), |max| max.checked_add(1))
}

/// Keep the first occurrence of each id, in order.
fn dedup_by_id(comments: Vec<Comment>) -> Vec<Comment> {
    let mut seen = HashSet::with_capacity(comments.len());
    let total = comments.len();
    let unique: Vec<Comment> = comments.into_iter().filter(|c| seen.insert(c.id)).collect();
    if unique.len() < total {
        tracing::warn!(dropped = total - unique.len(), "remote list repeated comment ids");
    }
    unique
}
