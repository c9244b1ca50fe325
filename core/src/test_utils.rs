//! Test helpers: a scripted transport and record factories.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Comment, NewComment};

/// Replays queued responses in order and records every request it sees.
/// Running out of responses yields a network error.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.into(),
        }));
        self
    }

    pub fn respond_json<T: serde::Serialize>(&self, status: u16, value: &T) -> &Self {
        self.respond(status, serde_json::to_string(value).unwrap())
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn methods(&self) -> Vec<HttpMethod> {
        self.requests.borrow().iter().map(|r| r.method).collect()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}

pub fn comment(id: u64, name: &str) -> Comment {
    Comment {
        id,
        post_id: 1,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        body: format!("comment by {name}"),
    }
}

pub fn new_comment(name: &str) -> NewComment {
    NewComment {
        post_id: 1,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        body: format!("comment by {name}"),
    }
}
