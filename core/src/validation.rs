//! Comment form validation and intent resolution.
//!
//! A form without an id is a new comment; a form carrying an id edits the
//! record with that id.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Comment, NewComment, SubmitIntent};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

pub const DEFAULT_POST_ID: u64 = 1;

/// Raw values entered in the add/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentForm {
    pub id: Option<u64>,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl Default for CommentForm {
    fn default() -> Self {
        Self {
            id: None,
            post_id: DEFAULT_POST_ID,
            name: String::new(),
            email: String::new(),
            body: String::new(),
        }
    }
}

/// Per-field messages; `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub body: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.body.is_none()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [self.name, self.email, self.body].into_iter().flatten().collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl CommentForm {
    /// Form pre-filled from an existing record.
    pub fn edit(comment: &Comment) -> Self {
        Self {
            id: Some(comment.id),
            post_id: comment.post_id,
            name: comment.name.clone(),
            email: comment.email.clone(),
            body: comment.body.clone(),
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required");
        }
        if self.email.trim().is_empty() {
            errors.email = Some("Email is required");
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.email = Some("Email is invalid");
        }
        if self.body.trim().is_empty() {
            errors.body = Some("Comment body is required");
        }
        errors
    }

    /// Validate and resolve into an add or update intent.
    pub fn into_intent(self) -> Result<SubmitIntent, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(match self.id {
            Some(id) => SubmitIntent::Update(Comment {
                id,
                post_id: self.post_id,
                name: self.name,
                email: self.email,
                body: self.body,
            }),
            None => SubmitIntent::Add(NewComment {
                post_id: self.post_id,
                name: self.name,
                email: self.email,
                body: self.body,
            }),
        })
    }
}
