//! Domain DTOs for the comment API.
//!
//! # Design
//! These types mirror the remote's JSON schema (`postId` is camelCase on the
//! wire) but are defined independently from the sandbox server crate.
//! Integration tests catch any schema drift between the two.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single comment record. Identity is `id`; every other field is content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl Comment {
    /// Attach an id to creation input.
    pub fn from_new(id: u64, input: NewComment) -> Self {
        Self {
            id,
            post_id: input.post_id,
            name: input.name,
            email: input.email,
            body: input.body,
        }
    }
}

/// Request payload for creating a comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// What a validated comment form asks the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitIntent {
    Add(NewComment),
    Update(Comment),
}

/// Ordering applied to the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Keep the order of the underlying list.
    #[default]
    #[serde(rename = "all")]
    None,
    #[serde(rename = "az")]
    AscendingByName,
    #[serde(rename = "za")]
    DescendingByName,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::None => "all",
            SortMode::AscendingByName => "az",
            SortMode::DescendingByName => "za",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SortMode::None),
            "az" => Ok(SortMode::AscendingByName),
            "za" => Ok(SortMode::DescendingByName),
            other => Err(format!("unknown sort mode: {other}")),
        }
    }
}
