// src/domain/article/comment.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "comment id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CommentBody> for String {
    fn from(value: CommentBody) -> Self {
        value.0
    }
}

/// A comment inside an article's comment collection.
///
/// Comments are only created through `Article::add_comment`, which is what
/// ties each one to exactly one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: Option<CommentId>,
    author: UserId,
    body: CommentBody,
    created_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub(super) fn new(author: UserId, body: CommentBody) -> Self {
        Self {
            id: None,
            author,
            body,
            created_at: None,
        }
    }

    pub fn restore(
        id: CommentId,
        author: UserId,
        body: CommentBody,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            author,
            body,
            created_at: Some(created_at),
        }
    }

    pub fn id(&self) -> Option<CommentId> {
        self.id
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn body(&self) -> &CommentBody {
        &self.body
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub(super) fn stamp_created(&mut self, now: DateTime<Utc>) {
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
    }
}
