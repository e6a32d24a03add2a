// src/domain/article/audit.rs
use chrono::{DateTime, Utc};

/// Timestamp handed to an article by the persistence layer when it is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStamp {
    Created(DateTime<Utc>),
    Updated(DateTime<Utc>),
}

impl AuditStamp {
    /// Picks the stamp for a save of an article that is or is not yet persisted.
    pub fn for_save(persisted: bool, now: DateTime<Utc>) -> Self {
        if persisted {
            Self::Updated(now)
        } else {
            Self::Created(now)
        }
    }

    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Self::Created(at) | Self::Updated(at) => *at,
        }
    }
}
