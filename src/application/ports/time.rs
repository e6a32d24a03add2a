// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the timestamps the persistence layer stamps onto articles.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
