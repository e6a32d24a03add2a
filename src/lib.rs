//! Article aggregate of a RealWorld-style blogging backend, with its
//! repository ports and a Postgres implementation.

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
