//! Data models
//!
//! Wire contract shared with the Pulse backend. The backend speaks
//! Portuguese field names, so every serialized field carries an explicit
//! `#[serde(rename)]`. All IDs are `i64` (server-assigned).

pub mod checkin;
pub mod employee;
pub mod report;
pub mod resource;
pub mod role;
pub mod team;

// Re-exports
pub use checkin::*;
pub use employee::*;
pub use report::*;
pub use resource::*;
pub use role::*;
pub use team::*;
