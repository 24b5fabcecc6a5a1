//! Shared types for the Pulse wellness platform
//!
//! Wire-contract types used by the client SDK: domain models,
//! login DTOs and the closed role set.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::Credentials;
pub use models::{
    AnonymousCheckin, Checkin, Disconnection, Employee, InteractionQuality, NewEmployee, Resource,
    Role, RoleRecord, SleepQuality, Team, TeamMoodReport, Workload, YesNo,
};
