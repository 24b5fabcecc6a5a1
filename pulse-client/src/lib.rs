//! Pulse Client - SDK for the Pulse wellness backend
//!
//! Typed REST gateway plus the session, authorization and
//! optimistic-toggle machinery shared by the product's pages.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod optimistic;
pub mod page;
pub mod session;
pub mod views;

pub use api::{ApiGateway, FavoriteToggles};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use guard::{Access, Page, RoutePolicy, authorize, landing_page};
pub use optimistic::{OptimisticSet, Toggle, ToggleBackend};
pub use page::PageScope;
pub use session::SessionStore;
pub use views::{Mount, ViewContext};

// Re-export shared types for convenience
pub use shared::client::Credentials;
pub use shared::models::{Checkin, Employee, Resource, Role, Team, TeamMoodReport};
