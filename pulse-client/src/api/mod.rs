//! API gateway - one method per REST operation
//!
//! Pages never see transport concerns: every operation here returns either
//! a typed outcome or, for the degrading list reads, an empty list with the
//! failure logged. Mutations return typed results and callers re-fetch
//! affected lists after confirmed success; there is no write-through cache.

mod auth;
mod checkin;
mod employee;
mod favorite;
mod reference;
mod resource;

pub use favorite::{FavoriteBackend, FavoriteToggles};

use crate::{ClientConfig, ClientError, ClientResult, http::HttpClient};

/// Stateless gateway to the Pulse backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    http: HttpClient,
}

impl ApiGateway {
    /// Create a gateway from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }
}

/// Degrading read: swallow the failure, log it, yield an empty list.
pub(crate) fn degraded<T>(operation: &'static str, result: ClientResult<Vec<T>>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(%error, operation, "list fetch degraded to empty");
            Vec::new()
        }
    }
}

/// Replace an empty server-supplied message with a domain default.
pub(crate) fn with_default_message(error: ClientError, default: &str) -> ClientError {
    match error {
        ClientError::Validation(msg) if msg.trim().is_empty() => {
            ClientError::Validation(default.to_string())
        }
        ClientError::Forbidden(msg) if msg.trim().is_empty() => {
            ClientError::Forbidden(default.to_string())
        }
        other => other,
    }
}
