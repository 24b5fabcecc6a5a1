//! Wellness resource CRUD (HR)

use super::{ApiGateway, degraded};
use crate::ClientResult;
use shared::models::{Resource, ResourcePayload};

impl ApiGateway {
    /// List the wellness resource library. Degrading read.
    pub async fn resources(&self) -> Vec<Resource> {
        degraded("resources", self.http().get("recursos").await)
    }

    /// Create a resource (201)
    pub async fn create_resource(&self, resource: &ResourcePayload) -> ClientResult<()> {
        self.http().post_unit("recursos", resource).await
    }

    /// Update a resource. Idempotent PUT.
    pub async fn update_resource(&self, id: i64, resource: &ResourcePayload) -> ClientResult<()> {
        self.http().put(&format!("recursos/{id}"), resource).await
    }

    /// Delete a resource. Idempotent DELETE, 204 on success.
    pub async fn delete_resource(&self, id: i64) -> ClientResult<()> {
        self.http().delete(&format!("recursos/{id}")).await
    }
}
