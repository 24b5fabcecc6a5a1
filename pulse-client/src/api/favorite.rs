//! Favorite relation operations and the optimistic-toggle backend

use super::{ApiGateway, degraded};
use crate::ClientResult;
use crate::optimistic::{OptimisticSet, ToggleBackend};
use async_trait::async_trait;
use shared::models::Resource;

impl ApiGateway {
    /// List the resources favorited by an employee. Degrading read.
    pub async fn favorites(&self, employee_id: i64) -> Vec<Resource> {
        degraded(
            "favorites",
            self.http()
                .get(&format!("funcionarios/{employee_id}/recursos"))
                .await,
        )
    }

    /// Create the (employee, resource) favorite edge (201)
    pub async fn add_favorite(&self, employee_id: i64, resource_id: i64) -> ClientResult<()> {
        self.http()
            .post_empty(&format!("funcionarios/{employee_id}/recursos/{resource_id}"))
            .await
    }

    /// Remove the (employee, resource) favorite edge (204)
    pub async fn remove_favorite(&self, employee_id: i64, resource_id: i64) -> ClientResult<()> {
        self.http()
            .delete(&format!("funcionarios/{employee_id}/recursos/{resource_id}"))
            .await
    }
}

/// Toggle backend bound to one employee's favorite edges.
#[derive(Debug, Clone)]
pub struct FavoriteBackend {
    gateway: ApiGateway,
    employee_id: i64,
}

#[async_trait]
impl ToggleBackend<i64> for FavoriteBackend {
    async fn add(&self, resource_id: &i64) -> ClientResult<()> {
        self.gateway.add_favorite(self.employee_id, *resource_id).await
    }

    async fn remove(&self, resource_id: &i64) -> ClientResult<()> {
        self.gateway
            .remove_favorite(self.employee_id, *resource_id)
            .await
    }
}

/// Optimistic favorite membership for the active identity, keyed by
/// resource id.
pub type FavoriteToggles = OptimisticSet<i64, FavoriteBackend>;

impl FavoriteToggles {
    /// Build the toggle set from the server-confirmed favorite ids.
    pub fn for_employee(
        gateway: ApiGateway,
        employee_id: i64,
        favorited: impl IntoIterator<Item = i64>,
    ) -> Self {
        OptimisticSet::new(
            favorited,
            FavoriteBackend {
                gateway,
                employee_id,
            },
        )
    }
}
