//! Employee administration operations (HR)

use super::{ApiGateway, degraded};
use crate::ClientResult;
use shared::models::Employee;

impl ApiGateway {
    /// List all employees. Degrading read.
    pub async fn employees(&self) -> Vec<Employee> {
        degraded("employees", self.http().get("funcionarios").await)
    }

    /// Update an employee record (also used for password changes).
    /// Idempotent PUT.
    pub async fn update_employee(&self, id: i64, employee: &Employee) -> ClientResult<()> {
        self.http()
            .put(&format!("funcionarios/{id}"), employee)
            .await
    }

    /// Delete an employee and all associated check-ins and favorites.
    /// Idempotent DELETE, 204 on success.
    pub async fn delete_employee(&self, id: i64) -> ClientResult<()> {
        self.http().delete(&format!("funcionarios/{id}")).await
    }
}
