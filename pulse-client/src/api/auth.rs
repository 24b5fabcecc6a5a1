//! Authentication and registration operations

use super::{ApiGateway, with_default_message};
use crate::{ClientError, ClientResult};
use shared::client::Credentials;
use shared::models::{Employee, NewEmployee};
use validator::Validate;

impl ApiGateway {
    /// Authenticate with e-mail and password.
    ///
    /// `POST /funcionarios/login`; 401 maps to `Unauthorized`.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<Employee> {
        self.http().post("funcionarios/login", credentials).await
    }

    /// Register a new employee on behalf of an HR requester.
    ///
    /// The payload is validated locally first; the backend still enforces
    /// uniqueness (400) and the HR-only rule (403).
    pub async fn register(
        &self,
        requester_id: i64,
        new_employee: &NewEmployee,
    ) -> ClientResult<Employee> {
        new_employee
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        self.http()
            .post(&format!("funcionarios/cadastro/{requester_id}"), new_employee)
            .await
            .map_err(|e| match e {
                err @ ClientError::Forbidden(_) => {
                    with_default_message(err, "only HR staff can register employees")
                }
                err @ ClientError::Validation(_) => {
                    with_default_message(err, "validation failed or e-mail already registered")
                }
                err => err,
            })
    }
}
