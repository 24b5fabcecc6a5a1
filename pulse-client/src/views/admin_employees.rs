//! Employee administration page (HR)

use super::{Mount, ViewContext, gate};
use crate::guard::Page;
use crate::page::PageScope;
use shared::models::{Employee, RoleRecord, Team};

/// Employee roster with the reference lists the edit form needs.
pub struct AdminEmployeesPage {
    pub identity: Employee,
    pub employees: Vec<Employee>,
    pub teams: Vec<Team>,
    pub roles: Vec<RoleRecord>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl AdminEmployeesPage {
    pub async fn mount(ctx: &ViewContext, scope: &PageScope) -> Mount<Self> {
        let identity = match gate(&ctx.session, Page::AdminEmployees) {
            Ok(identity) => identity,
            Err(redirect) => return redirect,
        };

        let loads = scope
            .run(async {
                tokio::join!(ctx.api.employees(), ctx.api.teams(), ctx.api.roles())
            })
            .await;
        let Some((employees, teams, roles)) = loads else {
            return Mount::Cancelled;
        };

        Mount::Ready(Self {
            identity,
            employees,
            teams,
            roles,
            error: None,
            notice: None,
        })
    }

    /// Update a record, then re-fetch the roster so the change shows.
    pub async fn update_employee(
        &mut self,
        ctx: &ViewContext,
        scope: &PageScope,
        updated: &Employee,
    ) {
        self.error = None;
        self.notice = None;

        match ctx.api.update_employee(updated.id, updated).await {
            Ok(()) => {
                self.notice = Some(format!("Employee \"{}\" updated.", updated.name));
                if let Some(employees) = scope.run(ctx.api.employees()).await {
                    self.employees = employees;
                }
            }
            Err(error) => {
                self.error = Some(format!(
                    "Could not update. Check that the e-mail is not already registered: {error}"
                ));
            }
        }
    }

    /// Delete a record; on the confirmed 204 the row is pruned from the
    /// held roster without a refetch.
    pub async fn delete_employee(&mut self, ctx: &ViewContext, id: i64, name: &str) {
        self.error = None;
        self.notice = None;

        match ctx.api.delete_employee(id).await {
            Ok(()) => {
                self.employees.retain(|employee| employee.id != id);
                self.notice = Some(format!("Employee \"{name}\" removed."));
            }
            Err(error) => {
                self.error = Some(format!("Could not remove employee: {error}"));
            }
        }
    }
}
