//! View flows
//!
//! One controller per page: the glue between session store, guard,
//! gateway and the optimistic toggle set. Every `mount` re-reads the
//! injected session and runs the guard before issuing any network call;
//! loads run under the page's liveness scope. Failures surface on the
//! page's own state, never through a global channel.

mod admin_employees;
mod audit;
mod checkin;
mod dashboard;
mod login;
mod profile;
mod resources;

pub use admin_employees::AdminEmployeesPage;
pub use audit::AuditPage;
pub use checkin::CheckinPage;
pub use dashboard::DashboardPage;
pub use login::LoginFlow;
pub use profile::ProfilePage;
pub use resources::ResourcesPage;

use crate::guard::{Access, Page, authorize};
use crate::{ApiGateway, SessionStore};
use shared::models::Employee;

/// Dependencies injected into every view controller.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub session: SessionStore,
    pub api: ApiGateway,
}

impl ViewContext {
    pub fn new(session: SessionStore, api: ApiGateway) -> Self {
        Self { session, api }
    }
}

/// Result of mounting a page.
#[derive(Debug)]
pub enum Mount<T> {
    /// Guard passed and the initial loads were applied
    Ready(T),
    /// Guard denied; navigate and optionally show the one-shot notice
    Redirect {
        target: Page,
        notice: Option<&'static str>,
    },
    /// The scope was cancelled while loading; render nothing
    Cancelled,
}

impl<T> Mount<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            Mount::Ready(state) => Some(state),
            _ => None,
        }
    }

    pub fn redirect_target(&self) -> Option<Page> {
        match self {
            Mount::Redirect { target, .. } => Some(*target),
            _ => None,
        }
    }
}

/// Run the guard for `page` against the current session.
fn gate<T>(session: &SessionStore, page: Page) -> Result<Employee, Mount<T>> {
    let identity = session.load();
    match authorize(identity.as_ref(), page) {
        Access::Allow => identity.ok_or(Mount::Redirect {
            target: Page::Login,
            notice: None,
        }),
        Access::Deny { redirect, notice } => Err(Mount::Redirect {
            target: redirect,
            notice,
        }),
    }
}
