//! Authorization guard
//!
//! Pure decision: given the current identity and a page, render or
//! redirect. Role membership is checked by set inclusion only. The guard
//! is re-evaluated on every mount; nothing here is cached.

use shared::models::{ADMIN_ROLES, DASHBOARD_ROLES, Employee, Role};

/// Navigable pages of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Checkin,
    Dashboard,
    Resources,
    Profile,
    Register,
    AdminEmployees,
    AdminResources,
    Audit,
}

/// Access policy for a protected page.
#[derive(Debug, Clone, Copy)]
pub struct RoutePolicy {
    /// Roles allowed in; empty means any authenticated identity.
    pub required: &'static [Role],
    /// Where an authenticated identity lacking the role is sent.
    pub fallback: Page,
    /// One-shot notice shown on a role denial.
    pub denied_notice: &'static str,
    /// Notice shown to anonymous visitors, where the product shows one.
    pub signin_notice: Option<&'static str>,
}

impl Page {
    /// Policy table. `None` for the login page, which is open to anyone.
    ///
    /// Fallbacks never cycle: Checkin admits every authenticated
    /// identity, and Dashboard's own fallback is Checkin.
    pub fn policy(self) -> Option<RoutePolicy> {
        let policy = match self {
            Page::Login => return None,
            Page::Checkin | Page::Profile => RoutePolicy {
                required: &[],
                fallback: Page::Login,
                denied_notice: "",
                signin_notice: None,
            },
            Page::Resources => RoutePolicy {
                required: &[],
                fallback: Page::Login,
                denied_notice: "",
                signin_notice: Some("You need to be signed in to access the library."),
            },
            Page::Dashboard => RoutePolicy {
                required: DASHBOARD_ROLES,
                fallback: Page::Checkin,
                denied_notice: "Access restricted. Redirecting...",
                signin_notice: None,
            },
            Page::Register => RoutePolicy {
                required: ADMIN_ROLES,
                fallback: Page::Dashboard,
                denied_notice: "Access denied. Only HR can register new employees.",
                signin_notice: None,
            },
            Page::AdminEmployees | Page::AdminResources => RoutePolicy {
                required: ADMIN_ROLES,
                fallback: Page::Dashboard,
                denied_notice: "Access restricted to HR staff.",
                signin_notice: None,
            },
            Page::Audit => RoutePolicy {
                required: ADMIN_ROLES,
                fallback: Page::Dashboard,
                denied_notice: "Only HR staff can access the audit history.",
                signin_notice: None,
            },
        };
        Some(policy)
    }
}

/// Guard decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny {
        redirect: Page,
        notice: Option<&'static str>,
    },
}

/// Decide whether `identity` may view `page`.
pub fn authorize(identity: Option<&Employee>, page: Page) -> Access {
    let Some(policy) = page.policy() else {
        return Access::Allow;
    };

    let Some(identity) = identity else {
        return Access::Deny {
            redirect: Page::Login,
            notice: policy.signin_notice,
        };
    };

    if policy.required.is_empty() {
        return Access::Allow;
    }

    match Role::from_id(identity.role_id) {
        Some(role) if policy.required.contains(&role) => Access::Allow,
        _ => Access::Deny {
            redirect: policy.fallback,
            notice: Some(policy.denied_notice),
        },
    }
}

/// Post-login landing page: dashboard roles land on the dashboard,
/// everyone else on the daily check-in.
pub fn landing_page(identity: &Employee) -> Page {
    match Role::from_id(identity.role_id) {
        Some(role) if DASHBOARD_ROLES.contains(&role) => Page::Dashboard,
        _ => Page::Checkin,
    }
}
