//! Role Model
//!
//! The backend stores roles as numeric `idFuncao` values. The privileged
//! ones form a closed set; every other id is ordinary staff with no page
//! privileges. Access is decided by set inclusion, never by ordering.

use serde::{Deserialize, Serialize};

/// Privileged role, mapped from the backend role id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    TechLead,
    Manager,
    Hr,
}

impl Role {
    /// Maps a backend role id to a privileged role. Ids outside the closed
    /// set (ordinary staff) yield `None`.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            3 => Some(Role::TechLead),
            4 => Some(Role::Manager),
            5 => Some(Role::Hr),
            _ => None,
        }
    }

    pub fn id(self) -> i64 {
        match self {
            Role::TechLead => 3,
            Role::Manager => 4,
            Role::Hr => 5,
        }
    }
}

/// Roles allowed to view the team mood dashboard.
pub const DASHBOARD_ROLES: &[Role] = &[Role::TechLead, Role::Manager, Role::Hr];

/// Roles allowed to administer employees, resources and the audit history.
pub const ADMIN_ROLES: &[Role] = &[Role::Hr];

/// Role reference entry as served by `GET /funcoes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ids_round_trip() {
        for role in [Role::TechLead, Role::Manager, Role::Hr] {
            assert_eq!(Role::from_id(role.id()), Some(role));
        }
    }

    #[test]
    fn staff_ids_carry_no_role() {
        for id in [0, 1, 2, 6, 99, -1] {
            assert_eq!(Role::from_id(id), None);
        }
    }

    #[test]
    fn admin_set_is_hr_only() {
        assert_eq!(ADMIN_ROLES, &[Role::Hr]);
        assert!(DASHBOARD_ROLES.contains(&Role::Hr));
        assert!(DASHBOARD_ROLES.contains(&Role::Manager));
        assert!(DASHBOARD_ROLES.contains(&Role::TechLead));
    }
}
