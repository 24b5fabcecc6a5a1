//! Reference data reads (teams, role records)

use super::{ApiGateway, degraded};
use shared::models::{RoleRecord, Team};

impl ApiGateway {
    /// List all teams. Degrading read.
    pub async fn teams(&self) -> Vec<Team> {
        degraded("teams", self.http().get("equipes").await)
    }

    /// List all role records. Degrading read.
    pub async fn roles(&self) -> Vec<RoleRecord> {
        degraded("roles", self.http().get("funcoes").await)
    }
}
