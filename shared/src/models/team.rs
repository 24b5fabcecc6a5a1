//! Team Model

use serde::{Deserialize, Serialize};

/// Team reference entry as served by `GET /equipes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sigla")]
    pub acronym: String,
    #[serde(rename = "setor")]
    pub sector: String,
}
