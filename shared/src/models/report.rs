//! Team Mood Report Model

use serde::{Deserialize, Serialize};

/// Aggregated mood indicators for one team, as served by
/// `GET /checkins/analise/{id}`. Read-only; never mutated by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMoodReport {
    #[serde(rename = "equipeId")]
    pub team_id: i64,
    #[serde(rename = "nomeEquipe")]
    pub team_name: String,
    #[serde(rename = "mediaNivelHumor")]
    pub average_mood: f64,
    #[serde(rename = "totalCheckins")]
    pub total_checkins: u64,
}
