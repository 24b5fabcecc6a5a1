//! Check-in Model
//!
//! One employee's daily self-reported wellness submission. The backend
//! enforces at most one record per (employee, date) and answers 400 on a
//! duplicate. Answer vocabularies are closed; the wire values are the
//! Portuguese option labels the product presents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Perceived workload volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Workload {
    #[serde(rename = "Leve")]
    Light,
    #[serde(rename = "Equilibrada")]
    Balanced,
    #[serde(rename = "Pesada")]
    Heavy,
    #[serde(rename = "Excessiva")]
    Excessive,
}

/// Last night's sleep quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepQuality {
    #[serde(rename = "Dormi bem")]
    SleptWell,
    #[serde(rename = "Médio")]
    Average,
    #[serde(rename = "Dormi mal")]
    SleptPoorly,
}

/// Ability to disconnect from work after hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disconnection {
    #[serde(rename = "Sim")]
    Yes,
    #[serde(rename = "Talvez")]
    Maybe,
    #[serde(rename = "Não")]
    No,
    #[serde(rename = "Improvável")]
    Unlikely,
}

/// Quality of interactions with the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionQuality {
    #[serde(rename = "Sim")]
    Yes,
    #[serde(rename = "Parcialmente")]
    Partially,
    #[serde(rename = "Não")]
    No,
}

/// Plain yes/no answer (breaks taken).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "Sim")]
    Yes,
    #[serde(rename = "Não")]
    No,
}

/// Daily check-in submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "funcionarioId")]
    pub employee_id: i64,
    #[serde(rename = "dataCheckin")]
    pub date: NaiveDate,
    #[serde(rename = "nivelEnergia")]
    pub energy_level: u8,
    #[serde(rename = "sentimento")]
    pub sentiment: String,
    #[serde(rename = "volumeDemandas")]
    pub workload: Workload,
    #[serde(rename = "bloqueios")]
    pub blockers: Option<String>,
    #[serde(rename = "desconexao")]
    pub disconnection: Disconnection,
    #[serde(rename = "nivelConexao")]
    pub connection_level: u8,
    #[serde(rename = "qualidadeInteracao")]
    pub interaction_quality: InteractionQuality,
    #[serde(rename = "qualidadeSono")]
    pub sleep_quality: SleepQuality,
    #[serde(rename = "statusPausas")]
    pub breaks: YesNo,
    #[serde(rename = "pequenoGanho")]
    pub small_win: Option<String>,
}

/// Audit-history entry: the same measures with the employee id stripped
/// server-side. Never carries an identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymousCheckin {
    pub id: i64,
    #[serde(rename = "dataCheckin")]
    pub date: NaiveDate,
    #[serde(rename = "nivelEnergia")]
    pub energy_level: u8,
    #[serde(rename = "sentimento")]
    pub sentiment: String,
    #[serde(rename = "volumeDemandas")]
    pub workload: Workload,
    #[serde(rename = "bloqueios")]
    pub blockers: Option<String>,
    #[serde(rename = "desconexao")]
    pub disconnection: Disconnection,
    #[serde(rename = "nivelConexao")]
    pub connection_level: u8,
    #[serde(rename = "qualidadeInteracao")]
    pub interaction_quality: InteractionQuality,
    #[serde(rename = "qualidadeSono")]
    pub sleep_quality: SleepQuality,
    #[serde(rename = "statusPausas")]
    pub breaks: YesNo,
    #[serde(rename = "pequenoGanho")]
    pub small_win: Option<String>,
}
