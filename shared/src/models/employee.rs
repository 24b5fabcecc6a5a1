//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee entity. Doubles as the session identity after login.
///
/// The backend echoes `senha` back in employee payloads and expects it on
/// PUT round-trips; the field must never be logged or displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "dataContratacao")]
    pub hire_date: NaiveDate,
    #[serde(rename = "equipeId")]
    pub team_id: i64,
    #[serde(rename = "idFuncao")]
    pub role_id: i64,
}

/// Registration payload (HR only). The id is assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewEmployee {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "invalid e-mail address"))]
    pub email: String,
    #[serde(rename = "senha")]
    #[validate(length(min = 6, message = "password must have at least 6 characters"))]
    pub password: String,
    #[serde(rename = "dataContratacao")]
    pub hire_date: NaiveDate,
    #[serde(rename = "equipeId")]
    pub team_id: i64,
    #[serde(rename = "idFuncao")]
    pub role_id: i64,
}
