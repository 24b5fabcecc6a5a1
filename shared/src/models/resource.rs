//! Wellness Resource Model

use serde::{Deserialize, Serialize};

/// Wellness resource entity (article, video, podcast...). Server-owned;
/// the client only mutates it through explicit CRUD calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "link")]
    pub url: String,
}

/// Create/update payload. The id is assigned server-side on create and
/// taken from the path on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcePayload {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "link")]
    pub url: String,
}
