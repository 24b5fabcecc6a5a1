//! Check-in submission and the two authorization-sensitive reads
//!
//! `team_mood_report` and `audit_history` are the only reads where a 403
//! must reach the caller: "not authorized" and "no data yet" get different
//! UI treatment. Every other failure on them degrades to an empty list.

use super::{ApiGateway, with_default_message};
use crate::{ClientError, ClientResult};
use shared::models::{AnonymousCheckin, Checkin, TeamMoodReport};

impl ApiGateway {
    /// Submit today's check-in. The backend enforces at most one record
    /// per (employee, date) and answers 400 on a duplicate.
    pub async fn submit_checkin(&self, checkin: &Checkin) -> ClientResult<()> {
        self.http()
            .post_unit("checkins", checkin)
            .await
            .map_err(|e| match e {
                err @ ClientError::Validation(_) => {
                    with_default_message(err, "a check-in already exists for this date")
                }
                err => err,
            })
    }

    /// Aggregated team mood report for the dashboard.
    ///
    /// `Forbidden` propagates; any other failure degrades to `Ok(empty)`.
    pub async fn team_mood_report(&self, requester_id: i64) -> ClientResult<Vec<TeamMoodReport>> {
        match self
            .http()
            .get(&format!("checkins/analise/{requester_id}"))
            .await
        {
            Ok(reports) => Ok(reports),
            Err(err) if err.is_forbidden() => Err(with_default_message(
                err,
                "you do not have permission to view this dashboard",
            )),
            Err(error) => {
                tracing::warn!(%error, "dashboard report fetch degraded to empty");
                Ok(Vec::new())
            }
        }
    }

    /// Anonymized check-in history for the HR audit page.
    ///
    /// Same propagation rules as the dashboard report.
    pub async fn audit_history(&self, requester_id: i64) -> ClientResult<Vec<AnonymousCheckin>> {
        match self.http().get(&format!("checkins/{requester_id}")).await {
            Ok(history) => Ok(history),
            Err(err) if err.is_forbidden() => Err(with_default_message(
                err,
                "only HR staff can view the audit history",
            )),
            Err(error) => {
                tracing::warn!(%error, "audit history fetch degraded to empty");
                Ok(Vec::new())
            }
        }
    }
}
