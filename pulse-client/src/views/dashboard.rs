//! Team mood dashboard page

use super::{Mount, ViewContext, gate};
use crate::guard::Page;
use crate::page::PageScope;
use shared::models::{Employee, TeamMoodReport};

/// Aggregated mood indicators for the teams the identity may see.
pub struct DashboardPage {
    pub identity: Employee,
    pub reports: Vec<TeamMoodReport>,
    pub error: Option<String>,
}

impl DashboardPage {
    pub async fn mount(ctx: &ViewContext, scope: &PageScope) -> Mount<Self> {
        let identity = match gate(&ctx.session, Page::Dashboard) {
            Ok(identity) => identity,
            Err(redirect) => return redirect,
        };

        let Some(result) = scope.run(ctx.api.team_mood_report(identity.id)).await else {
            return Mount::Cancelled;
        };

        // an authorization failure and an empty report read differently:
        // the first is an error, the second an informational message
        let (reports, error) = match result {
            Ok(reports) if reports.is_empty() => (
                Vec::new(),
                Some("Not enough data to build the indicators yet.".to_string()),
            ),
            Ok(reports) => (reports, None),
            Err(error) => (Vec::new(), Some(error.to_string())),
        };

        Mount::Ready(Self {
            identity,
            reports,
            error,
        })
    }
}
