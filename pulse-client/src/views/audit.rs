//! Anonymized check-in audit page (HR)

use super::{Mount, ViewContext, gate};
use crate::guard::Page;
use crate::page::PageScope;
use shared::models::{AnonymousCheckin, Employee};

/// Raw anonymized history for compliance review.
pub struct AuditPage {
    pub identity: Employee,
    pub history: Vec<AnonymousCheckin>,
    pub error: Option<String>,
}

impl AuditPage {
    pub async fn mount(ctx: &ViewContext, scope: &PageScope) -> Mount<Self> {
        let identity = match gate(&ctx.session, Page::Audit) {
            Ok(identity) => identity,
            Err(redirect) => return redirect,
        };

        let Some(result) = scope.run(ctx.api.audit_history(identity.id)).await else {
            return Mount::Cancelled;
        };

        let (history, error) = match result {
            Ok(history) => (history, None),
            Err(error) => (Vec::new(), Some(error.to_string())),
        };

        Mount::Ready(Self {
            identity,
            history,
            error,
        })
    }
}
