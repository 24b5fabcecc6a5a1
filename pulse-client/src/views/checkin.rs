//! Daily check-in page

use super::{Mount, ViewContext, gate};
use crate::ClientResult;
use crate::guard::Page;
use shared::models::{Checkin, Employee};

/// Daily check-in form flow.
pub struct CheckinPage {
    pub identity: Employee,
}

impl CheckinPage {
    pub async fn mount(ctx: &ViewContext) -> Mount<Self> {
        match gate(&ctx.session, Page::Checkin) {
            Ok(identity) => Mount::Ready(Self { identity }),
            Err(redirect) => redirect,
        }
    }

    /// Submit the check-in for the active identity. A duplicate date
    /// comes back as a validation error for the form to render inline.
    pub async fn submit(&self, ctx: &ViewContext, checkin: Checkin) -> ClientResult<()> {
        let checkin = Checkin {
            employee_id: self.identity.id,
            ..checkin
        };
        ctx.api.submit_checkin(&checkin).await
    }
}
