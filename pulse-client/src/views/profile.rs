//! Profile page: favorites overview, password change, logout

use super::{Mount, ViewContext, gate};
use crate::guard::Page;
use crate::page::PageScope;
use shared::models::{Employee, Resource};

/// The active identity's own page.
pub struct ProfilePage {
    pub identity: Employee,
    pub favorites: Vec<Resource>,
    pub error: Option<String>,
}

impl ProfilePage {
    pub async fn mount(ctx: &ViewContext, scope: &PageScope) -> Mount<Self> {
        let identity = match gate(&ctx.session, Page::Profile) {
            Ok(identity) => identity,
            Err(redirect) => return redirect,
        };

        let Some(favorites) = scope.run(ctx.api.favorites(identity.id)).await else {
            return Mount::Cancelled;
        };

        Mount::Ready(Self {
            identity,
            favorites,
            error: None,
        })
    }

    /// Change the password: local checks, idempotent PUT, then the
    /// persisted identity is replaced with the updated record.
    pub async fn change_password(
        &mut self,
        ctx: &ViewContext,
        new_password: &str,
        confirmation: &str,
    ) -> Result<(), String> {
        if new_password.chars().count() < 6 {
            return Err("The new password must have at least 6 characters.".to_string());
        }
        if new_password != confirmation {
            return Err("Passwords do not match.".to_string());
        }

        let updated = Employee {
            password: new_password.to_string(),
            ..self.identity.clone()
        };

        ctx.api
            .update_employee(updated.id, &updated)
            .await
            .map_err(|error| format!("Could not update the password: {error}"))?;

        if let Err(error) = ctx.session.save(&updated) {
            tracing::warn!(%error, "could not persist updated session");
        }
        self.identity = updated;
        Ok(())
    }

    /// Drop the persisted identity and navigate to the login page.
    pub fn logout(&self, ctx: &ViewContext) -> Page {
        if let Err(error) = ctx.session.clear() {
            tracing::warn!(%error, "could not clear session");
        }
        Page::Login
    }
}
