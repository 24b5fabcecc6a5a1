//! Wellness library page

use super::{Mount, ViewContext, gate};
use crate::api::FavoriteToggles;
use crate::guard::Page;
use crate::optimistic::Toggle;
use crate::page::PageScope;
use shared::models::{Employee, Resource};

/// Resource library with the favorite toggles for the active identity.
pub struct ResourcesPage {
    pub identity: Employee,
    pub resources: Vec<Resource>,
    pub favorites: FavoriteToggles,
    pub error: Option<String>,
}

impl ResourcesPage {
    pub async fn mount(ctx: &ViewContext, scope: &PageScope) -> Mount<Self> {
        let identity = match gate(&ctx.session, Page::Resources) {
            Ok(identity) => identity,
            Err(redirect) => return redirect,
        };

        // library and favorite set load together, joined before render
        let loads = scope
            .run(async {
                tokio::join!(ctx.api.resources(), ctx.api.favorites(identity.id))
            })
            .await;
        let Some((resources, favorited)) = loads else {
            return Mount::Cancelled;
        };

        let favorites = FavoriteToggles::for_employee(
            ctx.api.clone(),
            identity.id,
            favorited.into_iter().map(|resource| resource.id),
        );

        Mount::Ready(Self {
            identity,
            resources,
            favorites,
            error: None,
        })
    }

    /// Toggle one resource's favorite flag through the optimistic
    /// controller; a rollback leaves its message on the page.
    pub async fn toggle_favorite(&mut self, resource_id: i64) -> Toggle {
        self.error = None;
        let outcome = self.favorites.toggle(resource_id).await;
        if let Toggle::RolledBack(error) = &outcome {
            tracing::warn!(%error, resource_id, "favorite toggle rolled back");
            self.error = Some("Could not update favorites. Try again.".to_string());
        }
        outcome
    }

    pub fn is_favorited(&self, resource_id: i64) -> bool {
        self.favorites.contains(&resource_id)
    }
}
