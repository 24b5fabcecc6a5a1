//! Login flow

use super::ViewContext;
use crate::ClientError;
use crate::guard::{Page, landing_page};
use shared::client::Credentials;

/// Authentication flow for the login page.
pub struct LoginFlow;

impl LoginFlow {
    /// Authenticate and persist the identity. On success returns where
    /// to navigate; on failure the message to render by the form.
    pub async fn authenticate(
        ctx: &ViewContext,
        email: &str,
        password: &str,
    ) -> Result<Page, String> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        match ctx.api.login(&credentials).await {
            Ok(identity) => {
                if let Err(error) = ctx.session.save(&identity) {
                    tracing::warn!(%error, "could not persist session");
                }
                Ok(landing_page(&identity))
            }
            Err(ClientError::Unauthorized) => {
                Err("Invalid credentials. Check your e-mail and password.".to_string())
            }
            Err(error) => Err(format!("Could not sign in: {error}")),
        }
    }
}
