//! Sign in against a running Pulse backend, print the dashboard the
//! identity is entitled to, and show the guard at work.
//!
//! ```sh
//! PULSE_API_BASE_URL=http://localhost:8080 \
//! PULSE_EMAIL=ana@pulse.dev PULSE_PASSWORD=segredo1 \
//! cargo run -p pulse-client --example daily_pulse
//! ```

use anyhow::Result;
use pulse_client::views::{DashboardPage, LoginFlow, Mount};
use pulse_client::{ClientConfig, PageScope, SessionStore, ViewContext};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse_client=info".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let api = config.build_gateway()?;
    let session = SessionStore::new(std::env::temp_dir().join("pulse-session"));
    let ctx = ViewContext::new(session, api);

    let email = std::env::var("PULSE_EMAIL").unwrap_or_else(|_| "ana@pulse.dev".into());
    let password = std::env::var("PULSE_PASSWORD").unwrap_or_else(|_| "segredo1".into());

    match LoginFlow::authenticate(&ctx, &email, &password).await {
        Ok(landing) => info!(?landing, "signed in"),
        Err(message) => {
            eprintln!("{message}");
            return Ok(());
        }
    }

    let scope = PageScope::new();
    match DashboardPage::mount(&ctx, &scope).await {
        Mount::Ready(page) => {
            if let Some(message) = &page.error {
                println!("{message}");
            }
            for report in &page.reports {
                println!(
                    "{}: mood {:.1} across {} check-ins",
                    report.team_name, report.average_mood, report.total_checkins
                );
            }
        }
        Mount::Redirect { target, notice } => {
            if let Some(notice) = notice {
                println!("{notice}");
            }
            info!(?target, "not entitled to the dashboard");
        }
        Mount::Cancelled => {}
    }

    Ok(())
}
