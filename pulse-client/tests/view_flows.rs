// View-flow scenarios: guard-before-network, optimistic rollback,
// roster pruning, liveness.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use pulse_client::views::{
    AdminEmployeesPage, AuditPage, CheckinPage, DashboardPage, LoginFlow, Mount, ProfilePage,
    ResourcesPage,
};
use pulse_client::{ClientConfig, Page, PageScope, SessionStore, Toggle, ViewContext};
use shared::models::{Employee, Resource, RoleRecord, Team, TeamMoodReport};
use tempfile::TempDir;

fn employee_with_role(id: i64, role_id: i64) -> Employee {
    Employee {
        id,
        name: "Elisa Prado".into(),
        email: "elisa@pulse.dev".into(),
        password: "segredo1".into(),
        hire_date: NaiveDate::from_ymd_opt(2023, 2, 20).unwrap(),
        team_id: 2,
        role_id,
    }
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Context with a fresh session dir; the router is the fake backend.
async fn context(router: Router, session_dir: &TempDir) -> ViewContext {
    let base = serve(router).await;
    let api = ClientConfig::new(base).build_gateway().unwrap();
    ViewContext::new(SessionStore::new(session_dir.path()), api)
}

#[tokio::test]
async fn anonymous_checkin_mount_redirects_before_any_request() {
    let hits = Arc::new(AtomicUsize::new(0));

    async fn counted(State(hits): State<Arc<AtomicUsize>>) -> StatusCode {
        hits.fetch_add(1, Ordering::SeqCst);
        StatusCode::NOT_FOUND
    }
    let router = Router::new().fallback(counted).with_state(hits.clone());

    let dir = TempDir::new().unwrap();
    let ctx = context(router, &dir).await;

    let mount = CheckinPage::mount(&ctx).await;
    assert_eq!(mount.redirect_target(), Some(Page::Login));
    assert_eq!(hits.load(Ordering::SeqCst), 0, "no network call may be issued");
}

#[tokio::test]
async fn anonymous_resources_mount_redirects_with_notice() {
    let dir = TempDir::new().unwrap();
    let ctx = context(Router::new(), &dir).await;

    let scope = PageScope::new();
    match ResourcesPage::mount(&ctx, &scope).await {
        Mount::Redirect { target, notice } => {
            assert_eq!(target, Page::Login);
            assert!(notice.is_some());
        }
        _ => panic!("expected a redirect"),
    }
}

#[tokio::test]
async fn login_persists_identity_and_routes_by_role() {
    async fn login() -> Json<Employee> {
        Json(Employee {
            id: 3,
            name: "Elisa Prado".into(),
            email: "elisa@pulse.dev".into(),
            password: "segredo1".into(),
            hire_date: NaiveDate::from_ymd_opt(2023, 2, 20).unwrap(),
            team_id: 2,
            role_id: 4,
        })
    }
    let router = Router::new().route("/funcionarios/login", post(login));

    let dir = TempDir::new().unwrap();
    let ctx = context(router, &dir).await;

    let landing = LoginFlow::authenticate(&ctx, "elisa@pulse.dev", "segredo1")
        .await
        .unwrap();
    assert_eq!(landing, Page::Dashboard);
    assert_eq!(ctx.session.load().unwrap().id, 3);
}

#[tokio::test]
async fn staff_dashboard_mount_falls_back_to_checkin() {
    let dir = TempDir::new().unwrap();
    let ctx = context(Router::new(), &dir).await;
    ctx.session.save(&employee_with_role(10, 1)).unwrap();

    let scope = PageScope::new();
    match DashboardPage::mount(&ctx, &scope).await {
        Mount::Redirect { target, notice } => {
            assert_eq!(target, Page::Checkin);
            assert!(notice.is_some());
        }
        _ => panic!("expected a redirect"),
    }
}

#[tokio::test]
async fn dashboard_shows_no_data_message_without_error_state() {
    async fn empty_report() -> Json<Vec<TeamMoodReport>> {
        Json(Vec::new())
    }
    let router = Router::new().route("/checkins/analise/{id}", get(empty_report));

    let dir = TempDir::new().unwrap();
    let ctx = context(router, &dir).await;
    ctx.session.save(&employee_with_role(3, 4)).unwrap();

    let scope = PageScope::new();
    let page = DashboardPage::mount(&ctx, &scope).await.ready().unwrap();
    assert!(page.reports.is_empty());
    assert!(page.error.unwrap().contains("Not enough data"));
}

#[tokio::test]
async fn offline_favorite_toggle_rolls_back_with_error() {
    async fn resources() -> Json<Vec<Resource>> {
        Json(vec![Resource {
            id: 42,
            name: "Meditação guiada".into(),
            kind: "Áudio".into(),
            url: "https://example.com/meditacao".into(),
        }])
    }
    async fn favorites() -> Json<Vec<Resource>> {
        Json(Vec::new())
    }
    let router = Router::new()
        .route("/recursos", get(resources))
        .route("/funcionarios/{id}/recursos", get(favorites))
        .route(
            "/funcionarios/{id}/recursos/{rid}",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR.into_response() }),
        );

    let dir = TempDir::new().unwrap();
    let ctx = context(router, &dir).await;
    ctx.session.save(&employee_with_role(12, 1)).unwrap();

    let scope = PageScope::new();
    let mut page = ResourcesPage::mount(&ctx, &scope).await.ready().unwrap();
    assert!(!page.is_favorited(42));

    let outcome = page.toggle_favorite(42).await;
    assert!(matches!(outcome, Toggle::RolledBack(_)));
    assert!(!page.is_favorited(42), "state reverts to pre-toggle");
    assert!(page.error.is_some(), "an error is shown");
}

#[tokio::test]
async fn hr_delete_prunes_the_held_roster() {
    async fn roster() -> Json<Vec<Employee>> {
        Json(vec![
            Employee {
                id: 7,
                name: "Fábio Nunes".into(),
                email: "fabio@pulse.dev".into(),
                password: "segredo1".into(),
                hire_date: NaiveDate::from_ymd_opt(2021, 9, 13).unwrap(),
                team_id: 1,
                role_id: 1,
            },
            Employee {
                id: 12,
                name: "Gina Alves".into(),
                email: "gina@pulse.dev".into(),
                password: "segredo1".into(),
                hire_date: NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
                team_id: 1,
                role_id: 4,
            },
        ])
    }
    async fn teams() -> Json<Vec<Team>> {
        Json(vec![Team {
            id: 1,
            name: "Produto".into(),
            acronym: "PRD".into(),
            sector: "Tecnologia".into(),
        }])
    }
    async fn roles() -> Json<Vec<RoleRecord>> {
        Json(vec![RoleRecord {
            id: 5,
            name: "RH".into(),
        }])
    }
    let router = Router::new()
        .route("/funcionarios", get(roster))
        .route("/equipes", get(teams))
        .route("/funcoes", get(roles))
        .route(
            "/funcionarios/{id}",
            delete(|| async { StatusCode::NO_CONTENT }),
        );

    let dir = TempDir::new().unwrap();
    let ctx = context(router, &dir).await;
    ctx.session.save(&employee_with_role(1, 5)).unwrap();

    let scope = PageScope::new();
    let mut page = AdminEmployeesPage::mount(&ctx, &scope).await.ready().unwrap();
    assert_eq!(page.employees.len(), 2);

    page.delete_employee(&ctx, 7, "Fábio Nunes").await;
    assert!(page.employees.iter().all(|e| e.id != 7));
    assert!(page.notice.as_deref().unwrap().contains("removed"));
    assert!(page.error.is_none());
}

#[tokio::test]
async fn password_change_validates_then_replaces_session() {
    async fn favorites() -> Json<Vec<Resource>> {
        Json(Vec::new())
    }
    let router = Router::new()
        .route("/funcionarios/{id}/recursos", get(favorites))
        .route("/funcionarios/{id}", put(|| async { StatusCode::OK }));

    let dir = TempDir::new().unwrap();
    let ctx = context(router, &dir).await;
    ctx.session.save(&employee_with_role(12, 1)).unwrap();

    let scope = PageScope::new();
    let mut page = ProfilePage::mount(&ctx, &scope).await.ready().unwrap();

    assert!(page.change_password(&ctx, "12345", "12345").await.is_err());
    assert!(page.change_password(&ctx, "123456", "654321").await.is_err());

    page.change_password(&ctx, "novasenha", "novasenha")
        .await
        .unwrap();
    assert_eq!(ctx.session.load().unwrap().password, "novasenha");

    // logout destroys the identity
    assert_eq!(page.logout(&ctx), Page::Login);
    assert!(ctx.session.load().is_none());
}

#[tokio::test]
async fn audit_mount_is_hr_only() {
    async fn history() -> Json<Vec<shared::models::AnonymousCheckin>> {
        Json(Vec::new())
    }
    let router = Router::new().route("/checkins/{id}", get(history));

    let dir = TempDir::new().unwrap();
    let ctx = context(router, &dir).await;

    // a manager is bounced to the dashboard before any request
    ctx.session.save(&employee_with_role(3, 4)).unwrap();
    let scope = PageScope::new();
    match AuditPage::mount(&ctx, &scope).await {
        Mount::Redirect { target, notice } => {
            assert_eq!(target, Page::Dashboard);
            assert!(notice.is_some());
        }
        _ => panic!("expected a redirect"),
    }

    // HR mounts and an empty history is not an error
    ctx.session.save(&employee_with_role(1, 5)).unwrap();
    let page = AuditPage::mount(&ctx, &scope).await.ready().unwrap();
    assert!(page.history.is_empty());
    assert!(page.error.is_none());
}

#[tokio::test]
async fn cancelled_scope_mounts_nothing() {
    async fn favorites() -> Json<Vec<Resource>> {
        Json(Vec::new())
    }
    let router = Router::new().route("/funcionarios/{id}/recursos", get(favorites));

    let dir = TempDir::new().unwrap();
    let ctx = context(router, &dir).await;
    ctx.session.save(&employee_with_role(12, 1)).unwrap();

    let scope = PageScope::new();
    scope.cancel();
    assert!(matches!(
        ProfilePage::mount(&ctx, &scope).await,
        Mount::Cancelled
    ));
}
