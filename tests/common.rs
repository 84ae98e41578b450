use rsvp_hub::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::factory::load_templates,
    infra::repositories::{
        sqlite_auth_repo::SqliteAuthRepo,
        sqlite_invitation_repo::SqliteInvitationRepo,
        sqlite_job_repo::SqliteJobRepo,
        sqlite_rsvp_repo::SqliteRsvpRepo,
        sqlite_subscription_repo::SqliteSubscriptionRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    domain::services::auth_service::AuthService,
    domain::services::rsvp_service::RsvpService,
    domain::ports::EmailService,
    error::AppError,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header},
    Router,
};
use std::str::FromStr;
use async_trait::async_trait;
use tower::ServiceExt;
use serde_json::{json, Value};

pub struct MockEmailService;

#[async_trait]
impl EmailService for MockEmailService {
    async fn send(
        &self,
        _recipient: &str,
        _subject: &str,
        _html_body: &str,
    ) -> Result<(), AppError> {
        Ok(())
    }
}

pub struct AuthHeaders {
    pub access_token: String,
    pub csrf_token: String,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_milestones(vec![10, 25, 50, 100]).await
    }

    pub async fn with_milestones(milestones: Vec<i64>) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let priv_key_pem = include_str!("../tests/keys/test_private.pem");
        let pub_key_pem = include_str!("../tests/keys/test_public.pem");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            mail_service_url: "http://localhost".to_string(),
            mail_service_token: "token".to_string(),
            jwt_secret_key: priv_key_pem.to_string(),
            jwt_public_key: pub_key_pem.to_string(),
            auth_issuer: "test-issuer".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            rsvp_milestones: milestones.clone(),
        };

        let auth_repo = Arc::new(SqliteAuthRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));
        let rsvp_repo = Arc::new(SqliteRsvpRepo::new(pool.clone()));
        let job_repo = Arc::new(SqliteJobRepo::new(pool.clone()));
        let rsvp_service = Arc::new(RsvpService::new(
            rsvp_repo.clone(),
            job_repo.clone(),
            milestones,
        ));

        let state = Arc::new(AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            auth_repo,
            invitation_repo: Arc::new(SqliteInvitationRepo::new(pool.clone())),
            rsvp_repo,
            subscription_repo: Arc::new(SqliteSubscriptionRepo::new(pool.clone())),
            job_repo,
            auth_service,
            rsvp_service,
            email_service: Arc::new(MockEmailService),
            templates: Arc::new(load_templates()),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn register_and_login(&self, username: &str) -> AuthHeaders {
        let register_payload = json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "hunter2hunter2",
            "full_name": "Test User"
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(register_payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Register failed in test helper: status {}", response.status());
        }

        self.login(username, "hunter2hunter2").await
    }

    pub async fn login(&self, username: &str, password: &str) -> AuthHeaders {
        let payload = json!({
            "username": username,
            "password": password
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let cookies: Vec<String> = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect();

        let access_token_cookie = cookies.iter()
            .find(|c| c.contains("access_token="))
            .expect("No access_token cookie returned");

        let start = access_token_cookie.find("access_token=").unwrap() + 13;
        let end = access_token_cookie[start..].find(';').unwrap_or(access_token_cookie.len() - start);
        let access_token = access_token_cookie[start..start+end].to_string();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body_json: Value = serde_json::from_slice(&body_bytes).unwrap();
        let csrf_token = body_json["csrf_token"].as_str().expect("No csrf_token in body").to_string();

        AuthHeaders {
            access_token,
            csrf_token
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
