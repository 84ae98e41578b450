use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;
use tera::Tera;

use crate::config::Config;
use crate::state::AppState;
use crate::infra::email::http_email_service::HttpEmailService;
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::rsvp_service::RsvpService;
use crate::infra::repositories::{
    postgres_auth_repo::PostgresAuthRepo, postgres_invitation_repo::PostgresInvitationRepo,
    postgres_job_repo::PostgresJobRepo, postgres_rsvp_repo::PostgresRsvpRepo,
    postgres_subscription_repo::PostgresSubscriptionRepo, postgres_user_repo::PostgresUserRepo,
    sqlite_auth_repo::SqliteAuthRepo, sqlite_invitation_repo::SqliteInvitationRepo,
    sqlite_job_repo::SqliteJobRepo, sqlite_rsvp_repo::SqliteRsvpRepo,
    sqlite_subscription_repo::SqliteSubscriptionRepo, sqlite_user_repo::SqliteUserRepo,
};

pub fn load_templates() -> Tera {
    let mut tera = Tera::default();
    tera.add_raw_template("guest_confirmation.html", include_str!("../templates/guest_confirmation.html"))
        .expect("Failed to load guest confirmation template");
    tera.add_raw_template("host_alert.html", include_str!("../templates/host_alert.html"))
        .expect("Failed to load host alert template");
    tera.add_raw_template("milestone.html", include_str!("../templates/milestone.html"))
        .expect("Failed to load milestone template");
    tera
}

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let email_service = Arc::new(HttpEmailService::new(
        config.mail_service_url.clone(),
        config.mail_service_token.clone(),
    ));

    let templates = Arc::new(load_templates());

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let auth_repo = Arc::new(PostgresAuthRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));
        let rsvp_repo = Arc::new(PostgresRsvpRepo::new(pool.clone()));
        let job_repo = Arc::new(PostgresJobRepo::new(pool.clone()));
        let rsvp_service = Arc::new(RsvpService::new(
            rsvp_repo.clone(),
            job_repo.clone(),
            config.rsvp_milestones.clone(),
        ));

        AppState {
            config: config.clone(),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
            auth_repo,
            invitation_repo: Arc::new(PostgresInvitationRepo::new(pool.clone())),
            rsvp_repo,
            subscription_repo: Arc::new(PostgresSubscriptionRepo::new(pool.clone())),
            job_repo,
            auth_service,
            rsvp_service,
            email_service,
            templates,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let auth_repo = Arc::new(SqliteAuthRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));
        let rsvp_repo = Arc::new(SqliteRsvpRepo::new(pool.clone()));
        let job_repo = Arc::new(SqliteJobRepo::new(pool.clone()));
        let rsvp_service = Arc::new(RsvpService::new(
            rsvp_repo.clone(),
            job_repo.clone(),
            config.rsvp_milestones.clone(),
        ));

        AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            auth_repo,
            invitation_repo: Arc::new(SqliteInvitationRepo::new(pool.clone())),
            rsvp_repo,
            subscription_repo: Arc::new(SqliteSubscriptionRepo::new(pool.clone())),
            job_repo,
            auth_service,
            rsvp_service,
            email_service,
            templates,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
