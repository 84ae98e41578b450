use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub mail_service_url: String,
    pub mail_service_token: String,
    pub jwt_secret_key: String, // Private key (PEM)
    pub jwt_public_key: String, // Public key (PEM)
    pub auth_issuer: String,
    pub frontend_url: String,
    pub rsvp_milestones: Vec<i64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            mail_service_url: env::var("MAIL_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1/send".to_string()),
            mail_service_token: env::var("MAIL_SERVICE_TOKEN").unwrap_or_else(|_| "test-token-1".to_string()),
            jwt_secret_key: env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY must be set (Ed25519 Private Key)"),
            jwt_public_key: env::var("JWT_PUBLIC_KEY").expect("JWT_PUBLIC_KEY must be set (Ed25519 Public Key)"),
            auth_issuer: env::var("AUTH_ISSUER").unwrap_or_else(|_| "https://api.rsvp-hub.local".to_string()),
            frontend_url: env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string()),
            rsvp_milestones: parse_milestones(
                &env::var("RSVP_MILESTONES").unwrap_or_else(|_| "10,25,50,100".to_string()),
            ),
        }
    }
}

// Thresholds are stored ascending and deduplicated; malformed entries are
// dropped.
fn parse_milestones(raw: &str) -> Vec<i64> {
    let mut thresholds: Vec<i64> = raw
        .split(',')
        .filter_map(|part| part.trim().parse().ok())
        .filter(|&n| n > 0)
        .collect();
    thresholds.sort_unstable();
    thresholds.dedup();
    thresholds
}
