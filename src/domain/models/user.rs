use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub email_new_rsvp: bool,
    pub email_milestones: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, full_name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password_hash,
            full_name,
            email_new_rsvp: true,
            email_milestones: true,
            created_at: Utc::now(),
        }
    }
}
