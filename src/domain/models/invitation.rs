use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Invitation {
    pub id: String,
    pub user_id: String,
    pub code: String, // immutable 8-char share code, unique across all invitations
    pub title: String,
    pub description: Option<String>,
    pub event_type: String, // wedding, birthday, party, ...
    pub event_date: DateTime<Utc>,
    pub event_time: Option<String>,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub host_name: String,
    pub host_email: Option<String>,
    pub host_phone: Option<String>,
    pub template_id: String,
    pub color_scheme: String,
    pub custom_message: Option<String>,
    pub is_public: bool,
    pub max_guests: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewInvitationParams {
    pub user_id: String,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub event_date: DateTime<Utc>,
    pub event_time: Option<String>,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub host_name: String,
    pub host_email: Option<String>,
    pub host_phone: Option<String>,
    pub template_id: Option<String>,
    pub color_scheme: Option<String>,
    pub custom_message: Option<String>,
    pub max_guests: Option<i32>,
}

impl Invitation {
    pub fn new(params: NewInvitationParams) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            user_id: params.user_id,
            code: params.code,
            title: params.title,
            description: params.description,
            event_type: params.event_type,
            event_date: params.event_date,
            event_time: params.event_time,
            venue_name: params.venue_name,
            venue_address: params.venue_address,
            host_name: params.host_name,
            host_email: params.host_email,
            host_phone: params.host_phone,
            template_id: params.template_id.unwrap_or_else(|| "classic".to_string()),
            color_scheme: params.color_scheme.unwrap_or_else(|| "blue".to_string()),
            custom_message: params.custom_message,
            is_public: true,
            max_guests: params.max_guests,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn share_url(&self, frontend_url: &str) -> String {
        format!("{}/invite/{}", frontend_url, self.code)
    }
}
