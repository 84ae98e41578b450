use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::error::AppError;

pub const STATUS_ATTENDING: &str = "attending";
pub const STATUS_NOT_ATTENDING: &str = "not_attending";
pub const STATUS_MAYBE: &str = "maybe";

pub fn validate_status(status: &str) -> Result<(), AppError> {
    match status {
        STATUS_ATTENDING | STATUS_NOT_ATTENDING | STATUS_MAYBE => Ok(()),
        other => Err(AppError::Validation(format!(
            "Unknown RSVP status '{}' (expected attending, not_attending or maybe)",
            other
        ))),
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Rsvp {
    pub id: String,
    pub invitation_id: String,
    pub guest_name: String,
    pub guest_email: Option<String>, // dedupe identity; None means anonymous
    pub guest_phone: Option<String>,
    pub status: String,
    pub guest_count: i32,
    pub dietary_requirements: Option<String>,
    pub special_requests: Option<String>,
    pub message: Option<String>,
    pub responded_at: DateTime<Utc>,
}

pub struct NewRsvpParams {
    pub invitation_id: String,
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub status: String,
    pub guest_count: i32,
    pub dietary_requirements: Option<String>,
    pub special_requests: Option<String>,
    pub message: Option<String>,
}

impl Rsvp {
    pub fn new(params: NewRsvpParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            invitation_id: params.invitation_id,
            guest_name: params.guest_name,
            guest_email: params.guest_email,
            guest_phone: params.guest_phone,
            status: params.status,
            guest_count: params.guest_count,
            dietary_requirements: params.dietary_requirements,
            special_requests: params.special_requests,
            message: params.message,
            responded_at: Utc::now(),
        }
    }
}
