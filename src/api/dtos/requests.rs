use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdatePreferencesRequest {
    pub email_new_rsvp: Option<bool>,
    pub email_milestones: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateInvitationRequest {
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

#[derive(Deserialize)]
pub struct UpdateInvitationRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub event_time: Option<String>,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub host_name: Option<String>,
    pub host_email: Option<String>,
    pub host_phone: Option<String>,
    pub template_id: Option<String>,
    pub color_scheme: Option<String>,
    pub custom_message: Option<String>,
    pub is_public: Option<bool>,
    pub max_guests: Option<i32>,
}

#[derive(Deserialize)]
pub struct SubmitRsvpRequest {
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub status: String,
    pub guest_count: Option<i32>,
    pub dietary_requirements: Option<String>,
    pub special_requests: Option<String>,
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateSubscriptionRequest {
    pub name: String,
    pub category: Option<String>,
    pub cost: f64,
    pub cadence: String,
    pub start_date: NaiveDate,
}

#[derive(Deserialize)]
pub struct UpdateSubscriptionRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub cost: Option<f64>,
    pub status: Option<String>,
}
