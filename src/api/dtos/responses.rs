use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::{invitation::Invitation, subscription::Subscription};

#[derive(Serialize)]
pub struct InvitationResponse {
    #[serde(flatten)]
    pub invitation: Invitation,
    pub share_url: String,
}

#[derive(Serialize)]
pub struct RsvpSummary {
    pub guest_name: String,
    pub status: String,
    pub guest_count: i32,
    pub responded_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct InvitationStatsResponse {
    pub total_rsvps: i64,
    pub attending: i64,
    pub not_attending: i64,
    pub maybe: i64,
    pub rsvps: Vec<RsvpSummary>,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub total_invitations: i64,
    pub total_rsvps: i64,
    pub total_attending: i64,
    pub recent_invitations: Vec<Invitation>,
}

#[derive(Serialize)]
pub struct SubscriptionCost {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub monthly_equivalent: f64,
}

#[derive(Serialize)]
pub struct SubscriptionSummaryResponse {
    pub active_count: i64,
    pub total_monthly: f64,
    pub subscriptions: Vec<SubscriptionCost>,
}
