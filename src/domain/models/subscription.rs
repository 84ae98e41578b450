use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

pub const STATUS_ACTIVE: &str = "ACTIVE";
pub const STATUS_PAUSED: &str = "PAUSED";
pub const STATUS_CANCELLED: &str = "CANCELLED";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: Option<String>,
    pub cost: f64,
    pub cadence: String, // weekly | monthly | yearly, validated at creation
    pub start_date: NaiveDate,
    pub next_charge_date: NaiveDate, // always the cadence-advance of the prior charge date
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    pub fn new(
        user_id: String,
        name: String,
        category: Option<String>,
        cost: f64,
        cadence: String,
        start_date: NaiveDate,
        next_charge_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            name,
            category,
            cost,
            cadence,
            start_date,
            next_charge_date,
            status: STATUS_ACTIVE.to_string(),
            created_at: Utc::now(),
        }
    }
}
