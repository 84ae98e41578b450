use chrono::{Duration, Months, NaiveDate};

use crate::error::AppError;

// Average weeks per month; keeps weekly costs comparable across months of
// different lengths instead of varying with the calendar.
pub const WEEKS_PER_MONTH: f64 = 4.33;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingCadence {
    Weekly,
    Monthly,
    Yearly,
}

impl BillingCadence {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(AppError::Validation(format!(
                "Unknown billing cadence '{}' (expected weekly, monthly or yearly)",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// Normalizes a cost to its monthly figure, rounded to cents.
pub fn monthly_equivalent(cost: f64, cadence: BillingCadence) -> f64 {
    let raw = match cadence {
        BillingCadence::Monthly => cost,
        BillingCadence::Yearly => cost / 12.0,
        BillingCadence::Weekly => cost * WEEKS_PER_MONTH,
    };
    (raw * 100.0).round() / 100.0
}

/// Advances a charge date by exactly one cadence period. Monthly and yearly
/// steps clamp to the last day of the target month (Jan 31 + 1 month is
/// Feb 29/28), including the December to January year rollover.
pub fn advance(date: NaiveDate, cadence: BillingCadence) -> NaiveDate {
    match cadence {
        BillingCadence::Weekly => date + Duration::days(7),
        BillingCadence::Monthly => date + Months::new(1),
        BillingCadence::Yearly => date + Months::new(12),
    }
}
