use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{CreateSubscriptionRequest, UpdateSubscriptionRequest};
use crate::api::dtos::responses::{SubscriptionCost, SubscriptionSummaryResponse};
use crate::domain::models::subscription::{Subscription, STATUS_ACTIVE, STATUS_CANCELLED, STATUS_PAUSED};
use crate::domain::services::billing::{advance, monthly_equivalent, BillingCadence};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_subscription(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateSubscriptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if payload.cost < 0.0 {
        return Err(AppError::Validation("Cost cannot be negative".into()));
    }

    // Cadence is validated here, at creation time; everything derived later
    // reads the already-vetted stored value.
    let cadence = BillingCadence::parse(&payload.cadence)?;
    let next_charge_date = advance(payload.start_date, cadence);

    let subscription = Subscription::new(
        user.user_id,
        payload.name,
        payload.category,
        payload.cost,
        cadence.as_str().to_string(),
        payload.start_date,
        next_charge_date,
    );

    let created = state.subscription_repo.create(&subscription).await?;
    info!("Subscription created: {}", created.id);
    Ok(Json(created))
}

pub async fn list_subscriptions(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let subscriptions = state.subscription_repo.list_by_user(&user.user_id).await?;
    Ok(Json(subscriptions))
}

pub async fn subscription_summary(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let subscriptions = state.subscription_repo.list_by_user(&user.user_id).await?;

    let mut total_monthly = 0.0;
    let mut active_count = 0i64;
    let mut items = Vec::with_capacity(subscriptions.len());

    for subscription in subscriptions {
        let cadence = BillingCadence::parse(&subscription.cadence)?;
        let monthly = monthly_equivalent(subscription.cost, cadence);

        if subscription.status == STATUS_ACTIVE {
            active_count += 1;
            total_monthly += monthly;
        }

        items.push(SubscriptionCost {
            subscription,
            monthly_equivalent: monthly,
        });
    }

    Ok(Json(SubscriptionSummaryResponse {
        active_count,
        total_monthly: (total_monthly * 100.0).round() / 100.0,
        subscriptions: items,
    }))
}

pub async fn get_subscription(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let subscription = state.subscription_repo.find_by_id(&user.user_id, &id).await?
        .ok_or(AppError::NotFound("Subscription not found".into()))?;
    Ok(Json(subscription))
}

pub async fn update_subscription(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSubscriptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut subscription = state.subscription_repo.find_by_id(&user.user_id, &id).await?
        .ok_or(AppError::NotFound("Subscription not found".into()))?;

    if let Some(name) = payload.name {
        if name.is_empty() {
            return Err(AppError::Validation("Name cannot be empty".into()));
        }
        subscription.name = name;
    }
    if let Some(category) = payload.category {
        subscription.category = Some(category);
    }
    if let Some(cost) = payload.cost {
        if cost < 0.0 {
            return Err(AppError::Validation("Cost cannot be negative".into()));
        }
        subscription.cost = cost;
    }
    if let Some(status) = payload.status {
        match status.as_str() {
            STATUS_ACTIVE | STATUS_PAUSED | STATUS_CANCELLED => subscription.status = status,
            other => {
                return Err(AppError::Validation(format!(
                    "Unknown subscription status '{}'",
                    other
                )));
            }
        }
    }

    let updated = state.subscription_repo.update(&subscription).await?;
    info!("Subscription updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_subscription(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.subscription_repo.delete(&user.user_id, &id).await?;
    info!("Subscription deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

/// Rolls the next charge date forward by exactly one cadence period.
/// Invoked by the external charge scheduler once per posted charge, however
/// late that trigger runs.
pub async fn advance_subscription(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut subscription = state.subscription_repo.find_by_id(&user.user_id, &id).await?
        .ok_or(AppError::NotFound("Subscription not found".into()))?;

    if subscription.status != STATUS_ACTIVE {
        return Err(AppError::Conflict("Subscription is not active".into()));
    }

    let cadence = BillingCadence::parse(&subscription.cadence)?;
    subscription.next_charge_date = advance(subscription.next_charge_date, cadence);

    let updated = state.subscription_repo.update(&subscription).await?;
    info!("Subscription {} advanced to {}", updated.id, updated.next_charge_date);
    Ok(Json(updated))
}
