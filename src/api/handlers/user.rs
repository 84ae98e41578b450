use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::UpdatePreferencesRequest;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn get_me(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_id(&user.user_id).await?
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(user))
}

pub async fn update_preferences(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<UpdatePreferencesRequest>,
) -> Result<impl IntoResponse, AppError> {
    let current = state.user_repo.find_by_id(&user.user_id).await?
        .ok_or(AppError::Unauthorized)?;

    let email_new_rsvp = payload.email_new_rsvp.unwrap_or(current.email_new_rsvp);
    let email_milestones = payload.email_milestones.unwrap_or(current.email_milestones);

    let updated = state.user_repo
        .update_preferences(&current.id, email_new_rsvp, email_milestones)
        .await?;

    info!("Notification preferences updated for user {}", updated.id);
    Ok(Json(updated))
}
