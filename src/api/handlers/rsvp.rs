use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::SubmitRsvpRequest;
use crate::domain::services::rsvp_service::RsvpSubmission;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn view_invitation(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = state.invitation_repo.find_by_code(&code).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    if !invitation.is_public {
        return Err(AppError::NotFound("Invitation not found".into()));
    }

    Ok(Json(invitation))
}

pub async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Json(payload): Json<SubmitRsvpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = state.invitation_repo.find_by_code(&code).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    if payload.guest_name.is_empty() {
        return Err(AppError::Validation("Guest name is required".into()));
    }

    let host = state.user_repo.find_by_id(&invitation.user_id).await?
        .ok_or(AppError::Internal)?;

    let rsvp = state.rsvp_service.submit(&invitation, &host, RsvpSubmission {
        guest_name: payload.guest_name,
        guest_email: payload.guest_email,
        guest_phone: payload.guest_phone,
        status: payload.status,
        guest_count: payload.guest_count.unwrap_or(1),
        dietary_requirements: payload.dietary_requirements,
        special_requests: payload.special_requests,
        message: payload.message,
    }).await?;

    info!("RSVP submitted for invitation {}: {}", code, rsvp.id);
    Ok(Json(rsvp))
}

pub async fn list_rsvps(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = state.invitation_repo.find_by_code(&code).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    if invitation.user_id != user.user_id {
        return Err(AppError::NotFound("Invitation not found".into()));
    }

    let rsvps = state.rsvp_repo.list_by_invitation(&invitation.id).await?;
    Ok(Json(rsvps))
}
