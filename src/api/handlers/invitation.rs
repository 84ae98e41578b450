use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{CreateInvitationRequest, UpdateInvitationRequest};
use crate::api::dtos::responses::{DashboardResponse, InvitationResponse, InvitationStatsResponse, RsvpSummary};
use crate::domain::models::invitation::{Invitation, NewInvitationParams};
use crate::domain::models::rsvp::{STATUS_ATTENDING, STATUS_MAYBE, STATUS_NOT_ATTENDING};
use crate::domain::services::gallery::{template_exists, DESIGN_TEMPLATES};
use crate::domain::services::invite_codes::allocate_code;
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::{info, warn};

pub async fn create_invitation(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateInvitationRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }
    if payload.host_name.is_empty() {
        return Err(AppError::Validation("Host name is required".into()));
    }
    if let Some(template_id) = payload.template_id.as_deref()
        && !template_exists(template_id)
    {
        return Err(AppError::Validation(format!("Unknown template '{}'", template_id)));
    }

    // The UNIQUE constraint on the code column is the authoritative guard;
    // losing the insert race just means drawing a fresh code.
    let created = loop {
        let code = allocate_code(state.invitation_repo.as_ref()).await?;

        let invitation = Invitation::new(NewInvitationParams {
            user_id: user.user_id.clone(),
            code,
            title: payload.title.clone(),
            description: payload.description.clone(),
            event_type: payload.event_type.clone(),
            event_date: payload.event_date,
            event_time: payload.event_time.clone(),
            venue_name: payload.venue_name.clone(),
            venue_address: payload.venue_address.clone(),
            host_name: payload.host_name.clone(),
            host_email: payload.host_email.clone(),
            host_phone: payload.host_phone.clone(),
            template_id: payload.template_id.clone(),
            color_scheme: payload.color_scheme.clone(),
            custom_message: payload.custom_message.clone(),
            max_guests: payload.max_guests,
        });

        match state.invitation_repo.create(&invitation).await {
            Ok(created) => break created,
            Err(e) if e.is_unique_violation() => {
                warn!("Invitation code collided on insert, redrawing");
                continue;
            }
            Err(e) => return Err(e),
        }
    };

    info!("Invitation created: {} ({})", created.id, created.code);

    let share_url = created.share_url(&state.config.frontend_url);
    Ok(Json(InvitationResponse { invitation: created, share_url }))
}

pub async fn list_invitations(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let invitations = state.invitation_repo.list_by_user(&user.user_id).await?;
    Ok(Json(invitations))
}

pub async fn get_invitation(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = find_owned(&state, &user, &code).await?;
    let share_url = invitation.share_url(&state.config.frontend_url);
    Ok(Json(InvitationResponse { invitation, share_url }))
}

pub async fn update_invitation(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(code): Path<String>,
    Json(payload): Json<UpdateInvitationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut invitation = find_owned(&state, &user, &code).await?;

    if let Some(title) = payload.title { invitation.title = title; }
    if let Some(description) = payload.description { invitation.description = Some(description); }
    if let Some(event_type) = payload.event_type { invitation.event_type = event_type; }
    if let Some(event_date) = payload.event_date { invitation.event_date = event_date; }
    if let Some(event_time) = payload.event_time { invitation.event_time = Some(event_time); }
    if let Some(venue_name) = payload.venue_name { invitation.venue_name = Some(venue_name); }
    if let Some(venue_address) = payload.venue_address { invitation.venue_address = Some(venue_address); }
    if let Some(host_name) = payload.host_name { invitation.host_name = host_name; }
    if let Some(host_email) = payload.host_email { invitation.host_email = Some(host_email); }
    if let Some(host_phone) = payload.host_phone { invitation.host_phone = Some(host_phone); }
    if let Some(template_id) = payload.template_id { invitation.template_id = template_id; }
    if let Some(color_scheme) = payload.color_scheme { invitation.color_scheme = color_scheme; }
    if let Some(custom_message) = payload.custom_message { invitation.custom_message = Some(custom_message); }
    if let Some(is_public) = payload.is_public { invitation.is_public = is_public; }
    if let Some(max_guests) = payload.max_guests { invitation.max_guests = Some(max_guests); }
    invitation.updated_at = Utc::now();

    let updated = state.invitation_repo.update(&invitation).await?;
    info!("Invitation updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_invitation(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = find_owned(&state, &user, &code).await?;
    state.invitation_repo.delete(&user.user_id, &invitation.id).await?;
    info!("Invitation deleted: {}", invitation.id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn invitation_stats(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = find_owned(&state, &user, &code).await?;
    let rsvps = state.rsvp_repo.list_by_invitation(&invitation.id).await?;

    let attending = rsvps.iter().filter(|r| r.status == STATUS_ATTENDING).count() as i64;
    let not_attending = rsvps.iter().filter(|r| r.status == STATUS_NOT_ATTENDING).count() as i64;
    let maybe = rsvps.iter().filter(|r| r.status == STATUS_MAYBE).count() as i64;

    Ok(Json(InvitationStatsResponse {
        total_rsvps: rsvps.len() as i64,
        attending,
        not_attending,
        maybe,
        rsvps: rsvps.into_iter().map(|r| RsvpSummary {
            guest_name: r.guest_name,
            status: r.status,
            guest_count: r.guest_count,
            responded_at: r.responded_at,
        }).collect(),
    }))
}

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let invitations = state.invitation_repo.list_by_user(&user.user_id).await?;

    let mut total_rsvps = 0i64;
    let mut total_attending = 0i64;
    for invitation in &invitations {
        let rsvps = state.rsvp_repo.list_by_invitation(&invitation.id).await?;
        total_rsvps += rsvps.len() as i64;
        total_attending += rsvps.iter().filter(|r| r.status == STATUS_ATTENDING).count() as i64;
    }

    Ok(Json(DashboardResponse {
        total_invitations: invitations.len() as i64,
        total_rsvps,
        total_attending,
        recent_invitations: invitations.into_iter().take(5).collect(),
    }))
}

pub async fn template_gallery() -> impl IntoResponse {
    Json(DESIGN_TEMPLATES)
}

async fn find_owned(state: &AppState, user: &AuthUser, code: &str) -> Result<Invitation, AppError> {
    let invitation = state.invitation_repo.find_by_code(code).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    // Owners only; respond as not-found so codes are not probeable.
    if invitation.user_id != user.user_id {
        return Err(AppError::NotFound("Invitation not found".into()));
    }
    Ok(invitation)
}
