use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, health, invitation, rsvp, subscription, user};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Account
        .route("/api/v1/me", get(user::get_me))
        .route("/api/v1/me/preferences", put(user::update_preferences))

        // Invitation management (owner)
        .route("/api/v1/invitations", post(invitation::create_invitation).get(invitation::list_invitations))
        .route("/api/v1/invitations/{code}", get(invitation::get_invitation).put(invitation::update_invitation).delete(invitation::delete_invitation))
        .route("/api/v1/invitations/{code}/rsvps", get(rsvp::list_rsvps))
        .route("/api/v1/invitations/{code}/stats", get(invitation::invitation_stats))
        .route("/api/v1/dashboard", get(invitation::dashboard))

        // Public guest flow
        .route("/api/v1/templates", get(invitation::template_gallery))
        .route("/api/v1/invite/{code}", get(rsvp::view_invitation))
        .route("/api/v1/invite/{code}/rsvp", post(rsvp::submit_rsvp))

        // Subscription tracker
        .route("/api/v1/subscriptions", post(subscription::create_subscription).get(subscription::list_subscriptions))
        .route("/api/v1/subscriptions/summary", get(subscription::subscription_summary))
        .route("/api/v1/subscriptions/{id}", get(subscription::get_subscription).put(subscription::update_subscription).delete(subscription::delete_subscription))
        .route("/api/v1/subscriptions/{id}/advance", post(subscription::advance_subscription))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
