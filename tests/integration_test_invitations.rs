mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::{AuthHeaders, TestApp};
use serde_json::{json, Value};
use std::collections::HashSet;
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn invitation_payload(title: &str) -> Value {
    json!({
        "title": title,
        "description": "You are cordially invited",
        "event_type": "birthday",
        "event_date": (Utc::now() + Duration::days(30)).to_rfc3339(),
        "event_time": "18:00",
        "venue_name": "Garden Hall",
        "venue_address": "1 Park Lane",
        "host_name": "Alex Host",
        "host_email": "alex@example.com"
    })
}

async fn create_invitation(app: &TestApp, auth: &AuthHeaders, title: &str) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/invitations")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(invitation_payload(title).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

#[tokio::test]
async fn test_create_invitation_generates_share_code() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("hostess").await;

    let body = create_invitation(&app, &auth, "Garden Party").await;

    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

    let share_url = body["share_url"].as_str().unwrap();
    assert!(share_url.ends_with(&format!("/invite/{}", code)));
}

#[tokio::test]
async fn test_codes_are_pairwise_distinct() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("collector").await;

    let mut codes = HashSet::new();
    for i in 0..20 {
        let body = create_invitation(&app, &auth, &format!("Event {}", i)).await;
        codes.insert(body["code"].as_str().unwrap().to_string());
    }

    assert_eq!(codes.len(), 20);
}

#[tokio::test]
async fn test_invitation_creation_requires_auth() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/invitations")
            .header("Content-Type", "application/json")
            .body(Body::from(invitation_payload("Sneaky").to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_owner_isolation() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice").await;
    let bob = app.register_and_login("bob").await;

    let body = create_invitation(&app, &alice, "Alice Only").await;
    let code = body["code"].as_str().unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/invitations/{}", code))
            .header(header::COOKIE, format!("access_token={}", bob.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/invitations")
            .header(header::COOKIE, format!("access_token={}", bob.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let listed = parse_body(res).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_update_and_delete_invitation() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("editor").await;

    let body = create_invitation(&app, &auth, "Draft Title").await;
    let code = body["code"].as_str().unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/invitations/{}", code))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"title": "Final Title", "venue_name": "New Venue"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated = parse_body(res).await;
    assert_eq!(updated["title"], "Final Title");
    assert_eq!(updated["venue_name"], "New Venue");
    // The share code never changes once assigned
    assert_eq!(updated["code"].as_str().unwrap(), code);

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/invitations/{}", code))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/invitations/{}", code))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invitation_stats() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("statshost").await;

    let body = create_invitation(&app, &auth, "Counted Event").await;
    let code = body["code"].as_str().unwrap();

    let guests = [
        ("Ann", "ann@x.com", "attending", 2),
        ("Ben", "ben@x.com", "attending", 1),
        ("Cleo", "cleo@x.com", "maybe", 1),
        ("Dan", "dan@x.com", "not_attending", 1),
    ];

    for (name, email, status, count) in guests {
        let res = app.router.clone().oneshot(
            Request::builder().method("POST").uri(format!("/api/v1/invite/{}/rsvp", code))
                .header("Content-Type", "application/json")
                .body(Body::from(json!({
                    "guest_name": name,
                    "guest_email": email,
                    "status": status,
                    "guest_count": count
                }).to_string())).unwrap()
        ).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/invitations/{}/stats", code))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let stats = parse_body(res).await;
    assert_eq!(stats["total_rsvps"], 4);
    assert_eq!(stats["attending"], 2);
    assert_eq!(stats["not_attending"], 1);
    assert_eq!(stats["maybe"], 1);
    assert_eq!(stats["rsvps"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_template_gallery_is_public() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/templates")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let gallery = parse_body(res).await;
    let templates = gallery.as_array().unwrap();
    assert!(templates.len() >= 15);
    assert!(templates.iter().any(|t| t["id"] == "classic"));
}

#[tokio::test]
async fn test_unknown_template_rejected() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("designer").await;

    let mut payload = invitation_payload("Styled Event");
    payload["template_id"] = json!("glitter-explosion");

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/invitations")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard_aggregates() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("planner").await;

    let first = create_invitation(&app, &auth, "First").await;
    create_invitation(&app, &auth, "Second").await;

    let code = first["code"].as_str().unwrap();
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invite/{}/rsvp", code))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "guest_name": "Guest",
                "guest_email": "g@x.com",
                "status": "attending"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/dashboard")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let dashboard = parse_body(res).await;
    assert_eq!(dashboard["total_invitations"], 2);
    assert_eq!(dashboard["total_rsvps"], 1);
    assert_eq!(dashboard["total_attending"], 1);
}
