mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::{AuthHeaders, TestApp};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_invitation(app: &TestApp, auth: &AuthHeaders) -> String {
    let payload = json!({
        "title": "Summer Gathering",
        "event_type": "party",
        "event_date": (Utc::now() + Duration::days(14)).to_rfc3339(),
        "host_name": "Sam Host"
    });

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/invitations")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    parse_body(res).await["code"].as_str().unwrap().to_string()
}

async fn submit(app: &TestApp, code: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invite/{}/rsvp", code))
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

async fn list_rsvps(app: &TestApp, auth: &AuthHeaders, code: &str) -> Vec<Value> {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/invitations/{}/rsvps", code))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await.as_array().unwrap().clone()
}

#[tokio::test]
async fn test_resubmission_with_same_email_updates_in_place() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("host1").await;
    let code = create_invitation(&app, &auth).await;

    let res = submit(&app, &code, json!({
        "guest_name": "Sam",
        "guest_email": "sam@x.com",
        "status": "attending",
        "guest_count": 2
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = submit(&app, &code, json!({
        "guest_name": "Sam",
        "guest_email": "sam@x.com",
        "status": "maybe",
        "guest_count": 1
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let rsvps = list_rsvps(&app, &auth, &code).await;
    assert_eq!(rsvps.len(), 1);
    assert_eq!(rsvps[0]["status"], "maybe");
    assert_eq!(rsvps[0]["guest_count"], 1);
    assert_eq!(rsvps[0]["guest_name"], "Sam");
}

#[tokio::test]
async fn test_update_overwrites_all_guest_fields() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("host2").await;
    let code = create_invitation(&app, &auth).await;

    submit(&app, &code, json!({
        "guest_name": "Pat",
        "guest_email": "pat@x.com",
        "status": "attending",
        "guest_count": 4,
        "dietary_requirements": "vegan",
        "message": "Can't wait!"
    })).await;

    submit(&app, &code, json!({
        "guest_name": "Patricia",
        "guest_email": "pat@x.com",
        "status": "not_attending",
        "guest_count": 1,
        "message": "Plans changed, sorry"
    })).await;

    let rsvps = list_rsvps(&app, &auth, &code).await;
    assert_eq!(rsvps.len(), 1);
    assert_eq!(rsvps[0]["guest_name"], "Patricia");
    assert_eq!(rsvps[0]["status"], "not_attending");
    assert_eq!(rsvps[0]["guest_count"], 1);
    assert_eq!(rsvps[0]["message"], "Plans changed, sorry");
    // Fields absent from the resubmission are cleared, not merged
    assert!(rsvps[0]["dietary_requirements"].is_null());
}

#[tokio::test]
async fn test_anonymous_rsvps_always_create() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("host3").await;
    let code = create_invitation(&app, &auth).await;

    for _ in 0..2 {
        let res = submit(&app, &code, json!({
            "guest_name": "Mystery Guest",
            "status": "attending"
        })).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let rsvps = list_rsvps(&app, &auth, &code).await;
    assert_eq!(rsvps.len(), 2);
}

#[tokio::test]
async fn test_empty_email_is_treated_as_anonymous() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("host4").await;
    let code = create_invitation(&app, &auth).await;

    for _ in 0..2 {
        let res = submit(&app, &code, json!({
            "guest_name": "Shy Guest",
            "guest_email": "",
            "status": "maybe"
        })).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let rsvps = list_rsvps(&app, &auth, &code).await;
    assert_eq!(rsvps.len(), 2);
}

#[tokio::test]
async fn test_invalid_status_is_rejected() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("host5").await;
    let code = create_invitation(&app, &auth).await;

    let res = submit(&app, &code, json!({
        "guest_name": "Confused Guest",
        "guest_email": "confused@x.com",
        "status": "definitely"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let rsvps = list_rsvps(&app, &auth, &code).await;
    assert_eq!(rsvps.len(), 0);
}

#[tokio::test]
async fn test_rsvp_to_unknown_code_is_not_found() {
    let app = TestApp::new().await;

    let res = submit(&app, "ZZZZ9999", json!({
        "guest_name": "Lost Guest",
        "status": "attending"
    })).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_guest_count_defaults_to_one() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("host6").await;
    let code = create_invitation(&app, &auth).await;

    let res = submit(&app, &code, json!({
        "guest_name": "Solo Guest",
        "guest_email": "solo@x.com",
        "status": "attending"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["guest_count"], 1);
}

#[tokio::test]
async fn test_public_view_exposes_invitation() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("host7").await;
    let code = create_invitation(&app, &auth).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/invite/{}", code))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["title"], "Summer Gathering");
}
