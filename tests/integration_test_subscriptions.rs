mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{AuthHeaders, TestApp};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_subscription(app: &TestApp, auth: &AuthHeaders, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/subscriptions")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_create_seeds_next_charge_date() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("tracker1").await;

    let res = create_subscription(&app, &auth, json!({
        "name": "StreamFlix",
        "cost": 9.99,
        "cadence": "monthly",
        "start_date": "2024-01-15"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["status"], "ACTIVE");
    assert_eq!(body["next_charge_date"], "2024-02-15");
}

#[tokio::test]
async fn test_unknown_cadence_rejected_at_creation() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("tracker2").await;

    let res = create_subscription(&app, &auth, json!({
        "name": "Mystery Service",
        "cost": 5.00,
        "cadence": "fortnightly",
        "start_date": "2024-01-01"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_negative_cost_rejected() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("tracker3").await;

    let res = create_subscription(&app, &auth, json!({
        "name": "Refund Machine",
        "cost": -1.00,
        "cadence": "monthly",
        "start_date": "2024-01-01"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_advance_rolls_exactly_one_period() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("tracker4").await;

    let res = create_subscription(&app, &auth, json!({
        "name": "GymPass",
        "cost": 30.00,
        "cadence": "monthly",
        "start_date": "2024-11-30"
    })).await;
    let body = parse_body(res).await;
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["next_charge_date"], "2024-12-30");

    let advance = |app: &TestApp, auth: &AuthHeaders, id: String| {
        let req = Request::builder().method("POST").uri(format!("/api/v1/subscriptions/{}/advance", id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap();
        app.router.clone().oneshot(req)
    };

    // Each posted charge moves the date by one period, never more —
    // December rolls into January here.
    let res = advance(&app, &auth, id.clone()).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["next_charge_date"], "2025-01-30");

    let res = advance(&app, &auth, id.clone()).await.unwrap();
    assert_eq!(parse_body(res).await["next_charge_date"], "2025-02-28");

    let res = advance(&app, &auth, id).await.unwrap();
    assert_eq!(parse_body(res).await["next_charge_date"], "2025-03-28");
}

#[tokio::test]
async fn test_advance_requires_active_status() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("tracker5").await;

    let res = create_subscription(&app, &auth, json!({
        "name": "Paused Service",
        "cost": 4.99,
        "cadence": "weekly",
        "start_date": "2024-06-01"
    })).await;
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/subscriptions/{}", id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"status": "PAUSED"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/subscriptions/{}/advance", id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_summary_normalizes_mixed_cadences() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("tracker6").await;

    for payload in [
        json!({"name": "Weekly Box", "cost": 10.00, "cadence": "weekly", "start_date": "2024-01-01"}),
        json!({"name": "Annual License", "cost": 12.00, "cadence": "yearly", "start_date": "2024-01-01"}),
        json!({"name": "StreamFlix", "cost": 9.99, "cadence": "monthly", "start_date": "2024-01-01"}),
    ] {
        let res = create_subscription(&app, &auth, payload).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/subscriptions/summary")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let summary = parse_body(res).await;
    assert_eq!(summary["active_count"], 3);
    // 43.30 + 1.00 + 9.99
    assert_eq!(summary["total_monthly"], 54.29);

    let items = summary["subscriptions"].as_array().unwrap();
    let monthly_of = |name: &str| {
        items.iter().find(|i| i["name"] == name).unwrap()["monthly_equivalent"].as_f64().unwrap()
    };
    assert_eq!(monthly_of("Weekly Box"), 43.30);
    assert_eq!(monthly_of("Annual License"), 1.00);
    assert_eq!(monthly_of("StreamFlix"), 9.99);
}

#[tokio::test]
async fn test_cancelled_subscriptions_excluded_from_total() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("tracker7").await;

    let res = create_subscription(&app, &auth, json!({
        "name": "Keeper", "cost": 10.00, "cadence": "monthly", "start_date": "2024-01-01"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = create_subscription(&app, &auth, json!({
        "name": "Dropped", "cost": 99.00, "cadence": "monthly", "start_date": "2024-01-01"
    })).await;
    let dropped_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/subscriptions/{}", dropped_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"status": "CANCELLED"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/subscriptions/summary")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let summary = parse_body(res).await;
    assert_eq!(summary["active_count"], 1);
    assert_eq!(summary["total_monthly"], 10.00);
    // Cancelled entries still appear in the listing
    assert_eq!(summary["subscriptions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_subscriptions_are_owner_scoped() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("sub_alice").await;
    let bob = app.register_and_login("sub_bob").await;

    let res = create_subscription(&app, &alice, json!({
        "name": "Private Service", "cost": 5.00, "cadence": "monthly", "start_date": "2024-01-01"
    })).await;
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/subscriptions/{}", id))
            .header(header::COOKIE, format!("access_token={}", bob.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_status_update_rejected() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("tracker8").await;

    let res = create_subscription(&app, &auth, json!({
        "name": "Statusful", "cost": 5.00, "cadence": "monthly", "start_date": "2024-01-01"
    })).await;
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/subscriptions/{}", id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"status": "HIBERNATING"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
