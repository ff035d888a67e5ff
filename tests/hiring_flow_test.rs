use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

async fn setup() -> Option<Router> {
    dotenvy::dotenv().ok();
    if env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL not set; skipping integration test");
        return None;
    }
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    if env::var("JWT_SECRET").is_err() {
        env::set_var("JWT_SECRET", "test_secret_key");
    }
    let _ = jobboard_backend::config::init_config();

    let pool = jobboard_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    let state = jobboard_backend::AppState::new(pool);
    Some(jobboard_backend::routes::api_router(10_000).with_state(state))
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = if let Some(body) = body {
        builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    };

    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
    };
    (status, value)
}

async fn signup(app: &Router, name: &str, email: &str) -> String {
    let (status, body) = call(
        app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({"name": name, "email": email, "password": "hunter22hunter22"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {}", body);
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn hiring_flow_end_to_end() {
    let Some(app) = setup().await else { return };
    let tag = Uuid::new_v4();

    // Company side.
    let company_token = signup(&app, "Acme HR", &format!("acme_{}@example.com", tag)).await;
    let (status, _) = call(
        &app,
        "POST",
        "/api/companies/create",
        Some(&company_token),
        Some(json!({
            "company_name": "Acme",
            "email": format!("jobs_{}@acme.example", tag),
            "industry": "Software",
            "location": "Berlin",
            "description": "We build things"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, job) = call(
        &app,
        "POST",
        "/api/jobs/post",
        Some(&company_token),
        Some(json!({
            "title": "Backend Engineer",
            "description": "Rust services",
            "requirements": ["rust", "sql"],
            "location": "Berlin",
            "remote": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "job post failed: {}", job);
    let job_id = job["id"].as_str().unwrap().to_string();
    assert_eq!(job["company"]["company_name"], "Acme");

    // Applicant side.
    let applicant_token = signup(&app, "Basira", &format!("basira_{}@example.com", tag)).await;
    let (status, application) = call(
        &app,
        "POST",
        &format!("/api/jobs/{}/apply", job_id),
        Some(&applicant_token),
        Some(json!({"cover_letter": "Hello"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(application["status"], "pending");
    let application_id = application["id"].as_str().unwrap().to_string();

    // Duplicate apply hits the unique constraint.
    let (status, _) = call(
        &app,
        "POST",
        &format!("/api/jobs/{}/apply", job_id),
        Some(&applicant_token),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Company sees the applicant, pending.
    let (status, applicants) = call(
        &app,
        "GET",
        "/api/companies/applicants",
        Some(&company_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let found = applicants
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["id"] == json!(application_id))
        .expect("application visible to company");
    assert_eq!(found["status"], "pending");
    assert_eq!(found["applicant_name"], "Basira");

    // Backward and unknown transitions are rejected.
    let (status, _) = call(
        &app,
        "PATCH",
        &format!("/api/companies/applicants/{}", application_id),
        Some(&company_token),
        Some(json!({"status": "archived"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = call(
        &app,
        "PATCH",
        &format!("/api/companies/applicants/{}", application_id),
        Some(&company_token),
        Some(json!({"status": "accepted"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "accepted");

    // Accepted is terminal.
    let (status, _) = call(
        &app,
        "PATCH",
        &format!("/api/companies/applicants/{}", application_id),
        Some(&company_token),
        Some(json!({"status": "pending"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // A third party cannot touch the status at all.
    let outsider_token = signup(&app, "Eve", &format!("eve_{}@example.com", tag)).await;
    let (status, _) = call(
        &app,
        "PATCH",
        &format!("/api/companies/applicants/{}", application_id),
        Some(&outsider_token),
        Some(json!({"status": "rejected"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Applicant sees the final status.
    let (status, mine) = call(
        &app,
        "GET",
        "/api/jobs/my-applications",
        Some(&applicant_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let found = mine
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["id"] == json!(application_id))
        .expect("own application listed");
    assert_eq!(found["status"], "accepted");
    assert_eq!(found["company_name"], "Acme");
}

#[tokio::test]
async fn duplicate_email_signup_conflicts() {
    let Some(app) = setup().await else { return };
    let email = format!("dupe_{}@example.com", Uuid::new_v4());

    signup(&app, "First", &email).await;
    let (status, _) = call(
        &app,
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({"name": "Second", "email": email, "password": "hunter22hunter22"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn job_post_requires_company_profile() {
    let Some(app) = setup().await else { return };
    let token = signup(
        &app,
        "No Company",
        &format!("solo_{}@example.com", Uuid::new_v4()),
    )
    .await;

    let (status, _) = call(
        &app,
        "POST",
        "/api/jobs/post",
        Some(&token),
        Some(json!({
            "title": "Ghost Role",
            "description": "Should not exist",
            "location": "Nowhere"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn company_snapshot_survives_profile_edits() {
    let Some(app) = setup().await else { return };
    let tag = Uuid::new_v4();

    let token = signup(&app, "Snap Owner", &format!("snap_{}@example.com", tag)).await;
    call(
        &app,
        "POST",
        "/api/companies/create",
        Some(&token),
        Some(json!({
            "company_name": "Original Name",
            "email": format!("snap_co_{}@example.com", tag),
            "industry": "Robotics",
            "location": "Oslo"
        })),
    )
    .await;

    let (_, job) = call(
        &app,
        "POST",
        "/api/jobs/post",
        Some(&token),
        Some(json!({
            "title": "Roboticist",
            "description": "Arms and legs",
            "location": "Oslo"
        })),
    )
    .await;
    let job_id = job["id"].as_str().unwrap().to_string();

    let (status, _) = call(
        &app,
        "PUT",
        "/api/companies/my-profile",
        Some(&token),
        Some(json!({"company_name": "Renamed Inc"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The posting still carries the name the applicant saw.
    let (status, fetched) = call(&app, "GET", &format!("/api/jobs/{}", job_id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["company"]["company_name"], "Original Name");
}

#[tokio::test]
async fn auth_is_required_for_protected_routes() {
    let Some(app) = setup().await else { return };

    let (status, _) = call(&app, "GET", "/api/auth/profile", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(&app, "GET", "/api/auth/profile", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Public browse stays open.
    let (status, _) = call(&app, "GET", "/api/jobs", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn skills_round_trip_through_profile() {
    let Some(app) = setup().await else { return };
    let token = signup(
        &app,
        "Skiller",
        &format!("skills_{}@example.com", Uuid::new_v4()),
    )
    .await;

    let (status, profile) = call(
        &app,
        "PUT",
        "/api/auth/profile",
        Some(&token),
        Some(json!({"skills": ["python", "go"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["skills"], json!(["python", "go"]));

    let (status, profile) = call(&app, "GET", "/api/auth/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["skills"], json!(["python", "go"]));
}
