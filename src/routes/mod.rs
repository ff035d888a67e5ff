pub mod application;
pub mod auth;
pub mod company;
pub mod health;
pub mod job;
pub mod message;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::middleware::{auth as auth_mw, rate_limit};
use crate::AppState;

/// Full API surface. Public routes sit behind the shared rate limiter; the
/// rest require a bearer token.
pub fn api_router(public_rps: u32) -> Router<AppState> {
    let public_api = Router::new()
        .route("/health", get(health::health))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/companies/profile", get(company::list_companies))
        .route("/api/jobs", get(job::browse_jobs))
        .route("/api/jobs/:id", get(job::get_job))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::RateLimiter::new(public_rps),
            rate_limit::rps_middleware,
        ));

    let authed_api = Router::new()
        .route(
            "/api/auth/profile",
            get(auth::profile).put(auth::update_profile),
        )
        .route("/api/auth/profile/picture", post(auth::upload_profile_picture))
        .route("/api/auth/profile/resume", post(auth::upload_resume))
        .route("/api/companies/create", post(company::create_company))
        .route(
            "/api/companies/my-profile",
            get(company::my_company_profile).put(company::update_company_profile),
        )
        .route("/api/companies/logo", post(company::upload_logo))
        .route("/api/companies/cover", post(company::upload_cover))
        .route(
            "/api/companies/applicants",
            get(application::company_applicants),
        )
        .route(
            "/api/companies/applicants/:id",
            patch(application::update_application_status),
        )
        .route("/api/jobs/post", post(job::post_job))
        .route("/api/jobs/my-applications", get(application::my_applications))
        .route("/api/jobs/:id/apply", post(application::apply))
        .route(
            "/api/applications/:id/messages",
            get(message::list_messages).post(message::send_message),
        )
        .route("/api/applications/:id/mark-read", post(message::mark_read))
        .route("/api/messages/threads", get(message::list_threads))
        .route("/api/messages/unread-count", get(message::unread_count))
        .layer(axum::middleware::from_fn(auth_mw::require_bearer_auth));

    public_api.merge(authed_api)
}
