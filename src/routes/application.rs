use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::application_dto::{ApplicationResponse, ApplyPayload, UpdateStatusPayload},
    error::Result,
    middleware::auth::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn apply(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(job_id): Path<Uuid>,
    Json(payload): Json<ApplyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let application = state
        .application_service
        .apply(job_id, claims.account_id()?, payload.cover_letter)
        .await?;
    tracing::info!(application_id = %application.id, job_id = %job_id, "application submitted");
    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::from(application)),
    ))
}

#[axum::debug_handler]
pub async fn my_applications(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let rows = state
        .application_service
        .list_for_applicant(claims.account_id()?)
        .await?;
    Ok(Json(rows))
}

#[axum::debug_handler]
pub async fn company_applicants(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let company = state
        .company_service
        .require_for_account(claims.account_id()?)
        .await?;
    let rows = state.application_service.list_for_company(company.id).await?;
    Ok(Json(rows))
}

#[axum::debug_handler]
pub async fn update_application_status(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let application = state
        .application_service
        .update_status(id, claims.account_id()?, &payload.status)
        .await?;
    Ok(Json(ApplicationResponse::from(application)))
}
