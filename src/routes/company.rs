use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::auth_dto::UploadResponse,
    dto::company_dto::{CompanyResponse, CreateCompanyPayload, UpdateCompanyPayload},
    error::{Error, Result},
    middleware::auth::Claims,
    routes::auth::receive_file,
    utils::upload::UploadKind,
    AppState,
};

#[axum::debug_handler]
pub async fn create_company(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateCompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let company = state
        .company_service
        .create(claims.account_id()?, payload)
        .await?;
    tracing::info!(company_id = %company.id, "company profile created");
    Ok((StatusCode::CREATED, Json(CompanyResponse::from(company))))
}

#[axum::debug_handler]
pub async fn my_company_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let company = state
        .company_service
        .get_by_account(claims.account_id()?)
        .await?
        .ok_or_else(|| Error::NotFound("Company profile not found".to_string()))?;
    Ok(Json(CompanyResponse::from(company)))
}

#[axum::debug_handler]
pub async fn update_company_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateCompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let company = state
        .company_service
        .update(claims.account_id()?, payload)
        .await?;
    Ok(Json(CompanyResponse::from(company)))
}

#[axum::debug_handler]
pub async fn list_companies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let companies = state.company_service.list_all().await?;
    let items: Vec<CompanyResponse> = companies.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[axum::debug_handler]
pub async fn upload_logo(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let url = receive_file(multipart, UploadKind::CompanyLogo).await?;
    state
        .company_service
        .set_logo(claims.account_id()?, &url)
        .await?;
    Ok(Json(UploadResponse { url }))
}

#[axum::debug_handler]
pub async fn upload_cover(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let url = receive_file(multipart, UploadKind::CompanyCover).await?;
    state
        .company_service
        .set_cover(claims.account_id()?, &url)
        .await?;
    Ok(Json(UploadResponse { url }))
}
