use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::auth_dto::{
        AccountSummary, AuthResponse, LoginPayload, ProfileResponse, SignupPayload,
        UpdateProfilePayload, UploadResponse,
    },
    error::{Error, Result},
    middleware::auth::Claims,
    utils::token,
    utils::upload::{save_upload, UploadKind},
    AppState,
};

#[axum::debug_handler]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let account = state.account_service.create(payload).await?;

    let config = crate::config::get_config();
    let access_token = token::issue_token(account.id, &config.jwt_secret, config.token_ttl_minutes)?;

    tracing::info!(account_id = %account.id, "account created");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token,
            user: AccountSummary {
                id: account.id,
                email: account.email,
                name: account.name,
                // A brand new account cannot have onboarded a company yet.
                has_company_profile: false,
            },
        }),
    ))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let account = state
        .account_service
        .get_by_email(&payload.email)
        .await?
        .ok_or_else(|| Error::Unauthorized("Invalid credentials".to_string()))?;

    let ok = crate::utils::crypto::verify_password(&payload.password, &account.password_hash)
        .unwrap_or(false);
    if !ok {
        return Err(Error::Unauthorized("Invalid credentials".to_string()));
    }

    let has_company_profile = state
        .company_service
        .get_by_account(account.id)
        .await?
        .is_some();

    let config = crate::config::get_config();
    let access_token = token::issue_token(account.id, &config.jwt_secret, config.token_ttl_minutes)?;

    Ok(Json(AuthResponse {
        access_token,
        user: AccountSummary {
            id: account.id,
            email: account.email,
            name: account.name,
            has_company_profile,
        },
    }))
}

#[axum::debug_handler]
pub async fn profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let account = state.account_service.get_by_id(claims.account_id()?).await?;
    Ok(Json(ProfileResponse::from(account)))
}

#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let account = state
        .account_service
        .update_profile(claims.account_id()?, payload)
        .await?;
    Ok(Json(ProfileResponse::from(account)))
}

#[axum::debug_handler]
pub async fn upload_profile_picture(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let url = receive_file(multipart, UploadKind::ProfilePicture).await?;
    state
        .account_service
        .set_profile_picture(claims.account_id()?, &url)
        .await?;
    Ok(Json(UploadResponse { url }))
}

#[axum::debug_handler]
pub async fn upload_resume(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let url = receive_file(multipart, UploadKind::Resume).await?;
    state
        .account_service
        .set_resume(claims.account_id()?, &url)
        .await?;
    Ok(Json(UploadResponse { url }))
}

/// Pulls the first file field out of a multipart body and stores it.
pub async fn receive_file(mut multipart: Multipart, kind: UploadKind) -> Result<String> {
    while let Some(field) = multipart.next_field().await? {
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };
        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(Error::BadRequest("Uploaded file is empty".to_string()));
        }
        return save_upload(kind, &filename, &data).await;
    }
    Err(Error::BadRequest("No file field in request".to_string()))
}
