use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::message_dto::{
        MarkReadResponse, SendMessagePayload, ThreadListResponse, ThreadResponse,
        UnreadCountResponse,
    },
    error::Result,
    middleware::auth::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn list_messages(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(application_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let account_id = claims.account_id()?;
    state
        .application_service
        .require_party(application_id, account_id)
        .await?;
    let messages = state
        .message_service
        .list_for_application(application_id)
        .await?;
    Ok(Json(messages))
}

#[axum::debug_handler]
pub async fn send_message(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(application_id): Path<Uuid>,
    Json(payload): Json<SendMessagePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let account_id = claims.account_id()?;
    state
        .application_service
        .require_party(application_id, account_id)
        .await?;
    let message = state
        .message_service
        .create(application_id, account_id, &payload.text)
        .await?;
    Ok((StatusCode::CREATED, Json(message)))
}

#[axum::debug_handler]
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(application_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let account_id = claims.account_id()?;
    state
        .application_service
        .require_party(application_id, account_id)
        .await?;
    let marked = state
        .message_service
        .mark_read(application_id, account_id)
        .await?;
    Ok(Json(MarkReadResponse { marked }))
}

#[axum::debug_handler]
pub async fn list_threads(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let account_id = claims.account_id()?;
    let rows = state.message_service.list_threads(account_id).await?;
    let threads = rows
        .into_iter()
        .map(|row| ThreadResponse::for_viewer(row, account_id))
        .collect();
    Ok(Json(ThreadListResponse { threads }))
}

#[axum::debug_handler]
pub async fn unread_count(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let unread = state
        .message_service
        .unread_total(claims.account_id()?)
        .await?;
    Ok(Json(UnreadCountResponse { unread }))
}
