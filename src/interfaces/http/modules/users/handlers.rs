//! User API handlers
//!
//! Create, fetch and delete a single user by id.
//! Delegates to `UserService` from the application/identity layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::error;

use super::dto::{CreateUserRequest, CreatedUserResponse, UserDto, UserResponse};
use crate::application::identity::UserService;
use crate::domain::{parse_user_id, DomainError, UserRepositoryInterface};
use crate::interfaces::http::common::{api_error, ApiError, JsonBody, MessageResponse};

pub const INVALID_ID_FORMAT: &str = "Invalid ID format";
pub const INVALID_OBJECT_ID: &str = "Invalid Object Id Provided";
pub const USER_NOT_FOUND: &str = "User not found";
pub const USER_DELETED: &str = "User deleted successfully";
pub const CREATE_FAILED: &str = "Failed to create user";

/// User handler state — the store handle is injected once at startup.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService<dyn UserRepositoryInterface>>,
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID (24-character hex)")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 400, description = "Invalid ID format", body = MessageResponse),
        (status = 404, description = "Not found", body = MessageResponse),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let object_id =
        parse_user_id(&id).map_err(|_| api_error(StatusCode::BAD_REQUEST, INVALID_ID_FORMAT))?;

    match state.user_service.get_user_by_id(&object_id).await {
        Ok(user) => Ok(Json(UserResponse::new(UserDto::from(user)))),
        Err(DomainError::NotFound { .. }) => Err(api_error(StatusCode::NOT_FOUND, USER_NOT_FOUND)),
        Err(e) => {
            error!(user_id = %id, "Failed to fetch user: {}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body(content = CreateUserRequest, content_type = "application/json"),
    responses(
        (status = 201, description = "User created", body = CreatedUserResponse),
        (status = 400, description = "Malformed JSON (plain text) or validation error"),
        (status = 415, description = "Content-Type is not application/json (plain text)"),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), ApiError> {
    match state.user_service.create_user(request.into()).await {
        Ok(id) => Ok((
            StatusCode::CREATED,
            Json(CreatedUserResponse::new(id.to_hex())),
        )),
        Err(DomainError::Validation(message)) => Err(api_error(StatusCode::BAD_REQUEST, message)),
        Err(e) => {
            error!("Failed to create user: {}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, CREATE_FAILED))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID (24-character hex)")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid ID format", body = MessageResponse),
        (status = 404, description = "Not found", body = MessageResponse),
        (status = 500, description = "Store error", body = MessageResponse)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let object_id =
        parse_user_id(&id).map_err(|_| api_error(StatusCode::BAD_REQUEST, INVALID_OBJECT_ID))?;

    match state.user_service.delete_user(&object_id).await {
        Ok(()) => Ok(Json(MessageResponse::success(USER_DELETED))),
        Err(DomainError::NotFound { .. }) => Err(api_error(StatusCode::NOT_FOUND, USER_NOT_FOUND)),
        Err(e) => {
            error!(user_id = %id, "Failed to delete user: {}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
