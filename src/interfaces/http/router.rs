//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::MessageResponse;
use super::modules::health::{self, ComponentHealth, HealthResponse, HealthState};
use super::modules::request_id::request_id_middleware;
use super::modules::users::{
    self, CreateUserRequest, CreatedUserResponse, UserDto, UserHandlerState, UserResponse,
};
use crate::application::identity::UserService;
use crate::domain::UserRepositoryInterface;

/// State shared by every route. Handlers extract their own slice via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<dyn UserRepositoryInterface>>,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService<dyn UserRepositoryInterface>>) -> Self {
        Self {
            user_service,
            started_at: Arc::new(Instant::now()),
        }
    }
}

impl FromRef<AppState> for UserHandlerState {
    fn from_ref(s: &AppState) -> Self {
        UserHandlerState {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        HealthState {
            user_service: Arc::clone(&s.user_service),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::get_user,
        users::create_user,
        users::delete_user,
    ),
    components(schemas(
        UserDto,
        CreateUserRequest,
        UserResponse,
        CreatedUserResponse,
        MessageResponse,
        HealthResponse,
        ComponentHealth,
    )),
    tags(
        (name = "Users", description = "Create, fetch and delete users"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Build the REST router: user routes, health, Swagger UI at `/docs`.
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .route("/user", post(users::create_user))
        .route("/user/{id}", get(users::get_user).delete(users::delete_user))
        .route("/health", get(health::health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────
