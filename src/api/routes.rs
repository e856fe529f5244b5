//! Application route configuration.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::user_routes;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // User record routes
        .nest("/user", user_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to Profile API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    /// Whether the singleton user record currently holds a value
    record: &'static str,
}

/// Health check endpoint reporting the user record state
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let record = if state.user_service.get_user_info().await.is_ok() {
        "present"
    } else {
        "absent"
    };

    Json(HealthResponse {
        status: "healthy",
        record,
    })
}
