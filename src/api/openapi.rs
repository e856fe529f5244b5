//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{ContactInfo, User, UserDto};

/// OpenAPI documentation for the Profile API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Profile API",
        version = "0.1.0",
        description = "A minimal CRUD API over a single in-memory user profile record",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::get_user_info,
        user_handler::update_user_info,
        user_handler::delete_user,
    ),
    components(
        schemas(User, ContactInfo, UserDto)
    ),
    tags(
        (name = "User", description = "Operations on the singleton user record")
    )
)]
pub struct ApiDoc;
