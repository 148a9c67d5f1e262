//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::errors::ErrorResponse;
use crate::services::{CreateUserInput, UserOutput};

/// OpenAPI documentation for the layered user API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Layered User API",
        version = "0.1.0",
        description = "User CRUD over handler, interactor, domain service and repository layers",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            CreateUserInput,
            UserOutput,
            ErrorResponse,
            user_handler::UpdateUserRequest,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
