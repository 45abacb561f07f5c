//! OpenAPI document for every REST endpoint.

use utoipa::OpenApi;

use super::dto::{
    CreateGameRequest, GameEnvelope, GameListResponse, HealthResponse, RegisterUserRequest,
    SystemInfo, UpdateGameRequest, UserEnvelope,
};
use super::handlers::{games, system, users};
use crate::data::{Game, Metadata, User};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description of the `/v1` API.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "spotlight-api", description = "Game catalog REST API"),
    paths(
        system::health_handler,
        games::list_games,
        games::create_game,
        games::show_game,
        games::update_game,
        games::delete_game,
        users::register_user,
    ),
    components(schemas(
        Game,
        Metadata,
        User,
        CreateGameRequest,
        UpdateGameRequest,
        GameEnvelope,
        GameListResponse,
        RegisterUserRequest,
        UserEnvelope,
        HealthResponse,
        SystemInfo,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "System", description = "Service status"),
        (name = "Games", description = "Game catalog"),
        (name = "Users", description = "User accounts"),
    )
)]
pub struct ApiDoc;

/// Swagger UI serving [`ApiDoc`] at `/swagger-ui`.
#[cfg(feature = "swagger-ui")]
#[must_use]
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
