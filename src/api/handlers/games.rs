//! Game CRUD handlers: create, list, show, update, delete.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    CreateGameRequest, GameEnvelope, GameListResponse, ListGamesParams, UpdateGameRequest,
};
use crate::app_state::AppState;
use crate::data::{Game, validate_filters, validate_game};
use crate::error::{ApiError, ErrorResponse};
use crate::validator::Validator;

/// Optional header carrying the version the client last read.
pub const EXPECTED_VERSION_HEADER: &str = "x-expected-version";

/// Parses a path id. Anything that is not a positive integer is treated as
/// a missing record.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::NotFound),
    }
}

/// `POST /v1/games`: Add a game to the catalog.
///
/// # Errors
///
/// Returns [`ApiError::FailedValidation`] if the game breaks a rule, or a
/// server error if the insert fails.
#[utoipa::path(
    post,
    path = "/v1/games",
    tag = "Games",
    summary = "Create a game",
    request_body = CreateGameRequest,
    responses(
        (status = 201, description = "Game created", body = GameEnvelope),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn create_game(
    State(state): State<AppState>,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;

    let mut v = Validator::new();
    v.check(req.genres.is_some(), "genres", "must be provided");
    let mut game = Game::new(req.title, req.year, req.genres.unwrap_or_default());
    validate_game(&mut v, &game);
    if !v.valid() {
        return Err(ApiError::FailedValidation(v.into_errors()));
    }

    state.models.games.insert(&mut game).await?;
    tracing::info!(id = game.id, title = %game.title, "game created");

    let location = format!("/v1/games/{}", game.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(GameEnvelope { game }),
    ))
}

/// `GET /v1/games/{id}`: Fetch one game.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no game has that id.
#[utoipa::path(
    get,
    path = "/v1/games/{id}",
    tag = "Games",
    summary = "Show a game",
    params(
        ("id" = i64, Path, description = "Game id"),
    ),
    responses(
        (status = 200, description = "The game", body = GameEnvelope),
        (status = 404, description = "Game not found", body = ErrorResponse),
    )
)]
pub async fn show_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let game = state.models.games.get(id).await?;
    Ok(Json(GameEnvelope { game }))
}

/// `PATCH /v1/games/{id}`: Partially update a game.
///
/// The stored record is read first, so a missing id is reported as 404;
/// a concurrent change between the read and the write is reported as 409.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`], [`ApiError::EditConflict`], or
/// [`ApiError::FailedValidation`].
#[utoipa::path(
    patch,
    path = "/v1/games/{id}",
    tag = "Games",
    summary = "Update a game",
    params(
        ("id" = i64, Path, description = "Game id"),
        ("X-Expected-Version" = Option<String>, Header, description = "Version the client last read"),
    ),
    request_body = UpdateGameRequest,
    responses(
        (status = 200, description = "Updated game", body = GameEnvelope),
        (status = 404, description = "Game not found", body = ErrorResponse),
        (status = 409, description = "Edit conflict", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<UpdateGameRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let mut game = state.models.games.get(id).await?;

    if let Some(expected) = headers.get(EXPECTED_VERSION_HEADER) {
        let matches = expected
            .to_str()
            .is_ok_and(|v| v == game.version.to_string());
        if !matches {
            return Err(ApiError::EditConflict);
        }
    }

    let Json(patch) = payload?;
    patch.apply_to(&mut game);

    let mut v = Validator::new();
    validate_game(&mut v, &game);
    if !v.valid() {
        return Err(ApiError::FailedValidation(v.into_errors()));
    }

    state.models.games.update(&mut game).await?;
    tracing::info!(id = game.id, version = %game.version, "game updated");
    Ok(Json(GameEnvelope { game }))
}

/// `DELETE /v1/games/{id}`: Remove a game.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no game has that id.
#[utoipa::path(
    delete,
    path = "/v1/games/{id}",
    tag = "Games",
    summary = "Delete a game",
    params(
        ("id" = i64, Path, description = "Game id"),
    ),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 404, description = "Game not found", body = ErrorResponse),
    )
)]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    state.models.games.delete(id).await?;
    tracing::info!(id, "game deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /v1/games`: List games with search, genre filter, sorting, and
/// pagination.
///
/// # Errors
///
/// Returns [`ApiError::FailedValidation`] on out-of-range paging or an
/// unknown sort field.
#[utoipa::path(
    get,
    path = "/v1/games",
    tag = "Games",
    summary = "List games",
    params(ListGamesParams),
    responses(
        (status = 200, description = "One page of games", body = GameListResponse),
        (status = 422, description = "Invalid filters", body = ErrorResponse),
    )
)]
pub async fn list_games(
    State(state): State<AppState>,
    params: Result<Query<ListGamesParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let filters = params.filters();

    let mut v = Validator::new();
    validate_filters(&mut v, &filters);
    if !v.valid() {
        return Err(ApiError::FailedValidation(v.into_errors()));
    }

    let (games, metadata) = state
        .models
        .games
        .get_all(params.title(), &params.genres(), &filters)
        .await?;

    Ok(Json(GameListResponse { games, metadata }))
}

/// Game routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route(
            "/games/{id}",
            get(show_game).patch(update_game).delete(delete_game),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert!(matches!(parse_id("42"), Ok(42)));
    }

    #[test]
    fn parse_id_rejects_everything_else() {
        for raw in ["0", "-1", "abc", "", "1.5"] {
            assert!(matches!(parse_id(raw), Err(ApiError::NotFound)), "{raw}");
        }
    }
}
