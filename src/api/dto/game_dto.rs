//! Game DTOs for create, update, list, and single-record responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::data::{Filters, Game, Metadata, games::SORT_SAFELIST};

/// Request body for `POST /v1/games`.
///
/// Missing fields deserialize to empty values so that validation, not
/// the JSON decoder, reports them.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateGameRequest {
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Release year.
    #[serde(default)]
    pub year: i32,
    /// Genre tags.
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

/// Request body for `PATCH /v1/games/{id}`. Absent fields are left as
/// stored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateGameRequest {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New release year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Replacement genre list.
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

impl UpdateGameRequest {
    /// Copies every present field onto `game`.
    pub fn apply_to(self, game: &mut Game) {
        if let Some(title) = self.title {
            game.title = title;
        }
        if let Some(year) = self.year {
            game.year = year;
        }
        if let Some(genres) = self.genres {
            game.genres = genres;
        }
    }
}

/// Query string for `GET /v1/games`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListGamesParams {
    /// Full-text title search. Empty matches everything.
    pub title: Option<String>,
    /// Comma-separated genres; results must carry all of them.
    pub genres: Option<String>,
    /// 1-indexed page number. Defaults to 1.
    pub page: Option<i64>,
    /// Rows per page (max 100). Defaults to 20.
    pub page_size: Option<i64>,
    /// Sort field, `-` prefix for descending. Defaults to `id`.
    pub sort: Option<String>,
}

impl ListGamesParams {
    /// Title search term, empty when absent.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Genre filter split on commas, with blank entries dropped.
    #[must_use]
    pub fn genres(&self) -> Vec<String> {
        self.genres
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Pagination and sort settings with defaults applied.
    #[must_use]
    pub fn filters(&self) -> Filters {
        Filters {
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(20),
            sort: self.sort.clone().unwrap_or_else(|| "id".to_string()),
            sort_safelist: SORT_SAFELIST,
        }
    }
}

/// Single-game envelope: `{"game": {...}}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameEnvelope {
    /// The game.
    pub game: Game,
}

/// Paginated list response for `GET /v1/games`.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameListResponse {
    /// One page of games.
    pub games: Vec<Game>,
    /// Pagination summary.
    pub metadata: Metadata,
}
