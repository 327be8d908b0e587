//! HTTP routes. Thin pass-throughs: handlers parse, delegate to a use case,
//! and map errors to status codes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use blockbustr_domain::{
    ActionizedMovie, AppSettings, CollectionId, MovieId, MovieInfo, PosterRequest, SavedMovie,
    Top10Category, Top10Collection,
};

use crate::app::App;
use crate::use_cases::{NewSavedMovie, PosterError, SettingsView, Top10Listing};

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        // Settings
        .route("/api/settings", get(get_settings))
        .route("/api/settings", put(update_settings))
        .route("/api/settings/tmdb-test", post(test_tmdb_key))
        // Library
        .route("/api/movies", get(list_movies))
        .route("/api/movies", post(save_movie))
        .route("/api/movies/{movie_id}", delete(delete_movie))
        .route("/api/collections", get(list_collections))
        .route("/api/collections", post(save_collection))
        .route("/api/collections/{collection_id}", delete(delete_collection))
        // Transformation pipeline
        .route("/api/movies/lookup", post(lookup_movie))
        .route("/api/movies/actionize", post(actionize_movie))
        .route("/api/movies/tags", post(generate_tags))
        .route("/api/posters", post(generate_poster))
        // Top 10
        .route("/api/top10", get(top10_all))
        .route("/api/top10/{category}", get(top10_category))
}

async fn health() -> &'static str {
    "ok"
}

// =============================================================================
// Settings
// =============================================================================

async fn get_settings(
    State(app): State<Arc<App>>,
) -> Result<Json<SettingsView>, (StatusCode, String)> {
    app.settings
        .get()
        .await
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

async fn update_settings(
    State(app): State<Arc<App>>,
    Json(settings): Json<AppSettings>,
) -> Result<Json<AppSettings>, (StatusCode, String)> {
    app.settings
        .save(settings.clone())
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Json(settings))
}

#[derive(Debug, Deserialize)]
struct TmdbKeyTestRequest {
    api_key: String,
}

#[derive(Debug, Serialize)]
struct TmdbKeyTestResponse {
    valid: bool,
    message: String,
}

async fn test_tmdb_key(
    State(app): State<Arc<App>>,
    Json(body): Json<TmdbKeyTestRequest>,
) -> Json<TmdbKeyTestResponse> {
    match app.settings.test_tmdb_key(&body.api_key).await {
        Ok(()) => Json(TmdbKeyTestResponse {
            valid: true,
            message: "TMDB API key is valid!".to_string(),
        }),
        Err(e) => Json(TmdbKeyTestResponse {
            valid: false,
            message: e.to_string(),
        }),
    }
}

// =============================================================================
// Library
// =============================================================================

async fn list_movies(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<SavedMovie>>, (StatusCode, String)> {
    app.library
        .list_movies()
        .await
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

#[derive(Debug, Deserialize)]
struct SaveMovieRequest {
    original: MovieInfo,
    action_title: String,
    action_summary: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    poster_url: String,
    #[serde(default)]
    poster_style: Option<String>,
}

async fn save_movie(
    State(app): State<Arc<App>>,
    Json(body): Json<SaveMovieRequest>,
) -> Result<Json<SavedMovie>, (StatusCode, String)> {
    app.library
        .save_movie(NewSavedMovie {
            original: body.original,
            action_title: body.action_title,
            action_summary: body.action_summary,
            tags: body.tags,
            poster_url: body.poster_url,
            poster_style: body.poster_style,
        })
        .await
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

async fn delete_movie(
    State(app): State<Arc<App>>,
    Path(movie_id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_id(&movie_id).map(MovieId::from_uuid)?;
    app.library
        .delete_movie(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

async fn list_collections(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<Top10Collection>>, (StatusCode, String)> {
    app.library
        .list_collections()
        .await
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

#[derive(Debug, Deserialize)]
struct SaveCollectionRequest {
    name: String,
    #[serde(default)]
    movie_ids: Vec<MovieId>,
}

async fn save_collection(
    State(app): State<Arc<App>>,
    Json(body): Json<SaveCollectionRequest>,
) -> Result<Json<Top10Collection>, (StatusCode, String)> {
    app.library
        .save_collection(body.name, body.movie_ids)
        .await
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

async fn delete_collection(
    State(app): State<Arc<App>>,
    Path(collection_id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_id(&collection_id).map(CollectionId::from_uuid)?;
    app.library
        .delete_collection(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

fn parse_id(raw: &str) -> Result<Uuid, (StatusCode, String)> {
    Uuid::parse_str(raw).map_err(|_| (StatusCode::BAD_REQUEST, "Invalid ID format".to_string()))
}

// =============================================================================
// Transformation pipeline
// =============================================================================

#[derive(Debug, Deserialize)]
struct LookupRequest {
    title: String,
}

async fn lookup_movie(
    State(app): State<Arc<App>>,
    Json(body): Json<LookupRequest>,
) -> Json<MovieInfo> {
    Json(app.lookup.execute(&body.title).await)
}

#[derive(Debug, Deserialize)]
struct ActionizeRequest {
    title: String,
    #[serde(default)]
    summary: String,
}

async fn actionize_movie(
    State(app): State<Arc<App>>,
    Json(body): Json<ActionizeRequest>,
) -> Result<Json<ActionizedMovie>, (StatusCode, String)> {
    let language = app.settings.language().await;
    app.actionize
        .execute(&body.title, &body.summary, &language)
        .await
        .map(Json)
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))
}

#[derive(Debug, Deserialize)]
struct TagsRequest {
    action_title: String,
    #[serde(default)]
    action_summary: String,
    #[serde(default)]
    genre: String,
}

async fn generate_tags(
    State(app): State<Arc<App>>,
    Json(body): Json<TagsRequest>,
) -> Json<Vec<String>> {
    let language = app.settings.language().await;
    Json(
        app.tags
            .execute(&body.action_title, &body.action_summary, &body.genre, &language)
            .await,
    )
}

#[derive(Debug, Serialize)]
struct PosterResponse {
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style_details: Option<blockbustr_domain::StyleDetails>,
}

async fn generate_poster(
    State(app): State<Arc<App>>,
    Json(request): Json<PosterRequest>,
) -> Result<Json<PosterResponse>, (StatusCode, String)> {
    let result = app.poster.execute(&request).await.map_err(|e| {
        let status = match &e {
            PosterError::Exhausted => StatusCode::UNPROCESSABLE_ENTITY,
            PosterError::Generation { .. } => StatusCode::BAD_GATEWAY,
        };
        let message = match &e {
            PosterError::Exhausted => e.to_string(),
            PosterError::Generation { .. } => {
                format!("{e}; try a different movie or try again later")
            }
        };
        (status, message)
    })?;

    let (style, style_details) = match result.style {
        Some(applied) => (Some(applied.name), Some(applied.details)),
        None => (None, None),
    };
    Ok(Json(PosterResponse {
        url: result.image.into_url(),
        style,
        style_details,
    }))
}

// =============================================================================
// Top 10
// =============================================================================

async fn top10_all(State(app): State<Arc<App>>) -> Json<HashMap<&'static str, Top10Listing>> {
    Json(app.top10.all().await)
}

async fn top10_category(
    State(app): State<Arc<App>>,
    Path(category): Path<String>,
) -> Json<Top10Listing> {
    let category = Top10Category::parse_or_default(&category);
    Json(app.top10.category(category).await)
}
