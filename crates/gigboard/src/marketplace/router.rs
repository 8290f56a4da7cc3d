use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CategoryFilter, PostingId};
use super::draft::PostingSubmission;
use super::repository::{PostingNotifier, PostingRepository, RepositoryError};
use super::service::{CatalogService, CatalogServiceError};

/// Router builder exposing the catalog endpoints.
pub fn marketplace_router<R, N>(service: Arc<CatalogService<R, N>>) -> Router
where
    R: PostingRepository + 'static,
    N: PostingNotifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/postings",
            get(search_handler::<R, N>).post(submit_handler::<R, N>),
        )
        .route(
            "/api/v1/postings/favorites",
            get(favorites_handler::<R, N>),
        )
        .route("/api/v1/postings/:id", get(fetch_handler::<R, N>))
        .route(
            "/api/v1/postings/:id/favorite",
            post(toggle_favorite_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SearchParams {
    query: String,
    category: CategoryFilter,
}

pub(crate) async fn search_handler<R, N>(
    State(service): State<Arc<CatalogService<R, N>>>,
    Query(params): Query<SearchParams>,
) -> Response
where
    R: PostingRepository + 'static,
    N: PostingNotifier + 'static,
{
    match service.search(&params.query, params.category) {
        Ok(postings) => (StatusCode::OK, axum::Json(postings)).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<CatalogService<R, N>>>,
    axum::Json(submission): axum::Json<PostingSubmission>,
) -> Response
where
    R: PostingRepository + 'static,
    N: PostingNotifier + 'static,
{
    match service.submit(submission) {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(CatalogServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn favorites_handler<R, N>(
    State(service): State<Arc<CatalogService<R, N>>>,
) -> Response
where
    R: PostingRepository + 'static,
    N: PostingNotifier + 'static,
{
    match service.favorites() {
        Ok(postings) => (StatusCode::OK, axum::Json(postings)).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn fetch_handler<R, N>(
    State(service): State<Arc<CatalogService<R, N>>>,
    Path(id): Path<u64>,
) -> Response
where
    R: PostingRepository + 'static,
    N: PostingNotifier + 'static,
{
    match service.get(PostingId(id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(CatalogServiceError::Repository(RepositoryError::NotFound)) => not_found(id),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn toggle_favorite_handler<R, N>(
    State(service): State<Arc<CatalogService<R, N>>>,
    Path(id): Path<u64>,
) -> Response
where
    R: PostingRepository + 'static,
    N: PostingNotifier + 'static,
{
    match service.toggle_favorite(PostingId(id)) {
        Ok(toggle) => (StatusCode::OK, axum::Json(toggle)).into_response(),
        Err(CatalogServiceError::Repository(RepositoryError::NotFound)) => not_found(id),
        Err(other) => internal_error(other),
    }
}

fn not_found(id: u64) -> Response {
    let payload = json!({
        "error": "posting not found",
        "id": id,
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn internal_error(error: CatalogServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
