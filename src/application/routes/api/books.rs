use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::application::errors::ApiError;
use crate::application::state::AppState;
use crate::domain::books::Book;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    search: String,
}

#[tracing::instrument(skip(state))]
pub(crate) async fn selected_book(State(state): State<AppState>) -> Result<Json<Book>, ApiError> {
    let book = state.catalog.selected_book().await?;
    Ok(Json(book))
}

#[tracing::instrument(skip(state))]
pub(crate) async fn recommended_books(
    State(state): State<AppState>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.catalog.recommended_books().await?;
    Ok(Json(books))
}

#[tracing::instrument(skip(state))]
pub(crate) async fn suggested_books(
    State(state): State<AppState>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.catalog.suggested_books().await?;
    Ok(Json(books))
}

#[tracing::instrument(skip(state))]
pub(crate) async fn book_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let book = state.catalog.book_by_id(&id).await?;
    Ok(Json(book))
}

#[tracing::instrument(skip(state))]
pub(crate) async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.catalog.books_by_author_or_title(&params.search).await?;
    Ok(Json(books))
}
