mod books;

use axum::http::Uri;
use axum::routing::get;

use crate::application::errors::{ApiError, AppError};
use crate::application::state::AppState;

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/books/selected", get(books::selected_book))
        .route("/books/recommended", get(books::recommended_books))
        .route("/books/suggested", get(books::suggested_books))
        .route("/books/{id}", get(books::book_by_id))
        .route("/search", get(books::search_books))
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::from(AppError::not_found(format!("route {}", uri.path())))
}
