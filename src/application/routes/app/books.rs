use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::application::errors::AppError;
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::presentation::web::templates::BookDetailTemplate;
use crate::presentation::web::views::BookDetailView;

#[tracing::instrument(skip(state))]
pub(crate) async fn book_detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let book = state.catalog.book_by_id(&id).await?;

    if !book.exists() {
        return Err(AppError::not_found(format!("book {id}")));
    }

    let template = BookDetailTemplate {
        book: BookDetailView::from_domain(&book),
        search_value: String::new(),
    };

    render_html(template).map(IntoResponse::into_response)
}
