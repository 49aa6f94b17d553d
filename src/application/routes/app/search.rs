use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::errors::AppError;
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::presentation::web::templates::SearchTemplate;
use crate::presentation::web::views::BookView;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    search: Option<String>,
}

impl SearchQuery {
    /// Trimmed search term, or `None` when there is nothing to search for.
    pub(crate) fn term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[tracing::instrument(skip(state))]
pub(crate) async fn search_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let (searched, books) = match query.term() {
        Some(term) => {
            let books = state.catalog.books_by_author_or_title(term).await?;
            (true, books.iter().map(BookView::from_domain).collect())
        }
        None => (false, Vec::new()),
    };

    let template = SearchTemplate {
        search_value: query.term().unwrap_or_default().to_string(),
        searched,
        books,
    };

    render_html(template).map(IntoResponse::into_response)
}
