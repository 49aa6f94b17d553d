use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::application::errors::AppError;
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::domain::books::BookStatus;
use crate::presentation::web::templates::ForYouTemplate;
use crate::presentation::web::views::BookView;

#[tracing::instrument(skip(state))]
pub(crate) async fn for_you_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let (selected, recommended, suggested) = tokio::try_join!(
        state.catalog.selected_book(),
        state.catalog.recommended_books(),
        state.catalog.suggested_books(),
    )?;

    let template = ForYouTemplate {
        selected: BookView::from_domain(&selected),
        selected_heading: BookStatus::Selected.display_label(),
        recommended: recommended.iter().map(BookView::from_domain).collect(),
        recommended_heading: BookStatus::Recommended.display_label(),
        suggested: suggested.iter().map(BookView::from_domain).collect(),
        suggested_heading: BookStatus::Suggested.display_label(),
        search_value: String::new(),
    };

    render_html(template).map(IntoResponse::into_response)
}
