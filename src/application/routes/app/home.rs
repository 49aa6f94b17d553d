use axum::response::{IntoResponse, Response};

use crate::application::errors::AppError;
use crate::application::routes::render_html;
use crate::presentation::web::templates::HomeTemplate;

#[tracing::instrument]
pub(crate) async fn home_page() -> Result<Response, AppError> {
    let template = HomeTemplate {
        login_path: "/for-you",
    };

    render_html(template).map(IntoResponse::into_response)
}
