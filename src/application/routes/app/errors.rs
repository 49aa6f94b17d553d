use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::application::errors::UnhandledError;
use crate::application::routes::render_html;
use crate::presentation::web::templates::{ErrorFallbackTemplate, NotFoundTemplate};
use crate::presentation::web::views::ErrorButton;

/// Replace failed page responses with the fallback UI.
///
/// Not-found failures get the 404 page. Anything else is logged and answered
/// with the error page, whose retry button reloads the URI that failed.
pub(crate) async fn error_boundary(request: Request, next: Next) -> Response {
    let reset_url = request
        .uri()
        .path_and_query()
        .map_or_else(|| "/".to_string(), |target| target.as_str().to_string());

    let response = next.run(request).await;

    let Some(failure) = response.extensions().get::<UnhandledError>().cloned() else {
        return response;
    };

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        warn!(error = %failure.message, uri = %reset_url, "page not found");
        return not_found_response();
    }

    error!(error = %failure.message, uri = %reset_url, "failed to render page");
    error_fallback_response(status, reset_url)
}

pub(crate) async fn not_found_page() -> Response {
    not_found_response()
}

fn not_found_response() -> Response {
    let template = NotFoundTemplate {
        button: ErrorButton::from_parts(None, Some("/".to_string())),
    };
    match render_html(template) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(err) => {
            error!(error = %err, "failed to render not found page");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn error_fallback_response(status: StatusCode, reset_url: String) -> Response {
    let template = ErrorFallbackTemplate {
        button: ErrorButton::from_parts(Some(reset_url), None),
    };
    match render_html(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => {
            error!(error = %err, "failed to render error page");
            status.into_response()
        }
    }
}
