mod books;
mod errors;
mod for_you;
mod home;
mod search;

use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::application::state::AppState;

/// Generate a static asset handler that serves an embedded file with cache headers.
macro_rules! static_asset_str {
    ($name:ident, $path:literal, $content_type:literal) => {
        async fn $name() -> impl IntoResponse {
            (
                [
                    ("content-type", $content_type),
                    ("cache-control", "public, max-age=604800"),
                ],
                include_str!($path),
            )
        }
    };
}

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(home::home_page))
        .route("/for-you", get(for_you::for_you_page))
        .route("/book/{id}", get(books::book_detail_page))
        .route("/search", get(search::search_page))
        .route("/static/css/styles.css", get(styles))
        .route("/static/logo.svg", get(logo))
        .route("/health", get(health))
        .fallback(errors::not_found_page)
        .layer(middleware::from_fn(errors::error_boundary))
}

static_asset_str!(
    styles,
    "../../../../static/css/styles.css",
    "text/css; charset=utf-8"
);
static_asset_str!(logo, "../../../../static/logo.svg", "image/svg+xml");

async fn health() -> impl IntoResponse {
    ([("content-type", "application/json")], r#"{"status":"ok"}"#)
}
