use askama::Template;

use super::views::{BookDetailView, BookView, ErrorButton};

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub login_path: &'static str,
}

#[derive(Template)]
#[template(path = "pages/for_you.html")]
pub struct ForYouTemplate {
    pub selected: BookView,
    pub selected_heading: &'static str,
    pub recommended: Vec<BookView>,
    pub recommended_heading: &'static str,
    pub suggested: Vec<BookView>,
    pub suggested_heading: &'static str,
    pub search_value: String,
}

#[derive(Template)]
#[template(path = "pages/book.html")]
pub struct BookDetailTemplate {
    pub book: BookDetailView,
    pub search_value: String,
}

#[derive(Template)]
#[template(path = "pages/search.html")]
pub struct SearchTemplate {
    pub search_value: String,
    pub searched: bool,
    pub books: Vec<BookView>,
}

/// Shown by the error boundary when a page fails to render.
#[derive(Template)]
#[template(path = "pages/error.html")]
pub struct ErrorFallbackTemplate {
    pub button: ErrorButton,
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub button: ErrorButton,
}

#[derive(Template)]
#[template(path = "partials/error_button.html")]
pub struct ErrorButtonTemplate {
    pub button: ErrorButton,
}

pub fn render_template<T: Template>(template: T) -> Result<String, askama::Error> {
    template.render()
}
