mod books;
mod errors;

pub use books::{BookDetailView, BookView};
pub use errors::ErrorButton;

use crate::domain::formatting::EM_DASH;

pub(crate) fn book_path(id: &str) -> String {
    format!("/book/{id}")
}

pub(crate) fn or_em_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| EM_DASH.to_string(), |v| v.to_string())
}
