use crate::domain::books::Book;
use crate::domain::formatting::{format_key_ideas, format_rating};

use super::{book_path, or_em_dash};

/// Card view used in book rows and search results.
pub struct BookView {
    pub id: String,
    pub detail_path: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub image_url: Option<String>,
    pub rating: String,
    pub is_premium: bool,
}

impl BookView {
    pub fn from_domain(book: &Book) -> Self {
        let id = book.id().unwrap_or_default().to_string();
        Self {
            detail_path: book_path(&id),
            id,
            title: book.title().unwrap_or_default().to_string(),
            subtitle: book.sub_title().unwrap_or_default().to_string(),
            author: book.author().unwrap_or_default().to_string(),
            image_url: book.image_link().map(str::to_string),
            rating: or_em_dash(book.average_rating().map(format_rating)),
            is_premium: book.is_premium(),
        }
    }
}

pub struct BookDetailView {
    pub card: BookView,
    pub audio_url: Option<String>,
    pub total_rating: String,
    pub key_ideas: String,
    pub kind: String,
    pub tags: Vec<String>,
    pub book_description: String,
    pub author_description: String,
}

impl BookDetailView {
    pub fn from_domain(book: &Book) -> Self {
        Self {
            card: BookView::from_domain(book),
            audio_url: book.audio_link().map(str::to_string),
            total_rating: or_em_dash(book.total_rating()),
            key_ideas: or_em_dash(book.key_ideas().map(format_key_ideas)),
            kind: or_em_dash(book.kind()),
            tags: book.tags(),
            book_description: book.book_description().unwrap_or_default().to_string(),
            author_description: book.author_description().unwrap_or_default().to_string(),
        }
    }
}
