use async_trait::async_trait;

use super::CatalogError;
use crate::domain::books::Book;

/// Read-only access to the remote book catalog.
///
/// Each call maps to exactly one backend request. Implementations do not
/// cache, retry or deduplicate.
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// The single book featured at the top of the "for you" page.
    async fn selected_book(&self) -> Result<Book, CatalogError>;
    async fn recommended_books(&self) -> Result<Vec<Book>, CatalogError>;
    async fn suggested_books(&self) -> Result<Vec<Book>, CatalogError>;
    async fn book_by_id(&self, id: &str) -> Result<Book, CatalogError>;
    /// Match books whose author or title contains `query`.
    async fn books_by_author_or_title(&self, query: &str) -> Result<Vec<Book>, CatalogError>;
}
