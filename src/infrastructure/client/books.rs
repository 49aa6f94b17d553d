use super::SummaristClient;
use crate::domain::CatalogError;
use crate::domain::books::{Book, BookStatus};

pub struct BooksClient<'a> {
    client: &'a SummaristClient,
}

impl<'a> BooksClient<'a> {
    pub fn new(client: &'a SummaristClient) -> Self {
        Self { client }
    }

    pub async fn selected(&self) -> Result<Book, CatalogError> {
        let url = self
            .client
            .endpoint("getBooks", ("status", BookStatus::Selected.as_str()))?;
        self.client
            .get_json("selected_book", url, || {
                "failed to fetch selected book".to_string()
            })
            .await
    }

    pub async fn recommended(&self) -> Result<Vec<Book>, CatalogError> {
        let url = self
            .client
            .endpoint("getBooks", ("status", BookStatus::Recommended.as_str()))?;
        self.client
            .get_json("recommended_books", url, || {
                "failed to fetch recommended books".to_string()
            })
            .await
    }

    pub async fn suggested(&self) -> Result<Vec<Book>, CatalogError> {
        let url = self
            .client
            .endpoint("getBooks", ("status", BookStatus::Suggested.as_str()))?;
        self.client
            .get_json("suggested_books", url, || {
                "failed to fetch suggested books".to_string()
            })
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Book, CatalogError> {
        let url = self.client.endpoint("getBook", ("id", id))?;
        self.client
            .get_json("book_by_id", url, || format!("failed to fetch book {id}"))
            .await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Book>, CatalogError> {
        let url = self
            .client
            .endpoint("getBooksByAuthorOrTitle", ("search", query))?;
        self.client
            .get_json("books_by_author_or_title", url, || {
                "failed to fetch book query".to_string()
            })
            .await
    }
}
