pub mod books;

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::domain::CatalogError;
use crate::domain::books::Book;
use crate::domain::repositories::BookCatalog;

/// Cloud function host serving the book catalog.
pub const DEFAULT_BASE_URL: &str = "https://us-central1-summaristt.cloudfunctions.net";

const USER_AGENT: &str = "summarist/1.0";

pub struct SummaristClient {
    base_url: Url,
    http: Client,
}

impl SummaristClient {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut normalized = base_url;
        if !normalized.path().ends_with('/') {
            normalized.set_path(&format!("{}/", normalized.path().trim_end_matches('/')));
        }

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("failed to configure HTTP client")?;

        Ok(Self {
            base_url: normalized,
            http,
        })
    }

    pub fn from_base_url(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = Url::parse(base_url).with_context(|| format!("invalid API url: {base_url}"))?;
        Self::new(url, timeout)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn books(&self) -> books::BooksClient<'_> {
        books::BooksClient::new(self)
    }

    pub(crate) fn endpoint(&self, path: &str, query: (&str, &str)) -> Result<Url, CatalogError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|err| CatalogError::Transport {
                operation: "endpoint",
                message: format!("invalid API path {path}: {err}"),
            })?;
        url.query_pairs_mut().append_pair(query.0, query.1);
        Ok(url)
    }

    /// Issue one GET and decode the JSON body.
    ///
    /// `failure` describes the lookup in the error raised for a non-success
    /// status; the status code is appended to it.
    pub(crate) async fn get_json<T>(
        &self,
        operation: &'static str,
        url: Url,
        failure: impl FnOnce() -> String,
    ) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        debug!(operation, url = %url, "fetching from catalog");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| CatalogError::Transport {
                operation,
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(operation, status = %status, "catalog returned non-success");
            return Err(CatalogError::Status {
                operation,
                message: failure(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| CatalogError::Decode {
                operation,
                message: err.to_string(),
            })
    }
}

#[async_trait]
impl BookCatalog for SummaristClient {
    async fn selected_book(&self) -> Result<Book, CatalogError> {
        self.books().selected().await
    }

    async fn recommended_books(&self) -> Result<Vec<Book>, CatalogError> {
        self.books().recommended().await
    }

    async fn suggested_books(&self) -> Result<Vec<Book>, CatalogError> {
        self.books().suggested().await
    }

    async fn book_by_id(&self, id: &str) -> Result<Book, CatalogError> {
        self.books().get(id).await
    }

    async fn books_by_author_or_title(&self, query: &str) -> Result<Vec<Book>, CatalogError> {
        self.books().search(query).await
    }
}
