use std::sync::Arc;

use crate::domain::repositories::BookCatalog;
use crate::infrastructure::client::SummaristClient;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn BookCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn BookCatalog>) -> Self {
        Self { catalog }
    }

    /// Build application state backed by the remote catalog.
    pub fn from_client(client: SummaristClient) -> Self {
        Self::new(Arc::new(client))
    }
}
