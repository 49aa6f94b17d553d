use thiserror::Error;

/// Failure of a single catalog lookup against the backend.
///
/// Every variant carries the name of the operation that failed so the
/// rendered message identifies the call site, as in
/// `selected_book: failed to fetch selected book: 500`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{operation}: {message}: {status}")]
    Status {
        operation: &'static str,
        message: String,
        status: u16,
    },
    #[error("{operation}: request failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },
    #[error("{operation}: failed to decode response body: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },
}

impl CatalogError {
    pub fn operation(&self) -> &'static str {
        match self {
            CatalogError::Status { operation, .. }
            | CatalogError::Transport { operation, .. }
            | CatalogError::Decode { operation, .. } => operation,
        }
    }

    /// HTTP status returned by the backend, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
