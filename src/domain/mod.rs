pub mod books;
pub mod errors;
pub mod formatting;
pub mod repositories;

// Re-exports
pub use errors::CatalogError;
