//! The catalog fetcher: where records come from.
//!
//! - [`HttpCatalogClient`]: the library REST backend
//! - [`MemoryCatalog`]: a fixed in-memory list

pub mod error;
pub mod http;
pub mod memory;
pub mod payload;

use async_trait::async_trait;

use crate::document::{DocumentRecord, Page};
use crate::types::identifiers::DocumentId;

pub use error::FetchError;
pub use http::HttpCatalogClient;
pub use memory::MemoryCatalog;
pub use payload::{AddForm, DocumentPatch, EditForm, NewDocument, PageRequest};

/// Source of catalog records. Every method returns records already
/// normalized to the canonical shape.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Full catalog listing, one page at a time.
    async fn list_documents(&self, page: PageRequest) -> Result<Page<DocumentRecord>, FetchError>;

    /// Server-side free-text search. A blank query is rejected before any
    /// request is made.
    async fn search(&self, query: &str, page: PageRequest)
        -> Result<Page<DocumentRecord>, FetchError>;

    /// Apply an edit; returns the record as confirmed by the backend.
    async fn update_document(
        &self,
        id: DocumentId,
        patch: &DocumentPatch,
    ) -> Result<DocumentRecord, FetchError>;

    /// Create a document unless one with the same title already exists.
    async fn create_document(&self, draft: &NewDocument) -> Result<DocumentRecord, FetchError>;
}
