//! reqwest-backed catalog fetcher.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use super::payload::{DocumentPatch, NewDocument, PageRequest};
use super::{CatalogFetcher, FetchError};
use crate::config::ClientConfig;
use crate::document::{normalize_document, normalize_page, DocumentRecord, Page};
use crate::types::identifiers::DocumentId;

/// Fetcher talking to the library REST backend.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Arc<Client>,
    config: ClientConfig,
}

impl HttpCatalogClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self::from_client(Arc::new(client), config))
    }

    /// Create from an existing reqwest Client
    pub fn from_client(client: Arc<Client>, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    async fn get_page(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        page: PageRequest,
    ) -> Result<Page<DocumentRecord>, FetchError> {
        let url = self.url(endpoint);
        tracing::debug!(%url, page = page.page, size = page.size, "fetching catalog page");

        let response = self.client.get(&url).query(query).send().await?;
        let body = read_json(response).await?;
        let normalized = normalize_page(body, page.page, page.size);

        tracing::debug!(%url, items = normalized.items.len(), "catalog page received");
        Ok(normalized)
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogClient {
    async fn list_documents(&self, page: PageRequest) -> Result<Page<DocumentRecord>, FetchError> {
        let query = [("page", page.page.to_string()), ("size", page.size.to_string())];
        self.get_page("/documentos/", &query, page).await
    }

    async fn search(
        &self,
        query: &str,
        page: PageRequest,
    ) -> Result<Page<DocumentRecord>, FetchError> {
        let term = query.trim();
        if term.is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        let params = [
            ("q", term.to_string()),
            ("page", page.page.to_string()),
            ("size", page.size.to_string()),
        ];
        self.get_page("/catalogo/buscar/", &params, page).await
    }

    async fn update_document(
        &self,
        id: DocumentId,
        patch: &DocumentPatch,
    ) -> Result<DocumentRecord, FetchError> {
        let url = self.url(&format!("/documentos/{}", id));
        tracing::debug!(%url, "updating document");

        let response = self.client.patch(&url).json(patch).send().await?;
        let body = read_json(response).await?;
        let record = normalize_document(body)?;

        tracing::info!(id = %record.id, "document updated");
        Ok(record)
    }

    async fn create_document(&self, draft: &NewDocument) -> Result<DocumentRecord, FetchError> {
        let title = draft.titulo.trim();
        if title.is_empty() {
            return Err(FetchError::BlankTitle);
        }

        let existing = self
            .search(title, PageRequest::first(self.config.duplicate_check_size))
            .await?;
        if has_title(&existing.items, title) {
            tracing::warn!(title, "refusing to create duplicate title");
            return Err(FetchError::DuplicateTitle(title.to_string()));
        }

        let url = self.url("/documentos/");
        tracing::debug!(%url, "creating document");

        let response = self.client.post(&url).json(draft).send().await?;
        let body = read_json(response).await?;
        let record = normalize_document(body)?;

        tracing::info!(id = %record.id, "document created");
        Ok(record)
    }
}

/// Case-insensitive exact title match.
pub(crate) fn has_title(records: &[DocumentRecord], title: &str) -> bool {
    let wanted = title.to_lowercase();
    records.iter().any(|r| r.title.to_lowercase() == wanted)
}

/// Decode a JSON body, turning non-success statuses into `FetchError::Status`
/// with the backend's `detail` message when it sent one.
async fn read_json(response: Response) -> Result<Value, FetchError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let detail = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        tracing::warn!(status = status.as_u16(), %detail, "catalog backend error");
        return Err(FetchError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    Ok(serde_json::from_str(&text)?)
}
