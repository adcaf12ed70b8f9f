//! In-memory catalog fetcher for tests and offline use.

use std::sync::Mutex;

use async_trait::async_trait;

use super::http::has_title;
use super::payload::{DocumentPatch, NewDocument, PageRequest};
use super::{CatalogFetcher, FetchError};
use crate::document::{DocumentRecord, Page};
use crate::types::identifiers::DocumentId;

/// A fetcher serving a fixed record list.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    records: Mutex<Vec<DocumentRecord>>,
}

impl MemoryCatalog {
    pub fn new(records: Vec<DocumentRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Snapshot of the current records.
    pub fn records(&self) -> Vec<DocumentRecord> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DocumentRecord>> {
        // A poisoned lock still holds a consistent Vec; keep serving it.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn paginate(records: Vec<DocumentRecord>, page: PageRequest) -> Page<DocumentRecord> {
    let size = page.size as usize;
    let skip = (page.page.max(1) as usize - 1).saturating_mul(size);
    Page {
        items: records.into_iter().skip(skip).take(size).collect(),
        page: page.page,
        size: page.size,
    }
}

#[async_trait]
impl CatalogFetcher for MemoryCatalog {
    async fn list_documents(&self, page: PageRequest) -> Result<Page<DocumentRecord>, FetchError> {
        Ok(paginate(self.records(), page))
    }

    async fn search(
        &self,
        query: &str,
        page: PageRequest,
    ) -> Result<Page<DocumentRecord>, FetchError> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        let hits = self
            .lock()
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&term) || r.author.to_lowercase().contains(&term)
            })
            .cloned()
            .collect();
        Ok(paginate(hits, page))
    }

    async fn update_document(
        &self,
        id: DocumentId,
        patch: &DocumentPatch,
    ) -> Result<DocumentRecord, FetchError> {
        let mut records = self.lock();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(FetchError::NotFound(id.get()))?;
        patch.apply_to(record);
        Ok(record.clone())
    }

    async fn create_document(&self, draft: &NewDocument) -> Result<DocumentRecord, FetchError> {
        let title = draft.titulo.trim();
        if title.is_empty() {
            return Err(FetchError::BlankTitle);
        }

        let mut records = self.lock();
        if has_title(&records, title) {
            return Err(FetchError::DuplicateTitle(title.to_string()));
        }

        let next_id = records.iter().map(|r| r.id.get()).max().unwrap_or(0) + 1;
        let mut record = DocumentRecord::new(next_id, title, draft.autor.clone());
        record.year = draft.anio.and_then(|y| i32::try_from(y).ok());
        record.edition = draft.edicion.clone();
        record.kind = Some(draft.tipo.clone());
        record.media_type = Some(draft.tipo_medio.clone());

        records.push(record.clone());
        Ok(record)
    }
}
