// Single owner, single thread:
// fetches complete in any order
// only the latest ticket lands
// failures keep the last good batch

use chrono::{DateTime, Utc};

use super::ticket::{FetchKind, FetchOutcome, FetchTicket};
use crate::client::FetchError;
use crate::document::{BookCard, DocumentRecord};
use crate::selection::{CatalogFilter, FilterOptions, LocaleCollator};
use crate::types::criteria::FilterCriteria;
use crate::types::identifiers::{DocumentId, RecordsVersion};
use crate::types::visible_list::VisibleList;

/// State behind one catalog screen.
#[derive(Debug, Default)]
pub struct CatalogSession {
    records: Vec<DocumentRecord>,
    version: RecordsVersion,
    loaded_at: Option<DateTime<Utc>>,
    criteria: FilterCriteria,
    selected: Option<DocumentId>,
    next_generation: u64,
    pending: Option<FetchTicket>,
    last_error: Option<String>,
    engine: CatalogFilter<LocaleCollator>,
}

impl CatalogSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session seeded with an already-fetched batch.
    pub fn with_records(records: Vec<DocumentRecord>) -> Self {
        let mut session = Self::new();
        session.install(records);
        session
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn version(&self) -> &RecordsVersion {
        &self.version
    }

    /// When the current batch landed. Informational only.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True while the most recent fetch has not completed.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&FetchTicket> {
        self.pending.as_ref()
    }

    /// Start a fetch. Any ticket issued before this one is now stale.
    pub fn begin_fetch(&mut self, kind: FetchKind) -> FetchTicket {
        self.next_generation += 1;
        let ticket = FetchTicket {
            generation: self.next_generation,
            kind,
        };
        if let Some(previous) = self.pending.replace(ticket.clone()) {
            tracing::debug!(
                superseded = previous.generation,
                by = ticket.generation,
                "fetch superseded"
            );
        }
        ticket
    }

    /// Hand a finished fetch to the session. Last write wins.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<DocumentRecord>, FetchError>,
    ) -> FetchOutcome {
        let is_current = self
            .pending
            .as_ref()
            .is_some_and(|p| p.generation == ticket.generation);
        if !is_current {
            tracing::debug!(generation = ticket.generation, "dropping stale fetch result");
            return FetchOutcome::Superseded;
        }
        self.pending = None;

        match result {
            Ok(records) => {
                let changed = self.install(records);
                self.last_error = None;
                tracing::info!(
                    generation = ticket.generation,
                    records = self.records.len(),
                    changed,
                    "catalog loaded"
                );
                FetchOutcome::Applied { changed }
            }
            Err(err) => {
                let message = err.user_message();
                tracing::warn!(generation = ticket.generation, error = %err, "catalog fetch failed");
                self.last_error = Some(message.clone());
                FetchOutcome::Failed { message }
            }
        }
    }

    fn install(&mut self, records: Vec<DocumentRecord>) -> bool {
        let version = RecordsVersion::from_records(&records);
        let changed = version != self.version;

        self.records = records;
        self.version = version;
        self.loaded_at = Some(Utc::now());

        if let Some(id) = self.selected {
            if !self.records.iter().any(|r| r.id == id) {
                self.selected = None;
            }
        }
        changed
    }

    /// Swap in the backend-confirmed version of an edited record.
    /// Returns false when the id is not in the current batch.
    pub fn replace_record(&mut self, updated: DocumentRecord) -> bool {
        let Some(slot) = self.records.iter_mut().find(|r| r.id == updated.id) else {
            return false;
        };
        *slot = updated;
        self.version = RecordsVersion::from_records(&self.records);
        true
    }

    /// Select `id`, or clear the selection if it is already selected.
    pub fn toggle_selection(&mut self, id: DocumentId) {
        self.selected = if self.selected == Some(id) { None } else { Some(id) };
    }

    pub fn selected(&self) -> Option<DocumentId> {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&DocumentRecord> {
        let id = self.selected?;
        self.records.iter().find(|r| r.id == id)
    }

    pub fn visible(&self) -> VisibleList<'_> {
        self.engine.apply(&self.records, &self.criteria)
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions::derive(&self.records)
    }

    /// Cards for the visible list, with the selection applied.
    pub fn cards(&self) -> Vec<BookCard<'_>> {
        self.visible()
            .iter()
            .map(|record| BookCard::from_record(record, self.selected == Some(record.id)))
            .collect()
    }
}
