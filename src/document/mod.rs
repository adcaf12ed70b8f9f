pub mod card;
pub mod record;
pub mod wire;

pub use crate::types::identifiers::{DocumentId, RecordsVersion};
pub use card::{Availability, BookCard};
pub use record::DocumentRecord;
pub use wire::{normalize_document, normalize_items, normalize_page, NormalizeError, Page, RecordError, WireDocument};
