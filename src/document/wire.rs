//! Fetch-boundary adapter from backend JSON to canonical records.
//!
//! The backend names fields in Spanish (`titulo`, `anio`, `existencias`, ...)
//! and some screens receive English names instead. Everything is mapped onto
//! [`DocumentRecord`] here so the engine never sees wire names.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::record::DocumentRecord;
use crate::types::identifiers::DocumentId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Document has no id")]
    MissingId,
    #[error("Document {0} has a blank title")]
    BlankTitle(DocumentId),
}

/// A document object exactly as the backend sends it.
///
/// Each field accepts its Spanish backend name and its English spellings.
/// When an object carries more than one spelling, the first non-null one in
/// the listed order wins, so the Spanish name takes precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireDocument {
    pub id: Option<i64>,
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub anio: Option<i64>,
    pub categoria: Option<String>,
    pub editorial: Option<String>,
    pub resumen: Option<String>,
    pub tipo_medio: Option<String>,
    pub existencias: Option<i64>,
    pub tipo: Option<String>,
    pub edicion: Option<String>,
    pub link: Option<String>,
}

impl<'de> Deserialize<'de> for WireDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(WireDocument::from_map(&map))
    }
}

impl WireDocument {
    /// Read every known field out of a raw object. Unknown keys are ignored
    /// and values of the wrong shape are treated as absent.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        WireDocument {
            id: lenient_int(first_present(map, &["id"])),
            titulo: lenient_text(first_present(map, &["titulo", "title"])),
            autor: lenient_text(first_present(map, &["autor", "author"])),
            anio: lenient_int(first_present(map, &["anio", "year"])),
            categoria: lenient_text(first_present(map, &["categoria", "category"])),
            editorial: lenient_text(first_present(map, &["editorial", "publisher"])),
            resumen: lenient_text(first_present(map, &["resumen", "summary"])),
            tipo_medio: lenient_text(first_present(
                map,
                &["tipo_medio", "mediaType", "media_type"],
            )),
            existencias: lenient_int(first_present(
                map,
                &["existencias", "copies", "copiesAvailable"],
            )),
            tipo: lenient_text(first_present(map, &["tipo", "kind"])),
            edicion: lenient_text(first_present(map, &["edicion", "edition", "isbn"])),
            link: lenient_text(first_present(map, &["link"])),
        }
    }

    /// Map onto the canonical shape.
    ///
    /// `null`, absent and `""` all become absent. A missing author becomes
    /// the empty string.
    pub fn into_record(self) -> Result<DocumentRecord, RecordError> {
        let id = DocumentId::new(self.id.ok_or(RecordError::MissingId)?);

        let title = match present(self.titulo) {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(RecordError::BlankTitle(id)),
        };

        Ok(DocumentRecord {
            id,
            title,
            author: self.autor.unwrap_or_default(),
            year: self.anio.and_then(|y| i32::try_from(y).ok()),
            category: present(self.categoria),
            publisher: present(self.editorial),
            summary: present(self.resumen),
            media_type: present(self.tipo_medio),
            copies_available: self.existencias,
            kind: present(self.tipo),
            edition: present(self.edicion),
            link: present(self.link),
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn first_present<'m>(map: &'m Map<String, Value>, keys: &[&str]) -> Option<&'m Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
}

/// Accepts integers, integral floats and numeric strings. Anything else is
/// treated as absent rather than failing the whole document.
fn lenient_int(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Strings as sent; numbers (an ISBN, a numeric edition) are stringified.
fn lenient_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// One page of results from a paginated endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn empty(page: u32, size: u32) -> Self {
        Page {
            items: Vec::new(),
            page,
            size,
        }
    }
}

/// Normalize a raw `{items, page, size}` response body.
///
/// A missing or non-array `items` yields an empty page. Invalid documents are
/// skipped, and a repeated id keeps its first occurrence.
pub fn normalize_page(body: Value, requested_page: u32, requested_size: u32) -> Page<DocumentRecord> {
    let page = read_u32(&body, "page").unwrap_or(requested_page);
    let size = read_u32(&body, "size").unwrap_or(requested_size);

    let items = match body {
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    Page {
        items: normalize_items(items),
        page,
        size,
    }
}

/// Normalize a list of raw documents, enforcing id uniqueness in the batch.
pub fn normalize_items(items: Vec<Value>) -> Vec<DocumentRecord> {
    let mut seen = BTreeSet::new();
    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let record = match normalize_document(item) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping catalog item");
                continue;
            }
        };

        if !seen.insert(record.id) {
            tracing::warn!(id = %record.id, "dropping duplicate catalog item");
            continue;
        }
        records.push(record);
    }

    records
}

/// Normalize a single raw document (e.g. the body of a PATCH response).
pub fn normalize_document(item: Value) -> Result<DocumentRecord, NormalizeError> {
    let wire: WireDocument = serde_json::from_value(item)?;
    Ok(wire.into_record()?)
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Record(#[from] RecordError),
}

fn read_u32(body: &Value, key: &str) -> Option<u32> {
    body.get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}
