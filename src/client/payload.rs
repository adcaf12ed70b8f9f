//! Request payloads sent to the catalog backend.

use serde::{Deserialize, Serialize};

use crate::document::DocumentRecord;

/// 1-based page plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn first(size: u32) -> Self {
        PageRequest { page: 1, size }
    }
}

/// Raw text of the edit form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub title: String,
    pub author: String,
    pub year: String,
    pub edition: String,
    pub quantity: String,
    pub summary: String,
    pub category: String,
    pub publisher: String,
    pub cover_url: String,
}

impl EditForm {
    /// Prefill from an existing record.
    pub fn from_record(record: &DocumentRecord) -> Self {
        EditForm {
            title: record.title.clone(),
            author: record.author.clone(),
            year: record.year.filter(|y| *y != 0).map(|y| y.to_string()).unwrap_or_default(),
            edition: record.edition.clone().unwrap_or_default(),
            quantity: record
                .copies_available
                .filter(|n| *n != 0)
                .map(|n| n.to_string())
                .unwrap_or_default(),
            summary: record.summary.clone().unwrap_or_default(),
            category: record.category.clone().unwrap_or_default(),
            publisher: record.publisher.clone().unwrap_or_default(),
            cover_url: record.link.clone().unwrap_or_default(),
        }
    }
}

/// PATCH body for `/documentos/{id}`. Absent fields are left untouched by
/// the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentPatch {
    pub titulo: String,
    pub autor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anio: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edicion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resumen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editorial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existencias: Option<i64>,
}

impl DocumentPatch {
    /// Title and author are trimmed, numbers are sent only when they parse,
    /// the category is lowercased, and empty fields are omitted.
    pub fn from_form(form: &EditForm) -> Self {
        DocumentPatch {
            titulo: form.title.trim().to_string(),
            autor: form.author.trim().to_string(),
            anio: parse_number(&form.year),
            edicion: non_empty(&form.edition),
            categoria: non_empty(&form.category).map(|c| c.to_lowercase().trim().to_string()),
            resumen: non_empty(&form.summary),
            editorial: non_empty(&form.publisher),
            link: non_empty(&form.cover_url),
            existencias: parse_number(&form.quantity),
        }
    }

    /// Apply to a local record, for fetchers without a backend.
    pub fn apply_to(&self, record: &mut DocumentRecord) {
        record.title = self.titulo.clone();
        record.author = self.autor.clone();
        if let Some(year) = self.anio.and_then(|y| i32::try_from(y).ok()) {
            record.year = Some(year);
        }
        if let Some(edition) = &self.edicion {
            record.edition = Some(edition.clone());
        }
        if let Some(category) = &self.categoria {
            record.category = Some(category.clone());
        }
        if let Some(summary) = &self.resumen {
            record.summary = Some(summary.clone());
        }
        if let Some(publisher) = &self.editorial {
            record.publisher = Some(publisher.clone());
        }
        if let Some(link) = &self.link {
            record.link = Some(link.clone());
        }
        if let Some(copies) = self.existencias {
            record.copies_available = Some(copies);
        }
    }
}

/// Raw text of the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub title: String,
    pub author: String,
    pub year: String,
    pub edition: String,
}

/// POST body for `/documentos/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDocument {
    pub tipo: String,
    pub titulo: String,
    pub autor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anio: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edicion: Option<String>,
    pub tipo_medio: String,
}

impl NewDocument {
    pub const KIND_BOOK: &'static str = "libro";
    pub const MEDIA_PHYSICAL: &'static str = "fisico";

    pub fn from_form(form: &AddForm) -> Self {
        NewDocument {
            tipo: Self::KIND_BOOK.to_string(),
            titulo: form.title.trim().to_string(),
            autor: form.author.trim().to_string(),
            anio: parse_number(&form.year),
            edicion: non_empty(&form.edition),
            tipo_medio: Self::MEDIA_PHYSICAL.to_string(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_number(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
