use serde::{Deserialize, Serialize};

use crate::types::identifiers::DocumentId;

/// A catalog entry as the engine sees it.
///
/// Records are read-only on the client. The only mutation is wholesale
/// replacement after the backend confirms an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub copies_available: Option<i64>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl DocumentRecord {
    /// Minimal record; every optional field absent.
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        DocumentRecord {
            id: DocumentId::new(id),
            title: title.into(),
            author: author.into(),
            year: None,
            category: None,
            publisher: None,
            summary: None,
            media_type: None,
            copies_available: None,
            kind: None,
            edition: None,
            link: None,
        }
    }

    /// True only for a confirmed positive stock count.
    pub fn is_available(&self) -> bool {
        matches!(self.copies_available, Some(n) if n > 0)
    }

    /// Year used for ordering. Unknown years sort as year 0.
    pub fn sort_year(&self) -> i32 {
        self.year.unwrap_or(0)
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_copies(mut self, copies: i64) -> Self {
        self.copies_available = Some(copies);
        self
    }
}
