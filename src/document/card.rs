use std::fmt;

use serde::Serialize;

use super::record::DocumentRecord;
use crate::types::identifiers::DocumentId;

pub const NO_SUMMARY: &str = "No summary";
pub const NO_PUBLISHER: &str = "No publisher";
pub const AVAILABLE: &str = "Available";

/// Availability label shown on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum Availability {
    /// Stock count reported by the backend, including zero or negative.
    Copies(i64),
    /// No stock count; the media type stands in.
    MediaType(String),
    Unspecified,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Copies(n) => write!(f, "{n} in stock"),
            Availability::MediaType(m) => f.write_str(m),
            Availability::Unspecified => f.write_str(AVAILABLE),
        }
    }
}

/// Render-ready view of one record for the list renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCard<'a> {
    pub id: DocumentId,
    pub title: &'a str,
    pub author: &'a str,
    /// Unknown years display as 0.
    pub year: i32,
    pub availability: Availability,
    pub summary: Option<&'a str>,
    pub publisher: Option<&'a str>,
    pub selected: bool,
}

impl<'a> BookCard<'a> {
    pub fn from_record(record: &'a DocumentRecord, selected: bool) -> Self {
        let availability = match (record.copies_available, record.media_type.as_deref()) {
            (Some(n), _) => Availability::Copies(n),
            (None, Some(m)) if !m.is_empty() => Availability::MediaType(m.to_string()),
            _ => Availability::Unspecified,
        };

        BookCard {
            id: record.id,
            title: &record.title,
            author: &record.author,
            year: record.sort_year(),
            availability,
            summary: record
                .summary
                .as_deref()
                .filter(|s| !s.trim().is_empty()),
            publisher: record.publisher.as_deref().filter(|p| !p.is_empty()),
            selected,
        }
    }

    pub fn summary_label(&self) -> &str {
        self.summary.unwrap_or(NO_SUMMARY)
    }

    pub fn publisher_label(&self) -> &str {
        self.publisher.unwrap_or(NO_PUBLISHER)
    }

    pub fn availability_label(&self) -> String {
        self.availability.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_count_wins_over_media_type() {
        let record = DocumentRecord::new(1, "Zeta", "X")
            .with_copies(0)
            .with_media_type("fisico");
        let card = BookCard::from_record(&record, false);
        assert_eq!(card.availability, Availability::Copies(0));
        assert_eq!(card.availability_label(), "0 in stock");
    }

    #[test]
    fn media_type_then_default_label() {
        let with_media = DocumentRecord::new(1, "Zeta", "X").with_media_type("digital");
        assert_eq!(BookCard::from_record(&with_media, false).availability_label(), "digital");

        let bare = DocumentRecord::new(2, "Alfa", "Y");
        assert_eq!(BookCard::from_record(&bare, false).availability_label(), AVAILABLE);
    }

    #[test]
    fn blank_summary_and_missing_publisher_fall_back() {
        let record = DocumentRecord::new(1, "Zeta", "X").with_summary("   ");
        let card = BookCard::from_record(&record, true);
        assert_eq!(card.summary_label(), NO_SUMMARY);
        assert_eq!(card.publisher_label(), NO_PUBLISHER);
        assert_eq!(card.year, 0);
        assert!(card.selected);
    }
}
