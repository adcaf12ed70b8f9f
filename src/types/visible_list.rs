use serde::{Deserialize, Serialize};

use crate::document::DocumentRecord;

/// Filter rule a record can fail, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterRule {
    Availability,
    YearFrom,
    YearTo,
    Category,
    Author,
    Publisher,
    FreeText,
}

/// Records removed by each rule. A record is counted once, against the
/// first rule it fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusionCounts {
    pub availability: usize,
    pub year_from: usize,
    pub year_to: usize,
    pub category: usize,
    pub author: usize,
    pub publisher: usize,
    pub free_text: usize,
}

impl ExclusionCounts {
    pub fn record(&mut self, rule: FilterRule) {
        match rule {
            FilterRule::Availability => self.availability += 1,
            FilterRule::YearFrom => self.year_from += 1,
            FilterRule::YearTo => self.year_to += 1,
            FilterRule::Category => self.category += 1,
            FilterRule::Author => self.author += 1,
            FilterRule::Publisher => self.publisher += 1,
            FilterRule::FreeText => self.free_text += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.availability
            + self.year_from
            + self.year_to
            + self.category
            + self.author
            + self.publisher
            + self.free_text
    }
}

/// Metadata describing one engine pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleListSummary {
    pub sort_key: Option<String>,
    pub records_considered: usize,
    pub records_visible: usize,
    pub excluded: ExclusionCounts,
}

/// The ordered subset of records handed to the list renderer.
/// Borrows from the input batch; nothing is cloned.
#[derive(Debug, Clone, Serialize)]
pub struct VisibleList<'a> {
    pub records: Vec<&'a DocumentRecord>,
    pub summary: VisibleListSummary,
}

impl<'a> VisibleList<'a> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a DocumentRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn into_records(self) -> Vec<&'a DocumentRecord> {
        self.records
    }
}
