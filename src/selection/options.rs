use std::collections::HashSet;

use serde::Serialize;

use crate::document::DocumentRecord;

/// Choices offered by the filter controls.
///
/// Always derived from the full, unfiltered batch so the choices stay put
/// while other filters change, even when an option currently matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub authors: Vec<String>,
    pub publishers: Vec<String>,
}

impl FilterOptions {
    /// Distinct non-empty values in first-appearance order.
    pub fn derive(records: &[DocumentRecord]) -> Self {
        FilterOptions {
            categories: distinct(records.iter().map(|r| r.category.as_deref())),
            authors: distinct(records.iter().map(|r| Some(r.author.as_str()))),
            publishers: distinct(records.iter().map(|r| r.publisher.as_deref())),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .flatten()
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
