use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),
}

/// Ordering applied to the filtered records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Title,
    Author,
    YearAscending,
    YearDescending,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::YearAscending => "yearAscending",
            SortKey::YearDescending => "yearDescending",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CriteriaError;

    /// Accepts the canonical tokens and the backend UI's option values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" | "titulo" => Ok(SortKey::Title),
            "author" | "autor" => Ok(SortKey::Author),
            "yearAscending" | "anio_asc" => Ok(SortKey::YearAscending),
            "yearDescending" | "anio_desc" => Ok(SortKey::YearDescending),
            other => Err(CriteriaError::UnknownSortKey(other.to_string())),
        }
    }
}

/// User-selected filter and sort parameters for one catalog screen.
///
/// Empty strings in the single-choice fields mean "no restriction", the same
/// as `None`. A `None` sort key keeps fetch order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub selected_categories: BTreeSet<String>,
    pub selected_author: Option<String>,
    pub selected_publisher: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub only_available: bool,
    pub free_text_query: Option<String>,
    pub sort_key: Option<SortKey>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the category if absent, removes it otherwise.
    pub fn toggle_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if !self.selected_categories.remove(&category) {
            self.selected_categories.insert(category);
        }
    }

    pub fn set_year_from_input(&mut self, input: &str) {
        self.year_from = parse_year_input(input);
    }

    pub fn set_year_to_input(&mut self, input: &str) {
        self.year_to = parse_year_input(input);
    }

    /// Reset every field to its default ("clear filters").
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn active_author(&self) -> Option<&str> {
        non_empty(self.selected_author.as_deref())
    }

    pub fn active_publisher(&self) -> Option<&str> {
        non_empty(self.selected_publisher.as_deref())
    }

    pub fn active_query(&self) -> Option<&str> {
        non_empty(self.free_text_query.as_deref())
    }

    // Builder-style setters, mostly for tests and fixtures.

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.selected_categories.insert(category.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.selected_author = Some(author.into());
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.selected_publisher = Some(publisher.into());
        self
    }

    pub fn with_year_range(mut self, from: Option<i32>, to: Option<i32>) -> Self {
        self.year_from = from;
        self.year_to = to;
        self
    }

    pub fn with_only_available(mut self, only_available: bool) -> Self {
        self.only_available = only_available;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.free_text_query = Some(query.into());
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = Some(sort_key);
        self
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse a year bound typed into a text field. Blank or non-numeric input
/// clears the bound instead of failing.
pub fn parse_year_input(input: &str) -> Option<i32> {
    input.trim().parse::<i32>().ok()
}
