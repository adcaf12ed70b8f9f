use std::collections::BTreeSet;

use crate::document::DocumentRecord;
use crate::types::criteria::FilterCriteria;
use crate::types::visible_list::FilterRule;

/// Criteria resolved once per pass so the per-record check does no
/// allocation beyond free-text lowercasing.
#[derive(Debug)]
pub struct CompiledFilter<'c> {
    only_available: bool,
    year_from: Option<i32>,
    year_to: Option<i32>,
    categories: Option<&'c BTreeSet<String>>,
    author: Option<&'c str>,
    publisher: Option<&'c str>,
    query_lower: Option<String>,
}

impl<'c> CompiledFilter<'c> {
    pub fn new(criteria: &'c FilterCriteria) -> Self {
        CompiledFilter {
            only_available: criteria.only_available,
            year_from: criteria.year_from,
            year_to: criteria.year_to,
            categories: Some(&criteria.selected_categories).filter(|set| !set.is_empty()),
            author: criteria.active_author(),
            publisher: criteria.active_publisher(),
            query_lower: criteria.active_query().map(str::to_lowercase),
        }
    }

    /// True when no rule can exclude anything.
    pub fn is_identity(&self) -> bool {
        !self.only_available
            && self.year_from.is_none()
            && self.year_to.is_none()
            && self.categories.is_none()
            && self.author.is_none()
            && self.publisher.is_none()
            && self.query_lower.is_none()
    }

    pub fn matches(&self, record: &DocumentRecord) -> bool {
        self.first_failure(record).is_none()
    }

    /// The first rule the record fails, cheapest checks first.
    pub fn first_failure(&self, record: &DocumentRecord) -> Option<FilterRule> {
        if self.only_available && !record.is_available() {
            return Some(FilterRule::Availability);
        }

        // An unknown year never fails a bound; only an explicit value can.
        if let (Some(from), Some(year)) = (self.year_from, record.year) {
            if year < from {
                return Some(FilterRule::YearFrom);
            }
        }
        if let (Some(to), Some(year)) = (self.year_to, record.year) {
            if year > to {
                return Some(FilterRule::YearTo);
            }
        }

        if let Some(categories) = self.categories {
            match record.category.as_ref() {
                Some(category) if categories.contains(category) => {}
                _ => return Some(FilterRule::Category),
            }
        }

        // Exact, case-sensitive: these values come from the derived option lists.
        if let Some(author) = self.author {
            if record.author != author {
                return Some(FilterRule::Author);
            }
        }
        if let Some(publisher) = self.publisher {
            if record.publisher.as_deref() != Some(publisher) {
                return Some(FilterRule::Publisher);
            }
        }

        if let Some(query) = self.query_lower.as_deref() {
            let hit = record.title.to_lowercase().contains(query)
                || record.author.to_lowercase().contains(query);
            if !hit {
                return Some(FilterRule::FreeText);
            }
        }

        None
    }
}

/// Whether a single record passes the criteria.
pub fn record_matches(record: &DocumentRecord, criteria: &FilterCriteria) -> bool {
    CompiledFilter::new(criteria).matches(record)
}
