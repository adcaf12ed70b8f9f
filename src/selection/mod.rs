pub mod filters;
pub mod options;
pub mod ordering;

use crate::document::DocumentRecord;
use crate::types::criteria::FilterCriteria;
use crate::types::visible_list::{ExclusionCounts, VisibleList, VisibleListSummary};
pub use filters::{record_matches, CompiledFilter};
pub use options::FilterOptions;
pub use ordering::{compare_records, Collator, LocaleCollator, OrdinalCollator};

/// The catalog filter engine. Pure: no I/O, no state between calls, and
/// cheap enough to rerun on every keystroke.
#[derive(Debug, Clone, Copy)]
pub struct CatalogFilter<C> {
	collator: C,
}

impl Default for CatalogFilter<LocaleCollator> {
	fn default() -> Self {
		Self {
			collator: LocaleCollator,
		}
	}
}

impl<C> CatalogFilter<C>
where
	C: Collator,
{
	pub fn new(collator: C) -> Self {
		Self { collator }
	}

	pub fn apply<'a>(
		&self,
		records: &'a [DocumentRecord],
		criteria: &FilterCriteria,
	) -> VisibleList<'a> {
		// 1. Filtering Phase
		let filter = CompiledFilter::new(criteria);
		let mut excluded = ExclusionCounts::default();

		let mut visible: Vec<&DocumentRecord> = if filter.is_identity() {
			records.iter().collect()
		} else {
			records
				.iter()
				.filter(|record| match filter.first_failure(record) {
					Some(rule) => {
						excluded.record(rule);
						false
					}
					None => true,
				})
				.collect()
		};

		// 2. Ordering Phase
		// Stable: ties keep fetch order.
		if let Some(sort_key) = criteria.sort_key {
			visible.sort_by(|a, b| compare_records(sort_key, &self.collator, a, b));

			debug_assert!(visible.windows(2).all(|w| {
				compare_records(sort_key, &self.collator, w[0], w[1]) != std::cmp::Ordering::Greater
			}));
		}

		debug_assert_eq!(visible.len() + excluded.total(), records.len());

		let summary = VisibleListSummary {
			sort_key: criteria.sort_key.map(|k| k.as_str().to_string()),
			records_considered: records.len(),
			records_visible: visible.len(),
			excluded,
		};

		tracing::trace!(
			considered = summary.records_considered,
			visible = summary.records_visible,
			"computed visible list"
		);

		VisibleList {
			records: visible,
			summary,
		}
	}
}

/// Filter and order `records` by `criteria` with locale-aware collation.
pub fn compute_visible_list<'a>(
	records: &'a [DocumentRecord],
	criteria: &FilterCriteria,
) -> Vec<&'a DocumentRecord> {
	CatalogFilter::default().apply(records, criteria).into_records()
}
