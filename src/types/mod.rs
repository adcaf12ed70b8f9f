pub mod criteria;
pub mod identifiers;
pub mod visible_list;

pub use criteria::{parse_year_input, CriteriaError, FilterCriteria, SortKey};
pub use identifiers::{DocumentId, RecordsVersion};
pub use visible_list::{ExclusionCounts, FilterRule, VisibleList, VisibleListSummary};
