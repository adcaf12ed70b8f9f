use serde::{Deserialize, Serialize};

/// What a fetch was for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FetchKind {
    Catalog,
    Search { query: String },
}

/// Handle for an in-flight fetch. Only the most recently issued ticket may
/// update the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchTicket {
    pub generation: u64,
    pub kind: FetchKind,
}

/// Result of handing a completed fetch to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Records replaced. `changed` is false when the batch hashed the same.
    Applied { changed: bool },
    /// A newer fetch was started; this result was dropped.
    Superseded,
    /// The fetch failed; the previous records were kept.
    Failed { message: String },
}
