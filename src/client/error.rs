/// Errors surfaced by a catalog fetcher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Network or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {detail}")]
    Status { status: u16, detail: String },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Search attempted with a blank query
    #[error("Search query is empty")]
    EmptyQuery,

    /// Create attempted with a blank title
    #[error("Title is required")]
    BlankTitle,

    /// A document with the same title already exists
    #[error("A document titled {0:?} already exists")]
    DuplicateTitle(String),

    /// No document with this id
    #[error("Document not found: {0}")]
    NotFound(i64),
}

impl FetchError {
    /// Backend `detail` message when there is one, else the display form.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Status { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(format!("JSON: {}", err))
    }
}

impl From<crate::document::NormalizeError> for FetchError {
    fn from(err: crate::document::NormalizeError) -> Self {
        FetchError::Parse(err.to_string())
    }
}
