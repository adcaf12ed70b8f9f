use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::document::DocumentRecord;

/// Backend-assigned document identifier. Unique within a fetched batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(i64);

impl DocumentId {
    pub fn new(raw: i64) -> Self {
        DocumentId(raw)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for DocumentId {
    fn from(raw: i64) -> Self {
        DocumentId(raw)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content hash of a record batch, in fetch order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordsVersion(String);

impl RecordsVersion {
    pub fn from_records(records: &[DocumentRecord]) -> Self {
        let mut hasher = Sha256::new();

        for record in records {
            // Canonical form: one JSON line per record, field order fixed by the struct.
            let line = serde_json::to_vec(record).unwrap_or_default();
            hasher.update(&line);
            hasher.update(b"\n");
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        RecordsVersion(format!("sha256:{hex}"))
    }

    /// Version of the empty batch.
    pub fn empty() -> Self {
        Self::from_records(&[])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordsVersion {
    fn default() -> Self {
        Self::empty()
    }
}
