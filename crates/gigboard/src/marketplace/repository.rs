use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::domain::{JobPosting, NewPosting, PostingId, PostingKind};

/// Storage abstraction so the catalog service can be exercised in isolation.
pub trait PostingRepository: Send + Sync {
    /// Assign a fresh unique id, merge catalog defaults (zero rating and
    /// reviews), and append the posting in insertion order.
    fn insert(&self, posting: NewPosting) -> Result<JobPosting, RepositoryError>;
    /// All postings, insertion order.
    fn list(&self) -> Result<Vec<JobPosting>, RepositoryError>;
    fn fetch(&self, id: PostingId) -> Result<Option<JobPosting>, RepositoryError>;
    /// Flip favorite membership for a known posting and return the new
    /// state. Ids not present among the postings are rejected.
    fn toggle_favorite(&self, id: PostingId) -> Result<bool, RepositoryError>;
    fn favorite_ids(&self) -> Result<HashSet<PostingId>, RepositoryError>;
}

/// Error enumeration for catalog storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("posting not found")]
    NotFound,
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook fired once per accepted posting (feed or digest adapters).
pub trait PostingNotifier: Send + Sync {
    fn posting_added(&self, notice: PostingAdded) -> Result<(), NotifyError>;
}

/// Notice payload so routes and tests can assert the exactly-once contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingAdded {
    pub id: PostingId,
    pub kind: PostingKind,
    pub title: String,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
