//! Listing catalog and posting intake for the marketplace board.
//!
//! The catalog owns the ordered posting collection and the favorites set;
//! submissions reach it through the dual-mode posting dialog or the HTTP
//! router, both of which validate drafts with the same [`SubmissionGuard`].

pub mod dialog;
pub mod domain;
pub mod draft;
pub mod guard;
pub mod import;
pub mod memory;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use dialog::{DialogError, DialogState, FormMode, PostingDialog};
pub use domain::{
    CatalogRecord, Category, CategoryFilter, JobPosting, NewPosting, PostingDetails, PostingId,
    PostingKind, PostingView,
};
pub use draft::{EmployerDraft, PostingSubmission, WorkerDraft};
pub use guard::{DraftPolicy, SubmissionGuard, ValidationError};
pub use import::{CatalogCsvImporter, ImportError};
pub use memory::InMemoryPostingCatalog;
pub use repository::{
    NotifyError, PostingAdded, PostingNotifier, PostingRepository, RepositoryError,
};
pub use router::marketplace_router;
pub use seed::sample_records;
pub use service::{CatalogService, CatalogServiceError, FavoriteToggle};
