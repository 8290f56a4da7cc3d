use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::domain::{CategoryFilter, JobPosting, PostingId, PostingView};
use super::draft::PostingSubmission;
use super::guard::{SubmissionGuard, ValidationError};
use super::repository::{
    NotifyError, PostingAdded, PostingNotifier, PostingRepository, RepositoryError,
};

/// Service composing the submission guard, posting storage, and notifier.
pub struct CatalogService<R, N> {
    guard: SubmissionGuard,
    repository: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> CatalogService<R, N>
where
    R: PostingRepository + 'static,
    N: PostingNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self::with_guard(SubmissionGuard::default(), repository, notifier)
    }

    pub fn with_guard(guard: SubmissionGuard, repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            guard,
            repository,
            notifier,
        }
    }

    pub fn guard(&self) -> &SubmissionGuard {
        &self.guard
    }

    /// Postings whose title or description contains the query
    /// (case-insensitive) and whose category passes the filter, in store
    /// order. An empty query matches everything.
    pub fn search(
        &self,
        query: &str,
        filter: CategoryFilter,
    ) -> Result<Vec<PostingView>, CatalogServiceError> {
        let favorites = self.repository.favorite_ids()?;
        let needle = query.trim().to_lowercase();

        Ok(self
            .repository
            .list()?
            .into_iter()
            .filter(|posting| posting.matches_query(&needle) && filter.matches(posting.category))
            .map(|posting| favorite_view(posting, &favorites))
            .collect())
    }

    /// Favorited postings in store order.
    pub fn favorites(&self) -> Result<Vec<PostingView>, CatalogServiceError> {
        let favorites = self.repository.favorite_ids()?;

        Ok(self
            .repository
            .list()?
            .into_iter()
            .filter(|posting| favorites.contains(&posting.id))
            .map(|posting| favorite_view(posting, &favorites))
            .collect())
    }

    /// Flip favorite membership for a known posting. Unknown ids surface
    /// `NotFound` and leave the set untouched.
    pub fn toggle_favorite(&self, id: PostingId) -> Result<FavoriteToggle, CatalogServiceError> {
        let is_favorite = self.repository.toggle_favorite(id)?;
        Ok(FavoriteToggle { id, is_favorite })
    }

    /// Validate a submission, append the posting, and notify listeners
    /// exactly once. Nothing is stored or notified when validation fails.
    pub fn submit(
        &self,
        submission: PostingSubmission,
    ) -> Result<PostingView, CatalogServiceError> {
        let posting = self.guard.posting_from_submission(submission)?;
        let stored = self.repository.insert(posting)?;

        self.notifier.posting_added(PostingAdded {
            id: stored.id,
            kind: stored.kind,
            title: stored.title.clone(),
        })?;
        info!(id = stored.id.0, kind = stored.kind.label(), "posting accepted");

        Ok(stored.view(false))
    }

    /// Fetch a single posting for API responses.
    pub fn get(&self, id: PostingId) -> Result<PostingView, CatalogServiceError> {
        let favorites = self.repository.favorite_ids()?;
        let posting = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(favorite_view(posting, &favorites))
    }
}

fn favorite_view(posting: JobPosting, favorites: &HashSet<PostingId>) -> PostingView {
    let is_favorite = favorites.contains(&posting.id);
    posting.view(is_favorite)
}

/// Result of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FavoriteToggle {
    pub id: PostingId,
    pub is_favorite: bool,
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
