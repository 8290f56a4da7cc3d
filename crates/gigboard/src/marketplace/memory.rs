use std::collections::HashSet;
use std::sync::Mutex;

use super::domain::{CatalogRecord, JobPosting, NewPosting, PostingId};
use super::repository::{PostingRepository, RepositoryError};

/// In-memory posting catalog. Postings, the favorites set, and the id
/// sequence live behind a single lock so id uniqueness and the
/// favorites-subset invariant cannot interleave.
#[derive(Debug, Default)]
pub struct InMemoryPostingCatalog {
    state: Mutex<CatalogState>,
}

#[derive(Debug, Default)]
struct CatalogState {
    postings: Vec<JobPosting>,
    favorites: HashSet<PostingId>,
    last_id: u64,
}

impl CatalogState {
    fn next_id(&mut self) -> PostingId {
        self.last_id += 1;
        PostingId(self.last_id)
    }
}

impl InMemoryPostingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load seed records in order, assigning ids 1..=n.
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        let mut state = CatalogState::default();
        for record in records {
            let id = state.next_id();
            state.postings.push(record.into_posting(id));
        }

        Self {
            state: Mutex::new(state),
        }
    }

    pub fn len(&self) -> usize {
        self.state.lock().expect("catalog mutex poisoned").postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PostingRepository for InMemoryPostingCatalog {
    fn insert(&self, posting: NewPosting) -> Result<JobPosting, RepositoryError> {
        let mut state = self.state.lock().expect("catalog mutex poisoned");
        let id = state.next_id();
        let stored = posting.into_posting(id);
        state.postings.push(stored.clone());
        Ok(stored)
    }

    fn list(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        let state = self.state.lock().expect("catalog mutex poisoned");
        Ok(state.postings.clone())
    }

    fn fetch(&self, id: PostingId) -> Result<Option<JobPosting>, RepositoryError> {
        let state = self.state.lock().expect("catalog mutex poisoned");
        Ok(state.postings.iter().find(|p| p.id == id).cloned())
    }

    fn toggle_favorite(&self, id: PostingId) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().expect("catalog mutex poisoned");
        if !state.postings.iter().any(|p| p.id == id) {
            return Err(RepositoryError::NotFound);
        }

        if state.favorites.remove(&id) {
            Ok(false)
        } else {
            state.favorites.insert(id);
            Ok(true)
        }
    }

    fn favorite_ids(&self) -> Result<HashSet<PostingId>, RepositoryError> {
        let state = self.state.lock().expect("catalog mutex poisoned");
        Ok(state.favorites.clone())
    }
}
