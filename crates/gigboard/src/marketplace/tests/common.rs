use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::marketplace::domain::{JobPosting, NewPosting, PostingId};
use crate::marketplace::draft::{EmployerDraft, PostingSubmission, WorkerDraft};
use crate::marketplace::memory::InMemoryPostingCatalog;
use crate::marketplace::repository::{
    NotifyError, PostingAdded, PostingNotifier, PostingRepository, RepositoryError,
};
use crate::marketplace::seed::sample_records;
use crate::marketplace::service::CatalogService;
use crate::marketplace::{marketplace_router, SubmissionGuard};

pub(super) fn employer_draft() -> EmployerDraft {
    EmployerDraft {
        title: "Помощь с переездом".to_string(),
        city: "Москва".to_string(),
        address: "ул. Ленина, 10".to_string(),
        date: "2024-06-01".to_string(),
        duration: "4 часа".to_string(),
        workers_needed: "2".to_string(),
        hourly_rate: "500".to_string(),
        description: "Перенести мебель и коробки на третий этаж".to_string(),
    }
}

pub(super) fn worker_draft() -> WorkerDraft {
    WorkerDraft {
        title: "Готов помочь с переездом".to_string(),
        city: "Москва".to_string(),
        available_time: "с 10:00 до 18:00".to_string(),
        duration: "4 часа".to_string(),
        team_size: "1".to_string(),
        is_brigade: false,
        hourly_rate: "450".to_string(),
        description: "Опыт погрузочных работ, есть перчатки и ремни".to_string(),
    }
}

pub(super) fn employer_submission() -> PostingSubmission {
    PostingSubmission::Employer(employer_draft())
}

pub(super) fn worker_submission() -> PostingSubmission {
    PostingSubmission::Worker(worker_draft())
}

pub(super) fn guard() -> SubmissionGuard {
    SubmissionGuard::default()
}

pub(super) fn seeded_service() -> (
    CatalogService<InMemoryPostingCatalog, RecordingNotifier>,
    Arc<InMemoryPostingCatalog>,
    Arc<RecordingNotifier>,
) {
    let repository = Arc::new(InMemoryPostingCatalog::from_records(sample_records()));
    let notifier = Arc::new(RecordingNotifier::default());
    let service = CatalogService::new(repository.clone(), notifier.clone());
    (service, repository, notifier)
}

pub(super) fn seeded_router(
) -> (axum::Router, Arc<InMemoryPostingCatalog>, Arc<RecordingNotifier>) {
    let (service, repository, notifier) = seeded_service();
    (marketplace_router(Arc::new(service)), repository, notifier)
}

#[derive(Default)]
pub(super) struct RecordingNotifier {
    events: Mutex<Vec<PostingAdded>>,
}

impl RecordingNotifier {
    pub(super) fn events(&self) -> Vec<PostingAdded> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl PostingNotifier for RecordingNotifier {
    fn posting_added(&self, notice: PostingAdded) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct FailingNotifier;

impl PostingNotifier for FailingNotifier {
    fn posting_added(&self, _notice: PostingAdded) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("feed offline".to_string()))
    }
}

pub(super) struct UnavailableCatalog;

impl PostingRepository for UnavailableCatalog {
    fn insert(&self, _posting: NewPosting) -> Result<JobPosting, RepositoryError> {
        Err(RepositoryError::Unavailable("catalog offline".to_string()))
    }

    fn list(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("catalog offline".to_string()))
    }

    fn fetch(&self, _id: PostingId) -> Result<Option<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("catalog offline".to_string()))
    }

    fn toggle_favorite(&self, _id: PostingId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("catalog offline".to_string()))
    }

    fn favorite_ids(&self) -> Result<HashSet<PostingId>, RepositoryError> {
        Err(RepositoryError::Unavailable("catalog offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
