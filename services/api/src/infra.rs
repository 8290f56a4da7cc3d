use gigboard::error::AppError;
use gigboard::marketplace::{
    sample_records, CatalogCsvImporter, CategoryFilter, InMemoryPostingCatalog, NotifyError,
    PostingAdded, PostingNotifier,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the catalog from a CSV export when one is configured, otherwise
/// from the built-in sample postings.
pub(crate) fn load_catalog(seed_csv: Option<&Path>) -> Result<InMemoryPostingCatalog, AppError> {
    let records = match seed_csv {
        Some(path) => CatalogCsvImporter::from_path(path)?,
        None => sample_records(),
    };

    Ok(InMemoryPostingCatalog::from_records(records))
}

/// Notifier wired into the running service: accepted postings land in the
/// log stream.
#[derive(Default, Clone)]
pub(crate) struct TracingNotifier;

impl PostingNotifier for TracingNotifier {
    fn posting_added(&self, notice: PostingAdded) -> Result<(), NotifyError> {
        info!(
            id = notice.id.0,
            kind = notice.kind.label(),
            title = %notice.title,
            "posting added to catalog"
        );
        Ok(())
    }
}

/// Recording notifier for the demo and route tests.
#[derive(Default, Clone)]
pub(crate) struct RecordingNotifier {
    events: Arc<Mutex<Vec<PostingAdded>>>,
}

impl RecordingNotifier {
    pub(crate) fn events(&self) -> Vec<PostingAdded> {
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

pub(crate) fn parse_category_filter(raw: &str) -> Result<CategoryFilter, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "all" => Ok(CategoryFilter::All),
        "remote" => Ok(CategoryFilter::Remote),
        "onsite" => Ok(CategoryFilter::Onsite),
        other => Err(format!(
            "unknown category '{other}' (expected all, remote, or onsite)"
        )),
    }
}
