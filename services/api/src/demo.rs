use crate::infra::{load_catalog, parse_category_filter, RecordingNotifier, TracingNotifier};
use clap::Args;
use gigboard::error::AppError;
use gigboard::marketplace::{
    CatalogService, Category, CategoryFilter, FormMode, PostingDialog, PostingId, PostingView,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogShowArgs {
    /// Seed the catalog from a CSV export instead of the built-in samples
    #[arg(long)]
    pub(crate) seed_csv: Option<PathBuf>,
    /// Search query matched against titles and descriptions
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Category filter: all, remote, or onsite
    #[arg(long, value_parser = parse_category_filter)]
    pub(crate) category: Option<CategoryFilter>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed the catalog from a CSV export instead of the built-in samples
    #[arg(long)]
    pub(crate) seed_csv: Option<PathBuf>,
    /// Skip the posting-intake portion of the demo
    #[arg(long)]
    pub(crate) skip_submission: bool,
}

pub(crate) fn run_catalog_show(args: CatalogShowArgs) -> Result<(), AppError> {
    let CatalogShowArgs {
        seed_csv,
        query,
        category,
    } = args;

    let repository = Arc::new(load_catalog(seed_csv.as_deref())?);
    let service = CatalogService::new(repository, Arc::new(TracingNotifier));

    let query = query.unwrap_or_default();
    let filter = category.unwrap_or_default();
    let views = match service.search(&query, filter) {
        Ok(views) => views,
        Err(err) => {
            println!("catalog unavailable: {err}");
            return Ok(());
        }
    };

    if views.is_empty() {
        println!("no postings matched the filter");
        return Ok(());
    }

    println!("{} posting(s):", views.len());
    for view in &views {
        println!("  {}", posting_line(view));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed_csv,
        skip_submission,
    } = args;

    let repository = Arc::new(load_catalog(seed_csv.as_deref())?);
    let notifier = Arc::new(RecordingNotifier::default());
    let service = CatalogService::new(repository, notifier.clone());

    println!("Marketplace board demo");

    let all = match service.search("", CategoryFilter::All) {
        Ok(views) => views,
        Err(err) => {
            println!("  catalog unavailable: {err}");
            return Ok(());
        }
    };
    let remote = all
        .iter()
        .filter(|view| view.category == Category::Remote)
        .count();
    println!(
        "- catalog holds {} postings ({} remote / {} onsite)",
        all.len(),
        remote,
        all.len() - remote
    );

    println!("\nSearch for 'дизайн':");
    if let Ok(views) = service.search("дизайн", CategoryFilter::All) {
        for view in &views {
            println!("  {}", posting_line(view));
        }
    }

    println!("\nOn-site postings:");
    if let Ok(views) = service.search("", CategoryFilter::Onsite) {
        for view in &views {
            println!("  {}", posting_line(view));
        }
    }

    println!("\nFavorites walkthrough:");
    for id in [2, 5] {
        match service.toggle_favorite(PostingId(id)) {
            Ok(toggle) => println!("  toggled #{} -> favorite: {}", id, toggle.is_favorite),
            Err(err) => println!("  toggle #{id} failed: {err}"),
        }
    }
    if let Ok(favorites) = service.favorites() {
        println!("  favorites tab now holds {} posting(s)", favorites.len());
    }
    if let Ok(toggle) = service.toggle_favorite(PostingId(2)) {
        println!(
            "  toggled #2 again -> favorite: {} (involution)",
            toggle.is_favorite
        );
    }
    match service.toggle_favorite(PostingId(99)) {
        Ok(_) => println!("  unexpected: unknown posting was toggled"),
        Err(err) => println!("  toggling unknown #99 rejected: {err}"),
    }

    if skip_submission {
        return Ok(());
    }

    println!("\nPosting intake demo:");
    let mut dialog = PostingDialog::new();

    // A worker starts an application, derives the brigade flag, then backs out.
    dialog.open();
    if dialog.select_tab(FormMode::Worker).is_err() {
        println!("  dialog refused the worker tab");
        return Ok(());
    }
    {
        let draft = dialog.worker_draft_mut();
        draft.title = "Готов помочь с переездом".to_string();
        draft.city = "Москва".to_string();
        draft.set_team_size("3");
        println!(
            "  worker draft: team of {} -> brigade: {}",
            draft.team_size, draft.is_brigade
        );
    }
    dialog.cancel();
    if let Ok(views) = service.search("", CategoryFilter::All) {
        println!(
            "  cancelled the worker form; catalog still holds {} postings",
            views.len()
        );
    }

    // The employer form is filled completely and submitted.
    dialog.open();
    {
        let draft = dialog.employer_draft_mut();
        draft.title = "Помощь с переездом".to_string();
        draft.city = "Москва".to_string();
        draft.address = "ул. Ленина, 10".to_string();
        draft.date = "2024-06-01".to_string();
        draft.duration = "4 часа".to_string();
        draft.workers_needed = "2".to_string();
        draft.hourly_rate = "500".to_string();
        draft.description = "Перенести мебель и коробки на третий этаж".to_string();
    }

    let submission = match dialog.submit(service.guard()) {
        Ok(submission) => submission,
        Err(err) => {
            println!("  submit blocked: {err}");
            return Ok(());
        }
    };

    match service.submit(submission) {
        Ok(view) => {
            println!("  accepted {}", posting_line(&view));
            println!(
                "  listeners notified {} time(s)",
                notifier.events().len()
            );
        }
        Err(err) => println!("  submission rejected: {err}"),
    }

    if let Ok(views) = service.search("", CategoryFilter::All) {
        println!("  catalog now holds {} postings", views.len());
    }

    Ok(())
}

fn posting_line(view: &PostingView) -> String {
    format!(
        "#{} [{}] {} | {} | ★{:.1} ({}) | {}",
        view.id.0,
        view.category_label,
        view.title,
        view.price,
        view.rating,
        view.reviews,
        view.author
    )
}
