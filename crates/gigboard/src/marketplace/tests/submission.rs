use super::common::*;
use crate::marketplace::dialog::{DialogError, DialogState, FormMode, PostingDialog};
use crate::marketplace::domain::{Category, PostingDetails, PostingKind};
use crate::marketplace::draft::PostingSubmission;
use crate::marketplace::guard::{DraftPolicy, SubmissionGuard, ValidationError};

#[test]
fn employer_requires_every_field() {
    let guard = guard();
    let blank_outs: [(&str, fn(&mut crate::marketplace::EmployerDraft)); 6] = [
        ("title", |draft| draft.title.clear()),
        ("city", |draft| draft.city.clear()),
        ("address", |draft| draft.address.clear()),
        ("date", |draft| draft.date.clear()),
        ("duration", |draft| draft.duration.clear()),
        ("description", |draft| draft.description.clear()),
    ];

    for (field, blank_out) in blank_outs {
        let mut draft = employer_draft();
        blank_out(&mut draft);

        match guard.posting_from_submission(PostingSubmission::Employer(draft)) {
            Err(ValidationError::MissingField(missing)) => assert_eq!(missing, field),
            other => panic!("expected missing '{field}', got {other:?}"),
        }
    }
}

#[test]
fn whitespace_only_fields_count_as_empty() {
    let guard = guard();
    let mut draft = worker_draft();
    draft.city = "   ".to_string();

    match guard.posting_from_submission(PostingSubmission::Worker(draft)) {
        Err(ValidationError::MissingField("city")) => {}
        other => panic!("expected missing city, got {other:?}"),
    }
}

#[test]
fn non_numeric_headcounts_are_rejected() {
    let guard = guard();
    let mut draft = employer_draft();
    draft.workers_needed = "двое".to_string();

    match guard.posting_from_submission(PostingSubmission::Employer(draft)) {
        Err(ValidationError::NotANumber {
            field: "workers_needed",
        }) => {}
        other => panic!("expected number error, got {other:?}"),
    }
}

#[test]
fn headcounts_below_one_are_rejected() {
    let guard = guard();

    let mut employer = employer_draft();
    employer.workers_needed = "0".to_string();
    match guard.posting_from_submission(PostingSubmission::Employer(employer)) {
        Err(ValidationError::BelowMinimum {
            field: "workers_needed",
            min: 1,
        }) => {}
        other => panic!("expected minimum error, got {other:?}"),
    }

    let mut worker = worker_draft();
    worker.team_size = "0".to_string();
    match guard.posting_from_submission(PostingSubmission::Worker(worker)) {
        Err(ValidationError::BelowMinimum {
            field: "team_size",
            min: 1,
        }) => {}
        other => panic!("expected minimum error, got {other:?}"),
    }
}

#[test]
fn employer_date_must_be_iso_formatted() {
    let guard = guard();
    let mut draft = employer_draft();
    draft.date = "01.06.2024".to_string();

    match guard.posting_from_submission(PostingSubmission::Employer(draft)) {
        Err(ValidationError::InvalidDate { field: "date" }) => {}
        other => panic!("expected date error, got {other:?}"),
    }
}

#[test]
fn zero_hourly_rate_is_allowed_by_default() {
    let guard = guard();
    let mut draft = worker_draft();
    draft.hourly_rate = "0".to_string();

    let posting = guard
        .posting_from_submission(PostingSubmission::Worker(draft))
        .expect("zero rate passes");
    assert_eq!(posting.price, "0 ₽/час");
}

#[test]
fn policy_minimum_rate_is_enforced() {
    let guard = SubmissionGuard::with_policy(DraftPolicy::new(1, 1, 300));
    let mut draft = worker_draft();
    draft.hourly_rate = "250".to_string();

    match guard.posting_from_submission(PostingSubmission::Worker(draft)) {
        Err(ValidationError::BelowMinimum {
            field: "hourly_rate",
            min: 300,
        }) => {}
        other => panic!("expected minimum error, got {other:?}"),
    }
}

#[test]
fn employer_normalization_fills_catalog_fields() {
    let guard = guard();
    let mut draft = employer_draft();
    draft.title = "  Помощь с переездом  ".to_string();

    let posting = guard
        .posting_from_submission(PostingSubmission::Employer(draft))
        .expect("valid submission");

    assert_eq!(posting.kind, PostingKind::Employer);
    assert_eq!(posting.category, Category::Onsite);
    assert_eq!(posting.title, "Помощь с переездом");
    assert_eq!(posting.author, "Новый заказчик");
    assert_eq!(posting.price, "500 ₽/час");
    match posting.details {
        PostingDetails::Employer {
            workers_needed,
            hourly_rate,
            ..
        } => {
            assert_eq!(workers_needed, 2);
            assert_eq!(hourly_rate, 500);
        }
        other => panic!("expected employer details, got {other:?}"),
    }
}

#[test]
fn worker_normalization_recomputes_the_brigade_flag() {
    let guard = guard();

    // The draft flag is stale on purpose; normalization must not trust it.
    let mut solo = worker_draft();
    solo.team_size = "1".to_string();
    solo.is_brigade = true;
    let posting = guard
        .posting_from_submission(PostingSubmission::Worker(solo))
        .expect("valid submission");
    match posting.details {
        PostingDetails::Worker { is_brigade, .. } => assert!(!is_brigade),
        other => panic!("expected worker details, got {other:?}"),
    }

    let mut crew = worker_draft();
    crew.team_size = "3".to_string();
    crew.is_brigade = false;
    let posting = guard
        .posting_from_submission(PostingSubmission::Worker(crew))
        .expect("valid submission");
    assert_eq!(posting.category, Category::Remote);
    assert_eq!(posting.author, "Новый работник");
    match posting.details {
        PostingDetails::Worker {
            team_size,
            is_brigade,
            ..
        } => {
            assert_eq!(team_size, 3);
            assert!(is_brigade);
        }
        other => panic!("expected worker details, got {other:?}"),
    }
}

#[test]
fn set_team_size_derives_the_brigade_flag() {
    let mut draft = worker_draft();

    draft.set_team_size("2");
    assert!(draft.is_brigade);

    draft.set_team_size("1");
    assert!(!draft.is_brigade);

    draft.set_team_size("бригада");
    assert!(!draft.is_brigade);

    draft.set_team_size(" 4 ");
    assert!(draft.is_brigade);
}

#[test]
fn dialog_opens_on_the_employer_tab() {
    let mut dialog = PostingDialog::new();
    assert_eq!(dialog.state(), DialogState::Closed);

    dialog.open();
    assert_eq!(dialog.state(), DialogState::Open(FormMode::Employer));
}

#[test]
fn tab_switches_preserve_both_drafts() {
    let mut dialog = PostingDialog::new();
    dialog.open();
    dialog.employer_draft_mut().title = "Сборка шкафа".to_string();
    dialog.worker_draft_mut().set_team_size("2");

    dialog
        .select_tab(FormMode::Worker)
        .expect("tab switch while open");
    dialog
        .select_tab(FormMode::Employer)
        .expect("tab switch while open");

    assert_eq!(dialog.employer_draft().title, "Сборка шкафа");
    assert_eq!(dialog.worker_draft().team_size, "2");
    assert!(dialog.worker_draft().is_brigade);
}

#[test]
fn closed_dialog_rejects_tab_switches_and_submits() {
    let mut dialog = PostingDialog::new();

    assert_eq!(
        dialog.select_tab(FormMode::Worker),
        Err(DialogError::NotOpen)
    );
    assert!(matches!(
        dialog.submit(&guard()),
        Err(DialogError::NotOpen)
    ));
}

#[test]
fn cancel_closes_without_touching_drafts() {
    let mut dialog = PostingDialog::new();
    dialog.open_with(FormMode::Worker);
    *dialog.worker_draft_mut() = worker_draft();

    dialog.cancel();

    assert!(!dialog.is_open());
    assert_eq!(dialog.worker_draft(), &worker_draft());
}

#[test]
fn successful_submit_resets_both_drafts_and_closes() {
    let mut dialog = PostingDialog::new();
    dialog.open();
    *dialog.employer_draft_mut() = employer_draft();
    dialog.worker_draft_mut().title = "Черновик анкеты".to_string();

    let submission = dialog.submit(&guard()).expect("valid submit");
    match submission {
        PostingSubmission::Employer(draft) => {
            assert_eq!(draft.title, "Помощь с переездом");
        }
        other => panic!("expected employer submission, got {other:?}"),
    }

    assert!(!dialog.is_open());
    assert_eq!(
        dialog.employer_draft(),
        &crate::marketplace::EmployerDraft::default()
    );
    assert_eq!(
        dialog.worker_draft(),
        &crate::marketplace::WorkerDraft::default()
    );
}

#[test]
fn failed_submit_keeps_the_dialog_open_with_drafts_intact() {
    let mut dialog = PostingDialog::new();
    dialog.open();
    let mut draft = employer_draft();
    draft.description.clear();
    *dialog.employer_draft_mut() = draft;

    match dialog.submit(&guard()) {
        Err(DialogError::Validation(ValidationError::MissingField("description"))) => {}
        other => panic!("expected blocked submit, got {other:?}"),
    }

    assert!(dialog.is_open());
    assert_eq!(dialog.employer_draft().title, "Помощь с переездом");
}

#[test]
fn worker_tab_emits_worker_submissions() {
    let mut dialog = PostingDialog::new();
    dialog.open_with(FormMode::Worker);
    *dialog.worker_draft_mut() = worker_draft();

    let submission = dialog.submit(&guard()).expect("valid submit");
    assert_eq!(submission.kind(), PostingKind::Worker);
}
