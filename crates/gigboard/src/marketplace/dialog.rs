use super::draft::{EmployerDraft, PostingSubmission, WorkerDraft};
use super::guard::{SubmissionGuard, ValidationError};

/// Which form tab is active while the dialog is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Employer,
    Worker,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open(FormMode),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    #[error("posting dialog is not open")]
    NotOpen,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The dual-mode posting dialog: two independent drafts behind a tab
/// control. Tab switches and `cancel` never touch the drafts; only a
/// successful submit resets them.
#[derive(Debug, Clone, Default)]
pub struct PostingDialog {
    state: DialogState,
    employer: EmployerDraft,
    worker: WorkerDraft,
}

impl PostingDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open(_))
    }

    /// Open on the employer tab.
    pub fn open(&mut self) {
        self.open_with(FormMode::Employer);
    }

    pub fn open_with(&mut self, mode: FormMode) {
        self.state = DialogState::Open(mode);
    }

    /// Switch tabs while open; both drafts survive the switch.
    pub fn select_tab(&mut self, mode: FormMode) -> Result<(), DialogError> {
        match self.state {
            DialogState::Open(_) => {
                self.state = DialogState::Open(mode);
                Ok(())
            }
            DialogState::Closed => Err(DialogError::NotOpen),
        }
    }

    pub fn employer_draft(&self) -> &EmployerDraft {
        &self.employer
    }

    pub fn employer_draft_mut(&mut self) -> &mut EmployerDraft {
        &mut self.employer
    }

    pub fn worker_draft(&self) -> &WorkerDraft {
        &self.worker
    }

    pub fn worker_draft_mut(&mut self) -> &mut WorkerDraft {
        &mut self.worker
    }

    /// Close without emitting anything. Drafts are preserved for the session.
    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Validate the active draft and, on success, emit the tagged submission,
    /// reset both drafts, and close. A validation failure leaves the dialog
    /// open with both drafts intact, mirroring input-level blocking.
    pub fn submit(&mut self, guard: &SubmissionGuard) -> Result<PostingSubmission, DialogError> {
        let mode = match self.state {
            DialogState::Open(mode) => mode,
            DialogState::Closed => return Err(DialogError::NotOpen),
        };

        let submission = match mode {
            FormMode::Employer => PostingSubmission::Employer(self.employer.clone()),
            FormMode::Worker => PostingSubmission::Worker(self.worker.clone()),
        };

        guard.posting_from_submission(submission.clone())?;

        self.employer = EmployerDraft::default();
        self.worker = WorkerDraft::default();
        self.state = DialogState::Closed;

        Ok(submission)
    }
}
