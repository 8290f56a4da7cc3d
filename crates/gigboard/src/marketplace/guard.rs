use chrono::NaiveDate;

use super::domain::{NewPosting, PostingDetails, PostingKind};
use super::draft::{EmployerDraft, PostingSubmission, WorkerDraft};

/// Validation errors raised while normalizing a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),
    #[error("field '{field}' must be a whole number")]
    NotANumber { field: &'static str },
    #[error("field '{field}' must be at least {min}")]
    BelowMinimum { field: &'static str, min: u32 },
    #[error("field '{field}' must be a date in YYYY-MM-DD form")]
    InvalidDate { field: &'static str },
}

const DEFAULT_MIN_HEADCOUNT: u32 = 1;

/// Minimum-value dials backing form validation.
#[derive(Debug, Clone)]
pub struct DraftPolicy {
    min_workers_needed: u32,
    min_team_size: u32,
    min_hourly_rate: u32,
}

impl DraftPolicy {
    /// Headcount minimums below one make no sense and are clamped up.
    pub fn new(min_workers_needed: u32, min_team_size: u32, min_hourly_rate: u32) -> Self {
        Self {
            min_workers_needed: min_workers_needed.max(DEFAULT_MIN_HEADCOUNT),
            min_team_size: min_team_size.max(DEFAULT_MIN_HEADCOUNT),
            min_hourly_rate,
        }
    }

    pub fn min_workers_needed(&self) -> u32 {
        self.min_workers_needed
    }

    pub fn min_team_size(&self) -> u32 {
        self.min_team_size
    }

    pub fn min_hourly_rate(&self) -> u32 {
        self.min_hourly_rate
    }
}

impl Default for DraftPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_HEADCOUNT, DEFAULT_MIN_HEADCOUNT, 0)
    }
}

/// Guard turning raw form submissions into normalized postings. Both the
/// posting dialog and the catalog service validate through the same guard,
/// so nothing invalid reaches storage from either path.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    policy: DraftPolicy,
}

impl SubmissionGuard {
    pub fn with_policy(policy: DraftPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DraftPolicy {
        &self.policy
    }

    /// Validate a submission and produce the normalized posting record.
    pub fn posting_from_submission(
        &self,
        submission: PostingSubmission,
    ) -> Result<NewPosting, ValidationError> {
        match submission {
            PostingSubmission::Employer(draft) => self.employer_posting(draft),
            PostingSubmission::Worker(draft) => self.worker_posting(draft),
        }
    }

    fn employer_posting(&self, draft: EmployerDraft) -> Result<NewPosting, ValidationError> {
        let title = required("title", &draft.title)?;
        let city = required("city", &draft.city)?;
        let address = required("address", &draft.address)?;
        let date = parsed_date("date", &draft.date)?;
        let duration = required("duration", &draft.duration)?;
        let workers_needed = bounded_number(
            "workers_needed",
            &draft.workers_needed,
            self.policy.min_workers_needed,
        )?;
        let hourly_rate =
            bounded_number("hourly_rate", &draft.hourly_rate, self.policy.min_hourly_rate)?;
        let description = required("description", &draft.description)?;

        let kind = PostingKind::Employer;
        Ok(NewPosting {
            kind,
            title,
            description,
            category: kind.category(),
            price: price_label(hourly_rate),
            author: kind.default_author().to_string(),
            details: PostingDetails::Employer {
                city,
                address,
                date,
                duration,
                workers_needed,
                hourly_rate,
            },
        })
    }

    fn worker_posting(&self, draft: WorkerDraft) -> Result<NewPosting, ValidationError> {
        let title = required("title", &draft.title)?;
        let city = required("city", &draft.city)?;
        let available_time = required("available_time", &draft.available_time)?;
        let duration = required("duration", &draft.duration)?;
        let team_size =
            bounded_number("team_size", &draft.team_size, self.policy.min_team_size)?;
        let hourly_rate =
            bounded_number("hourly_rate", &draft.hourly_rate, self.policy.min_hourly_rate)?;
        let description = required("description", &draft.description)?;

        let kind = PostingKind::Worker;
        Ok(NewPosting {
            kind,
            title,
            description,
            category: kind.category(),
            price: price_label(hourly_rate),
            author: kind.default_author().to_string(),
            details: PostingDetails::Worker {
                city,
                available_time,
                duration,
                team_size,
                // Recomputed from the parsed size; the draft flag is only a
                // live-editing hint.
                is_brigade: team_size > 1,
                hourly_rate,
            },
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    Ok(trimmed.to_string())
}

fn bounded_number(field: &'static str, raw: &str, min: u32) -> Result<u32, ValidationError> {
    let raw = required(field, raw)?;
    let value: u32 = raw
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })?;
    if value < min {
        return Err(ValidationError::BelowMinimum { field, min });
    }

    Ok(value)
}

fn parsed_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = required(field, raw)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate { field })
}

fn price_label(hourly_rate: u32) -> String {
    format!("{hourly_rate} ₽/час")
}
