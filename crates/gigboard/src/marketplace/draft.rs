use serde::{Deserialize, Serialize};

use super::domain::PostingKind;

/// Raw employer-form fields, exactly as typed. Numeric fields stay strings
/// until validation so partially edited input never errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployerDraft {
    pub title: String,
    pub city: String,
    pub address: String,
    pub date: String,
    pub duration: String,
    pub workers_needed: String,
    pub hourly_rate: String,
    pub description: String,
}

impl Default for EmployerDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            city: String::new(),
            address: String::new(),
            date: String::new(),
            duration: String::new(),
            workers_needed: "1".to_string(),
            hourly_rate: String::new(),
            description: String::new(),
        }
    }
}

/// Raw worker-form fields. `is_brigade` is derived, never set directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerDraft {
    pub title: String,
    pub city: String,
    pub available_time: String,
    pub duration: String,
    pub team_size: String,
    pub is_brigade: bool,
    pub hourly_rate: String,
    pub description: String,
}

impl Default for WorkerDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            city: String::new(),
            available_time: String::new(),
            duration: String::new(),
            team_size: "1".to_string(),
            is_brigade: false,
            hourly_rate: String::new(),
            description: String::new(),
        }
    }
}

impl WorkerDraft {
    /// Update the team size and rederive the brigade flag. Non-numeric input
    /// counts as a team of one.
    pub fn set_team_size(&mut self, raw: impl Into<String>) {
        self.team_size = raw.into();
        self.is_brigade = parsed_team_size(&self.team_size)
            .map(|size| size > 1)
            .unwrap_or(false);
    }
}

pub(crate) fn parsed_team_size(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Submission payload tagged with the originating form, as emitted by the
/// posting dialog and accepted by the HTTP intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PostingSubmission {
    Employer(EmployerDraft),
    Worker(WorkerDraft),
}

impl PostingSubmission {
    pub const fn kind(&self) -> PostingKind {
        match self {
            Self::Employer(_) => PostingKind::Employer,
            Self::Worker(_) => PostingKind::Worker,
        }
    }
}
