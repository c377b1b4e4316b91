use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Answer, Submission, SubmissionId, SubmissionStatus};

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SubmissionRepository: Send + Sync {
    fn insert(&self, submission: Submission) -> Result<Submission, RepositoryError>;
    /// Runs `apply` against the stored submission while holding exclusive access to it.
    ///
    /// The change is committed only when `apply` returns `Ok`. A missing record yields
    /// `RepositoryError::NotFound` converted into `E`.
    fn modify<T, E, F>(&self, id: &SubmissionId, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut Submission) -> Result<T, E>,
        E: From<RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<Submission>, RepositoryError>;
    fn list(&self, filter: &SubmissionFilter) -> Result<Vec<Submission>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Admin listing filter. Dates are inclusive calendar days in UTC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionFilter {
    #[serde(default)]
    pub is_complete: Option<bool>,
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
}

impl SubmissionFilter {
    pub fn matches(&self, submission: &Submission) -> bool {
        if let Some(is_complete) = self.is_complete {
            if submission.status.is_complete() != is_complete {
                return false;
            }
        }

        let day = submission.submitted_at.date_naive();
        if self.date_from.is_some_and(|from| day < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| day > to) {
            return false;
        }

        true
    }
}

/// Row shown in the admin submission list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionSummary {
    pub submission_id: SubmissionId,
    pub user_name: String,
    pub user_email: String,
    pub submission_time: DateTime<Utc>,
    pub is_complete: bool,
}

impl From<&Submission> for SubmissionSummary {
    fn from(submission: &Submission) -> Self {
        Self {
            submission_id: submission.submission_id.clone(),
            user_name: submission.respondent.name.clone(),
            user_email: submission.respondent.email.clone(),
            submission_time: submission.submitted_at,
            is_complete: submission.status == SubmissionStatus::Complete,
        }
    }
}

/// Summary plus every stored response, for the admin detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDetail {
    #[serde(flatten)]
    pub summary: SubmissionSummary,
    pub responses: Vec<Answer>,
}

impl From<&Submission> for SubmissionDetail {
    fn from(submission: &Submission) -> Self {
        Self {
            summary: SubmissionSummary::from(submission),
            responses: submission.answer_list(),
        }
    }
}
