use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::catalog::{Question, QuestionCatalog};
use super::domain::{Answer, Respondent, Submission, SubmissionId, SubmissionStatus};
use super::repository::{
    RepositoryError, SubmissionDetail, SubmissionFilter, SubmissionRepository, SubmissionSummary,
};
use super::scoring::{self, aggregate, classify, AssessmentResult, AxisScores, ScoringError};

/// Service composing the question catalog, repository, and scoring engine.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    catalog: &'static QuestionCatalog,
}

impl<R> AssessmentService<R>
where
    R: SubmissionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_catalog(repository, QuestionCatalog::standard())
    }

    pub fn with_catalog(repository: Arc<R>, catalog: &'static QuestionCatalog) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub fn catalog(&self) -> &'static QuestionCatalog {
        self.catalog
    }

    /// Every question in presentation order, scale items first.
    pub fn questions(&self) -> &'static [Question] {
        self.catalog.questions()
    }

    /// Open a new submission for a respondent.
    pub fn start(&self, respondent: Respondent) -> Result<Submission, AssessmentServiceError> {
        let submission = Submission::open(respondent, Utc::now());
        let stored = self.repository.insert(submission)?;
        info!(submission_id = %stored.submission_id, "submission started");
        Ok(stored)
    }

    /// Validate and store one answer. Re-answering a question replaces the earlier answer.
    pub fn record_response(
        &self,
        submission_id: &SubmissionId,
        answer: Answer,
    ) -> Result<(), AssessmentServiceError> {
        let question =
            self.catalog
                .get(&answer.question_id)
                .ok_or_else(|| ScoringError::UnknownQuestion {
                    question_id: answer.question_id.clone(),
                })?;
        scoring::validate_answer(question, &answer)?;

        let question_id = answer.question_id.clone();
        let store = |submission: &mut Submission| -> Result<(), AssessmentServiceError> {
            if submission.status.is_complete() {
                return Err(AssessmentServiceError::SubmissionClosed(submission_id.clone()));
            }
            submission.record(answer);
            Ok(())
        };
        self.repository.modify(submission_id, store)?;

        debug!(%submission_id, %question_id, "response recorded");
        Ok(())
    }

    /// Score the stored answers and close the submission. Succeeds at most once.
    pub fn complete(
        &self,
        submission_id: &SubmissionId,
    ) -> Result<AxisScores, AssessmentServiceError> {
        let catalog = self.catalog;
        let close = |submission: &mut Submission| -> Result<AxisScores, AssessmentServiceError> {
            if submission.status.is_complete() {
                return Err(AssessmentServiceError::AlreadyComplete(submission_id.clone()));
            }

            let scores = aggregate(&submission.answer_list(), catalog)?;
            submission.status = SubmissionStatus::Complete;
            submission.scores = Some(scores);
            Ok(scores)
        };
        let scores = self.repository.modify(submission_id, close)?;

        info!(
            %submission_id,
            learning_score = scores.learning_score,
            application_score = scores.application_score,
            "submission completed"
        );
        Ok(scores)
    }

    /// Classified result for a completed submission.
    pub fn results(
        &self,
        submission_id: &SubmissionId,
    ) -> Result<AssessmentResult, AssessmentServiceError> {
        let submission = self.fetch(submission_id)?;
        match (submission.status, submission.scores) {
            (SubmissionStatus::Complete, Some(scores)) => {
                Ok(classify(scores.learning_score, scores.application_score))
            }
            _ => Err(AssessmentServiceError::NotComplete(submission_id.clone())),
        }
    }

    /// Classify operator-supplied scores without touching storage.
    pub fn simulate(
        &self,
        learning_score: i64,
        application_score: i64,
    ) -> Result<AssessmentResult, AssessmentServiceError> {
        let result = scoring::simulate(learning_score, application_score)?;
        debug!(
            learning_score,
            application_score,
            style = result.labels.overall_style.label(),
            "simulated result"
        );
        Ok(result)
    }

    /// Submissions matching the filter, newest first.
    pub fn list(
        &self,
        filter: &SubmissionFilter,
    ) -> Result<Vec<SubmissionSummary>, AssessmentServiceError> {
        let mut submissions = self.repository.list(filter)?;
        submissions.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(submissions.iter().map(SubmissionSummary::from).collect())
    }

    pub fn detail(
        &self,
        submission_id: &SubmissionId,
    ) -> Result<SubmissionDetail, AssessmentServiceError> {
        let submission = self.fetch(submission_id)?;
        Ok(SubmissionDetail::from(&submission))
    }

    fn fetch(&self, submission_id: &SubmissionId) -> Result<Submission, AssessmentServiceError> {
        let submission = self
            .repository
            .fetch(submission_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(submission)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("submission {0} is already complete and no longer accepts responses")]
    SubmissionClosed(SubmissionId),
    #[error("submission {0} has already been completed")]
    AlreadyComplete(SubmissionId),
    #[error("submission {0} is not complete yet")]
    NotComplete(SubmissionId),
}
