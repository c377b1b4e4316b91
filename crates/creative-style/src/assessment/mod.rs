//! Questionnaire workflow: catalog, submissions, scoring, admin access, and HTTP routers.

pub mod auth;
pub mod catalog;
pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use auth::{AdminAuthenticator, AdminClaims, AdminToken, AuthError};
pub use catalog::{Axis, Polarity, Question, QuestionCatalog, QuestionKind};
pub use domain::{Answer, AnswerValue, Respondent, Submission, SubmissionId, SubmissionStatus};
pub use repository::{
    RepositoryError, SubmissionDetail, SubmissionFilter, SubmissionRepository, SubmissionSummary,
};
pub use router::{admin_router, assessment_router};
pub use scoring::{
    aggregate, classify, score_answers, simulate, ApplicationDirection, AssessmentResult,
    AxisScores, DetailedProfile, LearningDirection, OverallStyle, ScoringError, Strength,
    StyleLabels, WorkingRelationships, AXIS_SCORE_LIMIT,
};
pub use service::{AssessmentService, AssessmentServiceError};
