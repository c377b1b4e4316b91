//! Scoring and classification engine.
//!
//! Everything here is pure: no I/O, no clock, no shared mutable state. The live results
//! endpoint reaches [`classify`] through [`aggregate`], the admin simulator reaches it through
//! [`simulate`]; both therefore produce identical output for identical scores.

mod aggregate;
mod classify;
mod profile;

pub use aggregate::aggregate;
pub(crate) use aggregate::validate_answer;
pub use classify::{
    classify, ApplicationDirection, AssessmentResult, LearningDirection, OverallStyle, Strength,
    StyleLabels,
};
pub use profile::{profile_for, DetailedProfile, WorkingRelationships};

use serde::{Deserialize, Serialize};

use super::catalog::{Axis, QuestionCatalog};
use super::domain::Answer;

/// Largest magnitude either axis can reach: 15 questions, 3 points from the midpoint each.
pub const AXIS_SCORE_LIMIT: i32 = 45;

/// Signed totals for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisScores {
    pub learning_score: i32,
    pub application_score: i32,
}

impl AxisScores {
    pub const fn new(learning_score: i32, application_score: i32) -> Self {
        Self {
            learning_score,
            application_score,
        }
    }

    /// Validates externally supplied scores against the declared axis range.
    pub fn checked(learning_score: i64, application_score: i64) -> Result<Self, ScoringError> {
        Ok(Self {
            learning_score: check_axis(Axis::Learning, learning_score)?,
            application_score: check_axis(Axis::Application, application_score)?,
        })
    }

    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Learning => self.learning_score,
            Axis::Application => self.application_score,
        }
    }
}

fn check_axis(axis: Axis, value: i64) -> Result<i32, ScoringError> {
    let limit = i64::from(AXIS_SCORE_LIMIT);
    if (-limit..=limit).contains(&value) {
        // In range, so the narrowing cannot truncate.
        Ok(value as i32)
    } else {
        Err(ScoringError::InvalidScore { axis, value })
    }
}

/// Errors raised at the boundary of the scoring engine. Classification itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("scale question {question_id} has no answer")]
    Incomplete { question_id: String },
    #[error("question {question_id} is not part of the catalog")]
    UnknownQuestion { question_id: String },
    #[error("invalid response to {question_id}: {reason}")]
    InvalidResponse { question_id: String, reason: String },
    #[error("{axis} score {value} is outside -45..=45")]
    InvalidScore { axis: Axis, value: i64 },
}

/// Aggregates a complete answer set and classifies the resulting scores.
pub fn score_answers(
    answers: &[Answer],
    catalog: &QuestionCatalog,
) -> Result<AssessmentResult, ScoringError> {
    let scores = aggregate(answers, catalog)?;
    Ok(classify(scores.learning_score, scores.application_score))
}

/// Classifies operator-supplied scores after range validation.
pub fn simulate(
    learning_score: i64,
    application_score: i64,
) -> Result<AssessmentResult, ScoringError> {
    let scores = AxisScores::checked(learning_score, application_score)?;
    Ok(classify(scores.learning_score, scores.application_score))
}
