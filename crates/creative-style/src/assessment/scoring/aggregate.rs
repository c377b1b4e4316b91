use std::collections::HashMap;

use super::super::catalog::{
    Axis, Question, QuestionCatalog, QuestionKind, SCALE_MAX, SCALE_MIDPOINT, SCALE_MIN,
};
use super::super::domain::{Answer, AnswerValue};
use super::{AxisScores, ScoringError};

/// Reduces a complete answer set to the two signed axis totals.
///
/// Every answer must reference a catalog question and match its kind, and every scale
/// question must be answered. When a question is answered more than once the last answer
/// wins. Text answers are validated but never contribute to a score.
pub fn aggregate(answers: &[Answer], catalog: &QuestionCatalog) -> Result<AxisScores, ScoringError> {
    let mut responses: HashMap<&str, i32> = HashMap::with_capacity(answers.len());

    for answer in answers {
        let question = catalog
            .get(&answer.question_id)
            .ok_or_else(|| ScoringError::UnknownQuestion {
                question_id: answer.question_id.clone(),
            })?;
        validate_answer(question, answer)?;

        if let AnswerValue::Numeric(value) = answer.value {
            responses.insert(question.id, value);
        }
    }

    let mut scores = AxisScores::new(0, 0);
    for question in catalog.scale_questions() {
        let response = responses
            .get(question.id)
            .copied()
            .ok_or_else(|| ScoringError::Incomplete {
                question_id: question.id.to_string(),
            })?;

        let Some((axis, polarity)) = question.scoring() else {
            continue;
        };

        let contribution = polarity.sign() * (response - SCALE_MIDPOINT);
        match axis {
            Axis::Learning => scores.learning_score += contribution,
            Axis::Application => scores.application_score += contribution,
        }
    }

    Ok(scores)
}

/// Checks that an answer's payload fits the question it references.
pub(crate) fn validate_answer(question: &Question, answer: &Answer) -> Result<(), ScoringError> {
    let invalid = |reason: String| ScoringError::InvalidResponse {
        question_id: answer.question_id.clone(),
        reason,
    };

    match (question.kind, &answer.value) {
        (QuestionKind::Scale, AnswerValue::Numeric(value)) => {
            if (SCALE_MIN..=SCALE_MAX).contains(value) {
                Ok(())
            } else {
                Err(invalid(format!(
                    "{value} is outside the {SCALE_MIN}-{SCALE_MAX} scale"
                )))
            }
        }
        (QuestionKind::Scale, AnswerValue::Text(_)) => Err(invalid(
            "scale questions require a numeric_response".to_string(),
        )),
        (QuestionKind::Text, AnswerValue::Text(_)) => Ok(()),
        (QuestionKind::Text, AnswerValue::Numeric(_)) => Err(invalid(
            "text questions require a text_response".to_string(),
        )),
    }
}
