use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::AxisScores;

/// Identifier wrapper for questionnaire submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload of a single answer; which variant is valid depends on the question kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Numeric(i32),
    Text(String),
}

/// A respondent's answer to one catalog question.
///
/// On the wire exactly one of `numeric_response` / `text_response` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AnswerPayload", into = "AnswerPayload")]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
}

impl Answer {
    pub fn numeric(question_id: impl Into<String>, response: i32) -> Self {
        Self {
            question_id: question_id.into(),
            value: AnswerValue::Numeric(response),
        }
    }

    pub fn text(question_id: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: AnswerValue::Text(response.into()),
        }
    }

    pub fn numeric_response(&self) -> Option<i32> {
        match self.value {
            AnswerValue::Numeric(value) => Some(value),
            AnswerValue::Text(_) => None,
        }
    }

    pub fn text_response(&self) -> Option<&str> {
        match &self.value {
            AnswerValue::Text(value) => Some(value),
            AnswerValue::Numeric(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AnswerPayload {
    question_id: String,
    #[serde(default)]
    numeric_response: Option<i32>,
    #[serde(default)]
    text_response: Option<String>,
}

impl TryFrom<AnswerPayload> for Answer {
    type Error = String;

    fn try_from(payload: AnswerPayload) -> Result<Self, Self::Error> {
        let value = match (payload.numeric_response, payload.text_response) {
            (Some(numeric), None) => AnswerValue::Numeric(numeric),
            (None, Some(text)) => AnswerValue::Text(text),
            (Some(_), Some(_)) => {
                return Err(format!(
                    "answer to {} carries both numeric_response and text_response",
                    payload.question_id
                ))
            }
            (None, None) => {
                return Err(format!(
                    "answer to {} carries neither numeric_response nor text_response",
                    payload.question_id
                ))
            }
        };

        Ok(Answer {
            question_id: payload.question_id,
            value,
        })
    }
}

impl From<Answer> for AnswerPayload {
    fn from(answer: Answer) -> Self {
        let (numeric_response, text_response) = match answer.value {
            AnswerValue::Numeric(value) => (Some(value), None),
            AnswerValue::Text(value) => (None, Some(value)),
        };
        Self {
            question_id: answer.question_id,
            numeric_response,
            text_response,
        }
    }
}

/// Contact details captured when a submission is started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Respondent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Lifecycle of a submission. `Open -> Complete` happens exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Open,
    Complete,
}

impl SubmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Open => "open",
            SubmissionStatus::Complete => "complete",
        }
    }

    pub const fn is_complete(self) -> bool {
        matches!(self, SubmissionStatus::Complete)
    }
}

/// A respondent's run through the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub submission_id: SubmissionId,
    pub respondent: Respondent,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    answers: BTreeMap<String, Answer>,
    pub scores: Option<AxisScores>,
}

impl Submission {
    pub fn open(respondent: Respondent, submitted_at: DateTime<Utc>) -> Self {
        Self {
            submission_id: SubmissionId::generate(),
            respondent,
            submitted_at,
            status: SubmissionStatus::Open,
            answers: BTreeMap::new(),
            scores: None,
        }
    }

    /// Stores an answer, replacing any earlier answer to the same question.
    pub fn record(&mut self, answer: Answer) {
        self.answers.insert(answer.question_id.clone(), answer);
    }

    pub fn answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }

    pub fn answer_list(&self) -> Vec<Answer> {
        self.answers.values().cloned().collect()
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }
}
