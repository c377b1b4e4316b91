use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Lowest and highest points of the Likert scale used by every scale question.
pub const SCALE_MIN: i32 = 1;
pub const SCALE_MAX: i32 = 7;
/// Neutral midpoint subtracted from each response before it is summed.
pub const SCALE_MIDPOINT: i32 = 4;

/// Scoring dimension a scale question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Learning,
    Application,
}

impl Axis {
    pub const fn label(self) -> &'static str {
        match self {
            Axis::Learning => "Learning",
            Axis::Application => "Application",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether agreement pushes the axis positive (`Normal`) or negative (`Reverse`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Normal,
    Reverse,
}

impl Polarity {
    pub const fn sign(self) -> i32 {
        match self {
            Polarity::Normal => 1,
            Polarity::Reverse => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Scale,
    Text,
}

/// One catalog entry. Text questions carry neither axis nor polarity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
}

impl Question {
    const fn scale(id: &'static str, axis: Axis, polarity: Polarity, prompt: &'static str) -> Self {
        Self {
            id,
            prompt,
            kind: QuestionKind::Scale,
            axis: Some(axis),
            polarity: Some(polarity),
        }
    }

    const fn text(id: &'static str, prompt: &'static str) -> Self {
        Self {
            id,
            prompt,
            kind: QuestionKind::Text,
            axis: None,
            polarity: None,
        }
    }

    pub fn is_scale(&self) -> bool {
        self.kind == QuestionKind::Scale
    }

    /// Axis and polarity for questions that take part in scoring.
    pub fn scoring(&self) -> Option<(Axis, Polarity)> {
        match (self.kind, self.axis, self.polarity) {
            (QuestionKind::Scale, Some(axis), Some(polarity)) => Some((axis, polarity)),
            _ => None,
        }
    }
}

/// Ordered question list presented to every respondent.
///
/// The prompt wording and the axis/polarity key in [`QuestionCatalog::standard`] are
/// placeholders. Replace them with the licensed instrument's key before scoring real people.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The fixed questionnaire, built on first use and shared for the life of the process.
    pub fn standard() -> &'static QuestionCatalog {
        static CATALOG: OnceLock<QuestionCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| QuestionCatalog::new(standard_questions()))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn scale_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|question| question.is_scale())
    }

    pub fn text_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|question| !question.is_scale())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn standard_questions() -> Vec<Question> {
    use Axis::{Application, Learning};
    use Polarity::{Normal, Reverse};

    vec![
        Question::scale("Q1", Learning, Normal, "I learn best by trying something out before reading about it."),
        Question::scale("Q2", Application, Normal, "I enjoy generating many possible ideas before choosing one."),
        Question::scale("Q3", Learning, Normal, "Hands-on practice teaches me more than a lecture does."),
        Question::scale("Q4", Application, Normal, "I get energized by imagining what does not exist yet."),
        Question::scale("Q5", Learning, Reverse, "I prefer to understand the theory fully before I begin a task."),
        Question::scale("Q6", Application, Reverse, "I feel most satisfied when a project is finished and delivered."),
        Question::scale("Q7", Learning, Normal, "I would rather experiment than plan when facing a new tool."),
        Question::scale("Q8", Application, Normal, "Brainstorming sessions are among my favorite parts of a project."),
        Question::scale("Q9", Learning, Normal, "Mistakes made while doing something are how I learn fastest."),
        Question::scale("Q10", Application, Normal, "I often connect ideas from unrelated fields."),
        Question::scale("Q11", Learning, Reverse, "I like to reflect quietly on new information before acting on it."),
        Question::scale("Q12", Application, Reverse, "I prefer refining an existing solution over inventing a new one."),
        Question::scale("Q13", Learning, Normal, "I remember things better after I have physically done them."),
        Question::scale("Q14", Application, Normal, "I am comfortable exploring ideas that may never be used."),
        Question::scale("Q15", Learning, Normal, "I pick up new skills by watching and then immediately copying others."),
        Question::scale("Q16", Application, Normal, "I would rather start something new than complete something old."),
        Question::scale("Q17", Learning, Reverse, "Reading and research are my preferred ways to learn."),
        Question::scale("Q18", Application, Reverse, "I enjoy turning a rough plan into a polished result."),
        Question::scale("Q19", Learning, Normal, "I prefer workshops to textbooks."),
        Question::scale("Q20", Application, Normal, "I frequently question how things are usually done."),
        Question::scale("Q21", Learning, Normal, "I learn by building prototypes and seeing what happens."),
        Question::scale("Q22", Application, Normal, "Open-ended problems excite me more than well-defined ones."),
        Question::scale("Q23", Learning, Reverse, "I build mental models of a problem before touching it."),
        Question::scale("Q24", Application, Reverse, "Meeting deadlines with dependable work matters most to me."),
        Question::scale("Q25", Learning, Normal, "I would rather learn a game by playing it than by reading the rules."),
        Question::scale("Q26", Application, Normal, "I often see possibilities that others overlook."),
        Question::scale("Q27", Learning, Normal, "Real-world examples help me more than abstract explanations."),
        Question::scale("Q28", Application, Normal, "I like to play with concepts without a fixed goal in mind."),
        Question::scale("Q29", Learning, Reverse, "I need to think a concept through completely before I trust it."),
        Question::scale("Q30", Application, Reverse, "I take pride in executing a plan exactly as designed."),
        Question::text("Q31", "List as many different uses for a brick as you can think of."),
        Question::text("Q32", "Describe a better way to get a stack of dirty dishes clean."),
        Question::text("Q33", "Imagine this mug could do one thing it cannot do today. What would it be, and why?"),
        Question::text("Q34", "Looking at this crowd, tell the story of how everyone came to be here."),
    ]
}
