use serde::{Deserialize, Serialize};

use super::profile::{profile_for, DetailedProfile};
use super::AxisScores;

/// How far an axis score sits from neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Slight,
    Moderate,
    Strong,
}

impl Strength {
    /// `|score|` of 0..=9 is slight (zero included), 10..=18 moderate, 19 and up strong.
    pub const fn from_score(score: i32) -> Self {
        match score.unsigned_abs() {
            0..=9 => Strength::Slight,
            10..=18 => Strength::Moderate,
            _ => Strength::Strong,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Strength::Slight => "slight",
            Strength::Moderate => "moderate",
            Strength::Strong => "strong",
        }
    }
}

/// Learning axis direction. Zero counts as `Experience`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningDirection {
    Experience,
    Contemplation,
}

impl LearningDirection {
    pub const fn from_score(score: i32) -> Self {
        if score >= 0 {
            LearningDirection::Experience
        } else {
            LearningDirection::Contemplation
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LearningDirection::Experience => "Experience",
            LearningDirection::Contemplation => "Contemplation",
        }
    }
}

/// Application axis direction. Zero counts as `Ideation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationDirection {
    Ideation,
    Production,
}

impl ApplicationDirection {
    pub const fn from_score(score: i32) -> Self {
        if score >= 0 {
            ApplicationDirection::Ideation
        } else {
            ApplicationDirection::Production
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationDirection::Ideation => "Ideation",
            ApplicationDirection::Production => "Production",
        }
    }
}

/// The four quadrants of the learning/application plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OverallStyle {
    Intuitive,
    Conceptual,
    Pragmatic,
    Deductive,
}

impl OverallStyle {
    pub const ALL: [OverallStyle; 4] = [
        OverallStyle::Intuitive,
        OverallStyle::Conceptual,
        OverallStyle::Pragmatic,
        OverallStyle::Deductive,
    ];

    pub const fn from_directions(
        learning: LearningDirection,
        application: ApplicationDirection,
    ) -> Self {
        match (learning, application) {
            (LearningDirection::Experience, ApplicationDirection::Ideation) => {
                OverallStyle::Intuitive
            }
            (LearningDirection::Contemplation, ApplicationDirection::Ideation) => {
                OverallStyle::Deductive
            }
            (LearningDirection::Contemplation, ApplicationDirection::Production) => {
                OverallStyle::Pragmatic
            }
            (LearningDirection::Experience, ApplicationDirection::Production) => {
                OverallStyle::Conceptual
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            OverallStyle::Intuitive => "Intuitive",
            OverallStyle::Conceptual => "Conceptual",
            OverallStyle::Pragmatic => "Pragmatic",
            OverallStyle::Deductive => "Deductive",
        }
    }
}

/// Per-axis direction and strength plus the overall style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleLabels {
    pub learning_direction: LearningDirection,
    pub learning_strength: Strength,
    pub application_direction: ApplicationDirection,
    pub application_strength: Strength,
    pub overall_style: OverallStyle,
}

impl StyleLabels {
    pub const fn from_scores(learning_score: i32, application_score: i32) -> Self {
        let learning_direction = LearningDirection::from_score(learning_score);
        let application_direction = ApplicationDirection::from_score(application_score);

        Self {
            learning_direction,
            learning_strength: Strength::from_score(learning_score),
            application_direction,
            application_strength: Strength::from_score(application_score),
            overall_style: OverallStyle::from_directions(learning_direction, application_direction),
        }
    }
}

/// Result payload shared by the live results endpoint and the admin simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub scores: AxisScores,
    pub labels: StyleLabels,
    pub detailed_profile: DetailedProfile,
}

/// Maps two axis scores to labels and the matching style profile. Total over all inputs.
pub fn classify(learning_score: i32, application_score: i32) -> AssessmentResult {
    let labels = StyleLabels::from_scores(learning_score, application_score);

    AssessmentResult {
        scores: AxisScores::new(learning_score, application_score),
        labels,
        detailed_profile: profile_for(labels.overall_style).clone(),
    }
}
