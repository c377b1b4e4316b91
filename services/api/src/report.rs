use clap::Args;
use creative_style::assessment::{
    score_answers, simulate, Answer, AssessmentResult, QuestionCatalog, QuestionKind,
};
use creative_style::error::AppError;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// Learning axis score (-45..=45)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) learning: i64,
    /// Application axis score (-45..=45)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) application: i64,
    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON array of answers: `[{"question_id": "Q1", "numeric_response": 5}, ...]`
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let result = simulate(args.learning, args.application)?;
    print_result(&result, args.json)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.answers)?;
    let answers: Vec<Answer> = serde_json::from_str(&raw)?;
    let result = score_answers(&answers, QuestionCatalog::standard())?;
    print_result(&result, args.json)
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    print!("{}", render_catalog(QuestionCatalog::standard()));
    Ok(())
}

fn print_result(result: &AssessmentResult, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", render_result(result));
    }
    Ok(())
}

pub(crate) fn render_result(result: &AssessmentResult) -> String {
    let labels = &result.labels;
    let profile = &result.detailed_profile;
    let mut out = String::new();

    let _ = writeln!(out, "Creative style: {}", labels.overall_style.label());
    let _ = writeln!(
        out,
        "  Learning:    {:>3}  {} {}",
        result.scores.learning_score,
        labels.learning_strength.label(),
        labels.learning_direction.label()
    );
    let _ = writeln!(
        out,
        "  Application: {:>3}  {} {}",
        result.scores.application_score,
        labels.application_strength.label(),
        labels.application_direction.label()
    );

    let _ = writeln!(out, "\n{}", profile.style_description);
    let _ = writeln!(out, "\nHow you learn: {}", profile.preference_description);
    let _ = writeln!(
        out,
        "How you apply ideas: {}",
        profile.application_preference_description
    );

    let _ = writeln!(out, "\nStrengths:");
    for strength in &profile.strengths {
        let _ = writeln!(out, "  - {strength}");
    }
    let _ = writeln!(out, "Watch-outs:");
    for weakness in &profile.weaknesses {
        let _ = writeln!(out, "  - {weakness}");
    }

    let relationships = &profile.working_relationships;
    let _ = writeln!(out, "\nWorking with others:");
    let _ = writeln!(out, "  Intuitives:  {}", relationships.intuitives);
    let _ = writeln!(out, "  Conceptuals: {}", relationships.conceptuals);
    let _ = writeln!(out, "  Pragmatists: {}", relationships.pragmatists);
    let _ = writeln!(out, "  Deductives:  {}", relationships.deductives);
    out
}

pub(crate) fn render_catalog(catalog: &QuestionCatalog) -> String {
    let mut out = String::new();
    for question in catalog.questions() {
        let tag = match (question.kind, question.scoring()) {
            (QuestionKind::Scale, Some((axis, polarity))) if polarity.sign() < 0 => {
                format!("{} (reverse)", axis.label())
            }
            (QuestionKind::Scale, Some((axis, _))) => axis.label().to_string(),
            _ => "open text".to_string(),
        };
        let _ = writeln!(out, "{:<4} [{}] {}", question.id, tag, question.prompt);
    }
    out
}
