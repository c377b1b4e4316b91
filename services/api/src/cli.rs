use crate::report::{run_questions, run_score, run_simulate, ScoreArgs, SimulateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use creative_style::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Creative Style Assessment",
    about = "Serve the creative style questionnaire or score results from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Classify a pair of axis scores without storing anything
    Simulate(SimulateArgs),
    /// Score a JSON file of answers and print the resulting profile
    Score(ScoreArgs),
    /// Print the question catalog
    Questions,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Simulate(args) => run_simulate(args),
        Command::Score(args) => run_score(args),
        Command::Questions => run_questions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["creative-style-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn simulate_accepts_negative_scores() {
        let cli = Cli::try_parse_from([
            "creative-style-api",
            "simulate",
            "--learning",
            "-12",
            "--application",
            "30",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Simulate(args)) => {
                assert_eq!(args.learning, -12);
                assert_eq!(args.application, 30);
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn score_requires_an_answers_file() {
        assert!(Cli::try_parse_from(["creative-style-api", "score"]).is_err());
    }
}
