use crate::rubric_cli::{run_rubric_evaluate, run_rubric_show, RubricEvaluateArgs, RubricShowArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use coach_journal::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Coach Journal",
    about = "Serve the coach journal API or inspect skill rubrics from the command line",
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
    /// Inspect a rubric or turn scores into coaching tips
    Rubric {
        #[command(subcommand)]
        command: RubricCommand,
    },
}

#[derive(Subcommand, Debug)]
enum RubricCommand {
    /// Print the recommendations produced for a set of scores
    Evaluate(RubricEvaluateArgs),
    /// Print every category and rule in the rubric
    Show(RubricShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured rubric JSON file
    #[arg(long)]
    pub(crate) rubric: Option<PathBuf>,
    /// JSON array of players used to seed the roster
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Rubric {
            command: RubricCommand::Evaluate(args),
        } => run_rubric_evaluate(args),
        Command::Rubric {
            command: RubricCommand::Show(args),
        } => run_rubric_show(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["coach-journal-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_rubric_evaluate_scores() {
        let cli = Cli::try_parse_from([
            "coach-journal-api",
            "rubric",
            "evaluate",
            "--score",
            "batting=2",
            "--score",
            "running=8",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Rubric {
                command: RubricCommand::Evaluate(args),
            }) => {
                assert_eq!(args.scores.len(), 2);
                assert_eq!(args.scores[0], ("batting".to_string(), 2));
                assert!(args.rubric.is_none());
            }
            other => panic!("expected rubric evaluate, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_score() {
        let result = Cli::try_parse_from([
            "coach-journal-api",
            "rubric",
            "evaluate",
            "--score",
            "batting",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_serve_overrides() {
        let cli = Cli::try_parse_from([
            "coach-journal-api",
            "serve",
            "--port",
            "8080",
            "--rubric",
            "rubric.json",
            "--roster",
            "players.json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.rubric, Some(PathBuf::from("rubric.json")));
                assert_eq!(args.roster, Some(PathBuf::from("players.json")));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }
}
