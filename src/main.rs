use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use user_scoring::config::AppConfig;
use user_scoring::error::AppError;
use user_scoring::scoring::report::{render_breakdowns, render_results};
use user_scoring::scoring::sample::demo_batch;
use user_scoring::scoring::{
    intake, score_breakdown, validate_input, ScoreReport, ScoringEngine, TracingSink, UserInput,
};
use user_scoring::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "user-scoring",
    about = "Score and categorize user engagement records",
    version
)]
struct Cli {
    /// Override the configured log level or filter (e.g. `debug`)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a batch of users and print results with summary statistics (default command)
    Score(ScoreArgs),
    /// Show the stage-by-stage score breakdown for each valid user
    Explain(InputArgs),
}

#[derive(Args, Debug, Default)]
struct InputArgs {
    /// JSON array or CSV file of user records (defaults to the built-in demo batch)
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct ScoreArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }
    telemetry::init(&config)?;
    info!(?config.environment, "user scoring started");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Score(ScoreArgs::default()));

    match command {
        Command::Score(args) => run_score(args),
        Command::Explain(args) => run_explain(args),
    }
}

fn load_inputs(args: InputArgs) -> Result<Vec<UserInput>, AppError> {
    match args.input {
        Some(path) => {
            info!(path = %path.display(), "loading user batch");
            Ok(intake::load_path(path)?)
        }
        None => Ok(demo_batch()),
    }
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let inputs = load_inputs(args.input)?;
    let outcome = ScoringEngine::default().run(&inputs, &TracingSink);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => render_results(&mut out, &outcome.results)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &ScoreReport::new(&outcome))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run_explain(args: InputArgs) -> Result<(), AppError> {
    let inputs = load_inputs(args)?;
    let engine = ScoringEngine::default();
    let sink = TracingSink;

    let breakdowns: Vec<_> = inputs
        .iter()
        .enumerate()
        .filter_map(|(index, input)| match validate_input(input, &sink) {
            Ok(record) => Some(score_breakdown(&record, engine.rubric(), &sink)),
            Err(err) => {
                warn!(index, %err, "skipping user");
                None
            }
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_breakdowns(&mut out, &breakdowns)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_scoring_the_demo_batch() {
        let cli = Cli::try_parse_from(["user-scoring"]).expect("parses");
        assert!(cli.command.is_none());
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn parses_score_arguments() {
        let cli = Cli::try_parse_from([
            "user-scoring",
            "score",
            "--input",
            "users.csv",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.input.input, Some(PathBuf::from("users.csv")));
            }
            other => panic!("expected score command, got {other:?}"),
        }
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["user-scoring", "score", "--format", "xml"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
