use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use talentfit::config::{self, AppEnvironment, TelemetryConfig};
use talentfit::error::AppError;
use talentfit::lifecycle::EntityType;
use talentfit::quiz::Locale;
use talentfit::telemetry;
use tracing::debug;

use crate::commands;

#[derive(Parser, Debug)]
#[command(
    name = "talentfit",
    about = "Classify personality quizzes, score seeker/job fit, and check status transitions",
    version
)]
pub(crate) struct Cli {
    /// Output format for command results
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print the quiz questions and their choices
    Catalog,
    /// List the personality profiles a quiz can produce
    Profiles(ProfilesArgs),
    /// Validate and classify a set of quiz answers
    Classify(ClassifyArgs),
    /// Score one seeker against one job post
    Score(ScoreArgs),
    /// Rank a CSV roster of candidates against one job post
    Rank(RankArgs),
    /// Check whether a status change is allowed
    Transition(TransitionArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ProfilesArgs {
    /// Language for profile names and descriptions
    #[arg(long, value_enum, default_value_t = LocaleArg::En)]
    pub(crate) locale: LocaleArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LocaleArg {
    En,
    Ja,
}

impl From<LocaleArg> for Locale {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::En => Locale::En,
            LocaleArg::Ja => Locale::Ja,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// JSON file with `[{"question_code": "Q1", "choice_label": "A"}, ...]` ("-" reads stdin)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Language for the returned profile metadata
    #[arg(long, value_enum, default_value_t = LocaleArg::En)]
    pub(crate) locale: LocaleArg,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file describing the seeker ("-" reads stdin)
    #[arg(long)]
    pub(crate) seeker: PathBuf,
    /// JSON file describing the job requirements ("-" reads stdin)
    #[arg(long)]
    pub(crate) job: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// JSON file describing the job requirements
    #[arg(long)]
    pub(crate) job: PathBuf,
    /// CSV roster with columns candidate_id,skills,work_styles,profile
    #[arg(long)]
    pub(crate) candidates: PathBuf,
    /// Only print the top N candidates
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct TransitionArgs {
    /// Entity whose status changes (job-post or application)
    #[arg(long, value_parser = parse_entity)]
    pub(crate) entity: EntityType,
    /// Current status, e.g. APPLIED
    #[arg(long)]
    pub(crate) from: String,
    /// Requested status, e.g. IN_REVIEW
    #[arg(long)]
    pub(crate) to: String,
}

fn parse_entity(raw: &str) -> Result<EntityType, String> {
    EntityType::parse(raw).ok_or_else(|| format!("'{raw}' is not job-post or application"))
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    config::load_dotenv();
    telemetry::init(&TelemetryConfig::load())?;

    debug!(environment = ?AppEnvironment::load(), "telemetry initialised");

    // Scoring and lifecycle settings are loaded by the commands that read them.
    commands::dispatch(cli)
}
