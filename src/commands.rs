use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use talentfit::config::{load_lifecycle_policy, ScoringConfig};
use talentfit::error::AppError;
use talentfit::lifecycle::{LifecycleGuard, TransitionRequest};
use talentfit::matching::{
    rank_candidates, CandidateRoster, CompatibilityScore, CompatibilityScorer, JobRequirements,
    RankedCandidate, SeekerAttributes, WeightsRevision,
};
use talentfit::quiz::{Locale, PersonalityProfile, PersonalityQuiz, ProfileView, QuizResponse};
use tracing::info;

use crate::cli::{
    ClassifyArgs, Cli, Command, OutputFormat, ProfilesArgs, RankArgs, ScoreArgs, TransitionArgs,
};
use crate::render;

const STDIN_PATH: &str = "-";

#[derive(Debug, Serialize)]
pub(crate) struct ClassifyOutput {
    pub(crate) profile: ProfileView,
    pub(crate) rule: &'static str,
    pub(crate) a_count: usize,
    pub(crate) b_count: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreOutput {
    pub(crate) weights: WeightsRevision,
    pub(crate) score: CompatibilityScore,
}

#[derive(Debug, Serialize)]
pub(crate) struct RankOutput {
    pub(crate) weights: WeightsRevision,
    pub(crate) evaluated: usize,
    pub(crate) ranking: Vec<RankedCandidate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TransitionOutput {
    pub(crate) entity: &'static str,
    pub(crate) from: &'static str,
    pub(crate) to: &'static str,
}

pub(crate) fn dispatch(cli: Cli) -> Result<(), AppError> {
    let format = cli.format;
    match cli.command {
        Command::Catalog => {
            let quiz = PersonalityQuiz::standard();
            match format {
                OutputFormat::Json => emit_json(quiz.catalog().questions()),
                OutputFormat::Text => {
                    render::catalog(quiz.catalog());
                    Ok(())
                }
            }
        }
        Command::Profiles(args) => profiles(args, format),
        Command::Classify(args) => classify(args, format),
        Command::Score(args) => score(args, format),
        Command::Rank(args) => rank(args, format),
        Command::Transition(args) => transition(args, format),
    }
}

fn profiles(args: ProfilesArgs, format: OutputFormat) -> Result<(), AppError> {
    let locale = Locale::from(args.locale);
    let views: Vec<ProfileView> = PersonalityProfile::ordered()
        .into_iter()
        .map(|profile| profile.view(locale))
        .collect();

    match format {
        OutputFormat::Json => emit_json(&views),
        OutputFormat::Text => {
            render::profiles(&views);
            Ok(())
        }
    }
}

fn classify(args: ClassifyArgs, format: OutputFormat) -> Result<(), AppError> {
    let responses: Vec<QuizResponse> = read_json(&args.answers)?;
    let outcome = PersonalityQuiz::standard().classify(&responses)?;

    info!(
        profile = outcome.profile.id(),
        rule = outcome.rule,
        "quiz classified"
    );

    let output = ClassifyOutput {
        profile: outcome.profile.view(Locale::from(args.locale)),
        rule: outcome.rule,
        a_count: outcome.tally.a_count(),
        b_count: outcome.tally.b_count(),
    };

    match format {
        OutputFormat::Json => emit_json(&output),
        OutputFormat::Text => {
            render::classification(&output);
            Ok(())
        }
    }
}

fn score(args: ScoreArgs, format: OutputFormat) -> Result<(), AppError> {
    if args.seeker.as_os_str() == STDIN_PATH && args.job.as_os_str() == STDIN_PATH {
        return Err(AppError::Usage(
            "only one of --seeker and --job can read from stdin".to_string(),
        ));
    }

    let scoring = ScoringConfig::load()?;
    let seeker: SeekerAttributes = read_json(&args.seeker)?;
    let job: JobRequirements = read_json(&args.job)?;
    let scorer = CompatibilityScorer::new(scoring.weights);

    let output = ScoreOutput {
        weights: scorer.weights().revision().clone(),
        score: scorer.score(&seeker, &job),
    };

    match format {
        OutputFormat::Json => emit_json(&output),
        OutputFormat::Text => {
            render::score(&output);
            Ok(())
        }
    }
}

fn rank(args: RankArgs, format: OutputFormat) -> Result<(), AppError> {
    let scoring = ScoringConfig::load()?;
    let job: JobRequirements = read_json(&args.job)?;
    let candidates = CandidateRoster::from_path(&args.candidates)?;
    let scorer = CompatibilityScorer::new(scoring.weights);

    let mut ranking = rank_candidates(&scorer, &job, &candidates);
    if let Some(limit) = args.limit {
        ranking.truncate(limit);
    }

    info!(
        evaluated = candidates.len(),
        returned = ranking.len(),
        "candidates ranked"
    );

    let output = RankOutput {
        weights: scorer.weights().revision().clone(),
        evaluated: candidates.len(),
        ranking,
    };

    match format {
        OutputFormat::Json => emit_json(&output),
        OutputFormat::Text => {
            render::ranking(&output);
            Ok(())
        }
    }
}

fn transition(args: TransitionArgs, format: OutputFormat) -> Result<(), AppError> {
    let guard = LifecycleGuard::new(load_lifecycle_policy()?);
    let request = TransitionRequest {
        entity_type: args.entity,
        current_state: args.from,
        requested_state: args.to,
    };

    let accepted = guard.check(&request)?;
    let output = TransitionOutput {
        entity: request.entity_type.label(),
        from: accepted.from.label(),
        to: accepted.to.label(),
    };

    match format {
        OutputFormat::Json => emit_json(&output),
        OutputFormat::Text => {
            render::transition(&output);
            Ok(())
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
