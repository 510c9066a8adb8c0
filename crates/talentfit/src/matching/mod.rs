//! Seeker/job compatibility scoring and candidate ranking.

mod attributes;
mod import;
mod ranking;
mod scorer;
mod weights;

pub use attributes::{JobRequirements, SeekerAttributes};
pub use import::{CandidateRoster, ImportError};
pub use ranking::{compare_scores, rank_candidates, Candidate, RankedCandidate};
pub use scorer::{ComponentKind, CompatibilityScore, CompatibilityScorer, ScoreComponent};
pub use weights::{ScoringWeights, WeightsError, WeightsRevision};
