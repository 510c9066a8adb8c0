use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::attributes::{JobRequirements, SeekerAttributes};
use super::scorer::{CompatibilityScore, CompatibilityScorer};

/// Seeker entered into a ranking, keyed by the caller's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub candidate_id: String,
    #[serde(flatten)]
    pub attributes: SeekerAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub rank: usize,
    pub candidate_id: String,
    pub score: CompatibilityScore,
}

/// Best-first ordering: higher total, then higher skill overlap.
pub fn compare_scores(left: &CompatibilityScore, right: &CompatibilityScore) -> Ordering {
    right
        .total
        .total_cmp(&left.total)
        .then_with(|| {
            right
                .skill_overlap
                .ratio
                .total_cmp(&left.skill_overlap.ratio)
        })
}

/// Score every candidate against one job and order them best-first.
///
/// Candidates with identical scores are ordered by identifier so the output never
/// depends on input order.
pub fn rank_candidates<'a, I>(
    scorer: &CompatibilityScorer,
    job: &JobRequirements,
    candidates: I,
) -> Vec<RankedCandidate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut scored: Vec<(&str, CompatibilityScore)> = candidates
        .into_iter()
        .map(|candidate| {
            (
                candidate.candidate_id.as_str(),
                scorer.score(&candidate.attributes, job),
            )
        })
        .collect();

    scored.sort_by(|(left_id, left), (right_id, right)| {
        compare_scores(left, right).then_with(|| left_id.cmp(right_id))
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (candidate_id, score))| RankedCandidate {
            rank: index + 1,
            candidate_id: candidate_id.to_string(),
            score,
        })
        .collect()
}
