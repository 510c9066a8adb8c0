use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::attributes::{JobRequirements, SeekerAttributes};
use super::weights::ScoringWeights;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    SkillOverlap,
    WorkStyleOverlap,
    PersonalityBonus,
}

impl ComponentKind {
    pub const fn label(self) -> &'static str {
        match self {
            ComponentKind::SkillOverlap => "skill overlap",
            ComponentKind::WorkStyleOverlap => "work style overlap",
            ComponentKind::PersonalityBonus => "personality bonus",
        }
    }
}

/// One explainable slice of a compatibility score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub kind: ComponentKind,
    /// Matched / required, in [0, 1].
    pub ratio: f64,
    pub weight: f64,
    /// `ratio * weight`.
    pub contribution: f64,
    pub matched: usize,
    pub required: usize,
}

impl ScoreComponent {
    fn new(kind: ComponentKind, matched: usize, required: usize, weight: f64) -> Self {
        let ratio = matched as f64 / required.max(1) as f64;
        Self {
            kind,
            ratio,
            weight,
            contribution: ratio * weight,
            matched,
            required,
        }
    }
}

/// Weighted seeker/job fit, kept decomposed so rankings can be explained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub total: f64,
    pub skill_overlap: ScoreComponent,
    pub work_style_overlap: ScoreComponent,
    pub personality_bonus: ScoreComponent,
    pub weights_version: u16,
}

impl CompatibilityScore {
    pub fn components(&self) -> [&ScoreComponent; 3] {
        [
            &self.skill_overlap,
            &self.work_style_overlap,
            &self.personality_bonus,
        ]
    }
}

/// Stateless scorer applying one weight revision to seeker/job pairs.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    weights: ScoringWeights,
}

impl CompatibilityScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, seeker: &SeekerAttributes, job: &JobRequirements) -> CompatibilityScore {
        let skill_overlap = ScoreComponent::new(
            ComponentKind::SkillOverlap,
            overlap(&seeker.skills, &job.required_skills),
            job.required_skills.len(),
            self.weights.skills(),
        );

        let work_style_overlap = ScoreComponent::new(
            ComponentKind::WorkStyleOverlap,
            overlap(&seeker.work_styles, &job.required_work_styles),
            job.required_work_styles.len(),
            self.weights.work_styles(),
        );

        let profile_matches = seeker
            .profile
            .map(|profile| job.preferred_profiles.contains(&profile))
            .unwrap_or(false);
        let personality_bonus = ScoreComponent::new(
            ComponentKind::PersonalityBonus,
            usize::from(profile_matches),
            1,
            self.weights.personality(),
        );

        let total = (skill_overlap.contribution
            + work_style_overlap.contribution
            + personality_bonus.contribution)
            .clamp(0.0, 1.0);

        debug!(
            total,
            skill_ratio = skill_overlap.ratio,
            work_style_ratio = work_style_overlap.ratio,
            profile_matches,
            "scored seeker/job compatibility"
        );

        CompatibilityScore {
            total,
            skill_overlap,
            work_style_overlap,
            personality_bonus,
            weights_version: self.weights.revision().version,
        }
    }
}

fn overlap(offered: &BTreeSet<String>, required: &BTreeSet<String>) -> usize {
    offered.intersection(required).count()
}
