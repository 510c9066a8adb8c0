use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const SUM_TOLERANCE: f64 = 1e-6;

/// Identifies which weight set produced a score. Scores computed under different
/// revisions are not comparable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightsRevision {
    pub version: u16,
    pub label: String,
    pub effective_from: NaiveDate,
}

/// Component weights for compatibility scoring. Only constructible through validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringWeights {
    skills: f64,
    work_styles: f64,
    personality: f64,
    revision: WeightsRevision,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightsError {
    #[error("{component} weight must be a finite, non-negative number (found {value})")]
    InvalidComponent { component: &'static str, value: f64 },
    #[error("weights must sum to 1.0 (found {sum:.6})")]
    InvalidSum { sum: f64 },
}

impl ScoringWeights {
    pub fn new(
        skills: f64,
        work_styles: f64,
        personality: f64,
        revision: WeightsRevision,
    ) -> Result<Self, WeightsError> {
        for (component, value) in [
            ("skill", skills),
            ("work style", work_styles),
            ("personality", personality),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::InvalidComponent { component, value });
            }
        }

        let sum = skills + work_styles + personality;
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightsError::InvalidSum { sum });
        }

        Ok(Self {
            skills,
            work_styles,
            personality,
            revision,
        })
    }

    /// Revision 1: skills 0.5, work styles 0.3, personality 0.2, effective 2025-01-01.
    pub fn v1() -> Self {
        Self {
            skills: 0.5,
            work_styles: 0.3,
            personality: 0.2,
            revision: WeightsRevision {
                version: 1,
                label: "v1".to_string(),
                effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            },
        }
    }

    pub fn skills(&self) -> f64 {
        self.skills
    }

    pub fn work_styles(&self) -> f64 {
        self.work_styles
    }

    pub fn personality(&self) -> f64 {
        self.personality
    }

    pub fn revision(&self) -> &WeightsRevision {
        &self.revision
    }

    pub fn sum(&self) -> f64 {
        self.skills + self.work_styles + self.personality
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::v1()
    }
}
