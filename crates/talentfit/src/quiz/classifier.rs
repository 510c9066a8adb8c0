use serde::Serialize;

use super::catalog::{ChoiceLabel, Dimension};
use super::profile::PersonalityProfile;
use super::tally::ScoreTally;

/// Number of matching answers that makes a quiz "decisive" in the standard rule table.
pub const DECISIVE_THRESHOLD: usize = 4;

/// Rule name reported when no rule in the table matched.
pub const FALLBACK_RULE: &str = "fallback";

/// Predicate evaluated against a tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleCondition {
    /// At least `threshold` answers carry `label`.
    AtLeast { label: ChoiceLabel, threshold: usize },
    /// Every listed dimension was answered with the paired label.
    Combination(Vec<(Dimension, ChoiceLabel)>),
}

impl RuleCondition {
    fn holds(&self, tally: &ScoreTally) -> bool {
        match self {
            RuleCondition::AtLeast { label, threshold } => tally.count(*label) >= *threshold,
            RuleCondition::Combination(pattern) => {
                !pattern.is_empty()
                    && pattern
                        .iter()
                        .all(|(dimension, label)| tally.label_for(*dimension) == Some(*label))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRule {
    pub name: &'static str,
    pub condition: RuleCondition,
    pub outcome: PersonalityProfile,
}

impl ClassificationRule {
    pub fn matches(&self, tally: &ScoreTally) -> bool {
        self.condition.holds(tally)
    }
}

/// Result of classifying a tally, naming the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub profile: PersonalityProfile,
    pub rule: &'static str,
}

/// Ordered rule table; the first matching rule wins and the fallback covers the rest.
#[derive(Debug, Clone)]
pub struct ProfileClassifier {
    rules: Vec<ClassificationRule>,
    fallback: PersonalityProfile,
}

impl ProfileClassifier {
    pub fn new(rules: Vec<ClassificationRule>, fallback: PersonalityProfile) -> Self {
        Self { rules, fallback }
    }

    pub fn standard() -> Self {
        Self::new(
            vec![
                ClassificationRule {
                    name: "decisive_a",
                    condition: RuleCondition::AtLeast {
                        label: ChoiceLabel::A,
                        threshold: DECISIVE_THRESHOLD,
                    },
                    outcome: PersonalityProfile::ActionOriented,
                },
                ClassificationRule {
                    name: "decisive_b",
                    condition: RuleCondition::AtLeast {
                        label: ChoiceLabel::B,
                        threshold: DECISIVE_THRESHOLD,
                    },
                    outcome: PersonalityProfile::SteadySpecialist,
                },
                // Checked before independent_solver; both can hold on a 3/3 split.
                ClassificationRule {
                    name: "empathetic_coordinator",
                    condition: RuleCondition::Combination(vec![
                        (Dimension::Collaboration, ChoiceLabel::B),
                        (Dimension::Interaction, ChoiceLabel::B),
                    ]),
                    outcome: PersonalityProfile::EmpatheticCoordinator,
                },
                ClassificationRule {
                    name: "independent_solver",
                    condition: RuleCondition::Combination(vec![
                        (Dimension::Autonomy, ChoiceLabel::A),
                        (Dimension::ProblemSolving, ChoiceLabel::A),
                    ]),
                    outcome: PersonalityProfile::IndependentSolver,
                },
            ],
            PersonalityProfile::FlexibleAllRounder,
        )
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    pub fn fallback(&self) -> PersonalityProfile {
        self.fallback
    }

    pub fn classify(&self, tally: &ScoreTally) -> Classification {
        self.rules
            .iter()
            .find(|rule| rule.matches(tally))
            .map(|rule| Classification {
                profile: rule.outcome,
                rule: rule.name,
            })
            .unwrap_or(Classification {
                profile: self.fallback,
                rule: FALLBACK_RULE,
            })
    }
}

impl Default for ProfileClassifier {
    fn default() -> Self {
        Self::standard()
    }
}
