//! Personality quiz: catalog, answer validation, tallying, and profile classification.

mod catalog;
mod classifier;
mod profile;
mod tally;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, Choice, ChoiceLabel, Dimension, Question, QuestionCatalog};
pub use classifier::{
    Classification, ClassificationRule, ProfileClassifier, RuleCondition, DECISIVE_THRESHOLD,
    FALLBACK_RULE,
};
pub use profile::{Locale, PersonalityProfile, ProfileView};
pub use tally::ScoreTally;
pub use validation::{
    QuizError, QuizResponse, ResponseValidator, ValidatedAnswer, ValidatedResponses,
};

use serde::Serialize;
use tracing::debug;

/// Outcome of a classified quiz, ready to be stored against the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    pub profile: PersonalityProfile,
    pub rule: &'static str,
    pub tally: ScoreTally,
}

/// Facade running validation, tallying, and classification in one call.
#[derive(Debug, Clone, Default)]
pub struct PersonalityQuiz {
    catalog: QuestionCatalog,
    classifier: ProfileClassifier,
}

impl PersonalityQuiz {
    pub fn new(catalog: QuestionCatalog, classifier: ProfileClassifier) -> Self {
        Self {
            catalog,
            classifier,
        }
    }

    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard(), ProfileClassifier::standard())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn classifier(&self) -> &ProfileClassifier {
        &self.classifier
    }

    pub fn validate(&self, responses: &[QuizResponse]) -> Result<ValidatedResponses, QuizError> {
        ResponseValidator::new(&self.catalog).validate(responses)
    }

    pub fn classify(&self, responses: &[QuizResponse]) -> Result<QuizOutcome, QuizError> {
        let validated = self.validate(responses)?;
        let tally = ScoreTally::from_responses(&validated);
        let classification = self.classifier.classify(&tally);

        debug!(
            a_count = tally.a_count(),
            b_count = tally.b_count(),
            rule = classification.rule,
            profile = classification.profile.id(),
            "classified personality quiz"
        );

        Ok(QuizOutcome {
            profile: classification.profile,
            rule: classification.rule,
            tally,
        })
    }
}
