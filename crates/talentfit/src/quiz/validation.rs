use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::catalog::{ChoiceLabel, Dimension, QuestionCatalog};

/// A single answer exactly as submitted by the quiz form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub question_code: String,
    pub choice_label: String,
}

impl QuizResponse {
    pub fn new(question_code: impl Into<String>, choice_label: impl Into<String>) -> Self {
        Self {
            question_code: question_code.into(),
            choice_label: choice_label.into(),
        }
    }
}

/// Validation failures for a submitted answer set. All of them are fixed by re-prompting the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("quiz is incomplete, missing answers for: {}", .missing.join(", "))]
    IncompleteResponse { missing: Vec<String> },
    #[error("response references unknown question {code}")]
    UnknownQuestion { code: String },
    #[error("question {code} was answered more than once")]
    DuplicateResponse { code: String },
    #[error("'{label}' is not a valid choice for question {code}")]
    InvalidChoice { code: String, label: String },
}

/// Validated answer for one catalog question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidatedAnswer {
    pub question_code: &'static str,
    pub dimension: Dimension,
    pub label: ChoiceLabel,
}

/// Complete answer set in canonical catalog order.
///
/// Only [`ResponseValidator::validate`] can produce one, so downstream steps never need
/// to re-check completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedResponses {
    answers: Vec<ValidatedAnswer>,
}

impl ValidatedResponses {
    pub fn answers(&self) -> &[ValidatedAnswer] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Stateless checker binding answer sets to a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ResponseValidator<'a> {
    catalog: &'a QuestionCatalog,
}

impl<'a> ResponseValidator<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    /// Check a response set for unknown codes, duplicates, bad labels, and gaps.
    ///
    /// Responses are inspected in submission order and the first malformed one is
    /// reported; completeness is only checked once every submitted response is
    /// individually well formed.
    pub fn validate(&self, responses: &[QuizResponse]) -> Result<ValidatedResponses, QuizError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(responses.len());
        let mut labels = Vec::with_capacity(responses.len());

        for response in responses {
            let code = response.question_code.trim();
            let question = self
                .catalog
                .question(code)
                .ok_or_else(|| QuizError::UnknownQuestion {
                    code: code.to_string(),
                })?;

            if !seen.insert(question.code) {
                return Err(QuizError::DuplicateResponse {
                    code: question.code.to_string(),
                });
            }

            let label = ChoiceLabel::parse(&response.choice_label).ok_or_else(|| {
                QuizError::InvalidChoice {
                    code: question.code.to_string(),
                    label: response.choice_label.clone(),
                }
            })?;

            labels.push((question.code, label));
        }

        let missing: Vec<String> = self
            .catalog
            .codes()
            .filter(|code| !seen.contains(code))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(QuizError::IncompleteResponse { missing });
        }

        let answers = self
            .catalog
            .questions()
            .iter()
            .filter_map(|question| {
                labels
                    .iter()
                    .find(|(code, _)| *code == question.code)
                    .map(|(_, label)| ValidatedAnswer {
                        question_code: question.code,
                        dimension: question.dimension,
                        label: *label,
                    })
            })
            .collect();

        Ok(ValidatedResponses { answers })
    }
}
