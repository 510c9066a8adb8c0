use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Axis of personality measurement. Each one is realised by exactly one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Pace,
    Decision,
    Collaboration,
    Interaction,
    Autonomy,
    ProblemSolving,
}

impl Dimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Pace,
            Self::Decision,
            Self::Collaboration,
            Self::Interaction,
            Self::Autonomy,
            Self::ProblemSolving,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pace => "Working pace",
            Self::Decision => "Decision making",
            Self::Collaboration => "Collaboration",
            Self::Interaction => "People interaction",
            Self::Autonomy => "Autonomy",
            Self::ProblemSolving => "Problem solving",
        }
    }
}

/// One of the two labelled answers every question offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChoiceLabel {
    A,
    B,
}

impl ChoiceLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            ChoiceLabel::A => "A",
            ChoiceLabel::B => "B",
        }
    }

    /// Strict parse of a submitted label; surrounding whitespace is ignored, case is not.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "A" => Some(ChoiceLabel::A),
            "B" => Some(ChoiceLabel::B),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub label: ChoiceLabel,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub code: &'static str,
    pub dimension: Dimension,
    pub prompt: &'static str,
    pub choices: [Choice; 2],
}

impl Question {
    pub fn choice(&self, label: ChoiceLabel) -> &Choice {
        match label {
            ChoiceLabel::A => &self.choices[0],
            ChoiceLabel::B => &self.choices[1],
        }
    }
}

/// Raised when a custom catalog would break the one-question-per-dimension shape.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog must contain at least one question")]
    Empty,
    #[error("question code {0} is defined more than once")]
    DuplicateCode(String),
    #[error("dimension {0:?} is covered by more than one question")]
    DuplicateDimension(Dimension),
}

/// Immutable definition of the quiz, kept in canonical question order.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut codes = HashSet::new();
        let mut dimensions = HashSet::new();
        for question in &questions {
            if !codes.insert(question.code) {
                return Err(CatalogError::DuplicateCode(question.code.to_string()));
            }
            if !dimensions.insert(question.dimension) {
                return Err(CatalogError::DuplicateDimension(question.dimension));
            }
        }

        Ok(Self { questions })
    }

    /// The six-question battery shipped with the marketplace.
    pub fn standard() -> Self {
        Self {
            questions: vec![
                question(
                    "Q1",
                    Dimension::Pace,
                    "A new project lands on your desk. How do you start?",
                    "Jump in and adjust as I go",
                    "Plan the steps before touching anything",
                ),
                question(
                    "Q2",
                    Dimension::Decision,
                    "You have to choose between two reasonable options.",
                    "Decide quickly and move on",
                    "Gather more information first",
                ),
                question(
                    "Q3",
                    Dimension::Collaboration,
                    "Your team is behind schedule.",
                    "Take the critical piece and finish it myself",
                    "Redistribute work so everyone can help",
                ),
                question(
                    "Q4",
                    Dimension::Interaction,
                    "Which part of a working day energises you most?",
                    "Heads-down time on a hard task",
                    "Talking with customers or colleagues",
                ),
                question(
                    "Q5",
                    Dimension::Autonomy,
                    "How do you prefer to receive assignments?",
                    "A goal, and freedom to choose the route",
                    "Clear instructions and regular check-ins",
                ),
                question(
                    "Q6",
                    Dimension::ProblemSolving,
                    "You hit a problem nobody on the team has seen before.",
                    "Dig in and work it out on my own",
                    "Ask around for someone who has solved it",
                ),
            ],
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, code: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.code == code)
    }

    pub fn dimension_of(&self, code: &str) -> Option<Dimension> {
        self.question(code).map(|question| question.dimension)
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.questions.iter().map(|question| question.code)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn question(
    code: &'static str,
    dimension: Dimension,
    prompt: &'static str,
    a: &'static str,
    b: &'static str,
) -> Question {
    Question {
        code,
        dimension,
        prompt,
        choices: [
            Choice {
                label: ChoiceLabel::A,
                text: a,
            },
            Choice {
                label: ChoiceLabel::B,
                text: b,
            },
        ],
    }
}
