use std::collections::BTreeMap;

use crate::quiz::{ChoiceLabel, Dimension, PersonalityQuiz, QuizResponse, ScoreTally};

pub(super) fn quiz() -> PersonalityQuiz {
    PersonalityQuiz::standard()
}

/// Build a full answer set from a six-character pattern such as `"AABBAB"` (Q1..Q6).
pub(super) fn responses(pattern: &str) -> Vec<QuizResponse> {
    pattern
        .chars()
        .enumerate()
        .map(|(index, label)| QuizResponse::new(format!("Q{}", index + 1), label.to_string()))
        .collect()
}

/// All 64 complete answer patterns for the standard catalog.
pub(super) fn all_patterns() -> Vec<String> {
    (0u8..64)
        .map(|bits| {
            (0..6)
                .map(|position| if bits & (1 << position) == 0 { 'A' } else { 'B' })
                .collect()
        })
        .collect()
}

pub(super) fn tally(pattern: &str) -> ScoreTally {
    let by_dimension: BTreeMap<Dimension, ChoiceLabel> = Dimension::ordered()
        .into_iter()
        .zip(pattern.chars())
        .map(|(dimension, label)| {
            let label = if label == 'A' { ChoiceLabel::A } else { ChoiceLabel::B };
            (dimension, label)
        })
        .collect();
    ScoreTally::from_dimensions(by_dimension)
}
