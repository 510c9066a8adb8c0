use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::{ChoiceLabel, Dimension};
use super::validation::ValidatedResponses;

/// A/B counts for a completed quiz plus the label picked on each dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreTally {
    a_count: usize,
    b_count: usize,
    by_dimension: BTreeMap<Dimension, ChoiceLabel>,
}

impl ScoreTally {
    pub fn from_responses(responses: &ValidatedResponses) -> Self {
        let mut tally = ScoreTally {
            a_count: 0,
            b_count: 0,
            by_dimension: BTreeMap::new(),
        };

        for answer in responses.answers() {
            match answer.label {
                ChoiceLabel::A => tally.a_count += 1,
                ChoiceLabel::B => tally.b_count += 1,
            }
            tally.by_dimension.insert(answer.dimension, answer.label);
        }

        tally
    }

    /// Build a tally straight from a per-dimension answer pattern, e.g. answers loaded from storage.
    pub fn from_dimensions(by_dimension: BTreeMap<Dimension, ChoiceLabel>) -> Self {
        let a_count = by_dimension
            .values()
            .filter(|label| **label == ChoiceLabel::A)
            .count();
        let b_count = by_dimension.len() - a_count;

        Self {
            a_count,
            b_count,
            by_dimension,
        }
    }

    pub fn a_count(&self) -> usize {
        self.a_count
    }

    pub fn b_count(&self) -> usize {
        self.b_count
    }

    pub fn count(&self, label: ChoiceLabel) -> usize {
        match label {
            ChoiceLabel::A => self.a_count,
            ChoiceLabel::B => self.b_count,
        }
    }

    pub fn total(&self) -> usize {
        self.a_count + self.b_count
    }

    pub fn label_for(&self, dimension: Dimension) -> Option<ChoiceLabel> {
        self.by_dimension.get(&dimension).copied()
    }

    pub fn by_dimension(&self) -> &BTreeMap<Dimension, ChoiceLabel> {
        &self.by_dimension
    }
}
