//! The comparison engine.
//!
//! A round is one comparison: read the chosen attribute off both cards,
//! judge the two values under the attribute's win direction, and record the
//! outcome. Equal values are a tie.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

use super::attribute::Attribute;

/// Outcome of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The first card won.
    First,
    /// The second card won.
    Second,
    /// Equal values, no winner.
    Tie,
}

impl Outcome {
    /// Check whether the round had no winner.
    #[must_use]
    pub fn is_tie(self) -> bool {
        self == Outcome::Tie
    }
}

/// A decided round: the attribute, both extracted values, and the outcome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    /// The attribute the round was decided on.
    pub attribute: Attribute,

    /// The first card's value for that attribute.
    pub first_value: f64,

    /// The second card's value for that attribute.
    pub second_value: f64,

    /// Who won, if anyone.
    pub outcome: Outcome,
}

/// Compare two cards on one attribute.
///
/// The attribute's own [`Direction`](super::attribute::Direction) decides
/// who wins; the engine has no per-attribute branches.
#[must_use]
pub fn compare(first: &Card, second: &Card, attribute: Attribute) -> Comparison {
    let first_value = attribute.value_of(first);
    let second_value = attribute.value_of(second);
    let outcome = attribute.direction().judge(first_value, second_value);

    Comparison {
        attribute,
        first_value,
        second_value,
        outcome,
    }
}
