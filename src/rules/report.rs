//! Human-readable rendering of a decided round.

use super::attribute::Attribute;
use super::compare::{Comparison, Outcome};

/// Renders a [`Comparison`] as the comparison header, one value line per
/// card, and a verdict line.
///
/// Values go through [`Attribute::format_value`], the same per-attribute
/// formatting the rest of the crate uses, so the report never drifts from
/// the numbers the engine compared.
#[derive(Clone, Copy, Debug)]
pub struct MatchReport<'a> {
    comparison: &'a Comparison,
    first_label: &'a str,
    second_label: &'a str,
}

impl<'a> MatchReport<'a> {
    /// Build a report for a decided round and the two card labels.
    #[must_use]
    pub fn new(comparison: &'a Comparison, first_label: &'a str, second_label: &'a str) -> Self {
        Self {
            comparison,
            first_label,
            second_label,
        }
    }
}

impl std::fmt::Display for MatchReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let attribute = self.comparison.attribute;

        writeln!(f, "Comparing cards on {attribute}:")?;
        writeln!(
            f,
            "{}: {}",
            self.first_label,
            attribute.format_value(self.comparison.first_value)
        )?;
        writeln!(
            f,
            "{}: {}",
            self.second_label,
            attribute.format_value(self.comparison.second_value)
        )?;

        match self.comparison.outcome {
            Outcome::First => writeln!(f, "Result: {} wins!", self.first_label),
            Outcome::Second => writeln!(f, "Result: {} wins!", self.second_label),
            Outcome::Tie => writeln!(f, "Result: Tie!"),
        }
    }
}
