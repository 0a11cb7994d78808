//! Comparison rules.
//!
//! - `attribute`: the closed set of comparable attributes, each carrying
//!   its own win direction.
//! - `compare`: the comparison engine producing an outcome.
//! - `report`: human-readable rendering of a comparison.

pub mod attribute;
pub mod compare;
pub mod report;

pub use attribute::{Attribute, Direction};
pub use compare::{compare, Comparison, Outcome};
pub use report::MatchReport;
