//! # trunfo
//!
//! A simplified "Super Trunfo" (Top Trumps) round: two city-data cards are
//! compared on one selectable attribute and a verdict is reported.
//!
//! ## Design Principles
//!
//! 1. **Derived, Never Supplied**: population density and GDP per capita
//!    are computed from the raw record at construction; they cannot arrive
//!    pre-computed from a file.
//!
//! 2. **Direction On The Attribute**: "higher wins, except density where
//!    lower wins" is a per-attribute [`Direction`](rules::Direction), not a
//!    branch in the engine, so the single inverted rule stays auditable.
//!
//! 3. **Closed Attribute Set**: inside the library the selector is an enum;
//!    the "invalid attribute" failure class only exists where raw text
//!    enters (CLI parsing).
//!
//! ## Modules
//!
//! - `cards`: raw records, derived cards, the built-in demo pair
//! - `rules`: attributes, comparison engine, match report
//! - `error`: crate error type
//! - `logging`: tracing setup for the CLI

pub mod cards;
pub mod error;
pub mod logging;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{demo_pair, load_pair, Card, CardData};
pub use crate::error::{Result, TrunfoError};
pub use crate::rules::{compare, Attribute, Comparison, Direction, MatchReport, Outcome};
