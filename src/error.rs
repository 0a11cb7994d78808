//! Crate error type.
//!
//! The game itself is infallible; errors only arise at the boundaries
//! (attribute text arriving from the CLI, the optional card file).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrunfoError {
    /// The attribute selector did not name one of the five attributes.
    #[error(
        "invalid comparison attribute {input:?} \
         (expected population, area, gdp, population-density, gdp-per-capita, or 1-5)"
    )]
    InvalidAttribute { input: String },

    /// The card file could not be read.
    #[error("failed to read card file: {0}")]
    CardFile(#[from] std::io::Error),

    /// The card file was not valid JSON for a list of card records.
    #[error("failed to parse card file: {0}")]
    CardParse(#[from] serde_json::Error),

    /// The card file did not hold exactly two records.
    #[error("card file must contain exactly two cards, found {found}")]
    CardCount { found: usize },
}

pub type Result<T> = std::result::Result<T, TrunfoError>;
