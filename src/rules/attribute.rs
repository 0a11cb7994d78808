//! Comparable card attributes.
//!
//! The five attributes a round can be decided on. Each attribute knows its
//! display name, how to read its value off a card, how to format that value
//! for output, and which direction wins.
//!
//! Population density is the one inverted attribute: the *lower* value
//! wins. That rule lives here, on the attribute, so the comparison engine
//! never special-cases it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::error::TrunfoError;

use super::compare::Outcome;

/// One of the five numeric dimensions a round can be decided on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attribute {
    Population,
    Area,
    Gdp,
    PopulationDensity,
    GdpPerCapita,
}

/// Which way an attribute wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// The strictly greater value wins (the usual rule).
    HigherWins,
    /// The strictly smaller value wins (population density).
    LowerWins,
}

impl Direction {
    /// Judge two values under this direction. Equal values are a tie.
    #[must_use]
    pub fn judge(self, first: f64, second: f64) -> Outcome {
        let (better, worse) = match self {
            Direction::HigherWins => (first > second, second > first),
            Direction::LowerWins => (first < second, second < first),
        };
        if better {
            Outcome::First
        } else if worse {
            Outcome::Second
        } else {
            Outcome::Tie
        }
    }
}

impl Attribute {
    /// All attributes, in selector order (1..=5 in the original game).
    pub const ALL: [Attribute; 5] = [
        Attribute::Population,
        Attribute::Area,
        Attribute::Gdp,
        Attribute::PopulationDensity,
        Attribute::GdpPerCapita,
    ];

    /// Human-readable name for headers and verdicts.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Attribute::Population => "Population",
            Attribute::Area => "Area",
            Attribute::Gdp => "GDP",
            Attribute::PopulationDensity => "Population Density",
            Attribute::GdpPerCapita => "GDP per Capita",
        }
    }

    /// The win direction. Population density is the only inverted one.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Attribute::PopulationDensity => Direction::LowerWins,
            _ => Direction::HigherWins,
        }
    }

    /// Read this attribute's value off a card.
    #[must_use]
    pub fn value_of(self, card: &Card) -> f64 {
        match self {
            Attribute::Population => card.data.population as f64,
            Attribute::Area => card.data.area_km2,
            Attribute::Gdp => card.data.gdp_billions,
            Attribute::PopulationDensity => card.population_density,
            Attribute::GdpPerCapita => card.gdp_per_capita,
        }
    }

    /// Format a value of this attribute for output.
    ///
    /// Population is a whole count, GDP per capita carries the currency
    /// symbol, density carries its unit; everything else is a plain
    /// 2-decimal real.
    #[must_use]
    pub fn format_value(self, value: f64) -> String {
        match self {
            Attribute::Population => format!("{}", value as u64),
            Attribute::GdpPerCapita => format!("R$ {value:.2}"),
            Attribute::PopulationDensity => format!("{value:.2} hab/km²"),
            _ => format!("{value:.2}"),
        }
    }

    /// The numeric selector (1..=5) the original game used.
    #[must_use]
    pub fn selector(self) -> u8 {
        match self {
            Attribute::Population => 1,
            Attribute::Area => 2,
            Attribute::Gdp => 3,
            Attribute::PopulationDensity => 4,
            Attribute::GdpPerCapita => 5,
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Attribute {
    type Err = TrunfoError;

    /// Parse an attribute selector arriving as text at a boundary (CLI).
    ///
    /// Accepts the attribute names (case insensitive; spaces and `_`
    /// treated as `-`) and the original game's numeric selectors "1"
    /// through "5". Anything else is an `InvalidAttribute` failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "1" | "population" => Ok(Attribute::Population),
            "2" | "area" => Ok(Attribute::Area),
            "3" | "gdp" => Ok(Attribute::Gdp),
            "4" | "population-density" | "density" => Ok(Attribute::PopulationDensity),
            "5" | "gdp-per-capita" | "per-capita" => Ok(Attribute::GdpPerCapita),
            _ => Err(TrunfoError::InvalidAttribute {
                input: s.to_string(),
            }),
        }
    }
}
