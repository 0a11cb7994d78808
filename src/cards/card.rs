//! Raw card records and derived cards.
//!
//! `CardData` holds the authored statistics of one city: identification
//! strings plus population, area, GDP, and landmark count. `Card` wraps a
//! record together with its two derived ratios (population density and GDP
//! per capita), computed once at construction.
//!
//! Degenerate inputs are defined behavior, not errors: a zero area yields a
//! density of 0, a zero population yields a GDP per capita of 0.

use serde::{Deserialize, Serialize};

/// Raw city statistics, as authored or loaded from a card file.
///
/// This is the serde boundary: derived ratios are not part of the record,
/// so they can never arrive pre-computed from outside.
///
/// ## Example
///
/// ```
/// use trunfo::cards::{Card, CardData};
///
/// let data = CardData::new("SP", "C001", "Sao Paulo")
///     .population(12_300_000)
///     .area_km2(1521.11)
///     .gdp_billions(747.6)
///     .landmarks(100);
///
/// let card = Card::derive(data);
/// assert!((card.population_density - 8086.20).abs() < 0.01);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    /// Short state/region token (e.g. "SP").
    pub state_code: String,

    /// Short card identifier (e.g. "C001").
    pub card_code: String,

    /// City name.
    pub city_name: String,

    /// Inhabitant count.
    pub population: u64,

    /// Area in km².
    pub area_km2: f64,

    /// GDP in billions of currency units.
    pub gdp_billions: f64,

    /// Number of notable landmarks.
    pub landmark_count: u32,
}

impl CardData {
    /// Create a record with the identification fields set and all
    /// statistics zeroed.
    #[must_use]
    pub fn new(
        state_code: impl Into<String>,
        card_code: impl Into<String>,
        city_name: impl Into<String>,
    ) -> Self {
        Self {
            state_code: state_code.into(),
            card_code: card_code.into(),
            city_name: city_name.into(),
            population: 0,
            area_km2: 0.0,
            gdp_billions: 0.0,
            landmark_count: 0,
        }
    }

    /// Set the inhabitant count (builder pattern).
    #[must_use]
    pub fn population(mut self, count: u64) -> Self {
        self.population = count;
        self
    }

    /// Set the area in km².
    #[must_use]
    pub fn area_km2(mut self, km2: f64) -> Self {
        self.area_km2 = km2;
        self
    }

    /// Set the GDP in billions of currency units.
    #[must_use]
    pub fn gdp_billions(mut self, billions: f64) -> Self {
        self.gdp_billions = billions;
        self
    }

    /// Set the landmark count.
    #[must_use]
    pub fn landmarks(mut self, count: u32) -> Self {
        self.landmark_count = count;
        self
    }
}

/// A playable card: the raw record plus its derived ratios.
///
/// Immutable after construction. Build one via [`Card::derive`] (or the
/// `From<CardData>` impl); there is no way to set the derived fields
/// directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    /// The raw record this card was derived from.
    pub data: CardData,

    /// population / area, in hab/km². 0 when the area is not positive.
    pub population_density: f64,

    /// GDP converted to whole currency units and divided by population.
    /// 0 when the population is 0.
    pub gdp_per_capita: f64,
}

impl Card {
    /// Compute the derived ratios for a raw record.
    ///
    /// Division by zero is defined, not an error: a non-positive area
    /// yields a density of 0 and a zero population yields a GDP per
    /// capita of 0.
    #[must_use]
    pub fn derive(data: CardData) -> Self {
        let population_density = if data.area_km2 > 0.0 {
            data.population as f64 / data.area_km2
        } else {
            0.0
        };

        let gdp_per_capita = if data.population > 0 {
            (data.gdp_billions * 1_000_000_000.0) / data.population as f64
        } else {
            0.0
        };

        Self {
            data,
            population_density,
            gdp_per_capita,
        }
    }

    /// Display label: city name plus state token, e.g. "Sao Paulo (SP)".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.data.city_name, self.data.state_code)
    }
}

impl From<CardData> for Card {
    fn from(data: CardData) -> Self {
        Self::derive(data)
    }
}

impl std::fmt::Display for Card {
    /// Multi-line detail block listing all nine fields with their units.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- Card Details ---")?;
        writeln!(f, "State: {}", self.data.state_code)?;
        writeln!(f, "Card Code: {}", self.data.card_code)?;
        writeln!(f, "City: {}", self.data.city_name)?;
        writeln!(f, "Population: {} inhabitants", self.data.population)?;
        writeln!(f, "Area: {:.2} km²", self.data.area_km2)?;
        writeln!(f, "GDP: R$ {:.2} billion", self.data.gdp_billions)?;
        writeln!(f, "Landmarks: {}", self.data.landmark_count)?;
        writeln!(f, "Population Density: {:.2} hab/km²", self.population_density)?;
        writeln!(f, "GDP per Capita: R$ {:.2}", self.gdp_per_capita)?;
        writeln!(f, "--------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CardData {
        CardData::new("SP", "C001", "Sao Paulo")
            .population(12_300_000)
            .area_km2(1521.11)
            .gdp_billions(747.6)
            .landmarks(100)
    }

    #[test]
    fn test_card_data_builder() {
        let data = sample();
        assert_eq!(data.state_code, "SP");
        assert_eq!(data.card_code, "C001");
        assert_eq!(data.population, 12_300_000);
        assert_eq!(data.landmark_count, 100);
    }

    #[test]
    fn test_derive_ratios() {
        let card = Card::derive(sample());
        assert!((card.population_density - 8086.20).abs() < 0.01);
        assert!((card.gdp_per_capita - 60_780.49).abs() < 0.01);
    }

    #[test]
    fn test_zero_area_density_is_zero() {
        let card = Card::derive(sample().area_km2(0.0));
        assert_eq!(card.population_density, 0.0);
    }

    #[test]
    fn test_zero_population_per_capita_is_zero() {
        let card = Card::derive(sample().population(0));
        assert_eq!(card.gdp_per_capita, 0.0);
    }

    #[test]
    fn test_label() {
        let card = Card::derive(sample());
        assert_eq!(card.label(), "Sao Paulo (SP)");
    }

    #[test]
    fn test_display_lists_all_fields() {
        let card = Card::derive(sample());
        let block = card.to_string();

        assert!(block.contains("State: SP"));
        assert!(block.contains("Card Code: C001"));
        assert!(block.contains("City: Sao Paulo"));
        assert!(block.contains("Population: 12300000 inhabitants"));
        assert!(block.contains("Area: 1521.11 km²"));
        assert!(block.contains("GDP: R$ 747.60 billion"));
        assert!(block.contains("Landmarks: 100"));
        assert!(block.contains("Population Density: 8086.20 hab/km²"));
        assert!(block.contains("GDP per Capita: R$ 60780.49"));
    }

    #[test]
    fn test_card_data_serialization() {
        let data = sample();
        let json = serde_json::to_string(&data).unwrap();
        let back: CardData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, back);
    }
}
