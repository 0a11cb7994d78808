//! Built-in demo card pair.
//!
//! The classic Super Trunfo matchup: São Paulo vs Rio de Janeiro. Used by
//! the CLI when no card file is given.

use super::card::{Card, CardData};

/// The built-in São Paulo / Rio de Janeiro pair, already derived.
#[must_use]
pub fn demo_pair() -> (Card, Card) {
    let sao_paulo = CardData::new("SP", "C001", "Sao Paulo")
        .population(12_300_000)
        .area_km2(1521.11)
        .gdp_billions(747.6)
        .landmarks(100);

    let rio = CardData::new("RJ", "C002", "Rio de Janeiro")
        .population(6_775_000)
        .area_km2(1200.27)
        .gdp_billions(370.0)
        .landmarks(80);

    (Card::derive(sao_paulo), Card::derive(rio))
}
