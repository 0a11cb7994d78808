//! Card-pair files.
//!
//! A card file is a JSON list of exactly two raw records. Cards are
//! derived on load, so a file can never supply derived values.

use std::path::Path;

use crate::error::{Result, TrunfoError};

use super::card::{Card, CardData};

/// Load two raw records from a JSON file and derive their cards.
///
/// Fails with `CardFile` when the file cannot be read, `CardParse` when
/// it is not a JSON list of card records, and `CardCount` when the list
/// does not hold exactly two.
pub fn load_pair(path: &Path) -> Result<(Card, Card)> {
    let text = std::fs::read_to_string(path)?;
    let records: Vec<CardData> = serde_json::from_str(&text)?;

    let [first, second]: [CardData; 2] = records
        .try_into()
        .map_err(|records: Vec<CardData>| TrunfoError::CardCount {
            found: records.len(),
        })?;

    tracing::debug!(file = %path.display(), "loaded card pair");
    Ok((Card::derive(first), Card::derive(second)))
}
