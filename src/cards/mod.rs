//! Card data model.
//!
//! Cards come in two forms:
//! - `CardData`: the raw record as authored or loaded from a file.
//! - `Card`: the playable card, with derived stats computed from the raw
//!   record at construction time.
//!
//! The split guarantees derived numbers are always recomputed and never
//! supplied directly - the only path from a raw record to a playable card
//! runs the derivation.

pub mod card;
pub mod demo;
pub mod file;

pub use card::{Card, CardData};
pub use demo::demo_pair;
pub use file::load_pair;
