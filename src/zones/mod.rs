//! Card zones: library, deck, hand and discard.

mod manager;

pub use manager::{CardManager, Zone};
