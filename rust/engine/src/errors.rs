use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Seed must be exactly 32 bytes, got {0}")]
    InvalidSeedLength(usize),
    #[error("Invalid seed encoding: {0}")]
    InvalidSeedEncoding(String),
    #[error("Card value {0} is outside 0..=53")]
    InvalidCard(u32),
    #[error("Unrecognized card label: {0}")]
    InvalidCardLabel(String),
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Insufficient cards: need {needed}, have {available}")]
    InsufficientCards { needed: usize, available: usize },
    #[error("Too many cards for a single hand: {0} (maximum 7)")]
    TooManyCards(usize),
    #[error("Leaf index {index} out of range for tree of {len} leaves")]
    LeafOutOfRange { index: usize, len: usize },
}
