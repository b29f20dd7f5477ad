use crate::cards::{create_deck, Card};
use crate::errors::EngineError;
use crate::hash::fold_halves;
use crate::seed::Seed;

const LCG_MULTIPLIER: u128 = 1_103_515_245;
const LCG_INCREMENT: u128 = 12_345;
const LCG_MASK: u128 = (1 << 31) - 1;

/// Linear congruential generator seeded from the two halves of a 32-byte seed.
#[derive(Debug, Clone)]
struct Lcg {
    state: u128,
}

impl Lcg {
    fn from_seed(seed: &Seed) -> Self {
        Self {
            state: fold_halves(seed.as_bytes()),
        }
    }

    // 2^31 divides 2^128, so wrapping then masking equals the exact result.
    fn next_value(&mut self) -> u128 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & LCG_MASK;
        self.state
    }
}

/// Returns a seeded permutation of `deck`; the input is left untouched.
///
/// Fisher-Yates from the last index down to 1, drawing `j = state % (i + 1)`
/// from [`Lcg`] at each step.
pub fn shuffle(deck: &[Card], seed: &Seed) -> Result<Vec<Card>, EngineError> {
    if deck.is_empty() {
        return Err(EngineError::EmptyDeck);
    }
    let mut cards = deck.to_vec();
    let mut lcg = Lcg::from_seed(seed);
    for i in (1..cards.len()).rev() {
        let j = (lcg.next_value() % (i as u128 + 1)) as usize;
        cards.swap(i, j);
    }
    Ok(cards)
}

/// A shuffled 54-card deck dealt front to back.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    pub fn from_seed(seed: &Seed) -> Self {
        // The full deck is never empty.
        let cards = shuffle(&create_deck(), seed).unwrap_or_else(|_| create_deck());
        Self { cards, position: 0 }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Deals `n` cards, or none if fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        if self.remaining() < n {
            return Err(EngineError::InsufficientCards {
                needed: n,
                available: self.remaining(),
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
