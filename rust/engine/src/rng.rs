//! Seed-derived random numbers for the lottery games and the roulette table.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::hash::{fold_halves, keccak256};
use crate::seed::Seed;

/// Draws a number in `1..=odds` from the revealed server seed and the public
/// (ledger) seed. `odds == 0` has nothing to draw from and yields `0`.
pub fn random_number(server: &Seed, public: &Seed, odds: u64) -> u64 {
    if odds == 0 {
        return 0;
    }
    let folded = fold_halves(&keccak256(&[server.as_ref(), public.as_ref()]));
    (folded % odds as u128) as u64 + 1
}

pub fn random_number_bytes(server: &[u8], public: &[u8], odds: u64) -> Result<u64, EngineError> {
    Ok(random_number(
        &Seed::from_slice(server)?,
        &Seed::from_slice(public)?,
        odds,
    ))
}

/// Whether a lottery ticket range `[start, end]` holds the drawn number.
pub fn ticket_wins(start: u64, end: u64, number: u64) -> bool {
    start <= number && number <= end
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RouletteColor {
    Jackpot,
    Yellow,
    Blue,
}

/// The fifteen roulette pockets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RouletteOutcome {
    Jackpot = 0,
    Yellow = 1,
    Blue = 2,
    Yellow3 = 3,
    Blue4 = 4,
    Yellow5 = 5,
    Blue6 = 6,
    Yellow7 = 7,
    Blue8 = 8,
    Yellow9 = 9,
    Blue10 = 10,
    Yellow11 = 11,
    Blue12 = 12,
    Yellow13 = 13,
    Blue14 = 14,
}

const OUTCOMES: [RouletteOutcome; 15] = [
    RouletteOutcome::Jackpot,
    RouletteOutcome::Yellow,
    RouletteOutcome::Blue,
    RouletteOutcome::Yellow3,
    RouletteOutcome::Blue4,
    RouletteOutcome::Yellow5,
    RouletteOutcome::Blue6,
    RouletteOutcome::Yellow7,
    RouletteOutcome::Blue8,
    RouletteOutcome::Yellow9,
    RouletteOutcome::Blue10,
    RouletteOutcome::Yellow11,
    RouletteOutcome::Blue12,
    RouletteOutcome::Yellow13,
    RouletteOutcome::Blue14,
];

impl RouletteOutcome {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn color(self) -> RouletteColor {
        match self.index() {
            0 => RouletteColor::Jackpot,
            i if i % 2 == 1 => RouletteColor::Yellow,
            _ => RouletteColor::Blue,
        }
    }

    /// Pockets 7 and 14 also pay the pattern bet.
    pub fn is_pattern(self) -> bool {
        matches!(self, RouletteOutcome::Yellow7 | RouletteOutcome::Blue14)
    }
}

pub fn resolve_outcome(roll: u64) -> RouletteOutcome {
    OUTCOMES[(roll % OUTCOMES.len() as u64) as usize]
}

/// Bet kinds, encoded by the ledger in a roulette record's `bet_range_start`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RouletteBet {
    Jackpot = 0,
    Yellow = 1,
    Blue = 2,
    Pattern = 3,
}

impl RouletteBet {
    pub fn from_index(v: u64) -> Option<RouletteBet> {
        match v {
            0 => Some(RouletteBet::Jackpot),
            1 => Some(RouletteBet::Yellow),
            2 => Some(RouletteBet::Blue),
            3 => Some(RouletteBet::Pattern),
            _ => None,
        }
    }

    /// Pocket indices this bet pays on.
    pub fn range(self) -> &'static [u8] {
        match self {
            RouletteBet::Jackpot => &[0],
            RouletteBet::Yellow => &[1, 3, 5, 7, 9, 11, 13],
            RouletteBet::Blue => &[2, 4, 6, 8, 10, 12, 14],
            RouletteBet::Pattern => &[7, 14],
        }
    }

    pub fn covers(self, outcome: RouletteOutcome) -> bool {
        self.range().contains(&outcome.index())
    }

    /// Table label shown to players.
    pub fn label(self) -> &'static str {
        match self {
            RouletteBet::Jackpot => "Green",
            RouletteBet::Yellow => "Yellow",
            RouletteBet::Blue => "Purple",
            RouletteBet::Pattern => "Yellow with Top or Red with Top",
        }
    }
}
