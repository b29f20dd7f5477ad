use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Number of cards in a round's deck: 52 standard cards plus two GOLD wildcards.
pub const DECK_SIZE: usize = 54;

/// Card values reserved for the GOLD wildcards.
pub const GOLD_VALUES: [u8; 2] = [52, 53];

/// One of the four suits, numbered the way the ledger encodes them (`value % 4`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit (♦), index 0
    Diamonds,
    /// Clubs suit (♣), index 1
    Clubs,
    /// Hearts suit (♥), index 2
    Hearts,
    /// Spades suit (♠), index 3
    Spades,
}

impl Suit {
    pub fn from_index(v: u8) -> Suit {
        match v % 4 {
            0 => Suit::Diamonds,
            1 => Suit::Clubs,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }

    pub fn ascii(self) -> &'static str {
        match self {
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Hearts => "h",
            Suit::Spades => "s",
        }
    }
}

/// Rank of a standard card, indexed from Two (0) to Ace (12) as `value / 4`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2 (index 0)
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (index 9)
    Jack,
    /// Queen (index 10)
    Queen,
    /// King (index 11)
    King,
    /// Ace (index 12)
    Ace,
}

impl Rank {
    pub fn from_index(v: u8) -> Rank {
        match v {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            _ => Rank::Ace,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Display label: `2`..`10`, then `J`, `Q`, `K`, `A`.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Single-character label, `T` for ten.
    pub fn ascii(self) -> &'static str {
        match self {
            Rank::Ten => "T",
            other => other.label(),
        }
    }
}

/// A card value in `0..=53`.
///
/// Values below 52 encode `rank * 4 + suit`; 52 and 53 are the GOLD wildcards.
/// The value is validated on construction, so every `Card` in circulation is in range.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u8")]
pub struct Card(u8);

impl Card {
    pub fn new(value: u32) -> Result<Card, EngineError> {
        if value as usize >= DECK_SIZE {
            return Err(EngineError::InvalidCard(value));
        }
        Ok(Card(value as u8))
    }

    pub fn from_parts(rank: Rank, suit: Suit) -> Card {
        Card(rank.index() * 4 + suit.index())
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_gold(self) -> bool {
        GOLD_VALUES.contains(&self.0)
    }

    pub fn rank(self) -> Option<Rank> {
        if self.is_gold() {
            None
        } else {
            Some(Rank::from_index(self.0 / 4))
        }
    }

    pub fn suit(self) -> Option<Suit> {
        if self.is_gold() {
            None
        } else {
            Some(Suit::from_index(self.0 % 4))
        }
    }

    pub fn classify(self) -> CardInfo {
        classify(self)
    }

    /// Unicode label such as `A♠`, or `GOLD`.
    pub fn label(self) -> String {
        self.classify().name()
    }

    /// ASCII label such as `As` or `Td`, or `GOLD`.
    pub fn ascii_label(self) -> String {
        match self.classify() {
            CardInfo::Gold => "GOLD".to_string(),
            CardInfo::Standard { rank, suit } => format!("{}{}", rank.ascii(), suit.ascii()),
        }
    }
}

impl TryFrom<u32> for Card {
    type Error = EngineError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Card::new(value)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Accepts a card value (`"51"`), `GOLD`, or a rank followed by a suit
    /// given either as a symbol or a letter (`"A♠"`, `"As"`, `"10d"`, `"Td"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Ok(v) = t.parse::<u32>() {
            return Card::new(v);
        }
        if t.eq_ignore_ascii_case("gold") {
            return Ok(Card(GOLD_VALUES[0]));
        }
        let bad = || EngineError::InvalidCardLabel(s.to_string());
        let suit_char = t.chars().last().ok_or_else(bad)?;
        let rank_part = &t[..t.len() - suit_char.len_utf8()];
        let suit = match suit_char {
            '♦' | 'd' | 'D' => Suit::Diamonds,
            '♣' | 'c' | 'C' => Suit::Clubs,
            '♥' | 'h' | 'H' => Suit::Hearts,
            '♠' | 's' | 'S' => Suit::Spades,
            _ => return Err(bad()),
        };
        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            digit => match digit.parse::<u8>() {
                Ok(n @ 2..=9) => Rank::from_index(n - 2),
                _ => return Err(bad()),
            },
        };
        Ok(Card::from_parts(rank, suit))
    }
}

/// Classification of a card value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardInfo {
    /// GOLD wildcard: no rank, no suit
    Gold,
    /// Standard card
    Standard { rank: Rank, suit: Suit },
}

impl CardInfo {
    pub fn is_gold(&self) -> bool {
        matches!(self, CardInfo::Gold)
    }

    pub fn name(&self) -> String {
        match self {
            CardInfo::Gold => "GOLD".to_string(),
            CardInfo::Standard { rank, suit } => format!("{}{}", rank.label(), suit.symbol()),
        }
    }
}

pub fn classify(card: Card) -> CardInfo {
    match (card.rank(), card.suit()) {
        (Some(rank), Some(suit)) => CardInfo::Standard { rank, suit },
        _ => CardInfo::Gold,
    }
}

/// The canonical ordered deck `[0, 1, .., 53]`.
pub fn create_deck() -> Vec<Card> {
    (0..DECK_SIZE as u8).map(Card).collect()
}
