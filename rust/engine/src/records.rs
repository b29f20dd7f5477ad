//! Decoded ledger data for a single round, as handed to the verifier.
//!
//! Numeric fields are accepted either as JSON numbers or as decimal strings,
//! since ledger indexers commonly stringify 64-bit values.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rng::RouletteBet;
use crate::round::{CardAssignment, Owner};
use crate::seed::{Digest, Seed};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(u64),
    Str(String),
}

impl NumOrStr {
    fn into_u64<E: de::Error>(self) -> Result<u64, E> {
        match self {
            NumOrStr::Num(n) => Ok(n),
            NumOrStr::Str(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| E::custom(format!("expected an unsigned integer, got {:?}", s))),
        }
    }
}

fn u64_flex<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    NumOrStr::deserialize(d)?.into_u64()
}

fn opt_u64_flex<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
    Option::<NumOrStr>::deserialize(d)?
        .map(NumOrStr::into_u64)
        .transpose()
}

fn card_flex<'de, D: Deserializer<'de>>(d: D) -> Result<Card, D::Error> {
    let v = u64_flex(d)?;
    let v = u32::try_from(v)
        .map_err(|_| <D::Error as de::Error>::custom(format!("card value {} out of range", v)))?;
    Card::new(v).map_err(de::Error::custom)
}

fn opt_string_flex<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<NumOrStr>::deserialize(d)?.map(|v| match v {
        NumOrStr::Num(n) => n.to_string(),
        NumOrStr::Str(s) => s,
    }))
}

fn indices_flex<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<usize>, D::Error> {
    Vec::<NumOrStr>::deserialize(d)?
        .into_iter()
        .map(|v| v.into_u64::<D::Error>().map(|n| n as usize))
        .collect()
}

/// One decoded round, tagged by its `game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "lowercase")]
pub enum RoundRecord {
    Poka(PokaRound),
    Jackpot(LotteryRound),
    Coinflip(LotteryRound),
    Roulette(LotteryRound),
}

impl RoundRecord {
    pub fn game(&self) -> &'static str {
        match self {
            RoundRecord::Poka(_) => "poka",
            RoundRecord::Jackpot(_) => "jackpot",
            RoundRecord::Coinflip(_) => "coinflip",
            RoundRecord::Roulette(_) => "roulette",
        }
    }

    pub fn round_id(&self) -> Option<&str> {
        match self {
            RoundRecord::Poka(r) => r.round_id.as_deref(),
            RoundRecord::Jackpot(r) | RoundRecord::Coinflip(r) | RoundRecord::Roulette(r) => {
                r.round_id.as_deref()
            }
        }
    }
}

/// Player actions recorded during a Poka round, numbered as on the ledger.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PokaAction {
    Check = 0,
    Fold = 1,
    AutoFold = 2,
    PreFlop = 3,
    Call = 4,
    Raise = 5,
    AllIn = 6,
    BigBlind = 7,
    SmallBlind = 8,
    NormalCard = 9,
    MysteryCard = 10,
    SitIn = 11,
    CommunityCard = 12,
}

impl PokaAction {
    /// Parses either the ledger's numeric code or the action name in any
    /// case, with or without separators (`"auto_fold"`, `"AutoFold"`).
    pub fn parse(s: &str) -> Option<PokaAction> {
        if let Ok(n) = s.trim().parse::<u8>() {
            return Self::from_code(n);
        }
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let action = match key.as_str() {
            "check" => PokaAction::Check,
            "fold" => PokaAction::Fold,
            "autofold" => PokaAction::AutoFold,
            "preflop" => PokaAction::PreFlop,
            "call" => PokaAction::Call,
            "raise" => PokaAction::Raise,
            "allin" => PokaAction::AllIn,
            "bigblind" => PokaAction::BigBlind,
            "smallblind" => PokaAction::SmallBlind,
            "normalcard" => PokaAction::NormalCard,
            "mysterycard" => PokaAction::MysteryCard,
            "sitin" => PokaAction::SitIn,
            "communitycard" => PokaAction::CommunityCard,
            _ => return None,
        };
        Some(action)
    }

    pub fn from_code(n: u8) -> Option<PokaAction> {
        let action = match n {
            0 => PokaAction::Check,
            1 => PokaAction::Fold,
            2 => PokaAction::AutoFold,
            3 => PokaAction::PreFlop,
            4 => PokaAction::Call,
            5 => PokaAction::Raise,
            6 => PokaAction::AllIn,
            7 => PokaAction::BigBlind,
            8 => PokaAction::SmallBlind,
            9 => PokaAction::NormalCard,
            10 => PokaAction::MysteryCard,
            11 => PokaAction::SitIn,
            12 => PokaAction::CommunityCard,
            _ => return None,
        };
        Some(action)
    }

    pub fn is_fold(self) -> bool {
        matches!(self, PokaAction::Fold | PokaAction::AutoFold)
    }
}

/// A deck position as published when the round closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedCard {
    #[serde(deserialize_with = "card_flex")]
    pub card_number: Card,
    #[serde(default, deserialize_with = "opt_u64_flex")]
    pub card_index: Option<u64>,
    #[serde(default)]
    pub label: Option<String>,
    pub player: Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokaRecord {
    pub player: String,
    pub poka_action: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "indices_flex")]
    pub card_index: Vec<usize>,
    #[serde(default)]
    pub client_seed: Option<Seed>,
}

impl PokaRecord {
    pub fn action(&self) -> Option<PokaAction> {
        PokaAction::parse(&self.poka_action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokaRound {
    #[serde(default, deserialize_with = "opt_string_flex")]
    pub match_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_flex")]
    pub round_id: Option<String>,
    pub server_seed: Seed,
    #[serde(default)]
    pub hashed_server_seed: Option<Digest>,
    #[serde(default)]
    pub client_seeds: Vec<Seed>,
    #[serde(default)]
    pub merkle_root: Option<Digest>,
    #[serde(default)]
    pub deck: Vec<PublishedCard>,
    #[serde(default)]
    pub records: Vec<PokaRecord>,
    #[serde(default)]
    pub winners: Vec<String>,
}

impl PokaRound {
    /// Players who folded or were auto-folded, in record order.
    pub fn folded_players(&self) -> Vec<String> {
        let mut folded: Vec<String> = Vec::new();
        for record in &self.records {
            if record.action().is_some_and(PokaAction::is_fold) && !folded.contains(&record.player)
            {
                folded.push(record.player.clone());
            }
        }
        folded
    }

    /// Published card ownership in deck order.
    pub fn assignments(&self) -> Vec<CardAssignment> {
        self.deck
            .iter()
            .map(|c| CardAssignment {
                card: c.card_number,
                owner: c.player.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetRecord {
    pub player: String,
    #[serde(deserialize_with = "u64_flex")]
    pub bet_range_start: u64,
    #[serde(deserialize_with = "u64_flex")]
    pub bet_range_end: u64,
    #[serde(default, deserialize_with = "opt_u64_flex")]
    pub amount: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_flex")]
    pub choice: Option<u64>,
    #[serde(default)]
    pub is_winner: Option<bool>,
}

impl BetRecord {
    /// Roulette records spanning `0..0` are the house's side of the table.
    pub fn is_house(&self) -> bool {
        self.bet_range_start == 0 && self.bet_range_end == 0
    }

    pub fn roulette_bet(&self) -> Option<RouletteBet> {
        RouletteBet::from_index(self.bet_range_start)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryRound {
    #[serde(default, deserialize_with = "opt_string_flex")]
    pub round_id: Option<String>,
    pub server_seed: Seed,
    #[serde(default)]
    pub hashed_server_seed: Option<Digest>,
    pub public_seed: Seed,
    #[serde(deserialize_with = "u64_flex")]
    pub total_amount: u64,
    #[serde(default, deserialize_with = "opt_u64_flex")]
    pub random_number_revealed: Option<u64>,
    #[serde(default)]
    pub records: Vec<BetRecord>,
    #[serde(default)]
    pub winners: Vec<String>,
}

/// Display label for a bet's `choice` in the given game.
pub fn choice_label(game: &str, choice: u64) -> &'static str {
    match game {
        "coinflip" => {
            if choice == 0 {
                "Heads"
            } else {
                "Tails"
            }
        }
        "roulette" => RouletteBet::from_index(choice)
            .map(RouletteBet::label)
            .unwrap_or("Unknown"),
        _ => "Unknown",
    }
}
