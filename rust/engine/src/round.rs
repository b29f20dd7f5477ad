use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::errors::EngineError;
use crate::hand::{best_hand_from_cards, winner, BestHand, Category, HandOutcome};

const COMMUNITY: &str = "Community";
const UNASSIGNED: &str = "--";

/// Who holds a deck position, as the ledger writes it: a player id,
/// `"Community"`, or `"--"` for a card nobody was dealt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Owner {
    Player(String),
    Community,
    Unassigned,
}

impl Owner {
    pub fn player_id(&self) -> Option<&str> {
        match self {
            Owner::Player(id) => Some(id),
            _ => None,
        }
    }
}

impl From<String> for Owner {
    fn from(s: String) -> Self {
        match s.as_str() {
            COMMUNITY => Owner::Community,
            UNASSIGNED | "" => Owner::Unassigned,
            _ => Owner::Player(s),
        }
    }
}

impl From<&str> for Owner {
    fn from(s: &str) -> Self {
        Owner::from(s.to_string())
    }
}

impl From<Owner> for String {
    fn from(owner: Owner) -> String {
        match owner {
            Owner::Player(id) => id,
            Owner::Community => COMMUNITY.to_string(),
            Owner::Unassigned => UNASSIGNED.to_string(),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Player(id) => f.write_str(id),
            Owner::Community => f.write_str(COMMUNITY),
            Owner::Unassigned => f.write_str(UNASSIGNED),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAssignment {
    pub card: Card,
    pub owner: Owner,
}

impl CardAssignment {
    pub fn new(card: Card, owner: impl Into<Owner>) -> Self {
        Self {
            card,
            owner: owner.into(),
        }
    }
}

/// The leading hand of a round.
///
/// `cards` holds the five-card combination of the leader; when players tie
/// exactly it is the union of every tied combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningHand {
    pub category: Category,
    pub comparators: Vec<i8>,
    pub cards: Vec<Card>,
}

impl WinningHand {
    pub fn score(&self) -> u8 {
        self.category.score()
    }

    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

impl From<BestHand> for WinningHand {
    fn from(best: BestHand) -> Self {
        Self {
            category: best.evaluation.category,
            comparators: best.evaluation.comparators,
            cards: best.cards,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub winners: Vec<String>,
    pub eliminated: Vec<String>,
    pub best: Option<WinningHand>,
}

#[derive(Debug, Default)]
struct RoundState {
    winners: Vec<String>,
    eliminated: Vec<String>,
    best: Option<WinningHand>,
}

impl RoundState {
    fn lead(&mut self, player: &str, hand: BestHand) {
        debug!(
            player,
            hand = hand.evaluation.name(),
            displaced = self.winners.len(),
            "new round leader"
        );
        self.eliminated.append(&mut self.winners);
        self.winners.push(player.to_string());
        self.best = Some(hand.into());
    }

    fn absorb(mut self, player: &str, hand: BestHand) -> Self {
        let Some(lead) = self.best.as_mut() else {
            self.lead(player, hand);
            return self;
        };
        let outcome = match hand.evaluation.category.cmp(&lead.category) {
            std::cmp::Ordering::Greater => HandOutcome::FirstWins,
            std::cmp::Ordering::Less => HandOutcome::SecondWins,
            std::cmp::Ordering::Equal => winner(&hand.evaluation.comparators, &lead.comparators),
        };
        match outcome {
            HandOutcome::FirstWins => self.lead(player, hand),
            HandOutcome::SecondWins => self.eliminated.push(player.to_string()),
            HandOutcome::Draw => {
                debug!(player, "tied with round leader");
                for card in hand.cards {
                    if !lead.cards.contains(&card) {
                        lead.cards.push(card);
                    }
                }
                self.winners.push(player.to_string());
            }
        }
        self
    }

    fn finish(self) -> RoundResult {
        RoundResult {
            winners: self.winners,
            eliminated: self.eliminated,
            best: self.best,
        }
    }
}

/// Active players in order of first appearance: owners of at least one card
/// who did not fold.
pub fn active_players(assignments: &[CardAssignment], folded: &[String]) -> Vec<String> {
    let mut players: Vec<String> = Vec::new();
    for id in assignments.iter().filter_map(|a| a.owner.player_id()) {
        if folded.iter().any(|f| f == id) || players.iter().any(|p| p == id) {
            continue;
        }
        players.push(id.to_string());
    }
    players
}

/// Resolves a round by folding every active player's best hand into the
/// running leader.
///
/// A player with a worse hand is eliminated; a better hand eliminates every
/// current winner; an exact tie joins the winners. With no active players the
/// result is empty.
pub fn resolve_round(
    assignments: &[CardAssignment],
    folded: &[String],
) -> Result<RoundResult, EngineError> {
    let players = active_players(assignments, folded);
    if players.is_empty() {
        return Ok(RoundResult::default());
    }
    let community: Vec<Card> = assignments
        .iter()
        .filter(|a| a.owner == Owner::Community)
        .map(|a| a.card)
        .collect();

    let state = players
        .iter()
        .try_fold(RoundState::default(), |state, player| {
            let hole: Vec<Card> = assignments
                .iter()
                .filter(|a| a.owner.player_id() == Some(player.as_str()))
                .map(|a| a.card)
                .collect();
            let best = best_hand_from_cards(&hole, &community)?;
            Ok::<_, EngineError>(state.absorb(player, best))
        })?;
    Ok(state.finish())
}
