use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::Card;
use crate::errors::EngineError;

/// Hand categories, numbered by the score the ledger publishes for them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 90,
    OnePair = 91,
    TwoPair = 92,
    ThreeOfAKind = 93,
    Straight = 94,
    Flush = 95,
    FullHouse = 96,
    FourOfAKind = 97,
    StraightFlush = 98,
    FiveOfAKind = 99,
    RoyalFlush = 100,
}

impl Category {
    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn from_score(score: u8) -> Option<Category> {
        let category = match score {
            90 => Category::HighCard,
            91 => Category::OnePair,
            92 => Category::TwoPair,
            93 => Category::ThreeOfAKind,
            94 => Category::Straight,
            95 => Category::Flush,
            96 => Category::FullHouse,
            97 => Category::FourOfAKind,
            98 => Category::StraightFlush,
            99 => Category::FiveOfAKind,
            100 => Category::RoyalFlush,
            _ => return None,
        };
        Some(category)
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::FiveOfAKind => "Five of a Kind",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// A scored five-card hand.
///
/// `comparators` are rank indices (0 = two .. 12 = ace), most significant
/// first; an ace playing low in a straight is written `-1`. `cards` lists the
/// hand in comparator order, GOLD cards sitting where they stand in.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub category: Category,
    pub comparators: Vec<i8>,
    pub cards: Vec<Card>,
}

impl HandEvaluation {
    pub fn score(&self) -> u8 {
        self.category.score()
    }

    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandOutcome {
    Draw,
    FirstWins,
    SecondWins,
}

pub fn compare_hands(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.comparators.cmp(&b.comparators),
        ord => ord,
    }
}

/// Compares two comparator lists entry by entry, looking at no more than five.
pub fn winner(a: &[i8], b: &[i8]) -> HandOutcome {
    for (x, y) in a.iter().zip(b.iter()).take(5) {
        match x.cmp(y) {
            Ordering::Greater => return HandOutcome::FirstWins,
            Ordering::Less => return HandOutcome::SecondWins,
            Ordering::Equal => {}
        }
    }
    HandOutcome::Draw
}

fn rank_slot(rank: i8) -> usize {
    if rank < 0 { 12 } else { rank as usize }
}

fn rank_of(card: Card) -> Option<usize> {
    card.rank().map(|r| r.index() as usize)
}

// Hands out cards for a five-card hand: naturals of the requested rank
// first, GOLD cards standing in for whatever is missing.
struct Picker {
    naturals: Vec<Card>,
    golds: Vec<Card>,
}

impl Picker {
    fn take(&mut self, rank: usize, n: usize) -> Vec<Card> {
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            if let Some(pos) = self.naturals.iter().position(|c| rank_of(*c) == Some(rank)) {
                out.push(self.naturals.remove(pos));
            } else if !self.golds.is_empty() {
                out.push(self.golds.remove(0));
            } else {
                break;
            }
        }
        out
    }

    fn take_ranks(&mut self, ranks: &[i8]) -> Vec<Card> {
        ranks
            .iter()
            .flat_map(|r| self.take(rank_slot(*r), 1))
            .collect()
    }

    // Remaining cards as kickers, highest first.
    fn kickers(self) -> (Vec<i8>, Vec<Card>) {
        let ranks = self
            .naturals
            .iter()
            .filter_map(|c| rank_of(*c))
            .map(|r| r as i8)
            .collect();
        let mut cards = self.naturals;
        cards.extend(self.golds);
        (ranks, cards)
    }
}

fn highest_rank(counts: &[usize; 13], target: usize, wilds: usize) -> Option<usize> {
    (0..13)
        .rev()
        .find(|&r| counts[r] > 0 && counts[r] + wilds >= target)
}

/// Highest five-rank window the hand can complete, as comparators.
fn straight_window(counts: &[usize; 13], wilds: usize) -> Option<[i8; 5]> {
    (3..=12i8).rev().find_map(|top| {
        let window = [top, top - 1, top - 2, top - 3, top - 4];
        let present = window
            .iter()
            .filter(|&&r| counts[rank_slot(r)] > 0)
            .count();
        (present + wilds >= 5).then_some(window)
    })
}

fn full_house(counts: &[usize; 13], wilds: usize) -> Option<(usize, usize)> {
    for t in (0..13).rev().filter(|&t| counts[t] > 0) {
        for p in (0..13).rev().filter(|&p| p != t && counts[p] > 0) {
            let need = 3usize.saturating_sub(counts[t]) + 2usize.saturating_sub(counts[p]);
            if need <= wilds {
                return Some((t, p));
            }
        }
    }
    None
}

fn scored(category: Category, comparators: Vec<i8>, cards: Vec<Card>) -> HandEvaluation {
    HandEvaluation {
        category,
        comparators,
        cards,
    }
}

fn evaluate_five(cards: &[Card]) -> HandEvaluation {
    let mut naturals: Vec<Card> = cards.iter().copied().filter(|c| !c.is_gold()).collect();
    naturals.sort_unstable_by(|a, b| b.cmp(a));
    let golds: Vec<Card> = cards.iter().copied().filter(|c| c.is_gold()).collect();
    let wilds = golds.len();

    let mut counts = [0usize; 13];
    for r in naturals.iter().filter_map(|c| rank_of(*c)) {
        counts[r] += 1;
    }
    let suited = naturals.windows(2).all(|w| w[0].suit() == w[1].suit());
    let straight = straight_window(&counts, wilds);
    let mut picker = Picker { naturals, golds };

    let suited_window = straight.filter(|_| suited);
    if let Some(window) = suited_window.filter(|w| w[0] == 12) {
        let cards = picker.take_ranks(&window);
        return scored(Category::RoyalFlush, vec![12], cards);
    }

    // Checked ahead of the straight flush it outranks.
    if let Some(r) = highest_rank(&counts, 5, wilds) {
        let cards = picker.take(r, 5);
        return scored(Category::FiveOfAKind, vec![r as i8], cards);
    }

    if let Some(window) = suited_window {
        let cards = picker.take_ranks(&window);
        return scored(Category::StraightFlush, window.to_vec(), cards);
    }

    if let Some(q) = highest_rank(&counts, 4, wilds) {
        let mut cards = picker.take(q, 4);
        let (kickers, rest) = picker.kickers();
        cards.extend(rest);
        let mut comparators = vec![q as i8];
        comparators.extend(kickers.into_iter().take(1));
        return scored(Category::FourOfAKind, comparators, cards);
    }

    if let Some((t, p)) = full_house(&counts, wilds) {
        let mut cards = picker.take(t, 3);
        cards.extend(picker.take(p, 2));
        return scored(Category::FullHouse, vec![t as i8, p as i8], cards);
    }

    if suited {
        let mut ranks: Vec<i8> = (0..13)
            .rev()
            .filter(|&r| counts[r] > 0)
            .map(|r| r as i8)
            .collect();
        ranks.extend(
            (0..13)
                .rev()
                .filter(|&r| counts[r] == 0)
                .take(wilds)
                .map(|r| r as i8),
        );
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let cards = picker.take_ranks(&ranks);
        return scored(Category::Flush, ranks, cards);
    }

    if let Some(window) = straight {
        let cards = picker.take_ranks(&window);
        return scored(Category::Straight, window.to_vec(), cards);
    }

    if let Some(t) = highest_rank(&counts, 3, wilds) {
        let mut cards = picker.take(t, 3);
        let (kickers, rest) = picker.kickers();
        cards.extend(rest);
        let mut comparators = vec![t as i8];
        comparators.extend(kickers.into_iter().take(2));
        return scored(Category::ThreeOfAKind, comparators, cards);
    }

    let pairs: Vec<usize> = (0..13).rev().filter(|&r| counts[r] >= 2).collect();
    if pairs.len() >= 2 {
        let (hi, lo) = (pairs[0], pairs[1]);
        let mut cards = picker.take(hi, 2);
        cards.extend(picker.take(lo, 2));
        let (kickers, rest) = picker.kickers();
        cards.extend(rest);
        let mut comparators = vec![hi as i8, lo as i8];
        comparators.extend(kickers.into_iter().take(1));
        return scored(Category::TwoPair, comparators, cards);
    }

    if let Some(p) = highest_rank(&counts, 2, wilds) {
        let mut cards = picker.take(p, 2);
        let (kickers, rest) = picker.kickers();
        cards.extend(rest);
        let mut comparators = vec![p as i8];
        comparators.extend(kickers.into_iter().take(3));
        return scored(Category::OnePair, comparators, cards);
    }

    let (kickers, cards) = picker.kickers();
    scored(
        Category::HighCard,
        kickers.into_iter().take(5).collect(),
        cards,
    )
}

/// Index combinations of `k` out of `n`, in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k > n {
        return out;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.clone());
        let Some(i) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            return out;
        };
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

// Stronger hand wins; on an exact tie the earlier combination is kept.
fn pick_better(
    a: (usize, HandEvaluation),
    b: (usize, HandEvaluation),
) -> (usize, HandEvaluation) {
    match compare_hands(&a.1, &b.1) {
        Ordering::Greater => a,
        Ordering::Less => b,
        Ordering::Equal => {
            if a.0 <= b.0 {
                a
            } else {
                b
            }
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn search(candidates: &[[Card; 5]]) -> Option<(usize, HandEvaluation)> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, combo)| {
            let eval = evaluate_five(combo);
            trace!(index = i, score = eval.score(), "scored combination");
            (i, eval)
        })
        .reduce(pick_better)
}

#[cfg(feature = "parallel")]
fn search(candidates: &[[Card; 5]]) -> Option<(usize, HandEvaluation)> {
    use rayon::prelude::*;

    candidates
        .par_iter()
        .enumerate()
        .map(|(i, combo)| {
            let eval = evaluate_five(combo);
            trace!(index = i, score = eval.score(), "scored combination");
            (i, eval)
        })
        .reduce_with(pick_better)
}

/// Best category of 5 to 7 cards; larger sets are scored by their best
/// five-card subset.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandEvaluation, EngineError> {
    if cards.len() < 5 {
        return Err(EngineError::InsufficientCards {
            needed: 5,
            available: cards.len(),
        });
    }
    if cards.len() > 7 {
        return Err(EngineError::TooManyCards(cards.len()));
    }
    if cards.len() == 5 {
        return Ok(evaluate_five(cards));
    }
    let candidates: Vec<[Card; 5]> = combinations(cards.len(), 5)
        .iter()
        .map(|c| [cards[c[0]], cards[c[1]], cards[c[2]], cards[c[3]], cards[c[4]]])
        .collect();
    search(&candidates)
        .map(|(_, eval)| eval)
        .ok_or(EngineError::InsufficientCards {
            needed: 5,
            available: cards.len(),
        })
}

/// Best hand a player can form from two hole cards and three community cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BestHand {
    pub evaluation: HandEvaluation,
    /// The five cards of the winning combination, hole pair first.
    pub cards: Vec<Card>,
}

pub fn best_hand_from_cards(hole: &[Card], community: &[Card]) -> Result<BestHand, EngineError> {
    if hole.len() < 2 {
        return Err(EngineError::InsufficientCards {
            needed: 2,
            available: hole.len(),
        });
    }
    if community.len() < 3 {
        return Err(EngineError::InsufficientCards {
            needed: 3,
            available: community.len(),
        });
    }

    let pairs = combinations(hole.len(), 2);
    let triples = combinations(community.len(), 3);
    let candidates: Vec<[Card; 5]> = pairs
        .iter()
        .flat_map(|h| {
            triples.iter().map(move |c| {
                [
                    hole[h[0]],
                    hole[h[1]],
                    community[c[0]],
                    community[c[1]],
                    community[c[2]],
                ]
            })
        })
        .collect();

    let (index, evaluation) = search(&candidates).ok_or(EngineError::InsufficientCards {
        needed: 5,
        available: hole.len() + community.len(),
    })?;
    Ok(BestHand {
        evaluation,
        cards: candidates[index].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(labels: &[&str]) -> Vec<Card> {
        labels.iter().map(|l| l.parse().unwrap()).collect()
    }

    #[test]
    fn combinations_are_lexicographic() {
        assert_eq!(
            combinations(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(combinations(7, 5).len(), 21);
        assert!(combinations(2, 3).is_empty());
    }

    #[test]
    fn gold_fills_the_gap_in_a_straight() {
        let eval = evaluate_hand(&cards(&["9h", "8d", "GOLD", "6c", "5s"])).unwrap();
        assert_eq!(eval.category, Category::Straight);
        assert_eq!(eval.comparators, vec![7, 6, 5, 4, 3]);
        assert_eq!(eval.cards[2], Card::new(52).unwrap());
    }

    #[test]
    fn straight_synthesizes_highest_window() {
        // 2 3 4 + two GOLD completes 2..6 at best
        let eval = evaluate_hand(&cards(&["2d", "3c", "4h", "GOLD", "53"])).unwrap();
        assert_eq!(eval.category, Category::Straight);
        assert_eq!(eval.comparators, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn ace_low_straight_with_gold() {
        let eval = evaluate_hand(&cards(&["Ad", "2c", "3h", "5s", "GOLD"])).unwrap();
        assert_eq!(eval.category, Category::Straight);
        assert_eq!(eval.comparators, vec![3, 2, 1, 0, -1]);
        assert_eq!(eval.cards[4], "Ad".parse().unwrap());
    }

    #[test]
    fn gold_flush_takes_highest_missing_ranks() {
        let eval = evaluate_hand(&cards(&["Ah", "9h", "4h", "2h", "GOLD"])).unwrap();
        assert_eq!(eval.category, Category::Flush);
        assert_eq!(eval.comparators, vec![12, 11, 7, 2, 0]);
    }

    #[test]
    fn winner_compares_at_most_five_entries() {
        assert_eq!(winner(&[5, 3], &[5, 2]), HandOutcome::FirstWins);
        assert_eq!(winner(&[5, 2], &[5, 3]), HandOutcome::SecondWins);
        assert_eq!(
            winner(&[1, 1, 1, 1, 1, 9], &[1, 1, 1, 1, 1, 0]),
            HandOutcome::Draw
        );
    }

    #[test]
    fn score_round_trips() {
        for score in 90..=100 {
            assert_eq!(Category::from_score(score).map(|c| c.score()), Some(score));
        }
        assert_eq!(Category::from_score(89), None);
    }
}
