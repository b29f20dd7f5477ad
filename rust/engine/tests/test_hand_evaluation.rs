use fairverify_engine::cards::{Card, Rank, Suit, GOLD_VALUES};
use fairverify_engine::errors::EngineError;
use fairverify_engine::hand::{
    best_hand_from_cards, compare_hands, evaluate_hand, winner, Category, HandOutcome,
};

fn hand(labels: &[&str]) -> Vec<Card> {
    labels.iter().map(|l| l.parse().unwrap()).collect()
}

fn gold(i: usize) -> Card {
    Card::new(GOLD_VALUES[i] as u32).unwrap()
}

#[test]
fn detects_royal_flush() {
    let eval = evaluate_hand(&hand(&["Th", "Jh", "Qh", "Kh", "Ah"])).unwrap();
    assert_eq!(eval.category, Category::RoyalFlush);
    assert_eq!(eval.comparators, vec![12]);
    assert_eq!(eval.score(), 100);
}

#[test]
fn gold_completes_royal_flush() {
    let eval = evaluate_hand(&hand(&["Jh", "Qh", "Kh", "Ah", "GOLD"])).unwrap();
    assert_eq!(eval.category, Category::RoyalFlush);
    assert_eq!(eval.cards.len(), 5);
    assert!(eval.cards.contains(&gold(0)));
}

#[test]
fn straight_flush_below_royal() {
    let eval = evaluate_hand(&hand(&["5s", "6s", "7s", "8s", "9s"])).unwrap();
    assert_eq!(eval.category, Category::StraightFlush);
    assert_eq!(eval.comparators, vec![7, 6, 5, 4, 3]);
}

#[test]
fn low_straight_two_through_six_has_head_four() {
    let eval = evaluate_hand(&hand(&["2d", "3c", "4h", "5s", "6d"])).unwrap();
    assert_eq!(eval.category, Category::Straight);
    assert_eq!(eval.comparators[0], 4);
    assert_eq!(eval.comparators, vec![4, 3, 2, 1, 0]);
}

#[test]
fn wheel_is_written_with_low_ace() {
    let eval = evaluate_hand(&hand(&["Ad", "2c", "3h", "4s", "5d"])).unwrap();
    assert_eq!(eval.category, Category::Straight);
    assert_eq!(eval.comparators, vec![3, 2, 1, 0, -1]);
    let six_high = evaluate_hand(&hand(&["2d", "3c", "4h", "5s", "6d"])).unwrap();
    assert!(compare_hands(&six_high, &eval).is_gt());
}

#[test]
fn five_of_a_kind_needs_a_wildcard() {
    let natural = evaluate_hand(&hand(&["9d", "9c", "9h", "9s", "Kd"])).unwrap();
    assert_eq!(natural.category, Category::FourOfAKind);
    assert_eq!(natural.comparators, vec![7, 11]);

    let wild = evaluate_hand(&hand(&["9d", "9c", "9h", "9s", "GOLD"])).unwrap();
    assert_eq!(wild.category, Category::FiveOfAKind);
    assert_eq!(wild.comparators, vec![7]);

    let two_wild = evaluate_hand(&[
        "9d".parse().unwrap(),
        "9c".parse().unwrap(),
        "9h".parse().unwrap(),
        gold(0),
        gold(1),
    ])
    .unwrap();
    assert_eq!(two_wild.category, Category::FiveOfAKind);
}

#[test]
fn five_of_a_kind_outranks_a_wild_straight_flush() {
    // Repeated GOLD values only appear in a tampered deck, but still rank.
    let five = "5h".parse().unwrap();
    let eval = evaluate_hand(&[five, gold(0), gold(1), gold(0), gold(1)]).unwrap();
    assert_eq!(eval.category, Category::FiveOfAKind);
    assert_eq!(eval.comparators, vec![3]);
    assert_eq!(eval.cards[0], five);

    let ace = "Ah".parse().unwrap();
    let royal = evaluate_hand(&[ace, gold(0), gold(1), gold(0), gold(1)]).unwrap();
    assert_eq!(royal.category, Category::RoyalFlush);
}

#[test]
fn wildcards_build_every_grouped_category() {
    let cases: [(&[&str], Category, Vec<i8>); 6] = [
        (&["Kh", "Kd", "Ks", "2c", "GOLD"], Category::FourOfAKind, vec![11, 0]),
        (&["Kh", "Kd", "9s", "9c", "GOLD"], Category::FullHouse, vec![11, 7]),
        (&["Kh", "Kd", "5s", "2c", "GOLD"], Category::ThreeOfAKind, vec![11, 3, 0]),
        (&["Kh", "9d", "5s", "2c", "GOLD"], Category::OnePair, vec![11, 7, 3, 0]),
        (&["Kh", "9d", "5s", "GOLD", "53"], Category::ThreeOfAKind, vec![11, 7, 3]),
        (&["Kh", "Kd", "5s", "GOLD", "53"], Category::FourOfAKind, vec![11, 3]),
    ];
    for (labels, category, comparators) in cases {
        let eval = evaluate_hand(&hand(labels)).unwrap();
        assert_eq!(eval.category, category, "{:?}", labels);
        assert_eq!(eval.comparators, comparators, "{:?}", labels);
    }
}

#[test]
fn natural_groupings() {
    let two_pair = evaluate_hand(&hand(&["Kh", "Kd", "5s", "5c", "2d"])).unwrap();
    assert_eq!(two_pair.category, Category::TwoPair);
    assert_eq!(two_pair.comparators, vec![11, 3, 0]);

    let full = evaluate_hand(&hand(&["5h", "5d", "5s", "Kc", "Kd"])).unwrap();
    assert_eq!(full.category, Category::FullHouse);
    assert_eq!(full.comparators, vec![3, 11]);

    let flush = evaluate_hand(&hand(&["2c", "7c", "9c", "Jc", "Kc"])).unwrap();
    assert_eq!(flush.category, Category::Flush);
    assert_eq!(flush.comparators, vec![11, 9, 7, 5, 0]);

    let high = evaluate_hand(&hand(&["2c", "7d", "9c", "Jc", "Kc"])).unwrap();
    assert_eq!(high.category, Category::HighCard);
    assert_eq!(high.comparators, vec![11, 9, 7, 5, 0]);
    assert_eq!(high.name(), "High Card");
}

#[test]
fn cards_follow_comparator_order() {
    let eval = evaluate_hand(&hand(&["2c", "Kd", "5s", "Kh", "5c"])).unwrap();
    let ranks: Vec<Rank> = eval.cards.iter().filter_map(|c| c.rank()).collect();
    assert_eq!(
        ranks,
        vec![Rank::King, Rank::King, Rank::Five, Rank::Five, Rank::Two]
    );
}

// Every ace-low window that can be completed with wildcards, in both a mixed
// and a single suit.
#[test]
fn ace_low_wildcard_straights_exhaustive() {
    let low = [Rank::Two, Rank::Three, Rank::Four, Rank::Five];
    for mask in 0u8..16 {
        let others: Vec<Rank> = low
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, r)| *r)
            .collect();
        let naturals = others.len() + 1;
        if naturals < 3 {
            continue;
        }
        let wilds = 5 - naturals;
        for suited in [false, true] {
            let mut cards = vec![Card::from_parts(Rank::Ace, Suit::Spades)];
            for (i, r) in others.iter().enumerate() {
                let suit = if suited {
                    Suit::Spades
                } else {
                    Suit::from_index(i as u8)
                };
                cards.push(Card::from_parts(*r, suit));
            }
            for g in 0..wilds {
                cards.push(gold(g));
            }
            let eval = evaluate_hand(&cards).unwrap();
            let expected = if suited {
                Category::StraightFlush
            } else {
                Category::Straight
            };
            assert_eq!(eval.category, expected, "mask {:04b} suited {}", mask, suited);
            assert_eq!(eval.comparators, vec![3, 2, 1, 0, -1], "mask {:04b}", mask);
            assert_eq!(
                eval.cards.last().copied(),
                Some(Card::from_parts(Rank::Ace, Suit::Spades))
            );
            assert_eq!(eval.cards.iter().filter(|c| c.is_gold()).count(), wilds);
        }
    }
}

#[test]
fn wildcard_straight_without_ace_takes_highest_window() {
    let eval = evaluate_hand(&hand(&["2d", "3c", "4h", "GOLD", "53"])).unwrap();
    assert_eq!(eval.comparators, vec![4, 3, 2, 1, 0]);
    let eval = evaluate_hand(&hand(&["3d", "4c", "5h", "GOLD", "53"])).unwrap();
    assert_eq!(eval.comparators, vec![5, 4, 3, 2, 1]);
    let eval = evaluate_hand(&hand(&["Kd", "Qc", "Jh", "GOLD", "53"])).unwrap();
    assert_eq!(eval.category, Category::Straight);
    assert_eq!(eval.comparators, vec![12, 11, 10, 9, 8]);
}

#[test]
fn identical_hands_tie() {
    let a = evaluate_hand(&hand(&["Kh", "Kd", "5s", "5c", "2d"])).unwrap();
    let b = evaluate_hand(&hand(&["Ks", "Kc", "5h", "5d", "2c"])).unwrap();
    assert!(compare_hands(&a, &b).is_eq());
    assert_eq!(winner(&a.comparators, &b.comparators), HandOutcome::Draw);
}

#[test]
fn category_outranks_comparators() {
    let quads = evaluate_hand(&hand(&["2c", "2d", "2h", "2s", "3c"])).unwrap();
    let full = evaluate_hand(&hand(&["Ac", "Ad", "Ah", "Kc", "Kd"])).unwrap();
    assert!(compare_hands(&quads, &full).is_gt());
}

#[test]
fn seven_cards_use_best_five() {
    let eval = evaluate_hand(&hand(&["Th", "Jh", "Qh", "Kh", "Ah", "2c", "3d"])).unwrap();
    assert_eq!(eval.category, Category::RoyalFlush);
    let eval = evaluate_hand(&hand(&["Ac", "Ad", "Kc", "Kd", "Qh", "Qs", "2c"])).unwrap();
    assert_eq!(eval.category, Category::TwoPair);
    assert_eq!(eval.comparators, vec![12, 11, 10]);
}

#[test]
fn hand_size_limits() {
    assert_eq!(
        evaluate_hand(&hand(&["2c", "3c", "4c", "5c"])),
        Err(EngineError::InsufficientCards {
            needed: 5,
            available: 4
        })
    );
    assert_eq!(
        evaluate_hand(&hand(&["2c", "3c", "4c", "5c", "6c", "7c", "8c", "9c"])),
        Err(EngineError::TooManyCards(8))
    );
}

#[test]
fn best_hand_uses_exactly_two_hole_cards() {
    let best =
        best_hand_from_cards(&hand(&["2c", "3d"]), &hand(&["Ah", "Kh", "Qh", "Jh", "Th"])).unwrap();
    assert_eq!(best.evaluation.category, Category::HighCard);
    assert_eq!(best.evaluation.comparators, vec![12, 11, 10, 1, 0]);
    assert_eq!(best.cards, hand(&["2c", "3d", "Ah", "Kh", "Qh"]));
}

#[test]
fn best_hand_prefers_strongest_pairing() {
    let best = best_hand_from_cards(
        &hand(&["Ah", "Kh", "2c"]),
        &hand(&["Qh", "Jh", "Th", "3d", "4s"]),
    )
    .unwrap();
    assert_eq!(best.evaluation.category, Category::RoyalFlush);
    assert_eq!(best.cards, hand(&["Ah", "Kh", "Qh", "Jh", "Th"]));
}

#[test]
fn best_hand_ties_keep_earliest_combination() {
    let best =
        best_hand_from_cards(&hand(&["Kc", "Qd"]), &hand(&["Ah", "Ad", "7c", "7d"])).unwrap();
    assert_eq!(best.evaluation.category, Category::OnePair);
    assert_eq!(best.evaluation.comparators, vec![12, 11, 10, 5]);
    assert_eq!(best.cards, hand(&["Kc", "Qd", "Ah", "Ad", "7c"]));
}

#[test]
fn best_hand_requires_two_hole_and_three_community() {
    assert_eq!(
        best_hand_from_cards(&hand(&["2c"]), &hand(&["3c", "4c", "5c"])),
        Err(EngineError::InsufficientCards {
            needed: 2,
            available: 1
        })
    );
    assert_eq!(
        best_hand_from_cards(&hand(&["2c", "9d"]), &hand(&["3c", "4c"])),
        Err(EngineError::InsufficientCards {
            needed: 3,
            available: 2
        })
    );
}

#[test]
fn best_hand_counts_gold_from_either_side() {
    let best = best_hand_from_cards(
        &hand(&["GOLD", "9s"]),
        &hand(&["9d", "9c", "2h", "53", "Kd"]),
    )
    .unwrap();
    assert_eq!(best.evaluation.category, Category::FiveOfAKind);
    assert_eq!(best.evaluation.comparators, vec![7]);
}
