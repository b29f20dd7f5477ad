//! Round fixtures shared by the CLI integration tests.
//!
//! The poka fixture is the reference table (server seed `0x11..`, client
//! seeds `0x22..` and `0x33..`): amy holds positions 0-1, bob 2-3 and the
//! community pool 4-8. amy wins with a pair of eights.
#![allow(dead_code)]

use fairverify_engine::merkle::generate_deck;
use fairverify_engine::records::{PokaRecord, PokaRound, PublishedCard, RoundRecord};
use fairverify_engine::round::Owner;
use fairverify_engine::seed::{Seed, combine_seeds};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

pub fn honest_poka() -> RoundRecord {
    let server = Seed::from([0x11; 32]);
    let clients = vec![Seed::from([0x22; 32]), Seed::from([0x33; 32])];
    let generated = generate_deck(&combine_seeds(&server, &clients)).unwrap();
    let deck = generated
        .deck
        .iter()
        .enumerate()
        .map(|(i, card)| PublishedCard {
            card_number: *card,
            card_index: Some(i as u64),
            label: Some(card.label()),
            player: match i {
                0 | 1 => Owner::Player("amy".into()),
                2 | 3 => Owner::Player("bob".into()),
                4..=8 => Owner::Community,
                _ => Owner::Unassigned,
            },
        })
        .collect();
    let sit_in = |player: &str, seed: Seed, cards: Vec<usize>| PokaRecord {
        player: player.into(),
        poka_action: "SitIn".into(),
        status: None,
        card_index: cards,
        client_seed: Some(seed),
    };
    RoundRecord::Poka(PokaRound {
        match_id: Some("m-1".into()),
        round_id: Some("7".into()),
        server_seed: server,
        hashed_server_seed: Some(server.commitment()),
        client_seeds: clients.clone(),
        merkle_root: Some(generated.root),
        deck,
        records: vec![
            sit_in("amy", clients[0], vec![0, 1]),
            sit_in("bob", clients[1], vec![2, 3]),
        ],
        winners: vec!["amy".into()],
    })
}

/// The poka fixture with bob published as the winner.
pub fn tampered_poka() -> RoundRecord {
    let mut record = honest_poka();
    if let RoundRecord::Poka(round) = &mut record {
        round.winners = vec!["bob".into()];
    }
    record
}

/// Jackpot round drawing 814 out of 1000 tickets, written the way ledger
/// indexers emit it with stringified numbers.
pub fn jackpot_json() -> Value {
    json!({
        "game": "jackpot",
        "round_id": 12,
        "server_seed": "11".repeat(32),
        "public_seed": "22".repeat(32),
        "hashed_server_seed": "b569321de72d0af89c2fb48a484de3fc9343f31600ae1f3e13d633cb48cbf816",
        "total_amount": "1000",
        "random_number_revealed": "814",
        "records": [
            {"player": "p1", "bet_range_start": "1", "bet_range_end": "500"},
            {"player": "p2", "bet_range_start": "501", "bet_range_end": "1000"}
        ],
        "winners": ["p2"]
    })
}

pub fn to_value(record: &RoundRecord) -> Value {
    serde_json::to_value(record).unwrap()
}

pub fn write_jsonl(dir: &Path, name: &str, values: &[Value]) -> PathBuf {
    let body: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    let path = dir.join(name);
    std::fs::write(&path, body.join("\n") + "\n").unwrap();
    path
}

pub fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["fairverify"];
    argv.extend_from_slice(args);
    let code = fairverify_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}
