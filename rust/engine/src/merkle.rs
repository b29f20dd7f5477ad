//! Merkle commitment over a shuffled deck.
//!
//! Each deck position becomes a leaf `keccak256(be32(position) || seed || card)`.
//! Parents hash `left || right` with no sorting, and an odd trailing node is
//! carried up to the next layer unchanged.

use serde::{Deserialize, Serialize};

use crate::cards::{create_deck, Card};
use crate::deck::shuffle;
use crate::errors::EngineError;
use crate::hash::keccak256;
use crate::seed::{Digest, Seed};

pub fn to_leaf(position: u32, card: Card, combined_seed: &Seed) -> Digest {
    Digest::from(keccak256(&[
        &position.to_be_bytes(),
        combined_seed.as_ref(),
        &[card.value()],
    ]))
}

fn hash_pair(left: &Digest, right: &Digest) -> Digest {
    Digest::from(keccak256(&[left.as_ref(), right.as_ref()]))
}

/// Which side of the running hash a proof sibling sits on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub side: Side,
    pub hash: Digest,
}

#[derive(Debug, Clone)]
pub struct MerkleTree {
    // layers[0] holds the leaves, the last layer holds the root alone.
    layers: Vec<Vec<Digest>>,
}

impl MerkleTree {
    pub fn new(leaves: Vec<Digest>) -> Self {
        let mut layers = vec![leaves];
        while let Some(layer) = layers.last() {
            if layer.len() <= 1 {
                break;
            }
            let next = layer
                .chunks(2)
                .map(|pair| match pair {
                    [l, r] => hash_pair(l, r),
                    [single] => *single,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            layers.push(next);
        }
        Self { layers }
    }

    pub fn leaves(&self) -> &[Digest] {
        &self.layers[0]
    }

    /// Root of the tree; `None` only for a tree without leaves.
    pub fn root(&self) -> Option<Digest> {
        self.layers.last().and_then(|l| l.first().copied())
    }

    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// Sibling path from leaf `index` to the root.
    pub fn proof(&self, index: usize) -> Result<Vec<ProofStep>, EngineError> {
        let len = self.leaves().len();
        if index >= len {
            return Err(EngineError::LeafOutOfRange { index, len });
        }
        let mut steps = Vec::with_capacity(self.depth());
        let mut idx = index;
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = idx ^ 1;
            if let Some(hash) = layer.get(sibling) {
                let side = if sibling < idx { Side::Left } else { Side::Right };
                steps.push(ProofStep { side, hash: *hash });
            }
            idx /= 2;
        }
        Ok(steps)
    }
}

pub fn verify_proof(leaf: &Digest, proof: &[ProofStep], root: &Digest) -> bool {
    let computed = proof.iter().fold(*leaf, |acc, step| match step.side {
        Side::Left => hash_pair(&step.hash, &acc),
        Side::Right => hash_pair(&acc, &step.hash),
    });
    computed == *root
}

/// The shuffled deck for a combined seed together with its commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDeck {
    pub deck: Vec<Card>,
    pub root: Digest,
    pub leaves: Vec<Digest>,
}

impl GeneratedDeck {
    pub fn tree(&self) -> MerkleTree {
        MerkleTree::new(self.leaves.clone())
    }
}

pub fn generate_deck(combined_seed: &Seed) -> Result<GeneratedDeck, EngineError> {
    let deck = shuffle(&create_deck(), combined_seed)?;
    let leaves: Vec<Digest> = deck
        .iter()
        .enumerate()
        .map(|(i, card)| to_leaf(i as u32, *card, combined_seed))
        .collect();
    let root = MerkleTree::new(leaves.clone())
        .root()
        .ok_or(EngineError::EmptyDeck)?;
    Ok(GeneratedDeck { deck, root, leaves })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(n: u8) -> Digest {
        Digest::from(keccak256(&[&[n]]))
    }

    #[test]
    fn odd_node_is_carried_up() {
        let leaves = vec![leaf(0), leaf(1), leaf(2)];
        let tree = MerkleTree::new(leaves.clone());
        let expected = hash_pair(&hash_pair(&leaves[0], &leaves[1]), &leaves[2]);
        assert_eq!(tree.root(), Some(expected));
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn single_leaf_is_its_own_root() {
        let tree = MerkleTree::new(vec![leaf(7)]);
        assert_eq!(tree.root(), Some(leaf(7)));
        assert!(tree.proof(0).unwrap().is_empty());
        assert_eq!(MerkleTree::new(Vec::new()).root(), None);
    }

    #[test]
    fn carried_levels_add_no_proof_step() {
        let leaves: Vec<Digest> = (0..5).map(leaf).collect();
        let tree = MerkleTree::new(leaves.clone());
        let root = tree.root().unwrap();
        // leaf 4 is carried twice and only pairs at the top
        let proof = tree.proof(4).unwrap();
        assert_eq!(proof.len(), 1);
        assert_eq!(proof[0].side, Side::Left);
        for (i, l) in leaves.iter().enumerate() {
            assert!(verify_proof(l, &tree.proof(i).unwrap(), &root));
        }
    }

    #[test]
    fn proof_out_of_range() {
        let tree = MerkleTree::new(vec![leaf(0), leaf(1)]);
        assert_eq!(
            tree.proof(2),
            Err(EngineError::LeafOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn tampered_proof_fails() {
        let leaves: Vec<Digest> = (0..4).map(leaf).collect();
        let tree = MerkleTree::new(leaves.clone());
        let root = tree.root().unwrap();
        let mut proof = tree.proof(1).unwrap();
        proof[0].side = Side::Right;
        assert!(!verify_proof(&leaves[1], &proof, &root));
        assert!(!verify_proof(&leaves[2], &tree.proof(1).unwrap(), &root));
    }

    #[test]
    fn leaf_layout_is_position_seed_card() {
        let seed = Seed::from([0x11u8; 32]);
        let card = Card::new(5).unwrap();
        let mut manual = Vec::new();
        manual.extend_from_slice(&3u32.to_be_bytes());
        manual.extend_from_slice(seed.as_bytes());
        manual.push(5);
        assert_eq!(
            to_leaf(3, card, &seed),
            Digest::from(keccak256(&[&manual[..]]))
        );
    }
}
