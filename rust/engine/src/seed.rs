//! 32-byte seeds and digests, and the seed combiner.
//!
//! A round is shuffled from a *combined seed*: the Keccak-256 of the server
//! seed followed by every client seed in the order the players joined. The
//! ledger publishes `keccak256(server_seed)` when the round opens and reveals
//! the seed itself when it closes; [`Seed::commitment`] recomputes the former
//! from the latter.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::EngineError;
use crate::hash::keccak256;

pub const SEED_LEN: usize = 32;

fn bytes32_from_slice(bytes: &[u8]) -> Result<[u8; SEED_LEN], EngineError> {
    <[u8; SEED_LEN]>::try_from(bytes).map_err(|_| EngineError::InvalidSeedLength(bytes.len()))
}

fn bytes32_from_hex(s: &str) -> Result<[u8; SEED_LEN], EngineError> {
    let t = s.trim();
    let t = t
        .strip_prefix("0x")
        .or_else(|| t.strip_prefix("0X"))
        .unwrap_or(t);
    let raw = hex::decode(t).map_err(|e| EngineError::InvalidSeedEncoding(e.to_string()))?;
    bytes32_from_slice(&raw)
}

// Both seeds and digests are written as lowercase hex and read from either a
// hex string or a JSON array of 32 bytes (the raw form decoded ledger events use).
macro_rules! bytes32_type {
    ($name:ident) => {
        impl $name {
            pub fn from_slice(bytes: &[u8]) -> Result<Self, EngineError> {
                bytes32_from_slice(bytes).map($name)
            }

            pub fn from_hex(s: &str) -> Result<Self, EngineError> {
                bytes32_from_hex(s).map($name)
            }

            pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
                &self.0
            }

            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }
        }

        impl From<[u8; SEED_LEN]> for $name {
            fn from(bytes: [u8; SEED_LEN]) -> Self {
                $name(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::from_hex(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer
                    .deserialize_any(Bytes32Visitor)
                    .map($name)
            }
        }
    };
}

struct Bytes32Visitor;

impl<'de> Visitor<'de> for Bytes32Visitor {
    type Value = [u8; SEED_LEN];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a 32-byte value as a hex string or an array of bytes")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        bytes32_from_hex(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        bytes32_from_slice(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut raw = Vec::with_capacity(SEED_LEN);
        while let Some(b) = seq.next_element::<u8>()? {
            raw.push(b);
        }
        bytes32_from_slice(&raw).map_err(de::Error::custom)
    }
}

/// A 32-byte random seed (server, public/ledger, client, or combined).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Seed([u8; SEED_LEN]);

bytes32_type!(Seed);

/// A 32-byte hash published by the ledger (seed commitment, Merkle root).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Digest([u8; SEED_LEN]);

bytes32_type!(Digest);

impl Seed {
    /// `keccak256(seed)`: the hashed server seed published before the reveal.
    pub fn commitment(&self) -> Digest {
        Digest(keccak256(&[&self.0]))
    }
}

/// Hashes the server seed followed by the client seeds, in join order.
pub fn combine_seeds(server: &Seed, clients: &[Seed]) -> Seed {
    let mut parts: Vec<&[u8]> = Vec::with_capacity(clients.len() + 1);
    parts.push(server.as_ref());
    parts.extend(clients.iter().map(|c| c.as_ref()));
    Seed(keccak256(&parts))
}

/// Untyped variant of [`combine_seeds`]: every input must be exactly 32 bytes.
pub fn combine_seed_bytes(server: &[u8], clients: &[&[u8]]) -> Result<Seed, EngineError> {
    let server = Seed::from_slice(server)?;
    let clients = clients
        .iter()
        .map(|c| Seed::from_slice(c))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(combine_seeds(&server, &clients))
}
