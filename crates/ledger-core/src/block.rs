use crate::constants::GENESIS_PREVIOUS_HASH;
use crate::hashing::{canonical_timestamp, hex_digest, BlockDigest};
use crate::transaction::Transaction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered batch of transactions linked to its predecessor by hash.
///
/// `hash` is a cache of [`Block::content_hash`]. Only mining touches `nonce`
/// and `hash` after construction; anything that needs to trust a block must
/// recompute the digest rather than read the cached value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub(crate) index: u64,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) previous_hash: String,
    pub(crate) nonce: u64,
    pub(crate) hash: String,
}

impl Block {
    pub fn new(
        index: u64,
        timestamp: DateTime<Utc>,
        transactions: Vec<Transaction>,
        previous_hash: impl Into<String>,
    ) -> Self {
        let mut block = Self {
            index,
            timestamp,
            transactions,
            previous_hash: previous_hash.into(),
            nonce: 0,
            hash: String::new(),
        };
        block.hash = block.content_hash();
        block
    }

    /// Unmined index-0 root with no transactions and the `"0"` sentinel.
    pub fn genesis(timestamp: DateTime<Utc>) -> Self {
        Self::new(0, timestamp, Vec::new(), GENESIS_PREVIOUS_HASH)
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// SHA-256 over `index || timestamp || tx hashes || previous_hash || nonce`.
    pub fn content_hash(&self) -> String {
        Self::hash_with_nonce(&self.preimage_prefix(), self.nonce)
    }

    pub fn is_hash_consistent(&self) -> bool {
        self.hash == self.content_hash()
    }

    /// Everything in the preimage except the trailing nonce. Constant while mining.
    pub(crate) fn preimage_prefix(&self) -> String {
        let mut prefix = format!("{}{}", self.index, canonical_timestamp(&self.timestamp));
        for tx in &self.transactions {
            prefix.push_str(&tx.content_hash());
        }
        prefix.push_str(&self.previous_hash);
        prefix
    }

    pub(crate) fn hash_with_nonce(prefix: &str, nonce: u64) -> String {
        hex_digest::<BlockDigest>(&format!("{prefix}{nonce}"))
    }
}
