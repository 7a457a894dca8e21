//! Proof-of-work over the hex rendering of a block hash.
//!
//! The target is a count of leading `'0'` hex characters, not leading zero
//! bits: difficulty 2 means the hash string starts with `"00"`.

use crate::block::Block;
use crate::constants::HASH_HEX_SIZE;
use crate::error::MiningError;
use tracing::{debug, info};

/// True when the first `difficulty` characters of `hash` are all `'0'`.
pub fn meets_difficulty(hash: &str, difficulty: usize) -> bool {
    hash.len() >= difficulty && hash.bytes().take(difficulty).all(|b| b == b'0')
}

pub fn count_leading_zero_hex(hash: &str) -> usize {
    hash.bytes().take_while(|b| *b == b'0').count()
}

pub(crate) fn check_difficulty(difficulty: usize) -> Result<(), MiningError> {
    if difficulty > HASH_HEX_SIZE {
        return Err(MiningError::DifficultyOutOfRange {
            difficulty,
            max: HASH_HEX_SIZE,
        });
    }
    Ok(())
}

impl Block {
    /// Increment the nonce until the hash meets `difficulty`.
    ///
    /// Performs no work if the current hash already qualifies. There is no
    /// upper bound on the search; use [`Block::try_mine`] for a capped one.
    ///
    /// # Panics
    ///
    /// If `difficulty` exceeds the hex width of a digest, since no nonce can
    /// ever satisfy it.
    pub fn mine(&mut self, difficulty: usize) {
        assert!(
            difficulty <= HASH_HEX_SIZE,
            "difficulty {difficulty} exceeds digest width {HASH_HEX_SIZE}"
        );
        if meets_difficulty(&self.hash, difficulty) {
            return;
        }
        let prefix = self.preimage_prefix();
        let start = self.nonce;
        while !meets_difficulty(&self.hash, difficulty) {
            self.nonce += 1;
            self.hash = Block::hash_with_nonce(&prefix, self.nonce);
        }
        info!(
            "Mined block {} with nonce {} after {} attempts, hash {}",
            self.index,
            self.nonce,
            self.nonce - start,
            self.hash
        );
    }

    /// Like [`Block::mine`] but gives up after `max_attempts` nonce increments.
    ///
    /// Returns the number of increments performed. On failure the block keeps
    /// the last nonce tried together with its matching hash.
    pub fn try_mine(&mut self, difficulty: usize, max_attempts: u64) -> Result<u64, MiningError> {
        check_difficulty(difficulty)?;
        let prefix = self.preimage_prefix();
        let mut attempts = 0u64;
        while !meets_difficulty(&self.hash, difficulty) {
            if attempts == max_attempts {
                debug!(
                    "Gave up mining block {} after {} attempts",
                    self.index, attempts
                );
                return Err(MiningError::NonceExhausted { attempts });
            }
            self.nonce += 1;
            self.hash = Block::hash_with_nonce(&prefix, self.nonce);
            attempts += 1;
        }
        if attempts > 0 {
            info!(
                "Mined block {} with nonce {} after {} attempts, hash {}",
                self.index, self.nonce, attempts, self.hash
            );
        }
        Ok(attempts)
    }
}
