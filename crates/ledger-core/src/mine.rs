use crate::block::Block;
use crate::error::MiningError;
use crate::pow::{check_difficulty, meets_difficulty};
use rayon::prelude::*;
use tracing::info;

impl Block {
    /// Searches nonces in parallel, from the current nonce upward, until the hash
    /// meets `difficulty`.
    ///
    /// Any qualifying nonce may win, so the result can differ from
    /// [`Block::mine`], which always lands on the smallest one.
    pub fn mine_parallel(&mut self, difficulty: usize) -> Result<(), MiningError> {
        check_difficulty(difficulty)?;
        if meets_difficulty(&self.hash, difficulty) {
            return Ok(());
        }

        // Only the nonce varies per attempt.
        let prefix = self.preimage_prefix();

        // Rayon splits the range across the pool.
        let found = (self.nonce..=u64::MAX)
            .into_par_iter()
            .find_any(|nonce| {
                meets_difficulty(&Block::hash_with_nonce(&prefix, *nonce), difficulty)
            })
            .ok_or(MiningError::NonceExhausted {
                attempts: (u64::MAX - self.nonce).saturating_add(1),
            })?;

        self.nonce = found;
        self.hash = Block::hash_with_nonce(&prefix, found);

        info!(
            "Mined block {} in parallel with nonce {} and hash {}",
            self.index, self.nonce, self.hash
        );
        Ok(())
    }
}
