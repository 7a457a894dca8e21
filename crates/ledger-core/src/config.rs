use crate::constants::{HASH_HEX_SIZE, POW_TARGET_DIFFICULTY};
use crate::error::{LedgerError, Result};
use serde::{Deserialize, Serialize};

/// Parameters fixed for the lifetime of a [`Chain`](crate::Chain).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Leading `'0'` hex characters required of every mined block hash.
    pub difficulty: usize,
    /// Cap on nonce increments per appended block. `None` searches until found.
    pub max_nonce_attempts: Option<u64>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            difficulty: POW_TARGET_DIFFICULTY,
            max_nonce_attempts: None,
        }
    }
}

impl ChainConfig {
    pub fn with_difficulty(difficulty: usize) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.difficulty > HASH_HEX_SIZE {
            return Err(LedgerError::InvalidConfig(format!(
                "difficulty {} exceeds digest width {}",
                self.difficulty, HASH_HEX_SIZE
            )));
        }
        if self.max_nonce_attempts == Some(0) {
            return Err(LedgerError::InvalidConfig(
                "max_nonce_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
