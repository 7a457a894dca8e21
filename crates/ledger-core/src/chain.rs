use crate::block::Block;
use crate::config::ChainConfig;
use crate::constants::GENESIS_PREVIOUS_HASH;
use crate::error::{LedgerError, Result, ValidationError};
use crate::hashing::canonical_now;
use crate::pow::{count_leading_zero_hex, meets_difficulty};
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Append-only sequence of blocks rooted at an unmined genesis block.
///
/// Mutation goes through [`Chain::append`] only, which takes `&mut self`;
/// callers sharing a chain across threads must serialise access themselves.
///
/// Deserialising checks the config and requires at least one block, but does
/// not validate block contents; run [`Chain::validate`] on untrusted input.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawChain")]
pub struct Chain {
    blocks: Vec<Block>,
    config: ChainConfig,
}

#[derive(Deserialize)]
struct RawChain {
    blocks: Vec<Block>,
    config: ChainConfig,
}

impl TryFrom<RawChain> for Chain {
    type Error = LedgerError;

    fn try_from(raw: RawChain) -> Result<Self> {
        raw.config.validate()?;
        if raw.blocks.is_empty() {
            return Err(ValidationError::CorruptGenesis.into());
        }
        Ok(Self {
            blocks: raw.blocks,
            config: raw.config,
        })
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    /// Genesis-only chain at the default difficulty.
    pub fn new() -> Self {
        Self::with_genesis(ChainConfig::default())
    }

    pub fn with_config(config: ChainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_genesis(config))
    }

    fn with_genesis(config: ChainConfig) -> Self {
        let genesis = Block::genesis(canonical_now());
        debug!("Created genesis block with hash {}", genesis.hash());
        Self {
            blocks: vec![genesis],
            config,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false for a chain built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn difficulty(&self) -> usize {
        self.config.difficulty
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// # Panics
    ///
    /// If the chain has no blocks, which construction rules out.
    pub fn latest_block(&self) -> &Block {
        self.blocks
            .last()
            .expect("chain always holds at least the genesis block")
    }

    /// Mines a block holding `transactions` on top of the current tip and appends it.
    ///
    /// Fails only when the config caps nonce attempts and the cap is hit; the
    /// chain is left unchanged in that case.
    pub fn append(&mut self, transactions: Vec<Transaction>) -> Result<&Block> {
        let previous = self.latest_block();
        let mut block = Block::new(
            self.blocks.len() as u64,
            canonical_now(),
            transactions,
            previous.hash(),
        );

        match self.config.max_nonce_attempts {
            Some(cap) => {
                block.try_mine(self.config.difficulty, cap)?;
            }
            None => block.mine(self.config.difficulty),
        }

        debug!(
            "Appending block {} with {} transactions",
            block.index(),
            block.transactions().len()
        );
        self.blocks.push(block);
        Ok(self.latest_block())
    }

    /// True when every block after genesis re-hashes to its stored hash and
    /// links to its predecessor by hash and index.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Walks the chain from index 1 and reports the first fault.
    ///
    /// Genesis is trusted as-is and the difficulty target is not re-checked;
    /// see [`Chain::validate_strict`] for both.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        for (i, pair) in self.blocks.windows(2).enumerate() {
            let (previous, current) = (&pair[0], &pair[1]);
            let index = i + 1;

            if current.hash() != current.content_hash() {
                return Err(Self::reject(ValidationError::HashMismatch { index }));
            }
            if current.previous_hash() != previous.hash() {
                return Err(Self::reject(ValidationError::BrokenLink { index }));
            }
            let expected = previous.index() + 1;
            if current.index() != expected {
                return Err(Self::reject(ValidationError::IndexGap {
                    index,
                    expected,
                    found: current.index(),
                }));
            }
        }
        Ok(())
    }

    /// [`Chain::validate`] plus genesis integrity and proof-of-work on every
    /// later block.
    pub fn validate_strict(&self) -> std::result::Result<(), ValidationError> {
        let genesis = self.blocks.first().ok_or(ValidationError::CorruptGenesis)?;
        if genesis.index() != 0
            || genesis.previous_hash() != GENESIS_PREVIOUS_HASH
            || !genesis.transactions().is_empty()
            || !genesis.is_hash_consistent()
        {
            return Err(Self::reject(ValidationError::CorruptGenesis));
        }

        self.validate()?;

        let difficulty = self.config.difficulty;
        for (index, block) in self.blocks.iter().enumerate().skip(1) {
            if !meets_difficulty(block.hash(), difficulty) {
                return Err(Self::reject(ValidationError::InsufficientWork {
                    index,
                    difficulty,
                    found: count_leading_zero_hex(block.hash()),
                }));
            }
        }
        Ok(())
    }

    fn reject(err: ValidationError) -> ValidationError {
        warn!("Chain validation failed: {}", err);
        err
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
