use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MiningError {
    #[error("difficulty {difficulty} exceeds the {max} hex characters of a digest")]
    DifficultyOutOfRange { difficulty: usize, max: usize },
    #[error("no valid nonce found after {attempts} attempts")]
    NonceExhausted { attempts: u64 },
}

/// First structural fault found while walking a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("block {index}: stored hash does not match its contents")]
    HashMismatch { index: usize },
    #[error("block {index}: previous hash does not match its predecessor")]
    BrokenLink { index: usize },
    #[error("block {index}: expected index {expected}, found {found}")]
    IndexGap {
        index: usize,
        expected: u64,
        found: u64,
    },
    #[error("genesis block is corrupt")]
    CorruptGenesis,
    #[error("block {index}: hash has {found} leading zeros, difficulty {difficulty} requires more")]
    InsufficientWork {
        index: usize,
        difficulty: usize,
        found: usize,
    },
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Mining(#[from] MiningError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
