//! Hash-chained, proof-of-work ledger engine.
//!
//! Transactions are hashed with SHA3-256, blocks with SHA-256, and each block
//! carries the hash of its predecessor. Appending to a [`Chain`] mines the new
//! block until its hex hash starts with the configured number of `'0'`
//! characters.

pub mod block;
pub mod chain;
pub mod config;
pub mod constants;
pub mod error;
pub mod hashing;
pub mod mine;
pub mod pow;
pub mod transaction;

pub use block::Block;
pub use chain::Chain;
pub use config::ChainConfig;
pub use error::{LedgerError, MiningError, Result, ValidationError};
pub use transaction::{Amount, Transaction};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn fixed_txs() -> Vec<Transaction> {
        let ts = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
        vec![
            Transaction::with_timestamp("Alice", "Bob", 10, ts),
            Transaction::with_timestamp("Bob", "Charlie", 5, ts),
        ]
    }

    #[test]
    fn transaction_serialization_example() {
        let tx = fixed_txs().remove(0);
        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains(r#""sender":"Alice""#));
        assert!(json.contains(r#""receiver":"Bob""#));
        assert!(json.contains(r#""amount":10"#));
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, deserialized);
        assert_eq!(tx.content_hash(), deserialized.content_hash());
    }

    #[test]
    fn block_serialization_example() {
        let ts = Utc.timestamp_opt(1_600_000_200, 0).unwrap();
        let mut block = Block::new(1, ts, fixed_txs(), "0");
        block.mine(1);
        let json = serde_json::to_string(&block).unwrap();
        let deserialized: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(block, deserialized);
        assert!(deserialized.is_hash_consistent());
    }

    #[test]
    fn chain_serialization_preserves_validity() {
        let mut chain = Chain::with_config(ChainConfig::with_difficulty(1)).unwrap();
        chain.append(fixed_txs()).unwrap();
        chain.append(Vec::new()).unwrap();
        let json = serde_json::to_string(&chain).unwrap();
        let restored: Chain = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.blocks(), chain.blocks());
        assert_eq!(restored.difficulty(), 1);
        assert!(restored.is_valid());
    }

    #[test]
    fn transaction_and_block_digests_are_independent() {
        let tx = fixed_txs().remove(0);
        let block = Block::genesis(tx.timestamp());
        assert_eq!(tx.content_hash().len(), constants::HASH_HEX_SIZE);
        assert_eq!(block.hash().len(), constants::HASH_HEX_SIZE);
        assert_ne!(
            hashing::hex_digest::<hashing::TransactionDigest>("x"),
            hashing::hex_digest::<hashing::BlockDigest>("x")
        );
    }
}
