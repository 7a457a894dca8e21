use crate::hashing::{canonical_now, canonical_timestamp, hex_digest, TransactionDigest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transfer quantity. Sign and range are not checked here.
pub type Amount = i64;

/// A transfer between two free-form identifiers, stamped when it is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub(crate) sender: String,
    pub(crate) receiver: String,
    pub(crate) amount: Amount,
    pub(crate) timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, receiver: impl Into<String>, amount: Amount) -> Self {
        Self::with_timestamp(sender, receiver, amount, canonical_now())
    }

    pub fn with_timestamp(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        amount: Amount,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
            timestamp,
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// SHA3-256 over `sender || receiver || amount || timestamp`.
    pub fn content_hash(&self) -> String {
        let preimage = format!(
            "{}{}{}{}",
            self.sender,
            self.receiver,
            self.amount,
            canonical_timestamp(&self.timestamp)
        );
        hex_digest::<TransactionDigest>(&preimage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 9, 13, 12, 26, 40).unwrap()
    }

    #[test]
    fn new_stores_fields_verbatim() {
        let tx = Transaction::new("Alice", "Bob", 10);
        assert_eq!(tx.sender(), "Alice");
        assert_eq!(tx.receiver(), "Bob");
        assert_eq!(tx.amount(), 10);
        assert!(tx.timestamp() <= Utc::now());
    }

    #[test]
    fn content_hash_matches_preimage() {
        let tx = Transaction::with_timestamp("Alice", "Bob", 10, fixed_ts());
        let expected =
            hex_digest::<TransactionDigest>("AliceBob102020-09-13T12:26:40.000000Z");
        assert_eq!(tx.content_hash(), expected);
    }

    #[test]
    fn content_hash_is_deterministic() {
        let tx = Transaction::new("Bob", "Charlie", 5);
        assert_eq!(tx.content_hash(), tx.content_hash());
        assert_eq!(tx.content_hash(), tx.clone().content_hash());
    }

    #[test]
    fn every_field_feeds_the_hash() {
        let base = Transaction::with_timestamp("Alice", "Bob", 10, fixed_ts());
        let variants = [
            Transaction::with_timestamp("Eve", "Bob", 10, fixed_ts()),
            Transaction::with_timestamp("Alice", "Charlie", 10, fixed_ts()),
            Transaction::with_timestamp("Alice", "Bob", 11, fixed_ts()),
            Transaction::with_timestamp(
                "Alice",
                "Bob",
                10,
                fixed_ts() + chrono::Duration::microseconds(1),
            ),
        ];
        for tx in variants {
            assert_ne!(tx.content_hash(), base.content_hash());
        }
    }

    #[test]
    fn negative_and_empty_inputs_are_accepted() {
        let tx = Transaction::new("", "", -42);
        assert_eq!(tx.amount(), -42);
        assert_eq!(tx.content_hash().len(), 64);
    }
}
