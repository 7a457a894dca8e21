#![allow(dead_code)]

use ledger_core::{Chain, ChainConfig, Transaction};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber once per test binary; `RUST_LOG` controls output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn alice_bob_charlie() -> Vec<Transaction> {
    vec![
        Transaction::new("Alice", "Bob", 10),
        Transaction::new("Bob", "Charlie", 5),
    ]
}

pub fn random_transactions(rng: &mut StdRng, count: usize) -> Vec<Transaction> {
    (0..count)
        .map(|i| {
            Transaction::new(
                format!("user-{}", rng.gen_range(0..100)),
                format!("user-{i}"),
                rng.gen_range(-1_000..1_000),
            )
        })
        .collect()
}

/// Chain at `difficulty` with `blocks` appended blocks of random transactions.
pub fn build_chain(difficulty: usize, blocks: usize, seed: u64) -> Chain {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut chain =
        Chain::with_config(ChainConfig::with_difficulty(difficulty)).expect("valid config");
    for _ in 0..blocks {
        let count = rng.gen_range(0..5);
        let txs = random_transactions(&mut rng, count);
        chain.append(txs).expect("uncapped mining cannot fail");
    }
    chain
}
