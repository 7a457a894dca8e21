pub const HASH_SIZE: usize = 32;
pub const HASH_HEX_SIZE: usize = HASH_SIZE * 2;
pub const GENESIS_PREVIOUS_HASH: &str = "0";
pub const POW_TARGET_DIFFICULTY: usize = 2;
pub const TIMESTAMP_FRACTION_DIGITS: u16 = 6;
