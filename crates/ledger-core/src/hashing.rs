use crate::constants::TIMESTAMP_FRACTION_DIGITS;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sha2::Digest;

/// Digest over transaction contents.
pub type TransactionDigest = sha3::Sha3_256;
/// Digest over block contents and linkage. Kept distinct from [`TransactionDigest`].
pub type BlockDigest = sha2::Sha256;

/// Hash `input` with `D` and render it as lowercase hex.
pub fn hex_digest<D: Digest>(input: &str) -> String {
    hex::encode(D::digest(input.as_bytes()))
}

/// Canonical timestamp encoding used in every hash preimage,
/// e.g. `2024-01-02T03:04:05.123456Z`.
pub fn canonical_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current instant at the precision the canonical encoding preserves.
pub(crate) fn canonical_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(TIMESTAMP_FRACTION_DIGITS)
}
