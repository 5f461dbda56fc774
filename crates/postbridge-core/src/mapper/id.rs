//! Identifier generation
//!
//! Postman only checks that identifiers look like UUIDs (8-4-4-4-12), so
//! these are not RFC 4122 values. The first group is a random eight digit
//! decimal number; the other four are slices of a SHA-256 digest of the
//! current time in nanoseconds combined with a per-generator counter.

use chrono::Utc;
use rand::Rng;
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};

/// Produces identifiers that differ across calls within a run
#[derive(Debug, Default)]
pub struct IdGenerator {
    sequence: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let leading: u32 = rand::thread_rng().gen_range(10_000_000..=99_999_999);
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();

        let digest = hex::encode(Sha256::digest(format!("{}:{}", nanos, sequence)));

        format!(
            "{}-{}-{}-{}-{}",
            leading,
            &digest[0..4],
            &digest[4..8],
            &digest[8..12],
            &digest[12..24]
        )
    }
}
