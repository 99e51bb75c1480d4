//! Cart line id generation.
//!
//! Ids come from an injected [`LineIdGenerator`] rather than a global
//! random source, so tests and callers control them.

use chrono::{DateTime, Utc};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::{Digest, Sha256};

/// Base36 alphabet (0-9, a-z).
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Produces unique ids for new cart lines.
pub trait LineIdGenerator {
    /// Returns a fresh id. `item_id` is the menu item the line is for.
    fn next_id(&mut self, item_id: &str) -> String;
}

/// Monotonic ids: `line-1`, `line-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("line")
    }
}

impl LineIdGenerator for SequentialIds {
    fn next_id(&mut self, _item_id: &str) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Content-hash ids: SHA-256 over item id, session timestamp and a nonce,
/// base36-encoded.
#[derive(Debug, Clone)]
pub struct HashIds {
    prefix: String,
    seed: DateTime<Utc>,
    nonce: u64,
    length: usize,
}

impl HashIds {
    pub fn new(prefix: impl Into<String>, seed: DateTime<Utc>) -> Self {
        Self {
            prefix: prefix.into(),
            seed,
            nonce: 0,
            length: 6,
        }
    }

    /// Sets the hash length; values outside 3..=8 fall back to 6.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = if (3..=8).contains(&length) { length } else { 6 };
        self
    }
}

impl LineIdGenerator for HashIds {
    fn next_id(&mut self, item_id: &str) -> String {
        let id = generate_hash_id(&self.prefix, item_id, self.seed, self.nonce, self.length);
        self.nonce += 1;
        id
    }
}

/// Converts a byte slice to a base36 string of the specified length.
pub fn encode_base36(data: &[u8], length: usize) -> String {
    let mut num = BigUint::from_bytes_be(data);
    let base = BigUint::from(36u32);
    let zero = BigUint::zero();

    let mut chars: Vec<u8> = Vec::with_capacity(length);
    while num > zero {
        let rem = &num % &base;
        num /= &base;
        let digits = rem.to_u32_digits();
        let i = digits.first().copied().unwrap_or(0) as usize;
        chars.push(BASE36_ALPHABET[i]);
    }
    chars.reverse();

    // Base36 digits are ASCII.
    let mut s: String = chars.into_iter().map(char::from).collect();

    if s.len() < length {
        s = "0".repeat(length - s.len()) + &s;
    }
    // Keep the least significant digits.
    if s.len() > length {
        s = s[s.len() - length..].to_owned();
    }
    s
}

/// Creates a hash-based line id, `prefix-xxxxxx`.
pub fn generate_hash_id(
    prefix: &str,
    item_id: &str,
    seed: DateTime<Utc>,
    nonce: u64,
    length: usize,
) -> String {
    let content = format!(
        "{}|{}|{}",
        item_id,
        seed.timestamp_nanos_opt().unwrap_or(0),
        nonce
    );
    let hash = Sha256::digest(content.as_bytes());

    // Enough bytes to fill `length` base36 digits.
    let num_bytes = match length {
        3 => 2,
        4 => 3,
        5 | 6 => 4,
        _ => 5,
    };

    format!("{}-{}", prefix, encode_base36(&hash[..num_bytes], length))
}
