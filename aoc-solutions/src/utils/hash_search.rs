//! Brute-force MD5 search for a zero-prefixed digest.
//!
//! Candidates `n = 1, 2, 3, ...` are appended in decimal to a secret prefix
//! and hashed; the first `n` whose digest starts with `k` zero nibbles
//! (`4 * k` zero bits) wins.
//!
//! The check never formats the digest as hex. With `k` nibbles required,
//! `k / 2` leading bytes must be zero, and when `k` is odd the high nibble of
//! the next byte must be zero too, i.e. that byte is below `0x10`:
//!
//! ```text
//! k = 5:  00 00 0? ..   bytes[0] == 0, bytes[1] == 0, bytes[2] < 0x10
//! k = 6:  00 00 00 ..   bytes[0..3] all zero
//! ```
//!
//! Every iteration rewrites only the digit tail of one scratch buffer, so
//! the prefix is copied once per search instead of once per candidate.

use rayon::prelude::*;
use std::io::Write;
use thiserror::Error;

/// Widest decimal rendering of a `u64` (`18446744073709551615`)
pub const MAX_DECIMAL_DIGITS: usize = 20;

/// A 128-bit digest has 32 nibbles
pub const MAX_ZERO_NIBBLES: u8 = 32;

/// Candidates handed to the worker pool per round by default
pub const DEFAULT_BATCH_SIZE: u64 = 1 << 16;

/// Reasons a hash search can stop without a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HashSearchError {
    /// The decimal rendering of the counter did not fit the scratch tail
    #[error("candidate {0} does not fit the {MAX_DECIMAL_DIGITS}-digit scratch buffer")]
    FormatOverflow(u64),
    /// No 128-bit digest has more than 32 leading zero nibbles
    #[error("{0} leading zero nibbles can never be satisfied by a 128-bit digest")]
    UnsatisfiableTarget(u8),
    /// Every `u64` candidate was tried
    #[error("search space exhausted without a match")]
    Exhausted,
}

/// Check whether `digest` starts with `zero_nibbles` zero nibbles.
#[inline]
pub fn has_zero_nibble_prefix(digest: &[u8; 16], zero_nibbles: u8) -> bool {
    let whole_bytes = usize::from(zero_nibbles / 2);
    if whole_bytes > digest.len() {
        return false;
    }
    if digest[..whole_bytes].iter().any(|&b| b != 0) {
        return false;
    }
    if zero_nibbles % 2 == 1 {
        return digest.get(whole_bytes).is_some_and(|&b| b < 0x10);
    }
    true
}

/// Prefix plus a fixed-width digit tail, owned by one search (or one worker).
struct Scratch {
    buf: Vec<u8>,
    prefix_len: usize,
}

impl Scratch {
    fn new(prefix: &[u8]) -> Self {
        let mut buf = Vec::with_capacity(prefix.len() + MAX_DECIMAL_DIGITS);
        buf.extend_from_slice(prefix);
        buf.resize(prefix.len() + MAX_DECIMAL_DIGITS, 0);
        Self {
            buf,
            prefix_len: prefix.len(),
        }
    }

    /// Render `n` after the prefix and return the bytes to hash.
    fn message(&mut self, n: u64) -> Result<&[u8], HashSearchError> {
        let mut tail = &mut self.buf[self.prefix_len..];
        write!(tail, "{n}").map_err(|_| HashSearchError::FormatOverflow(n))?;
        let unused = tail.len();
        let end = self.buf.len() - unused;
        Ok(&self.buf[..end])
    }

    fn matches(&mut self, n: u64, zero_nibbles: u8) -> Result<bool, HashSearchError> {
        let digest = md5::compute(self.message(n)?);
        Ok(has_zero_nibble_prefix(&digest.0, zero_nibbles))
    }
}

fn check_target(zero_nibbles: u8) -> Result<(), HashSearchError> {
    if zero_nibbles > MAX_ZERO_NIBBLES {
        Err(HashSearchError::UnsatisfiableTarget(zero_nibbles))
    } else {
        Ok(())
    }
}

/// Find the smallest positive `n` such that `md5(prefix || n)` starts with
/// `zero_nibbles` zero nibbles.
///
/// Candidates are tested in strictly increasing order starting at 1, so the
/// result is always the minimum. `zero_nibbles == 0` returns 1.
pub fn find_first_match(prefix: &[u8], zero_nibbles: u8) -> Result<u64, HashSearchError> {
    check_target(zero_nibbles)?;
    if zero_nibbles == 0 {
        return Ok(1);
    }

    let mut scratch = Scratch::new(prefix);
    for n in 1..=u64::MAX {
        if scratch.matches(n, zero_nibbles)? {
            tracing::debug!(zero_nibbles, n, "hash search hit");
            return Ok(n);
        }
    }
    Err(HashSearchError::Exhausted)
}

/// Parallel variant of [`find_first_match`] returning the same value.
///
/// The counter range is cut into consecutive batches of `batch_size`
/// candidates. Each batch is searched on the rayon pool with `find_first`,
/// which keeps the lowest hit of the batch and stops the other workers once
/// no lower candidate can win. The next batch only starts when the current
/// one had no hit, so no candidate below the answer is ever skipped.
pub fn find_first_match_parallel(
    prefix: &[u8],
    zero_nibbles: u8,
    batch_size: u64,
) -> Result<u64, HashSearchError> {
    check_target(zero_nibbles)?;
    if zero_nibbles == 0 {
        return Ok(1);
    }

    let batch_size = batch_size.max(1);
    let mut start: u64 = 1;
    loop {
        let end = start.saturating_add(batch_size);
        let hit = (start..end)
            .into_par_iter()
            .map_init(
                || Scratch::new(prefix),
                |scratch, n| scratch.matches(n, zero_nibbles).map(|ok| ok.then_some(n)),
            )
            .find_first(|outcome| !matches!(outcome, Ok(None)));

        match hit {
            Some(Ok(Some(n))) => {
                tracing::debug!(zero_nibbles, n, batch_start = start, "parallel hash search hit");
                return Ok(n);
            }
            Some(Err(e)) => return Err(e),
            Some(Ok(None)) | None => {}
        }

        if end == u64::MAX {
            return Err(HashSearchError::Exhausted);
        }
        start = end;
    }
}
