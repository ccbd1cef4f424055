//! Assorted utilities and helpers.

/// Default upper bound on the sequence length a [`Session`](crate::Session)
/// accepts.
///
/// A trace can hold up to `n(n-1)/2 + 2` steps, each carrying a copy of the
/// sequence and of the length table (`16n` bytes on 64-bit targets), so
/// memory grows cubically with the input. A strictly ascending input at this
/// limit records 19 902 steps, roughly 64 MB of snapshots.
pub const DEFAULT_MAX_LEN: usize = 200;

/// Returns true if every element is strictly greater than the one before it.
#[inline]
pub fn is_strictly_increasing(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

/// Returns the positions in `haystack` that spell out `needle` in order,
/// matching each element at the earliest possible position.
///
/// `None` if `needle` is not a subsequence of `haystack`.
pub fn subsequence_positions(needle: &[i64], haystack: &[i64]) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(needle.len());
    let mut from = 0;
    for &value in needle {
        let offset = haystack[from..].iter().position(|&h| h == value)?;
        positions.push(from + offset);
        from += offset + 1;
    }
    Some(positions)
}
