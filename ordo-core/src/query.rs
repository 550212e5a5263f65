/// A parameter tag a primitive can be queried for (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Valid key length in bytes.
    KeyLen,
    /// Block size in bytes.
    BlockSize,
    /// Digest output length in bytes.
    DigestLen,
    /// IV length in bytes.
    IvLen,
}

/// Evaluate the query contract (spec §3) against a closed set of valid sizes, given in
/// ascending order.
///
/// - `query(tag, 0)` returns the smallest valid value.
/// - `query(tag, usize::MAX)` returns the largest valid value.
/// - `query(tag, n) == n` iff `n` is valid.
/// - If `n` is below the largest valid value, `query(tag, n) > n` (the next valid value upward).
/// - `query(tag, n + 1) == n` signals `n` is the maximum.
///
/// Returns `None` if `valid` is empty (the primitive does not answer this query).
#[must_use]
pub fn query_from_sizes(valid: &[usize], suggested: usize) -> Option<usize> {
    let &smallest = valid.first()?;
    if suggested <= smallest {
        return Some(smallest);
    }
    // First valid value >= suggested, else the largest (covers `suggested == usize::MAX`).
    valid
        .iter()
        .copied()
        .find(|&v| v >= suggested)
        .or_else(|| valid.last().copied())
}

/// Evaluate the query contract over a contiguous inclusive range `[min, max]`, e.g. RC4's
/// `KeyLen` range of `5..=256`.
#[must_use]
pub fn query_from_range(min: usize, max: usize, suggested: usize) -> Option<usize> {
    if min > max {
        return None;
    }
    if suggested <= min {
        Some(min)
    } else if suggested > max {
        Some(max)
    } else {
        Some(suggested)
    }
}

#[cfg(test)]
mod tests {
    use super::{query_from_range, query_from_sizes};

    #[test]
    fn sizes_smallest_and_largest() {
        let sizes = &[16, 24, 32];
        assert_eq!(query_from_sizes(sizes, 0), Some(16));
        assert_eq!(query_from_sizes(sizes, usize::MAX), Some(32));
    }

    #[test]
    fn sizes_exact_and_next_upward() {
        let sizes = &[16, 24, 32];
        assert_eq!(query_from_sizes(sizes, 24), Some(24));
        assert_eq!(query_from_sizes(sizes, 17), Some(24));
        assert_eq!(query_from_sizes(sizes, 20), Some(24));
    }

    #[test]
    fn sizes_maximum_signal() {
        let sizes = &[16, 24, 32];
        // query(tag, n+1) == n signals n is the maximum: 32 is max, so query(33) must not be 33.
        assert_eq!(query_from_sizes(sizes, 33), Some(32));
    }

    #[test]
    fn range_contract() {
        assert_eq!(query_from_range(5, 256, 0), Some(5));
        assert_eq!(query_from_range(5, 256, usize::MAX), Some(256));
        assert_eq!(query_from_range(5, 256, 128), Some(128));
        assert_eq!(query_from_range(5, 256, 1), Some(5));
        assert_eq!(query_from_range(5, 256, 257), Some(256));
    }
}
