use crate::sle::BitRow;

/// Lazy walk over `particular + span(basis)`, one solution at a time.
///
/// Combinations are visited in Gray-code order: consecutive items differ by exactly one basis
/// vector, so each step is a single XOR and nothing beyond the current row is materialized.
/// The walk yields `2^k` items for `k` basis vectors (unbounded in practice past 127).
#[derive(Debug, Clone)]
pub struct Span {
    current: BitRow,
    basis: Vec<BitRow>,
    index: u128,
    limit: u128,
}

impl Span {
    pub fn new(particular: BitRow, basis: Vec<BitRow>) -> Self {
        let limit = u32::try_from(basis.len())
            .ok()
            .and_then(|k| 1u128.checked_shl(k))
            .unwrap_or(u128::MAX);

        Self {
            current: particular,
            basis,
            index: 0,
            limit,
        }
    }

    /// Number of solutions in the space, if it fits in a `u128`.
    pub fn total(&self) -> Option<u128> {
        (self.basis.len() < 128).then_some(self.limit)
    }
}

impl Iterator for Span {
    type Item = BitRow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.limit {
            return None;
        }
        if self.index > 0 {
            let flipped = self.index.trailing_zeros() as usize;
            self.current.xor_assign(&self.basis[flipped]);
        }
        self.index += 1;
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit - self.index;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
