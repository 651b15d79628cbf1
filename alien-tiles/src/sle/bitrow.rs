//! Fixed-capacity bit rows over GF(2).
//!
//! A [`BitRow`] packs one equation (or one solution vector) into 64-bit words so that
//! adding two rows is a word-wise XOR, independent of how many columns fit in a word.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ring::Vector;

const WORD_BITS: usize = u64::BITS as usize;

/// A vector over GF(2) with a fixed number of logical bits.
///
/// Bit `i` lives in `words[i / 64]` at position `i % 64`. Bits past `len` are always zero.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitRow {
    words: Vec<u64>,
    len: usize,
}

impl BitRow {
    /// Creates a zero row with `len` bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Creates a row with only bit `bit` set.
    pub fn singleton(len: usize, bit: usize) -> Self {
        let mut row = Self::zeros(len);
        row.set(bit, true);
        row
    }

    /// Packs the parity (value mod 2) of each entry.
    ///
    /// # Example
    ///
    /// ```
    /// # use alien_tiles::sle::BitRow;
    /// let row = BitRow::from_parities(&[3, 2, -1, 0]);
    /// assert_eq!(row.to_vector(), vec![1, 0, 1, 0]);
    /// ```
    pub fn from_parities(values: &[i64]) -> Self {
        let mut row = Self::zeros(values.len());
        for (i, &v) in values.iter().enumerate() {
            if v.rem_euclid(2) == 1 {
                row.set(i, true);
            }
        }
        row
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns bit `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn get(&self, i: usize) -> bool {
        assert!(i < self.len, "bit index {} out of range (len={})", i, self.len);
        (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1
    }

    /// Sets bit `i` to `value`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn set(&mut self, i: usize, value: bool) {
        assert!(i < self.len, "bit index {} out of range (len={})", i, self.len);
        let mask = 1u64 << (i % WORD_BITS);
        if value {
            self.words[i / WORD_BITS] |= mask;
        } else {
            self.words[i / WORD_BITS] &= !mask;
        }
    }

    /// Adds `other` into this row over GF(2).
    ///
    /// # Panics
    /// Panics if lengths differ.
    pub fn xor_assign(&mut self, other: &Self) {
        assert_eq!(
            self.len, other.len,
            "xor_assign: length mismatch ({} vs {})",
            self.len, other.len
        );
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a ^= b;
        }
    }

    /// Returns `self + other` over GF(2).
    pub fn xor(&self, other: &Self) -> Self {
        let mut sum = self.clone();
        sum.xor_assign(other);
        sum
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns `true` if any of the bits `0..bound` is set.
    pub fn any_below(&self, bound: usize) -> bool {
        let bound = bound.min(self.len);
        let full = bound / WORD_BITS;
        if self.words[..full].iter().any(|&w| w != 0) {
            return true;
        }
        let rest = bound % WORD_BITS;
        rest != 0 && self.words[full] & ((1u64 << rest) - 1) != 0
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Copies this row and appends one extra bit, e.g. the right-hand side of an equation.
    pub fn augmented(&self, extra: bool) -> Self {
        let mut row = Self::zeros(self.len + 1);
        row.words[..self.words.len()].copy_from_slice(&self.words);
        row.set(self.len, extra);
        row
    }

    /// Unpacks into a `Vector` of zeros and ones.
    pub fn to_vector(&self) -> Vector {
        (0..self.len).map(|i| self.get(i) as i64).collect()
    }
}

impl fmt::Debug for BitRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitRow[")?;
        for i in 0..self.len {
            write!(f, "{}", self.get(i) as u8)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_across_words() {
        let mut row = BitRow::zeros(130);
        row.set(0, true);
        row.set(64, true);
        row.set(129, true);
        assert!(row.get(0) && row.get(64) && row.get(129));
        assert!(!row.get(1) && !row.get(63) && !row.get(128));
        assert_eq!(row.count_ones(), 3);

        row.set(64, false);
        assert!(!row.get(64));
    }

    #[test]
    fn test_xor_is_addition_mod_two() {
        let a = BitRow::from_parities(&[1, 1, 0, 0]);
        let b = BitRow::from_parities(&[1, 0, 1, 0]);
        assert_eq!(a.xor(&b).to_vector(), vec![0, 1, 1, 0]);
        assert!(a.xor(&a).is_zero());
    }

    #[test]
    #[should_panic]
    fn test_xor_length_mismatch_panics() {
        let mut a = BitRow::zeros(3);
        a.xor_assign(&BitRow::zeros(4));
    }

    #[test]
    fn test_any_below() {
        let row = BitRow::singleton(70, 66);
        assert!(!row.any_below(66));
        assert!(row.any_below(67));
        assert!(!BitRow::zeros(64).any_below(64));
        assert!(BitRow::singleton(64, 63).any_below(64));
    }

    #[test]
    fn test_augmented_appends_bit() {
        let row = BitRow::from_parities(&[1; 64]);
        let aug = row.augmented(true);
        assert_eq!(aug.len(), 65);
        assert!(aug.get(64));
        assert!(aug.any_below(64));
        assert!(!BitRow::zeros(5).augmented(true).any_below(5));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(
            format!("{:?}", BitRow::from_parities(&[1, 0, 1])),
            "BitRow[101]"
        );
    }
}
