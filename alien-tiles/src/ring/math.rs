//! Arithmetic in Z_k for tile values and toggle counts.

use crate::errors::AlienTilesError;

use serde::{Deserialize, Serialize};

/// The ring Z_k that tile values live in. A tile toggled `k` times is back where it started.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Default for Ring {
    fn default() -> Self {
        Ring { modulus: 4 }
    }
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, AlienTilesError> {
        if modulus <= 1 || modulus > i64::MAX as u64 {
            return Err(AlienTilesError::InvalidModulus(format!(
                "Modulus must be in 2..=i64::MAX, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use alien_tiles::ring::Ring;
    /// let ring = Ring::try_with(4).unwrap();
    /// assert_eq!(ring.modulus(), 4);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces any integer into `[0, modulus)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use alien_tiles::ring::Ring;
    /// let ring = Ring::try_with(4).unwrap();
    /// assert_eq!(ring.normalize(7), 3);
    /// assert_eq!(ring.normalize(-1), 3);
    /// assert_eq!(ring.normalize(-8), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus as i64)
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use alien_tiles::ring::Ring;
    /// let ring = Ring::try_with(4).unwrap();
    /// assert_eq!(ring.add(3, 3), 2);
    /// assert_eq!(ring.add(-1, 1), 0);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let total = self.normalize(a) as i128 + self.normalize(b) as i128;

        total.rem_euclid(self.modulus as i128) as i64
    }

    /// Computes `(a - b) mod modulus`.
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let difference = self.normalize(a) as i128 - self.normalize(b) as i128;

        difference.rem_euclid(self.modulus as i128) as i64
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally so large moduli cannot overflow before the reduction.
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let product = self.normalize(a) as i128 * self.normalize(b) as i128;

        product.rem_euclid(self.modulus as i128) as i64
    }

    /// Computes the additive inverse `-a mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use alien_tiles::ring::Ring;
    /// let ring = Ring::try_with(4).unwrap();
    /// assert_eq!(ring.neg(1), 3);
    /// assert_eq!(ring.neg(0), 0);
    /// assert_eq!(ring.neg(2), 2);
    /// ```
    pub fn neg(&self, a: i64) -> i64 {
        self.sub(0, a)
    }

    /// Sums a sequence of values, reducing as it goes.
    pub fn sum<I: IntoIterator<Item = i64>>(&self, values: I) -> i64 {
        values.into_iter().fold(0, |acc, v| self.add(acc, v))
    }

    /// Returns `true` when `modulus` is 2, i.e. a mod-2 solution needs no lift.
    pub fn is_binary(&self) -> bool {
        self.modulus == 2
    }
}
