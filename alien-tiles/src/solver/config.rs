use serde::{Deserialize, Serialize};

use crate::errors::AlienTilesError;
use crate::ring::Ring;

/// Search configuration for one solver.
///
/// The caps are the only termination guarantee of the heuristic branches; lower them to bound
/// running time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Toggle cycle length. 4 for Alien Tiles; 2 is accepted as the degenerate case.
    pub modulus: u64,
    /// Largest free dimension enumerated exhaustively, per stage.
    pub max_enum_bits: u32,
    /// Enumerate exactly when under `max_enum_bits`; otherwise always use the heuristic.
    pub exact_minimize: bool,
    /// Random mod-2 candidates drawn in heuristic mode.
    pub sample_cap: usize,
    /// Local-search iteration bound in heuristic mode.
    pub iteration_cap: usize,
    /// Consecutive non-improving iterations before a random perturbation.
    pub patience: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            modulus: 4,
            max_enum_bits: 20,
            exact_minimize: true,
            sample_cap: 512,
            iteration_cap: 2000,
            patience: 10,
        }
    }
}

impl SolverConfig {
    /// Creates a validated configuration.
    pub fn try_with(
        modulus: u64,
        max_enum_bits: u32,
        exact_minimize: bool,
        sample_cap: usize,
        iteration_cap: usize,
        patience: usize,
    ) -> Result<Self, AlienTilesError> {
        let config = Self {
            modulus,
            max_enum_bits,
            exact_minimize,
            sample_cap,
            iteration_cap,
            patience,
        };
        config.validate()?;

        Ok(config)
    }

    /// Parses a JSON document; absent fields keep their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// # use alien_tiles::solver::SolverConfig;
    /// let config = SolverConfig::from_json(r#"{ "max_enum_bits": 8 }"#).unwrap();
    /// assert_eq!(config.max_enum_bits, 8);
    /// assert_eq!(config.modulus, 4);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, AlienTilesError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    /// Checks modulus and caps.
    ///
    /// # Errors
    ///
    /// Returns `AlienTilesError::InvalidModulus` unless the modulus is 2 or 4, and
    /// `AlienTilesError::InvalidParameters` if `max_enum_bits` exceeds 63 or `patience` is zero.
    pub fn validate(&self) -> Result<(), AlienTilesError> {
        if self.modulus != 2 && self.modulus != 4 {
            return Err(AlienTilesError::InvalidModulus(format!(
                "Only moduli 2 and 4 can be lifted from GF(2), got {}",
                self.modulus
            )));
        }

        if self.max_enum_bits > 63 {
            return Err(AlienTilesError::InvalidParameters(format!(
                "max_enum_bits must be at most 63, got {}",
                self.max_enum_bits
            )));
        }

        if self.patience == 0 {
            return Err(AlienTilesError::InvalidParameters(
                "patience must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    /// The ring toggle counts live in.
    pub fn ring(&self) -> Result<Ring, AlienTilesError> {
        Ring::try_with(self.modulus)
    }
}
