#[derive(thiserror::Error, Debug)]
pub enum AlienTilesError {
    /// Error when building a ring or solver with a modulus it cannot handle.
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Empty or ragged grids, or a toggle matrix whose shape differs from the cells.
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Toggle matrix leaves {} non-zero cell(s), first at {:?}", .nonzero.len(), .nonzero.first())]
    VerificationFailed { nonzero: Vec<(usize, usize)> },

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
