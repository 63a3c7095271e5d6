use thiserror::Error;

/// Top-level error type for the hessian geometry core.
#[derive(Debug, Error)]
pub enum HessianError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`HessianError`].
pub type Result<T> = std::result::Result<T, HessianError>;
