use thiserror::Error;

use crate::graph::PolygonId;

/// Top-level error type for the sightline crate.
#[derive(Debug, Error)]
pub enum SightlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to graph construction and insertion.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("polygon {0} is not registered in the graph")]
    PolygonNotFound(PolygonId),

    #[error("edge is not part of polygon {polygon}")]
    EdgeNotInPolygon { polygon: PolygonId },
}

/// Errors related to path queries.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("destination is unreachable from origin")]
    Unreachable,
}

/// Convenience type alias for results using [`SightlineError`].
pub type Result<T> = std::result::Result<T, SightlineError>;
