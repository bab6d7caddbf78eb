//! Error taxonomy for store and containment operations.

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the board store and containment engine.
///
/// Only structural mistakes (reused ids, negative geometry) are returned as
/// errors. Operations on unknown ids at the store boundary are recovered
/// locally as logged no-ops so a single bad reference never halts the
/// interaction loop.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Duplicate id: {0}")]
    DuplicateId(Uuid),
    #[error("Not found: {0}")]
    NotFound(Uuid),
    #[error("Invalid geometry: width={width}, height={height}")]
    InvalidGeometry { width: f64, height: f64 },
    #[error("Stuck operation force-terminated: {kind}")]
    StuckOperation { kind: String },
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
