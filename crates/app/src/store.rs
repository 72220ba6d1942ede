//! Storage seam shared by every repository trait.
//!
//! The bundled repositories are in-memory tables behind `parking_lot` locks;
//! each trait method holds a single lock scope so mutations stay atomic and
//! concurrent usage increments cannot lose updates. Real backends surface
//! their failures through [`StorageError`]; the memory store never produces
//! one.

use thiserror::Error;

/// Opaque backend failure surfaced by repository implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store failed to execute an operation.
    #[error("storage backend failure: {0}")]
    Backend(String),
}
