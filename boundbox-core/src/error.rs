//! Error types for boundbox

use thiserror::Error;

/// Main error type for boundbox operations
///
/// Errors here are fatal for the current invocation only; batch drivers
/// report them and continue with the next object.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Degenerate hull: {0}")]
    DegenerateHull(String),
}

/// Result type alias for boundbox operations
pub type Result<T> = std::result::Result<T, Error>;
