use thiserror::Error;

/// Errors raised by grid construction and state injection.
///
/// Everything else in the crate is infallible: ticks, accessors, threshold
/// changes and resets cannot fail on a validly constructed engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A requested axis length was below the minimum of 1.
    #[error("invalid grid size: every axis length must be at least 1")]
    InvalidSize,

    /// An injected structure did not match the grid's shape on some axis.
    /// Validation runs before any write, so a rejected injection leaves the
    /// grid untouched.
    #[error("shape mismatch on axis {axis}: expected {expected}, got {got}")]
    ShapeMismatch {
        axis: usize,
        expected: usize,
        got: usize,
    },
}
