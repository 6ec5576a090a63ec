//! Kernel error types.

use thiserror::Error;

/// Errors raised by body construction and merging.
///
/// The numerical core has no recoverable errors in normal operation;
/// these signal precondition violations that would otherwise propagate
/// NaN/Inf through the force law.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimError {
    /// A body was constructed or merged with a mass that is not
    /// strictly positive.
    #[error("body mass must be positive, got {0}")]
    NonPositiveMass(f64),
}
