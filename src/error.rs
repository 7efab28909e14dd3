//! Error types for edit distance computation.

use thiserror::Error;

use crate::cost::Operation;

/// Errors that can occur while validating a cost model or computing a distance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// A cost supplied through a signed boundary (config file, CLI) was negative.
    ///
    /// Negative costs would allow "distances" below zero, so they are rejected
    /// instead of being clamped.
    #[error("{operation} cost must be non-negative, got {value}")]
    NegativeCost {
        /// The edit operation whose cost was invalid.
        operation: Operation,
        /// The rejected value.
        value: i64,
    },

    /// A cost supplied through a signed boundary does not fit in `usize`.
    ///
    /// Only reachable where `usize` is narrower than `i64`.
    #[error("{operation} cost {value} exceeds the maximum of {max}", max = usize::MAX)]
    CostTooLarge {
        /// The edit operation whose cost was invalid.
        operation: Operation,
        /// The rejected value.
        value: i64,
    },

    /// The cost table for the given inputs cannot be allocated.
    #[error("cost table of {rows}x{cols} cells cannot be allocated")]
    TableTooLarge {
        /// Number of rows requested (`source.len() + 1`).
        rows: usize,
        /// Number of columns requested (`target.len() + 1`).
        cols: usize,
    },

    /// A cost for these inputs does not fit in `usize`.
    #[error(
        "distance between sequences of length {source_len} and {target_len} exceeds usize with the given costs"
    )]
    Overflow {
        /// Length of the source sequence.
        source_len: usize,
        /// Length of the target sequence.
        target_len: usize,
    },
}

/// A specialized `Result` type for distance operations.
pub type Result<T> = std::result::Result<T, DistanceError>;
