//! # min-edit-distance
//!
//! Weighted minimum edit distance (Levenshtein distance) with configurable
//! insertion, deletion and replacement costs.
//!
//! The distance is the minimum total cost of single-symbol edits that turn
//! `source` into `target`. Matching symbols are free; every other operation
//! is charged according to a [`CostModel`].
//!
//! ## Example
//!
//! ```rust
//! use min_edit_distance::prelude::*;
//!
//! // Reference model: insert 1, delete 1, replace 2.
//! let costs = CostModel::default();
//! assert_eq!(min_edit_distance("kitten", "sitting", &costs).unwrap(), 5);
//!
//! // Classical unit-cost Levenshtein distance.
//! assert_eq!(min_edit_distance("kitten", "sitting", &CostModel::unit()).unwrap(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod cost;
pub mod distance;
pub mod error;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "parallel")]
pub use batch::batch_distances;
pub use batch::batch_distances_sequential;
pub use cost::{CostModel, Operation};
pub use distance::{compute_distance, min_edit_distance, min_edit_distance_bytes, CostTable};
pub use error::{DistanceError, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::cost::{CostModel, Operation};
    pub use crate::distance::{
        compute_distance, min_edit_distance, min_edit_distance_bytes, CostTable,
    };
    pub use crate::error::DistanceError;

    #[cfg(feature = "parallel")]
    pub use crate::batch::batch_distances;
    pub use crate::batch::batch_distances_sequential;
}
