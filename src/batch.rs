//! Distances for many independent pairs.
//!
//! Each pair is computed independently with its own working rows, so pairs can
//! be spread across threads without coordination. Output order always matches
//! input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cost::CostModel;
use crate::distance::min_edit_distance;
use crate::error::Result;

/// Compute the distance of every `(source, target)` pair in parallel.
///
/// A failing pair does not affect the others.
///
/// # Example
///
/// ```rust
/// use min_edit_distance::{batch_distances, CostModel};
///
/// let pairs = [("kitten", "sitting"), ("a", "b"), ("", "")];
/// let results = batch_distances(&pairs, &CostModel::default());
/// let distances: Vec<usize> = results.into_iter().map(|r| r.unwrap()).collect();
/// assert_eq!(distances, vec![5, 2, 0]);
/// ```
#[cfg(feature = "parallel")]
pub fn batch_distances<S>(pairs: &[(S, S)], costs: &CostModel) -> Vec<Result<usize>>
where
    S: AsRef<str> + Sync,
{
    log::debug!("computing {} distances in parallel", pairs.len());

    pairs
        .par_iter()
        .map(|(source, target)| min_edit_distance(source.as_ref(), target.as_ref(), costs))
        .collect()
}

/// Compute the distance of every `(source, target)` pair on the current thread.
pub fn batch_distances_sequential<S>(pairs: &[(S, S)], costs: &CostModel) -> Vec<Result<usize>>
where
    S: AsRef<str>,
{
    log::debug!("computing {} distances sequentially", pairs.len());

    pairs
        .iter()
        .map(|(source, target)| min_edit_distance(source.as_ref(), target.as_ref(), costs))
        .collect()
}
