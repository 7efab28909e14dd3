//! Per-operation cost weights.

use std::fmt;

use crate::error::{DistanceError, Result};

/// A single-symbol edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum Operation {
    /// Insert one target symbol.
    Insert,
    /// Delete one source symbol.
    Delete,
    /// Replace one source symbol with a different target symbol.
    Replace,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert => write!(f, "insert"),
            Operation::Delete => write!(f, "delete"),
            Operation::Replace => write!(f, "replace"),
        }
    }
}

/// Costs charged for each edit operation.
///
/// All costs are non-negative by construction. Matching symbols are always
/// free; `replace_cost` is only charged when the two symbols differ.
///
/// The default is the reference model: insert 1, delete 1, replace 2.
///
/// # Example
///
/// ```rust
/// use min_edit_distance::CostModel;
///
/// let costs = CostModel::default();
/// assert_eq!(costs.insert_cost(), 1);
/// assert_eq!(costs.delete_cost(), 1);
/// assert_eq!(costs.replace_cost(), 2);
///
/// assert!(CostModel::from_signed(1, -1, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    insert_cost: usize,
    delete_cost: usize,
    replace_cost: usize,
}

impl CostModel {
    /// Default cost of inserting one symbol.
    pub const DEFAULT_INSERT_COST: usize = 1;
    /// Default cost of deleting one symbol.
    pub const DEFAULT_DELETE_COST: usize = 1;
    /// Default cost of replacing one symbol.
    pub const DEFAULT_REPLACE_COST: usize = 2;

    /// Create a cost model from non-negative weights.
    pub const fn new(insert_cost: usize, delete_cost: usize, replace_cost: usize) -> Self {
        Self {
            insert_cost,
            delete_cost,
            replace_cost,
        }
    }

    /// Unit costs for every operation (classical Levenshtein distance).
    pub const fn unit() -> Self {
        Self::new(1, 1, 1)
    }

    /// Create a cost model from signed weights, rejecting negative values.
    ///
    /// This is the constructor used at input boundaries where a value may
    /// arrive as a signed integer (configuration files, command-line flags).
    pub fn from_signed(insert_cost: i64, delete_cost: i64, replace_cost: i64) -> Result<Self> {
        Ok(Self::new(
            non_negative(Operation::Insert, insert_cost)?,
            non_negative(Operation::Delete, delete_cost)?,
            non_negative(Operation::Replace, replace_cost)?,
        ))
    }

    /// Cost of inserting one symbol.
    #[inline]
    pub const fn insert_cost(&self) -> usize {
        self.insert_cost
    }

    /// Cost of deleting one symbol.
    #[inline]
    pub const fn delete_cost(&self) -> usize {
        self.delete_cost
    }

    /// Cost of replacing one symbol with a different one.
    #[inline]
    pub const fn replace_cost(&self) -> usize {
        self.replace_cost
    }

    /// Cost charged for `operation`.
    pub const fn cost_of(&self, operation: Operation) -> usize {
        match operation {
            Operation::Insert => self.insert_cost,
            Operation::Delete => self.delete_cost,
            Operation::Replace => self.replace_cost,
        }
    }

    /// The same model with insertion and deletion costs exchanged.
    ///
    /// `d(a, b, costs) == d(b, a, costs.swapped())` for all `a`, `b`.
    pub const fn swapped(&self) -> Self {
        Self::new(self.delete_cost, self.insert_cost, self.replace_cost)
    }

    /// Whether `replace_cost <= insert_cost + delete_cost`.
    ///
    /// Only then does the distance satisfy the triangle inequality.
    pub fn is_metric(&self) -> bool {
        self.insert_cost
            .checked_add(self.delete_cost)
            .map_or(true, |sum| self.replace_cost <= sum)
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_INSERT_COST,
            Self::DEFAULT_DELETE_COST,
            Self::DEFAULT_REPLACE_COST,
        )
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insert={} delete={} replace={}",
            self.insert_cost, self.delete_cost, self.replace_cost
        )
    }
}

fn non_negative(operation: Operation, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(DistanceError::NegativeCost { operation, value });
    }

    usize::try_from(value).map_err(|_| DistanceError::CostTooLarge { operation, value })
}
