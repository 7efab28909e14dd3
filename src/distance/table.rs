//! Full dynamic-programming grid.

use std::fmt;

use smallvec::SmallVec;

use super::{alloc_cells, min_cost_checked};
use crate::cost::CostModel;
use crate::error::{DistanceError, Result};

/// The (m+1)×(n+1) grid of minimal prefix costs.
///
/// Cell (i, j) holds the minimum cost of transforming the first `i` source
/// symbols into the first `j` target symbols. The bottom-right cell is the
/// edit distance.
///
/// Prefer [`compute_distance`](super::compute_distance) when only the
/// distance is needed; it runs in O(min(m, n)) space.
///
/// # Example
///
/// ```rust
/// use min_edit_distance::{CostModel, CostTable};
///
/// let table = CostTable::from_strs("ab", "a", &CostModel::default()).unwrap();
/// assert_eq!(table.rows(), 3);
/// assert_eq!(table.cols(), 2);
/// assert_eq!(table.row(1), Some(&[1, 0][..]));
/// assert_eq!(table.distance(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl CostTable {
    /// Build the full cost table for `source` and `target`.
    ///
    /// # Errors
    ///
    /// [`DistanceError::TableTooLarge`] if the grid size overflows or cannot
    /// be allocated, [`DistanceError::Overflow`] if some cell value does not
    /// fit in `usize`. Unlike [`compute_distance`](super::compute_distance),
    /// the table has to hold every prefix cost, including the base row and
    /// column.
    pub fn build<T: PartialEq>(source: &[T], target: &[T], costs: &CostModel) -> Result<Self> {
        let rows = source.len().saturating_add(1);
        let cols = target.len().saturating_add(1);
        let len = source
            .len()
            .checked_add(1)
            .zip(target.len().checked_add(1))
            .and_then(|(rows, cols)| rows.checked_mul(cols))
            .ok_or(DistanceError::TableTooLarge { rows, cols })?;

        log::trace!("allocating cost table: {}x{}", rows, cols);

        let overflow = DistanceError::Overflow {
            source_len: source.len(),
            target_len: target.len(),
        };

        let mut table = Self {
            cells: alloc_cells(len, rows, cols)?,
            rows,
            cols,
        };

        for i in 1..rows {
            table.cells[i * cols] = i
                .checked_mul(costs.delete_cost())
                .ok_or(overflow.clone())?;
        }
        for j in 1..cols {
            table.cells[j] = j
                .checked_mul(costs.insert_cost())
                .ok_or(overflow.clone())?;
        }

        for (i, source_symbol) in source.iter().enumerate() {
            for (j, target_symbol) in target.iter().enumerate() {
                let here = (i + 1) * cols + (j + 1);
                table.cells[here] = min_cost_checked(
                    Some(table.cells[here - 1]),
                    Some(table.cells[here - cols]),
                    Some(table.cells[here - cols - 1]),
                    source_symbol == target_symbol,
                    costs,
                )
                .ok_or(overflow.clone())?;
            }
        }

        Ok(table)
    }

    /// Build the cost table for two strings, per `char`.
    pub fn from_strs(source: &str, target: &str, costs: &CostModel) -> Result<Self> {
        let source_chars: SmallVec<[char; 32]> = source.chars().collect();
        let target_chars: SmallVec<[char; 32]> = target.chars().collect();

        Self::build(&source_chars, &target_chars, costs)
    }

    /// The edit distance (bottom-right cell).
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// Number of rows (`source.len() + 1`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`target.len() + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell (i, j), or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i`, or `None` when out of bounds.
    pub fn row(&self, i: usize) -> Option<&[usize]> {
        (i < self.rows).then(|| &self.cells[i * self.cols..(i + 1) * self.cols])
    }

    /// Iterate over all rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks_exact(self.cols)
    }
}

impl fmt::Display for CostTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widest = self.cells.iter().copied().max().unwrap_or(0);
        let width = widest.to_string().len();

        for row in self.iter_rows() {
            let line: Vec<String> = row.iter().map(|cell| format!("{:>width$}", cell)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }

        Ok(())
    }
}
