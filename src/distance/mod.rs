//! Weighted minimum edit distance.
//!
//! The distance between `source` and `target` is the minimum total cost of
//! single-symbol insertions, deletions and replacements that turn `source`
//! into `target`, under a [`CostModel`]. Matching symbols are free.
//!
//! Two implementations are available:
//! - [`compute_distance`]: rolling two-row dynamic programming, O(min(m, n))
//!   space, with common prefix/suffix stripping.
//! - [`CostTable::build`]: the full (m+1)×(n+1) grid, for callers that want
//!   to inspect intermediate prefix costs.
//!
//! Both always return the exact minimum.

use smallvec::SmallVec;

use crate::cost::CostModel;
use crate::error::{DistanceError, Result};

mod table;

pub use table::CostTable;

/// Compute the minimum edit distance between two symbol sequences.
///
/// Symbols only need equality. The result is exact for any non-negative cost
/// model, including zero costs and models where replacing is more expensive
/// than deleting and inserting.
///
/// # Errors
///
/// - [`DistanceError::Overflow`] if the distance itself does not fit in
///   `usize`. Large intermediate costs alone never cause this.
/// - [`DistanceError::TableTooLarge`] if the working rows cannot be allocated.
///
/// # Example
///
/// ```rust
/// use min_edit_distance::{compute_distance, CostModel};
///
/// let costs = CostModel::default();
/// assert_eq!(compute_distance(&[1, 2, 3], &[1, 3], &costs).unwrap(), 1);
/// assert_eq!(compute_distance::<u8>(&[], &[], &costs).unwrap(), 0);
/// ```
pub fn compute_distance<T: PartialEq>(
    source: &[T],
    target: &[T],
    costs: &CostModel,
) -> Result<usize> {
    log::trace!(
        "computing distance: source_len={}, target_len={}, costs=({})",
        source.len(),
        target.len(),
        costs
    );

    let overflow = DistanceError::Overflow {
        source_len: source.len(),
        target_len: target.len(),
    };

    let (source, target) = strip_common_affixes(source, target);

    if source.is_empty() {
        return target.len().checked_mul(costs.insert_cost()).ok_or(overflow);
    }
    if target.is_empty() {
        return source.len().checked_mul(costs.delete_cost()).ok_or(overflow);
    }

    // Keep the row as short as possible: transforming target into source with
    // insert/delete costs exchanged yields the same value.
    let (source, target, costs) = if target.len() > source.len() {
        (target, source, costs.swapped())
    } else {
        (source, target, *costs)
    };

    if cost_bound(source.len(), target.len(), &costs).is_some() {
        rolling_rows(source, target, &costs)
    } else {
        log::debug!("worst-case cost exceeds usize, using checked arithmetic");
        rolling_rows_checked(source, target, &costs)?.ok_or(overflow)
    }
}

/// Compute the minimum edit distance between two strings, per `char`.
///
/// # Example
///
/// ```rust
/// use min_edit_distance::{min_edit_distance, CostModel};
///
/// let costs = CostModel::default();
/// assert_eq!(min_edit_distance("kitten", "sitting", &costs).unwrap(), 5);
/// assert_eq!(min_edit_distance("kitten", "sitting", &CostModel::unit()).unwrap(), 3);
/// assert_eq!(min_edit_distance("", "abc", &costs).unwrap(), 3);
/// ```
pub fn min_edit_distance(source: &str, target: &str, costs: &CostModel) -> Result<usize> {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    compute_distance(&source_chars, &target_chars, costs)
}

/// Compute the minimum edit distance between two byte strings, per byte.
///
/// Multi-byte UTF-8 characters count as several symbols here; use
/// [`min_edit_distance`] for per-character comparison.
///
/// ```rust
/// use min_edit_distance::{min_edit_distance, min_edit_distance_bytes, CostModel};
///
/// let costs = CostModel::default();
/// assert_eq!(min_edit_distance("é", "e", &costs).unwrap(), 2);
/// assert_eq!(min_edit_distance_bytes("é".as_bytes(), b"e", &costs).unwrap(), 3);
/// ```
pub fn min_edit_distance_bytes(source: &[u8], target: &[u8], costs: &CostModel) -> Result<usize> {
    compute_distance(source, target, costs)
}

/// Upper bound of every cell, or `None` if it does not fit in `usize`.
///
/// Cell (i, j) of the cost table is at most `i * delete_cost +
/// j * insert_cost` (delete everything, then insert everything).
pub(crate) fn cost_bound(source_len: usize, target_len: usize, costs: &CostModel) -> Option<usize> {
    source_len
        .checked_mul(costs.delete_cost())
        .zip(target_len.checked_mul(costs.insert_cost()))
        .and_then(|(deletes, inserts)| deletes.checked_add(inserts))
}

/// Allocate `len` default cells, reporting allocation failure as
/// [`DistanceError::TableTooLarge`].
pub(crate) fn alloc_cells<C: Clone + Default>(
    len: usize,
    rows: usize,
    cols: usize,
) -> Result<Vec<C>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| DistanceError::TableTooLarge { rows, cols })?;
    cells.resize(len, C::default());
    Ok(cells)
}

/// One step of the recurrence.
///
/// `left` is cell (i, j-1), `up` is (i-1, j) and `diagonal` is (i-1, j-1).
/// Callers guarantee [`cost_bound`] fits, which bounds `left + insert` and
/// `up + delete`; only the replacement candidate can exceed it and saturates.
#[inline(always)]
fn min_cost(
    left: usize,
    up: usize,
    diagonal: usize,
    symbols_match: bool,
    costs: &CostModel,
) -> usize {
    let replace = if symbols_match {
        0
    } else {
        costs.replace_cost()
    };

    (left + costs.insert_cost()) // insertion
        .min(up + costs.delete_cost()) // deletion
        .min(diagonal.saturating_add(replace)) // match or replacement
}

/// One step of the recurrence with overflow tracking.
///
/// `None` marks a cell whose exact value exceeds `usize::MAX`. Costs are
/// non-negative, so no path through such a cell can produce a smaller value
/// later on.
#[inline(always)]
pub(crate) fn min_cost_checked(
    left: Option<usize>,
    up: Option<usize>,
    diagonal: Option<usize>,
    symbols_match: bool,
    costs: &CostModel,
) -> Option<usize> {
    let replace = if symbols_match {
        0
    } else {
        costs.replace_cost()
    };

    [
        left.and_then(|cell| cell.checked_add(costs.insert_cost())),
        up.and_then(|cell| cell.checked_add(costs.delete_cost())),
        diagonal.and_then(|cell| cell.checked_add(replace)),
    ]
    .into_iter()
    .flatten()
    .min()
}

fn rolling_rows<T: PartialEq>(source: &[T], target: &[T], costs: &CostModel) -> Result<usize> {
    let n = target.len();

    let mut prev_row: Vec<usize> = alloc_cells(n + 1, 2, n + 1)?;
    let mut curr_row: Vec<usize> = alloc_cells(n + 1, 2, n + 1)?;

    for (j, cell) in prev_row.iter_mut().enumerate() {
        *cell = j * costs.insert_cost();
    }

    for (i, source_symbol) in source.iter().enumerate() {
        curr_row[0] = (i + 1) * costs.delete_cost();

        for (j, target_symbol) in target.iter().enumerate() {
            curr_row[j + 1] = min_cost(
                curr_row[j],
                prev_row[j + 1],
                prev_row[j],
                source_symbol == target_symbol,
                costs,
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    Ok(prev_row[n])
}

/// Rolling rows for cost models whose worst case exceeds `usize`.
///
/// Returns `Ok(None)` only when the distance itself does not fit.
fn rolling_rows_checked<T: PartialEq>(
    source: &[T],
    target: &[T],
    costs: &CostModel,
) -> Result<Option<usize>> {
    let n = target.len();

    let mut prev_row: Vec<Option<usize>> = alloc_cells(n + 1, 2, n + 1)?;
    let mut curr_row: Vec<Option<usize>> = alloc_cells(n + 1, 2, n + 1)?;

    for (j, cell) in prev_row.iter_mut().enumerate() {
        *cell = j.checked_mul(costs.insert_cost());
    }

    for (i, source_symbol) in source.iter().enumerate() {
        curr_row[0] = (i + 1).checked_mul(costs.delete_cost());

        for (j, target_symbol) in target.iter().enumerate() {
            curr_row[j + 1] = min_cost_checked(
                curr_row[j],
                prev_row[j + 1],
                prev_row[j],
                source_symbol == target_symbol,
                costs,
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    Ok(prev_row[n])
}

/// Strip the common prefix and suffix of two sequences.
///
/// With uniform, non-negative costs an optimal edit script can always match
/// shared leading and trailing symbols for free, so the distance of the
/// remaining middles equals the distance of the originals.
pub(crate) fn strip_common_affixes<'a, 'b, T: PartialEq>(
    a: &'a [T],
    b: &'b [T],
) -> (&'a [T], &'b [T]) {
    let prefix_len = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix_len..], &b[prefix_len..]);

    let suffix_len = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    (&a[..a.len() - suffix_len], &b[..b.len() - suffix_len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CostModel {
        CostModel::default()
    }

    /// Direct transcription of the recurrence, exponential time.
    fn naive(source: &[char], target: &[char], costs: &CostModel) -> usize {
        match (source.split_last(), target.split_last()) {
            (None, _) => target.len() * costs.insert_cost(),
            (_, None) => source.len() * costs.delete_cost(),
            (Some((s, source_rest)), Some((t, target_rest))) => {
                let replace = if s == t { 0 } else { costs.replace_cost() };
                (naive(source, target_rest, costs) + costs.insert_cost())
                    .min(naive(source_rest, target, costs) + costs.delete_cost())
                    .min(naive(source_rest, target_rest, costs) + replace)
            }
        }
    }

    #[test]
    fn test_identical() {
        assert_eq!(min_edit_distance("", "", &reference()).unwrap(), 0);
        assert_eq!(min_edit_distance("abc", "abc", &reference()).unwrap(), 0);
        assert_eq!(min_edit_distance("abc", "abc", &CostModel::new(7, 9, 11)).unwrap(), 0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(min_edit_distance("", "test", &reference()).unwrap(), 4);
        assert_eq!(min_edit_distance("test", "", &reference()).unwrap(), 4);

        let costs = CostModel::new(3, 5, 1);
        assert_eq!(min_edit_distance("", "test", &costs).unwrap(), 12);
        assert_eq!(min_edit_distance("test", "", &costs).unwrap(), 20);
    }

    #[test]
    fn test_reference_cost_model() {
        let costs = reference();
        assert_eq!(min_edit_distance("a", "b", &costs).unwrap(), 2);
        assert_eq!(min_edit_distance("ab", "a", &costs).unwrap(), 1);
        assert_eq!(min_edit_distance("kitten", "sitting", &costs).unwrap(), 5);
        assert_eq!(min_edit_distance("asudf", "asdfvbd", &costs).unwrap(), 4);
        assert_eq!(min_edit_distance("intention", "execution", &costs).unwrap(), 8);
        assert_eq!(min_edit_distance("saturday", "sunday", &costs).unwrap(), 4);
        assert_eq!(min_edit_distance("abc", "xyz", &costs).unwrap(), 6);
    }

    #[test]
    fn test_unit_cost_model() {
        let costs = CostModel::unit();
        assert_eq!(min_edit_distance("kitten", "sitting", &costs).unwrap(), 3);
        assert_eq!(min_edit_distance("saturday", "sunday", &costs).unwrap(), 3);
        assert_eq!(min_edit_distance("test", "best", &costs).unwrap(), 1);
    }

    #[test]
    fn test_asymmetric_costs() {
        assert_eq!(min_edit_distance("abc", "xyz", &CostModel::new(2, 3, 4)).unwrap(), 12);
        assert_eq!(min_edit_distance("xyz", "abc", &CostModel::new(3, 2, 4)).unwrap(), 12);
        assert_eq!(min_edit_distance("abc", "abcd", &CostModel::new(5, 1, 1)).unwrap(), 5);
        assert_eq!(min_edit_distance("abcd", "abc", &CostModel::new(5, 1, 1)).unwrap(), 1);
        // Replacing costs more than deleting then inserting.
        assert_eq!(min_edit_distance("ab", "ba", &CostModel::new(2, 3, 10)).unwrap(), 5);
    }

    #[test]
    fn test_zero_costs() {
        let free = CostModel::new(0, 0, 0);
        assert_eq!(min_edit_distance("completely", "different", &free).unwrap(), 0);

        let free_replace = CostModel::new(1, 1, 0);
        assert_eq!(min_edit_distance("abc", "xyz", &free_replace).unwrap(), 0);
        assert_eq!(min_edit_distance("abc", "xy", &free_replace).unwrap(), 1);
    }

    #[test]
    fn test_unicode_is_per_char() {
        let costs = reference();
        assert_eq!(min_edit_distance("café", "cafe", &costs).unwrap(), 2);
        assert_eq!(min_edit_distance("日本", "日本", &costs).unwrap(), 0);
        assert_eq!(min_edit_distance("", "¡", &costs).unwrap(), 1);
        assert_eq!(min_edit_distance_bytes("".as_bytes(), "¡".as_bytes(), &costs).unwrap(), 2);
    }

    #[test]
    fn test_generic_symbols() {
        let costs = reference();
        let source = ["the", "quick", "brown", "fox"];
        let target = ["the", "slow", "brown", "dog", "barks"];
        assert_eq!(compute_distance(&source, &target, &costs).unwrap(), 5);
    }

    #[test]
    fn test_matches_naive_recursion() {
        let cost_models = [
            CostModel::default(),
            CostModel::unit(),
            CostModel::new(2, 3, 4),
            CostModel::new(1, 4, 9),
            CostModel::new(0, 2, 1),
        ];
        let pairs = [
            ("", ""),
            ("a", ""),
            ("", "ab"),
            ("ab", "ba"),
            ("abc", "acb"),
            ("kitten", "sitting"),
            ("flaw", "lawn"),
            ("banana", "ananas"),
        ];

        for costs in &cost_models {
            for (a, b) in pairs {
                let a_chars: Vec<char> = a.chars().collect();
                let b_chars: Vec<char> = b.chars().collect();
                assert_eq!(
                    min_edit_distance(a, b, costs).unwrap(),
                    naive(&a_chars, &b_chars, costs),
                    "Mismatch for '{}' vs '{}' with {}",
                    a,
                    b,
                    costs
                );
            }
        }
    }

    #[test]
    fn test_strip_common_affixes() {
        let (a, b) = strip_common_affixes(b"commonprefix_abc", b"commonprefix_def");
        assert_eq!((a, b), (&b"abc"[..], &b"def"[..]));

        let (a, b) = strip_common_affixes(b"abc_suffix", b"xyz_suffix");
        assert_eq!((a, b), (&b"abc"[..], &b"xyz"[..]));

        let (a, b) = strip_common_affixes(b"test", b"testing");
        assert_eq!((a, b), (&b""[..], &b"ing"[..]));

        // Prefix and suffix must not overlap.
        let (a, b) = strip_common_affixes(b"aa", b"aaa");
        assert_eq!((a, b), (&b""[..], &b"a"[..]));
    }

    #[test]
    fn test_overflow_only_when_distance_exceeds_usize() {
        let costs = CostModel::new(usize::MAX, usize::MAX, 1);
        assert_eq!(
            min_edit_distance("aa", "", &costs),
            Err(DistanceError::Overflow {
                source_len: 2,
                target_len: 0,
            })
        );
        assert_eq!(
            min_edit_distance("", "xyz", &costs),
            Err(DistanceError::Overflow {
                source_len: 0,
                target_len: 3,
            })
        );
    }

    #[test]
    fn test_huge_costs_with_small_distance() {
        let max = CostModel::new(usize::MAX, usize::MAX, 1);
        assert_eq!(min_edit_distance("a", "a", &max).unwrap(), 0);
        assert_eq!(min_edit_distance("kitten", "kitten", &max).unwrap(), 0);
        // Intermediate cells overflow, the replacements do not.
        assert_eq!(min_edit_distance("ab", "ba", &max).unwrap(), 2);
        assert_eq!(min_edit_distance("abcd", "badc", &max).unwrap(), 4);

        let huge = 1usize << (usize::BITS - 2);
        let costs = CostModel::new(huge, huge, 1);
        assert_eq!(min_edit_distance("abc", "abd", &costs).unwrap(), 1);
    }

    #[test]
    fn test_distance_equal_to_usize_max() {
        let costs = CostModel::new(1, usize::MAX, 1);
        assert_eq!(min_edit_distance("ab", "a", &costs).unwrap(), usize::MAX);

        // Forces the checked path: the worst case is 2 * usize::MAX.
        let costs = CostModel::new(usize::MAX, usize::MAX, usize::MAX);
        assert_eq!(min_edit_distance("xay", "xby", &costs).unwrap(), usize::MAX);
        assert_eq!(
            min_edit_distance("ab", "cd", &costs),
            Err(DistanceError::Overflow {
                source_len: 2,
                target_len: 2,
            })
        );
    }

    #[test]
    fn test_checked_path_matches_fast_path() {
        // Scaling every cost by k scales the distance by k.
        let k = usize::MAX / 16;
        let base = CostModel::new(2, 3, 4);
        let scaled = CostModel::new(2 * k, 3 * k, 4 * k);
        let pairs = [
            ("kitten", "sitting"),
            ("flaw", "lawn"),
            ("banana", "ananas"),
            ("abcd", "dcba"),
        ];

        for (a, b) in pairs {
            assert!(cost_bound(a.len(), b.len(), &scaled).is_none());
            assert_eq!(
                min_edit_distance(a, b, &scaled).unwrap(),
                min_edit_distance(a, b, &base).unwrap() * k,
                "Mismatch for '{}' vs '{}'",
                a,
                b
            );
        }
    }

    #[test]
    fn test_huge_replace_cost_does_not_wrap() {
        let costs = CostModel::new(1, 1, usize::MAX);
        assert_eq!(min_edit_distance("abc", "xbz", &costs).unwrap(), 4);
    }

    #[test]
    fn test_single_large_cost_fits() {
        let costs = CostModel::new(usize::MAX, 0, 1);
        assert_eq!(min_edit_distance("", "a", &costs).unwrap(), usize::MAX);
    }
}
