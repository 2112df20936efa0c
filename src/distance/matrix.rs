//! Dense distance matrix.

use crate::error::{Result, RouteError};

/// A dense n×n distance matrix stored in row-major order.
///
/// Every entry is finite and non-negative; this is checked once at
/// construction. The diagonal is stored but carries no meaning.
///
/// # Examples
///
/// ```
/// use warehouse_route::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 4.0],
///     vec![8.0, 4.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix from nested rows.
    ///
    /// Fails with [`RouteError::MalformedMatrix`] if any row length differs
    /// from the number of rows, or if an entry is negative or not finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(RouteError::malformed(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        let expected = size.checked_mul(size).ok_or_else(|| {
            RouteError::malformed(format!("a {size}x{size} matrix is too large"))
        })?;
        if data.len() != expected {
            return Err(RouteError::malformed(format!(
                "expected {expected} entries for a {size}x{size} matrix, got {}",
                data.len()
            )));
        }
        if let Some(pos) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(RouteError::malformed(format!(
                "entry ({}, {}) = {} is not a finite non-negative distance",
                pos / size,
                pos % size,
                data[pos]
            )));
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.size && to < self.size,
            "index ({from}, {to}) out of bounds for a {0}x{0} matrix",
            self.size
        );
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the first pair `(i, j)`, `i < j`, whose entries differ by more
    /// than `tol`, or `None` if the matrix is symmetric within `tol`.
    pub fn asymmetric_pair(&self, tol: f64) -> Option<(usize, usize)> {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.asymmetric_pair(tol).is_none()
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Only a strictly smaller distance displaces the current best, so ties
    /// go to the candidate that comes first in iteration order. Returns
    /// `None` if `candidates` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `from` or any candidate is out of bounds.
    pub fn nearest_neighbor<I>(&self, from: usize, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut best: Option<(usize, f64)> = None;
        for c in candidates {
            let d = self.get(from, c);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 8.0],
            vec![5.0, 0.0, 4.0],
            vec![8.0, 4.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_from_rows() {
        let dm = sample();
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 2), 8.0);
        assert_eq!(dm.get(2, 1), 4.0);
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, RouteError::MalformedMatrix { .. }));
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_err());
    }

    #[test]
    fn test_from_data_size_overflow() {
        let err = DistanceMatrix::from_data(usize::MAX, vec![]).unwrap_err();
        assert!(matches!(err, RouteError::MalformedMatrix { .. }));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, -1.0, 1.0, 0.0]).is_err());
        assert!(DistanceMatrix::from_data(2, vec![0.0, f64::NAN, 1.0, 0.0]).is_err());
        assert!(DistanceMatrix::from_data(2, vec![0.0, f64::INFINITY, 1.0, 0.0]).is_err());
    }

    #[test]
    fn test_error_names_offending_entry() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 1.0, -3.0, 0.0]).unwrap_err();
        assert!(err.to_string().contains("(1, 0)"));
    }

    #[test]
    fn test_symmetric() {
        assert!(sample().is_symmetric(1e-10));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 10.0, 15.0, 0.0]).expect("valid");
        assert!(!dm.is_symmetric(1e-10));
        assert_eq!(dm.asymmetric_pair(1e-10), Some((0, 1)));
        assert!(dm.is_symmetric(5.0));
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = sample();
        assert_eq!(dm.nearest_neighbor(0, [1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, [2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, []), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_column_out_of_bounds() {
        // (0, 3) would otherwise alias entry (1, 0)
        sample().get(0, 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_nearest_neighbor_out_of_bounds_candidate() {
        sample().nearest_neighbor(0, [1, 3]);
    }

    #[test]
    fn test_nearest_neighbor_tie_goes_to_first() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 3.0, 3.0],
            vec![3.0, 0.0, 1.0],
            vec![3.0, 1.0, 0.0],
        ])
        .expect("valid");
        assert_eq!(dm.nearest_neighbor(0, [1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, [2, 1]), Some(2));
    }
}
