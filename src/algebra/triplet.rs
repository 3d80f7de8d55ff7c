#![allow(non_snake_case)]

use crate::algebra::{
    dim, FloatT, MatrixError, SparseFormatError, TripletMatrix, ValidationReport, Violation,
};
use std::iter::zip;

/// Collect every violation of a proposed `(row, col, value)` entry.
/// Range checks are made only when the matrix `size` is known.
pub(crate) fn entry_violations<T: FloatT>(
    report: &mut ValidationReport,
    size: Option<isize>,
    row: isize,
    col: isize,
    value: T,
) {
    if row < 0 {
        report.push(Violation::NegativeRow(row));
    } else if let Some(size) = size.filter(|&size| row >= size) {
        report.push(Violation::RowTooLarge { row, size });
    }
    if col < 0 {
        report.push(Violation::NegativeCol(col));
    } else if let Some(size) = size.filter(|&size| col >= size) {
        report.push(Violation::ColTooLarge { col, size });
    }
    if col > row {
        report.push(Violation::AboveDiagonal { row, col });
    }
    if value.is_nan() {
        report.push(Violation::NanValue);
    }
    if value.is_infinite() {
        report.push(Violation::InfiniteValue);
    }
}

impl<T> TripletMatrix<T>
where
    T: FloatT,
{
    /// Empty triplet matrix of the given size.
    ///
    /// Any size is accepted.  A matrix with size zero or below
    /// is a legal container that rejects every entry.
    pub fn new(size: isize) -> Self {
        Self::with_capacity(size, dim(size))
    }

    /// Empty triplet matrix with space reserved for `capacity` entries
    pub fn with_capacity(size: isize, capacity: usize) -> Self {
        TripletMatrix {
            size,
            nzval: Vec::with_capacity(capacity),
            rowval: Vec::with_capacity(capacity),
            colval: Vec::with_capacity(capacity),
        }
    }

    /// number of stored entries, counting repeated positions separately
    pub fn nnz(&self) -> usize {
        self.nzval.len()
    }

    /// Check a proposed entry without storing it.
    pub fn check_entry(&self, row: isize, col: isize, value: T) -> ValidationReport {
        let mut report = ValidationReport::new();
        entry_violations(&mut report, Some(self.size), row, col, value);
        report
    }

    /// Add an entry in the lower triangle.
    ///
    /// All failed preconditions are reported together and leave the
    /// matrix untouched.  An exact zero value is accepted and not stored.
    /// Repeated positions are kept until compression.
    pub fn put(&mut self, row: isize, col: isize, value: T) -> Result<(), MatrixError> {
        self.check_entry(row, col, value).into_result()?;
        self.push_unchecked(row as usize, col as usize, value);
        Ok(())
    }

    // caller has already validated the entry
    pub(crate) fn push_unchecked(&mut self, row: usize, col: usize, value: T) {
        if value == T::zero() {
            return;
        }
        self.rowval.push(row);
        self.colval.push(col);
        self.nzval.push(value);
    }

    /// Sum of all entries stored at `(row, col)`, in insertion order.
    /// Returns None if nothing is stored there.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        let mut total: Option<T> = None;
        for ((&r, &c), &v) in zip(zip(&self.rowval, &self.colval), &self.nzval) {
            if r == row && c == col {
                total = Some(total.map_or(v, |t| t + v));
            }
        }
        total
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() || self.colval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }
        let n = dim(self.size);
        if !self.rowval.iter().all(|r| r < &n) {
            return Err(SparseFormatError::BadRowval);
        }
        if !self.colval.iter().all(|c| c < &n) {
            return Err(SparseFormatError::BadColval);
        }
        if zip(&self.rowval, &self.colval).any(|(r, c)| c > r) {
            return Err(SparseFormatError::NotLowerTriangular);
        }
        if self.nzval.iter().any(|v| !v.is_finite() || *v == T::zero()) {
            return Err(SparseFormatError::BadNzval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triplet_put_order() {
        let mut A = TripletMatrix::<f64>::new(3);
        A.put(2, 1, 7.0).unwrap();
        A.put(0, 0, 1.0).unwrap();
        A.put(1, 1, 1.0).unwrap();
        A.put(1, 1, 1.0).unwrap();
        assert_eq!(A.nzval, vec![7., 1., 1., 1.]);
        assert_eq!(A.rowval, vec![2, 0, 1, 1]);
        assert_eq!(A.colval, vec![1, 0, 1, 1]);
        assert_eq!(A.get(1, 1), Some(2.));
        assert_eq!(A.get(2, 0), None);
        assert!(A.check_format().is_ok());
    }

    #[test]
    fn test_triplet_zero_is_noop() {
        let mut A = TripletMatrix::<f64>::new(2);
        A.put(1, 0, 0.0).unwrap();
        A.put(1, 0, -0.0).unwrap();
        assert_eq!(A.nnz(), 0);
        A.put(1, 0, 4.0).unwrap();
        A.put(1, 1, 0.0).unwrap();
        assert_eq!(A.nnz(), 1);
    }

    #[test]
    fn test_triplet_rejects_without_mutation() {
        let mut A = TripletMatrix::<f64>::new(3);
        A.put(0, 0, 1.0).unwrap();
        let before = A.clone();

        let err = A.put(0, 1, 2.0).unwrap_err();
        let report = err.report().unwrap();
        assert_eq!(report.violations(), &[Violation::AboveDiagonal { row: 0, col: 1 }]);
        assert_eq!(A, before);

        let report = A.check_entry(3, 0, f64::NEG_INFINITY);
        assert_eq!(
            report.violations(),
            &[
                Violation::RowTooLarge { row: 3, size: 3 },
                Violation::InfiniteValue
            ]
        );
    }

    #[test]
    fn test_triplet_aggregates_all_violations() {
        let A = TripletMatrix::<f64>::new(3);
        let report = A.check_entry(-1, 99, f64::NAN);
        assert_eq!(
            report.violations(),
            &[
                Violation::NegativeRow(-1),
                Violation::ColTooLarge { col: 99, size: 3 },
                Violation::AboveDiagonal { row: -1, col: 99 },
                Violation::NanValue,
            ]
        );
    }

    #[test]
    fn test_entry_violations_without_size() {
        let mut report = ValidationReport::new();
        entry_violations(&mut report, None, 7, 99, f64::INFINITY);
        assert_eq!(
            report.violations(),
            &[
                Violation::AboveDiagonal { row: 7, col: 99 },
                Violation::InfiniteValue
            ]
        );

        let mut sized = ValidationReport::new();
        entry_violations(&mut sized, Some(3), 7, 99, f64::INFINITY);
        assert_eq!(sized.len(), 4);
        assert!(sized.contains(&Violation::RowTooLarge { row: 7, size: 3 }));
        assert!(sized.contains(&Violation::ColTooLarge { col: 99, size: 3 }));
    }

    #[test]
    fn test_triplet_nonpositive_size() {
        for size in [-2, 0] {
            let mut A = TripletMatrix::<f64>::new(size);
            assert!(A.put(0, 0, 1.0).is_err());
            assert_eq!(A.nnz(), 0);
        }
    }

    #[test]
    fn test_triplet_check_format() {
        let mut A = TripletMatrix::<f64>::new(2);
        A.put(1, 0, 1.0).unwrap();
        A.colval[0] = 2;
        assert_eq!(A.check_format(), Err(SparseFormatError::BadColval));
        A.colval[0] = 0;
        A.nzval[0] = 0.0;
        assert_eq!(A.check_format(), Err(SparseFormatError::BadNzval));
        A.rowval.push(1);
        assert_eq!(A.check_format(), Err(SparseFormatError::IncompatibleDimension));
    }
}
