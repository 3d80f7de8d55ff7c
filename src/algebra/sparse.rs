#![allow(non_snake_case)]

use crate::algebra::{
    entry_violations, CompressedMatrix, CompressionCounts, FloatT,
    MatrixError, MatrixFormat, SparseMatrix, TripletMatrix, ValidationReport, Violation,
};
use itertools::Itertools;
use std::fmt;

/// Outcome of a successful [`SparseMatrix::convert_to`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// format before the call
    pub from: MatrixFormat,
    /// format after the call
    pub to: MatrixFormat,
    /// stored entries before the call
    pub nnz_before: usize,
    /// stored entries after the call
    pub nnz_after: usize,
    /// entries merged into an earlier entry at the same position
    pub coalesced: usize,
    /// positions dropped because their sum cancelled
    pub cancelled: usize,
}

impl ConversionSummary {
    fn unchanged(format: MatrixFormat, nnz: usize) -> Self {
        ConversionSummary {
            from: format,
            to: format,
            nnz_before: nnz,
            nnz_after: nnz,
            coalesced: 0,
            cancelled: 0,
        }
    }

    /// true if the call left the matrix as it was
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: nnz {} -> {} ({} coalesced, {} cancelled)",
            self.from.tag(),
            self.to.tag(),
            self.nnz_before,
            self.nnz_after,
            self.coalesced,
            self.cancelled
        )
    }
}

impl<T> SparseMatrix<T>
where
    T: FloatT,
{
    /// Empty matrix in triplet format
    pub fn new(size: isize) -> Self {
        SparseMatrix::Triplet(TripletMatrix::new(size))
    }

    /// Empty matrix in triplet format with space for `capacity` entries
    pub fn with_capacity(size: isize, capacity: usize) -> Self {
        SparseMatrix::Triplet(TripletMatrix::with_capacity(size, capacity))
    }

    pub fn format(&self) -> MatrixFormat {
        match self {
            SparseMatrix::Triplet(_) => MatrixFormat::Triplet,
            SparseMatrix::Compressed(A) => A.kind.into(),
        }
    }

    /// number of rows and columns
    pub fn size(&self) -> isize {
        match self {
            SparseMatrix::Triplet(A) => A.size,
            SparseMatrix::Compressed(A) => A.size,
        }
    }

    /// number of stored entries
    pub fn nnz(&self) -> usize {
        self.values().len()
    }

    pub fn values(&self) -> &[T] {
        match self {
            SparseMatrix::Triplet(A) => &A.nzval,
            SparseMatrix::Compressed(A) => &A.nzval,
        }
    }

    pub fn row_indices(&self) -> &[usize] {
        match self {
            SparseMatrix::Triplet(A) => &A.rowval,
            SparseMatrix::Compressed(A) => &A.rowval,
        }
    }

    /// Column index per entry (triplet), or column pointer (compressed)
    pub fn col_positions(&self) -> &[usize] {
        match self {
            SparseMatrix::Triplet(A) => &A.colval,
            SparseMatrix::Compressed(A) => &A.colptr,
        }
    }

    pub fn as_triplet(&self) -> Option<&TripletMatrix<T>> {
        match self {
            SparseMatrix::Triplet(A) => Some(A),
            SparseMatrix::Compressed(_) => None,
        }
    }

    pub fn as_compressed(&self) -> Option<&CompressedMatrix<T>> {
        match self {
            SparseMatrix::Triplet(_) => None,
            SparseMatrix::Compressed(A) => Some(A),
        }
    }

    /// Value at `(row, col)`.  See [`TripletMatrix::get`] and
    /// [`CompressedMatrix::get`].
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        match self {
            SparseMatrix::Triplet(A) => A.get(row, col),
            SparseMatrix::Compressed(A) => A.get(row, col),
        }
    }

    /// Check a proposed entry without storing it.
    pub fn check_put(&self, row: isize, col: isize, value: T) -> ValidationReport {
        let mut report = ValidationReport::new();
        if let SparseMatrix::Compressed(A) = self {
            report.push(Violation::NotTriplet(A.kind.into()));
        }
        entry_violations(&mut report, Some(self.size()), row, col, value);
        report
    }

    /// Add an entry to a triplet matrix.
    ///
    /// Fails with every violated precondition at once, including a
    /// compressed format, and leaves the matrix untouched on failure.
    pub fn put(&mut self, row: isize, col: isize, value: T) -> Result<(), MatrixError> {
        self.check_put(row, col, value).into_result()?;
        if let SparseMatrix::Triplet(A) = self {
            A.push_unchecked(row as usize, col as usize, value);
        }
        Ok(())
    }

    /// Convert in place to `target`.
    ///
    /// Converting to the current format does nothing.  Moving between
    /// the two compressed formats only changes the label.  Triplet
    /// entries are compressed with repeated positions summed and exact
    /// cancellations removed.  Compressed entries go back to triplet
    /// form in column order.
    ///
    /// Malformed stored data fails with [`MatrixError::Format`] and
    /// leaves the matrix untouched.
    pub fn convert_to(&mut self, target: MatrixFormat) -> Result<ConversionSummary, MatrixError> {
        self.convert_to_with_tolerance(target, T::zero())
    }

    /// As [`convert_to`](SparseMatrix::convert_to), removing compressed
    /// positions whose summed magnitude is `<= tol`.
    pub fn convert_to_with_tolerance(
        &mut self,
        target: MatrixFormat,
        tol: T,
    ) -> Result<ConversionSummary, MatrixError> {
        let from = self.format();
        let nnz_before = self.nnz();

        if from == target {
            return Ok(ConversionSummary::unchanged(from, nnz_before));
        }

        // storage is about to be rebuilt from the stored indices
        if from.is_compressed() != target.is_compressed() {
            self.check_format()?;
        }

        let mut counts = CompressionCounts {
            nnz_in: nnz_before,
            nnz_out: nnz_before,
            ..CompressionCounts::default()
        };

        let kind = target.compressed_kind();
        let replaced = match self {
            SparseMatrix::Compressed(A) => match kind {
                Some(kind) => {
                    A.relabel(kind);
                    None
                }
                None => {
                    let placeholder = CompressedMatrix::empty(A.kind, 0);
                    let A = std::mem::replace(A, placeholder);
                    Some(SparseMatrix::Triplet(A.to_triplet()))
                }
            },
            SparseMatrix::Triplet(A) => match kind {
                Some(kind) => {
                    let A = std::mem::replace(A, TripletMatrix::new(0));
                    let (B, c) = A.compress_with_tolerance(kind, tol);
                    counts = c;
                    Some(SparseMatrix::Compressed(B))
                }
                // triplet to triplet returned early
                None => None,
            },
        };
        if let Some(B) = replaced {
            *self = B;
        }

        Ok(ConversionSummary {
            from,
            to: target,
            nnz_before,
            nnz_after: counts.nnz_out,
            coalesced: counts.coalesced,
            cancelled: counts.cancelled,
        })
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), MatrixError> {
        match self {
            SparseMatrix::Triplet(A) => A.check_format()?,
            SparseMatrix::Compressed(A) => A.check_format()?,
        }
        Ok(())
    }
}

impl<T> From<TripletMatrix<T>> for SparseMatrix<T> {
    fn from(A: TripletMatrix<T>) -> Self {
        SparseMatrix::Triplet(A)
    }
}

impl<T> From<CompressedMatrix<T>> for SparseMatrix<T> {
    fn from(A: CompressedMatrix<T>) -> Self {
        SparseMatrix::Compressed(A)
    }
}

impl<T> fmt::Display for SparseMatrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type       : {}", self.format())?;
        writeln!(f, "Size       : {}", self.size())?;
        writeln!(f, "Values     : [{}]", self.values().iter().join(" "))?;
        writeln!(f, "RowIndexes : [{}]", self.row_indices().iter().join(" "))?;
        write!(f, "ColPos     : [{}]", self.col_positions().iter().join(" "))
    }
}
