//! Entry points for callers that hold an optional matrix reference,
//! such as foreign function wrappers.
//!
//! These mirror [`SparseMatrix::put`] and [`SparseMatrix::convert_to`],
//! but also report an absent matrix.

use crate::algebra::*;

/// Add an entry to `matrix`.
///
/// An absent matrix is reported as [`Violation::NilReceiver`] together
/// with every other problem that can be detected without it.
pub fn put<T: FloatT>(
    matrix: Option<&mut SparseMatrix<T>>,
    row: isize,
    col: isize,
    value: T,
) -> Result<(), MatrixError> {
    match matrix {
        Some(matrix) => matrix.put(row, col, value),
        None => {
            let mut report = ValidationReport::from(Violation::NilReceiver);
            entry_violations(&mut report, None, row, col, value);
            Err(MatrixError::Validation(report))
        }
    }
}

/// Convert `matrix` in place.  Fails with [`MatrixError::NilReceiver`]
/// if the matrix is absent.
pub fn convert_to<T: FloatT>(
    matrix: Option<&mut SparseMatrix<T>>,
    target: MatrixFormat,
) -> Result<ConversionSummary, MatrixError> {
    let matrix = matrix.ok_or(MatrixError::NilReceiver)?;
    matrix.convert_to(target)
}

/// As [`convert_to`], with the target given as a numeric format code
/// (1 symmetric, 2 lower triangular, 3 triplet).
pub fn convert_to_code<T: FloatT>(
    matrix: Option<&mut SparseMatrix<T>>,
    code: u8,
) -> Result<ConversionSummary, MatrixError> {
    let matrix = matrix.ok_or(MatrixError::NilReceiver)?;
    let target = MatrixFormat::try_from(code)?;
    matrix.convert_to(target)
}

/// Display text of `matrix`, or `None` if absent
pub fn to_display_string<T: FloatT>(matrix: Option<&SparseMatrix<T>>) -> Option<String> {
    matrix.map(|m| m.to_string())
}
