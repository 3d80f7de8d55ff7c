use crate::algebra::MatrixFormat;
use itertools::Itertools;
use thiserror::Error;

/// A single failed precondition of a matrix operation.
///
/// Operations never stop at the first failed check.  Every independent
/// problem is collected into a [`ValidationReport`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("matrix is nil")]
    /// The matrix reference was absent
    NilReceiver,
    #[error("matrix format must be triplet, found {0}")]
    /// Entries can only be added to a triplet matrix
    NotTriplet(MatrixFormat),
    #[error("row index {0} is negative")]
    /// Row index below zero
    NegativeRow(isize),
    #[error("row index {row} is out of range for size {size}")]
    /// Row index at or beyond the matrix size
    RowTooLarge { row: isize, size: isize },
    #[error("column index {0} is negative")]
    /// Column index below zero
    NegativeCol(isize),
    #[error("column index {col} is out of range for size {size}")]
    /// Column index at or beyond the matrix size
    ColTooLarge { col: isize, size: isize },
    #[error("entry ({row}, {col}) is above the diagonal, column must not exceed row")]
    /// Only lower triangle or diagonal entries are accepted
    AboveDiagonal { row: isize, col: isize },
    #[error("value is NaN")]
    /// Value is not a number
    NanValue,
    #[error("value is infinite")]
    /// Value is +inf or -inf
    InfiniteValue,
    #[error("triplet entry limit of {0} reached")]
    /// Configured triplet capacity is exhausted
    TooManyEntries(usize),
    #[error("unrecognized matrix format '{0}'")]
    /// Format tag does not name a known format
    UnknownFormat(String),
}

/// Ordered collection of every [`Violation`] detected by one call.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", joined(.violations))]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn extend(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }

    /// `Ok(())` if nothing was collected, otherwise the report as an error
    pub fn into_result(self) -> Result<(), MatrixError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(MatrixError::Validation(self))
        }
    }
}

impl From<Violation> for ValidationReport {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

fn joined(violations: &[Violation]) -> String {
    violations.iter().join("\n")
}

/// Error type returned by matrix operations.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// The matrix reference passed to an operation was absent
    #[error("matrix is nil")]
    NilReceiver,
    /// One or more preconditions failed.  No mutation took place.
    #[error("matrix validation failed:\n{0}")]
    Validation(#[from] ValidationReport),
    /// Stored data does not describe a well formed matrix
    #[error("malformed matrix data: {0}")]
    Format(#[from] SparseFormatError),
    /// Failure reading or writing matrix data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatrixError {
    /// The aggregated violations, if this is a validation failure
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            MatrixError::Validation(report) => Some(report),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by structural checks on stored matrix data.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Data is not sorted by row index within each column
    #[error("Data is not sorted by row index within each column")]
    BadRowOrdering,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
    #[error("Column value exceeds the matrix column dimension")]
    /// Column value exceeds the matrix column dimension
    BadColval,
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
    #[error("Entry above the diagonal")]
    /// An entry lies in the strict upper triangle
    NotLowerTriangular,
    #[error("Zero or non-finite stored value")]
    /// A stored value is zero, NaN or infinite
    BadNzval,
}

#[test]
fn test_validation_report_display() {
    let mut report = ValidationReport::from(Violation::NegativeRow(-1));
    let mut more = ValidationReport::new();
    more.push(Violation::NanValue);
    more.push(Violation::InfiniteValue);
    report.extend(more);

    assert_eq!(report.len(), 3);
    assert_eq!(
        report.to_string(),
        "row index -1 is negative\nvalue is NaN\nvalue is infinite"
    );
    assert!(ValidationReport::new().into_result().is_ok());

    let err = report.into_result().unwrap_err();
    assert!(err
        .to_string()
        .starts_with("matrix validation failed:\nrow index -1 is negative"));
}
