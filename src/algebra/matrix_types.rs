// Matrices are assembled in triplet form and then compressed
// into column form.  Only the lower triangle (diagonal included)
// is ever stored.

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Storage format of a [`SparseMatrix`]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixFormat {
    /// Compressed column storage of the lower triangle of a symmetric matrix
    SymmetricCompressed,
    /// Compressed column storage of a lower triangular matrix
    LowerTriangularCompressed,
    /// Unordered (row, column, value) entries
    Triplet,
}

/// Interpretation of a compressed matrix.  Both kinds share the
/// same physical layout.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CompressedKind {
    /// Each stored off-diagonal entry also implies its mirrored upper entry
    Symmetric,
    /// Entries above the diagonal are zero
    LowerTriangular,
}

/// Square sparse matrix in triplet (coordinate) format
///
/// Entries are kept in insertion order and may repeat the same
/// position.  Repeated positions are summed on compression.
///
/// __Example usage__ : To assemble the lower triangle of
/// ```text
/// A = [1.  3.  0.]
///     [3.  2.  7.]
///     [0.  7.  8.]
/// ```
///
/// ```no_run
/// use sl::algebra::TripletMatrix;
///
/// let mut A = TripletMatrix::<f64>::new(3);
/// A.put(0, 0, 1.).unwrap();
/// A.put(1, 0, 3.).unwrap();
/// A.put(1, 1, 2.).unwrap();
/// A.put(2, 1, 7.).unwrap();
/// A.put(2, 2, 8.).unwrap();
/// assert_eq!(A.nnz(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct TripletMatrix<T = f64> {
    /// number of rows and columns
    pub size: isize,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
    /// row index of each element
    pub rowval: Vec<usize>,
    /// column index of each element
    pub colval: Vec<usize>,
}

/// Square sparse matrix in Compressed Sparse Column (CSC) format,
/// holding the lower triangle only.
///
/// ```text
/// A = [1.  .   . ]
///     [3.  2.  . ]
///     [0.  7.  8.]
///
/// colptr = [0 2 4 5]
/// rowval = [0 1 1 2 2]
/// nzval  = [1 3 2 7 8]
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct CompressedMatrix<T = f64> {
    /// symmetric or lower triangular interpretation
    pub kind: CompressedKind,
    /// number of rows and columns
    pub size: isize,
    /// CSC format column pointer.
    ///
    /// Ths field has length `n+1`, where `n` is the size clamped
    /// below at zero.  The last entry corresponds to the number of
    /// nonzeros and agrees with the lengths of the `rowval` and
    /// `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

/// Sparse square matrix in either triplet or compressed form.
///
/// Entry insertion is only available on the triplet form.  Conversion
/// to a compressed format consumes the triplet entries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub enum SparseMatrix<T = f64> {
    /// matrix under assembly
    Triplet(TripletMatrix<T>),
    /// matrix in canonical column form
    Compressed(CompressedMatrix<T>),
}

/// Clamp a signed matrix size to a column count.
#[inline]
pub(crate) fn dim(size: isize) -> usize {
    usize::try_from(size).unwrap_or(0)
}
