#![allow(non_snake_case)]

use crate::algebra::{dim, CompressedKind, CompressedMatrix, FloatT, SparseFormatError, TripletMatrix};

impl<T> CompressedMatrix<T>
where
    T: FloatT,
{
    /// Empty compressed matrix of the given size
    pub fn empty(kind: CompressedKind, size: isize) -> Self {
        CompressedMatrix {
            kind,
            size,
            colptr: vec![0; dim(size) + 1],
            rowval: Vec::new(),
            nzval: Vec::new(),
        }
    }

    /// number of columns, i.e. the size clamped below at zero
    pub fn n(&self) -> usize {
        dim(self.size)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n()]
    }

    /// Reinterpret the stored entries.  Storage is untouched.
    pub fn relabel(&mut self, kind: CompressedKind) {
        self.kind = kind;
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        let n = self.n();

        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != n
            || self.colptr[n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colptr monotonicity
        if self.colptr[0] != 0 || self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &n) {
            return Err(SparseFormatError::BadRowval);
        }

        //check for rowval monotonicity and triangularity within each column
        for col in 0..n {
            let rows = &self.rowval[self.colptr[col]..self.colptr[col + 1]];
            if rows.windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadRowOrdering);
            }
            if rows.first().is_some_and(|&r| r < col) {
                return Err(SparseFormatError::NotLowerTriangular);
            }
        }

        if self.nzval.iter().any(|v| !v.is_finite() || *v == T::zero()) {
            return Err(SparseFormatError::BadNzval);
        }

        Ok(())
    }

    /// Returns the value at the given (row,col) index as an Option.
    /// Returns None if the given index is not a structural nonzero
    /// or is out of bounds.
    ///
    /// For the symmetric kind an upper triangle index reads its
    /// mirrored lower triangle entry.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        let n = self.n();
        if row >= n || col >= n {
            return None;
        }
        let (row, col) = match (self.kind, col > row) {
            (CompressedKind::Symmetric, true) => (col, row),
            (CompressedKind::LowerTriangular, true) => return None,
            (_, false) => (row, col),
        };

        let first = self.colptr[col];
        let last = self.colptr[col + 1];
        let rows_in_this_column = &self.rowval[first..last];
        match rows_in_this_column.binary_search(&row) {
            Ok(idx) => Some(self.nzval[first + idx]),
            Err(_) => None,
        }
    }

    /// Expand the column pointer back into one column index per
    /// entry.  Entries come out ordered by column, then row.  The
    /// symmetric kind is not mirrored.
    pub fn to_triplet(self) -> TripletMatrix<T> {
        let mut colval = Vec::with_capacity(self.nnz());
        for (col, w) in self.colptr.windows(2).enumerate() {
            colval.extend(std::iter::repeat(col).take(w[1] - w[0]));
        }
        TripletMatrix {
            size: self.size,
            nzval: self.nzval,
            rowval: self.rowval,
            colval,
        }
    }
}

#[test]
fn test_compressed_get_entry() {
    // A =
    //[1.0   ⋅    ⋅ ]
    //[3.0  2.0   ⋅ ]
    //[ ⋅   7.0  8.0]

    let mut A = CompressedMatrix {
        kind: CompressedKind::Symmetric,
        size: 3,
        colptr: vec![0, 2, 4, 5],
        rowval: vec![0, 1, 1, 2, 2],
        nzval: vec![1., 3., 2., 7., 8.],
    };
    assert!(A.check_format().is_ok());

    assert_eq!(A.get(0, 0), Some(1.));
    assert_eq!(A.get(1, 0), Some(3.));
    assert_eq!(A.get(0, 1), Some(3.));
    assert_eq!(A.get(2, 1), Some(7.));
    assert_eq!(A.get(1, 2), Some(7.));
    assert_eq!(A.get(2, 0), None);
    assert_eq!(A.get(0, 2), None);
    assert_eq!(A.get(3, 0), None);

    A.relabel(CompressedKind::LowerTriangular);
    assert_eq!(A.get(1, 0), Some(3.));
    assert_eq!(A.get(0, 1), None);
}

#[test]
fn test_compressed_check_format() {
    let good = CompressedMatrix {
        kind: CompressedKind::LowerTriangular,
        size: 3,
        colptr: vec![0, 2, 4, 5],
        rowval: vec![0, 1, 1, 2, 2],
        nzval: vec![1., 3., 2., 7., 8.],
    };
    assert!(good.check_format().is_ok());

    let mut A = good.clone();
    A.colptr = vec![0, 2, 4];
    assert_eq!(A.check_format(), Err(SparseFormatError::IncompatibleDimension));

    let mut A = good.clone();
    A.colptr = vec![0, 4, 2, 5];
    assert_eq!(A.check_format(), Err(SparseFormatError::BadColptr));

    let mut A = good.clone();
    A.rowval = vec![1, 0, 1, 2, 2];
    assert_eq!(A.check_format(), Err(SparseFormatError::BadRowOrdering));

    let mut A = good.clone();
    A.rowval = vec![0, 1, 2, 1, 2];
    assert_eq!(A.check_format(), Err(SparseFormatError::BadRowOrdering));

    let mut A = good.clone();
    A.rowval = vec![0, 1, 1, 2, 3];
    assert_eq!(A.check_format(), Err(SparseFormatError::BadRowval));

    let mut A = good.clone();
    A.rowval = vec![0, 1, 1, 2, 1];
    assert_eq!(A.check_format(), Err(SparseFormatError::NotLowerTriangular));

    let mut A = good;
    A.nzval[3] = f64::NAN;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadNzval));
}

#[test]
fn test_compressed_to_triplet() {
    let A = CompressedMatrix {
        kind: CompressedKind::Symmetric,
        size: 4,
        colptr: vec![0, 2, 2, 4, 5],
        rowval: vec![0, 3, 2, 3, 3],
        nzval: vec![1., 2., 3., 4., 5.],
    };
    let B = A.to_triplet();
    assert_eq!(B.size, 4);
    assert_eq!(B.colval, vec![0, 0, 2, 2, 3]);
    assert_eq!(B.rowval, vec![0, 3, 2, 3, 3]);
    assert_eq!(B.nzval, vec![1., 2., 3., 4., 5.]);
    assert!(B.check_format().is_ok());
}
