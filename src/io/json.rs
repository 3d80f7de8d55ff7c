use crate::algebra::*;

use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{Read, Write};

/// Reading and writing matrices as JSON
pub trait MatrixJSONReadWrite: Sized {
    /// Write the matrix, in its current format, to `file`
    fn write_to_file(&self, file: &mut File) -> Result<(), MatrixError>;

    /// Read a matrix from `file`.  The data is checked for
    /// structural problems before it is returned.
    fn read_from_file(file: &mut File) -> Result<Self, MatrixError>;
}

impl<T> MatrixJSONReadWrite for SparseMatrix<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn write_to_file(&self, file: &mut File) -> Result<(), MatrixError> {
        let json = serde_json::to_string(self).map_err(std::io::Error::from)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, MatrixError> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let matrix: SparseMatrix<T> =
            serde_json::from_str(&buffer).map_err(std::io::Error::from)?;
        matrix.check_format()?;
        Ok(matrix)
    }
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let mut A = SparseMatrix::<f64>::new(3);
    A.put(2, 1, 7.0).unwrap();
    A.put(0, 0, 1.0).unwrap();
    A.put(2, 1, 0.125).unwrap();

    // triplet data survives unchanged, duplicates included
    let mut file = tempfile::tempfile().unwrap();
    A.write_to_file(&mut file).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let B = SparseMatrix::<f64>::read_from_file(&mut file).unwrap();
    assert_eq!(A, B);

    A.convert_to(MatrixFormat::LowerTriangularCompressed).unwrap();
    let mut file = tempfile::tempfile().unwrap();
    A.write_to_file(&mut file).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let B = SparseMatrix::<f64>::read_from_file(&mut file).unwrap();
    assert_eq!(A, B);
    assert_eq!(B.format(), MatrixFormat::LowerTriangularCompressed);
}

#[test]
fn test_json_rejects_malformed() {
    use std::io::{Seek, SeekFrom};

    let bad = CompressedMatrix {
        kind: CompressedKind::Symmetric,
        size: 2,
        colptr: vec![0, 2, 2],
        rowval: vec![1, 0],
        nzval: vec![1., 2.],
    };
    let mut file = tempfile::tempfile().unwrap();
    SparseMatrix::from(bad).write_to_file(&mut file).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let err = SparseMatrix::<f64>::read_from_file(&mut file).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::Format(SparseFormatError::BadRowOrdering)
    ));

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(b"{\"Triplet\": 3}").unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let err = SparseMatrix::<f64>::read_from_file(&mut file).unwrap_err();
    assert!(matches!(err, MatrixError::Io(_)));
}
