#![allow(non_snake_case)]
use crate::algebra::*;

fn test_matrix_3x3_triplet() -> SparseMatrix<f64> {
    // A =
    //[1.0  3.0   ⋅ ]
    //[3.0  2.0  7.0]
    //[ ⋅   7.0  8.0]
    //
    // lower triangle, entered out of order with (1,1)
    // split into two halves
    let mut A = SparseMatrix::new(3);
    A.put(2, 1, 7.0).unwrap();
    A.put(0, 0, 1.0).unwrap();
    A.put(1, 1, 1.0).unwrap();
    A.put(1, 1, 1.0).unwrap();
    A.put(1, 0, 3.0).unwrap();
    A.put(2, 2, 8.0).unwrap();
    A
}

fn test_matrix_5x5_triplet() -> SparseMatrix<f64> {
    // A =
    //[ 4.0    ⋅     ⋅     ⋅     ⋅ ]
    //[-1.0    ⋅     ⋅     ⋅     ⋅ ]
    //[  ⋅   -2.0   5.0    ⋅     ⋅ ]
    //[  ⋅     ⋅     ⋅     ⋅     ⋅ ]
    //[ 0.5    ⋅   -3.0    ⋅    6.0]
    let mut A = SparseMatrix::new(5);
    A.put(4, 4, 6.0).unwrap();
    A.put(2, 2, 2.0).unwrap();
    A.put(4, 0, 0.5).unwrap();
    A.put(3, 3, 1.0).unwrap();
    A.put(2, 1, -2.0).unwrap();
    A.put(1, 0, -1.0).unwrap();
    A.put(2, 2, 3.0).unwrap();
    A.put(4, 2, -3.0).unwrap();
    A.put(3, 3, -1.0).unwrap();
    A.put(0, 0, 4.0).unwrap();
    A
}

// small deterministic generator so that tests are repeatable
fn lcg(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 33
}

#[test]
fn test_triplet_arrays_before_conversion() {
    let A = test_matrix_3x3_triplet();
    assert_eq!(A.format(), MatrixFormat::Triplet);
    assert_eq!(A.size(), 3);
    assert_eq!(A.values(), &[7., 1., 1., 1., 3., 8.]);
    assert_eq!(A.row_indices(), &[2, 0, 1, 1, 1, 2]);
    assert_eq!(A.col_positions(), &[1, 0, 1, 1, 0, 2]);
}

#[test]
fn test_convert_coalesces_duplicates() {
    let mut A = test_matrix_3x3_triplet();
    let summary = A.convert_to(MatrixFormat::SymmetricCompressed).unwrap();
    assert_eq!(A.format(), MatrixFormat::SymmetricCompressed);
    assert_eq!(A.values(), &[1., 3., 2., 7., 8.]);
    assert_eq!(A.row_indices(), &[0, 1, 1, 2, 2]);
    assert_eq!(A.col_positions(), &[0, 2, 4, 5]);
    assert_eq!(summary.nnz_before, 6);
    assert_eq!(summary.nnz_after, 5);
    assert_eq!(summary.coalesced, 1);
    assert_eq!(summary.cancelled, 0);
    assert!(A.check_format().is_ok());
}

#[test]
fn test_convert_with_cancellation_and_empty_column() {
    let mut A = test_matrix_5x5_triplet();
    A.convert_to(MatrixFormat::LowerTriangularCompressed).unwrap();
    assert_eq!(A.values(), &[4., -1., 0.5, -2., 5., -3., 6.]);
    assert_eq!(A.row_indices(), &[0, 1, 4, 2, 2, 4, 4]);
    assert_eq!(A.col_positions(), &[0, 3, 4, 6, 6, 7]);
    assert_eq!(A.get(3, 3), None);
    assert_eq!(A.get(2, 2), Some(5.));
    assert!(A.check_format().is_ok());
}

#[test]
fn test_display() {
    let mut A = test_matrix_3x3_triplet();
    assert_eq!(
        A.to_string(),
        "Type       : triplet matrix format\n\
         Size       : 3\n\
         Values     : [7 1 1 1 3 8]\n\
         RowIndexes : [2 0 1 1 1 2]\n\
         ColPos     : [1 0 1 1 0 2]"
    );

    A.convert_to(MatrixFormat::SymmetricCompressed).unwrap();
    assert_eq!(
        A.to_string(),
        "Type       : sparse symmetrical matrix\n\
         Size       : 3\n\
         Values     : [1 3 2 7 8]\n\
         RowIndexes : [0 1 1 2 2]\n\
         ColPos     : [0 2 4 5]"
    );

    let B = SparseMatrix::<f64>::new(0);
    assert_eq!(
        B.to_string(),
        "Type       : triplet matrix format\n\
         Size       : 0\n\
         Values     : []\n\
         RowIndexes : []\n\
         ColPos     : []"
    );
}

#[test]
fn test_convert_is_idempotent() {
    for target in [
        MatrixFormat::SymmetricCompressed,
        MatrixFormat::LowerTriangularCompressed,
    ] {
        let mut A = test_matrix_5x5_triplet();
        A.convert_to(target).unwrap();
        let once = A.clone();
        let summary = A.convert_to(target).unwrap();
        assert!(summary.is_noop());
        assert_eq!(A, once);
    }

    let mut A = test_matrix_5x5_triplet();
    let before = A.clone();
    assert!(A.convert_to(MatrixFormat::Triplet).unwrap().is_noop());
    assert_eq!(A, before);
}

#[test]
fn test_relabel_keeps_storage() {
    let mut A = test_matrix_5x5_triplet();
    A.convert_to(MatrixFormat::SymmetricCompressed).unwrap();
    let before = A.clone();

    let summary = A.convert_to(MatrixFormat::LowerTriangularCompressed).unwrap();
    assert_eq!(A.format(), MatrixFormat::LowerTriangularCompressed);
    assert_eq!(summary.nnz_before, summary.nnz_after);
    assert_eq!(A.values(), before.values());
    assert_eq!(A.row_indices(), before.row_indices());
    assert_eq!(A.col_positions(), before.col_positions());

    A.convert_to(MatrixFormat::SymmetricCompressed).unwrap();
    assert_eq!(A, before);
}

#[test]
fn test_put_on_compressed_is_rejected() {
    let mut A = test_matrix_3x3_triplet();
    A.convert_to(MatrixFormat::LowerTriangularCompressed).unwrap();
    let before = A.clone();

    let err = A.put(1, 0, 2.0).unwrap_err();
    let report = err.report().unwrap();
    assert_eq!(
        report.violations(),
        &[Violation::NotTriplet(MatrixFormat::LowerTriangularCompressed)]
    );

    // the format complaint is reported alongside everything else
    let err = A.put(0, 5, f64::INFINITY).unwrap_err();
    assert_eq!(err.report().unwrap().len(), 4);
    assert_eq!(A, before);
}

#[test]
fn test_put_aggregates_violations() {
    let mut A = SparseMatrix::<f64>::new(3);
    let err = A.put(-1, 99, f64::NAN).unwrap_err();
    let report = err.report().unwrap();
    assert!(report.len() >= 4);
    assert!(report.contains(&Violation::NegativeRow(-1)));
    assert!(report.contains(&Violation::ColTooLarge { col: 99, size: 3 }));
    assert!(report.contains(&Violation::AboveDiagonal { row: -1, col: 99 }));
    assert!(report.contains(&Violation::NanValue));
    assert_eq!(A.nnz(), 0);

    let msg = err.to_string();
    assert!(msg.contains("row index -1 is negative"));
    assert!(msg.contains("value is NaN"));
}

#[test]
fn test_put_zero_never_changes_lengths() {
    let mut A = test_matrix_3x3_triplet();
    for (r, c) in [(0, 0), (1, 0), (2, 2), (2, 1)] {
        A.put(r, c, 0.0).unwrap();
        assert_eq!(A.nnz(), 6);
        assert_eq!(A.row_indices().len(), 6);
        assert_eq!(A.col_positions().len(), 6);
    }
}

#[test]
fn test_compressed_back_to_triplet() {
    let mut A = test_matrix_3x3_triplet();
    A.convert_to(MatrixFormat::SymmetricCompressed).unwrap();
    let summary = A.convert_to(MatrixFormat::Triplet).unwrap();
    assert_eq!(summary.from, MatrixFormat::SymmetricCompressed);
    assert_eq!(A.format(), MatrixFormat::Triplet);
    assert_eq!(A.values(), &[1., 3., 2., 7., 8.]);
    assert_eq!(A.row_indices(), &[0, 1, 1, 2, 2]);
    assert_eq!(A.col_positions(), &[0, 0, 1, 1, 2]);

    // entries may be added again
    A.put(2, 0, 9.0).unwrap();
    A.convert_to(MatrixFormat::SymmetricCompressed).unwrap();
    assert_eq!(A.col_positions(), &[0, 3, 5, 6]);
    assert_eq!(A.get(0, 2), Some(9.0));
}

#[test]
fn test_convert_empty_matrices() {
    for size in [-1, 0, 1, 4] {
        let mut A = SparseMatrix::<f64>::new(size);
        A.convert_to(MatrixFormat::SymmetricCompressed).unwrap();
        assert_eq!(A.nnz(), 0);
        assert_eq!(A.col_positions().len(), size.max(0) as usize + 1);
        assert!(A.col_positions().iter().all(|&p| p == 0));
        assert!(A.check_format().is_ok());
    }
}

#[test]
fn test_convert_column_ranges_random() {
    let mut state = 42;
    for size in [1isize, 2, 7, 20] {
        let mut A = SparseMatrix::<f64>::new(size);
        let mut dense = vec![vec![0.0f64; size as usize]; size as usize];
        for _ in 0..(4 * size * size) {
            let r = (lcg(&mut state) % size as u64) as usize;
            let c = (lcg(&mut state) % (r as u64 + 1)) as usize;
            let v = (lcg(&mut state) % 7) as f64 - 3.0;
            A.put(r as isize, c as isize, v).unwrap();
            dense[r][c] += v;
        }
        A.convert_to(MatrixFormat::LowerTriangularCompressed).unwrap();
        assert!(A.check_format().is_ok());

        let colptr = A.col_positions();
        let rows = A.row_indices();
        for k in 0..size as usize {
            let rng = colptr[k]..colptr[k + 1];
            assert!(rows[rng.clone()].windows(2).all(|w| w[0] < w[1]));
            assert!(rows[rng].iter().all(|&r| r >= k));
        }

        // small integers sum exactly, so compare against a dense sum
        for r in 0..size as usize {
            for c in 0..=r {
                let expected = if dense[r][c] == 0.0 { None } else { Some(dense[r][c]) };
                assert_eq!(A.get(r, c), expected);
            }
        }
    }
}

#[test]
fn test_convert_f32() {
    let mut A = SparseMatrix::<f32>::new(2);
    A.put(1, 0, 0.5).unwrap();
    A.put(1, 0, 0.25).unwrap();
    A.put(1, 1, 2.0).unwrap();
    A.convert_to(MatrixFormat::SymmetricCompressed).unwrap();
    assert_eq!(A.values(), &[0.75f32, 2.0]);
    assert_eq!(A.get(0, 1), Some(0.75f32));
}

#[test]
fn test_convert_rejects_malformed_triplet() {
    let B = TripletMatrix {
        size: 2,
        nzval: vec![1.0],
        rowval: vec![1],
        colval: vec![5],
    };
    let mut A = SparseMatrix::from(B.clone());

    let err = A.convert_to(MatrixFormat::SymmetricCompressed).unwrap_err();
    assert!(matches!(err, MatrixError::Format(SparseFormatError::BadColval)));
    assert_eq!(A.as_triplet(), Some(&B));

    // array lengths out of step
    let mut A = SparseMatrix::from(TripletMatrix {
        size: 2,
        nzval: vec![1.0, 2.0],
        rowval: vec![1],
        colval: vec![0, 0],
    });
    let err = A.convert_to(MatrixFormat::LowerTriangularCompressed).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::Format(SparseFormatError::IncompatibleDimension)
    ));
    assert_eq!(A.format(), MatrixFormat::Triplet);
    assert_eq!(A.nnz(), 2);
}

#[test]
fn test_convert_rejects_malformed_compressed() {
    let C = CompressedMatrix {
        kind: CompressedKind::Symmetric,
        size: 3,
        colptr: vec![0, 2],
        rowval: vec![0, 1],
        nzval: vec![1.0, 2.0],
    };
    let mut A = SparseMatrix::from(C.clone());

    let err = A.convert_to(MatrixFormat::Triplet).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::Format(SparseFormatError::IncompatibleDimension)
    ));
    assert_eq!(A.as_compressed(), Some(&C));
    assert!(A.as_triplet().is_none());

    // relabeling does not reshape storage
    A.convert_to(MatrixFormat::LowerTriangularCompressed).unwrap();
    assert_eq!(A.row_indices(), &[0, 1]);
}

#[test]
fn test_as_triplet_and_as_compressed() {
    let mut A = test_matrix_3x3_triplet();
    assert_eq!(A.as_triplet().map(|B| B.nnz()), Some(6));
    assert!(A.as_compressed().is_none());

    A.convert_to(MatrixFormat::LowerTriangularCompressed).unwrap();
    assert!(A.as_triplet().is_none());
    let C = A.as_compressed().unwrap();
    assert_eq!(C.kind, CompressedKind::LowerTriangular);
    assert_eq!(C.nnz(), 5);
}
