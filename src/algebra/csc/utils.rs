//---------------------------------------------------------
// low-level internal utilities for counting entries per
// column and turning those counts into column pointers.
//---------------------------------------------------------

/// Count the entries of each column into `colptr[col + 1]`.
/// `colptr` must have length `n + 1` and be zeroed on entry.
pub(crate) fn colcount_shifted<'a, I>(colptr: &mut [usize], cols: I)
where
    I: IntoIterator<Item = &'a usize>,
{
    for &col in cols {
        colptr[col + 1] += 1;
    }
}

/// Prefix sum of per-column counts held in `colptr[1..]`, so that
/// `colptr[k]` becomes the number of entries in columns before `k`.
pub(crate) fn colcount_to_colptr(colptr: &mut [usize]) {
    let mut currentptr = 0;
    for p in colptr.iter_mut() {
        currentptr += *p;
        *p = currentptr;
    }
}

/// Column pointer of length `n + 1` for entries whose column indices
/// are given in ascending order.
pub(crate) fn colptr_from_sorted_cols<'a, I>(n: usize, cols: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a usize>,
{
    let mut colptr = vec![0; n + 1];
    colcount_shifted(&mut colptr, cols);
    colcount_to_colptr(&mut colptr);
    colptr
}

#[test]
fn test_colptr_from_sorted_cols() {
    assert_eq!(colptr_from_sorted_cols(3, &[0, 0, 1, 1, 2]), vec![0, 2, 4, 5]);
    assert_eq!(colptr_from_sorted_cols(4, &[1, 3]), vec![0, 0, 1, 1, 2]);
    assert_eq!(colptr_from_sorted_cols(2, &[]), vec![0, 0, 0]);
    assert_eq!(colptr_from_sorted_cols(0, &[]), vec![0]);
}
