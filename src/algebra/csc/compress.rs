#![allow(non_snake_case)]

use super::utils::{colcount_shifted, colcount_to_colptr, colptr_from_sorted_cols};
use crate::algebra::{dim, CompressedKind, CompressedMatrix, FloatT, TripletMatrix};

/// Entry counts gathered while compressing a triplet matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressionCounts {
    /// triplet entries consumed
    pub nnz_in: usize,
    /// entries folded into an earlier entry at the same position
    pub coalesced: usize,
    /// positions whose summed value cancelled and were dropped
    pub cancelled: usize,
    /// entries in the compressed result
    pub nnz_out: usize,
}

impl<T> TripletMatrix<T>
where
    T: FloatT,
{
    /// Compress into column form, summing repeated positions and
    /// dropping positions that sum exactly to zero.
    pub fn compress(self, kind: CompressedKind) -> CompressedMatrix<T> {
        self.compress_with_tolerance(kind, T::zero()).0
    }

    /// Compress into column form.
    ///
    /// Entries are ordered by a stable sort on column, then a stable
    /// sort on row within each column.  Repeated positions are summed
    /// left to right in that order, and any position whose sum is
    /// zero or has magnitude `<= tol` is removed.
    pub fn compress_with_tolerance(
        self,
        kind: CompressedKind,
        tol: T,
    ) -> (CompressedMatrix<T>, CompressionCounts) {
        let n = dim(self.size);
        let nnz = self.nnz();

        // stable ordering by column.  Only a permutation is sorted
        // so that the three arrays move together.
        let mut perm: Vec<usize> = (0..nnz).collect();
        perm.sort_by_key(|&p| self.colval[p]);

        // column ranges of the sorted entries
        let mut colptr = vec![0; n + 1];
        colcount_shifted(&mut colptr, &self.colval);
        colcount_to_colptr(&mut colptr);

        // stable ordering by row within each column
        for col in 0..n {
            perm[colptr[col]..colptr[col + 1]].sort_by_key(|&p| self.rowval[p]);
        }

        // coalesce runs of equal position into the first entry of
        // the run.  `None` marks a slot folded into its run head.
        let mut vals: Vec<Option<T>> = perm.iter().map(|&p| Some(self.nzval[p])).collect();
        let mut coalesced = 0;
        let mut head = 0;
        for i in 1..nnz {
            let (p, q) = (perm[head], perm[i]);
            if self.rowval[p] == self.rowval[q] && self.colval[p] == self.colval[q] {
                let v = vals[i].take().unwrap_or_else(T::zero);
                if let Some(h) = vals[head].as_mut() {
                    *h += v;
                }
                coalesced += 1;
            } else {
                head = i;
            }
        }

        // drop cancelled positions
        let mut cancelled = 0;
        for v in vals.iter_mut() {
            if matches!(v, Some(x) if *x == T::zero() || x.abs() <= tol) {
                *v = None;
                cancelled += 1;
            }
        }

        // compact into freshly allocated arrays
        let nnz_out = vals.iter().filter(|v| v.is_some()).count();
        let mut nzval = Vec::with_capacity(nnz_out);
        let mut rowval = Vec::with_capacity(nnz_out);
        let mut colval = Vec::with_capacity(nnz_out);
        for (&p, v) in perm.iter().zip(vals) {
            if let Some(v) = v {
                nzval.push(v);
                rowval.push(self.rowval[p]);
                colval.push(self.colval[p]);
            }
        }
        let colptr = colptr_from_sorted_cols(n, &colval);

        let counts = CompressionCounts {
            nnz_in: nnz,
            coalesced,
            cancelled,
            nnz_out,
        };

        let A = CompressedMatrix {
            kind,
            size: self.size,
            colptr,
            rowval,
            nzval,
        };
        (A, counts)
    }
}
