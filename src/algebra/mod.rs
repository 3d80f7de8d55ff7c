//! Sparse matrix storage types and format conversion.
//!
//! Matrices are square, and only the lower triangle (diagonal
//! included) is ever stored.  A [`SparseMatrix`] starts in triplet
//! form, accepts entries one at a time through
//! [`put`](SparseMatrix::put), and is then converted in place to
//! compressed column form with [`convert_to`](SparseMatrix::convert_to).

mod csc;
mod error_types;
mod floats;
mod format;
mod matrix_types;
mod sparse;
mod triplet;

pub use csc::*;
pub use error_types::*;
pub use floats::*;
pub use matrix_types::*;
pub use sparse::*;

pub(crate) use matrix_types::dim;
pub(crate) use triplet::entry_violations;

#[cfg(test)]
mod tests;
