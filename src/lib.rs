//! __sl__ stores square sparse matrices that are symmetric or lower
//! triangular.  Only the lower triangle, diagonal included, is kept.
//!
//! A matrix is assembled in triplet (coordinate) form, one entry at a
//! time, and then converted in place to compressed sparse column form.
//! Conversion sorts entries by column and then by row, sums entries
//! that share a position and removes positions that cancel to zero.
//!
//! ```
//! use sl::algebra::*;
//!
//! let mut A = SparseMatrix::<f64>::new(3);
//! A.put(2, 1, 7.0).unwrap();
//! A.put(0, 0, 1.0).unwrap();
//! A.put(1, 1, 1.0).unwrap();
//! A.put(1, 1, 1.0).unwrap();
//! A.put(1, 0, 3.0).unwrap();
//! A.put(2, 2, 8.0).unwrap();
//!
//! A.convert_to(MatrixFormat::SymmetricCompressed).unwrap();
//! assert_eq!(A.values(), &[1., 3., 2., 7., 8.]);
//! assert_eq!(A.row_indices(), &[0, 1, 1, 2, 2]);
//! assert_eq!(A.col_positions(), &[0, 2, 4, 5]);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod assembler;
pub mod handle;
pub mod io;
pub mod settings;
