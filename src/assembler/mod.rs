//! Collaborator-level driver around a [`SparseMatrix`].
//!
//! The [`Assembler`] applies [`AssemblySettings`] on top of the core
//! matrix operations (entry limits, cancellation tolerance and
//! capacity), keeps a history of conversions, and prints progress to
//! a configurable target when `verbose` is set.  The matrix itself
//! never prints.

use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::settings::{AssemblySettings, SettingsError};
use std::io::Write;

mod info_print;

/// Assembles a single matrix under a fixed set of settings
#[derive(Debug)]
pub struct Assembler<T: FloatT = f64> {
    matrix: SparseMatrix<T>,
    /// settings fixed at construction
    pub settings: AssemblySettings<T>,
    /// every conversion applied so far, oldest first
    pub history: Vec<ConversionSummary>,
    stream: PrintTarget,
}

impl<T> Assembler<T>
where
    T: FloatT,
{
    /// Empty triplet matrix of the given size
    pub fn new(size: isize, settings: AssemblySettings<T>) -> Result<Self, SettingsError> {
        settings.validate()?;
        let capacity = settings.capacity.unwrap_or_else(|| dim(size));
        let capacity = settings.max_entries.map_or(capacity, |m| capacity.min(m));
        Ok(Self {
            matrix: SparseMatrix::with_capacity(size, capacity),
            settings,
            history: Vec::new(),
            stream: PrintTarget::default(),
        })
    }

    /// Take over an existing matrix in any format
    pub fn from_matrix(
        matrix: SparseMatrix<T>,
        settings: AssemblySettings<T>,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            matrix,
            settings,
            history: Vec::new(),
            stream: PrintTarget::default(),
        })
    }

    pub fn matrix(&self) -> &SparseMatrix<T> {
        &self.matrix
    }

    /// Release the assembled matrix
    pub fn into_matrix(self) -> SparseMatrix<T> {
        self.matrix
    }

    /// Check a proposed entry against the matrix and the
    /// configured entry limit.
    pub fn check_put(&self, row: isize, col: isize, value: T) -> ValidationReport {
        let mut report = self.matrix.check_put(row, col, value);
        if let (Some(max), SparseMatrix::Triplet(A)) = (self.settings.max_entries, &self.matrix) {
            if value != T::zero() && A.nnz() >= max {
                report.push(Violation::TooManyEntries(max));
            }
        }
        report
    }

    /// Add an entry.  See [`SparseMatrix::put`].
    pub fn put(&mut self, row: isize, col: isize, value: T) -> Result<(), MatrixError> {
        self.check_put(row, col, value).into_result()?;
        self.matrix.put(row, col, value)
    }

    /// Convert the matrix, dropping compressed entries at or below
    /// the configured cancellation tolerance.
    ///
    /// When verbose, a summary is printed after the conversion.  A
    /// failure to print is reported as [`MatrixError::Io`], but the
    /// conversion itself has already taken place.
    pub fn convert_to(&mut self, target: MatrixFormat) -> Result<ConversionSummary, MatrixError> {
        let summary = self
            .matrix
            .convert_to_with_tolerance(target, self.settings.cancel_tolerance)?;
        self.history.push(summary);
        self.print_conversion(&summary)?;
        Ok(summary)
    }

    /// As [`convert_to`](Assembler::convert_to), with the target given
    /// as a numeric format code.
    pub fn convert_to_code(&mut self, code: u8) -> Result<ConversionSummary, MatrixError> {
        let target = MatrixFormat::try_from(code)?;
        self.convert_to(target)
    }
}

impl<T> ConfigurablePrintTarget for Assembler<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}
