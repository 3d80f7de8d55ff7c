use super::Assembler;
use crate::algebra::*;
use std::io::Write;

impl<T> Assembler<T>
where
    T: FloatT,
{
    pub(super) fn print_conversion(&mut self, summary: &ConversionSummary) -> std::io::Result<()> {
        if !self.settings.verbose {
            return Ok(());
        }

        let out = &mut self.stream;
        writeln!(out, "\nconvert: {}", summary)?;
        if summary.is_noop() {
            writeln!(out, "  (already {})", summary.to)?;
        } else {
            writeln!(out, "{}", self.matrix)?;
        }
        out.flush()
    }

    /// Print the settings and current matrix.  Does nothing unless
    /// verbose.
    pub fn print_configuration(&mut self) -> std::io::Result<()> {
        if !self.settings.verbose {
            return Ok(());
        }

        let out = &mut self.stream;
        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(out, "            sl v{}  -  sparse lower triangle", crate::VERSION)?;
        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(out, "\nsettings:")?;
        match self.settings.max_entries {
            Some(max) => writeln!(out, "  max entries      = {}", max)?,
            None => writeln!(out, "  max entries      = unlimited")?,
        }
        writeln!(
            out,
            "  cancel tolerance = {:.1e}",
            self.settings.cancel_tolerance
        )?;
        writeln!(out, "\nmatrix:")?;
        writeln!(out, "{}", self.matrix)?;
        out.flush()
    }
}
