use crate::domain::ports::Section;
use crate::utils::error::Result;
use std::io::Write;

/// Two illustrative fallible paths, both handled locally: guarded integer
/// division and numeric parsing. Neither propagates; the section itself
/// always returns Ok.
pub struct RecoverySection;

impl RecoverySection {
    fn report_division(out: &mut dyn Write, dividend: i64, divisor: i64) -> Result<()> {
        match dividend.checked_div(divisor) {
            Some(result) => writeln!(out, "Division result: {}", result)?,
            None => writeln!(out, "Error: {} / {} is not defined", dividend, divisor)?,
        }
        Ok(())
    }

    fn report_parse(out: &mut dyn Write, raw: &str) -> Result<()> {
        match raw.parse::<i64>() {
            Ok(value) => writeln!(out, "Successfully parsed: {}", value)?,
            Err(err) => writeln!(out, "Invalid number {:?}: {}", raw, err)?,
        }
        Ok(())
    }
}

impl Section for RecoverySection {
    fn title(&self) -> &str {
        "Error handling"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "-- guarded division --")?;
        Self::report_division(out, 10, 2)?;
        Self::report_division(out, 10, 0)?;
        // runs whether or not the divisions were defined
        writeln!(out, "Division checks done")?;

        writeln!(out, "-- numeric parsing --")?;
        Self::report_parse(out, "123")?;
        Self::report_parse(out, "abc")?;

        Ok(())
    }
}
