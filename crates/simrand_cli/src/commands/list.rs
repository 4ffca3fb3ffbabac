//! List command implementation
//!
//! Prints the supported distributions and their positional parameters.

use std::io::Write;

use simrand_distributions::distribution::parameter_names_for;
use simrand_distributions::DISTRIBUTION_NAMES;

use crate::Result;

/// Run the list command
pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&mut out)?;
    out.flush()?;
    Ok(())
}

/// Writes one line per distribution.
pub fn render<W: Write>(out: &mut W) -> Result<()> {
    for name in DISTRIBUTION_NAMES {
        let params = parameter_names_for(name).unwrap_or(&[]).join(", ");
        writeln!(out, "{:<14} {}", name, params)?;
    }
    Ok(())
}
