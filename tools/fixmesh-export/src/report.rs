//! Console progress output
//!
//! Users script against these lines, so their wording and number formatting
//! are kept stable. Diagnostics belong in `tracing`, not here.

use glam::DVec3;
use std::io::{self, Write};
use std::path::Path;

use crate::error::ExportError;

/// Line-oriented progress printer
pub struct Console<W> {
    out: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn working_file(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Working file '{}'", path.display())
    }

    pub fn counts(&mut self, vertices: usize, polygons: usize) -> io::Result<()> {
        writeln!(self.out, "{vertices} vertices in file")?;
        writeln!(self.out, "{polygons} polygons in file")
    }

    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{title}")
    }

    pub fn vertex(&mut self, position: DVec3) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {} {}",
            format_float(position.x),
            format_float(position.y),
            format_float(position.z)
        )
    }

    /// Each index is followed by a space, including the last
    pub fn face(&mut self, indices: [u32; 4]) -> io::Result<()> {
        for index in indices {
            write!(self.out, "{index} ")?;
        }
        writeln!(self.out)
    }

    pub fn bytes_written(&mut self, written: u64) -> io::Result<()> {
        writeln!(self.out, "{written} bytes written")
    }

    pub fn error(&mut self, err: &ExportError) -> io::Result<()> {
        match err {
            ExportError::MissingInput => writeln!(self.out, "{err}"),
            _ => writeln!(self.out, "Error - {err}"),
        }
    }
}

/// Format a float in shortest round-trip form, always with a decimal point
/// or exponent: `1.0`, `-0.5`, `1e-05`, `1.5e+16`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{value:e}");
        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return formatted;
        };
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return format!("{mantissa}e{sign}{digits:0>2}");
    }

    let formatted = format!("{value}");
    if formatted.contains('.') {
        formatted
    } else {
        formatted + ".0"
    }
}
