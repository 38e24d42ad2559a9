//! Output formatting and writing utilities
//!
//! Status lines respect the quiet flag and color setting; structured
//! data respects the selected output format.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// Writes command output in the selected format
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{content}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }
        self.writeln(message)
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }
        if self.use_color {
            let line = format!("{} {}", "✓".green(), message);
            self.writeln(&line)
        } else {
            self.writeln(&format!("OK: {message}"))
        }
    }

    /// Write an error message (shown even in quiet mode)
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }
        if self.use_color {
            let line = format!("{} {}", "✗".red(), message);
            self.writeln(&line)
        } else {
            self.writeln(&format!("FAIL: {message}"))
        }
    }

    /// Write a section heading
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }
        if self.use_color {
            let line = format!("\n{}", title.bold());
            self.writeln(&line)
        } else {
            self.writeln(&format!("\n{title}"))
        }
    }

    /// Write structured data in the selected format
    ///
    /// In human mode data is pretty-printed JSON; in the JSON modes it
    /// is the command's machine-readable result.
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::JsonPretty | OutputFormat::Human => {
                serde_json::to_string_pretty(value)?
            }
        };
        self.writeln(&rendered)
    }
}
