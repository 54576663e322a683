use crate::error::Result;
use crate::types::OperationOutcome;
use serde_json::Value;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One pretty-printed JSON array
    #[default]
    Json,
    /// One compact JSON value per line
    JsonLines,
}

/// Writes the data produced by an operation
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        OutputWriter { writer, format }
    }

    pub fn write_outcome(&mut self, outcome: &OperationOutcome) -> Result<()> {
        self.write_items(&outcome.data)
    }

    pub fn write_items(&mut self, items: &[Value]) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.writer, items)?;
                writeln!(self.writer)?;
            }
            OutputFormat::JsonLines => {
                for item in items {
                    serde_json::to_writer(&mut self.writer, item)?;
                    writeln!(self.writer)?;
                }
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// File name for an export, stamped with the current time in milliseconds
pub fn default_export_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("assay-output-{}.json", millis)
}
