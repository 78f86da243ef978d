//! Output rendering for query results
//!
//! Records are written as they arrive from the stream; nothing beyond the
//! current record is held in memory.

use crate::error::Result;
use crate::types::{Record, RecordStream};
use futures::StreamExt;
use serde::Serialize;
use std::io::Write;

/// Width of the identifier column in table output
pub const ID_COLUMN_WIDTH: usize = 40;

/// How `ls` prints records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One `<id> <type>` line per record
    #[default]
    Table,
    /// A single JSON array, emitted one element at a time
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Incremental writer for a pretty-printed JSON array
#[derive(Debug, Default)]
pub struct JsonArrayWriter {
    started: bool,
}

impl JsonArrayWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one array element, opening the array on first use
    pub fn write_element<T: Serialize>(&mut self, out: &mut dyn Write, value: &T) -> Result<()> {
        let body = serde_json::to_string_pretty(value)?;
        out.write_all(if self.started { b",\n" } else { b"[\n" })?;
        self.started = true;
        write!(out, "  {}", body.replace('\n', "\n  "))?;
        out.flush()?;
        Ok(())
    }

    /// Close the array; an array with no elements renders as `[` then `]`
    pub fn finish(self, out: &mut dyn Write) -> Result<()> {
        if self.started {
            out.write_all(b"\n]\n")?;
        } else {
            out.write_all(b"[\n]\n")?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Write one table row for a record
pub fn write_table_row(out: &mut dyn Write, record: &Record) -> Result<()> {
    writeln!(
        out,
        "{:<width$} {}",
        record.id(),
        record.record_type(),
        width = ID_COLUMN_WIDTH
    )?;
    Ok(())
}

/// Drain a record stream to `out`, returning the number of records written
///
/// The first stream error is returned as-is. In JSON mode the array is left
/// open in that case.
pub async fn render_stream(
    mut stream: RecordStream<'_>,
    mode: OutputMode,
    out: &mut dyn Write,
) -> Result<usize> {
    let mut count = 0;

    match mode {
        OutputMode::Table => {
            while let Some(item) = stream.next().await {
                write_table_row(out, &item?)?;
                count += 1;
            }
        }
        OutputMode::Json => {
            let mut array = JsonArrayWriter::new();
            while let Some(item) = stream.next().await {
                array.write_element(out, &item?)?;
                count += 1;
            }
            array.finish(out)?;
        }
    }

    Ok(count)
}
