//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether the target path is the stdout placeholder `-`.
pub fn is_stdout(path: &Path) -> bool {
    path == Path::new("-")
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if is_stdout(path) {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod table {
    use std::io::Write;

    use serde::Serialize;

    use crate::ExportError;

    /// CSV row of the property table: `aircraft,key,label,unit,value`.
    #[derive(Debug, Clone, Serialize)]
    pub struct Record<'a> {
        pub aircraft: &'a str,
        pub key: &'a str,
        pub label: &'a str,
        pub unit: &'a str,
        pub value: f64,
    }

    /// Write the header and every record.
    pub fn write<W: Write>(writer: W, records: &[Record<'_>]) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for record in records {
            csv.serialize(record)?;
        }
        csv.flush()?;
        Ok(())
    }
}

pub mod series {
    use std::io::Write;

    use serde::Serialize;

    use crate::ExportError;

    /// Long-format CSV row: one `(x, y)` sample of a labelled curve.
    #[derive(Debug, Clone, Serialize)]
    pub struct Record<'a> {
        pub series: &'a str,
        pub x: f64,
        pub y: f64,
    }

    /// A named curve to be flattened into long-format rows.
    #[derive(Debug, Clone, Copy)]
    pub struct Curve<'a> {
        pub label: &'a str,
        pub points: &'a [(f64, f64)],
    }

    /// Write every curve as `series,x,y` rows, curves in order, points in order.
    pub fn write<W: Write>(writer: W, curves: &[Curve<'_>]) -> Result<usize, ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        let mut rows = 0;
        for curve in curves {
            for &(x, y) in curve.points {
                csv.serialize(Record {
                    series: curve.label,
                    x,
                    y,
                })?;
                rows += 1;
            }
        }
        csv.flush()?;
        Ok(rows)
    }
}

pub mod report {
    use std::io::Write;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use crate::ExportError;

    /// Pretty-print any serializable report as JSON followed by a newline.
    pub fn write<W: Write, T: Serialize + ?Sized>(
        mut writer: W,
        report: &T,
    ) -> Result<(), ExportError> {
        to_writer_pretty(&mut writer, report)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
