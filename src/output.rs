use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use clap::ValueEnum;
use serde_json::{Value, json};
use tempfile::NamedTempFile;

use crate::report::{Cell, Report};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Csv,
    Json,
}

/// Write `report` to `dest`, or to stdout when `dest` is `None`.
///
/// A file is written beside its destination and renamed into place once complete, so a failed
/// run never leaves a truncated report behind.
pub fn write_report(report: &Report, format: Format, dest: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = dest else {
        return write_to(report, format, io::stdout().lock());
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;
    write_to(report, format, tmp.as_file_mut())
        .with_context(|| format!("writing {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

fn write_to(report: &Report, format: Format, out: impl Write) -> anyhow::Result<()> {
    match format {
        Format::Csv => write_csv(report, out),
        Format::Json => write_json(report, out),
    }
}

pub fn write_csv(report: &Report, out: impl Write) -> anyhow::Result<()> {
    let mut out = BufWriter::new(out);
    let mut builder = csv::WriterBuilder::new();
    builder.flexible(true).terminator(csv::Terminator::CRLF);
    for row in report.rows() {
        if row.is_empty() {
            // A separator is a bare line break, not a record holding one empty field.
            out.write_all(b"\r\n")?;
            continue;
        }
        let mut wtr = builder.from_writer(&mut out);
        wtr.write_record(row.iter().map(Cell::to_string))?;
        wtr.flush()?;
    }
    out.flush()?;
    Ok(())
}

fn cell_json(cell: &Cell) -> Value {
    match cell {
        Cell::Text(s) => Value::from(s.as_str()),
        Cell::Number(n) => Value::from(*n),
    }
}

pub fn write_json(report: &Report, out: impl Write) -> anyhow::Result<()> {
    let sections: Vec<Value> = report
        .sections
        .iter()
        .map(|s| {
            let rows: Vec<Vec<Value>> = s
                .rows
                .iter()
                .map(|r| r.iter().map(cell_json).collect())
                .collect();
            json!({ "title": s.title, "columns": s.columns, "rows": rows })
        })
        .collect();
    let mut out = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut out, &json!({ "sections": sections }))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
