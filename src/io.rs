//! Reading and writing ingredient collections
//!
//! The input must be a JSON array whose elements are all objects. Output is
//! pretty-printed with a two-space indent and no trailing newline; non-ASCII
//! text is written as-is rather than escaped.

use crate::error::{kind_of, Result, StripError};
use crate::types::{Record, WriteMode};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const INDENT: &[u8] = b"  ";

/// Load a collection of records from a JSON file
pub fn read_collection<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_slice(&bytes).map_err(|source| StripError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    into_records(value, path)
}

/// Split a parsed root value into records
fn into_records(value: Value, path: &Path) -> Result<Vec<Record>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(StripError::NotAnArray {
                path: path.to_path_buf(),
                found: kind_of(&other),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(StripError::NotARecord {
                path: path.to_path_buf(),
                index,
                found: kind_of(&other),
            }),
        })
        .collect()
}

/// Serialize records with a two-space indent
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)
}

/// Write a collection to `path`, creating or overwriting it
pub fn write_collection<P: AsRef<Path>>(path: P, records: &[Record], mode: WriteMode) -> Result<()> {
    let path = path.as_ref();
    match mode {
        WriteMode::Direct => write_direct(path, records),
        WriteMode::Atomic => write_atomic(path, records),
    }
}

fn write_direct(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path).map_err(|source| write_error(path, source))?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records).map_err(|source| serialize_error(path, source))?;
    writer.flush().map_err(|source| write_error(path, source))
}

fn write_atomic(path: &Path, records: &[Record]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|source| write_error(path, source))?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write_records(&mut writer, records).map_err(|source| serialize_error(path, source))?;
        writer.flush().map_err(|source| write_error(path, source))?;
    }
    temp.as_file()
        .sync_all()
        .map_err(|source| write_error(path, source))?;

    tracing::debug!(temp = %temp.path().display(), target = %path.display(), "persisting temp file");
    temp.persist(path).map_err(|source| StripError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

fn write_error(path: &Path, source: std::io::Error) -> StripError {
    StripError::Write {
        path: path.to_path_buf(),
        source,
    }
}

// A Map of Values only fails to serialize when the writer fails
fn serialize_error(path: &Path, source: serde_json::Error) -> StripError {
    write_error(path, source.into())
}
