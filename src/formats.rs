//! JSON and delimited-text files: the codec wired to the file wrappers.

use crate::common::{Delimiter, Record, Table};
use crate::decoder::{decode, decode_to_records, DecoderOptions};
use crate::encoder::{append_rows, encode, encode_from_records, EncoderOptions};
use crate::error::{Error, Result};
use crate::fs::{self, full_path};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

/// Widest indent honoured when pretty-printing JSON
const MAX_JSON_INDENT: usize = 10;

/// JSON writer configuration options
#[derive(Debug, Clone, Default)]
pub struct JsonOptions {
    /// Spaces per indentation level; 0 writes compact JSON (default: 0)
    pub indent: usize,
}

impl JsonOptions {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Reads a file and parses it as JSON.
pub fn read_json<T>(path: impl AsRef<Path>, file_name: impl AsRef<Path>) -> Result<T>
where
    T: DeserializeOwned,
{
    let full = full_path(path, file_name);
    let text = fs::read(&full, "")?;
    serde_json::from_str(&text).map_err(|e| Error::json(&full, e))
}

/// Serializes `value` as JSON and writes it to a file.
pub fn write_json<T>(
    value: &T,
    path: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
    options: &JsonOptions,
) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let full = full_path(path, file_name);
    let bytes = to_json_bytes(value, options.indent).map_err(|e| Error::json(&full, e))?;
    fs::write(bytes, &full, "")
}

fn to_json_bytes<T>(value: &T, indent: usize) -> serde_json::Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    if indent == 0 {
        return serde_json::to_vec(value);
    }

    let indent = " ".repeat(indent.min(MAX_JSON_INDENT));
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Reads a delimited-text file into rows; see [`decode`] for the policy.
pub fn read_csv(
    path: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
    options: &DecoderOptions,
) -> Result<Table> {
    let text = fs::read(path, file_name)?;
    Ok(decode(&text, options))
}

/// Reads a delimited-text file whose first line names the fields.
pub fn csv_to_obj(
    path: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
    delimiter: &Delimiter,
) -> Result<Vec<Record>> {
    let text = fs::read(path, file_name)?;
    Ok(decode_to_records(&text, delimiter))
}

/// Encodes rows (with the header from `options`, if any) and writes the file.
pub fn write_csv<R, S>(
    rows: &[R],
    path: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
    options: &EncoderOptions,
) -> Result<()>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    fs::write(&encode(rows, options), path, file_name)
}

/// Encodes records under the union of their keys and writes the file.
pub fn obj_to_csv(
    records: &[Record],
    path: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
    delimiter: &Delimiter,
) -> Result<()> {
    fs::write(&encode_from_records(records, delimiter), path, file_name)
}

/// Appends rows to a delimited-text file.
///
/// The fragment is always preceded by `\n`, so appending to a file that
/// already ends in a newline leaves a blank line between old and new rows.
pub fn append_csv<R, S>(
    rows: &[R],
    path: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
    delimiter: &Delimiter,
) -> Result<()>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut fragment = String::from("\n");
    fragment.push_str(&append_rows(rows, delimiter));
    fs::append(&fragment, path, file_name)
}
