//! Table to delimited-text encoder implementation

use crate::common::{value_to_field, Delimiter, Record, Row};
use std::collections::HashSet;

/// Encoder configuration options
#[derive(Debug, Clone, Default)]
pub struct EncoderOptions {
    /// Field separator (default: Comma)
    pub delimiter: Delimiter,
    /// Header line written before the rows (default: none)
    pub header: Option<Vec<String>>,
}

impl EncoderOptions {
    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_header<I, S>(mut self, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = Some(header.into_iter().map(Into::into).collect());
        self
    }
}

/// Encode rows (and an optional header) as delimited text.
///
/// The header line, when present and non-empty, ends with `\n`. Each row is
/// followed by `\n`, so a non-empty body always ends with a newline. Field
/// values are written verbatim; nothing is quoted or escaped.
pub fn encode<R, S>(rows: &[R], options: &EncoderOptions) -> String
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut encoder = Encoder::new(&options.delimiter);
    if let Some(header) = &options.header {
        encoder.write_header(header);
    }
    encoder.write_rows(rows);
    log::trace!(
        "encoded {} rows into {} bytes",
        rows.len(),
        encoder.output.len()
    );
    encoder.output
}

/// Encode records, deriving the header from the union of their keys.
///
/// Keys are ordered by first appearance across the whole sequence. A record
/// lacking a key gets an empty field in that column.
pub fn encode_from_records(records: &[Record], delimiter: &Delimiter) -> String {
    let mut seen = HashSet::new();
    let mut header: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if seen.insert(key.as_str()) {
                header.push(key.clone());
            }
        }
    }

    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            header
                .iter()
                .map(|key| record.get(key).map(value_to_field).unwrap_or_default())
                .collect()
        })
        .collect();

    let options = EncoderOptions {
        delimiter: delimiter.clone(),
        header: Some(header),
    };
    encode(&rows, &options)
}

/// Encode rows as a header-less fragment for appending to existing text.
///
/// The fragment does not start with a newline; callers appending to a file
/// prefix it with `\n` themselves (see [`crate::append_csv`]).
pub fn append_rows<R, S>(rows: &[R], delimiter: &Delimiter) -> String
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut encoder = Encoder::new(delimiter);
    encoder.write_rows(rows);
    encoder.output
}

struct Encoder<'a> {
    delimiter: &'a Delimiter,
    output: String,
}

impl<'a> Encoder<'a> {
    fn new(delimiter: &'a Delimiter) -> Self {
        Self {
            delimiter,
            output: String::new(),
        }
    }

    /// Header names joined by the delimiter; skipped when that text is empty
    fn write_header(&mut self, header: &[String]) {
        let line = header.join(self.delimiter.as_str());
        if !line.is_empty() {
            self.output.push_str(&line);
            self.output.push('\n');
        }
    }

    fn write_rows<R, S>(&mut self, rows: &[R])
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            self.write_row(row.as_ref());
        }
        if !rows.is_empty() {
            self.output.push('\n');
        }
    }

    fn write_row<S: AsRef<str>>(&mut self, row: &[S]) {
        for (j, field) in row.iter().enumerate() {
            if j > 0 {
                self.output.push_str(self.delimiter.as_str());
            }
            self.output.push_str(field.as_ref());
        }
    }
}
