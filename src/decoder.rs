//! Delimited-text to table decoder implementation

use crate::common::{trim_field, Delimiter, Record, Row, Table};
use serde_json::Value;

/// Decoder configuration options
#[derive(Debug, Clone)]
pub struct DecoderOptions {
    /// Split each line into fields (default: true).
    /// When false, all lines are returned as the fields of a single row.
    pub parse_lines: bool,
    /// Field separator (default: Comma)
    pub delimiter: Delimiter,
    /// Drop the first line before parsing (default: true)
    pub strip_header: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            parse_lines: true,
            delimiter: Delimiter::Comma,
            strip_header: true,
        }
    }
}

impl DecoderOptions {
    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_parse_lines(mut self, parse_lines: bool) -> Self {
        self.parse_lines = parse_lines;
        self
    }

    pub fn with_strip_header(mut self, strip_header: bool) -> Self {
        self.strip_header = strip_header;
        self
    }
}

/// Decode delimited text into rows of trimmed fields.
///
/// Empty input always yields an empty table. With `strip_header` set the
/// first line is discarded unconditionally, so a single header-less data line
/// decodes to nothing. A trailing newline does not produce a trailing empty
/// row. Short rows simply have fewer fields; decoding never fails.
pub fn decode(input: &str, options: &DecoderOptions) -> Table {
    if input.is_empty() {
        return Vec::new();
    }

    let skip = usize::from(options.strip_header);
    let lines = input.split('\n').skip(skip);

    let table = if options.parse_lines {
        let mut rows: Table = lines
            .map(|line| parse_line(line, &options.delimiter))
            .collect();
        if rows.last().map(Vec::as_slice).is_some_and(is_blank_row) {
            rows.pop();
        }
        rows
    } else {
        vec![lines.map(|line| trim_field(line).to_string()).collect()]
    };

    log::trace!("decoded {} bytes into {} rows", input.len(), table.len());
    table
}

/// Decode delimited text whose first line names the fields.
///
/// Each data row becomes a record mapping header names to values by
/// position. A row shorter than the header leaves the remaining names out of
/// its record; values beyond the header's width are dropped.
pub fn decode_to_records(input: &str, delimiter: &Delimiter) -> Vec<Record> {
    let options = DecoderOptions {
        parse_lines: true,
        delimiter: delimiter.clone(),
        strip_header: false,
    };
    let mut rows = decode(input, &options).into_iter();

    let Some(header) = rows.next() else {
        return Vec::new();
    };

    rows.map(|row| {
        header
            .iter()
            .zip(row)
            .map(|(name, value)| (name.clone(), Value::String(value)))
            .collect()
    })
    .collect()
}

fn parse_line(line: &str, delimiter: &Delimiter) -> Row {
    delimiter
        .split(line)
        .into_iter()
        .map(|field| trim_field(field).to_string())
        .collect()
}

/// The spurious row left behind by a final `\n`
fn is_blank_row(row: &[String]) -> bool {
    row.len() == 1 && row[0].is_empty()
}
