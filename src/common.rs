//! Common types and utilities shared between encoder and decoder

use serde_json::Value;

/// A single line of delimited text, split into fields
pub type Row = Vec<String>;

/// An ordered sequence of rows
pub type Table = Vec<Row>;

/// Field name to field value mapping, in insertion order
pub type Record = serde_json::Map<String, Value>;

/// Delimiter separating fields within a row
///
/// There is no quoting or escaping: a delimiter occurring inside a field
/// value will split that value when the text is decoded again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
    Custom(String),
}

impl Delimiter {
    /// Returns the separator text
    pub fn as_str(&self) -> &str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
            Delimiter::Semicolon => ";",
            Delimiter::Custom(s) => s,
        }
    }

    /// Splits a line into raw (untrimmed) fields.
    /// An empty separator splits into single characters.
    pub(crate) fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let sep = self.as_str();
        if sep.is_empty() {
            return line
                .char_indices()
                .map(|(i, c)| &line[i..i + c.len_utf8()])
                .collect();
        }
        line.split(sep).collect()
    }
}

impl From<&str> for Delimiter {
    fn from(s: &str) -> Self {
        match s {
            "," => Delimiter::Comma,
            "\t" => Delimiter::Tab,
            "|" => Delimiter::Pipe,
            ";" => Delimiter::Semicolon,
            other => Delimiter::Custom(other.to_string()),
        }
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        let mut buf = [0u8; 4];
        Delimiter::from(&*c.encode_utf8(&mut buf))
    }
}

/// Trims whitespace, including the no-break space and a stray `\r`, plus the BOM
pub(crate) fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Renders a JSON value as a delimited-text field
pub(crate) fn value_to_field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => normalize_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_field)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Shortest decimal form: no exponent, no trailing zeros, `-0` as `0`
fn normalize_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else if let Some(f) = n.as_f64() {
        if f == 0.0 {
            return "0".to_string();
        }

        let mut s = n.to_string();
        if s.contains('e') || s.contains('E') {
            s = format!("{}", f);
        }

        if s.contains('.') {
            let trimmed = s.trim_end_matches('0');
            trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
        } else {
            s
        }
    } else {
        n.to_string()
    }
}
