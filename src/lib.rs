//! # ff_rs
//!
//! Small file-system helpers plus JSON and delimited-text (CSV-like) file support.
//!
//! The file wrappers ([`read`], [`write`], [`append`], [`cp`], [`mv`], [`rmrf`], ...)
//! join and normalize their path arguments and delegate to `std::fs`. The
//! delimited-text codec ([`encode`], [`decode`] and their record variants) is a
//! deliberately simple, lossy format: fields are split on the delimiter and
//! trimmed, with no quoting or escaping.
//!
//! ## Example
//!
//! ```rust
//! use ff_rs::{decode, encode, DecoderOptions, EncoderOptions};
//!
//! let options = EncoderOptions::default().with_header(["id", "name"]);
//! let text = encode(&[["1", "Alice"], ["2", "Bob"]], &options);
//! assert_eq!(text, "id,name\n1,Alice\n2,Bob\n");
//!
//! // The header line is stripped by default
//! let rows = decode(&text, &DecoderOptions::default());
//! assert_eq!(rows, vec![vec!["1", "Alice"], vec!["2", "Bob"]]);
//! ```
//!
//! ## Known sharp edge
//!
//! [`DecoderOptions::strip_header`] drops the first line unconditionally. A
//! header-less input of a single data line therefore decodes to no rows.

mod common;
mod decoder;
mod encoder;
mod error;
mod formats;
mod fs;

// Re-export public API
pub use common::{Delimiter, Record, Row, Table};
pub use decoder::{decode, decode_to_records, DecoderOptions};
pub use encoder::{append_rows, encode, encode_from_records, EncoderOptions};
pub use error::{Error, Result};
pub use formats::{
    append_csv, csv_to_obj, obj_to_csv, read_csv, read_json, write_csv, write_json, JsonOptions,
};
pub use fs::{append, cp, mkdir, mv, path, read, readdir, rename, rmrf, stat, touch, write};
