use ff_rs::{decode, encode, encode_from_records, DecoderOptions, Delimiter, EncoderOptions, Record};
use serde_json::json;

fn main() {
    println!("=== Delimited text examples ===\n");

    // Example 1: Rows with a header
    println!("1. Rows with a header:");
    let options = EncoderOptions::default().with_header(["id", "name", "role"]);
    let text = encode(&[["1", "Alice", "admin"], ["2", "Bob", "user"]], &options);
    println!("{}", text);

    // Example 2: Tab-separated, no header
    println!("2. Tab-separated:");
    let options = EncoderOptions::default().with_delimiter(Delimiter::Tab);
    println!("{}", encode(&[["x", "y"], ["1", "2"]], &options));

    // Example 3: Records with different keys
    println!("3. Records (union of keys, missing ones left empty):");
    let records: Vec<Record> = serde_json::from_value(json!([
        {"id": 1, "name": "Alice"},
        {"id": 2, "email": "bob@example.com"}
    ]))
    .unwrap();
    println!("{}", encode_from_records(&records, &Delimiter::Comma));

    // Example 4: Decoding, header stripped
    println!("4. Decoding:");
    let rows = decode("id,name\n 1 , Alice \n2,Bob\n", &DecoderOptions::default());
    println!("{:?}\n", rows);

    // Example 5: Raw lines
    println!("5. Raw lines:");
    let options = DecoderOptions::default().with_parse_lines(false);
    println!("{:?}", decode("header\nfirst line\nsecond line", &options));
}
