use ff_rs::{
    decode, decode_to_records, encode, encode_from_records, DecoderOptions, Delimiter,
    EncoderOptions, Table,
};

fn main() {
    println!("=== Roundtrip Tests ===\n");

    let table: Table = vec![
        vec!["1".into(), "Alice".into(), "admin".into()],
        vec!["2".into(), "Bob".into(), "".into()],
    ];

    for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe, Delimiter::Semicolon] {
        let options = EncoderOptions::default()
            .with_delimiter(delimiter.clone())
            .with_header(["id", "name", "role"]);
        let text = encode(&table, &options);
        let decoded = decode(&text, &DecoderOptions::default().with_delimiter(delimiter.clone()));

        println!("{:?}: {}", delimiter, if decoded == table { "ok" } else { "MISMATCH" });

        let records = decode_to_records(&text, &delimiter);
        let again = encode_from_records(&records, &delimiter);
        println!("  records: {}", if again == text { "ok" } else { "MISMATCH" });
    }

    // A delimiter inside a value does not survive
    let lossy = encode(&[["a,b", "c"]], &EncoderOptions::default());
    let decoded = decode(&lossy, &DecoderOptions::default().with_strip_header(false));
    println!("\nlossy: {:?} -> {:?}", [["a,b", "c"]], decoded);
}
