//! Run with `RUST_LOG=ff_rs=debug cargo run --example csv_files` to see each
//! file operation.

use ff_rs::{DecoderOptions, Delimiter, EncoderOptions, JsonOptions, Record};
use serde_json::json;
use std::path::Path;

fn main() -> ff_rs::Result<()> {
    env_logger::init();

    let dir = std::env::temp_dir().join("ff_rs_demo");
    ff_rs::rmrf(&dir)?;
    ff_rs::mkdir(&dir)?;

    // Write a table with a header, then append two rows
    let options = EncoderOptions::default().with_header(["city", "country"]);
    ff_rs::write_csv(&[["Rome", "Italy"]], &dir, "cities.csv", &options)?;
    ff_rs::append_csv(
        &[["Lyon", "France"], ["Porto", "Portugal"]],
        &dir,
        "cities.csv",
        &Delimiter::Comma,
    )?;
    println!("cities.csv:\n{}", ff_rs::read(&dir, "cities.csv")?);

    // The blank separator line left by the append decodes as an empty row
    let rows = ff_rs::read_csv(&dir, "cities.csv", &DecoderOptions::default())?;
    println!("rows: {:?}", rows);

    // Records in, records out
    let records = ff_rs::csv_to_obj(&dir, "cities.csv", &Delimiter::Comma)?;
    let pretty = JsonOptions::default().with_indent(2);
    ff_rs::write_json(&records, &dir, "cities.json", &pretty)?;
    println!("cities.json:\n{}", ff_rs::read(&dir, "cities.json")?);

    let cities: Vec<Record> = ff_rs::read_json(&dir, "cities.json")?;
    ff_rs::obj_to_csv(&cities, &dir, "copy.csv", &Delimiter::Pipe)?;
    println!("copy.csv:\n{}", ff_rs::read(&dir, "copy.csv")?);

    // Move the whole directory and list what arrived
    let moved = ff_rs::path([dir.as_path(), Path::new(".."), Path::new("ff_rs_demo_moved")]);
    ff_rs::rmrf(&moved)?;
    ff_rs::mv(&dir, &moved)?;
    println!("moved: {:?}", ff_rs::readdir(&moved)?);
    println!("size of cities.csv: {} bytes", ff_rs::stat(moved.join("cities.csv"))?.len());

    ff_rs::write_json(&json!({"done": true}), &moved, "status.json", &JsonOptions::default())?;
    ff_rs::rmrf(&moved)
}
