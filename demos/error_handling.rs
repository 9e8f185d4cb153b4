//! Error handling example for ubike-rs
//!
//! This example demonstrates the loader's failure modes and that an empty
//! search result is not an error.

use ubike_rs::prelude::*;
use ubike_rs::{DataSourceError, MalformedRecordError};

fn main() -> Result<()> {
    println!("=== ubike-rs Error Handling Example ===\n");

    // Example 1: Missing file
    println!("--- Example 1: Loading a file that does not exist ---");
    match StationDb::load_from_path("does-not-exist.json") {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(StationError::DataSource(DataSourceError::NotFound { path, .. })) => {
            println!("✗ Not found: {}", path.display())
        }
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Wrong top-level shape
    println!("--- Example 2: Top-level object instead of array ---");
    if let Err(e) = StationDb::load_from_str(r#"{"not":"an array"}"#) {
        println!("✗ {e}");
    }
    println!();

    // Example 3: A record missing a field
    println!("--- Example 3: Record missing a required field ---");
    match StationDb::load_from_str(r#"[{"sno":"500101001","sna":"YouBike2.0_x"}]"#) {
        Err(StationError::MalformedRecord(MalformedRecordError { index, ref problem })) => {
            println!("✗ record {index}: {problem}")
        }
        other => println!("  {other:?}"),
    }
    println!();

    // Example 4: No matches is a normal result
    println!("--- Example 4: Searching for something absent ---");
    let db = StationDb::load()?;
    let hits = db.search("kaohsiung");
    print!("{}", present::format_search_report("kaohsiung", &hits));

    Ok(())
}
