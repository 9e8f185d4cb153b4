//! Basic usage example for ubike-rs
//!
//! This example demonstrates how to:
//! - Load the station snapshot
//! - Search stations by name, address or area
//! - List areas
//! - Look up favourite stations and the closest ones to a point
//!
//! Run from the repository root so `sample_data.json` is found.

use ubike_rs::geo;
use ubike_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== ubike-rs Basic Usage Example ===\n");

    // Load the database
    println!("Loading station snapshot...");
    let db = StationDb::load()?;
    println!("✓ Loaded {} stations\n", db.len());

    // Example 1: Substring search
    println!("--- Example 1: Search for 'mrt' ---");
    let hits = db.search("mrt");
    print!("{}", present::format_search_report("mrt", &hits));
    println!();

    // Example 2: Chinese query against the local names
    println!("--- Example 2: Search for '科技大樓' ---");
    for s in db.search("科技大樓") {
        println!("{} -> {}", s.id, present::display_name(&s.name_en));
    }
    println!();

    // Example 3: Areas
    println!("--- Example 3: Areas ---");
    print!("{}", present::format_area_list(&db.areas()));
    println!();

    // Example 4: Favourites (unknown and inactive ids are skipped)
    println!("--- Example 4: Favourite stations ---");
    for s in db.find_by_ids(&["500101232", "500101105", "500112054"]) {
        println!(
            "{}: {} bikes, {} spots",
            present::display_name(&s.name_en),
            s.bikes_available,
            s.spots_available
        );
    }
    println!();

    // Example 5: Nearest stations to Da'an Forest Park
    println!("--- Example 5: Nearest stations ---");
    let park = Coordinates::new(25.0300, 121.5358);
    for entry in db.nearest(park, 3) {
        print!("{}", present::format_nearby(&entry));
    }
    println!();

    // Example 6: Favourites seen from the park, then the closest others
    println!("--- Example 6: Favourites near the park ---");
    let favourite_ids = ["500101232", "500101105"];
    for entry in geo::with_distance(db.find_by_ids(&favourite_ids), park) {
        print!("{}", present::format_nearby(&entry));
    }
    for entry in db.nearest_excluding(park, 2, &favourite_ids) {
        print!("{}", present::format_nearby(&entry));
    }

    Ok(())
}
