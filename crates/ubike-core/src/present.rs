// crates/ubike-core/src/present.rs

//! Plain-text rendering for terminals.
//!
//! Nothing here does I/O; every function returns the text it would print.

use crate::area::AreaIndex;
use crate::geo::StationWithDistance;
use crate::model::StationRecord;
use std::fmt::Write as _;

/// Product-line tag the feed prepends to every station name.
pub const BRAND_PREFIX: &str = "YouBike2.0_";

/// How many station blocks a search report shows.
pub const DISPLAY_LIMIT: usize = 20;

/// A station name without the branding prefix.
///
/// ```
/// use ubike_core::present::display_name;
///
/// assert_eq!(display_name("YouBike2.0_Tech Building"), "Tech Building");
/// assert_eq!(display_name("Tech Building"), "Tech Building");
/// ```
pub fn display_name(raw: &str) -> &str {
    raw.strip_prefix(BRAND_PREFIX).unwrap_or(raw)
}

/// One station, one field per line, followed by a blank line.
pub fn format_station(s: &StationRecord) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "  ID: {}", s.id);
    let _ = writeln!(out, "  Name: {}", display_name(&s.name_local));
    let _ = writeln!(out, "  English: {}", display_name(&s.name_en));
    let _ = writeln!(out, "  Area: {} ({})", s.area_local, s.area_en);
    let _ = writeln!(out, "  Address: {}", s.address_local);
    let _ = writeln!(out, "  Bikes: {}, Spots: {}", s.bikes_available, s.spots_available);
    out.push('\n');
    out
}

/// Areas sorted by local code, one `area_local (area_en)` line each.
pub fn format_area_list(index: &AreaIndex) -> String {
    let mut entries: Vec<(&String, &String)> = index.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut out = String::new();
    for (local, en) in entries {
        let _ = writeln!(out, "  {local} ({en})");
    }
    out
}

/// The "... and K more" line, or nothing when every match was shown.
pub fn format_summary(total_matches: usize, shown_count: usize) -> String {
    if total_matches > shown_count {
        format!("... and {} more\n", total_matches - shown_count)
    } else {
        String::new()
    }
}

/// Header, at most [`DISPLAY_LIMIT`] station blocks, then the summary line.
pub fn format_search_report(query: &str, matches: &[&StationRecord]) -> String {
    let mut out = format!("Found {} stations matching '{}':\n\n", matches.len(), query);
    let shown = matches.len().min(DISPLAY_LIMIT);
    for s in &matches[..shown] {
        out.push_str(&format_station(s));
    }
    out.push_str(&format_summary(matches.len(), shown));
    out
}

/// `"850 m"` below one kilometre, `"1.2 km"` above.
pub fn format_distance(metres: u32) -> String {
    if metres < 1000 {
        format!("{metres} m")
    } else {
        format!("{:.1} km", f64::from(metres) / 1000.0)
    }
}

/// Maps a bearing in degrees to one of eight compass points.
pub fn compass_point(bearing_deg: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let normalized = bearing_deg.rem_euclid(360.0);
    let sector = ((normalized + 22.5) / 45.0) as usize % POINTS.len();
    POINTS[sector]
}

/// A station block preceded by its distance and direction.
pub fn format_nearby(entry: &StationWithDistance<'_>) -> String {
    let mut out = format!(
        "  Distance: {} {}\n",
        format_distance(entry.distance_m),
        compass_point(entry.bearing_deg)
    );
    out.push_str(&format_station(entry.station));
    out
}
