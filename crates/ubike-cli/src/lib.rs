//! ubike-cli
//! =========
//!
//! Command-line interface for the `ubike-core` station database.
//!
//! The binary (`ubike`) only parses arguments and sets up logging; the work
//! happens in [`run`], which writes to caller-supplied streams so it can be
//! driven from tests.
//!
//! Basic usage:
//!
//! ```text
//! ubike                      # usage and examples
//! ubike --areas              # every district, sorted
//! ubike 科技大樓              # substring search
//! ubike --station 500101232  # one station by id
//! ubike --near 25.026,121.543 --count 3
//! ubike --station 500101232 --near 25.026,121.543
//! ```
//!
//! For programmatic access use the [`ubike_core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::{CliArgs, Mode};
use anyhow::Context;
use std::io::Write;
use ubike_core::geo;
use ubike_core::present;
use ubike_core::{StationDb, StationRecord, StationSearch};

pub const USAGE: &str = "\
Usage:
  ubike <search term>
  ubike --areas
  ubike --station <ID>
  ubike --near <LAT,LNG> [--count <N>]
  ubike --station <ID> --near <LAT,LNG> [--count <N>]

Examples:
  ubike 科技大樓
  ubike 'Technology'
  ubike 大安區
  ubike 'Daan'
";

/// Executes one invocation. Results go to `out`, per-item notices to `err`.
pub fn run(args: &CliArgs, out: &mut impl Write, err: &mut impl Write) -> anyhow::Result<()> {
    match args.mode() {
        // No data needed just to explain usage.
        Mode::Usage => out.write_all(USAGE.as_bytes())?,

        Mode::Areas => {
            let db = load_db(args)?;
            writeln!(out, "Available areas:")?;
            write!(out, "{}", present::format_area_list(&db.areas()))?;
        }

        Mode::Search(query) => {
            let db = load_db(args)?;
            let hits = db.search(&query);
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&hits)?)?;
            } else {
                write!(out, "{}", present::format_search_report(&query, &hits))?;
            }
        }

        Mode::Stations(ids) => {
            let db = load_db(args)?;
            let found = lookup(&db, &ids, err)?;
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&found)?)?;
            } else {
                for s in found {
                    write!(out, "{}", present::format_station(s))?;
                }
            }
        }

        Mode::Near { origin, count } => {
            let db = load_db(args)?;
            let hits = db.nearest(origin, count);
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&hits)?)?;
            } else {
                writeln!(
                    out,
                    "Nearest {} stations to {},{}:\n",
                    hits.len(),
                    origin.lat,
                    origin.lng
                )?;
                for entry in &hits {
                    write!(out, "{}", present::format_nearby(entry))?;
                }
            }
        }

        Mode::Favourites { ids, origin, count } => {
            let db = load_db(args)?;
            let favourites = lookup(&db, &ids, err)?;
            let others = db.nearest_excluding(origin, count, &ids);
            if args.json {
                let favourites: Vec<serde_json::Value> = favourites
                    .iter()
                    .map(|s| match geo::locate(s, origin) {
                        Some(entry) => serde_json::to_value(entry),
                        None => Ok(serde_json::json!({ "station": s })),
                    })
                    .collect::<Result<_, _>>()?;
                let doc = serde_json::json!({ "favourites": favourites, "nearest": others });
                writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
            } else {
                writeln!(out, "Favourite stations near {},{}:\n", origin.lat, origin.lng)?;
                for s in &favourites {
                    match geo::locate(s, origin) {
                        Some(entry) => write!(out, "{}", present::format_nearby(&entry))?,
                        None => write!(out, "{}", present::format_station(s))?,
                    }
                }
                writeln!(
                    out,
                    "Nearest {} other stations to {},{}:\n",
                    others.len(),
                    origin.lat,
                    origin.lng
                )?;
                for entry in &others {
                    write!(out, "{}", present::format_nearby(entry))?;
                }
            }
        }
    }

    Ok(())
}

/// Resolves ids in request order. Unknown ids are reported on `err`.
fn lookup<'a>(
    db: &'a StationDb,
    ids: &[String],
    err: &mut impl Write,
) -> anyhow::Result<Vec<&'a StationRecord>> {
    let mut found = Vec::with_capacity(ids.len());
    for id in ids {
        match db.find_by_id(id) {
            Some(s) => found.push(s),
            None => writeln!(err, "No station found for: {id}")?,
        }
    }
    Ok(found)
}

fn load_db(args: &CliArgs) -> anyhow::Result<StationDb> {
    match &args.data {
        Some(path) => StationDb::load_from_path(path)
            .with_context(|| format!("failed to load station data from {}", path.display())),
        None => StationDb::load().with_context(|| {
            format!(
                "failed to load station data from {}",
                StationDb::default_data_path().display()
            )
        }),
    }
}
