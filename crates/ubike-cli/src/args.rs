use clap::{ArgAction, Parser};
use std::path::PathBuf;
use ubike_core::geo::NEAREST_DEFAULT_COUNT;
use ubike_core::Coordinates;

/// CLI arguments for ubike
#[derive(Debug, Parser)]
#[command(
    name = "ubike",
    version,
    about = "Find YouBike stations by name, address or area",
    after_help = "Options must come before the search text; everything after the first word is part of the query."
)]
pub struct CliArgs {
    /// Path to the station snapshot, a JSON array (.json or .json.gz)
    #[arg(short = 'd', long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// List every distinct area, sorted by its local name
    #[arg(long, conflicts_with_all = ["station", "near", "json"])]
    pub areas: bool,

    /// Show the station with this id (repeatable). With --near, these are
    /// shown with their distance and left out of the nearest list.
    #[arg(long = "station", value_name = "ID", conflicts_with = "query")]
    pub station: Vec<String>,

    /// Show the active stations closest to a position
    #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true, conflicts_with = "query")]
    pub near: Option<Coordinates>,

    /// How many stations --near returns
    #[arg(long, value_name = "N", default_value_t = NEAREST_DEFAULT_COUNT, requires = "near")]
    pub count: usize,

    /// Print results as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Search text, matched case-insensitively against names, addresses and areas
    #[arg(value_name = "QUERY", trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,
}

/// What the invocation asks for, after clap has ruled out conflicting flags.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Usage,
    Areas,
    Stations(Vec<String>),
    Near { origin: Coordinates, count: usize },
    Favourites {
        ids: Vec<String>,
        origin: Coordinates,
        count: usize,
    },
    Search(String),
}

impl CliArgs {
    pub fn mode(&self) -> Mode {
        if self.areas && !self.query.is_empty() {
            // `ubike --areas lane` searches for the whole argument line
            Mode::Search(format!("--areas {}", self.query.join(" ")))
        } else if self.areas {
            Mode::Areas
        } else if let (false, Some(origin)) = (self.station.is_empty(), self.near) {
            Mode::Favourites {
                ids: self.station.clone(),
                origin,
                count: self.count,
            }
        } else if !self.station.is_empty() {
            Mode::Stations(self.station.clone())
        } else if let Some(origin) = self.near {
            Mode::Near {
                origin,
                count: self.count,
            }
        } else if !self.query.is_empty() {
            Mode::Search(self.query.join(" "))
        } else {
            Mode::Usage
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
