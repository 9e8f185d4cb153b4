// crates/ubike-core/src/lib.rs

//! # ubike-core
//!
//! An in-memory database of YouBike stations loaded from a static JSON
//! snapshot of the public availability feed.
//!
//! The crate is split the same way the data flows:
//!
//! - [`loader`] turns a JSON array into a [`StationDb`] (feature `json`).
//! - [`area`] derives the distinct service areas.
//! - [`search`] runs case-insensitive substring queries and id lookups.
//! - [`geo`] answers "which active stations are closest to me".
//! - [`present`] renders records and lists as plain text for terminals.
//!
//! ```no_run
//! use ubike_core::{present, StationDb, StationSearch};
//!
//! let db = StationDb::load_from_path("sample_data.json")?;
//! let hits = db.search("daan");
//! print!("{}", present::format_search_report("daan", &hits));
//! # Ok::<(), ubike_core::StationError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod area;
pub mod error;
pub mod geo;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
pub mod present;
pub mod search;
pub mod text;

// Re-exports
pub use crate::area::{build_area_index, AreaIndex};
pub use crate::error::{DataSourceError, MalformedRecordError, RecordProblem, Result, StationError};
pub use crate::geo::{Coordinates, StationWithDistance};
pub use crate::model::{StationDb, StationRecord};
pub use crate::search::StationSearch;

/// Convenience imports for demos and downstream binaries.
pub mod prelude {
    pub use crate::area::{build_area_index, AreaIndex};
    pub use crate::error::{Result, StationError};
    pub use crate::geo::{Coordinates, StationWithDistance};
    pub use crate::model::{StationDb, StationRecord};
    pub use crate::present;
    pub use crate::search::StationSearch;
}
