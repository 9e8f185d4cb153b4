// crates/ubike-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, optional gzip) and delegates record
//! mapping to [`record`].

use crate::error::{DataSourceError, Result};
use crate::model::StationDb;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod record;

pub use record::parse_records;

/// File name of the bundled station snapshot, resolved against the working
/// directory.
pub const DEFAULT_DATA_FILE: &str = "sample_data.json";

// Single in-process cache so the default snapshot is parsed at most once.
static STATION_DB_CACHE: OnceCell<StationDb> = OnceCell::new();

impl StationDb {
    pub fn default_data_path() -> PathBuf {
        PathBuf::from(DEFAULT_DATA_FILE)
    }

    /// Loads the default snapshot, reading it from disk only on first use.
    pub fn load() -> Result<Self> {
        STATION_DB_CACHE
            .get_or_try_init(|| Self::load_from_path(Self::default_data_path()))
            .cloned()
    }

    /// Loads a snapshot from `path`.
    ///
    /// Files ending in `.gz` are decompressed on the fly when the `compact`
    /// feature is enabled. The file handle is released before this returns,
    /// whether or not parsing succeeded.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading station data");
        let db = {
            let reader = open_stream(path)?;
            Self::load_from_reader(reader)?
        };
        info!(path = %path.display(), stations = db.len(), "loaded stations");
        Ok(db)
    }

    /// Reads `reader` to the end and parses it as a station array.
    pub fn load_from_reader(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(DataSourceError::Io)?;
        Self::load_from_str(&text)
    }

    /// Parses an in-memory JSON document.
    pub fn load_from_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text).map_err(DataSourceError::Json)?;
        Ok(Self::new(parse_records(value)?))
    }
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPER
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and wraps `.gz` files in a gzip decoder.
/// Returns a generic reader so the caller doesn't care about compression.
fn open_stream(path: &Path) -> std::result::Result<Box<dyn Read>, DataSourceError> {
    let file = File::open(path).map_err(|source| DataSourceError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if path.extension().is_some_and(|ext| ext == "gz") {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}
